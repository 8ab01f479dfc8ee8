//! Goal - Request, processor outcome, and response envelope

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::MediaRecommendations;

/// Inbound goal submission
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct GoalRequest {
    /// Free-text goal, 1 to 500 characters
    #[serde(default)]
    #[schema(min_length = 1, max_length = 500, example = "Learn to play guitar")]
    pub goal: String,
}

/// Result of processing a goal, before it is wrapped in an envelope
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoalOutcome {
    pub response: String,
    pub media: Option<MediaRecommendations>,
}

impl GoalOutcome {
    pub fn new(response: impl Into<String>, media: Option<MediaRecommendations>) -> Self {
        Self {
            response: response.into(),
            media,
        }
    }

    /// Outcome carrying only text, no media
    pub fn text_only(response: impl Into<String>) -> Self {
        Self::new(response, None)
    }
}

/// Uniform success/error envelope returned for every goal submission
///
/// Exactly one of `response` and `error` is populated, depending on `success`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GoalResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media_recommendations: Option<MediaRecommendations>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub timestamp: DateTime<Utc>,
}

impl GoalResponse {
    /// Successful envelope built from a processor outcome
    pub fn success(outcome: GoalOutcome) -> Self {
        Self {
            success: true,
            response: Some(outcome.response),
            media_recommendations: outcome.media,
            error: None,
            timestamp: Utc::now(),
        }
    }

    /// Failed envelope carrying an error message
    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            response: None,
            media_recommendations: None,
            error: Some(error.into()),
            timestamp: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::MediaItem;

    #[test]
    fn test_failure_omits_response_fields() {
        let envelope = GoalResponse::failure("Invalid request: goal is required");
        let json = serde_json::to_value(&envelope).unwrap();

        assert_eq!(json["success"], false);
        assert_eq!(json["error"], "Invalid request: goal is required");
        assert!(json.get("response").is_none());
        assert!(json.get("mediaRecommendations").is_none());
        assert!(json.get("timestamp").is_some());
    }

    #[test]
    fn test_success_without_media_omits_media() {
        let envelope = GoalResponse::success(GoalOutcome::text_only("Keep going!"));
        let json = serde_json::to_value(&envelope).unwrap();

        assert_eq!(json["success"], true);
        assert_eq!(json["response"], "Keep going!");
        assert!(json.get("mediaRecommendations").is_none());
        assert!(json.get("error").is_none());
    }

    #[test]
    fn test_envelope_survives_serialization() {
        let media = MediaRecommendations {
            podcasts: vec![MediaItem::new("Test Podcast")
                .with_platform("Spotify")
                .with_link("https://spotify.com")],
            books: vec![MediaItem::new("Test Book").with_description("A test book")],
            ..Default::default()
        };
        let envelope = GoalResponse::success(GoalOutcome::new("Great goal!", Some(media)));

        let wire = serde_json::to_string(&envelope).unwrap();
        assert!(wire.contains("\"mediaRecommendations\""));
        assert!(!wire.contains("\"error\""));

        let decoded: GoalResponse = serde_json::from_str(&wire).unwrap();
        assert_eq!(decoded, envelope);
    }

    #[test]
    fn test_request_missing_goal_decodes_empty() {
        let request: GoalRequest = serde_json::from_str("{}").unwrap();
        assert!(request.goal.is_empty());
    }
}

//! Anthropic Goal Processor
//!
//! Live-mode implementation of `GoalProcessor` that calls the Anthropic
//! Messages API. One attempt per goal; no retries and no timeout override.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use imgonna::{DomainError, GoalOutcome, GoalProcessor, MediaRecommendations};

pub const DEFAULT_API_URL: &str = "https://api.anthropic.com/v1/messages";
const MODEL: &str = "claude-3-5-sonnet-20241022";
const MAX_TOKENS: u32 = 2500;
const API_VERSION: &str = "2023-06-01";

/// Goal processor backed by the Anthropic Messages API
#[derive(Clone)]
pub struct AnthropicProcessor {
    client: Client,
    api_key: String,
    api_url: String,
}

impl AnthropicProcessor {
    /// Creates a processor using the provided API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            api_url: DEFAULT_API_URL.to_string(),
        }
    }

    /// Overrides the messages endpoint.
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }

    async fn call_messages_api(&self, goal: &str) -> Result<MessagesResponse, DomainError> {
        let request = MessagesRequest {
            model: MODEL,
            max_tokens: MAX_TOKENS,
            messages: vec![Message {
                role: "user",
                content: build_prompt(goal),
            }],
        };

        let response = self
            .client
            .post(&self.api_url)
            .header("content-type", "application/json")
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", API_VERSION)
            .json(&request)
            .send()
            .await
            .map_err(|e| DomainError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read error body".to_string());
            tracing::error!(
                status_code = status.as_u16(),
                response_body = %body,
                goal,
                "Anthropic API request failed"
            );
            return Err(DomainError::UpstreamStatus {
                status: status.as_u16(),
                body,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| DomainError::Transport(e.to_string()))?;

        serde_json::from_str(&body).map_err(|e| DomainError::Decode(e.to_string()))
    }
}

#[async_trait]
impl GoalProcessor for AnthropicProcessor {
    async fn process_goal(&self, goal: &str) -> Result<GoalOutcome, DomainError> {
        tracing::debug!(goal, "Making API call to Anthropic");

        let envelope = self.call_messages_api(goal).await?;

        if let Some(usage) = &envelope.usage {
            tracing::debug!(
                input_tokens = usage.input_tokens,
                output_tokens = usage.output_tokens,
                "Anthropic usage"
            );
        }

        extract_outcome(envelope)
    }

    fn mode(&self) -> &str {
        "anthropic"
    }
}

// ============================================
// Request/Response Types
// ============================================

#[derive(Serialize)]
struct MessagesRequest {
    model: &'static str,
    max_tokens: u32,
    messages: Vec<Message>,
}

#[derive(Serialize)]
struct Message {
    role: &'static str,
    content: String,
}

#[derive(Debug, Deserialize)]
struct MessagesResponse {
    #[serde(default)]
    content: Vec<ContentBlock>,
    #[serde(default)]
    usage: Option<Usage>,
}

#[derive(Debug, Deserialize)]
struct ContentBlock {
    #[serde(default)]
    text: String,
}

#[derive(Debug, Deserialize)]
struct Usage {
    #[serde(default)]
    input_tokens: u32,
    #[serde(default)]
    output_tokens: u32,
}

/// JSON shape the prompt asks the model to return
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CoachingPayload {
    #[serde(default, deserialize_with = "imgonna::null_as_empty")]
    goal_response: String,
    #[serde(default, deserialize_with = "imgonna::null_as_empty")]
    media_recommendations: MediaRecommendations,
}

// ============================================
// Helper Functions
// ============================================

/// Build the instruction prompt; the goal is interpolated as-is.
fn build_prompt(goal: &str) -> String {
    format!(
        r#"You are a helpful AI assistant that provides guidance and motivation for personal goals, along with relevant media recommendations.

A user has shared this goal: "{goal}"

Please provide a response in the following JSON format:
{{
  "goalResponse": "Your supportive response here (under 200 words)",
  "mediaRecommendations": {{
    "podcasts": [
      {{"title": "Podcast Name", "link": "spotify/apple podcast link", "platform": "Spotify", "description": "Brief description"}},
      ... (5-10 items)
    ],
    "streaming": [
      {{"title": "Show/Movie Name", "platform": "Netflix/Hulu/YouTube/etc", "description": "Brief description"}},
      ... (5-10 items)
    ],
    "books": [
      {{"title": "Book Title by Author", "link": "amazon link if possible", "description": "Brief description"}},
      ... (5-10 items)
    ],
    "websites": [
      {{"title": "Website Name", "link": "https://...", "description": "Brief description"}},
      ... (5-10 items)
    ]
  }}
}}

For the goal response:
1. Acknowledge their goal positively
2. Offer 2-3 specific, practical steps they can take
3. Include encouragement and motivation
4. Keep it concise and actionable

For media recommendations:
- Provide 5-10 specific, real titles for each category
- For podcasts: Include Spotify or Apple Podcasts links when possible
- For streaming: Indicate the platform (Netflix, Hulu, Prime Video, YouTube, etc.)
- For books: Include Amazon links when possible
- For websites: Provide direct URLs
- Make all recommendations highly relevant to the stated goal

Return ONLY valid JSON, no additional text."#
    )
}

/// Turn the first content block into an outcome.
///
/// Text that is not the requested JSON shape is returned as-is without media.
fn extract_outcome(envelope: MessagesResponse) -> Result<GoalOutcome, DomainError> {
    let text = match envelope.content.into_iter().next() {
        Some(block) if !block.text.is_empty() => block.text,
        _ => return Err(DomainError::UnexpectedFormat),
    };

    match serde_json::from_str::<CoachingPayload>(&text) {
        Ok(payload) => {
            let media = payload.media_recommendations;
            tracing::debug!(
                podcasts_count = media.podcasts.len(),
                streaming_count = media.streaming.len(),
                books_count = media.books.len(),
                websites_count = media.websites.len(),
                total = media.total(),
                "Parsed response with media recommendations"
            );
            Ok(GoalOutcome::new(payload.goal_response, Some(media)))
        }
        Err(e) => {
            tracing::warn!(error = %e, raw_response = %text, "Response was not the expected JSON");
            Ok(GoalOutcome::text_only(text))
        }
    }
}

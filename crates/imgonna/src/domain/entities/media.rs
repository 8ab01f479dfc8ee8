//! Media - Recommended resources for a goal

use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

/// A single recommended resource
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MediaItem {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl MediaItem {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            link: None,
            platform: None,
            description: None,
        }
    }

    pub fn with_link(mut self, link: impl Into<String>) -> Self {
        self.link = Some(link.into());
        self
    }

    pub fn with_platform(mut self, platform: impl Into<String>) -> Self {
        self.platform = Some(platform.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Media recommendations grouped into four categories
///
/// Categories missing from an upstream payload, or sent as `null`, decode
/// as empty lists.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MediaRecommendations {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub podcasts: Vec<MediaItem>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub streaming: Vec<MediaItem>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub books: Vec<MediaItem>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub websites: Vec<MediaItem>,
}

/// Deserialize a value that may be `null` into its default
pub fn null_as_empty<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl MediaRecommendations {
    /// Total number of items across all categories
    pub fn total(&self) -> usize {
        self.podcasts.len() + self.streaming.len() + self.books.len() + self.websites.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unset_item_fields_are_omitted() {
        let item = MediaItem::new("Atomic Habits").with_link("https://example.com/book");
        let json = serde_json::to_value(&item).unwrap();

        assert_eq!(json["title"], "Atomic Habits");
        assert_eq!(json["link"], "https://example.com/book");
        assert!(json.get("platform").is_none());
        assert!(json.get("description").is_none());
    }

    #[test]
    fn test_missing_categories_decode_empty() {
        let media: MediaRecommendations =
            serde_json::from_str(r#"{"podcasts":[{"title":"A Podcast"}]}"#).unwrap();

        assert_eq!(media.podcasts.len(), 1);
        assert!(media.streaming.is_empty());
        assert!(media.books.is_empty());
        assert!(media.websites.is_empty());
        assert_eq!(media.total(), 1);
    }

    #[test]
    fn test_null_categories_decode_empty() {
        let media: MediaRecommendations = serde_json::from_str(
            r#"{"podcasts":[{"title":"P"}],"streaming":null,"books":null,"websites":[]}"#,
        )
        .unwrap();

        assert_eq!(media.podcasts.len(), 1);
        assert!(media.streaming.is_empty());
        assert!(media.books.is_empty());
    }

    #[test]
    fn test_item_requires_title() {
        let result = serde_json::from_str::<MediaItem>(r#"{"link":"https://example.com"}"#);
        assert!(result.is_err());
    }
}

//! Infrastructure Adapters
//!
//! Implementations of domain ports for external systems.

pub mod anthropic;
pub mod mock;

use std::sync::Arc;

use imgonna::GoalProcessor;

use crate::config::AppConfig;

// Re-exports
pub use anthropic::AnthropicProcessor;
pub use mock::MockProcessor;

/// Select the goal processor for the process lifetime
///
/// A missing, empty, or placeholder credential selects mock mode.
pub fn build_processor(config: &AppConfig) -> Arc<dyn GoalProcessor> {
    match config.live_api_key() {
        Some(api_key) => {
            tracing::info!("🤖 Anthropic processor initialized");
            Arc::new(AnthropicProcessor::new(api_key).with_api_url(&config.api_url))
        }
        None => {
            tracing::warn!("⚠️  No usable CLAUDE_API_KEY set - using mock responses");
            Arc::new(MockProcessor)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_follows_credential() {
        let mock = build_processor(&AppConfig::default());
        assert_eq!(mock.mode(), "mock");

        let placeholder = build_processor(&AppConfig {
            api_key: Some("your-claude-api-key".to_string()),
            ..AppConfig::default()
        });
        assert_eq!(placeholder.mode(), "mock");

        let live = build_processor(&AppConfig {
            api_key: Some("sk-ant-test".to_string()),
            ..AppConfig::default()
        });
        assert_eq!(live.mode(), "anthropic");
    }
}

//! Mock Goal Processor
//!
//! Network-free processor used when no upstream credential is configured.

use async_trait::async_trait;

use imgonna::{mock_outcome, DomainError, GoalOutcome, GoalProcessor};

/// Deterministic processor returning canned coaching responses
#[derive(Debug, Clone, Copy, Default)]
pub struct MockProcessor;

#[async_trait]
impl GoalProcessor for MockProcessor {
    async fn process_goal(&self, goal: &str) -> Result<GoalOutcome, DomainError> {
        tracing::debug!(goal, "Using mock response");
        Ok(mock_outcome(goal))
    }

    fn mode(&self) -> &str {
        "mock"
    }
}

//! Goal Processor Port
//!
//! Abstract interface for turning a validated goal into a coaching response.
//! Implementations can be swapped between the deterministic mock, the live
//! Anthropic adapter, or any future provider without touching the handler.

use async_trait::async_trait;

use crate::domain::errors::DomainError;
use crate::domain::GoalOutcome;

/// Goal processing interface
///
/// Implementations must be safe to share across concurrent requests; they
/// hold only read-only configuration after construction.
///
/// # Example
///
/// ```rust,ignore
/// use imgonna::{GoalProcessor, GoalOutcome, DomainError};
///
/// struct EchoProcessor;
///
/// #[async_trait]
/// impl GoalProcessor for EchoProcessor {
///     async fn process_goal(&self, goal: &str) -> Result<GoalOutcome, DomainError> {
///         Ok(GoalOutcome::text_only(goal))
///     }
///
///     fn mode(&self) -> &str {
///         "echo"
///     }
/// }
/// ```
#[async_trait]
pub trait GoalProcessor: Send + Sync {
    /// Produce a response text and optional media for a goal
    async fn process_goal(&self, goal: &str) -> Result<GoalOutcome, DomainError>;

    /// Short label for the processing mode (e.g., "mock", "anthropic")
    fn mode(&self) -> &str;
}

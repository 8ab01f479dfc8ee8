//! Goal Application Service
//!
//! Validates inbound payloads, delegates to the configured `GoalProcessor`,
//! and owns the translation from domain errors to HTTP status and envelope.

use std::sync::Arc;

use axum::http::StatusCode;

use imgonna::{validate_goal, DomainError, GoalProcessor, GoalRequest, GoalResponse};

/// Application service for goal submissions
pub struct GoalService {
    processor: Arc<dyn GoalProcessor>,
}

impl GoalService {
    pub fn new(processor: Arc<dyn GoalProcessor>) -> Self {
        Self { processor }
    }

    /// Processing mode of the underlying processor
    pub fn mode(&self) -> &str {
        self.processor.mode()
    }

    /// Handle a raw goal submission body
    pub async fn submit(&self, payload: &[u8]) -> (StatusCode, GoalResponse) {
        let request = match decode_request(payload) {
            Ok(request) => request,
            Err(e) => return invalid_request(&e),
        };

        let goal = match validate_goal(&request) {
            Ok(goal) => goal,
            Err(e) => return invalid_request(&e),
        };

        match self.processor.process_goal(goal).await {
            Ok(outcome) => (StatusCode::OK, GoalResponse::success(outcome)),
            Err(e) => {
                tracing::error!(error = %e, mode = self.mode(), "Failed to process goal");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    GoalResponse::failure(format!("Failed to process goal: {}", e)),
                )
            }
        }
    }
}

fn decode_request(payload: &[u8]) -> Result<GoalRequest, DomainError> {
    serde_json::from_slice(payload).map_err(|e| DomainError::Validation(e.to_string()))
}

fn invalid_request(error: &DomainError) -> (StatusCode, GoalResponse) {
    tracing::debug!(error = %error, "Rejected goal request");
    (
        StatusCode::BAD_REQUEST,
        GoalResponse::failure(format!("Invalid request: {}", error)),
    )
}

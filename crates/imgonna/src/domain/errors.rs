//! Domain Errors
//!
//! Error types for goal validation and processing.

use thiserror::Error;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("{0}")]
    Validation(String),

    #[error("failed to make request: {0}")]
    Transport(String),

    #[error("API request failed with status {status}: {body}")]
    UpstreamStatus { status: u16, body: String },

    #[error("failed to parse response: {0}")]
    Decode(String),

    #[error("unexpected response format from upstream")]
    UnexpectedFormat,
}

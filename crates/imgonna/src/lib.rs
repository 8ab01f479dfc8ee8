//! imgonna Domain Library
//!
//! Core domain types and interfaces for the imgonna goal coaching service.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain/`): Pure types and logic
//!   - `entities/`: Goal request, response envelope, media recommendations
//!   - `services/`: Goal validation and the deterministic mock generator
//!   - `errors/`: Domain-specific error types
//!
//! - **Ports** (`ports/`): Abstract interfaces (traits)
//!   - `services/`: Goal processing interface
//!
//! # Usage
//!
//! ```rust,ignore
//! use imgonna::{GoalProcessor, GoalResponse, validate_goal};
//! ```

pub mod domain;
pub mod ports;

// Re-export commonly used types
pub use domain::{
    mock_outcome, null_as_empty, validate_goal, DomainError, GoalOutcome, GoalRequest,
    GoalResponse, MediaItem, MediaRecommendations, MAX_GOAL_CHARS,
};
pub use ports::GoalProcessor;

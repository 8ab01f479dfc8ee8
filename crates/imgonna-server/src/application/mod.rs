//! Application Layer (Use Cases)
//!
//! Orchestrates validation, goal processing, and response shaping.

mod goal_service;

pub use goal_service::GoalService;

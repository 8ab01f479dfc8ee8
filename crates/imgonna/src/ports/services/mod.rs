//! Service Ports
//!
//! Abstract interfaces for external services.

mod goal_processor;

pub use goal_processor::*;

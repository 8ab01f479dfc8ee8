//! Domain Services
//!
//! Stateless domain logic:
//! - Validation: goal length and presence rules
//! - Mock: deterministic, network-free coaching responses

mod mock;
mod validation;

pub use mock::*;
pub use validation::*;

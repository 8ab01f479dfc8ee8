//! Domain Entities
//!
//! - Goal: inbound request, processor outcome, and response envelope
//! - Media: recommended resources grouped by category

mod goal;
mod media;

pub use goal::*;
pub use media::*;

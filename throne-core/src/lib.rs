//! # throne-core
//!
//! Foundation crate for the Throne session prediction engine.
//! Defines session input types, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod session;

// Re-export the most commonly used types at the crate root.
pub use config::ThroneConfig;
pub use errors::{ThroneError, ThroneResult};
pub use session::{SessionEvent, SessionRecord};

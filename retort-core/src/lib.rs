//! # retort-core
//!
//! Foundation crate for the Retort answering engine.
//! Defines all models, intent labels, errors, config, constants, and traits.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod intent;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::RetortConfig;
pub use errors::{RetortError, RetortResult};
pub use intent::Intent;
pub use models::{Entry, Message, Outcome, Reply, Role};

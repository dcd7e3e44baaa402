//! Data models shared across the workspace.

mod entry;
mod message;
mod reply;

pub use entry::Entry;
pub use message::{Message, Role};
pub use reply::{Outcome, Reply};

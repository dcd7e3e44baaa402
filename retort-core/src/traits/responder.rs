use crate::errors::RetortResult;
use crate::models::{Message, Reply};

/// A component that can answer one conversation turn.
pub trait IResponder {
    /// Process a raw user utterance together with its trailing
    /// conversation context.
    fn respond(&self, raw_text: &str, context: &[Message]) -> RetortResult<Reply>;
}

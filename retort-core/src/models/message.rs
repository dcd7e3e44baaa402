use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Who produced a conversation message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    User,
    Bot,
}

/// A single conversation message.
///
/// Conversation history is owned by the session layer; the core only reads
/// a bounded trailing window passed in by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
    /// Wall-clock timestamp, if the session layer records one. The scorer
    /// only uses relative order within the window.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
}

impl Message {
    /// A user-authored message stamped now.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
            timestamp: Some(Utc::now()),
        }
    }

    /// A bot-authored message stamped now.
    pub fn bot(content: impl Into<String>) -> Self {
        Self {
            role: Role::Bot,
            content: content.into(),
            timestamp: Some(Utc::now()),
        }
    }

    /// The trailing window of at most `n` messages, oldest first.
    pub fn trailing_window(messages: &[Message], n: usize) -> &[Message] {
        let start = messages.len().saturating_sub(n);
        &messages[start..]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_window_keeps_most_recent() {
        let messages: Vec<Message> = (0..8).map(|i| Message::user(format!("m{i}"))).collect();
        let window = Message::trailing_window(&messages, 5);
        assert_eq!(window.len(), 5);
        assert_eq!(window[0].content, "m3");
        assert_eq!(window[4].content, "m7");
    }

    #[test]
    fn trailing_window_shorter_history() {
        let messages = vec![Message::user("only")];
        assert_eq!(Message::trailing_window(&messages, 5).len(), 1);
        assert!(Message::trailing_window(&[], 5).is_empty());
    }
}

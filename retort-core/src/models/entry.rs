use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A stored question/answer/tags record in the corpus.
///
/// An entry's identity is its position in the corpus store. Positions are
/// stable for the process lifetime and never reused; deletion is
/// unsupported.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    /// The question this entry answers. Non-empty after trimming.
    pub question: String,
    /// The canned answer, returned verbatim on a match. Non-empty after trimming.
    pub answer: String,
    /// Lowercased tags, insertion-ordered, deduplicated.
    pub tags: Vec<String>,
    /// When this entry was created.
    pub created_at: DateTime<Utc>,
}

impl Entry {
    /// Build an entry, trimming both text fields and normalizing tags
    /// (trim, lowercase, drop empties, dedup preserving first occurrence).
    pub fn new(question: &str, answer: &str, tags: &[String]) -> Self {
        let mut normalized: Vec<String> = Vec::with_capacity(tags.len());
        for tag in tags {
            let t = tag.trim().to_lowercase();
            if !t.is_empty() && !normalized.contains(&t) {
                normalized.push(t);
            }
        }

        Self {
            question: question.trim().to_string(),
            answer: answer.trim().to_string(),
            tags: normalized,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_trims_and_normalizes_tags() {
        let entry = Entry::new(
            "  What is Retort?  ",
            " An answering engine. ",
            &[" Help ".into(), "help".into(), String::new(), "FAQ".into()],
        );
        assert_eq!(entry.question, "What is Retort?");
        assert_eq!(entry.answer, "An answering engine.");
        assert_eq!(entry.tags, vec!["help".to_string(), "faq".to_string()]);
    }
}

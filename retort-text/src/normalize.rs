//! The `normalize` pipeline: raw text → token sequence.

use tracing::trace;

use retort_core::constants::{NEGATION_SUFFIX, QUESTION_MARK_TOKEN};

use crate::contractions;
use crate::stopwords;

/// Words that fuse with their successor into a `<next>_not` token.
const NEGATORS: &[&str] = &["not", "no", "never"];

/// Normalize raw text into a token sequence.
///
/// Pipeline, in order: lowercase → contraction expansion → question-mark
/// detection → punctuation stripping → whitespace split → negation fusion
/// → stopword removal. When the raw text contained a `?`, a synthetic
/// `question_mark` token is appended, but only to a non-empty output.
///
/// Returns an empty sequence for empty or degenerate input; never errors.
pub fn normalize(text: &str) -> Vec<String> {
    if text.trim().is_empty() {
        return Vec::new();
    }

    let lowered = text.to_lowercase();
    let expanded = contractions::expand(&lowered);
    let had_question_mark = expanded.contains('?');

    // Punctuation becomes a space so adjoining words stay separated.
    // Underscore stays: fused tokens and `question_mark` depend on it.
    let stripped: String = expanded
        .chars()
        .map(|c| {
            if c.is_ascii_punctuation() && c != '_' {
                ' '
            } else {
                c
            }
        })
        .collect();

    let raw_tokens: Vec<&str> = stripped.split_whitespace().collect();

    // Fuse negators with their successor: "not working" → "working_not".
    let mut fused: Vec<String> = Vec::with_capacity(raw_tokens.len());
    let mut i = 0;
    while i < raw_tokens.len() {
        let token = raw_tokens[i];
        if NEGATORS.contains(&token) && i + 1 < raw_tokens.len() {
            fused.push(format!("{}{}", raw_tokens[i + 1], NEGATION_SUFFIX));
            i += 2;
        } else {
            fused.push(token.to_string());
            i += 1;
        }
    }

    // Fused tokens survive the stopword filter.
    let mut tokens: Vec<String> = fused
        .into_iter()
        .filter(|t| t.contains(NEGATION_SUFFIX) || !stopwords::is_stopword(t))
        .collect();

    if had_question_mark && !tokens.is_empty() {
        tokens.push(QUESTION_MARK_TOKEN.to_string());
    }

    trace!(count = tokens.len(), "normalized");
    tokens
}

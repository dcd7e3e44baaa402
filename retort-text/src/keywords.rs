//! Keyword extraction over raw (un-normalized) text.
//!
//! Used by the corpus index, the question-similarity factor, and the
//! context-recency factor, which all work on raw question/message text
//! rather than the stopword-filtered token stream.

use std::collections::HashSet;
use std::sync::OnceLock;

use regex::Regex;

use retort_core::constants::MIN_KEYWORD_LEN;

use crate::normalize;

fn word_pattern() -> &'static Regex {
    static WORD: OnceLock<Regex> = OnceLock::new();
    WORD.get_or_init(|| Regex::new(r"\w+").expect("static word pattern"))
}

/// All word tokens of `text`, lowercased, in order, no length filter.
///
/// This is the denominator basis for term frequency: "total words",
/// not "total keywords".
pub fn words(text: &str) -> Vec<String> {
    word_pattern()
        .find_iter(&text.to_lowercase())
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Distinct word tokens longer than two characters, lowercased.
pub fn keywords(text: &str) -> HashSet<String> {
    words(text)
        .into_iter()
        .filter(|w| w.len() > MIN_KEYWORD_LEN)
        .collect()
}

/// The `n` most frequent normalized tokens of `text`, most frequent
/// first. Ties keep first-appearance order.
pub fn top_keywords(text: &str, n: usize) -> Vec<String> {
    let tokens = normalize::normalize(text);

    let mut counts: Vec<(String, usize)> = Vec::new();
    for token in tokens {
        match counts.iter_mut().find(|(t, _)| *t == token) {
            Some((_, count)) => *count += 1,
            None => counts.push((token, 1)),
        }
    }

    // Stable sort: equal counts keep first-seen order.
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts.into_iter().take(n).map(|(t, _)| t).collect()
}

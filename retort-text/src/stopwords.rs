//! Fixed English stopword set.

use std::collections::HashSet;
use std::sync::OnceLock;

/// Common English stopwords dropped during normalization. Negation-fused
/// tokens bypass this filter entirely.
static STOPWORDS: &[&str] = &[
    "a", "an", "the", "and", "but", "or", "because", "as", "until", "while",
    "of", "at", "by", "for", "with", "about", "against", "between", "into",
    "through", "during", "before", "after", "above", "below", "to", "from",
    "up", "down", "in", "out", "on", "off", "over", "under", "again",
    "further", "then", "once", "here", "there", "when", "where", "why",
    "how", "all", "any", "both", "each", "few", "more", "most", "other",
    "some", "such", "no", "nor", "not", "only", "own", "same", "so", "than",
    "too", "very", "s", "t", "can", "will", "just", "don", "should", "now",
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you",
    "your", "yours", "yourself", "yourselves", "he", "him", "his",
    "himself", "she", "her", "hers", "herself", "it", "its", "itself",
    "they", "them", "their", "theirs", "themselves", "what", "which", "who",
    "whom", "this", "that", "these", "those", "am", "is", "are", "was",
    "were", "be", "been", "being", "have", "has", "had", "having", "do",
    "does", "did", "doing", "if",
];

fn stopword_set() -> &'static HashSet<&'static str> {
    static SET: OnceLock<HashSet<&'static str>> = OnceLock::new();
    SET.get_or_init(|| STOPWORDS.iter().copied().collect())
}

/// Whether `token` is in the fixed stopword set.
pub fn is_stopword(token: &str) -> bool {
    stopword_set().contains(token)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn common_words_are_stopwords() {
        for word in ["the", "is", "you", "what", "can", "with"] {
            assert!(is_stopword(word), "{word} should be a stopword");
        }
    }

    #[test]
    fn content_words_are_not() {
        for word in ["rust", "memory", "help", "never", "question_mark"] {
            assert!(!is_stopword(word), "{word} should not be a stopword");
        }
    }
}

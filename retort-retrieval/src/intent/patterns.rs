//! Intent pattern tables.
//!
//! Declaration order in `intent_table` is the classifier's tie-break
//! order. Patterns are plain substrings checked against lowercased text.

use retort_core::intent::Intent;

/// Phrases that mark an utterance as a question when it starts with one.
pub(crate) const QUESTION_STARTERS: &[&str] = &[
    "what", "how", "why", "when", "where", "who", "which", "can you", "could you", "do you",
    "is there",
];

pub(crate) fn intent_table() -> Vec<(Intent, &'static [&'static str])> {
    vec![
        (
            Intent::Greeting,
            &[
                "hello",
                "hi",
                "hey",
                "greetings",
                "good morning",
                "good afternoon",
                "good evening",
            ][..],
        ),
        (
            Intent::Farewell,
            &["bye", "goodbye", "see you", "farewell", "exit", "quit"],
        ),
        (Intent::Thanks, &["thank", "thanks", "appreciate"]),
        (Intent::Help, &["help", "assist", "support"]),
        (
            Intent::Affirmation,
            &["yes", "yeah", "yep", "sure", "of course", "absolutely"],
        ),
        (
            Intent::Negation,
            &["nope", "not really", "never mind", "no thanks", "i disagree"],
        ),
        (
            Intent::Clarification,
            &[
                "what do you mean",
                "clarify",
                "explain that",
                "don't understand",
                "confused",
            ],
        ),
        (
            Intent::Comparison,
            &["compare", "difference between", "versus", " vs ", "better than"],
        ),
        (
            Intent::Question,
            &[
                "what", "how", "why", "when", "where", "who", "which", "can you", "could you",
            ],
        ),
    ]
}

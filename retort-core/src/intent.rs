//! Intent labels for user utterances.

use serde::{Deserialize, Serialize};

/// Coarse classification of what a user utterance is trying to do.
///
/// Declaration order doubles as the classifier's tie-break order: when two
/// intents match the same number of patterns, the earlier variant wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    Greeting,
    Farewell,
    Thanks,
    Help,
    Affirmation,
    Negation,
    Clarification,
    Comparison,
    Question,
    GeneralQuery,
}

impl Intent {
    /// All intents, in declaration (tie-break) order.
    pub const ALL: [Intent; 10] = [
        Intent::Greeting,
        Intent::Farewell,
        Intent::Thanks,
        Intent::Help,
        Intent::Affirmation,
        Intent::Negation,
        Intent::Clarification,
        Intent::Comparison,
        Intent::Question,
        Intent::GeneralQuery,
    ];

    /// Number of intent variants.
    pub const COUNT: usize = 10;

    /// Stable snake_case name, matching the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::Greeting => "greeting",
            Intent::Farewell => "farewell",
            Intent::Thanks => "thanks",
            Intent::Help => "help",
            Intent::Affirmation => "affirmation",
            Intent::Negation => "negation",
            Intent::Clarification => "clarification",
            Intent::Comparison => "comparison",
            Intent::Question => "question",
            Intent::GeneralQuery => "general_query",
        }
    }

    /// Whether this intent is a social pleasantry rather than an
    /// information request.
    pub fn is_social(&self) -> bool {
        matches!(
            self,
            Intent::Greeting | Intent::Farewell | Intent::Thanks | Intent::Affirmation
        )
    }
}

use serde::{Deserialize, Serialize};

use crate::intent::Intent;

/// The scorer's terminal decision for one turn.
///
/// `NoMatch` is distinguishable from an empty answer string: the caller
/// substitutes its own fallback text, selected by intent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// A corpus entry matched; its answer is returned verbatim.
    Answer(String),
    /// No entry cleared the answer threshold.
    NoMatch,
}

impl Outcome {
    pub fn is_match(&self) -> bool {
        matches!(self, Outcome::Answer(_))
    }

    /// The matched answer, if any.
    pub fn answer(&self) -> Option<&str> {
        match self {
            Outcome::Answer(text) => Some(text),
            Outcome::NoMatch => None,
        }
    }
}

/// Engine output for one conversation turn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reply {
    pub outcome: Outcome,
    /// Intent of the raw utterance, classified independently of retrieval.
    /// On `NoMatch` the caller picks fallback text by this label.
    pub intent: Intent,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_match_is_not_an_empty_answer() {
        assert_ne!(Outcome::NoMatch, Outcome::Answer(String::new()));
        assert_eq!(Outcome::NoMatch.answer(), None);
        assert_eq!(Outcome::Answer("hi".into()).answer(), Some("hi"));
    }

    #[test]
    fn outcome_serde_is_tagged() {
        let json = serde_json::to_string(&Outcome::NoMatch).unwrap();
        assert!(json.contains("no_match"));
        let back: Outcome = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Outcome::NoMatch);
    }
}

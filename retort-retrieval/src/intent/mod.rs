//! Pattern-based intent classification.
//!
//! Classification is a pure function of the raw (un-normalized) text:
//! count substring pattern hits per intent, break ties by declaration
//! order, then let the question heuristic override everything except a
//! firmly matched greeting or farewell.

mod patterns;

use tracing::debug;

use retort_core::intent::Intent;

/// The intent classifier. Holds the ordered pattern table.
pub struct IntentEngine {
    table: Vec<(Intent, &'static [&'static str])>,
}

impl IntentEngine {
    pub fn new() -> Self {
        Self {
            table: patterns::intent_table(),
        }
    }

    /// Classify a raw utterance. Total: empty or unmatched input yields
    /// `GeneralQuery`.
    pub fn classify(&self, raw_text: &str) -> Intent {
        let text = raw_text.trim().to_lowercase();
        if text.is_empty() {
            return Intent::GeneralQuery;
        }

        let mut best: Option<(Intent, usize)> = None;
        for (intent, pats) in &self.table {
            let hits = pats.iter().filter(|p| text.contains(*p)).count();
            // Strictly-greater keeps the earliest intent on ties.
            if hits > 0 && best.map_or(true, |(_, count)| hits > count) {
                best = Some((*intent, hits));
            }
        }

        let is_question = text.contains('?')
            || patterns::QUESTION_STARTERS
                .iter()
                .any(|starter| text.starts_with(starter));

        let resolved = match best {
            Some((intent, hits)) => {
                // A greeting/farewell that matched more than one pattern
                // holds its ground against the question heuristic.
                let anchored_social =
                    matches!(intent, Intent::Greeting | Intent::Farewell) && hits > 1;
                if is_question && !anchored_social {
                    Intent::Question
                } else {
                    intent
                }
            }
            None if is_question => Intent::Question,
            None => Intent::GeneralQuery,
        };

        debug!(intent = resolved.as_str(), "classified");
        resolved
    }
}

impl Default for IntentEngine {
    fn default() -> Self {
        Self::new()
    }
}

//! Inverted keyword/tag index over corpus positions.
//!
//! The index holds back-references (positions) into the corpus store,
//! never entry copies. It is rebuilt on load and extended on append;
//! nothing shrinks it during normal operation, because entry removal is
//! unsupported. The sole exception is the rollback of a failed append.

use std::collections::{BTreeSet, HashMap};

use retort_core::constants::MIN_KEYWORD_LEN;
use retort_core::models::Entry;

/// Keyword → positions and tag → positions maps.
///
/// Keywords come from the entry's question text (tokens longer than two
/// characters) plus its tags of qualifying length; the tag map holds
/// every tag verbatim.
#[derive(Debug, Default)]
pub struct CorpusIndex {
    keywords: HashMap<String, BTreeSet<usize>>,
    tags: HashMap<String, BTreeSet<usize>>,
}

impl CorpusIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Index one entry under its position.
    pub fn insert_entry(&mut self, position: usize, entry: &Entry) {
        for term in Self::keyword_terms(entry) {
            self.keywords.entry(term).or_default().insert(position);
        }
        for tag in &entry.tags {
            self.tags.entry(tag.clone()).or_default().insert(position);
        }
    }

    /// Undo `insert_entry` for a failed append. Only valid for the entry
    /// most recently inserted at `position`.
    pub fn remove_entry(&mut self, position: usize, entry: &Entry) {
        for term in Self::keyword_terms(entry) {
            if let Some(bucket) = self.keywords.get_mut(&term) {
                bucket.remove(&position);
                if bucket.is_empty() {
                    self.keywords.remove(&term);
                }
            }
        }
        for tag in &entry.tags {
            if let Some(bucket) = self.tags.get_mut(tag) {
                bucket.remove(&position);
                if bucket.is_empty() {
                    self.tags.remove(tag);
                }
            }
        }
    }

    /// Positions of entries whose question (or tags) contain `token`.
    pub fn lookup_keyword(&self, token: &str) -> Option<&BTreeSet<usize>> {
        self.keywords.get(token)
    }

    /// Positions of entries carrying `tag`.
    pub fn lookup_tag(&self, tag: &str) -> Option<&BTreeSet<usize>> {
        self.tags.get(tag)
    }

    /// Whether the keyword bucket for `token` contains `position`.
    pub fn keyword_hit(&self, token: &str, position: usize) -> bool {
        self.keywords
            .get(token)
            .is_some_and(|bucket| bucket.contains(&position))
    }

    /// Number of entries whose bucket contains `token` (document frequency).
    pub fn doc_frequency(&self, token: &str) -> usize {
        self.keywords.get(token).map_or(0, |bucket| bucket.len())
    }

    /// Number of distinct indexed keywords.
    pub fn keyword_count(&self) -> usize {
        self.keywords.len()
    }

    /// Number of distinct indexed tags.
    pub fn tag_count(&self) -> usize {
        self.tags.len()
    }

    fn keyword_terms(entry: &Entry) -> Vec<String> {
        let mut terms = retort_text::keywords(&entry.question);
        terms.extend(
            entry
                .tags
                .iter()
                .filter(|t| t.len() > MIN_KEYWORD_LEN)
                .cloned(),
        );
        terms.into_iter().collect()
    }
}

use serde::{Deserialize, Serialize};

use super::defaults;

/// Retrieval subsystem configuration: scoring weights, decision
/// thresholds, cache capacity, and context window size.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RetrievalConfig {
    /// Weight of the per-keyword index-hit component.
    pub base_weight: f64,
    /// Weight of the TF-IDF component.
    pub tfidf_weight: f64,
    /// Weight of the question Jaccard-similarity component.
    pub similarity_weight: f64,
    /// Weight of the tag-overlap component.
    pub tag_weight: f64,
    /// Weight of the context-recency component.
    pub context_weight: f64,
    /// Scores above this are answered and memoized.
    pub cache_threshold: f64,
    /// Scores above this (but not above `cache_threshold`) are answered
    /// without caching; at or below it the engine reports no match.
    pub answer_threshold: f64,
    /// Response cache capacity, in entries.
    pub cache_capacity: u64,
    /// Trailing context messages considered per query.
    pub context_window: usize,
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            base_weight: defaults::DEFAULT_BASE_WEIGHT,
            tfidf_weight: defaults::DEFAULT_TFIDF_WEIGHT,
            similarity_weight: defaults::DEFAULT_SIMILARITY_WEIGHT,
            tag_weight: defaults::DEFAULT_TAG_WEIGHT,
            context_weight: defaults::DEFAULT_CONTEXT_WEIGHT,
            cache_threshold: defaults::DEFAULT_CACHE_THRESHOLD,
            answer_threshold: defaults::DEFAULT_ANSWER_THRESHOLD,
            cache_capacity: defaults::DEFAULT_CACHE_CAPACITY,
            context_window: defaults::DEFAULT_CONTEXT_WINDOW,
        }
    }
}

//! Default values shared by the config structs.

/// Weight multipliers for the five scoring components.
pub const DEFAULT_BASE_WEIGHT: f64 = 1.0;
pub const DEFAULT_TFIDF_WEIGHT: f64 = 1.5;
pub const DEFAULT_SIMILARITY_WEIGHT: f64 = 2.0;
pub const DEFAULT_TAG_WEIGHT: f64 = 1.8;
pub const DEFAULT_CONTEXT_WEIGHT: f64 = 1.2;

/// Scores above this are answered and memoized in the response cache.
pub const DEFAULT_CACHE_THRESHOLD: f64 = 0.8;

/// Scores above this (but not above the cache threshold) are answered
/// without caching.
pub const DEFAULT_ANSWER_THRESHOLD: f64 = 0.5;

/// Bounded response cache capacity, in entries.
pub const DEFAULT_CACHE_CAPACITY: u64 = 100;

/// Maximum number of trailing context messages considered per query.
pub const DEFAULT_CONTEXT_WINDOW: usize = 5;

/// Default path of the backing corpus file.
pub const DEFAULT_CORPUS_PATH: &str = "knowledge_data.txt";

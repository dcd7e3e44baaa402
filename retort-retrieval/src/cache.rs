//! Bounded response cache keyed by the normalized query string.
//!
//! Strictly an optimization layer: any corpus mutation clears it
//! wholesale, so it is never a source of staleness afterwards. Eviction
//! order at capacity is unspecified.

use moka::sync::Cache;

/// Query → answer memoization.
pub struct ResponseCache {
    cache: Cache<String, String>,
}

impl ResponseCache {
    /// Create a cache bounded to `capacity` entries.
    pub fn new(capacity: u64) -> Self {
        Self {
            cache: Cache::builder().max_capacity(capacity).build(),
        }
    }

    /// Look up a memoized answer by exact key.
    pub fn get(&self, key: &str) -> Option<String> {
        self.cache.get(key)
    }

    /// Memoize an answer, evicting an unspecified entry at capacity.
    pub fn put(&self, key: String, answer: String) {
        self.cache.insert(key, answer);
    }

    /// Number of cached entries.
    pub fn len(&self) -> u64 {
        // Flush pending maintenance so the count is accurate.
        self.cache.run_pending_tasks();
        self.cache.entry_count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Invalidate everything. Called on any corpus mutation.
    pub fn clear(&self) {
        self.cache.invalidate_all();
    }
}

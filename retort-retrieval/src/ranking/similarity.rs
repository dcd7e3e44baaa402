//! Set similarity measures.

use std::collections::HashSet;

/// Jaccard similarity: |A ∩ B| / |A ∪ B|.
///
/// Zero when either set is empty. Symmetric by construction.
pub fn jaccard(a: &HashSet<String>, b: &HashSet<String>) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    let intersection = a.intersection(b).count() as f64;
    let union = a.union(b).count() as f64;
    intersection / union
}

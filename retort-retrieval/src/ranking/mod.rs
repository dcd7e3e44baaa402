//! Multi-factor relevance ranking over the corpus.

pub mod scorer;
pub mod similarity;

pub use scorer::{score, ScoredEntry, ScorerWeights};
pub use similarity::jaccard;

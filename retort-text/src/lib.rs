//! # retort-text
//!
//! The text-normalization pipeline feeding the retrieval engine:
//! lowercasing, contraction expansion, punctuation stripping, negation
//! fusion, stopword removal, and keyword extraction.
//!
//! Every function here is total: malformed input degrades to an empty
//! result, never an error.

mod contractions;
mod keywords;
mod normalize;
mod stopwords;

pub use keywords::{keywords, top_keywords, words};
pub use normalize::normalize;
pub use stopwords::is_stopword;

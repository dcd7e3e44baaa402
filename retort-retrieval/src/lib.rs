//! # retort-retrieval
//!
//! The retrieval side of Retort: pattern-based intent classification, the
//! multi-factor relevance scorer, the bounded response cache, and the
//! `RetrievalEngine` that orchestrates one conversation turn.

pub mod cache;
pub mod engine;
pub mod intent;
pub mod ranking;

pub use cache::ResponseCache;
pub use engine::RetrievalEngine;
pub use intent::IntentEngine;

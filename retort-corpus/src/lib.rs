//! # retort-corpus
//!
//! The corpus store: an ordered, append-only collection of
//! question/answer/tags entries, a keyword/tag inverted index over them,
//! the plain-text block format they persist in, and the persistence
//! backends (file-backed and in-memory).

pub mod backend;
pub mod bootstrap;
pub mod format;
pub mod index;
pub mod store;

pub use backend::{FileBackend, MemoryBackend};
pub use index::CorpusIndex;
pub use store::CorpusStore;

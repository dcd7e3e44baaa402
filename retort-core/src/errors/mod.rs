//! Typed errors for the Retort workspace.
//!
//! Subsystems define their own thiserror enums; `RetortError` aggregates
//! them so callers can match on one type at the API boundary.

mod corpus_error;

pub use corpus_error::CorpusError;

/// Convenience alias used across the workspace.
pub type RetortResult<T> = Result<T, RetortError>;

/// Top-level error type aggregating all subsystem errors.
#[derive(Debug, thiserror::Error)]
pub enum RetortError {
    #[error(transparent)]
    Corpus(#[from] CorpusError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("config parse error: {0}")]
    Config(#[from] toml::de::Error),
}

impl RetortError {
    /// Whether this error is the recoverable duplicate-question condition.
    ///
    /// Duplicates are reported, not thrown away: the caller decides the UX.
    pub fn is_duplicate(&self) -> bool {
        matches!(self, RetortError::Corpus(CorpusError::DuplicateQuestion { .. }))
    }
}

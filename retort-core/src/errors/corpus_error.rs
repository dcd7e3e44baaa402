/// Corpus store and persistence errors.
#[derive(Debug, thiserror::Error)]
pub enum CorpusError {
    #[error("duplicate question: {question}")]
    DuplicateQuestion { question: String },

    #[error("{field} must be non-empty after trimming")]
    EmptyField { field: &'static str },

    #[error("persist failed, in-memory append rolled back: {reason}")]
    PersistFailed { reason: String },
}

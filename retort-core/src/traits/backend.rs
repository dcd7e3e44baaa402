use crate::errors::RetortResult;

/// Persistence seam for the corpus store.
///
/// Implementations own the serialized block text. The store never touches
/// the filesystem directly, so tests can substitute an in-memory backend
/// or one that fails on write.
pub trait ICorpusBackend: Send + Sync {
    /// Read the entire serialized corpus.
    ///
    /// `Ok(None)` means no backing store exists yet; the caller bootstraps
    /// the default corpus.
    fn read_all(&self) -> RetortResult<Option<String>>;

    /// Replace the backing store with `content`.
    fn write_all(&mut self, content: &str) -> RetortResult<()>;

    /// Append one serialized block to the end of the backing store.
    fn append_block(&mut self, block: &str) -> RetortResult<()>;
}

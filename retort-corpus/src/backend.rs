//! Persistence backends for the corpus store.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use retort_core::errors::RetortResult;
use retort_core::traits::ICorpusBackend;

/// File-backed storage: the corpus lives in one plain-text file.
#[derive(Debug)]
pub struct FileBackend {
    path: PathBuf,
}

impl FileBackend {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ICorpusBackend for FileBackend {
    fn read_all(&self) -> RetortResult<Option<String>> {
        if !self.path.exists() {
            return Ok(None);
        }
        Ok(Some(fs::read_to_string(&self.path)?))
    }

    fn write_all(&mut self, content: &str) -> RetortResult<()> {
        fs::write(&self.path, content)?;
        Ok(())
    }

    fn append_block(&mut self, block: &str) -> RetortResult<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        file.write_all(block.as_bytes())?;
        Ok(())
    }
}

/// In-memory storage, primarily for tests.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    content: Option<String>,
}

impl MemoryBackend {
    /// A backend with no backing store yet; the first load bootstraps
    /// the default corpus into it.
    pub fn new() -> Self {
        Self::default()
    }

    /// A backend pre-seeded with serialized content.
    pub fn with_content(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
        }
    }

    /// The serialized content as persisted so far.
    pub fn content(&self) -> Option<&str> {
        self.content.as_deref()
    }
}

impl ICorpusBackend for MemoryBackend {
    fn read_all(&self) -> RetortResult<Option<String>> {
        Ok(self.content.clone())
    }

    fn write_all(&mut self, content: &str) -> RetortResult<()> {
        self.content = Some(content.to_string());
        Ok(())
    }

    fn append_block(&mut self, block: &str) -> RetortResult<()> {
        self.content.get_or_insert_with(String::new).push_str(block);
        Ok(())
    }
}

//! CorpusStore — owns the ordered entries, the inverted index, and the
//! persistence backend.

use std::collections::BTreeSet;
use std::path::Path;

use tracing::{info, warn};

use retort_core::errors::{CorpusError, RetortResult};
use retort_core::models::Entry;
use retort_core::traits::ICorpusBackend;

use crate::backend::{FileBackend, MemoryBackend};
use crate::bootstrap;
use crate::format;
use crate::index::CorpusIndex;

/// The corpus store: an append-only sequence of entries plus the
/// keyword/tag index over them.
///
/// Positions are entry identities; they are stable for the process
/// lifetime. Load failures never propagate: a missing or unreadable
/// backing store degrades to the bootstrapped default corpus.
pub struct CorpusStore {
    entries: Vec<Entry>,
    index: CorpusIndex,
    backend: Box<dyn ICorpusBackend>,
}

impl CorpusStore {
    /// Open a store backed by a file on disk.
    pub fn open(path: impl AsRef<Path>) -> Self {
        Self::with_backend(Box::new(FileBackend::new(path.as_ref())))
    }

    /// Open a store backed by memory only (for testing). Bootstraps the
    /// default corpus, exactly as a missing file would.
    pub fn open_in_memory() -> Self {
        Self::with_backend(Box::new(MemoryBackend::new()))
    }

    /// Open a store over any backend.
    pub fn with_backend(mut backend: Box<dyn ICorpusBackend>) -> Self {
        let content = match backend.read_all() {
            Ok(Some(content)) => content,
            Ok(None) => {
                info!("no backing corpus found, bootstrapping default entries");
                Self::bootstrap(&mut *backend)
            }
            Err(error) => {
                warn!(%error, "corpus load failed, bootstrapping default entries");
                Self::bootstrap(&mut *backend)
            }
        };

        let entries = format::parse(&content);
        let mut index = CorpusIndex::new();
        for (position, entry) in entries.iter().enumerate() {
            index.insert_entry(position, entry);
        }

        info!(entries = entries.len(), "loaded corpus");
        Self {
            entries,
            index,
            backend,
        }
    }

    /// Write the default corpus to the backend; a write failure is
    /// logged and the defaults are still served from memory.
    fn bootstrap(backend: &mut dyn ICorpusBackend) -> String {
        if let Err(error) = backend.write_all(bootstrap::DEFAULT_CORPUS) {
            warn!(%error, "could not persist default corpus");
        }
        bootstrap::DEFAULT_CORPUS.to_string()
    }

    /// Append a new entry.
    ///
    /// Rejects empty fields and case-insensitive duplicate questions
    /// without mutating anything. If persisting the block fails, the
    /// in-memory append is rolled back so entries, index, and file stay
    /// consistent.
    pub fn add(&mut self, question: &str, answer: &str, tags: &[String]) -> RetortResult<usize> {
        let question = question.trim();
        let answer = answer.trim();
        if question.is_empty() {
            return Err(CorpusError::EmptyField { field: "question" }.into());
        }
        if answer.is_empty() {
            return Err(CorpusError::EmptyField { field: "answer" }.into());
        }

        let lowered = question.to_lowercase();
        if self
            .entries
            .iter()
            .any(|e| e.question.to_lowercase() == lowered)
        {
            return Err(CorpusError::DuplicateQuestion {
                question: question.to_string(),
            }
            .into());
        }

        let entry = Entry::new(question, answer, tags);
        let position = self.entries.len();
        self.index.insert_entry(position, &entry);
        self.entries.push(entry);

        let block = format::append_block(&self.entries[position]);
        if let Err(error) = self.backend.append_block(&block) {
            if let Some(entry) = self.entries.pop() {
                self.index.remove_entry(position, &entry);
            }
            warn!(%error, "persist failed, rolled back in-memory append");
            return Err(CorpusError::PersistFailed {
                reason: error.to_string(),
            }
            .into());
        }

        info!(position, "corpus entry added");
        Ok(position)
    }

    /// Positions of entries whose question or tags contain `token`.
    pub fn lookup_keyword(&self, token: &str) -> Option<&BTreeSet<usize>> {
        self.index.lookup_keyword(token)
    }

    /// Positions of entries carrying `tag`.
    pub fn lookup_tag(&self, tag: &str) -> Option<&BTreeSet<usize>> {
        self.index.lookup_tag(tag)
    }

    /// Whether `token`'s bucket contains `position`.
    pub fn keyword_hit(&self, token: &str, position: usize) -> bool {
        self.index.keyword_hit(token, position)
    }

    /// Document frequency of `token` across the corpus.
    pub fn doc_frequency(&self, token: &str) -> usize {
        self.index.doc_frequency(token)
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn get(&self, position: usize) -> Option<&Entry> {
        self.entries.get(position)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The index, for diagnostics.
    pub fn index(&self) -> &CorpusIndex {
        &self.index
    }
}

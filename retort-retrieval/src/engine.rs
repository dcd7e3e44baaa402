//! RetrievalEngine: implements IResponder, orchestrates the per-turn
//! pipeline.
//!
//! raw text → normalize → classify intent → cache check → 5-factor
//! scoring → threshold decision → answer, or no match (caller selects
//! fallback text by intent).

use std::collections::HashSet;
use std::path::Path;

use tracing::{debug, info};

use retort_core::config::RetrievalConfig;
use retort_core::constants::MIN_KEYWORD_LEN;
use retort_core::errors::RetortResult;
use retort_core::models::{Message, Outcome, Reply};
use retort_core::traits::{ICorpusBackend, IResponder};
use retort_core::{Intent, RetortConfig};
use retort_corpus::CorpusStore;

use crate::cache::ResponseCache;
use crate::intent::IntentEngine;
use crate::ranking::{self, ScorerWeights};

/// The main retrieval engine. Owns the corpus store, the response cache,
/// and the intent classifier behind the documented operations; nothing
/// else mutates them.
///
/// Mutation (`add_entry`) takes `&mut self` while scoring takes `&self`,
/// so a host that shares the engine wraps it in a reader/writer lock and
/// gets the required exclusion for free.
pub struct RetrievalEngine {
    store: CorpusStore,
    cache: ResponseCache,
    intents: IntentEngine,
    weights: ScorerWeights,
    config: RetrievalConfig,
}

impl RetrievalEngine {
    /// Build an engine over an already-opened store.
    pub fn new(store: CorpusStore, config: RetrievalConfig) -> Self {
        Self {
            cache: ResponseCache::new(config.cache_capacity),
            intents: IntentEngine::new(),
            weights: ScorerWeights::from(&config),
            store,
            config,
        }
    }

    /// Open the corpus at `path` (bootstrapping defaults if absent) and
    /// build an engine over it.
    pub fn open(path: impl AsRef<Path>, config: RetrievalConfig) -> Self {
        Self::new(CorpusStore::open(path), config)
    }

    /// Engine over an in-memory corpus (for testing).
    pub fn open_in_memory(config: RetrievalConfig) -> Self {
        Self::new(CorpusStore::open_in_memory(), config)
    }

    /// Engine over any persistence backend.
    pub fn with_backend(backend: Box<dyn ICorpusBackend>, config: RetrievalConfig) -> Self {
        Self::new(CorpusStore::with_backend(backend), config)
    }

    /// Build an engine from a full config: the corpus at the configured
    /// path, scored with the configured retrieval knobs.
    pub fn from_config(config: &RetortConfig) -> Self {
        Self::open(&config.corpus.path, config.retrieval.clone())
    }

    /// Score the normalized query against every entry and decide.
    ///
    /// An exact cache hit short-circuits scoring entirely — context is
    /// not consulted on hits. High-confidence answers are memoized;
    /// answers in the low-confidence band are recomputed every time.
    pub fn score_and_answer(&self, query_tokens: &[String], context: &[Message]) -> Outcome {
        if query_tokens.is_empty() {
            return Outcome::NoMatch;
        }

        let key = query_tokens.join(" ");
        if let Some(answer) = self.cache.get(&key) {
            debug!(%key, "response cache hit");
            return Outcome::Answer(answer);
        }

        let query_keywords: HashSet<String> = query_tokens
            .iter()
            .filter(|t| t.len() > MIN_KEYWORD_LEN)
            .map(|t| t.to_lowercase())
            .collect();

        let window = Message::trailing_window(context, self.config.context_window);
        let ranked = ranking::score(&self.store, &query_keywords, window, &self.weights);

        let Some(top) = ranked.first() else {
            return Outcome::NoMatch;
        };
        debug!(position = top.position, score = top.score, "top candidate");

        let Some(entry) = self.store.get(top.position) else {
            return Outcome::NoMatch;
        };

        if top.score > self.config.cache_threshold {
            self.cache.put(key, entry.answer.clone());
            Outcome::Answer(entry.answer.clone())
        } else if top.score > self.config.answer_threshold {
            // Low-confidence band: answer without memoizing.
            Outcome::Answer(entry.answer.clone())
        } else {
            Outcome::NoMatch
        }
    }

    /// Append an entry and invalidate the response cache.
    ///
    /// Rejected duplicates and failed persists leave the cache as-is,
    /// since the corpus did not change.
    pub fn add_entry(
        &mut self,
        question: &str,
        answer: &str,
        tags: &[String],
    ) -> RetortResult<usize> {
        let position = self.store.add(question, answer, tags)?;
        self.cache.clear();
        info!(position, "corpus mutated, response cache invalidated");
        Ok(position)
    }

    /// Classify the intent of a raw utterance.
    pub fn classify_intent(&self, raw_text: &str) -> Intent {
        self.intents.classify(raw_text)
    }

    pub fn store(&self) -> &CorpusStore {
        &self.store
    }

    /// The response cache, exposed for inspection.
    pub fn cache(&self) -> &ResponseCache {
        &self.cache
    }
}

impl IResponder for RetrievalEngine {
    fn respond(&self, raw_text: &str, context: &[Message]) -> RetortResult<Reply> {
        let intent = self.intents.classify(raw_text);
        let tokens = retort_text::normalize(raw_text);
        let outcome = self.score_and_answer(&tokens, context);

        debug!(
            intent = intent.as_str(),
            matched = outcome.is_match(),
            "turn complete"
        );
        Ok(Reply { outcome, intent })
    }
}

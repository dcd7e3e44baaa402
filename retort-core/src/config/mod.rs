//! Configuration for the Retort engine, loadable from TOML.

pub mod defaults;

mod corpus_config;
mod retrieval_config;

pub use corpus_config::CorpusConfig;
pub use retrieval_config::RetrievalConfig;

use serde::{Deserialize, Serialize};

/// Top-level configuration. Missing sections and fields fall back to
/// defaults, so an empty document is a valid config.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RetortConfig {
    pub corpus: CorpusConfig,
    pub retrieval: RetrievalConfig,
}

impl RetortConfig {
    /// Parse a TOML document.
    pub fn from_toml(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_is_all_defaults() {
        let config = RetortConfig::from_toml("").unwrap();
        assert_eq!(config.retrieval.cache_capacity, defaults::DEFAULT_CACHE_CAPACITY);
        assert_eq!(config.retrieval.context_window, defaults::DEFAULT_CONTEXT_WINDOW);
        assert_eq!(config.corpus.path.to_str(), Some(defaults::DEFAULT_CORPUS_PATH));
    }

    #[test]
    fn partial_override_keeps_other_defaults() {
        let config = RetortConfig::from_toml(
            "[retrieval]\ncache_capacity = 10\nanswer_threshold = 0.4\n",
        )
        .unwrap();
        assert_eq!(config.retrieval.cache_capacity, 10);
        assert_eq!(config.retrieval.answer_threshold, 0.4);
        assert_eq!(config.retrieval.cache_threshold, defaults::DEFAULT_CACHE_THRESHOLD);
    }
}

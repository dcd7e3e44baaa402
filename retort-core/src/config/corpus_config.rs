use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::defaults;

/// Corpus store configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CorpusConfig {
    /// Path of the backing corpus file.
    pub path: PathBuf,
}

impl Default for CorpusConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(defaults::DEFAULT_CORPUS_PATH),
        }
    }
}

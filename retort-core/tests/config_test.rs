use retort_core::config::{defaults, RetortConfig};

#[test]
fn default_weights_match_documented_values() {
    let config = RetortConfig::default();
    assert_eq!(config.retrieval.base_weight, 1.0);
    assert_eq!(config.retrieval.tfidf_weight, 1.5);
    assert_eq!(config.retrieval.similarity_weight, 2.0);
    assert_eq!(config.retrieval.tag_weight, 1.8);
    assert_eq!(config.retrieval.context_weight, 1.2);
}

#[test]
fn thresholds_are_ordered() {
    let config = RetortConfig::default();
    assert!(config.retrieval.cache_threshold > config.retrieval.answer_threshold);
}

#[test]
fn full_toml_roundtrip() {
    let config = RetortConfig::default();
    let text = toml::to_string(&config).unwrap();
    let back = RetortConfig::from_toml(&text).unwrap();
    assert_eq!(back.retrieval.cache_capacity, defaults::DEFAULT_CACHE_CAPACITY);
    assert_eq!(back.corpus.path, config.corpus.path);
}

#[test]
fn unknown_section_is_rejected_quietly_or_ignored() {
    // serde's default behavior for TOML tables is to ignore unknown keys.
    let config = RetortConfig::from_toml("[retrieval]\nnot_a_knob = 3\n");
    assert!(config.is_ok());
}

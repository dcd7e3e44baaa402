//! Multi-factor relevance scorer (5 factors).
//!
//! Factors: keyword index hits, TF-IDF, question Jaccard similarity,
//! tag overlap, context recency.

use std::collections::HashSet;

use retort_core::config::RetrievalConfig;
use retort_core::models::{Entry, Message, Role};
use retort_corpus::CorpusStore;

use crate::ranking::similarity::jaccard;

/// Weights for the five scoring factors.
#[derive(Debug, Clone)]
pub struct ScorerWeights {
    pub base: f64,
    pub tfidf: f64,
    pub similarity: f64,
    pub tag: f64,
    pub context: f64,
}

impl Default for ScorerWeights {
    fn default() -> Self {
        Self {
            base: 1.0,
            tfidf: 1.5,
            similarity: 2.0,
            tag: 1.8,
            context: 1.2,
        }
    }
}

impl From<&RetrievalConfig> for ScorerWeights {
    fn from(config: &RetrievalConfig) -> Self {
        Self {
            base: config.base_weight,
            tfidf: config.tfidf_weight,
            similarity: config.similarity_weight,
            tag: config.tag_weight,
            context: config.context_weight,
        }
    }
}

/// A corpus position with its composite relevance score.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredEntry {
    pub position: usize,
    pub score: f64,
}

/// Score every corpus entry against the query, best first.
///
/// The sort is stable and descending, so equal scores keep corpus order.
/// Deterministic given corpus, query keywords, and context.
pub fn score(
    store: &CorpusStore,
    query_keywords: &HashSet<String>,
    context: &[Message],
    weights: &ScorerWeights,
) -> Vec<ScoredEntry> {
    let total_entries = store.len();

    let mut scored: Vec<ScoredEntry> = store
        .entries()
        .iter()
        .enumerate()
        .map(|(position, entry)| {
            // Factor 1: +1 per query keyword whose bucket holds this entry.
            let base = query_keywords
                .iter()
                .filter(|k| store.keyword_hit(k, position))
                .count() as f64;

            // Factor 2: TF-IDF of query keywords over the question text.
            let tfidf = tfidf_score(store, entry, query_keywords, total_entries);

            // Factor 3: Jaccard similarity to the question's keyword set.
            let question_keywords = retort_text::keywords(&entry.question);
            let similarity = jaccard(query_keywords, &question_keywords) * 3.0;

            // Factor 4: tag overlap with query keywords.
            let tag = tag_score(&entry.tags, query_keywords);

            // Factor 5: keywords from prior user messages, recency-weighted.
            let context_boost = context_score(store, position, context);

            let score = base * weights.base
                + tfidf * weights.tfidf
                + similarity * weights.similarity
                + tag * weights.tag
                + context_boost * weights.context;

            ScoredEntry { position, score }
        })
        .collect();

    // Stable sort: ties keep original corpus order.
    scored.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    scored
}

/// Σ tf·idf across query keywords.
///
/// idf = ln(total / max(1, df)) + 1; tf = occurrences of the keyword in
/// the question over the question's total word count.
fn tfidf_score(
    store: &CorpusStore,
    entry: &Entry,
    query_keywords: &HashSet<String>,
    total_entries: usize,
) -> f64 {
    let question_words = retort_text::words(&entry.question);
    if question_words.is_empty() {
        return 0.0;
    }

    let mut sum = 0.0;
    for keyword in query_keywords {
        let count = question_words.iter().filter(|w| *w == keyword).count();
        if count == 0 {
            continue;
        }
        let df = store.doc_frequency(keyword).max(1);
        let idf = (total_entries as f64 / df as f64).ln() + 1.0;
        let tf = count as f64 / question_words.len() as f64;
        sum += tf * idf;
    }
    sum
}

/// +2 per tag equal to or contained in a query keyword; otherwise +1.5
/// per tag that contains a query keyword. The superstring branch is
/// checked first so a tag is never counted twice.
fn tag_score(tags: &[String], query_keywords: &HashSet<String>) -> f64 {
    let mut sum = 0.0;
    for tag in tags {
        if query_keywords.iter().any(|k| k.contains(tag.as_str())) {
            sum += 2.0;
        } else if query_keywords.iter().any(|k| tag.contains(k.as_str())) {
            sum += 1.5;
        }
    }
    sum
}

/// 0.3 per context-keyword hit, scaled by how recent the message is:
/// recency = min(1.0, 0.5 + index / window_len), so the oldest message
/// in a full window contributes half weight and the newest full weight.
fn context_score(store: &CorpusStore, position: usize, context: &[Message]) -> f64 {
    if context.is_empty() {
        return 0.0;
    }

    let window_len = context.len() as f64;
    let mut sum = 0.0;
    for (index, message) in context.iter().enumerate() {
        if message.role != Role::User {
            continue;
        }
        let recency = (0.5 + index as f64 / window_len).min(1.0);
        for keyword in retort_text::keywords(&message.content) {
            if store.keyword_hit(&keyword, position) {
                sum += 0.3 * recency;
            }
        }
    }
    sum
}

#[cfg(test)]
mod tests {
    use super::*;
    use retort_corpus::MemoryBackend;

    fn store_with(entries: &[(&str, &str, &[&str])]) -> CorpusStore {
        let mut store = CorpusStore::with_backend(Box::new(MemoryBackend::with_content("")));
        for (question, answer, tags) in entries {
            let tags: Vec<String> = tags.iter().map(|t| t.to_string()).collect();
            store.add(question, answer, &tags).unwrap();
        }
        store
    }

    fn keywords_of(words: &[&str]) -> HashSet<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn matching_entry_outranks_unrelated() {
        let store = store_with(&[
            ("How does caching work?", "With a bounded cache.", &["cache"]),
            ("Where are logs written?", "To standard output.", &["logs"]),
        ]);
        let ranked = score(
            &store,
            &keywords_of(&["caching", "work"]),
            &[],
            &ScorerWeights::default(),
        );
        assert_eq!(ranked[0].position, 0);
        assert!(ranked[0].score > ranked[1].score);
    }

    #[test]
    fn ties_keep_corpus_order() {
        let store = store_with(&[
            ("alpha beta", "first", &[]),
            ("alpha beta!", "second", &[]),
        ]);
        // Identical keyword profiles (punctuation is not a word); scores tie.
        let ranked = score(
            &store,
            &keywords_of(&["alpha"]),
            &[],
            &ScorerWeights::default(),
        );
        assert_eq!(ranked[0].position, 0);
        assert_eq!(ranked[1].position, 1);
        assert_eq!(ranked[0].score, ranked[1].score);
    }

    #[test]
    fn tag_superstring_branch_wins_over_substring() {
        // Tag "cache" is a substring of query keyword "caches": +2.
        assert_eq!(tag_score(&["cache".into()], &keywords_of(&["caches"])), 2.0);
        // Query keyword "cache" is a substring of tag "caching": +1.5.
        assert_eq!(tag_score(&["caching".into()], &keywords_of(&["cache"])), 1.5);
        // Equality counts as the superstring branch.
        assert_eq!(tag_score(&["cache".into()], &keywords_of(&["cache"])), 2.0);
        // No relation at all.
        assert_eq!(tag_score(&["logs".into()], &keywords_of(&["cache"])), 0.0);
    }

    #[test]
    fn context_boost_prefers_recent_messages() {
        let store = store_with(&[("How does caching work?", "With a cache.", &[])]);
        let old = vec![
            Message::user("tell me about caching"),
            Message::user("unrelated"),
        ];
        let recent = vec![
            Message::user("unrelated"),
            Message::user("tell me about caching"),
        ];
        let boost_old = context_score(&store, 0, &old);
        let boost_recent = context_score(&store, 0, &recent);
        assert!(boost_recent > boost_old);
    }

    #[test]
    fn bot_messages_do_not_contribute() {
        let store = store_with(&[("How does caching work?", "With a cache.", &[])]);
        let context = vec![Message::bot("caching caching caching")];
        assert_eq!(context_score(&store, 0, &context), 0.0);
    }

    #[test]
    fn rarer_keywords_weigh_more() {
        let store = store_with(&[
            ("cache invalidation rules", "a", &[]),
            ("cache eviction rules", "b", &[]),
            ("tracing output format", "c", &[]),
        ]);
        // "invalidation" appears in one doc, "cache" in two; with equal
        // tf the rarer term must contribute more.
        let common = tfidf_score(
            &store,
            store.get(0).unwrap(),
            &keywords_of(&["cache"]),
            store.len(),
        );
        let rare = tfidf_score(
            &store,
            store.get(0).unwrap(),
            &keywords_of(&["invalidation"]),
            store.len(),
        );
        assert!(rare > common);
    }
}

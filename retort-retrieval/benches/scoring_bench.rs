use std::collections::HashSet;
use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};

use retort_core::models::Message;
use retort_corpus::{CorpusStore, MemoryBackend};
use retort_retrieval::ranking::{self, ScorerWeights};

fn seeded_store(entries: usize) -> CorpusStore {
    let mut store = CorpusStore::with_backend(Box::new(MemoryBackend::with_content("")));
    for i in 0..entries {
        store
            .add(
                &format!("How does subsystem {i} handle retries and backoff?"),
                "Exponential backoff with jitter, capped at one minute.",
                &[format!("subsystem-{i}"), "reliability".to_string()],
            )
            .expect("seed entry");
    }
    store
}

fn bench_score(c: &mut Criterion) {
    let store = seeded_store(200);
    let query: HashSet<String> = ["subsystem", "retries", "backoff"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    let context = vec![
        Message::user("what happened to the retries yesterday"),
        Message::bot("they were capped"),
        Message::user("and the backoff settings"),
    ];
    let weights = ScorerWeights::default();

    c.bench_function("score_200_entries", |b| {
        b.iter(|| ranking::score(black_box(&store), black_box(&query), &context, &weights))
    });

    c.bench_function("score_200_entries_no_context", |b| {
        b.iter(|| ranking::score(black_box(&store), black_box(&query), &[], &weights))
    });
}

criterion_group!(benches, bench_score);
criterion_main!(benches);

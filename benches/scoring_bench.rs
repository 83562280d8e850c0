use cipherforge::breaker::{NoopObserver, SubstitutionBreaker};
use cipherforge::cipher::text::letter_indices;
use cipherforge::cipher::CipherKey;
use cipherforge::config::{ScoringParams, SearchParams};
use cipherforge::random::RandomSource;
use cipherforge::scorer::QuadgramScorer;
use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use std::collections::BTreeMap;
use std::hint::black_box;

const TEXT: &str = "\
When the meeting was over the people went home through the rain, talking \
quietly among themselves about their homes and their families and the long \
night that was ahead of them. In the morning the river had risen again, and \
the first of the lower gardens were under water. The schoolmaster closed the school \
and sent the children home, and the shopkeepers began to move their goods away \
from the windows.";

fn build_scorer() -> QuadgramScorer {
    let letters = cipherforge::cipher::clean(TEXT);
    let mut counts: BTreeMap<String, u64> = BTreeMap::new();
    for w in letters.as_bytes().windows(4) {
        *counts
            .entry(String::from_utf8_lossy(w).into_owned())
            .or_insert(0) += 1;
    }
    QuadgramScorer::from_pairs(counts, &ScoringParams::default()).unwrap()
}

fn bench_scoring(c: &mut Criterion) {
    let scorer = build_scorer();
    let letters = letter_indices(TEXT);
    let key = CipherKey::parse("QWERTYUIOPASDFGHJKLZXCVBNM").unwrap();

    let mut group = c.benchmark_group("scoring");
    group.throughput(Throughput::Elements(letters.len() as u64));

    group.bench_function("score_letters", |b| {
        b.iter(|| black_box(scorer.score_letters(black_box(&letters))))
    });
    group.bench_function("score_with_key", |b| {
        b.iter(|| black_box(scorer.score_with_key(black_box(&letters), &key)))
    });
    group.finish();
}

fn bench_climb(c: &mut Criterion) {
    let scorer = build_scorer();
    let ciphertext = CipherKey::parse("QWERTYUIOPASDFGHJKLZXCVBNM")
        .unwrap()
        .apply(TEXT);
    let letters = letter_indices(&ciphertext);
    let breaker = SubstitutionBreaker::new(
        &scorer,
        SearchParams {
            restarts: 1,
            patience: 1500,
            parallel: false,
        },
    )
    .unwrap();

    let mut group = c.benchmark_group("climb");
    group.sample_size(20);
    group.bench_function("single_run", |b| {
        let mut rng = RandomSource::new(42);
        b.iter(|| black_box(breaker.climb(&mut rng, &letters, 0, &NoopObserver)))
    });
    group.finish();
}

criterion_group!(benches, bench_scoring, bench_climb);
criterion_main!(benches);

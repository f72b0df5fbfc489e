//! Matcher query benchmarks
//!
//! Run with: `cargo bench --bench matcher_bench -p suggest-core`

use std::collections::HashSet;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use suggest_core::Matcher;
use suggest_domain::Dataset;

fn matcher(size: usize) -> Matcher {
    Matcher::new(Dataset::from_entries(
        (0..size).map(|i| format!("Zone{}/City_{:05}", i % 23, i)),
    ))
}

fn bench_get_matches(c: &mut Criterion) {
    let mut group = c.benchmark_group("matcher_get_matches");
    let exclude = HashSet::new();

    for size in [1_000, 10_000] {
        let matcher = matcher(size);
        for query in ["zone1", "ty_0001", "zzz"] {
            group.bench_with_input(BenchmarkId::new(query, size), &matcher, |b, matcher| {
                b.iter(|| matcher.get_matches(black_box(query), Some(10), &exclude));
            });
        }
    }

    group.finish();
}

fn bench_get_exact_match(c: &mut Criterion) {
    let matcher = matcher(10_000);
    c.bench_function("matcher_get_exact_match", |b| {
        b.iter(|| matcher.get_exact_match(black_box("zone5/city_00005")));
    });
}

criterion_group!(benches, bench_get_matches, bench_get_exact_match);
criterion_main!(benches);

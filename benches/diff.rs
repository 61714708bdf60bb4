//! Benchmarks for edit extraction.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use tether::diff::extract;

fn large_document(lines: usize) -> String {
    (0..lines)
        .map(|i| format!("line {i}: the quick brown fox jumps over the lazy dog\n"))
        .collect()
}

fn bench_identical_snapshots(c: &mut Criterion) {
    let doc = large_document(2_000);
    c.bench_function("diff_identical", |b| {
        b.iter(|| extract(black_box(&doc), black_box(&doc)))
    });
}

fn bench_single_char_edit(c: &mut Criterion) {
    let old = large_document(2_000);
    let mid = old.len() / 2;
    let mut new = old.clone();
    new.insert(mid, 'x');
    c.bench_function("diff_single_char_edit", |b| {
        b.iter(|| extract(black_box(&old), black_box(&new)))
    });
}

fn bench_full_replacement(c: &mut Criterion) {
    let old = large_document(1_000);
    let new = old.to_uppercase();
    c.bench_function("diff_full_replacement", |b| {
        b.iter(|| extract(black_box(&old), black_box(&new)))
    });
}

fn bench_repeated_char_content(c: &mut Criterion) {
    // Worst case for the overlapping prefix/suffix scans.
    let old = "a".repeat(100_000);
    let new = "a".repeat(99_999);
    c.bench_function("diff_repeated_chars", |b| {
        b.iter(|| extract(black_box(&old), black_box(&new)))
    });
}

criterion_group!(
    benches,
    bench_identical_snapshots,
    bench_single_char_edit,
    bench_full_replacement,
    bench_repeated_char_content
);
criterion_main!(benches);

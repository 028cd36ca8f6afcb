//! Benchmarks for password generation and strength analysis.
//!
//! Measures unbiased index sampling, seeded and unseeded password
//! construction, and analysis of short and long passwords.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use seedpass::{analyze, GenerationSettings, PasswordBuilder, SecureRandom};

/// Fixed seed so every run draws the same sequence.
const BENCH_SEED: [u8; 32] = [0x5A; 32];

/// Benchmarks `random_int` over a full pool and an awkward range that
/// forces frequent rejections.
fn bench_random_int(c: &mut Criterion) {
    let mut group = c.benchmark_group("random_int");

    for range in [94i64, 129] {
        group.bench_with_input(BenchmarkId::from_parameter(range), &range, |b, &range| {
            let mut rng = SecureRandom::from_seed(BENCH_SEED);
            b.iter(|| rng.random_int(0, black_box(range)).unwrap());
        });
    }

    group.finish();
}

/// Benchmarks building passwords of several lengths, with and without
/// seed material.
fn bench_build(c: &mut Criterion) {
    let builder = PasswordBuilder::new();
    let mut group = c.benchmark_group("build");

    for length in [16usize, 64] {
        let plain = GenerationSettings::with_length(length);
        let seeded = GenerationSettings {
            word: Some("falcon".into()),
            number_seed: Some("1987".into()),
            ..GenerationSettings::with_length(length)
        };

        group.bench_with_input(BenchmarkId::new("unseeded", length), &plain, |b, s| {
            let mut rng = SecureRandom::from_seed(BENCH_SEED);
            b.iter(|| builder.build_with(black_box(s), &mut rng).unwrap());
        });
        group.bench_with_input(BenchmarkId::new("seeded", length), &seeded, |b, s| {
            let mut rng = SecureRandom::from_seed(BENCH_SEED);
            b.iter(|| builder.build_with(black_box(s), &mut rng).unwrap());
        });
    }

    group.finish();
}

/// Benchmarks analysis of a pattern-heavy and a random-looking password.
fn bench_analyze(c: &mut Criterion) {
    let mut group = c.benchmark_group("analyze");

    for password in ["password1999aaa123", "Gx7#kP2v!mQ9&zR4sT8w"] {
        group.bench_with_input(BenchmarkId::from_parameter(password), password, |b, p| {
            b.iter(|| analyze(black_box(p)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_random_int, bench_build, bench_analyze);
criterion_main!(benches);

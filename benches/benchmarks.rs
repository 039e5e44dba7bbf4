//! Benchmarks comparing insertion, merge and hybrid sort.
//!
//! Run with: `cargo bench`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use hybridsort::dataset::{ascending, descending, random_values, DEFAULT_VALUE_RANGE};
use hybridsort::Algorithm;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Threshold used for the hybrid provider. Typical crossover sizes on modern
/// hardware sit in the low tens.
const HYBRID_THRESHOLD: usize = 32;

fn algorithms() -> [Algorithm; 3] {
    [
        Algorithm::Insertion,
        Algorithm::Merge,
        Algorithm::Hybrid {
            threshold: HYBRID_THRESHOLD,
        },
    ]
}

// ============================================================================
// BENCHMARKS
// ============================================================================

/// Random input around the crossover region, where insertion sort should
/// win at the small end and lose at the large end.
fn benchmark_small_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("small_random");
    let mut rng = StdRng::seed_from_u64(7);

    for &n in &[4usize, 8, 16, 32, 64, 128] {
        let data = random_values(&mut rng, n, &DEFAULT_VALUE_RANGE);

        for algorithm in algorithms() {
            group.bench_with_input(BenchmarkId::new(algorithm.name(), n), &data, |b, data| {
                b.iter(|| black_box(algorithm.sort(black_box(data))))
            });
        }
    }

    group.finish();
}

fn benchmark_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("scaling_with_n");
    let mut rng = StdRng::seed_from_u64(11);

    for &n in &[1_000usize, 10_000, 100_000] {
        let data = random_values(&mut rng, n, &DEFAULT_VALUE_RANGE);

        // Quadratic sort is too slow to sample at the top size
        for algorithm in algorithms()
            .into_iter()
            .filter(|a| n <= 10_000 || *a != Algorithm::Insertion)
        {
            group.bench_with_input(BenchmarkId::new(algorithm.name(), n), &data, |b, data| {
                b.iter(|| black_box(algorithm.sort(black_box(data))))
            });
        }
    }

    group.finish();
}

/// The two fixed trial shapes: best and worst case for insertion sort.
fn benchmark_datasets(c: &mut Criterion) {
    let mut group = c.benchmark_group("fixed_datasets");
    let n = 10_000;

    for (label, data) in [("sorted", ascending(n)), ("reversed", descending(n))] {
        for algorithm in algorithms() {
            group.bench_with_input(BenchmarkId::new(algorithm.name(), label), &data, |b, data| {
                b.iter(|| black_box(algorithm.sort(black_box(data))))
            });
        }
    }

    group.finish();
}

fn benchmark_thresholds(c: &mut Criterion) {
    let mut group = c.benchmark_group("hybrid_threshold");
    let mut rng = StdRng::seed_from_u64(13);
    let data = random_values(&mut rng, 10_000, &DEFAULT_VALUE_RANGE);

    for &threshold in &[0usize, 8, 16, 32, 64, 128] {
        let algorithm = Algorithm::Hybrid { threshold };
        group.bench_with_input(BenchmarkId::from_parameter(threshold), &data, |b, data| {
            b.iter(|| black_box(algorithm.sort(black_box(data))))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_small_sizes,
    benchmark_scaling,
    benchmark_datasets,
    benchmark_thresholds
);
criterion_main!(benches);

//! Benchmark for composed pipelines.
//!
//! Compares pipelines built from catalog function objects against the
//! equivalent hand-written iterator chains.

use std::hint::black_box;

use advent::algorithms::{filter, map, sliding, sum};
use advent::generators::range;
use advent::operators::even;
use advent::pipe;
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};

// =============================================================================
// Generator Pipeline Benchmark
// =============================================================================

fn benchmark_range_filter_sum(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("range_filter_sum");

    for size in [100_i64, 10_000, 1_000_000] {
        // Composed pipeline
        let pipeline = pipe!(range(0, size), filter(even()), sum());
        group.bench_with_input(BenchmarkId::new("pipe", size), &size, |bencher, _| {
            bencher.iter(|| black_box(pipeline.call()));
        });

        // Hand-written chain
        group.bench_with_input(BenchmarkId::new("iterator", size), &size, |bencher, &size| {
            bencher.iter(|| {
                let total: i64 = (0..black_box(size)).filter(|value| value % 2 == 0).sum();
                black_box(total)
            });
        });
    }

    group.finish();
}

// =============================================================================
// Sliding Window Benchmark
// =============================================================================

fn benchmark_window_sums(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("window_sums");

    for size in [100, 10_000] {
        let data: Vec<i32> = (0..size).collect();

        // Composed pipeline
        let pipeline = pipe!(sliding::<Vec<i32>>(3), map(sum()), sum());
        group.bench_with_input(BenchmarkId::new("pipe", size), &data, |bencher, data| {
            bencher.iter(|| black_box(pipeline.call(data.clone())));
        });

        // Hand-written chain
        group.bench_with_input(BenchmarkId::new("iterator", size), &data, |bencher, data| {
            bencher.iter(|| {
                let total: i32 = data.windows(3).map(|window| window.iter().sum::<i32>()).sum();
                black_box(total)
            });
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_range_filter_sum, benchmark_window_sums);
criterion_main!(benches);

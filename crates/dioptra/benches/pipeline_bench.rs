//! Benchmarks for the quadratic-form sweep and the recurrence.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use dioptra_solve::{enumerate_solutions, find_samples, ParallelConfig, SolveParams};
use dioptra_triples::{HalvingMode, TripleRecurrenceEngine};

fn params(max_n: u64, parallel: ParallelConfig) -> SolveParams {
    SolveParams::builder()
        .z(3)
        .max_n(max_n)
        .max_solutions_per_n(16)
        .parallel(parallel)
        .build()
        .expect("valid benchmark parameters")
}

fn bench_sweep(c: &mut Criterion) {
    let mut group = c.benchmark_group("quadratic_sweep");

    for max_n in [256u64, 1024, 4096] {
        let sequential = params(max_n, ParallelConfig::sequential());
        let parallel = params(max_n, ParallelConfig { parallel_threshold: 1 });

        group.bench_with_input(BenchmarkId::new("sequential", max_n), &max_n, |b, _| {
            b.iter(|| black_box(enumerate_solutions(&sequential)))
        });
        group.bench_with_input(BenchmarkId::new("rayon", max_n), &max_n, |b, _| {
            b.iter(|| black_box(enumerate_solutions(&parallel)))
        });
    }

    group.finish();
}

fn bench_recurrence(c: &mut Criterion) {
    let mut group = c.benchmark_group("recurrence");
    let samples = find_samples(3, None).expect("z = 3 has pell samples");
    let records = enumerate_solutions(&params(1024, ParallelConfig::default()));
    let engine = TripleRecurrenceEngine::new(3, &samples)
        .expect("samples solve their equations")
        .with_halving(HalvingMode::Exact);

    for iterations in [4usize, 16, 64] {
        group.bench_with_input(
            BenchmarkId::new("exact", iterations),
            &iterations,
            |b, &iterations| b.iter(|| black_box(engine.run(records.clone(), iterations))),
        );
    }

    group.finish();
}

criterion_group!(benches, bench_sweep, bench_recurrence);
criterion_main!(benches);

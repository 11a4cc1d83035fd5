//! Criterion benchmarks for u-seqopt.
//!
//! Uses the 10-job reference instance to measure the evaluator, one
//! descent to a local optimum, and a short full ILS run.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use u_seqopt::eval::evaluate;
use u_seqopt::ils::{IlsConfig, IlsRunner};
use u_seqopt::model::reference_instance;
use u_seqopt::vns::VnsRunner;

fn bench_evaluate(c: &mut Criterion) {
    let instance = reference_instance();
    // A feasible-ish fixed permutation; cost does not matter here.
    let sequence = vec![8usize, 4, 7, 0, 5, 9, 3, 2, 1, 6];

    c.bench_function("evaluate/reference-10", |b| {
        b.iter(|| evaluate(black_box(&instance), black_box(&sequence)))
    });
}

fn bench_descent(c: &mut Criterion) {
    let instance = reference_instance();
    let start = vec![9usize, 4, 7, 0, 5, 8, 3, 2, 1, 6];

    c.bench_function("vns/reference-10", |b| {
        b.iter(|| VnsRunner::run(black_box(&instance), black_box(&start)))
    });
}

fn bench_ils(c: &mut Criterion) {
    let instance = reference_instance();
    let mut group = c.benchmark_group("ils/reference-10");
    group.sample_size(10);

    for max_stagnation in [5usize, 20] {
        let config = IlsConfig::default()
            .with_max_stagnation(max_stagnation)
            .with_seed(42);
        group.bench_with_input(
            BenchmarkId::from_parameter(max_stagnation),
            &config,
            |b, config| b.iter(|| IlsRunner::run(black_box(&instance), config)),
        );
    }
    group.finish();
}

criterion_group!(benches, bench_evaluate, bench_descent, bench_ils);
criterion_main!(benches);

//! Criterion benchmarks for the design-search strategies.
//!
//! Measures each strategy on the 20-point A-optimality problem at a few
//! budget levels, plus the raw criterion evaluation cost.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use designopt::criteria::{AOptimality, Criterion as Objective};
use designopt::design::Bounds;
use designopt::ga::{GaConfig, GaRunner};
use designopt::pso::{PsoConfig, PsoRunner};
use designopt::sa::{SaConfig, SaRunner};

fn bench_criterion_eval(c: &mut Criterion) {
    let design: Vec<f64> = (0..20).map(|i| i as f64 / 19.0).collect();
    c.bench_function("a_optimality_score", |b| {
        b.iter(|| AOptimality.score(black_box(&design)))
    });
}

fn bench_sa(c: &mut Criterion) {
    let mut group = c.benchmark_group("sa_a_optimal_20");
    group.sample_size(10);

    for &budget in &[2_000usize, 10_000] {
        let bounds = Bounds::unit(20);
        let config = SaConfig::default().with_max_iterations(budget);
        group.bench_with_input(BenchmarkId::from_parameter(budget), &config, |b, config| {
            b.iter(|| {
                let result = SaRunner::run(&AOptimality, black_box(&bounds), config, 42);
                black_box(result)
            })
        });
    }
    group.finish();
}

fn bench_pso(c: &mut Criterion) {
    let mut group = c.benchmark_group("pso_a_optimal_20");
    group.sample_size(10);

    for &iterations in &[50usize, 200] {
        let bounds = Bounds::unit(20);
        let config = PsoConfig::default().with_max_iterations(iterations);
        group.bench_with_input(
            BenchmarkId::from_parameter(iterations),
            &config,
            |b, config| {
                b.iter(|| {
                    let result = PsoRunner::run(&AOptimality, black_box(&bounds), config, 42);
                    black_box(result)
                })
            },
        );
    }
    group.finish();
}

fn bench_ga(c: &mut Criterion) {
    let mut group = c.benchmark_group("ga_a_optimal_20");
    group.sample_size(10);

    for &generations in &[30usize, 100] {
        let bounds = Bounds::unit(20);
        let config = GaConfig::default().with_max_generations(generations);
        group.bench_with_input(
            BenchmarkId::from_parameter(generations),
            &config,
            |b, config| {
                b.iter(|| {
                    let result = GaRunner::run(&AOptimality, black_box(&bounds), config, 42);
                    black_box(result)
                })
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_criterion_eval, bench_sa, bench_pso, bench_ga);
criterion_main!(benches);

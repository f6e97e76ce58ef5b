//! Criterion benchmarks for the quadga evolutionary loop.
//!
//! Measures full seeded runs across population sizes and generation counts,
//! plus the roulette-wheel draw in isolation.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use quadga::{selection, Engine, GaConfig, Population};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn bench_full_run(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_run");
    group.sample_size(10);

    for (pop, gen) in [(10usize, 50usize), (50, 50), (100, 100)] {
        let config = GaConfig::new(0.9, 0.05, true, pop, gen).with_seed(42);
        group.bench_with_input(
            BenchmarkId::new(format!("p{}_g{}", pop, gen), pop),
            &config,
            |b, config| {
                b.iter(|| {
                    let result = Engine::new(black_box(config.clone())).unwrap().run();
                    black_box(result)
                })
            },
        );
    }
    group.finish();
}

fn bench_roulette(c: &mut Criterion) {
    let mut group = c.benchmark_group("roulette");

    for &size in &[10usize, 100, 1000] {
        let mut rng = StdRng::seed_from_u64(42);
        let pop = Population::random(size, &mut rng);
        group.bench_with_input(BenchmarkId::from_parameter(size), &pop, |b, pop| {
            b.iter(|| black_box(selection::roulette(black_box(pop), &mut rng)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_full_run, bench_roulette);
criterion_main!(benches);

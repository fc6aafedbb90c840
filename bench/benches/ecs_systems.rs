//! Benchmarks of the example application, one per original suite entry.
//!
//! - "create destroy entity with components": one entity with all three components is created
//!   and destroyed per iteration.
//! - "N entities component systems update": one application update over `N` seeded entities.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use rusty_ecs_bench::{
    components::{BenchRegistry, Comflabulation, Direction, Position},
    scenario::{ScenarioConfig, build_application},
};

const ENTITY_COUNTS: [usize; 12] = [
    25, 50, 100, 200, 400, 800, 1_600, 3_200, 5_000, 10_000, 30_000, 100_000,
];

fn bench_create_destroy(c: &mut Criterion) {
    c.bench_function("create destroy entity with components", |b| {
        let mut registry = BenchRegistry::new();

        b.iter(|| {
            let entity = registry.create();
            registry.assign(entity, Position::default()).unwrap();
            registry.assign(entity, Direction::default()).unwrap();
            registry.assign(entity, Comflabulation::default()).unwrap();
            registry.destroy(black_box(entity)).unwrap();
        });
    });
}

fn bench_systems_update(c: &mut Criterion) {
    let mut group = c.benchmark_group("component systems update");

    for count in ENTITY_COUNTS {
        group.throughput(Throughput::Elements(count as u64));

        group.bench_with_input(BenchmarkId::new("entities", count), &count, |b, &n| {
            let config = ScenarioConfig {
                entity_count: n,
                ..Default::default()
            };
            let mut app = build_application(&config);

            b.iter(|| app.update(config.delta_time));
        });
    }

    group.finish();
}

fn bench_more_complex_update(c: &mut Criterion) {
    let mut group = c.benchmark_group("more complex systems update");

    for count in [100, 1_000, 10_000] {
        group.throughput(Throughput::Elements(count as u64));

        group.bench_with_input(BenchmarkId::new("entities", count), &count, |b, &n| {
            let config = ScenarioConfig {
                entity_count: n,
                more_complex: true,
                ..Default::default()
            };
            let mut app = build_application(&config);

            b.iter(|| app.update(config.delta_time));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_create_destroy,
    bench_systems_update,
    bench_more_complex_update
);
criterion_main!(benches);

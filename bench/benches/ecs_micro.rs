//! ECS microbenchmarks using Criterion.
//!
//! These benchmarks measure individual ECS operations in isolation:
//! - Entity create/destroy
//! - Component iteration, dense and sparse
//! - Component assign/remove

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use rusty_ecs_bench::components::*;

// =============================================================================
// Create Benchmarks
// =============================================================================

fn bench_create(c: &mut Criterion) {
    let mut group = c.benchmark_group("create");

    for count in [100, 1_000, 10_000] {
        group.throughput(Throughput::Elements(count as u64));

        group.bench_with_input(BenchmarkId::new("empty", count), &count, |b, &n| {
            b.iter(|| {
                let mut registry = BenchRegistry::new();
                for _ in 0..n {
                    black_box(registry.create());
                }
            });
        });

        group.bench_with_input(BenchmarkId::new("three_components", count), &count, |b, &n| {
            b.iter(|| {
                let mut registry = BenchRegistry::new();
                for _ in 0..n {
                    black_box(registry.create_with((
                        Position::default(),
                        Direction::default(),
                        Comflabulation::default(),
                    )));
                }
            });
        });

        // Recycled slots: every index has been used once already
        group.bench_with_input(BenchmarkId::new("recycled", count), &count, |b, &n| {
            let mut registry = BenchRegistry::new();
            let entities: Vec<_> = (0..n).map(|_| registry.create()).collect();
            for entity in entities {
                registry.destroy(entity).unwrap();
            }

            b.iter(|| {
                let entities: Vec<_> = (0..n).map(|_| registry.create()).collect();
                for entity in entities {
                    registry.destroy(black_box(entity)).unwrap();
                }
            });
        });
    }

    group.finish();
}

// =============================================================================
// Iteration Benchmarks
// =============================================================================

fn bench_iter(c: &mut Criterion) {
    let mut group = c.benchmark_group("iter");

    for count in [1_000, 10_000, 100_000] {
        group.throughput(Throughput::Elements(count as u64));

        group.bench_with_input(BenchmarkId::new("single", count), &count, |b, &n| {
            let mut registry = BenchRegistry::new();
            for i in 0..n {
                registry.create_with(Position {
                    x: i as f64,
                    y: 0.0,
                });
            }

            b.iter(|| {
                registry.for_each::<Position>(|_, position| position.x += 1.0);
            });
        });

        group.bench_with_input(BenchmarkId::new("pos_dir", count), &count, |b, &n| {
            let mut registry = BenchRegistry::new();
            for i in 0..n {
                registry.create_with((
                    Position {
                        x: i as f64,
                        y: 0.0,
                    },
                    Direction { x: 1.0, y: 0.5 },
                ));
            }

            b.iter(|| {
                registry.for_each::<(Position, Direction)>(|_, (position, direction)| {
                    position.x += direction.x;
                    position.y += direction.y;
                });
            });
        });

        // Only one entity in ten matches, so most slots are rejected by the signature test
        group.bench_with_input(BenchmarkId::new("sparse", count), &count, |b, &n| {
            let mut registry = BenchRegistry::new();
            for i in 0..n {
                if i % 10 == 0 {
                    registry.create_with((Position::default(), Comflabulation::default()));
                } else {
                    registry.create_with(Position::default());
                }
            }

            b.iter(|| {
                registry.for_each::<Comflabulation>(|_, comflab| comflab.dingy += 1);
            });
        });

        group.bench_with_input(BenchmarkId::new("matching", count), &count, |b, &n| {
            let mut registry = BenchRegistry::new();
            for _ in 0..n {
                registry.create_with((Position::default(), Direction::default()));
            }

            b.iter(|| black_box(registry.count::<(Position, Direction)>()));
        });
    }

    group.finish();
}

// =============================================================================
// Assign / Remove Benchmarks
// =============================================================================

fn bench_assign_remove(c: &mut Criterion) {
    let mut group = c.benchmark_group("assign_remove");

    for count in [100, 1_000, 10_000] {
        group.throughput(Throughput::Elements(count as u64));

        group.bench_with_input(BenchmarkId::new("single", count), &count, |b, &n| {
            let mut registry = BenchRegistry::new();
            let entities: Vec<_> = (0..n)
                .map(|_| registry.create_with(Position::default()))
                .collect();

            b.iter(|| {
                for &entity in &entities {
                    registry.assign(entity, Direction { x: 1.0, y: 1.0 }).unwrap();
                }
                for &entity in &entities {
                    black_box(registry.remove::<Direction>(entity).unwrap());
                }
            });
        });

        group.bench_with_input(BenchmarkId::new("bundle", count), &count, |b, &n| {
            let mut registry = BenchRegistry::new();
            let entities: Vec<_> = (0..n)
                .map(|_| registry.create_with(Position::default()))
                .collect();

            b.iter(|| {
                for &entity in &entities {
                    registry
                        .insert(entity, (Direction::default(), Comflabulation::default()))
                        .unwrap();
                }
                for &entity in &entities {
                    registry
                        .remove_bundle::<(Direction, Comflabulation)>(entity)
                        .unwrap();
                }
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_create, bench_iter, bench_assign_remove);
criterion_main!(benches);

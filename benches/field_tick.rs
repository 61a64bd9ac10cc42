//! Benchmarks for the particle field hot paths.
//!
//! Run with: `cargo bench`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use glint::{ParticleField, TrailConfig};

fn full_field(max: usize) -> ParticleField {
    let config = TrailConfig::default().with_max_particles(max);
    let mut field = ParticleField::seeded(config, 1).unwrap();
    for i in 0..max {
        field.spawn_at(i as f32, i as f32);
    }
    field
}

fn bench_tick(c: &mut Criterion) {
    let mut group = c.benchmark_group("tick");

    for max in [20usize, 200, 2_000] {
        group.bench_with_input(BenchmarkId::from_parameter(max), &max, |b, &max| {
            b.iter_batched(
                || full_field(max),
                |mut field| {
                    field.tick();
                    black_box(field)
                },
                criterion::BatchSize::SmallInput,
            )
        });
    }

    group.finish();
}

fn bench_pointer_move(c: &mut Criterion) {
    let mut group = c.benchmark_group("pointer_move");

    group.bench_function("gated_default", |b| {
        let mut field = full_field(20);
        let mut x = 0.0f32;
        b.iter(|| {
            x += 1.0;
            black_box(field.on_pointer_move(x, x))
        })
    });

    group.bench_function("spawn_with_eviction", |b| {
        let mut field = full_field(20);
        let mut x = 0.0f32;
        b.iter(|| {
            x += 1.0;
            black_box(field.spawn_at(x, x))
        })
    });

    group.finish();
}

criterion_group!(benches, bench_tick, bench_pointer_move);
criterion_main!(benches);

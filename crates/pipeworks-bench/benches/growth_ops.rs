//! Criterion benchmarks for the growth engine and scheduler.

use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use pipeworks_bench::{engine_for, reference_profile, run_to_completion, stress_profile};
use pipeworks_engine::PipeGenerator;
use std::hint::black_box;

/// Benchmark: a complete reference run, construction included.
fn bench_reference_run(c: &mut Criterion) {
    let config = reference_profile(42);
    c.bench_function("reference_run_to_completion", |b| {
        b.iter(|| {
            let mut engine = engine_for(&config);
            black_box(run_to_completion(&mut engine));
        });
    });
}

/// Benchmark: 1000 ticks on the stress grid, excluding allocation.
fn bench_stress_1k_ticks(c: &mut Criterion) {
    let config = stress_profile(7);
    c.bench_function("stress_1k_ticks", |b| {
        b.iter_batched(
            || engine_for(&config),
            |mut engine| {
                for _ in 0..1000 {
                    black_box(engine.tick());
                }
                engine
            },
            BatchSize::LargeInput,
        );
    });
}

/// Benchmark: one second of 60 Hz frames through the facade.
fn bench_generator_one_second(c: &mut Criterion) {
    c.bench_function("generator_60_frames", |b| {
        b.iter_batched(
            || PipeGenerator::new(reference_profile(3)).expect("valid profile"),
            |mut generator| {
                for _ in 0..60 {
                    black_box(generator.advance(1.0 / 60.0).ticks);
                }
                generator
            },
            BatchSize::LargeInput,
        );
    });
}

criterion_group!(
    benches,
    bench_reference_run,
    bench_stress_1k_ticks,
    bench_generator_one_second
);
criterion_main!(benches);

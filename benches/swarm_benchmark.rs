/*
 * Swarm Benchmark
 *
 * Measures the flocking step and the full scene frame at the page sizes
 * (7 and 23 boids) and at a few larger counts to show the O(n²) scan.
 */

use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use lucid_swarm::{step_swarm, Boid, FrameContext, FrameInput, Scene, SwarmParams, Variant};
use nannou::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn spawn(count: usize) -> (Vec<Boid>, SwarmParams) {
    let params = SwarmParams { count, ..SwarmParams::default() };
    let mut rng = StdRng::seed_from_u64(42);
    let boids = (0..count).map(|_| Boid::random(&mut rng, &params)).collect();
    (boids, params)
}

// Benchmark the flocking step on its own
fn bench_step_swarm(c: &mut Criterion) {
    let mut group = c.benchmark_group("step_swarm");
    let ctx = FrameContext::new(vec3(4.0, -2.0, 0.0));

    for count in [7usize, 23, 100, 500].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(count), count, |b, &n| {
            let (mut boids, params) = spawn(n);
            b.iter(|| {
                step_swarm(black_box(&mut boids), black_box(&ctx), &params);
            });
        });
    }

    group.finish();
}

// Benchmark a whole scene frame: field rotation, swarm step and buffer upload
fn bench_scene_frame(c: &mut Criterion) {
    let mut group = c.benchmark_group("scene_frame");

    for variant in [Variant::Founders, Variant::Landing] {
        group.bench_function(format!("{:?}", variant), |b| {
            let mut scene = Scene::new(variant.swarm_params(), variant.field_params());
            scene.start(&mut StdRng::seed_from_u64(7));
            scene.attach_buffer();
            scene.on_pointer_moved(vec2(900.0, 200.0), vec2(1280.0, 800.0));

            let mut frame = 0u32;
            b.iter(|| {
                frame += 1;
                let input = FrameInput {
                    elapsed: Duration::from_millis(16) * frame,
                    window_size: vec2(1280.0, 800.0),
                };
                black_box(scene.frame(&input));
            });
        });
    }

    group.finish();
}

// Configure the benchmarks
criterion_group! {
    name = benches;
    config = Criterion::default()
        .sample_size(20)
        .measurement_time(Duration::from_secs(5))
        .warm_up_time(Duration::from_secs(1));
    targets = bench_step_swarm, bench_scene_frame
}

criterion_main!(benches);

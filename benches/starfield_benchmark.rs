/*
 * Starfield Benchmark
 *
 * Measures the per-frame cost of the simulation: advancing the field,
 * projecting it into draw commands and building the quad batch.
 */

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Duration;

use starfield::{QuadRenderer, StarField, StarfieldParams};

const STAR_COUNTS: [usize; 4] = [1_000, 10_000, 50_000, 100_000];

fn make_field(params: &StarfieldParams, count: usize) -> StarField {
    let mut rng = StdRng::seed_from_u64(1);
    StarField::create(count, params.star_scale, params, &mut rng)
}

// Benchmark one simulation step
fn bench_advance(c: &mut Criterion) {
    let mut group = c.benchmark_group("advance");
    let params = StarfieldParams::default();

    for count in STAR_COUNTS.iter() {
        group.bench_with_input(BenchmarkId::from_parameter(count), count, |b, &n| {
            let mut field = make_field(&params, n);
            b.iter(|| black_box(field.advance(&params, params.delta_time(), false)));
        });
    }

    group.finish();
}

// Benchmark projecting the field in paint order
fn bench_projection(c: &mut Criterion) {
    let mut group = c.benchmark_group("projection");
    let params = StarfieldParams::default();

    for count in STAR_COUNTS.iter() {
        group.bench_with_input(BenchmarkId::from_parameter(count), count, |b, &n| {
            let field = make_field(&params, n);
            let mut commands = Vec::with_capacity(n);
            b.iter(|| {
                field.project_into(&params, &mut commands);
                black_box(commands.len());
            });
        });
    }

    group.finish();
}

// Benchmark building the batched quad mesh
fn bench_quad_mesh(c: &mut Criterion) {
    let mut group = c.benchmark_group("quad_mesh");
    let params = StarfieldParams::default();

    for count in STAR_COUNTS.iter() {
        group.bench_with_input(BenchmarkId::from_parameter(count), count, |b, &n| {
            let field = make_field(&params, n);
            let mut commands = Vec::with_capacity(n);
            field.project_into(&params, &mut commands);
            b.iter(|| black_box(QuadRenderer::build_mesh(&commands)));
        });
    }

    group.finish();
}

criterion_group! {
    name = benches;
    config = Criterion::default()
        .sample_size(10)
        .measurement_time(Duration::from_secs(5))
        .warm_up_time(Duration::from_secs(1));
    targets = bench_advance, bench_projection, bench_quad_mesh
}

criterion_main!(benches);

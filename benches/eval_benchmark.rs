//! Benchmarks for expression generation, parsing, evaluation and rendering.

#![allow(missing_docs)] // Benchmark macros generate undocumented functions
#![allow(clippy::unwrap_used)]

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use trigart::expr::{parse, random};
use trigart::raster::rasterize;
use trigart::{GeneratorConfig, Palette, RenderConfig};

/// A deep hand-written expression.
const DEEP: &str =
    "cos(pi*sin(pi*cos(cos(pi*cos(pi*y)))*cos(pi*cos(pi*sin(pi*y)))*sin(cos(y))*sin(pi*sin(pi))*y))";

fn bench_generate(c: &mut Criterion) {
    let mut rng = SmallRng::seed_from_u64(1);

    c.bench_function("generate_default", |b| {
        b.iter(|| black_box(random(&mut rng)));
    });
}

fn bench_parse(c: &mut Criterion) {
    c.bench_function("parse_deep", |b| {
        b.iter(|| black_box(parse(black_box(DEEP))));
    });
}

fn bench_eval(c: &mut Criterion) {
    let expr = parse(DEEP).unwrap();

    c.bench_function("eval_1000", |b| {
        b.iter(|| {
            let mut acc = 0.0;
            for i in 0..1000 {
                let t = f64::from(i) / 1000.0;
                acc += expr.eval(black_box(t), black_box(1.0 - t));
            }
            black_box(acc)
        });
    });
}

fn bench_rasterize(c: &mut Criterion) {
    let mut rng = SmallRng::seed_from_u64(42);
    let palette = Palette::random(&mut rng, &GeneratorConfig::default()).unwrap();
    let config = RenderConfig::square(256, 64);

    c.bench_function("rasterize_256", |b| {
        b.iter(|| black_box(rasterize(&palette, &config)));
    });
}

criterion_group!(benches, bench_generate, bench_parse, bench_eval, bench_rasterize);
criterion_main!(benches);

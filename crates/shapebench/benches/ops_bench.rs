//! Criterion benchmarks: each operation × layout × thread count.
//! Focus sizes: n in {1_000, 100_000} shapes, threads in {0, 1, 4}.
//! Results: by default under target/criterion.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use shapebench::api;
use shapebench::random::{generate, GenCfg};
use shapebench::repr::encode_all;
use shapebench::{ComposedShape, Encoding, ExecCfg, FlatShape, GenericShape, Shape, ShapeKind};

fn shapes(count: usize) -> Vec<Shape> {
    let cfg = GenCfg {
        count,
        ..GenCfg::default()
    };
    generate(&cfg, 42).expect("default generator params are valid")
}

fn bench_layout<E: Encoding>(c: &mut Criterion, canonical: &[Shape]) {
    let encoded: Vec<E> = encode_all(canonical);
    let mut group = c.benchmark_group(format!("{}/{}", E::REPR, canonical.len()));
    for &threads in &[0usize, 1, 4] {
        let cfg = ExecCfg::parallel(threads);
        group.bench_with_input(BenchmarkId::new("filter", threads), &cfg, |b, &cfg| {
            b.iter(|| api::filter(&encoded, ShapeKind::Circle, cfg).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("mutation", threads), &cfg, |b, &cfg| {
            b.iter(|| api::mutation(&encoded, cfg).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("occupation", threads), &cfg, |b, &cfg| {
            b.iter(|| api::occupation(&encoded, cfg).unwrap())
        });
    }
    group.finish();
}

fn bench_ops(c: &mut Criterion) {
    for &n in &[1_000usize, 100_000] {
        let canonical = shapes(n);
        bench_layout::<FlatShape>(c, &canonical);
        bench_layout::<ComposedShape>(c, &canonical);
        bench_layout::<GenericShape>(c, &canonical);
    }
}

criterion_group!(benches, bench_ops);
criterion_main!(benches);

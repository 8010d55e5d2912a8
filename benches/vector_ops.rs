//! Micro benchmarks for the hot vector operations.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use fulgor_numerics::prelude::*;

fn bench_dot_and_mag(c: &mut Criterion) {
    let mut group = c.benchmark_group("dot_and_mag");

    let a2 = Vector2f::xy(1.0, 2.0);
    let b2 = Vector2f::xy(3.0, 4.0);
    group.bench_with_input(BenchmarkId::new("dot", 2), &(a2, b2), |b, (x, y)| {
        b.iter(|| black_box(x).dot(black_box(y)))
    });

    let a3 = Vector3f::xyz(1.0, 2.0, 3.0);
    let b3 = Vector3f::xyz(4.0, 5.0, 6.0);
    group.bench_with_input(BenchmarkId::new("dot", 3), &(a3, b3), |b, (x, y)| {
        b.iter(|| black_box(x).dot(black_box(y)))
    });

    let a4 = Vector4f::xyzw(1.0, 2.0, 3.0, 4.0);
    let b4 = Vector4f::xyzw(5.0, 6.0, 7.0, 8.0);
    group.bench_with_input(BenchmarkId::new("dot", 4), &(a4, b4), |b, (x, y)| {
        b.iter(|| black_box(x).dot(black_box(y)))
    });

    group.bench_function("mag_3", |b| b.iter(|| black_box(b3).mag()));

    group.finish();
}

fn bench_geometry(c: &mut Criterion) {
    let mut group = c.benchmark_group("geometry");

    let a = Vector3d::xyz(1.0, 2.0, 3.0);
    let v = Vector3d::xyz(4.0, 5.0, 6.0);

    group.bench_function("project", |b| b.iter(|| black_box(a).project(black_box(&v))));
    group.bench_function("reject", |b| b.iter(|| black_box(a).reject(black_box(&v))));
    group.bench_function("cross", |b| b.iter(|| black_box(a).cross(black_box(&v))));
    group.bench_function("normalized", |b| b.iter(|| black_box(a).normalized()));

    group.finish();
}

fn bench_elementwise(c: &mut Criterion) {
    let mut group = c.benchmark_group("elementwise");

    let a = Vector4i::xyzw(1, 2, 3, 4);
    let v = Vector4i::xyzw(8, 6, 4, 2);

    group.bench_function("add_mul", |b| b.iter(|| (black_box(a) + black_box(v)) * black_box(3)));
    group.bench_function("cmp_gt", |b| b.iter(|| black_box(a).cmp_gt(black_box(&v))));

    group.finish();
}

criterion_group!(benches, bench_dot_and_mag, bench_geometry, bench_elementwise);
criterion_main!(benches);

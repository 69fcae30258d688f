// ============================================================================
// Decimal Number Benchmarks
// ============================================================================
//
// Benchmark Categories:
// 1. Scalar - construction, arithmetic and text conversion of Decimal
// 2. Math - square root and trigonometry
// 3. Vector - normalization and products
// 4. Batch - Bezier sampling and k-means clustering
// ============================================================================

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use decimal_number::prelude::*;

// ============================================================================
// Scalar Benchmarks
// ============================================================================

fn benchmark_scalar(c: &mut Criterion) {
    let mut group = c.benchmark_group("decimal_scalar");

    group.bench_function("from_f64", |b| {
        b.iter(|| black_box(Decimal::from(black_box(11111.11f64))));
    });

    group.bench_function("parse", |b| {
        b.iter(|| black_box("454135451684.46415416".parse::<Decimal>()));
    });

    let x = Decimal::from("1231515615.32131");
    let y = Decimal::from("98486484.8916451");
    group.bench_function("mul_div", |b| {
        b.iter(|| black_box(black_box(x) * black_box(y) / 7));
    });

    group.bench_function("to_fixed", |b| {
        b.iter(|| black_box(black_box(x).to_fixed(5)));
    });

    group.finish();
}

// ============================================================================
// Math Benchmarks
// ============================================================================

fn benchmark_math(c: &mut Criterion) {
    let mut group = c.benchmark_group("decimal_math");
    let angle = Decimal::from("0.75");

    group.bench_function("sqrt", |b| {
        b.iter(|| black_box(math::sqrt(black_box(Decimal::from(2)))));
    });

    group.bench_function("sin_cos", |b| {
        b.iter(|| black_box(math::sin_cos(black_box(angle))));
    });

    group.bench_function("atan2", |b| {
        b.iter(|| black_box(math::atan2(black_box(angle), black_box(Decimal::ONE))));
    });

    for degrees in ["540", "1000000000"] {
        let value = Decimal::from(degrees);
        group.bench_with_input(BenchmarkId::new("unwind_degrees", degrees), &value, |b, v| {
            b.iter(|| black_box(math::unwind_degrees(*v)));
        });
    }

    group.finish();
}

// ============================================================================
// Vector Benchmarks
// ============================================================================

fn benchmark_vector(c: &mut Criterion) {
    let mut group = c.benchmark_group("decimal_vector");
    let a = DecimalVector::new("1.5", "-2.25", 3);
    let b = DecimalVector::new(4, "0.5", "-6.125");
    let tolerance = Tolerances::DEFAULT.small_number;

    group.bench_function("dot_cross", |bench| {
        bench.iter(|| black_box((black_box(a) | b, black_box(a) ^ b)));
    });

    group.bench_function("get_safe_normal", |bench| {
        bench.iter(|| black_box(black_box(a).get_safe_normal(tolerance, DecimalVector::ZERO)));
    });

    group.bench_function("parse", |bench| {
        bench.iter(|| black_box("X=1.5 Y=-2.25 Z=3".parse::<DecimalVector>()));
    });

    group.finish();
}

// ============================================================================
// Batch Benchmarks
// ============================================================================

fn benchmark_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("decimal_batch");

    let control = [
        DecimalVector::new(0, 0, 0),
        DecimalVector::new(0, 10, 0),
        DecimalVector::new(10, 10, 0),
        DecimalVector::new(10, 0, 0),
    ];
    for samples in [8usize, 64, 256] {
        group.bench_with_input(BenchmarkId::new("evaluate_bezier", samples), &samples, |b, &n| {
            b.iter(|| {
                let mut points = Vec::with_capacity(n);
                black_box(DecimalVector::evaluate_bezier(&control, n, &mut points))
            });
        });
    }

    let points: Vec<DecimalVector> = (0..200i32)
        .map(|i| {
            let base = if i % 2 == 0 { 0 } else { 100 };
            DecimalVector::new(base + i % 7, i % 5, i % 3)
        })
        .collect();
    group.bench_function("generate_cluster_centers", |b| {
        b.iter(|| {
            let mut clusters = vec![DecimalVector::new(1, 0, 0), DecimalVector::new(99, 0, 0)];
            DecimalVector::generate_cluster_centers(&mut clusters, &points, 10, 1);
            black_box(clusters)
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_scalar,
    benchmark_math,
    benchmark_vector,
    benchmark_batch
);
criterion_main!(benches);

//! Benchmarks for the Hasse-series zeta evaluator.

use campbench_logic::complex::Complex;
use campbench_logic::zeta::riemann_zeta;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn bench_zeta(c: &mut Criterion) {
    c.bench_function("zeta_real_argument", |b| {
        b.iter(|| riemann_zeta(black_box(Complex::from_real(2.0)), 1e-12, 64))
    });

    c.bench_function("zeta_critical_line", |b| {
        b.iter(|| riemann_zeta(black_box(Complex::new(0.5, 14.0)), 1e-12, 256))
    });
}

criterion_group!(benches, bench_zeta);
criterion_main!(benches);

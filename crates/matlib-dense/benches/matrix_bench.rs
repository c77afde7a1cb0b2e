//! Benchmarks for dense matrix arithmetic.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use matlib_dense::Matrix;

/// Generates a square matrix with deterministic small entries.
fn sample_matrix(n: usize) -> Matrix<f64> {
    let data: Vec<f64> = (0..n * n).map(|i| ((i % 100) as f64) - 50.0).collect();
    Matrix::from_vec(n, n, data).unwrap()
}

fn bench_matrix_arithmetic(c: &mut Criterion) {
    let mut group = c.benchmark_group("matrix");

    for size in [8, 32, 64, 128] {
        let a = sample_matrix(size);
        let b = sample_matrix(size);

        group.bench_with_input(BenchmarkId::new("add", size), &size, |bench, _| {
            bench.iter(|| black_box(&a).checked_add(black_box(&b)).unwrap());
        });

        group.bench_with_input(BenchmarkId::new("mul", size), &size, |bench, _| {
            bench.iter(|| black_box(&a).checked_mul(black_box(&b)).unwrap());
        });

        group.bench_with_input(BenchmarkId::new("transpose", size), &size, |bench, _| {
            bench.iter(|| black_box(&a).transpose().unwrap());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_matrix_arithmetic);
criterion_main!(benches);

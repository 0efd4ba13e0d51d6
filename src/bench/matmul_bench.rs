use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use densemat::{LEAF_SIZE, Matrix, multiply, multiply_naive, multiply_parallel, power};

fn square(size: usize, modulus: usize) -> Matrix {
    let data = (0..size * size).map(|i| (i % modulus) as f64).collect();
    Matrix::from_vec(size, size, data).expect("benchmark matrix")
}

fn bench_multiply(c: &mut Criterion) {
    let mut group = c.benchmark_group("multiply");
    group.sample_size(10);

    for size in [LEAF_SIZE, 2 * LEAF_SIZE, 4 * LEAF_SIZE + 37] {
        let a = square(size, 100);
        let b = square(size, 97);

        group.bench_with_input(BenchmarkId::new("naive", size), &size, |bench, _| {
            bench.iter(|| multiply_naive(black_box(&a), black_box(&b)))
        });
        group.bench_with_input(BenchmarkId::new("strassen", size), &size, |bench, _| {
            bench.iter(|| multiply(black_box(&a), black_box(&b)))
        });
        group.bench_with_input(BenchmarkId::new("strassen_1_thread", size), &size, |bench, _| {
            bench.iter(|| multiply_parallel(black_box(&a), black_box(&b), 1))
        });
    }
    group.finish();
}

fn bench_transpose(c: &mut Criterion) {
    let m = square(512, 100);
    c.bench_function("transpose_then_flatten_512", |bench| {
        bench.iter(|| {
            let mut t = m.clone();
            t.transpose();
            black_box(t.to_vec())
        })
    });
}

fn bench_power(c: &mut Criterion) {
    let m = square(2 * LEAF_SIZE, 3).scale(0.01);
    c.bench_function("power_13", |bench| bench.iter(|| power(black_box(&m), 13)));
}

criterion_group!(benches, bench_multiply, bench_transpose, bench_power);
criterion_main!(benches);

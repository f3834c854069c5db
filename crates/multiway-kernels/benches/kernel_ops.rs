//! Micro-benchmarks for the multilinear kernels.
//!
//! Covers the two operations that dominate a CP-ALS iteration: mode-n
//! unfolding and the Khatri-Rao product.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use multiway_kernels::{khatri_rao, unfold};
use scirs2_core::ndarray_ext::{Array, Array2, IxDyn};
use std::hint::black_box;

fn bench_unfold(c: &mut Criterion) {
    let mut group = c.benchmark_group("unfold");

    for &size in &[16usize, 32, 48] {
        let shape = vec![size, size, size];
        let total: usize = shape.iter().product();
        let tensor =
            Array::from_shape_vec(IxDyn(&shape), (0..total).map(|x| x as f64).collect()).unwrap();

        group.throughput(Throughput::Elements(total as u64));
        for mode in 0..3 {
            group.bench_with_input(
                BenchmarkId::from_parameter(format!("{size}^3_mode{mode}")),
                &mode,
                |b, &mode| b.iter(|| unfold(black_box(&tensor.view()), mode).unwrap()),
            );
        }
    }

    group.finish();
}

fn bench_khatri_rao(c: &mut Criterion) {
    let mut group = c.benchmark_group("khatri_rao");

    for &(rows, rank) in &[(32usize, 8usize), (64, 16), (128, 16)] {
        let a = Array2::<f64>::from_shape_fn((rows, rank), |(i, j)| (i + j) as f64);
        let b = Array2::<f64>::from_shape_fn((rows, rank), |(i, j)| (i * 2 + j) as f64);
        let c_mat = Array2::<f64>::from_shape_fn((rows, rank), |(i, j)| (i + j * 3) as f64);

        group.throughput(Throughput::Elements((rows * rows * rows * rank) as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{rows}x{rank}_x3")),
            &rank,
            |bch, _| {
                bch.iter(|| {
                    khatri_rao(
                        black_box(&[a.view(), b.view(), c_mat.view()]),
                        None,
                        true,
                    )
                    .unwrap()
                })
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_unfold, bench_khatri_rao);
criterion_main!(benches);

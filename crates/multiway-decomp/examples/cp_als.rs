//! CP-ALS (Canonical Polyadic via Alternating Least Squares) example.
//!
//! Decomposes a synthetic low-rank tensor, prints the run diagnostics, and
//! verifies the reconstruction quality.
//!
//! Run with:
//! ```bash
//! cargo run --example cp_als
//! ```

use multiway_core::{Tensor, TensorCpd};
use multiway_decomp::{Cpd, DecompConfig, Decomposition, Init};
use scirs2_core::ndarray_ext::Array2;
use scirs2_core::random::{Rng, SeedableRng, StdRng};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    println!("{}", "=".repeat(72));
    println!("CP-ALS Decomposition Example");
    println!("{}", "=".repeat(72));
    println!();

    // Plant an exactly rank-5 tensor from random factors.
    let shape = [12, 10, 8];
    let rank = 5;
    let mut rng = StdRng::seed_from_u64(42);
    let factors: Vec<Array2<f64>> = shape
        .iter()
        .map(|&d| Array2::from_shape_fn((d, rank), |_| rng.random::<f64>() * 2.0 - 1.0))
        .collect();
    let tensor = TensorCpd::new(factors, None)?.reconstruct()?;

    println!("Tensor shape: {:?}", tensor.shape());
    println!("Planted rank: {}", rank);
    println!();

    let cpd = Cpd::new(
        DecompConfig::default()
            .with_init(Init::Random)
            .with_random_state(7)
            .with_max_iter(200)
            .with_epsilon(1e-8)
            .with_tol(1e-12)
            .with_verbose(true),
    );

    let run = cpd.decompose(&tensor, &[rank])?;

    println!();
    println!("Results:");
    println!("  - Iterations: {}", run.report.n_iters());
    println!("  - Stop reason: {:?}", run.report.stop());
    println!("  - Converged: {}", run.report.converged());
    println!("  - Final cost: {:?}", run.report.final_cost());
    println!("  - Factor matrix shapes:");
    for (mode, factor) in run.cpd.factors().iter().enumerate() {
        println!("    Mode {}: {:?}", mode, factor.shape());
    }
    println!();

    let reconstruction = run.cpd.reconstruct()?;
    let relative_error =
        (&tensor - &reconstruction).frobenius_norm() / tensor.frobenius_norm();
    println!("Reconstruction relative error: {:.3e}", relative_error);
    println!();

    println!("{}", Decomposition::<f64>::plot(&cpd, &run.report)?);

    // A fresh SVD-initialized run on a noisy tensor for comparison.
    let noise = Tensor::<f64>::random_uniform(tensor.shape(), -0.01, 0.01);
    let noisy = &tensor + &noise;
    let svd_run = Cpd::new(
        DecompConfig::default()
            .with_init(Init::Svd)
            .with_max_iter(100)
            .with_epsilon(1e-6)
            .with_tol(1e-10),
    )
    .decompose(&noisy, &[rank])?;
    println!(
        "SVD-initialized run on noisy data: {} iterations, final cost {:?}",
        svd_run.report.n_iters(),
        svd_run.report.final_cost()
    );

    Ok(())
}

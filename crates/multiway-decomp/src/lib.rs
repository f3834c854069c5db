//! # multiway-decomp - Tensor Decomposition Algorithms
//!
//! Decomposition algorithms for the multiway stack. The crate currently
//! ships one concrete algorithm, CP-ALS, behind a polymorphic contract that
//! future decomposition families plug into.
//!
//! ## CP Decomposition (Canonical Polyadic / CANDECOMP/PARAFAC)
//!
//! Factorizes a tensor into a sum of R rank-1 components:
//!
//! ```text
//! X ≈ Σᵣ λᵣ (u₁ᵣ ⊗ u₂ᵣ ⊗ ... ⊗ uₙᵣ)
//! ```
//!
//! **Use cases:**
//! - Factor analysis and dimensionality reduction
//! - Signal separation and blind source separation
//! - Chemometrics and spectroscopy
//!
//! ## Quick Start
//!
//! ```no_run
//! use multiway_core::Tensor;
//! use multiway_decomp::{Cpd, DecompConfig, Decomposition, Init};
//!
//! let tensor = Tensor::<f64>::random_uniform(&[20, 20, 20], 0.0, 1.0);
//!
//! let cpd = Cpd::new(
//!     DecompConfig::default()
//!         .with_init(Init::Random)
//!         .with_max_iter(100)
//!         .with_tol(1e-5),
//! );
//! let run = cpd.decompose(&tensor, &[8])?;
//!
//! println!("converged: {}", run.report.converged());
//! println!("final cost: {:?}", run.report.final_cost());
//! let approx = run.cpd.reconstruct()?;
//! # Ok::<(), anyhow::Error>(())
//! ```
//!
//! ## Contract
//!
//! Algorithms implement [`Decomposition`]: `decompose` is required, `plot`
//! (a textual rendering of a run's cost history) is optional and fails with
//! a not-implemented error unless overridden. Each `decompose` call returns
//! a fresh [`RunReport`]; engines hold configuration only, so a single
//! configured engine can be reused or cloned freely.
//!
//! ## SciRS2 Integration
//!
//! All linear algebra goes through `scirs2_linalg` (SVD, least squares);
//! random number generation uses `scirs2_core::random`.

#![deny(warnings)]

pub mod base;
pub mod cpd;


// Re-exports
pub use base::{
    cost_stagnated, DecompConfig, DecompError, Decomposition, Init, RunReport, StopReason,
};
pub use cpd::{Cpd, CpdRun};

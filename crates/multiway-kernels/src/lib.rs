//! # multiway-kernels
//!
//! Multilinear algebra primitives for the multiway decomposition stack.
//!
//! ## Overview
//!
//! This crate provides the stateless numerical vocabulary that tensor
//! decomposition algorithms compose:
//!
//! - **Unfold / fold**: matricization along a chosen mode and its exact
//!   inverse (pure index permutation, bit-exact round trip)
//! - **Mode-n product**: tensor-times-matrix contraction along one mode
//! - **Khatri-Rao product**: column-wise Kronecker product over a matrix
//!   list, with `skip_matrix`/`reverse` preprocessing
//! - **Hadamard product**: element-wise product over a matrix list
//! - **Kronecker product**: block tensor product over a matrix list
//!
//! All operations are deterministic, free of side effects and shared state,
//! and fail fast with a structured [`KernelError`] on misuse.
//!
//! ## Quick Start
//!
//! ```
//! use scirs2_core::ndarray_ext::{Array, Array2};
//! use multiway_kernels::{fold, khatri_rao, unfold};
//!
//! let tensor = Array::from_shape_vec(vec![2, 3, 4], (0..24).map(|x| x as f64).collect())?;
//!
//! // Matricize along mode 1 and invert the operation exactly.
//! let unfolded = unfold(&tensor.view(), 1)?;
//! assert_eq!(unfolded.shape(), &[3, 8]);
//! let restored = fold(&unfolded.view(), 1, &[2, 3, 4])?;
//! assert_eq!(restored, tensor);
//!
//! // Khatri-Rao product over a list of matrices.
//! let a = Array2::<f64>::ones((10, 5));
//! let b = Array2::<f64>::ones((8, 5));
//! let kr = khatri_rao(&[a.view(), b.view()], None, false)?;
//! assert_eq!(kr.shape(), &[80, 5]);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## SciRS2 Integration
//!
//! All array operations use `scirs2_core::ndarray_ext`. Direct use of
//! `ndarray` is not permitted in this workspace.

#![deny(warnings)]

pub mod error;
pub mod hadamard;
pub mod khatri_rao;
pub mod kronecker;
pub mod nmode;
pub mod unfold;

mod utils;


// Re-exports
pub use error::{KernelError, KernelResult};
pub use hadamard::hadamard;
pub use khatri_rao::khatri_rao;
pub use kronecker::kronecker;
pub use nmode::mode_n_product;
pub use unfold::{fold, unfold};

//! # multiway-core - Dense N-way Tensor Data Model
//!
//! Core data types for the multiway decomposition stack:
//!
//! - [`Tensor`]: a dense N-dimensional array with shape/order accessors,
//!   elementwise arithmetic, and Frobenius-norm helpers. Decomposition
//!   algorithms only ever read a `Tensor`.
//! - [`TensorCpd`]: a tensor in Kruskal form: one factor matrix per mode
//!   (all sharing the same column count R) plus optional per-component
//!   weights, with dense reconstruction.
//!
//! ## SciRS2 Integration
//!
//! All array operations use `scirs2_core::ndarray_ext`.
//! Random number generation uses `scirs2_core::random`.
//!
//! ## Quick Start
//!
//! ```
//! use multiway_core::Tensor;
//!
//! let tensor = Tensor::<f64>::zeros(&[2, 3, 4]);
//! assert_eq!(tensor.shape(), &[2, 3, 4]);
//! assert_eq!(tensor.order(), 3);
//! ```

#![deny(warnings)]

pub mod kruskal;
pub mod tensor;


pub use kruskal::TensorCpd;
pub use tensor::Tensor;

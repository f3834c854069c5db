//! # multiway - N-way Tensor Decomposition Stack
//!
//! This is the meta crate that re-exports the multiway components for
//! convenient access.
//!
//! ## Components
//!
//! ### Core Data Model ([`core`])
//!
//! Dense N-way tensors and Kruskal-form decomposition results.
//!
//! ```
//! use multiway::core::Tensor;
//!
//! let tensor = Tensor::<f64>::zeros(&[2, 3, 4]);
//! assert_eq!(tensor.order(), 3);
//! ```
//!
//! ### Multilinear Kernels ([`kernels`])
//!
//! Unfold/fold, mode-n products, Khatri-Rao, Hadamard, Kronecker.
//!
//! ```
//! use multiway::kernels::khatri_rao;
//! use scirs2_core::ndarray_ext::Array2;
//!
//! let a = Array2::<f64>::ones((10, 5));
//! let b = Array2::<f64>::ones((8, 5));
//! let kr = khatri_rao(&[a.view(), b.view()], None, false).unwrap();
//! assert_eq!(kr.shape(), &[80, 5]);
//! ```
//!
//! ### Decomposition Algorithms ([`decomp`])
//!
//! CP-ALS behind the shared [`decomp::Decomposition`] contract.
//!
//! ```no_run
//! use multiway::prelude::*;
//!
//! let tensor = Tensor::<f64>::random_uniform(&[10, 10, 10], 0.0, 1.0);
//! let run = Cpd::new(DecompConfig::default().with_init(Init::Random))
//!     .decompose(&tensor, &[4])?;
//! println!("final cost: {:?}", run.report.final_cost());
//! # Ok::<(), multiway::decomp::DecompError>(())
//! ```

#![deny(warnings)]

// Re-export all components
pub use multiway_core as core;
pub use multiway_decomp as decomp;
pub use multiway_kernels as kernels;

pub mod prelude {
    //! Prelude module for convenient imports
    //!
    //! # Example
    //!
    //! ```
    //! use multiway::prelude::*;
    //!
    //! let tensor = Tensor::<f64>::zeros(&[4, 5, 6]);
    //! assert_eq!(tensor.shape(), &[4, 5, 6]);
    //! ```

    // Core types
    pub use crate::core::{Tensor, TensorCpd};

    // Decomposition contract and algorithms
    pub use crate::decomp::{Cpd, CpdRun, DecompConfig, Decomposition, Init, RunReport, StopReason};

    // Common kernels
    pub use crate::kernels::{fold, hadamard, khatri_rao, kronecker, mode_n_product, unfold};
}

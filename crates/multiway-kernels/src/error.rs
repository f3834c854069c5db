//! Error types for the multilinear kernel operations.
//!
//! Every primitive fails fast with a structured error on misuse; there is no
//! recovery path inside the kernels themselves.

use thiserror::Error;

/// Error type for kernel operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum KernelError {
    /// Mode/axis out of bounds for the tensor's order.
    #[error("{op}: mode {mode} out of bounds for tensor of order {order}")]
    InvalidMode {
        op: &'static str,
        mode: usize,
        order: usize,
    },

    /// Fewer matrices than the operation needs (after skipping).
    #[error("{op}: requires at least {required} matrices, but {given} given")]
    TooFewMatrices {
        op: &'static str,
        required: usize,
        given: usize,
    },

    /// Matrices in a list do not share a column count.
    #[error(
        "{op}: all matrices must have the same number of columns \
         (matrix {index} has {actual}, expected {expected})"
    )]
    ColumnMismatch {
        op: &'static str,
        index: usize,
        expected: usize,
        actual: usize,
    },

    /// Operand shapes are incompatible.
    #[error("{op}: incompatible shapes (expected {expected:?}, got {actual:?})")]
    ShapeMismatch {
        op: &'static str,
        expected: Vec<usize>,
        actual: Vec<usize>,
    },

    /// Matrix columns do not match the size of the contracted tensor mode.
    #[error("{op}: matrix has {actual} columns but tensor mode {mode} has size {expected}")]
    ContractionMismatch {
        op: &'static str,
        mode: usize,
        expected: usize,
        actual: usize,
    },

    /// Generic operation failure with context.
    #[error("{op}: {message}")]
    OperationError { op: &'static str, message: String },
}

/// Result type for kernel operations.
pub type KernelResult<T> = Result<T, KernelError>;

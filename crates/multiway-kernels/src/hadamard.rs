//! Hadamard (element-wise) product of a list of matrices.
//!
//! For same-shape matrices the Hadamard product multiplies element-wise,
//! accumulated as a left-fold over the list. In CP-ALS it combines the Gram
//! matrices of the factor matrices not currently being updated.
//!
//! # SciRS2 Integration
//!
//! All array operations use `scirs2_core::ndarray_ext`.

use crate::error::{KernelError, KernelResult};
use crate::utils::select_matrices;
use scirs2_core::ndarray_ext::{Array2, ArrayView2};
use scirs2_core::numeric::Num;

/// Compute the Hadamard product of a list of same-shape matrices.
///
/// `skip_matrix` drops the matrix at that index before the product is
/// formed; `reverse` then reverses the remaining order (skip happens first;
/// the result is order-independent, but the preprocessing matches the other
/// list products).
///
/// # Errors
///
/// Returns an error if no matrix remains after skipping, or the shapes
/// differ.
///
/// # Examples
///
/// ```
/// use scirs2_core::ndarray_ext::array;
/// use multiway_kernels::hadamard;
///
/// let a = array![[1.0, 2.0], [3.0, 4.0]];
/// let b = array![[5.0, 6.0], [7.0, 8.0]];
/// let c = hadamard(&[a.view(), b.view()], None, false).unwrap();
/// assert_eq!(c[[0, 0]], 5.0);
/// assert_eq!(c[[1, 1]], 32.0);
/// ```
pub fn hadamard<T>(
    matrices: &[ArrayView2<T>],
    skip_matrix: Option<usize>,
    reverse: bool,
) -> KernelResult<Array2<T>>
where
    T: Clone + Num,
{
    let selected = select_matrices(matrices, skip_matrix, reverse);

    if selected.is_empty() {
        return Err(KernelError::TooFewMatrices {
            op: "hadamard",
            required: 1,
            given: 0,
        });
    }

    let shape = selected[0].shape().to_vec();
    for matrix in &selected[1..] {
        if matrix.shape() != shape.as_slice() {
            return Err(KernelError::ShapeMismatch {
                op: "hadamard",
                expected: shape,
                actual: matrix.shape().to_vec(),
            });
        }
    }

    let mut result = selected[0].to_owned();
    for matrix in &selected[1..] {
        result = &result * matrix;
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use scirs2_core::ndarray_ext::array;

    #[test]
    fn test_basic() {
        let a = array![[1.0, 2.0], [3.0, 4.0]];
        let b = array![[5.0, 6.0], [7.0, 8.0]];
        let c = hadamard(&[a.view(), b.view()], None, false).unwrap();

        assert_eq!(c.shape(), &[2, 2]);
        assert_eq!(c[[0, 0]], 5.0);
        assert_eq!(c[[0, 1]], 12.0);
        assert_eq!(c[[1, 0]], 21.0);
        assert_eq!(c[[1, 1]], 32.0);
    }

    #[test]
    fn test_three_matrices() {
        let a = array![[1.0, 2.0]];
        let b = array![[3.0, 4.0]];
        let c = array![[5.0, 6.0]];
        let result = hadamard(&[a.view(), b.view(), c.view()], None, false).unwrap();
        assert_eq!(result[[0, 0]], 15.0);
        assert_eq!(result[[0, 1]], 48.0);
    }

    #[test]
    fn test_single_matrix_is_identity() {
        let a = array![[1.0, 2.0], [3.0, 4.0]];
        let result = hadamard(&[a.view()], None, false).unwrap();
        assert_eq!(result, a);
    }

    #[test]
    fn test_skip_matrix() {
        let a = array![[2.0]];
        let b = array![[100.0]];
        let c = array![[3.0]];
        let result = hadamard(&[a.view(), b.view(), c.view()], Some(1), false).unwrap();
        assert_eq!(result[[0, 0]], 6.0);
    }

    #[test]
    fn test_empty_after_skip() {
        let a = array![[1.0]];
        let err = hadamard(&[a.view()], Some(0), false).unwrap_err();
        assert!(matches!(err, KernelError::TooFewMatrices { given: 0, .. }));
    }

    #[test]
    fn test_shape_mismatch() {
        let a = array![[1.0, 2.0]];
        let b = array![[1.0], [2.0]];
        let err = hadamard(&[a.view(), b.view()], None, false).unwrap_err();
        assert!(matches!(err, KernelError::ShapeMismatch { .. }));
    }
}

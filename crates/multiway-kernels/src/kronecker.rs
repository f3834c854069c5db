//! Kronecker product of a list of matrices.
//!
//! For matrices A (m×n) and B (p×q), A ⊗ B is the (mp × nq) block matrix
//! whose (i,j) block is aᵢⱼ·B. Over a list, the product accumulates left to
//! right; row counts and column counts both multiply.
//!
//! # SciRS2 Integration
//!
//! All array operations use `scirs2_core::ndarray_ext`.

use crate::error::{KernelError, KernelResult};
use crate::utils::select_matrices;
use scirs2_core::ndarray_ext::{Array2, ArrayView2};
use scirs2_core::numeric::Num;

/// Compute the Kronecker product of a list of matrices.
///
/// `skip_matrix` drops the matrix at that index before the product is
/// formed; `reverse` then reverses the remaining order (skip happens first).
///
/// # Returns
///
/// A matrix of shape `(∏ rows(Mᵢ), ∏ cols(Mᵢ))` over the selected matrices.
///
/// # Errors
///
/// Returns an error if no matrix remains after skipping.
///
/// # Examples
///
/// ```
/// use scirs2_core::ndarray_ext::array;
/// use multiway_kernels::kronecker;
///
/// let a = array![[1.0, 2.0], [3.0, 4.0]];
/// let b = array![[0.0, 1.0], [1.0, 0.0]];
/// let c = kronecker(&[a.view(), b.view()], None, false).unwrap();
/// assert_eq!(c.shape(), &[4, 4]);
/// assert_eq!(c[[0, 1]], 1.0); // a00 * b01
/// assert_eq!(c[[3, 2]], 0.0); // a11 * b11
/// ```
pub fn kronecker<T>(
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
            op: "kronecker",
            required: 1,
            given: 0,
        });
    }

    let mut result = selected[0].to_owned();
    for matrix in &selected[1..] {
        result = kron_pair(&result.view(), matrix);
    }
    Ok(result)
}

/// Kronecker product of two matrices.
fn kron_pair<T>(a: &ArrayView2<T>, b: &ArrayView2<T>) -> Array2<T>
where
    T: Clone + Num,
{
    let (p, q) = (b.shape()[0], b.shape()[1]);
    let (m, n) = (a.shape()[0], a.shape()[1]);

    let mut result = Array2::<T>::zeros((m * p, n * q));
    for (i, row_a) in a.rows().into_iter().enumerate() {
        for (j, a_val) in row_a.iter().enumerate() {
            let block_row = i * p;
            let block_col = j * q;
            for (bi, row_b) in b.rows().into_iter().enumerate() {
                for (bj, b_val) in row_b.iter().enumerate() {
                    result[[block_row + bi, block_col + bj]] = a_val.clone() * b_val.clone();
                }
            }
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use scirs2_core::ndarray_ext::array;

    #[test]
    fn test_basic_two_matrices() {
        let a = array![[1.0, 2.0], [3.0, 4.0]];
        let b = array![[5.0, 6.0], [7.0, 8.0]];
        let c = kronecker(&[a.view(), b.view()], None, false).unwrap();

        assert_eq!(c.shape(), &[4, 4]);
        // Top-left block: 1*B
        assert_eq!(c[[0, 0]], 5.0);
        assert_eq!(c[[0, 1]], 6.0);
        assert_eq!(c[[1, 0]], 7.0);
        assert_eq!(c[[1, 1]], 8.0);
        // Bottom-right block: 4*B
        assert_eq!(c[[2, 2]], 20.0);
        assert_eq!(c[[3, 3]], 32.0);
    }

    #[test]
    fn test_shape_law_three_matrices() {
        let a = Array2::<f64>::ones((2, 3));
        let b = Array2::<f64>::ones((4, 1));
        let c = Array2::<f64>::ones((5, 2));
        let result = kronecker(&[a.view(), b.view(), c.view()], None, false).unwrap();
        assert_eq!(result.shape(), &[40, 6]);
    }

    #[test]
    fn test_reverse_changes_layout() {
        let a = array![[1.0], [2.0]];
        let b = array![[3.0, 4.0]];

        let forward = kronecker(&[a.view(), b.view()], None, false).unwrap();
        let reversed = kronecker(&[a.view(), b.view()], None, true).unwrap();
        let direct = kronecker(&[b.view(), a.view()], None, false).unwrap();

        assert_eq!(forward.shape(), &[2, 2]);
        assert_eq!(reversed, direct);
    }

    #[test]
    fn test_skip_matrix() {
        let a = array![[1.0, 2.0]];
        let b = array![[9.0]];
        let c = array![[3.0], [4.0]];

        let skipped = kronecker(&[a.view(), b.view(), c.view()], Some(1), false).unwrap();
        let direct = kronecker(&[a.view(), c.view()], None, false).unwrap();
        assert_eq!(skipped, direct);
    }

    #[test]
    fn test_empty_after_skip() {
        let a = array![[1.0]];
        let err = kronecker(&[a.view()], Some(0), false).unwrap_err();
        assert!(matches!(err, KernelError::TooFewMatrices { given: 0, .. }));
    }
}

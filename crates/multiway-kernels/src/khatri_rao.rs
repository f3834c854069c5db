//! Khatri-Rao product (column-wise Kronecker product) of a list of matrices.
//!
//! For matrices A (I × R) and B (J × R), the Khatri-Rao product A ⊙ B has
//! size (I·J × R): column r is the Kronecker product of column r of A with
//! column r of B. Over a list, row counts multiply while the column count R
//! is preserved. This is the workhorse of CP-ALS mode updates.
//!
//! # SciRS2 Integration
//!
//! All array operations use `scirs2_core::ndarray_ext`.

use crate::error::{KernelError, KernelResult};
use crate::utils::select_matrices;
use scirs2_core::ndarray_ext::{Array2, ArrayView2};
use scirs2_core::numeric::Num;

/// Compute the Khatri-Rao product of a list of matrices.
///
/// The matrices must all share the same column count. `skip_matrix` drops the
/// matrix at that index before the product is formed; `reverse` then reverses
/// the remaining order (skip happens first).
///
/// # Arguments
///
/// * `matrices` - Matrices with a shared column count R
/// * `skip_matrix` - Index of a matrix to exclude, if any
/// * `reverse` - Whether to reverse the (skip-filtered) list first
///
/// # Returns
///
/// A matrix with R columns and `∏ rows(Mᵢ)` rows over the selected matrices.
///
/// # Errors
///
/// Returns an error if fewer than 2 matrices remain after skipping, or the
/// column counts differ.
///
/// # Complexity
///
/// Time: O(R × ∏ rows(Mᵢ)), Space: O(R × ∏ rows(Mᵢ))
///
/// # Examples
///
/// ```
/// use scirs2_core::ndarray_ext::array;
/// use multiway_kernels::khatri_rao;
///
/// let a = array![[1.0, 2.0], [3.0, 4.0]];
/// let b = array![[5.0, 6.0], [7.0, 8.0]];
/// let c = khatri_rao(&[a.view(), b.view()], None, false).unwrap();
/// assert_eq!(c.shape(), &[4, 2]);
///
/// // First column: [1*5, 1*7, 3*5, 3*7]
/// assert_eq!(c[[0, 0]], 5.0);
/// assert_eq!(c[[1, 0]], 7.0);
/// assert_eq!(c[[2, 0]], 15.0);
/// assert_eq!(c[[3, 0]], 21.0);
/// ```
pub fn khatri_rao<T>(
    matrices: &[ArrayView2<T>],
    skip_matrix: Option<usize>,
    reverse: bool,
) -> KernelResult<Array2<T>>
where
    T: Clone + Num,
{
    let selected = select_matrices(matrices, skip_matrix, reverse);

    if selected.len() < 2 {
        return Err(KernelError::TooFewMatrices {
            op: "khatri_rao",
            required: 2,
            given: selected.len(),
        });
    }

    let n_cols = selected[0].shape()[1];
    for (index, matrix) in selected.iter().enumerate().skip(1) {
        if matrix.shape()[1] != n_cols {
            return Err(KernelError::ColumnMismatch {
                op: "khatri_rao",
                index,
                expected: n_cols,
                actual: matrix.shape()[1],
            });
        }
    }

    let mut result = selected[0].to_owned();
    for matrix in &selected[1..] {
        result = kr_pair(&result.view(), matrix);
    }
    Ok(result)
}

/// Khatri-Rao product of two matrices with a shared column count.
fn kr_pair<T>(a: &ArrayView2<T>, b: &ArrayView2<T>) -> Array2<T>
where
    T: Clone + Num,
{
    let (i, k) = (a.shape()[0], a.shape()[1]);
    let j = b.shape()[0];

    let mut result = Array2::<T>::zeros((i * j, k));
    for col_idx in 0..k {
        let a_col = a.column(col_idx);
        let b_col = b.column(col_idx);

        for (row_a, a_val) in a_col.iter().enumerate() {
            for (row_b, b_val) in b_col.iter().enumerate() {
                result[[row_a * j + row_b, col_idx]] = a_val.clone() * b_val.clone();
            }
        }
    }
    result
}

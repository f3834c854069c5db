//! Mode-n product (tensor times matrix).
//!
//! Contracts a tensor with a matrix along one mode: for tensor X with shape
//! (d₀, …, d_{N-1}) and matrix M with shape (J, dₙ), the result X ×ₙ M has
//! shape (d₀, …, d_{n-1}, J, d_{n+1}, …, d_{N-1}). Implemented as
//! `fold(M · unfold(X, n), n, new_shape)`.
//!
//! # SciRS2 Integration
//!
//! All array operations use `scirs2_core::ndarray_ext`.

use crate::error::{KernelError, KernelResult};
use crate::unfold::{fold, unfold};
use scirs2_core::ndarray_ext::{Array, Array2, ArrayView, ArrayView2, IxDyn};
use scirs2_core::numeric::Num;

/// Compute the mode-n product of a tensor with a matrix.
///
/// # Arguments
///
/// * `tensor` - Input tensor with N dimensions
/// * `matrix` - Matrix with shape (J, dₙ); the column count must equal the
///   size of the contracted mode. The 2-D requirement is enforced by the
///   parameter type.
/// * `mode` - The mode along which to contract (0-indexed)
///
/// # Returns
///
/// The contracted tensor, with the mode-n dimension replaced by J.
///
/// # Errors
///
/// Returns an error if `mode` is out of bounds or the matrix column count
/// does not match the contracted mode's size.
///
/// # Complexity
///
/// Time: O(J × dₙ × ∏ᵢ≠ₙ dᵢ), Space: O(J × ∏ᵢ≠ₙ dᵢ)
///
/// # Examples
///
/// ```
/// use scirs2_core::ndarray_ext::{array, Array};
/// use multiway_kernels::mode_n_product;
///
/// let tensor = Array::from_shape_vec(vec![2, 3, 4], (0..24).map(|x| x as f64).collect()).unwrap();
/// let matrix = array![[1.0, 1.0, 1.0]]; // 1×3, sums over mode 1
/// let result = mode_n_product(&tensor.view(), &matrix.view(), 1).unwrap();
/// assert_eq!(result.shape(), &[2, 1, 4]);
/// assert_eq!(result[[0, 0, 0]], 12.0); // 0 + 4 + 8
/// ```
pub fn mode_n_product<T>(
    tensor: &ArrayView<T, IxDyn>,
    matrix: &ArrayView2<T>,
    mode: usize,
) -> KernelResult<Array<T, IxDyn>>
where
    T: Clone + Num,
{
    let shape = tensor.shape();
    let order = shape.len();

    if mode >= order {
        return Err(KernelError::InvalidMode {
            op: "mode_n_product",
            mode,
            order,
        });
    }

    let (matrix_rows, matrix_cols) = (matrix.shape()[0], matrix.shape()[1]);
    if matrix_cols != shape[mode] {
        return Err(KernelError::ContractionMismatch {
            op: "mode_n_product",
            mode,
            expected: shape[mode],
            actual: matrix_cols,
        });
    }

    let unfolded = unfold(tensor, mode)?;
    let inner = unfolded.shape()[1];

    // M · X_(n)
    let mut product = Array2::<T>::zeros((matrix_rows, inner));
    for i in 0..matrix_rows {
        for j in 0..inner {
            let mut sum = T::zero();
            for k in 0..matrix_cols {
                sum = sum + matrix[[i, k]].clone() * unfolded[[k, j]].clone();
            }
            product[[i, j]] = sum;
        }
    }

    let mut new_shape = shape.to_vec();
    new_shape[mode] = matrix_rows;
    fold(&product.view(), mode, &new_shape)
}

#[cfg(test)]
mod tests {
    use super::*;
    use scirs2_core::ndarray_ext::array;

    fn arange_tensor(shape: &[usize]) -> Array<f64, IxDyn> {
        let total: usize = shape.iter().product();
        Array::from_shape_vec(IxDyn(shape), (0..total).map(|x| x as f64).collect()).unwrap()
    }

    #[test]
    fn test_identity_leaves_tensor_unchanged() {
        let tensor = arange_tensor(&[2, 3, 4]);
        let eye = array![[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]];
        let result = mode_n_product(&tensor.view(), &eye.view(), 1).unwrap();
        assert_eq!(result, tensor);
    }

    #[test]
    fn test_summing_row_vector() {
        // Ones row vector contracts mode 0 into a sum over that mode.
        let tensor = arange_tensor(&[2, 3, 4]);
        let ones = array![[1.0, 1.0]];
        let result = mode_n_product(&tensor.view(), &ones.view(), 0).unwrap();
        assert_eq!(result.shape(), &[1, 3, 4]);
        for j in 0..3 {
            for k in 0..4 {
                let expected = tensor[[0, j, k]] + tensor[[1, j, k]];
                assert_eq!(result[[0, j, k]], expected);
            }
        }
    }

    #[test]
    fn test_output_shape_replaces_mode() {
        let tensor = arange_tensor(&[2, 3, 4]);
        let matrix = Array2::<f64>::ones((5, 3));
        let result = mode_n_product(&tensor.view(), &matrix.view(), 1).unwrap();
        assert_eq!(result.shape(), &[2, 5, 4]);
    }

    #[test]
    fn test_contraction_mismatch() {
        let tensor = arange_tensor(&[2, 3, 4]);
        let matrix = Array2::<f64>::ones((5, 2));
        let err = mode_n_product(&tensor.view(), &matrix.view(), 1).unwrap_err();
        assert!(matches!(err, KernelError::ContractionMismatch { .. }));
    }

    #[test]
    fn test_invalid_mode() {
        let tensor = arange_tensor(&[2, 3]);
        let matrix = Array2::<f64>::ones((2, 2));
        let err = mode_n_product(&tensor.view(), &matrix.view(), 5).unwrap_err();
        assert!(matches!(err, KernelError::InvalidMode { mode: 5, .. }));
    }
}

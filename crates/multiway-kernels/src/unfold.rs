//! Unfolding (matricization) and folding (tensorization).
//!
//! Mode-n unfolding moves the chosen mode to the front and flattens the rest,
//! producing a matrix of shape `(shape[mode], ∏ᵢ≠ₙ shapeᵢ)`. Folding is its
//! exact inverse: only index permutation and reshape are involved, so the
//! round trip `fold(unfold(T, m), m, T.shape)` reproduces `T` bit-exactly.
//!
//! # SciRS2 Integration
//!
//! All array operations use `scirs2_core::ndarray_ext`.

use crate::error::{KernelError, KernelResult};
use scirs2_core::ndarray_ext::{Array, Array2, ArrayView, ArrayView2, IxDyn};
use scirs2_core::numeric::Num;

/// Unfold (matricize) a tensor along a specific mode.
///
/// # Arguments
///
/// * `tensor` - Input tensor with N dimensions
/// * `mode` - The mode that becomes the leading axis (0-indexed)
///
/// # Returns
///
/// A matrix of shape `(shape[mode], ∏ᵢ≠ₘₒ₋ᵈₑ shapeᵢ)`, the remaining axes
/// flattened in their original order.
///
/// # Errors
///
/// Returns an error if `mode` is out of bounds.
///
/// # Examples
///
/// ```
/// use scirs2_core::ndarray_ext::Array;
/// use multiway_kernels::unfold;
///
/// let tensor = Array::from_shape_vec(vec![2, 3, 4], (0..24).map(|x| x as f64).collect()).unwrap();
/// let unfolded = unfold(&tensor.view(), 1).unwrap();
/// assert_eq!(unfolded.shape(), &[3, 8]);
/// ```
pub fn unfold<T>(tensor: &ArrayView<T, IxDyn>, mode: usize) -> KernelResult<Array2<T>>
where
    T: Clone + Num,
{
    let shape = tensor.shape();
    let order = shape.len();

    if mode >= order {
        return Err(KernelError::InvalidMode {
            op: "unfold",
            mode,
            order,
        });
    }

    let rows = shape[mode];
    let cols: usize = shape
        .iter()
        .enumerate()
        .filter(|&(i, _)| i != mode)
        .map(|(_, &s)| s)
        .product();

    // Permutation [mode, 0, .., mode-1, mode+1, .., order-1]
    let mut perm: Vec<usize> = Vec::with_capacity(order);
    perm.push(mode);
    perm.extend((0..order).filter(|&i| i != mode));

    let permuted = tensor.clone().permuted_axes(IxDyn(&perm));
    let contiguous = permuted.as_standard_layout().into_owned();
    contiguous
        .into_shape_with_order((rows, cols))
        .map_err(|e| KernelError::OperationError {
            op: "unfold",
            message: e.to_string(),
        })
}

/// Fold a matrix back into a tensor: the exact inverse of [`unfold`].
///
/// # Arguments
///
/// * `matrix` - An unfolded tensor of shape `(shape[mode], ∏ᵢ≠ₘₒ₋ᵈₑ shapeᵢ)`
/// * `mode` - The mode that was used for unfolding
/// * `shape` - Shape of the original tensor before unfolding
///
/// # Errors
///
/// Returns an error if `mode` is out of bounds for `shape` or the matrix
/// dimensions are incompatible with `shape`.
///
/// # Examples
///
/// ```
/// use scirs2_core::ndarray_ext::Array;
/// use multiway_kernels::{fold, unfold};
///
/// let tensor = Array::from_shape_vec(vec![2, 3, 4], (0..24).map(|x| x as f64).collect()).unwrap();
/// let unfolded = unfold(&tensor.view(), 2).unwrap();
/// let folded = fold(&unfolded.view(), 2, &[2, 3, 4]).unwrap();
/// assert_eq!(folded, tensor);
/// ```
pub fn fold<T>(matrix: &ArrayView2<T>, mode: usize, shape: &[usize]) -> KernelResult<Array<T, IxDyn>>
where
    T: Clone + Num,
{
    let order = shape.len();

    if mode >= order {
        return Err(KernelError::InvalidMode {
            op: "fold",
            mode,
            order,
        });
    }

    let expected_rows = shape[mode];
    let expected_cols: usize = shape
        .iter()
        .enumerate()
        .filter(|&(i, _)| i != mode)
        .map(|(_, &s)| s)
        .product();

    if matrix.shape()[0] != expected_rows || matrix.shape()[1] != expected_cols {
        return Err(KernelError::ShapeMismatch {
            op: "fold",
            expected: vec![expected_rows, expected_cols],
            actual: matrix.shape().to_vec(),
        });
    }

    // Reshape to [shape[mode], other dims in original order], then move the
    // leading axis back to position `mode`.
    let mut intermediate_shape: Vec<usize> = Vec::with_capacity(order);
    intermediate_shape.push(shape[mode]);
    intermediate_shape.extend(
        shape
            .iter()
            .enumerate()
            .filter(|&(i, _)| i != mode)
            .map(|(_, &s)| s),
    );

    let flat: Vec<T> = matrix.iter().cloned().collect();
    let intermediate = Array::from_shape_vec(IxDyn(&intermediate_shape), flat).map_err(|e| {
        KernelError::OperationError {
            op: "fold",
            message: e.to_string(),
        }
    })?;

    let mut inverse_perm = vec![0; order];
    let mut next = 1;
    for (i, perm_val) in inverse_perm.iter_mut().enumerate() {
        if i != mode {
            *perm_val = next;
            next += 1;
        }
    }

    Ok(intermediate.permuted_axes(IxDyn(&inverse_perm)))
}

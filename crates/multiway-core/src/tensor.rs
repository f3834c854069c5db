//! Dense N-way tensor type and basic operations.
//!
//! `Tensor<T>` wraps a dynamic-dimensionality array from
//! `scirs2_core::ndarray_ext` and exposes the accessors the decomposition
//! algorithms rely on: shape, order (number of modes), views, and the
//! Frobenius norm. The type is read-only from the algorithms' perspective;
//! a run never mutates its input tensor.

use scirs2_core::ndarray_ext::{Array, ArrayView, IxDyn};
use scirs2_core::numeric::{Num, NumCast};
use std::iter::Sum;

/// Dense N-dimensional tensor backed by scirs2_core's ndarray.
///
/// # Type Parameters
///
/// * `T` - The element type (typically `f64`)
///
/// # Examples
///
/// ```
/// use multiway_core::Tensor;
///
/// let tensor = Tensor::<f64>::from_vec(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], &[2, 3]).unwrap();
/// assert_eq!(tensor.shape(), &[2, 3]);
/// assert_eq!(tensor.order(), 2);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Tensor<T> {
    data: Array<T, IxDyn>,
}

impl<T> Tensor<T>
where
    T: Clone + Num,
{
    /// Create a tensor from an existing dynamic-dimensional array.
    pub fn from_array(array: Array<T, IxDyn>) -> Self {
        Self { data: array }
    }

    /// Create a tensor from a vector of elements in row-major order.
    ///
    /// # Errors
    ///
    /// Returns an error if `vec.len()` does not equal the product of `shape`.
    ///
    /// # Examples
    ///
    /// ```
    /// use multiway_core::Tensor;
    ///
    /// let tensor = Tensor::from_vec(vec![1.0; 24], &[2, 3, 4]).unwrap();
    /// assert_eq!(tensor.order(), 3);
    /// ```
    pub fn from_vec(vec: Vec<T>, shape: &[usize]) -> anyhow::Result<Self> {
        let total: usize = shape.iter().product();
        if vec.len() != total {
            anyhow::bail!(
                "Shape {:?} requires {} elements, but got {}",
                shape,
                total,
                vec.len()
            );
        }
        let array = Array::from_shape_vec(IxDyn(shape), vec)?;
        Ok(Self { data: array })
    }

    /// Create a tensor filled with zeros.
    pub fn zeros(shape: &[usize]) -> Self {
        Self {
            data: Array::zeros(IxDyn(shape)),
        }
    }

    /// Create a tensor filled with ones.
    pub fn ones(shape: &[usize]) -> Self {
        Self {
            data: Array::ones(IxDyn(shape)),
        }
    }

    /// Create a tensor filled with a constant value.
    pub fn from_elem(shape: &[usize], elem: T) -> Self {
        Self {
            data: Array::from_elem(IxDyn(shape), elem),
        }
    }

    /// Number of modes (dimensions) of this tensor.
    ///
    /// # Examples
    ///
    /// ```
    /// use multiway_core::Tensor;
    ///
    /// let tensor = Tensor::<f64>::zeros(&[2, 3, 4]);
    /// assert_eq!(tensor.order(), 3);
    /// ```
    pub fn order(&self) -> usize {
        self.data.ndim()
    }

    /// Shape of this tensor.
    pub fn shape(&self) -> &[usize] {
        self.data.shape()
    }

    /// Total number of elements.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the tensor holds no elements.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Immutable view of the underlying array.
    pub fn view(&self) -> ArrayView<'_, T, IxDyn> {
        self.data.view()
    }

    /// Reference to the underlying array.
    pub fn data(&self) -> &Array<T, IxDyn> {
        &self.data
    }

    /// Consume the tensor and return the underlying array.
    pub fn into_data(self) -> Array<T, IxDyn> {
        self.data
    }
}

impl<T> Tensor<T>
where
    T: Clone + Num + NumCast,
{
    /// Create a tensor with values drawn uniformly from `[low, high)`.
    ///
    /// Uses `scirs2_core::random` for RNG (never `rand` directly).
    ///
    /// # Examples
    ///
    /// ```
    /// use multiway_core::Tensor;
    ///
    /// let tensor = Tensor::<f64>::random_uniform(&[2, 3], 0.0, 1.0);
    /// assert_eq!(tensor.shape(), &[2, 3]);
    /// ```
    pub fn random_uniform(shape: &[usize], low: f64, high: f64) -> Self {
        use scirs2_core::random::quick::random_f64;
        let range = high - low;
        Self {
            data: Array::from_shape_fn(IxDyn(shape), |_| {
                T::from(low + random_f64() * range).unwrap()
            }),
        }
    }

    /// Create a tensor with values drawn from a normal distribution.
    ///
    /// Uses `scirs2_core::random` for RNG (never `rand` directly).
    pub fn random_normal(shape: &[usize], mean: f64, std: f64) -> Self {
        use scirs2_core::random::{thread_rng, Distribution, RandNormal as Normal};
        let normal = Normal::new(mean, std).unwrap();
        let mut rng = thread_rng();
        Self {
            data: Array::from_shape_fn(IxDyn(shape), |_| T::from(normal.sample(&mut rng)).unwrap()),
        }
    }
}

impl<T> Tensor<T>
where
    T: Clone + Num + scirs2_core::numeric::Float + Sum,
{
    /// Frobenius norm: the square root of the sum of squared elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use multiway_core::Tensor;
    ///
    /// let tensor = Tensor::<f64>::ones(&[2, 3]);
    /// assert!((tensor.frobenius_norm() - 6.0_f64.sqrt()).abs() < 1e-12);
    /// ```
    pub fn frobenius_norm(&self) -> T {
        self.data.iter().map(|&x| x * x).sum::<T>().sqrt()
    }

    /// Whether every element of `self` is within `tol` of the corresponding
    /// element of `other`. Shapes must match.
    pub fn allclose(&self, other: &Self, tol: T) -> bool {
        self.shape() == other.shape()
            && self
                .data
                .iter()
                .zip(other.data.iter())
                .all(|(&a, &b)| (a - b).abs() <= tol)
    }
}

impl<T> std::ops::Index<&[usize]> for Tensor<T> {
    type Output = T;

    fn index(&self, index: &[usize]) -> &T {
        &self.data[IxDyn(index)]
    }
}

impl<'b, T> std::ops::Sub<&'b Tensor<T>> for &Tensor<T>
where
    T: Clone + Num,
{
    type Output = Tensor<T>;

    fn sub(self, rhs: &'b Tensor<T>) -> Self::Output {
        assert_eq!(
            self.shape(),
            rhs.shape(),
            "Shapes must match for subtraction: {:?} vs {:?}",
            self.shape(),
            rhs.shape()
        );
        Tensor {
            data: &self.data - &rhs.data,
        }
    }
}

impl<'b, T> std::ops::Add<&'b Tensor<T>> for &Tensor<T>
where
    T: Clone + Num,
{
    type Output = Tensor<T>;

    fn add(self, rhs: &'b Tensor<T>) -> Self::Output {
        assert_eq!(
            self.shape(),
            rhs.shape(),
            "Shapes must match for addition: {:?} vs {:?}",
            self.shape(),
            rhs.shape()
        );
        Tensor {
            data: &self.data + &rhs.data,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_vec_shape_mismatch() {
        let result = Tensor::from_vec(vec![1.0, 2.0, 3.0], &[2, 2]);
        assert!(result.is_err());
    }

    #[test]
    fn test_order_and_shape() {
        let tensor = Tensor::<f64>::zeros(&[4, 5, 6]);
        assert_eq!(tensor.order(), 3);
        assert_eq!(tensor.shape(), &[4, 5, 6]);
        assert_eq!(tensor.len(), 120);
    }

    #[test]
    fn test_indexing_row_major() {
        let tensor = Tensor::from_vec((0..24).map(|x| x as f64).collect(), &[2, 3, 4]).unwrap();
        assert_eq!(tensor[&[0, 0, 0]], 0.0);
        assert_eq!(tensor[&[0, 0, 3]], 3.0);
        assert_eq!(tensor[&[0, 1, 0]], 4.0);
        assert_eq!(tensor[&[1, 2, 3]], 23.0);
    }

    #[test]
    fn test_frobenius_norm() {
        let tensor = Tensor::from_vec(vec![3.0f64, 4.0], &[2]).unwrap();
        assert!((tensor.frobenius_norm() - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_sub_and_norm() {
        let a = Tensor::from_vec(vec![1.0, 2.0, 3.0, 4.0], &[2, 2]).unwrap();
        let b = Tensor::from_vec(vec![1.0, 2.0, 3.0, 4.0], &[2, 2]).unwrap();
        let diff = &a - &b;
        assert_eq!(diff.frobenius_norm(), 0.0);
    }

    #[test]
    #[should_panic(expected = "Shapes must match")]
    fn test_sub_shape_mismatch_panics() {
        let a = Tensor::<f64>::zeros(&[2, 2]);
        let b = Tensor::<f64>::zeros(&[2, 3]);
        let _ = &a - &b;
    }

    #[test]
    fn test_random_uniform_bounds() {
        let tensor = Tensor::<f64>::random_uniform(&[5, 5], -1.0, 1.0);
        assert!(tensor.data().iter().all(|&x| (-1.0..1.0).contains(&x)));
    }

    #[test]
    fn test_allclose() {
        let a = Tensor::from_vec(vec![1.0, 2.0], &[2]).unwrap();
        let b = Tensor::from_vec(vec![1.0 + 1e-12, 2.0], &[2]).unwrap();
        assert!(a.allclose(&b, 1e-10));
        assert!(!a.allclose(&b, 1e-14));
    }
}

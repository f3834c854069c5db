//! Kruskal-form tensor: the result type of a CP decomposition.
//!
//! A `TensorCpd<T>` represents a tensor as a weighted sum of R rank-1
//! components:
//!
//! X ≈ Σᵣ wᵣ (u₁ᵣ ⊗ u₂ᵣ ⊗ ... ⊗ uₙᵣ)
//!
//! Each mode n contributes a factor matrix of shape (dₙ, R); every factor
//! matrix shares the same column count R (the CP rank, a single integer
//! uniform across modes). The weights are optional; when absent the core is
//! the implicit all-ones superdiagonal.

use crate::tensor::Tensor;
use scirs2_core::ndarray_ext::{Array1, Array2};
use scirs2_core::numeric::Num;

/// Tensor in Kruskal (CP) form: factor matrices plus optional weights.
///
/// # Examples
///
/// ```
/// use multiway_core::TensorCpd;
/// use scirs2_core::ndarray_ext::array;
///
/// let factors = vec![array![[1.0], [2.0]], array![[3.0], [4.0], [5.0]]];
/// let cpd = TensorCpd::new(factors, None).unwrap();
/// assert_eq!(cpd.order(), 2);
/// assert_eq!(cpd.rank(), 1);
/// assert_eq!(cpd.shape(), vec![2, 3]);
/// ```
#[derive(Debug, Clone)]
pub struct TensorCpd<T> {
    factors: Vec<Array2<T>>,
    weights: Option<Array1<T>>,
}

impl<T> TensorCpd<T>
where
    T: Clone + Num,
{
    /// Build a Kruskal-form tensor from factor matrices and optional weights.
    ///
    /// # Errors
    ///
    /// Returns an error if no factor matrix is given, if the factor matrices
    /// do not all share the same column count, or if the weight vector length
    /// does not equal that column count.
    pub fn new(factors: Vec<Array2<T>>, weights: Option<Array1<T>>) -> anyhow::Result<Self> {
        let Some(first) = factors.first() else {
            anyhow::bail!("Kruskal form requires at least one factor matrix");
        };
        let rank = first.shape()[1];
        for (mode, factor) in factors.iter().enumerate() {
            if factor.shape()[1] != rank {
                anyhow::bail!(
                    "All factor matrices must share the same number of columns: \
                     mode 0 has {}, mode {} has {}",
                    rank,
                    mode,
                    factor.shape()[1]
                );
            }
        }
        if let Some(w) = &weights {
            if w.len() != rank {
                anyhow::bail!(
                    "Weight vector length {} does not match rank {}",
                    w.len(),
                    rank
                );
            }
        }
        Ok(Self { factors, weights })
    }

    /// Number of modes of the represented tensor.
    pub fn order(&self) -> usize {
        self.factors.len()
    }

    /// The CP rank R: the shared column count of every factor matrix.
    pub fn rank(&self) -> usize {
        self.factors[0].shape()[1]
    }

    /// Shape of the represented tensor: per-mode factor row counts.
    pub fn shape(&self) -> Vec<usize> {
        self.factors.iter().map(|f| f.shape()[0]).collect()
    }

    /// The factor matrices, one per mode.
    pub fn factors(&self) -> &[Array2<T>] {
        &self.factors
    }

    /// The per-component weights, if any have been extracted.
    pub fn weights(&self) -> Option<&Array1<T>> {
        self.weights.as_ref()
    }

    /// Reconstruct the dense tensor from the Kruskal form.
    ///
    /// Computes X = Σᵣ wᵣ (u₁ᵣ ⊗ u₂ᵣ ⊗ ... ⊗ uₙᵣ) by accumulating every
    /// rank-1 component over the full index range.
    ///
    /// # Complexity
    ///
    /// Time: O(R × ∏ₙ dₙ), Space: O(∏ₙ dₙ)
    ///
    /// # Examples
    ///
    /// ```
    /// use multiway_core::TensorCpd;
    /// use scirs2_core::ndarray_ext::array;
    ///
    /// // Rank-1: outer product of [1, 2] and [3, 4, 5]
    /// let cpd = TensorCpd::new(vec![array![[1.0], [2.0]], array![[3.0], [4.0], [5.0]]], None)
    ///     .unwrap();
    /// let tensor = cpd.reconstruct().unwrap();
    /// assert_eq!(tensor[&[1, 2]], 10.0);
    /// ```
    pub fn reconstruct(&self) -> anyhow::Result<Tensor<T>> {
        let shape = self.shape();
        let rank = self.rank();
        let n_modes = self.order();
        let total_size: usize = shape.iter().product();
        let mut data = vec![T::zero(); total_size];

        for r in 0..rank {
            let weight = self.weights.as_ref().map_or(T::one(), |w| w[r].clone());

            #[allow(clippy::needless_range_loop)]
            for idx in 0..total_size {
                let mut value = weight.clone();
                let mut remaining = idx;

                // Row-major linear index to multi-index, last mode fastest.
                for mode in (0..n_modes).rev() {
                    let mode_idx = remaining % shape[mode];
                    remaining /= shape[mode];
                    value = value * self.factors[mode][[mode_idx, r]].clone();
                }

                data[idx] = data[idx].clone() + value;
            }
        }

        Tensor::from_vec(data, &shape)
    }
}

impl<T> TensorCpd<T>
where
    T: Clone + Num + scirs2_core::numeric::Float,
{
    /// Normalize every factor column to unit length, accumulating the norms
    /// into the weight vector. Leaves the reconstruction unchanged.
    pub fn extract_weights(&mut self) {
        let rank = self.rank();
        let mut weights = Array1::<T>::ones(rank);

        for factor in &mut self.factors {
            for r in 0..rank {
                let mut norm_sq = T::zero();
                for i in 0..factor.shape()[0] {
                    let val = factor[[i, r]];
                    norm_sq = norm_sq + val * val;
                }

                let norm = norm_sq.sqrt();
                if norm > T::epsilon() {
                    weights[r] = weights[r] * norm;
                    for i in 0..factor.shape()[0] {
                        factor[[i, r]] = factor[[i, r]] / norm;
                    }
                }
            }
        }

        self.weights = Some(weights);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scirs2_core::ndarray_ext::array;

    #[test]
    fn test_new_requires_factors() {
        let result = TensorCpd::<f64>::new(vec![], None);
        assert!(result.is_err());
    }

    #[test]
    fn test_new_rejects_column_mismatch() {
        let factors = vec![
            Array2::<f64>::zeros((3, 2)),
            Array2::<f64>::zeros((4, 3)), // wrong column count
        ];
        let result = TensorCpd::new(factors, None);
        assert!(result.is_err());
    }

    #[test]
    fn test_new_rejects_weight_length_mismatch() {
        let factors = vec![Array2::<f64>::zeros((3, 2)), Array2::<f64>::zeros((4, 2))];
        let weights = Array1::<f64>::ones(3);
        let result = TensorCpd::new(factors, Some(weights));
        assert!(result.is_err());
    }

    #[test]
    fn test_accessors() {
        let factors = vec![
            Array2::<f64>::zeros((4, 2)),
            Array2::<f64>::zeros((5, 2)),
            Array2::<f64>::zeros((6, 2)),
        ];
        let cpd = TensorCpd::new(factors, None).unwrap();
        assert_eq!(cpd.order(), 3);
        assert_eq!(cpd.rank(), 2);
        assert_eq!(cpd.shape(), vec![4, 5, 6]);
    }

    #[test]
    fn test_reconstruct_rank1_by_hand() {
        // X[i,j,k] = a[i] * b[j] * c[k]
        let a = array![[1.0], [2.0]];
        let b = array![[3.0], [4.0]];
        let c = array![[5.0], [6.0], [7.0]];
        let cpd = TensorCpd::new(vec![a, b, c], None).unwrap();
        let tensor = cpd.reconstruct().unwrap();

        assert_eq!(tensor.shape(), &[2, 2, 3]);
        assert_eq!(tensor[&[0, 0, 0]], 15.0);
        assert_eq!(tensor[&[1, 0, 0]], 30.0);
        assert_eq!(tensor[&[0, 1, 2]], 28.0);
        assert_eq!(tensor[&[1, 1, 1]], 48.0);
    }

    #[test]
    fn test_reconstruct_rank2_sum() {
        // Sum of two rank-1 components, checked against a direct evaluation.
        let a = array![[1.0, -1.0], [0.5, 2.0]];
        let b = array![[2.0, 1.0], [1.0, 3.0], [0.0, -2.0]];
        let cpd = TensorCpd::new(vec![a.clone(), b.clone()], None).unwrap();
        let tensor = cpd.reconstruct().unwrap();

        for i in 0..2 {
            for j in 0..3 {
                let expected: f64 = (0..2).map(|r| a[[i, r]] * b[[j, r]]).sum();
                assert!((tensor[&[i, j]] - expected).abs() < 1e-12);
            }
        }
    }

    #[test]
    fn test_weights_scale_reconstruction() {
        let a = array![[1.0f64], [2.0]];
        let b = array![[3.0f64], [4.0]];
        let weighted = TensorCpd::new(
            vec![a.clone(), b.clone()],
            Some(Array1::from_vec(vec![2.0])),
        )
        .unwrap();
        let plain = TensorCpd::new(vec![a, b], None).unwrap();

        let scaled = weighted.reconstruct().unwrap();
        let base = plain.reconstruct().unwrap();
        for i in 0..2 {
            for j in 0..2 {
                assert!((scaled[&[i, j]] - 2.0 * base[&[i, j]]).abs() < 1e-12);
            }
        }
    }

    #[test]
    fn test_extract_weights_preserves_reconstruction() {
        let a = array![[1.0f64, 4.0], [2.0, 5.0], [3.0, 6.0]];
        let b = array![[7.0f64, 1.0], [8.0, 2.0]];
        let mut cpd = TensorCpd::new(vec![a, b], None).unwrap();

        let before = cpd.reconstruct().unwrap();
        cpd.extract_weights();
        let after = cpd.reconstruct().unwrap();

        assert!(cpd.weights().is_some());
        assert!(before.allclose(&after, 1e-10));

        // Columns are now unit-length.
        for factor in cpd.factors() {
            for r in 0..cpd.rank() {
                let norm_sq: f64 = (0..factor.shape()[0]).map(|i| factor[[i, r]].powi(2)).sum();
                assert!((norm_sq - 1.0).abs() < 1e-10);
            }
        }
    }
}

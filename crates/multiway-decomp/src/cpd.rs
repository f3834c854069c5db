//! CP decomposition (CANDECOMP/PARAFAC) via Alternating Least Squares.
//!
//! The CP decomposition factorizes a tensor X into a sum of R rank-1 tensors:
//!
//! X ≈ Σᵣ λᵣ (u₁ᵣ ⊗ u₂ᵣ ⊗ ... ⊗ uₙᵣ)
//!
//! ALS fixes all factor matrices but one and solves a linear least-squares
//! problem for the remaining one, cycling through the modes in order. Each
//! mode update uses the most recently updated factors of the other modes
//! (Gauss-Seidel, not a frozen snapshot).
//!
//! # SciRS2 Integration
//!
//! All array operations use `scirs2_core::ndarray_ext`.
//! Linear algebra (SVD, least squares) uses `scirs2_linalg`.

use crate::base::{
    cost_stagnated, DecompConfig, DecompError, Decomposition, Init, RunReport, StopReason,
};
use multiway_core::{Tensor, TensorCpd};
use multiway_kernels::{hadamard, khatri_rao, unfold};
use scirs2_core::ndarray_ext::{Array2, ScalarOperand};
use scirs2_core::numeric::{Float, FloatConst, NumAssign, NumCast};
use scirs2_core::random::{thread_rng, Rng, SeedableRng, StdRng};
use scirs2_linalg::{lstsq, svd};
use std::iter::Sum;
use tracing::warn;

/// CP-ALS engine. Holds configuration only; every [`Cpd::decompose`] call
/// owns its factor matrices and cost history exclusively and returns them as
/// a fresh [`CpdRun`].
///
/// # Examples
///
/// ```no_run
/// use multiway_core::Tensor;
/// use multiway_decomp::{Cpd, DecompConfig, Decomposition, Init};
///
/// let tensor = Tensor::<f64>::random_uniform(&[10, 10, 10], 0.0, 1.0);
/// let cpd = Cpd::new(DecompConfig::default().with_init(Init::Random));
/// let run = cpd.decompose(&tensor, &[5])?;
///
/// println!("stopped after {} iterations", run.report.n_iters());
/// # Ok::<(), multiway_decomp::DecompError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Cpd {
    /// The shared decomposition parameter set.
    pub config: DecompConfig,
}

/// Result of a CP-ALS run: the Kruskal-form decomposition plus the run's
/// diagnostics.
#[derive(Debug, Clone)]
pub struct CpdRun<T> {
    /// The computed decomposition.
    pub cpd: TensorCpd<T>,
    /// Cost history and stop reason for this run.
    pub report: RunReport,
}

impl Cpd {
    /// Create an engine from a configuration.
    pub fn new(config: DecompConfig) -> Self {
        Self { config }
    }

    /// Build one factor matrix of shape `(tensor.shape()[n], rank)` per mode.
    ///
    /// `Init::Svd` takes the leading `rank` left singular vectors of each
    /// mode's unfolding; when the rank exceeds a mode's size no orthonormal
    /// basis of that width exists, so that mode degrades to random columns
    /// and a warning is emitted. `Init::Random` draws uniform entries,
    /// seeded by `random_state` when present.
    fn init_factors<T>(
        &self,
        tensor: &Tensor<T>,
        rank: usize,
    ) -> Result<Vec<Array2<T>>, DecompError>
    where
        T: Float + FloatConst + NumCast + NumAssign + Sum + ScalarOperand + Send + Sync + 'static,
    {
        let shape = tensor.shape();
        let mut rng = match self.config.random_state {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => {
                let mut thread_rng_instance = thread_rng();
                StdRng::from_rng(&mut thread_rng_instance)
            }
        };

        let mut factors = Vec::with_capacity(shape.len());
        match self.config.init {
            Init::Random => {
                for &mode_size in shape {
                    factors.push(random_factor(&mut rng, mode_size, rank));
                }
            }
            Init::Svd => {
                for (mode, &mode_size) in shape.iter().enumerate() {
                    if rank > mode_size {
                        warn!(
                            mode,
                            mode_size,
                            rank,
                            "rank exceeds mode size, no orthonormal basis of that width \
                             exists; falling back to random initialization for this mode"
                        );
                        factors.push(random_factor(&mut rng, mode_size, rank));
                        continue;
                    }

                    let unfolded = unfold(&tensor.view(), mode)?;
                    let (u, _s, _vt) = svd(&unfolded.view(), true, None)?;

                    let mut factor = Array2::<T>::zeros((mode_size, rank));
                    for i in 0..mode_size {
                        for j in 0..rank {
                            factor[[i, j]] = u[[i, j]];
                        }
                    }
                    factors.push(factor);
                }
            }
        }

        Ok(factors)
    }
}

impl<T> Decomposition<T> for Cpd
where
    T: Float + FloatConst + NumCast + NumAssign + Sum + ScalarOperand + Send + Sync + 'static,
{
    type Output = CpdRun<T>;

    /// Run CP-ALS on `tensor` with a single shared rank `[R]`.
    ///
    /// Termination is checked after every full sweep, in priority order:
    /// cost at or below `epsilon` (target accuracy, not convergence), then
    /// cost stagnation below `tol` (convergence), then the iteration cap.
    fn decompose(&self, tensor: &Tensor<T>, rank: &[usize]) -> Result<CpdRun<T>, DecompError> {
        if rank.len() != 1 {
            return Err(DecompError::RankLength(rank.len()));
        }
        let r = rank[0];
        if r == 0 {
            return Err(DecompError::InvalidRank(r));
        }

        let n_modes = tensor.order();
        let mut factors = self.init_factors(tensor, r)?;

        // Mode unfoldings are constant across the whole run.
        let unfoldings = (0..n_modes)
            .map(|mode| unfold(&tensor.view(), mode))
            .collect::<Result<Vec<_>, _>>()?;
        let normalizer = tensor.frobenius_norm();

        let mut cost: Vec<f64> = Vec::new();
        let mut stop = StopReason::IterationCap;

        for iter in 0..self.config.max_iter {
            for mode in 0..n_modes {
                // Z: Khatri-Rao over the other modes' current factors, in
                // the forward order matching the row-major unfolding.
                let views: Vec<_> = factors.iter().map(|f| f.view()).collect();
                let z = khatri_rao(&views, Some(mode), false)?;

                // V: Hadamard product of the other modes' Gram matrices.
                let grams: Vec<Array2<T>> = factors.iter().map(gram_matrix).collect();
                let gram_views: Vec<_> = grams.iter().map(|g| g.view()).collect();
                let v = hadamard(&gram_views, Some(mode), false)?;

                let mttkrp = matricized_times_khatri_rao(&unfoldings[mode], &z);
                factors[mode] = solve_normal_equations(&mttkrp, &v)?;
            }

            let approx = TensorCpd::new(factors.clone(), None)?.reconstruct()?;
            let residual = (tensor - &approx).frobenius_norm() / normalizer;
            let residual = <f64 as NumCast>::from(residual).unwrap();
            cost.push(residual);

            if self.config.verbose {
                println!("iteration {:>4}: relative error {:.8}", iter + 1, residual);
            }

            if residual <= self.config.epsilon {
                stop = StopReason::TargetAccuracy;
                break;
            }
            if cost_stagnated(&cost, self.config.tol) {
                stop = StopReason::Stagnation;
                break;
            }
        }

        Ok(CpdRun {
            cpd: TensorCpd::new(factors, None)?,
            report: RunReport::new(cost, stop),
        })
    }

    /// Render the cost history as an iteration table with proportional bars.
    fn plot(&self, report: &RunReport) -> Result<String, DecompError> {
        let label = self.config.mode_description.as_deref().unwrap_or("cp-als");
        let mut out = format!(
            "{} cost history: {} iteration(s), stop: {:?}\n",
            label,
            report.n_iters(),
            report.stop()
        );

        let max_cost = report.cost().iter().fold(f64::EPSILON, |a, &b| a.max(b));
        for (i, &c) in report.cost().iter().enumerate() {
            let bar = "#".repeat(((c / max_cost) * 40.0).round() as usize);
            out.push_str(&format!("{:>4}  {:>14.8}  {}\n", i + 1, c, bar));
        }
        Ok(out)
    }
}

/// Uniform [0, 1) factor matrix of shape `(rows, cols)`.
fn random_factor<T>(rng: &mut StdRng, rows: usize, cols: usize) -> Array2<T>
where
    T: Float + NumCast,
{
    Array2::from_shape_fn((rows, cols), |_| T::from(rng.random::<f64>()).unwrap())
}

/// Gram matrix Fᵀ F.
fn gram_matrix<T>(factor: &Array2<T>) -> Array2<T>
where
    T: Float,
{
    let (rows, cols) = (factor.shape()[0], factor.shape()[1]);
    let mut gram = Array2::<T>::zeros((cols, cols));

    for i in 0..cols {
        for j in 0..cols {
            let mut sum = T::zero();
            for k in 0..rows {
                sum = sum + factor[[k, i]] * factor[[k, j]];
            }
            gram[[i, j]] = sum;
        }
    }

    gram
}

/// MTTKRP: the mode-n unfolding times the Khatri-Rao of the other factors.
fn matricized_times_khatri_rao<T>(unfolded: &Array2<T>, z: &Array2<T>) -> Array2<T>
where
    T: Float,
{
    let (rows, inner) = (unfolded.shape()[0], unfolded.shape()[1]);
    let rank = z.shape()[1];
    let mut result = Array2::<T>::zeros((rows, rank));

    for i in 0..rows {
        for r in 0..rank {
            let mut sum = T::zero();
            for k in 0..inner {
                sum = sum + unfolded[[i, k]] * z[[k, r]];
            }
            result[[i, r]] = sum;
        }
    }

    result
}

/// Solve `X · V = mttkrp` for X, row by row, via least squares.
///
/// Equivalent to `mttkrp · V⁺`: least squares stands in for the explicit
/// pseudo-inverse so a rank-deficient V does not blow up the update. A
/// singular system gets one ridge-regularized retry.
fn solve_normal_equations<T>(
    mttkrp: &Array2<T>,
    gram: &Array2<T>,
) -> Result<Array2<T>, DecompError>
where
    T: Float + NumCast + NumAssign + Sum + ScalarOperand + Send + Sync + 'static,
{
    let (rows, rank) = (mttkrp.shape()[0], mttkrp.shape()[1]);
    let gram_t = gram.t().to_owned();
    let mut result = Array2::<T>::zeros((rows, rank));

    for i in 0..rows {
        let b = mttkrp.row(i).to_owned();

        match lstsq(&gram_t.view(), &b.view(), None) {
            Ok(solution) => {
                for j in 0..rank {
                    result[[i, j]] = solution.x[j];
                }
            }
            Err(_) => {
                let eps = T::epsilon() * T::from(rank * 10).unwrap();
                let mut gram_reg = gram_t.clone();
                for k in 0..rank.min(gram_reg.shape()[0]) {
                    gram_reg[[k, k]] += eps;
                }

                let solution = lstsq(&gram_reg.view(), &b.view(), None)?;
                for j in 0..rank {
                    result[[i, j]] = solution.x[j];
                }
            }
        }
    }

    Ok(result)
}

//! Shared contract for decomposition algorithms.
//!
//! Every algorithm in this crate is driven by a [`DecompConfig`] (the common
//! parameter set), implements the [`Decomposition`] trait, and reports its
//! run through a [`RunReport`]. The report is a fresh value produced by each
//! `decompose` call; algorithms hold no mutable run state, so a configured
//! engine can be cloned or reused without any shared-history hazards.

use multiway_core::Tensor;
use multiway_kernels::KernelError;
use scirs2_linalg::LinalgError;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error type for decomposition algorithms.
#[derive(Error, Debug)]
pub enum DecompError {
    /// Unrecognized initialization strategy name.
    #[error("initialization strategy {name:?} is not implemented")]
    NotImplementedInit { name: String },

    /// A capability point the concrete algorithm does not provide.
    #[error("{feature} is not implemented for this decomposition")]
    NotImplemented { feature: &'static str },

    /// CP decomposition takes a single shared rank across all modes.
    #[error("rank must hold exactly one component count, but {0} values were given")]
    RankLength(usize),

    /// The rank value itself is unusable.
    #[error("invalid rank: {0}")]
    InvalidRank(usize),

    /// Failure in an underlying multilinear kernel.
    #[error("kernel error: {0}")]
    Kernel(#[from] KernelError),

    /// Failure in an underlying linear algebra routine.
    #[error("linear algebra error: {0}")]
    Linalg(#[from] LinalgError),

    /// Failure constructing a core data-model value.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Factor matrix initialization strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Init {
    /// Leading left singular vectors of each mode's unfolding; falls back to
    /// random columns (with a warning) for modes smaller than the rank.
    #[default]
    Svd,
    /// Unstructured random entries, reproducible via `random_state`.
    Random,
}

impl FromStr for Init {
    type Err = DecompError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "svd" => Ok(Init::Svd),
            "random" => Ok(Init::Random),
            other => Err(DecompError::NotImplementedInit {
                name: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for Init {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Init::Svd => write!(f, "svd"),
            Init::Random => write!(f, "random"),
        }
    }
}

/// Common configuration shared by decomposition algorithms.
///
/// Cloning a configuration yields a fully independent copy; no run state
/// lives here (each `decompose` call returns its own [`RunReport`]).
#[derive(Debug, Clone, PartialEq)]
pub struct DecompConfig {
    /// Factor initialization strategy.
    pub init: Init,
    /// Hard cap on the number of iterations.
    pub max_iter: usize,
    /// Target relative residual; reaching it stops the run without marking
    /// convergence.
    pub epsilon: f64,
    /// Minimum cost improvement between consecutive iterations to keep
    /// going; smaller deltas terminate the run as converged.
    pub tol: f64,
    /// Seed for reproducible random initialization.
    pub random_state: Option<u64>,
    /// Free-form label carried into progress output; no algorithmic effect.
    pub mode_description: Option<String>,
    /// Whether to print a progress line per iteration.
    pub verbose: bool,
}

impl Default for DecompConfig {
    fn default() -> Self {
        Self {
            init: Init::Svd,
            max_iter: 50,
            epsilon: 1e-2,
            tol: 1e-4,
            random_state: None,
            mode_description: None,
            verbose: false,
        }
    }
}

impl DecompConfig {
    pub fn with_init(mut self, init: Init) -> Self {
        self.init = init;
        self
    }

    pub fn with_max_iter(mut self, max_iter: usize) -> Self {
        self.max_iter = max_iter;
        self
    }

    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    pub fn with_tol(mut self, tol: f64) -> Self {
        self.tol = tol;
        self
    }

    pub fn with_random_state(mut self, seed: u64) -> Self {
        self.random_state = Some(seed);
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }
}

/// Why a run stopped. All three states are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// The relative residual dropped to `epsilon` or below. Distinct from
    /// convergence: the target accuracy was reached by magnitude.
    TargetAccuracy,
    /// The cost improvement between the last two iterations fell below
    /// `tol`. This is the only state that counts as converged.
    Stagnation,
    /// The iteration cap was exhausted; the final cost may still exceed
    /// `epsilon`.
    IterationCap,
}

/// Diagnostics of a single `decompose` run: the per-iteration cost history
/// and the reason the run terminated. Owned exclusively by the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct RunReport {
    cost: Vec<f64>,
    stop: StopReason,
}

impl RunReport {
    pub(crate) fn new(cost: Vec<f64>, stop: StopReason) -> Self {
        Self { cost, stop }
    }

    /// Relative reconstruction errors, one per completed iteration.
    pub fn cost(&self) -> &[f64] {
        &self.cost
    }

    /// Why the run terminated.
    pub fn stop(&self) -> StopReason {
        self.stop
    }

    /// Number of completed iterations.
    pub fn n_iters(&self) -> usize {
        self.cost.len()
    }

    /// Cost after the final iteration, if any iteration completed.
    pub fn final_cost(&self) -> Option<f64> {
        self.cost.last().copied()
    }

    /// True only when the run stopped because the cost stagnated.
    pub fn converged(&self) -> bool {
        self.stop == StopReason::Stagnation
    }
}

/// Two-point convergence predicate: true iff the last two cost values differ
/// by less than `tol`. Fewer than two values can never count as converged,
/// and earlier history is irrelevant.
pub fn cost_stagnated(cost: &[f64], tol: f64) -> bool {
    match cost {
        [.., prev, last] => (last - prev).abs() < tol,
        _ => false,
    }
}

/// Polymorphic interface over the family of decomposition algorithms.
///
/// `decompose` is the one required capability. `plot` renders a run's cost
/// history for provenance; algorithms that do not override it fail with a
/// not-implemented error.
pub trait Decomposition<T> {
    /// What a successful run produces (result value plus diagnostics).
    type Output;

    /// Decompose `tensor` at the given rank. For CP-style algorithms `rank`
    /// must hold exactly one component count.
    fn decompose(&self, tensor: &Tensor<T>, rank: &[usize]) -> Result<Self::Output, DecompError>;

    /// Render a human-readable view of a run's cost history.
    fn plot(&self, _report: &RunReport) -> Result<String, DecompError> {
        Err(DecompError::NotImplemented { feature: "plot" })
    }
}

//! Shared helpers for the list-based matrix products.

use scirs2_core::ndarray_ext::ArrayView2;

/// Apply the common `skip_matrix`/`reverse` preprocessing: drop the matrix at
/// `skip_matrix` (if any), then reverse the remaining order when `reverse` is
/// set. Skip happens before reverse; the two compose in that order for every
/// caller.
pub(crate) fn select_matrices<'a, T>(
    matrices: &[ArrayView2<'a, T>],
    skip_matrix: Option<usize>,
    reverse: bool,
) -> Vec<ArrayView2<'a, T>> {
    let mut selected: Vec<ArrayView2<'a, T>> = matrices
        .iter()
        .enumerate()
        .filter(|(i, _)| skip_matrix != Some(*i))
        .map(|(_, m)| m.clone())
        .collect();
    if reverse {
        selected.reverse();
    }
    selected
}

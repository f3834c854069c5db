//! Integration tests for the core data model.

use multiway_core::{Tensor, TensorCpd};
use scirs2_core::ndarray_ext::{array, Array1};

#[test]
fn kruskal_reconstruction_feeds_tensor_arithmetic() {
    // Plant a rank-2 Kruskal form, reconstruct, and verify the residual
    // against a perturbed copy behaves like a norm.
    let a = array![[1.0, 0.5], [2.0, -1.0], [0.0, 3.0]];
    let b = array![[1.0, 1.0], [-2.0, 0.5]];
    let c = array![[0.5, 2.0], [1.5, -0.5], [1.0, 1.0], [-1.0, 0.0]];
    let cpd = TensorCpd::new(vec![a, b, c], None).unwrap();

    let tensor = cpd.reconstruct().unwrap();
    assert_eq!(tensor.shape(), &[3, 2, 4]);
    assert_eq!(tensor.order(), 3);

    let same = cpd.reconstruct().unwrap();
    assert!(tensor.allclose(&same, 0.0));
    assert_eq!((&tensor - &same).frobenius_norm(), 0.0);

    let shifted = &tensor + &Tensor::from_elem(tensor.shape(), 0.1);
    let residual = (&tensor - &shifted).frobenius_norm();
    let expected = 0.1 * (tensor.len() as f64).sqrt();
    assert!((residual - expected).abs() < 1e-10);
}

#[test]
fn weight_extraction_roundtrip_through_reconstruction() {
    let a = array![[3.0, 0.0], [4.0, 1.0]];
    let b = array![[1.0, 2.0], [0.0, 2.0], [2.0, 1.0]];
    let mut cpd = TensorCpd::new(vec![a, b], None).unwrap();
    let dense_before = cpd.reconstruct().unwrap();

    cpd.extract_weights();
    let weights: &Array1<f64> = cpd.weights().unwrap();
    assert_eq!(weights.len(), cpd.rank());
    assert!(weights.iter().all(|&w| w > 0.0));

    let dense_after = cpd.reconstruct().unwrap();
    assert!(dense_before.allclose(&dense_after, 1e-10));
}

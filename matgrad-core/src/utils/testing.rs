//! Assertion and construction helpers shared by the unit and
//! integration tests.

use crate::matrix::Matrix;
use crate::tensor::Tensor;

/// Asserts that `actual` has the expected shape and that every element
/// is within `tolerance` of `expected_data` (row-major order).
pub fn check_matrix_near(
    actual: &Matrix,
    expected_shape: (usize, usize),
    expected_data: &[f64],
    tolerance: f64,
) {
    assert_eq!(
        actual.shape(),
        expected_shape,
        "Shape mismatch: got {:?}, expected {:?}",
        actual.shape(),
        expected_shape
    );
    assert_eq!(
        actual.data().len(),
        expected_data.len(),
        "Expected data length {} does not match shape {:?}",
        expected_data.len(),
        expected_shape
    );
    for (i, (got, want)) in actual.data().iter().zip(expected_data).enumerate() {
        let diff = (got - want).abs();
        assert!(
            diff <= tolerance,
            "Element {i}: got {got}, expected {want} (diff {diff}, tolerance {tolerance})"
        );
    }
}

/// Leaf tensor that does not track gradients.
pub fn leaf(data: Vec<f64>, rows: usize, cols: usize) -> Tensor {
    let matrix = Matrix::from_vec(data, rows, cols).expect("invalid test matrix");
    Tensor::new(matrix, false)
}

/// Leaf tensor that tracks gradients.
pub fn leaf_with_grad(data: Vec<f64>, rows: usize, cols: usize) -> Tensor {
    let matrix = Matrix::from_vec(data, rows, cols).expect("invalid test matrix");
    Tensor::new(matrix, true)
}

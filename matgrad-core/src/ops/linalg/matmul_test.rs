use super::*;
use crate::autograd::check_grad;
use crate::utils::testing::{check_matrix_near, leaf, leaf_with_grad};

#[test]
fn test_matmul_forward() {
    let a = leaf(vec![1.0, 2.0, 3.0, 4.0], 2, 2);
    let b = leaf(vec![5.0, 6.0, 7.0, 8.0], 2, 2);
    let c = matmul_op(&a, &b).unwrap();
    check_matrix_near(&c.data(), (2, 2), &[19.0, 22.0, 43.0, 50.0], 0.0);
}

#[test]
fn test_matmul_forward_rectangular() {
    let a = leaf(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], 2, 3);
    let b = leaf(vec![1.0, 1.0, 1.0], 3, 1);
    let c = matmul_op(&a, &b).unwrap();
    check_matrix_near(&c.data(), (2, 1), &[6.0, 15.0], 0.0);
}

#[test]
fn test_matmul_inner_dimension_mismatch() {
    let a = leaf(vec![1.0; 6], 2, 3);
    let b = leaf(vec![1.0; 4], 2, 2);
    match matmul_op(&a, &b).err().unwrap() {
        MatGradError::ShapeMismatch { left, right, .. } => {
            assert_eq!(left, (2, 3));
            assert_eq!(right, (2, 2));
        }
        e => panic!("Unexpected error {e:?}"),
    }
}

#[test]
fn test_matmul_backward_analytical() {
    let a = leaf_with_grad(vec![1.0, 2.0, 3.0, 4.0], 2, 2);
    let b = leaf_with_grad(vec![5.0, 6.0, 7.0, 8.0], 2, 2);
    let c = matmul_op(&a, &b).unwrap();

    let seed = leaf(vec![1.0; 4], 2, 2);
    c.backward(Some(&seed)).unwrap();

    // dA = g · Bᵗ, dB = Aᵗ · g
    check_matrix_near(&a.grad(), (2, 2), &[11.0, 14.0, 11.0, 14.0], 1e-12);
    check_matrix_near(&b.grad(), (2, 2), &[4.0, 4.0, 6.0, 6.0], 1e-12);
}

#[test]
fn test_matmul_backward_matches_finite_difference() {
    let a = Tensor::randn(3, 4, true);
    let b = Tensor::randn(4, 2, true);

    check_grad(
        |inputs| matmul_op(&inputs[0], &inputs[1]),
        &[a, b],
        &crate::matrix::Matrix::ones(3, 2),
        1e-5,
        1e-6,
    )
    .unwrap();
}

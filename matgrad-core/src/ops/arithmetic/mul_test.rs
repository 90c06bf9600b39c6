use super::*;
use crate::utils::testing::{check_matrix_near, leaf, leaf_with_grad};

#[test]
fn test_mul_forward_same_shape() {
    let a = leaf(vec![1.0, 2.0, 3.0, 4.0], 2, 2);
    let b = leaf(vec![2.0, 2.0, 0.5, 0.5], 2, 2);
    let c = mul_op(&a, &b).unwrap();
    check_matrix_near(&c.data(), (2, 2), &[2.0, 4.0, 1.5, 2.0], 0.0);
}

#[test]
fn test_mul_forward_scalar_broadcast() {
    let a = leaf(vec![1.0, 2.0, 3.0, 4.0], 2, 2);
    let s = leaf(vec![3.0], 1, 1);

    let left = mul_op(&s, &a).unwrap();
    check_matrix_near(&left.data(), (2, 2), &[3.0, 6.0, 9.0, 12.0], 0.0);

    let right = mul_op(&a, &s).unwrap();
    check_matrix_near(&right.data(), (2, 2), &[3.0, 6.0, 9.0, 12.0], 0.0);
}

#[test]
fn test_mul_shape_mismatch() {
    let a = leaf(vec![1.0; 4], 2, 2);
    let b = leaf(vec![1.0; 6], 2, 3);
    assert!(matches!(
        mul_op(&a, &b),
        Err(MatGradError::ShapeMismatch { .. })
    ));
}

#[test]
fn test_mul_backward_same_shape() {
    let a = leaf_with_grad(vec![1.0, 2.0, 3.0, 4.0], 2, 2);
    let b = leaf_with_grad(vec![5.0, 6.0, 7.0, 8.0], 2, 2);
    let c = mul_op(&a, &b).unwrap();

    let seed = leaf(vec![1.0; 4], 2, 2);
    c.backward(Some(&seed)).unwrap();

    check_matrix_near(&a.grad(), (2, 2), &[5.0, 6.0, 7.0, 8.0], 0.0);
    check_matrix_near(&b.grad(), (2, 2), &[1.0, 2.0, 3.0, 4.0], 0.0);
}

#[test]
fn test_mul_backward_scalar_broadcast() {
    // Only the full-shape operand receives a gradient contribution.
    let a = leaf_with_grad(vec![1.0, 2.0, 3.0, 4.0], 2, 2);
    let s = leaf_with_grad(vec![3.0], 1, 1);
    let c = mul_op(&a, &s).unwrap();

    let seed = leaf(vec![1.0; 4], 2, 2);
    c.backward(Some(&seed)).unwrap();

    check_matrix_near(&a.grad(), (2, 2), &[3.0, 3.0, 3.0, 3.0], 0.0);
    check_matrix_near(&s.grad(), (1, 1), &[0.0], 0.0);
}

#[test]
fn test_mul_backward_aliased_operand() {
    // c = a * a: both paths accumulate, so dc/da = 2a.
    let a = leaf_with_grad(vec![1.0, -2.0, 3.0, 0.5], 2, 2);
    let c = mul_op(&a, &a).unwrap();

    let seed = leaf(vec![1.0; 4], 2, 2);
    c.backward(Some(&seed)).unwrap();

    check_matrix_near(&a.grad(), (2, 2), &[2.0, -4.0, 6.0, 1.0], 0.0);
}

use super::*;
use crate::utils::testing::{check_matrix_near, leaf, leaf_with_grad};

#[test]
fn test_sub_forward() {
    let a = leaf(vec![5.0, 6.0, 7.0, 8.0], 2, 2);
    let b = leaf(vec![1.0, 2.0, 3.0, 4.0], 2, 2);
    let c = sub_op(&a, &b).unwrap();
    check_matrix_near(&c.data(), (2, 2), &[4.0, 4.0, 4.0, 4.0], 0.0);
}

#[test]
fn test_sub_shape_mismatch() {
    let a = leaf(vec![1.0, 2.0], 1, 2);
    let b = leaf(vec![1.0, 2.0], 2, 1);
    assert!(matches!(
        sub_op(&a, &b),
        Err(MatGradError::ShapeMismatch { .. })
    ));
}

#[test]
fn test_sub_backward_signs() {
    let a = leaf_with_grad(vec![1.0, 2.0, 3.0], 1, 3);
    let b = leaf_with_grad(vec![4.0, 5.0, 6.0], 1, 3);
    let c = sub_op(&a, &b).unwrap();

    let seed = leaf(vec![0.5, 1.0, 2.0], 1, 3);
    c.backward(Some(&seed)).unwrap();

    check_matrix_near(&a.grad(), (1, 3), &[0.5, 1.0, 2.0], 0.0);
    check_matrix_near(&b.grad(), (1, 3), &[-0.5, -1.0, -2.0], 0.0);
}

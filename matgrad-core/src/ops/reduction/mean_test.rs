use super::*;
use crate::utils::testing::{check_matrix_near, leaf, leaf_with_grad};

#[test]
fn test_mean_forward_dim0() {
    let a = leaf(vec![1.0, 2.0, 3.0, 5.0, 6.0, 7.0], 2, 3);
    let m = mean_op(&a, 0).unwrap();
    check_matrix_near(&m.data(), (1, 3), &[3.0, 4.0, 5.0], 1e-12);
}

#[test]
fn test_mean_forward_dim1() {
    let a = leaf(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], 2, 3);
    let m = mean_op(&a, 1).unwrap();
    check_matrix_near(&m.data(), (2, 1), &[2.0, 5.0], 1e-12);
}

#[test]
fn test_mean_invalid_axis() {
    let a = leaf(vec![1.0; 4], 2, 2);
    assert_eq!(mean_op(&a, 5).err().unwrap(), MatGradError::InvalidAxis { dim: 5 });
}

#[test]
fn test_mean_backward_dim0() {
    let a = leaf_with_grad(vec![1.0; 8], 4, 2);
    let m = mean_op(&a, 0).unwrap();

    let seed = leaf(vec![1.0, 2.0], 1, 2);
    m.backward(Some(&seed)).unwrap();

    // Each element of a column receives seed / rows.
    check_matrix_near(
        &a.grad(),
        (4, 2),
        &[0.25, 0.5, 0.25, 0.5, 0.25, 0.5, 0.25, 0.5],
        1e-12,
    );
}

#[test]
fn test_mean_of_mean_is_global_average() {
    let a = leaf_with_grad(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], 2, 3);
    let m = mean_op(&mean_op(&a, 1).unwrap(), 0).unwrap();
    check_matrix_near(&m.data(), (1, 1), &[3.5], 1e-12);

    m.backward(None).unwrap();
    check_matrix_near(&a.grad(), (2, 3), &[1.0 / 6.0; 6], 1e-12);
}

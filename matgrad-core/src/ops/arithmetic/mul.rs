use crate::autograd::GradFn;
use crate::error::MatGradError;
use crate::matrix::Matrix;
use crate::tensor::Tensor;

/// Elementwise product `A ⊙ B`, with 1x1 scalar broadcast: operands
/// must have the same shape, or one of them must be a 1x1 matrix that
/// is broadcast over the other.
pub fn mul_op(a: &Tensor, b: &Tensor) -> Result<Tensor, MatGradError> {
    let a_data = a.data();
    let b_data = b.data();
    let (left, right) = (a_data.shape(), b_data.shape());
    if left != right && !a_data.is_scalar() && !b_data.is_scalar() {
        return Err(MatGradError::ShapeMismatch {
            left,
            right,
            operation: "elementwise mul".to_string(),
        });
    }

    let data = if left == right {
        a_data.mul(&b_data)
    } else if a_data.is_scalar() {
        b_data.scale(a_data.get(0, 0))
    } else {
        a_data.scale(b_data.get(0, 0))
    };

    let grad_fn = (a.requires_grad() || b.requires_grad()).then(|| GradFn::Dot {
        a: a.clone(),
        b: b.clone(),
    });
    Ok(Tensor::from_op(data, grad_fn))
}

/// Same-shape case: dA = g ⊙ B, dB = g ⊙ A. In the broadcast case only
/// the full-shape operand is differentiated through; the 1x1 side
/// receives a zero contribution.
pub(crate) fn backward(a: &Matrix, b: &Matrix, grad_output: &Matrix) -> Vec<Matrix> {
    if a.shape() == b.shape() {
        vec![grad_output.mul(b), grad_output.mul(a)]
    } else if a.is_scalar() {
        vec![Matrix::zeros(1, 1), grad_output.scale(a.get(0, 0))]
    } else {
        vec![grad_output.scale(b.get(0, 0)), Matrix::zeros(1, 1)]
    }
}

#[cfg(test)]
#[path = "mul_test.rs"]
mod tests;

use crate::autograd::GradFn;
use crate::error::MatGradError;
use crate::matrix::Matrix;
use crate::tensor::Tensor;

/// Elementwise division `A / B`, with 1x1 scalar broadcast on either
/// side. Every denominator element must be non-zero.
pub fn div_op(a: &Tensor, b: &Tensor) -> Result<Tensor, MatGradError> {
    let a_data = a.data();
    let b_data = b.data();
    let (left, right) = (a_data.shape(), b_data.shape());
    if left != right && !a_data.is_scalar() && !b_data.is_scalar() {
        return Err(MatGradError::ShapeMismatch {
            left,
            right,
            operation: "elementwise div".to_string(),
        });
    }
    if b_data.has_zero() {
        return Err(MatGradError::DivisionByZero {
            operation: "elementwise div".to_string(),
        });
    }

    let data = if left == right {
        a_data.div(&b_data)
    } else if a_data.is_scalar() {
        b_data.recip_scale(a_data.get(0, 0))
    } else {
        a_data.scale_div(b_data.get(0, 0))
    };

    let grad_fn = (a.requires_grad() || b.requires_grad()).then(|| GradFn::Div {
        a: a.clone(),
        b: b.clone(),
    });
    Ok(Tensor::from_op(data, grad_fn))
}

/// dA = g / B, dB = -g ⊙ (A / B²). When one operand is 1x1 its
/// contribution is reduced back to 1x1 by summation over all elements
/// (chain rule for a broadcast scalar).
pub(crate) fn backward(a: &Matrix, b: &Matrix, grad_output: &Matrix) -> Vec<Matrix> {
    let grad_a = if a.is_scalar() && !b.is_scalar() {
        Matrix::filled(1, 1, grad_output.div(b).sum())
    } else if b.is_scalar() && !a.is_scalar() {
        grad_output.scale_div(b.get(0, 0))
    } else {
        grad_output.div(b)
    };

    let grad_b = if a.is_scalar() && !b.is_scalar() {
        grad_output
            .mul(&b.mul(b).recip_scale(a.get(0, 0)))
            .scale(-1.0)
    } else if b.is_scalar() && !a.is_scalar() {
        let b0 = b.get(0, 0);
        Matrix::filled(1, 1, -grad_output.mul(&a.scale_div(b0 * b0)).sum())
    } else {
        grad_output.mul(&a.div(&b.mul(b))).scale(-1.0)
    };

    vec![grad_a, grad_b]
}

#[cfg(test)]
#[path = "div_test.rs"]
mod tests;

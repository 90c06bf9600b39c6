//! Tensor-scalar arithmetic: `A * s`, `A / s` and `s / A`. The scalar
//! is a plain `f64`, not a 1x1 tensor, so it never receives gradients.

use crate::autograd::GradFn;
use crate::error::MatGradError;
use crate::matrix::Matrix;
use crate::tensor::Tensor;

/// Scalar multiplication `A * s`.
pub fn mul_scalar_op(a: &Tensor, scalar: f64) -> Result<Tensor, MatGradError> {
    let data = a.read_data().data.scale(scalar);
    let grad_fn = a.requires_grad().then(|| GradFn::ScalarMul {
        a: a.clone(),
        scalar,
    });
    Ok(Tensor::from_op(data, grad_fn))
}

/// Scalar division `A / s`; errors when `s` is exactly zero.
pub fn div_scalar_op(a: &Tensor, scalar: f64) -> Result<Tensor, MatGradError> {
    if scalar == 0.0 {
        return Err(MatGradError::DivisionByZero {
            operation: "tensor / scalar".to_string(),
        });
    }
    let data = a.read_data().data.scale_div(scalar);
    let grad_fn = a.requires_grad().then(|| GradFn::ScalarDiv {
        a: a.clone(),
        scalar,
        numerator_is_tensor: true,
    });
    Ok(Tensor::from_op(data, grad_fn))
}

/// Scalar-over-tensor division `s / A` elementwise; errors when any
/// element of `A` is exactly zero.
pub fn scalar_div_op(scalar: f64, a: &Tensor) -> Result<Tensor, MatGradError> {
    let a_data = a.data();
    if a_data.has_zero() {
        return Err(MatGradError::DivisionByZero {
            operation: "scalar / tensor".to_string(),
        });
    }
    let data = a_data.recip_scale(scalar);
    let grad_fn = a.requires_grad().then(|| GradFn::ScalarDiv {
        a: a.clone(),
        scalar,
        numerator_is_tensor: false,
    });
    Ok(Tensor::from_op(data, grad_fn))
}

/// d(A·s) = g·s.
pub(crate) fn mul_backward(scalar: f64, grad_output: &Matrix) -> Vec<Matrix> {
    vec![grad_output.scale(scalar)]
}

/// d(A/s) = g/s; d(s/A) = -g ⊙ (s / A²).
pub(crate) fn div_backward(
    a: &Matrix,
    scalar: f64,
    numerator_is_tensor: bool,
    grad_output: &Matrix,
) -> Vec<Matrix> {
    if numerator_is_tensor {
        vec![grad_output.scale_div(scalar)]
    } else {
        vec![grad_output
            .mul(&a.mul(a).recip_scale(scalar))
            .scale(-1.0)]
    }
}

#[cfg(test)]
#[path = "scalar_test.rs"]
mod tests;

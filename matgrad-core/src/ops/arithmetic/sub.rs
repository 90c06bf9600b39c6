use crate::autograd::GradFn;
use crate::error::MatGradError;
use crate::matrix::Matrix;
use crate::tensor::Tensor;

/// Elementwise subtraction `A - B`. Operands must have the same shape.
pub fn sub_op(a: &Tensor, b: &Tensor) -> Result<Tensor, MatGradError> {
    let (left, right) = (a.shape(), b.shape());
    if left != right {
        return Err(MatGradError::ShapeMismatch {
            left,
            right,
            operation: "sub".to_string(),
        });
    }

    let data = a.read_data().data.sub(&b.read_data().data);
    let grad_fn = (a.requires_grad() || b.requires_grad()).then(|| GradFn::Sub {
        a: a.clone(),
        b: b.clone(),
    });
    Ok(Tensor::from_op(data, grad_fn))
}

/// dA = +g, dB = -g.
pub(crate) fn backward(grad_output: &Matrix) -> Vec<Matrix> {
    vec![grad_output.clone(), grad_output.scale(-1.0)]
}

#[cfg(test)]
#[path = "sub_test.rs"]
mod tests;

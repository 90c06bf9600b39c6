use crate::autograd::GradFn;
use crate::error::MatGradError;
use crate::matrix::Matrix;
use crate::tensor::Tensor;

/// Elementwise addition `A + B`. Operands must have the same shape.
pub fn add_op(a: &Tensor, b: &Tensor) -> Result<Tensor, MatGradError> {
    let (left, right) = (a.shape(), b.shape());
    if left != right {
        return Err(MatGradError::ShapeMismatch {
            left,
            right,
            operation: "add".to_string(),
        });
    }

    let data = a.read_data().data.add(&b.read_data().data);
    let grad_fn = (a.requires_grad() || b.requires_grad()).then(|| GradFn::Add {
        a: a.clone(),
        b: b.clone(),
    });
    Ok(Tensor::from_op(data, grad_fn))
}

/// Gradient of a sum is the identity on both operands.
pub(crate) fn backward(grad_output: &Matrix) -> Vec<Matrix> {
    vec![grad_output.clone(), grad_output.clone()]
}

#[cfg(test)]
#[path = "add_test.rs"]
mod tests;

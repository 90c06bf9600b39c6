use crate::autograd::GradFn;
use crate::error::MatGradError;
use crate::matrix::Matrix;
use crate::tensor::Tensor;

/// Elementwise absolute value. The subgradient at zero is taken as
/// zero, matching `Matrix::signum`.
pub fn abs_op(a: &Tensor) -> Result<Tensor, MatGradError> {
    let data = a.read_data().data.abs();
    let grad_fn = a.requires_grad().then(|| GradFn::Abs { a: a.clone() });
    Ok(Tensor::from_op(data, grad_fn))
}

pub(crate) fn backward(a: &Matrix, grad_output: &Matrix) -> Vec<Matrix> {
    vec![grad_output.mul(&a.signum())]
}

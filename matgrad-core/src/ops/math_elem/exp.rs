use crate::autograd::GradFn;
use crate::error::MatGradError;
use crate::matrix::Matrix;
use crate::tensor::Tensor;

/// Elementwise `e^x`. The forward value is cached on the `GradFn`
/// record, since the derivative of `exp` is the output itself.
pub fn exp_op(a: &Tensor) -> Result<Tensor, MatGradError> {
    let data = a.read_data().data.exp();
    let grad_fn = a.requires_grad().then(|| GradFn::Exp {
        a: a.clone(),
        result: data.clone(),
    });
    Ok(Tensor::from_op(data, grad_fn))
}

pub(crate) fn backward(result: &Matrix, grad_output: &Matrix) -> Vec<Matrix> {
    vec![grad_output.mul(result)]
}

use crate::autograd::GradFn;
use crate::error::MatGradError;
use crate::matrix::Matrix;
use crate::tensor::Tensor;

/// Matrix product `C = A @ B` for `A: R x K`, `B: K x C`.
pub fn matmul_op(a: &Tensor, b: &Tensor) -> Result<Tensor, MatGradError> {
    let (left, right) = (a.shape(), b.shape());
    if left.1 != right.0 {
        return Err(MatGradError::ShapeMismatch {
            left,
            right,
            operation: "matmul".to_string(),
        });
    }

    let data = a.read_data().data.matmul(&b.read_data().data);
    let grad_fn = (a.requires_grad() || b.requires_grad()).then(|| GradFn::MatMul {
        a: a.clone(),
        b: b.clone(),
    });
    Ok(Tensor::from_op(data, grad_fn))
}

/// dA = g · Bᵗ, dB = Aᵗ · g.
pub(crate) fn backward(a: &Matrix, b: &Matrix, grad_output: &Matrix) -> Vec<Matrix> {
    vec![
        grad_output.matmul(&b.transpose()),
        a.transpose().matmul(grad_output),
    ]
}

#[cfg(test)]
#[path = "matmul_test.rs"]
mod tests;

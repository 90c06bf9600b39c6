use crate::autograd::GradFn;
use crate::error::MatGradError;
use crate::matrix::Matrix;
use crate::tensor::Tensor;

/// Elementwise natural logarithm. Every element must be strictly
/// positive; the smallest offending value is reported otherwise.
pub fn log_op(a: &Tensor) -> Result<Tensor, MatGradError> {
    let data = {
        let guard = a.read_data();
        if guard.data.has_non_positive() {
            let value = guard
                .data
                .data()
                .iter()
                .copied()
                .fold(f64::INFINITY, f64::min);
            return Err(MatGradError::LogNonPositive { value });
        }
        guard.data.ln()
    };

    let grad_fn = a.requires_grad().then(|| GradFn::Log { a: a.clone() });
    Ok(Tensor::from_op(data, grad_fn))
}

pub(crate) fn backward(a: &Matrix, grad_output: &Matrix) -> Vec<Matrix> {
    vec![grad_output.div(a)]
}

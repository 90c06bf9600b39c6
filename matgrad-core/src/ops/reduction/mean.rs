use crate::autograd::GradFn;
use crate::error::MatGradError;
use crate::matrix::Matrix;
use crate::tensor::Tensor;

/// Reduction mean along `dim`: 0 averages each column (result 1 x C),
/// 1 averages each row (result R x 1).
pub fn mean_op(a: &Tensor, dim: usize) -> Result<Tensor, MatGradError> {
    if dim > 1 {
        return Err(MatGradError::InvalidAxis { dim });
    }

    let (data, input_shape) = {
        let guard = a.read_data();
        let data = if dim == 0 {
            guard.data.col_means()
        } else {
            guard.data.row_means()
        };
        (data, guard.data.shape())
    };

    let grad_fn = a.requires_grad().then(|| GradFn::Mean {
        a: a.clone(),
        dim,
        input_shape,
    });
    Ok(Tensor::from_op(data, grad_fn))
}

/// Same broadcast as the sum rule, scaled by the reciprocal of the
/// reduced-axis length.
pub(crate) fn backward(
    input_shape: (usize, usize),
    dim: usize,
    grad_output: &Matrix,
) -> Vec<Matrix> {
    let (rows, cols) = input_shape;
    let contribution = if dim == 0 {
        Matrix::ones(rows, 1).matmul(grad_output).scale_div(rows as f64)
    } else {
        grad_output.matmul(&Matrix::ones(1, cols)).scale_div(cols as f64)
    };
    vec![contribution]
}

#[cfg(test)]
#[path = "mean_test.rs"]
mod tests;

use crate::autograd::GradFn;
use crate::error::MatGradError;
use crate::matrix::Matrix;
use crate::tensor::Tensor;

/// Reduction sum along `dim`: 0 collapses the row axis (result 1 x C),
/// 1 collapses the column axis (result R x 1).
pub fn sum_op(a: &Tensor, dim: usize) -> Result<Tensor, MatGradError> {
    if dim > 1 {
        return Err(MatGradError::InvalidAxis { dim });
    }

    let (data, input_shape) = {
        let guard = a.read_data();
        let data = if dim == 0 {
            guard.data.col_sums()
        } else {
            guard.data.row_sums()
        };
        (data, guard.data.shape())
    };

    let grad_fn = a.requires_grad().then(|| GradFn::Sum {
        a: a.clone(),
        dim,
        input_shape,
    });
    Ok(Tensor::from_op(data, grad_fn))
}

/// Broadcasts the output gradient back to the pre-reduction shape by
/// an outer product with a ones vector along the reduced axis.
pub(crate) fn backward(
    input_shape: (usize, usize),
    dim: usize,
    grad_output: &Matrix,
) -> Vec<Matrix> {
    let (rows, cols) = input_shape;
    let contribution = if dim == 0 {
        Matrix::ones(rows, 1).matmul(grad_output)
    } else {
        grad_output.matmul(&Matrix::ones(1, cols))
    };
    vec![contribution]
}

#[cfg(test)]
#[path = "sum_test.rs"]
mod tests;

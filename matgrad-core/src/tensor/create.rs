use crate::error::MatGradError;
use crate::matrix::Matrix;
use crate::tensor::Tensor;

impl Tensor {
    /// Creates a leaf tensor from a flat row-major vector.
    ///
    /// The tensor does not require gradients; call
    /// [`set_requires_grad`](Tensor::set_requires_grad) to opt in.
    pub fn from_vec(
        data: Vec<f64>,
        rows: usize,
        cols: usize,
    ) -> Result<Self, MatGradError> {
        let matrix = Matrix::from_vec(data, rows, cols)?;
        Ok(Tensor::new(matrix, false))
    }

    /// Creates a leaf tensor filled with zeros.
    pub fn zeros(rows: usize, cols: usize, requires_grad: bool) -> Self {
        Tensor::new(Matrix::zeros(rows, cols), requires_grad)
    }

    /// Creates a leaf tensor filled with ones.
    pub fn ones(rows: usize, cols: usize, requires_grad: bool) -> Self {
        Tensor::new(Matrix::ones(rows, cols), requires_grad)
    }

    /// Creates a leaf tensor with standard-normal random elements.
    pub fn randn(rows: usize, cols: usize, requires_grad: bool) -> Self {
        Tensor::new(Matrix::randn(rows, cols), requires_grad)
    }
}

use crate::error::MatGradError;
use crate::ops::arithmetic::mul_op;
use crate::ops::linalg::matmul_op;
use crate::ops::math_elem::{abs_op, exp_op, log_op};
use crate::ops::reduction::{mean_op, sum_op};
use crate::tensor::Tensor;

/// Method-style access to the differentiable primitives. These all
/// delegate to the checked `*_op` functions in [`crate::ops`].
impl Tensor {
    /// Matrix product `self @ other`.
    pub fn matmul(&self, other: &Tensor) -> Result<Tensor, MatGradError> {
        matmul_op(self, other)
    }

    /// Elementwise product. Unlike the `*` operator, `dot` requires
    /// both operands to have exactly the same shape (no 1x1 scalar
    /// broadcast).
    pub fn dot(&self, other: &Tensor) -> Result<Tensor, MatGradError> {
        let (left, right) = (self.shape(), other.shape());
        if left != right {
            return Err(MatGradError::ShapeMismatch {
                left,
                right,
                operation: "dot".to_string(),
            });
        }
        mul_op(self, other)
    }

    /// Reduction sum along `dim`: 0 collapses rows (result 1 x C),
    /// 1 collapses columns (result R x 1).
    pub fn sum(&self, dim: usize) -> Result<Tensor, MatGradError> {
        sum_op(self, dim)
    }

    /// Reduction mean along `dim`, with the same axis convention as
    /// [`sum`](Tensor::sum).
    pub fn mean(&self, dim: usize) -> Result<Tensor, MatGradError> {
        mean_op(self, dim)
    }

    /// Elementwise exponential.
    pub fn exp(&self) -> Result<Tensor, MatGradError> {
        exp_op(self)
    }

    /// Elementwise natural logarithm. All elements must be positive.
    pub fn log(&self) -> Result<Tensor, MatGradError> {
        log_op(self)
    }

    /// Elementwise absolute value.
    pub fn abs(&self) -> Result<Tensor, MatGradError> {
        abs_op(self)
    }
}

use crate::autograd::GradFn;
use crate::matrix::Matrix;
use std::sync::Arc;

/// Internal storage and autograd metadata for a [`Tensor`](crate::Tensor).
///
/// One `TensorData` is one vertex of the computation graph. It is
/// wrapped in `Arc<RwLock<TensorData>>` by `Tensor`, so ownership is
/// shared between every handle and every operation that names this
/// node as an input.
#[derive(Debug)]
pub struct TensorData {
    /// The forward value. Immutable after construction for derived
    /// nodes; only the gradient checker rewrites leaf data.
    pub(crate) data: Matrix,
    /// The gradient accumulator. Always the same shape as `data`,
    /// zero-initialized at construction, accumulated into (never
    /// overwritten) during backward passes and reset by `zero_grad`.
    pub(crate) grad: Matrix,
    /// If true, operations involving this node record a `GradFn` on
    /// their output and backward passes accumulate into `grad`.
    pub(crate) requires_grad: bool,
    /// The operation that produced this node; `None` for leaves.
    pub(crate) grad_fn: Option<Arc<GradFn>>,
}

impl TensorData {
    /// Creates a leaf node.
    pub(crate) fn new(data: Matrix, requires_grad: bool) -> Self {
        let grad = Matrix::zeros(data.rows(), data.cols());
        TensorData {
            data,
            grad,
            requires_grad,
            grad_fn: None,
        }
    }

    /// Creates a derived node. `requires_grad` is implied by the
    /// presence of a producer: operations only attach a `GradFn` when
    /// at least one input requires gradients.
    pub(crate) fn from_op(data: Matrix, grad_fn: Option<GradFn>) -> Self {
        let grad = Matrix::zeros(data.rows(), data.cols());
        TensorData {
            data,
            grad,
            requires_grad: grad_fn.is_some(),
            grad_fn: grad_fn.map(Arc::new),
        }
    }

    pub(crate) fn shape(&self) -> (usize, usize) {
        self.data.shape()
    }

    /// Resets the gradient accumulator to zeros of the current shape.
    pub(crate) fn zero_grad(&mut self) {
        self.grad = Matrix::zeros(self.data.rows(), self.data.cols());
    }
}

use crate::error::MatGradError;
use crate::matrix::Matrix;
use crate::tensor::Tensor;

impl Tensor {
    /// Returns `(rows, cols)`.
    pub fn shape(&self) -> (usize, usize) {
        self.read_data().shape()
    }

    pub fn rows(&self) -> usize {
        self.read_data().data.rows()
    }

    pub fn cols(&self) -> usize {
        self.read_data().data.cols()
    }

    pub fn numel(&self) -> usize {
        self.read_data().data.numel()
    }

    /// Returns a clone of the node's value.
    pub fn data(&self) -> Matrix {
        self.read_data().data.clone()
    }

    /// Returns a clone of the node's accumulated gradient.
    pub fn grad(&self) -> Matrix {
        self.read_data().grad.clone()
    }

    pub fn requires_grad(&self) -> bool {
        self.read_data().requires_grad
    }

    /// Sets the `requires_grad` flag. Only allowed on leaf tensors:
    /// for derived nodes the flag was fixed at construction from the
    /// inputs' flags.
    pub fn set_requires_grad(&self, requires_grad: bool) -> Result<(), MatGradError> {
        let mut guard = self.write_data();
        if guard.grad_fn.is_some() {
            return Err(MatGradError::RequiresGradOnNonLeaf);
        }
        guard.requires_grad = requires_grad;
        Ok(())
    }

    /// A leaf has no producing operation.
    pub fn is_leaf(&self) -> bool {
        self.read_data().grad_fn.is_none()
    }

    /// Overwrites the value of a leaf tensor and resets its gradient
    /// accumulator. Derived values are immutable, so this errors on
    /// non-leaf tensors. Used by the finite-difference gradient
    /// checker to perturb inputs in place.
    pub fn set_data(&self, data: Matrix) -> Result<(), MatGradError> {
        let mut guard = self.write_data();
        if guard.grad_fn.is_some() {
            return Err(MatGradError::SetDataOnNonLeaf);
        }
        guard.grad = Matrix::zeros(data.rows(), data.cols());
        guard.data = data;
        Ok(())
    }
}

use thiserror::Error;

/// Custom error type for the matgrad framework.
///
/// Every failure is a synchronous domain-validation error raised at the
/// offending forward call; the backward traversal itself never fails.
#[derive(Error, Debug, PartialEq, Clone)] // PartialEq + Clone for easier testing
pub enum MatGradError {
    #[error("Shape mismatch during {operation}: left {left:?}, right {right:?}")]
    ShapeMismatch {
        left: (usize, usize),
        right: (usize, usize),
        operation: String,
    },

    #[error("Division by zero during {operation}")]
    DivisionByZero { operation: String },

    #[error("Logarithm of non-positive value {value}")]
    LogNonPositive { value: f64 },

    #[error("Invalid reduction axis {dim}: must be 0 (rows) or 1 (columns)")]
    InvalidAxis { dim: usize },

    #[error("Tensor creation error: data length {data_len} does not match shape ({rows}, {cols})")]
    TensorCreationError {
        data_len: usize,
        rows: usize,
        cols: usize,
    },

    #[error("Operation requires tensor to require grad, but it doesn't.")]
    RequiresGradNotMet,

    #[error("Backward called on non-scalar tensor without explicit seed gradient.")]
    BackwardNonScalar,

    #[error("Cannot set requires_grad on a non-leaf tensor.")]
    RequiresGradOnNonLeaf,

    #[error("Cannot overwrite the data of a non-leaf tensor.")]
    SetDataOnNonLeaf,
}

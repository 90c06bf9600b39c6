//! Reverse-mode automatic differentiation over dense 2-D `f64`
//! matrices.
//!
//! A [`Tensor`] is a shared handle to a graph node holding a
//! [`Matrix`] value, an accumulated gradient, and an optional record
//! of the operation that produced it. Forward operations build the
//! graph; [`Tensor::backward`] walks it in reverse topological order
//! and accumulates `d(root)/d(node)` into every node that requested
//! gradients.
//!
//! ```
//! use matgrad_core::{Matrix, Tensor};
//!
//! let a = Tensor::new(Matrix::filled(2, 2, 3.0), true);
//! let b = &a * &a;
//! let loss = b.sum(1).unwrap().sum(0).unwrap();
//! loss.backward(None).unwrap();
//! assert_eq!(a.grad(), Matrix::filled(2, 2, 6.0));
//! ```

pub mod autograd;
pub mod error;
pub mod matrix;
pub mod ops;
pub mod tensor;
pub mod tensor_data;
pub mod utils;

pub use error::MatGradError;
pub use matrix::Matrix;
pub use tensor::Tensor;

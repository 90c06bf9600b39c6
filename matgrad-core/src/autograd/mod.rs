//! Autograd internals: the recorded operations ([`GradFn`]), the
//! backward traversal engine, and the finite-difference gradient
//! checker.

pub mod grad_check;
mod grad_fn;
pub(crate) mod graph;

pub use grad_check::{check_grad, GradCheckError};
pub(crate) use grad_fn::GradFn;

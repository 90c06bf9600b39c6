//! The differentiable primitives. Each operation validates its
//! shape/domain preconditions, computes the forward value through the
//! matrix backend, and attaches a `GradFn` to the output only when at
//! least one input requires gradients.

pub mod arithmetic;
pub mod linalg;
pub mod math_elem;
pub mod reduction;

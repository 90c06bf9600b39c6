//! Operator sugar for tensor expressions.
//!
//! The `std::ops` impls mirror the checked functions in [`crate::ops`]
//! but panic on shape/domain validation failure, since operator traits
//! cannot return `Result`. Code that needs to handle those errors
//! should call the `*_op` functions (or the `Tensor` methods) instead.

use crate::ops::arithmetic::{
    add_op, div_op, div_scalar_op, mul_op, mul_scalar_op, scalar_div_op, sub_op,
};
use crate::tensor::Tensor;
use std::ops::{Add, Div, Mul, Sub};

impl Add<&Tensor> for &Tensor {
    type Output = Tensor;

    fn add(self, rhs: &Tensor) -> Tensor {
        add_op(self, rhs).unwrap_or_else(|e| panic!("{e}"))
    }
}

impl Sub<&Tensor> for &Tensor {
    type Output = Tensor;

    fn sub(self, rhs: &Tensor) -> Tensor {
        sub_op(self, rhs).unwrap_or_else(|e| panic!("{e}"))
    }
}

/// Elementwise product, with 1x1 operands broadcast as scalars.
impl Mul<&Tensor> for &Tensor {
    type Output = Tensor;

    fn mul(self, rhs: &Tensor) -> Tensor {
        mul_op(self, rhs).unwrap_or_else(|e| panic!("{e}"))
    }
}

impl Mul<f64> for &Tensor {
    type Output = Tensor;

    fn mul(self, rhs: f64) -> Tensor {
        mul_scalar_op(self, rhs).unwrap_or_else(|e| panic!("{e}"))
    }
}

impl Mul<&Tensor> for f64 {
    type Output = Tensor;

    fn mul(self, rhs: &Tensor) -> Tensor {
        mul_scalar_op(rhs, self).unwrap_or_else(|e| panic!("{e}"))
    }
}

/// Elementwise division, with 1x1 operands broadcast as scalars.
impl Div<&Tensor> for &Tensor {
    type Output = Tensor;

    fn div(self, rhs: &Tensor) -> Tensor {
        div_op(self, rhs).unwrap_or_else(|e| panic!("{e}"))
    }
}

impl Div<f64> for &Tensor {
    type Output = Tensor;

    fn div(self, rhs: f64) -> Tensor {
        div_scalar_op(self, rhs).unwrap_or_else(|e| panic!("{e}"))
    }
}

impl Div<&Tensor> for f64 {
    type Output = Tensor;

    fn div(self, rhs: &Tensor) -> Tensor {
        scalar_div_op(self, rhs).unwrap_or_else(|e| panic!("{e}"))
    }
}

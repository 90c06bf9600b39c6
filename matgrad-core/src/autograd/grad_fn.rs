use crate::matrix::Matrix;
use crate::ops;
use crate::tensor::Tensor;

/// One recorded forward step: the producing operation of a derived
/// node. The primitive set is closed and enumerable, so dispatch is a
/// tagged enum rather than a trait-object hierarchy.
///
/// A `GradFn` holds strong handles to its *input* nodes only, plus the
/// per-instance constants its backward rule needs (a scalar divisor, a
/// reduction axis and pre-reduction shape, the numerator orientation
/// of a scalar division, a cached forward value for `Exp`). The output
/// node owns its `GradFn` through `TensorData::grad_fn`, and the
/// engine passes the output's accumulated gradient *in* to
/// [`backward`](GradFn::backward) — there is no operation-to-output
/// edge, so node and producer never form a reference cycle.
#[derive(Debug)]
pub(crate) enum GradFn {
    Add {
        a: Tensor,
        b: Tensor,
    },
    Sub {
        a: Tensor,
        b: Tensor,
    },
    /// Elementwise product, including the 1x1 scalar-broadcast form.
    Dot {
        a: Tensor,
        b: Tensor,
    },
    MatMul {
        a: Tensor,
        b: Tensor,
    },
    ScalarMul {
        a: Tensor,
        scalar: f64,
    },
    /// Elementwise division, including the 1x1 scalar-broadcast forms.
    Div {
        a: Tensor,
        b: Tensor,
    },
    /// `A / s` when `numerator_is_tensor`, otherwise `s / A`.
    ScalarDiv {
        a: Tensor,
        scalar: f64,
        numerator_is_tensor: bool,
    },
    Sum {
        a: Tensor,
        dim: usize,
        input_shape: (usize, usize),
    },
    Mean {
        a: Tensor,
        dim: usize,
        input_shape: (usize, usize),
    },
    Exp {
        a: Tensor,
        /// Forward value, cached so backward needs no output link.
        result: Matrix,
    },
    Log {
        a: Tensor,
    },
    Abs {
        a: Tensor,
    },
}

impl GradFn {
    /// Graph predecessors, in the order [`backward`](GradFn::backward)
    /// returns their contributions.
    pub(crate) fn inputs(&self) -> Vec<Tensor> {
        match self {
            GradFn::Add { a, b }
            | GradFn::Sub { a, b }
            | GradFn::Dot { a, b }
            | GradFn::MatMul { a, b }
            | GradFn::Div { a, b } => vec![a.clone(), b.clone()],
            GradFn::ScalarMul { a, .. }
            | GradFn::ScalarDiv { a, .. }
            | GradFn::Sum { a, .. }
            | GradFn::Mean { a, .. }
            | GradFn::Exp { a, .. }
            | GradFn::Log { a }
            | GradFn::Abs { a } => vec![a.clone()],
        }
    }

    /// Maps the output's accumulated gradient to one additive
    /// contribution per input, in [`inputs`](GradFn::inputs) order.
    ///
    /// Infallible by design: forward validation already guaranteed
    /// well-formed shapes and domains, so the backward pass never
    /// produces an error.
    pub(crate) fn backward(&self, grad_output: &Matrix) -> Vec<Matrix> {
        match self {
            GradFn::Add { .. } => ops::arithmetic::add::backward(grad_output),
            GradFn::Sub { .. } => ops::arithmetic::sub::backward(grad_output),
            GradFn::Dot { a, b } => {
                ops::arithmetic::mul::backward(&a.data(), &b.data(), grad_output)
            }
            GradFn::MatMul { a, b } => {
                ops::linalg::matmul::backward(&a.data(), &b.data(), grad_output)
            }
            GradFn::ScalarMul { scalar, .. } => {
                ops::arithmetic::scalar::mul_backward(*scalar, grad_output)
            }
            GradFn::Div { a, b } => {
                ops::arithmetic::div::backward(&a.data(), &b.data(), grad_output)
            }
            GradFn::ScalarDiv {
                a,
                scalar,
                numerator_is_tensor,
            } => ops::arithmetic::scalar::div_backward(
                &a.data(),
                *scalar,
                *numerator_is_tensor,
                grad_output,
            ),
            GradFn::Sum {
                dim, input_shape, ..
            } => ops::reduction::sum::backward(*input_shape, *dim, grad_output),
            GradFn::Mean {
                dim, input_shape, ..
            } => ops::reduction::mean::backward(*input_shape, *dim, grad_output),
            GradFn::Exp { result, .. } => ops::math_elem::exp::backward(result, grad_output),
            GradFn::Log { a } => ops::math_elem::log::backward(&a.data(), grad_output),
            GradFn::Abs { a } => ops::math_elem::abs::backward(&a.data(), grad_output),
        }
    }

    pub(crate) fn name(&self) -> &'static str {
        match self {
            GradFn::Add { .. } => "Add",
            GradFn::Sub { .. } => "Sub",
            GradFn::Dot { .. } => "Dot",
            GradFn::MatMul { .. } => "MatMul",
            GradFn::ScalarMul { .. } => "ScalarMul",
            GradFn::Div { .. } => "Div",
            GradFn::ScalarDiv { .. } => "ScalarDiv",
            GradFn::Sum { .. } => "Sum",
            GradFn::Mean { .. } => "Mean",
            GradFn::Exp { .. } => "Exp",
            GradFn::Log { .. } => "Log",
            GradFn::Abs { .. } => "Abs",
        }
    }
}

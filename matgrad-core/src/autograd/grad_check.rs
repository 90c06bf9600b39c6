use crate::error::MatGradError;
use crate::matrix::Matrix;
use crate::tensor::Tensor;
use approx::relative_eq;
use thiserror::Error;

/// Error type specifically for gradient checking failures.
#[derive(Error, Debug)]
pub enum GradCheckError {
    #[error("Gradient mismatch for input {input_index} at ({row}, {col}): analytical {analytical}, numerical {numerical}, difference {difference}")]
    GradientMismatch {
        input_index: usize,
        row: usize,
        col: usize,
        analytical: f64,
        numerical: f64,
        difference: f64,
    },

    #[error("Gradient check input {input_index} must be a leaf tensor")]
    InputNotLeaf { input_index: usize },

    #[error("Forward pass failed during gradient check: {0}")]
    ForwardPassError(MatGradError),

    #[error("Backward pass failed during gradient check: {0}")]
    BackwardPassError(MatGradError),

    #[error("Non-finite gradient for input {input_index} at ({row}, {col}): analytical {analytical}, numerical {numerical}")]
    NonFiniteGradient {
        input_index: usize,
        row: usize,
        col: usize,
        analytical: f64,
        numerical: f64,
    },

    #[error("Tensor error during gradient check: {0}")]
    TensorError(#[from] MatGradError),
}

/// Checks analytical gradients against central finite differences.
///
/// `func` rebuilds the forward expression from a slice of leaf inputs;
/// `seed` is the output gradient, and the scalar loss used for the
/// numerical side is `sum(output * seed)`. For every element of every
/// input that requires gradients, the element is perturbed by
/// `+/- epsilon`, the expression is re-run, and the centered
/// difference quotient is compared against the analytical gradient
/// with `tolerance` as both the absolute and relative bound.
pub fn check_grad<F>(
    func: F,
    inputs: &[Tensor],
    seed: &Matrix,
    epsilon: f64,
    tolerance: f64,
) -> Result<(), GradCheckError>
where
    F: Fn(&[Tensor]) -> Result<Tensor, MatGradError>,
{
    for (i, input) in inputs.iter().enumerate() {
        if !input.is_leaf() {
            return Err(GradCheckError::InputNotLeaf { input_index: i });
        }
        input.zero_grad();
    }

    // Analytical gradients.
    let output = func(inputs).map_err(GradCheckError::ForwardPassError)?;
    let seed_tensor = Tensor::new(seed.clone(), false);
    output
        .backward(Some(&seed_tensor))
        .map_err(GradCheckError::BackwardPassError)?;
    let analytical_grads: Vec<Matrix> = inputs.iter().map(|t| t.grad()).collect();

    for (i, input) in inputs.iter().enumerate() {
        if !input.requires_grad() {
            continue;
        }
        let (rows, cols) = input.shape();
        for row in 0..rows {
            for col in 0..cols {
                let loss_plus = perturbed_loss(&func, inputs, i, row, col, epsilon, seed)?;
                let loss_minus = perturbed_loss(&func, inputs, i, row, col, -epsilon, seed)?;
                let numerical = (loss_plus - loss_minus) / (2.0 * epsilon);
                let analytical = analytical_grads[i].get(row, col);

                if !numerical.is_finite() || !analytical.is_finite() {
                    return Err(GradCheckError::NonFiniteGradient {
                        input_index: i,
                        row,
                        col,
                        analytical,
                        numerical,
                    });
                }

                if !relative_eq!(
                    analytical,
                    numerical,
                    epsilon = tolerance,
                    max_relative = tolerance
                ) {
                    return Err(GradCheckError::GradientMismatch {
                        input_index: i,
                        row,
                        col,
                        analytical,
                        numerical,
                        difference: (analytical - numerical).abs(),
                    });
                }
            }
        }
    }

    Ok(())
}

/// Re-runs `func` with one element of one input shifted by `delta` and
/// returns the scalar loss `sum(output * seed)`.
fn perturbed_loss<F>(
    func: &F,
    inputs: &[Tensor],
    input_index: usize,
    row: usize,
    col: usize,
    delta: f64,
    seed: &Matrix,
) -> Result<f64, GradCheckError>
where
    F: Fn(&[Tensor]) -> Result<Tensor, MatGradError>,
{
    let mut data = inputs[input_index].data();
    *data.get_mut(row, col) += delta;

    let mut perturbed: Vec<Tensor> = inputs.to_vec();
    perturbed[input_index] = Tensor::new(data, inputs[input_index].requires_grad());

    let output = func(&perturbed).map_err(GradCheckError::ForwardPassError)?;
    Ok(output.data().mul(seed).sum())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::arithmetic::mul_op;

    #[test]
    fn test_check_grad_accepts_correct_gradient() {
        let a = Tensor::from_vec(vec![0.5, -1.5, 2.0, 3.0], 2, 2).unwrap();
        a.set_requires_grad(true).unwrap();
        let b = Tensor::from_vec(vec![1.0, 4.0, -2.0, 0.5], 2, 2).unwrap();
        b.set_requires_grad(true).unwrap();

        check_grad(
            |inputs| mul_op(&inputs[0], &inputs[1]),
            &[a, b],
            &Matrix::ones(2, 2),
            1e-6,
            1e-6,
        )
        .unwrap();
    }

    #[test]
    fn test_check_grad_rejects_non_leaf_input() {
        let a = Tensor::ones(2, 2, true);
        let derived = mul_op(&a, &a).unwrap();
        let result = check_grad(
            |inputs| mul_op(&inputs[0], &inputs[0]),
            &[derived],
            &Matrix::ones(2, 2),
            1e-6,
            1e-6,
        );
        assert!(matches!(
            result,
            Err(GradCheckError::InputNotLeaf { input_index: 0 })
        ));
    }
}

use crate::autograd::graph;
use crate::error::MatGradError;
use crate::matrix::Matrix;
use crate::tensor::Tensor;

impl Tensor {
    /// Propagates gradient from this tensor to every ancestor
    /// reachable through producer links, accumulating into each
    /// ancestor's gradient in place.
    ///
    /// The seed is the gradient of the final loss with respect to this
    /// tensor. `None` is only accepted when this tensor is a 1x1
    /// scalar, in which case the seed defaults to a single 1.0
    /// ("treat this node as the loss"); non-scalar roots must pass an
    /// explicit seed of matching shape. The seed is *accumulated* into
    /// this tensor's gradient, so repeated backward calls over a
    /// shared graph compose additively.
    ///
    /// Once seeding has been validated the traversal itself cannot
    /// fail: each producing operation runs exactly once, in reverse
    /// topological order.
    pub fn backward(&self, seed: Option<&Tensor>) -> Result<(), MatGradError> {
        let (shape, requires_grad, is_leaf) = {
            let guard = self.read_data();
            (guard.shape(), guard.requires_grad, guard.grad_fn.is_none())
        };

        if !requires_grad {
            return Err(MatGradError::RequiresGradNotMet);
        }

        let seed = match seed {
            Some(seed_tensor) => {
                let seed_data = seed_tensor.data();
                if seed_data.shape() != shape {
                    return Err(MatGradError::ShapeMismatch {
                        left: shape,
                        right: seed_data.shape(),
                        operation: "backward seed".to_string(),
                    });
                }
                seed_data
            }
            None if shape == (1, 1) => Matrix::ones(1, 1),
            None => return Err(MatGradError::BackwardNonScalar),
        };

        if is_leaf {
            log::debug!("backward() called on a leaf tensor; seeding only.");
        }

        graph::backward(self, seed);
        Ok(())
    }

    /// Resets this tensor's gradient accumulator to zeros of the
    /// current shape.
    pub fn zero_grad(&self) {
        self.write_data().zero_grad();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backward_requires_grad_not_met() {
        let t = Tensor::ones(1, 1, false);
        assert_eq!(t.backward(None), Err(MatGradError::RequiresGradNotMet));
    }

    #[test]
    fn test_backward_non_scalar_without_seed() {
        let t = Tensor::ones(2, 2, true);
        assert_eq!(t.backward(None), Err(MatGradError::BackwardNonScalar));
    }

    #[test]
    fn test_backward_seed_shape_mismatch() {
        let t = Tensor::ones(2, 2, true);
        let seed = Tensor::ones(2, 3, false);
        assert!(matches!(
            t.backward(Some(&seed)),
            Err(MatGradError::ShapeMismatch { .. })
        ));
    }

    #[test]
    fn test_backward_on_scalar_leaf_seeds_grad() {
        let t = Tensor::ones(1, 1, true);
        t.backward(None).unwrap();
        assert_eq!(t.grad().data(), &[1.0]);
        // Seeding accumulates across calls.
        t.backward(None).unwrap();
        assert_eq!(t.grad().data(), &[2.0]);
    }

    #[test]
    fn test_zero_grad_resets_accumulator() {
        let t = Tensor::ones(1, 1, true);
        t.backward(None).unwrap();
        t.zero_grad();
        assert_eq!(t.grad().data(), &[0.0]);
    }
}

use crate::matrix::Matrix;
use crate::tensor::Tensor;
use crate::tensor_data::TensorData;
use std::collections::HashSet;
use std::sync::RwLock;

/// Runs one backward pass from `root` with the given (already
/// validated) seed gradient.
///
/// The seed is accumulated into the root's gradient, then every node
/// reachable through producer links is processed exactly once in
/// reverse topological order: a node's backward rule only runs after
/// all of its consumers have contributed to its gradient, so the
/// gradient each rule reads is complete even in diamond-shaped graphs.
pub(crate) fn backward(root: &Tensor, seed: Matrix) {
    root.write_data().grad.add_assign(&seed);

    let order = topological_order(root);
    log::debug!("backward: {} nodes reachable from root", order.len());

    for node in order.iter().rev() {
        let grad_fn = node.read_data().grad_fn.clone();
        let Some(grad_fn) = grad_fn else {
            continue; // leaf
        };
        let grad_output = node.read_data().grad.clone();
        log::trace!("backward: applying {} rule", grad_fn.name());

        let contributions = grad_fn.backward(&grad_output);
        let inputs = grad_fn.inputs();
        debug_assert_eq!(contributions.len(), inputs.len());

        for (input, contribution) in inputs.iter().zip(contributions.iter()) {
            let mut guard = input.write_data();
            if guard.requires_grad {
                guard.grad.add_assign(contribution);
            }
        }
    }
}

/// Iterative depth-first post-order over producer links: every node
/// appears after all nodes reachable from it, so reversing the list
/// yields a valid backward processing order (root first, leaves last).
/// Nodes are deduplicated by pointer identity, which is stable while
/// the returned handles keep them alive.
fn topological_order(root: &Tensor) -> Vec<Tensor> {
    let mut visited: HashSet<*const RwLock<TensorData>> = HashSet::new();
    let mut order = Vec::new();
    // (node, expanded): a node is pushed once to expand its inputs and
    // once more, marked, to emit it after them.
    let mut stack: Vec<(Tensor, bool)> = vec![(root.clone(), false)];

    while let Some((node, expanded)) = stack.pop() {
        if expanded {
            order.push(node);
            continue;
        }
        if !visited.insert(node.node_id()) {
            continue;
        }
        let inputs = node
            .read_data()
            .grad_fn
            .as_ref()
            .map(|grad_fn| grad_fn.inputs())
            .unwrap_or_default();
        stack.push((node, true));
        for input in inputs {
            if !visited.contains(&input.node_id()) {
                stack.push((input, false));
            }
        }
    }

    order
}

use crate::autograd::GradFn;
use crate::matrix::Matrix;
use crate::tensor_data::TensorData;
use std::hash::{Hash, Hasher};
use std::sync::{Arc, RwLock};

mod accessors;
mod autograd;
pub mod create;
mod methods;
mod traits;

/// The user-facing handle over one computation-graph node.
///
/// `Tensor` wraps `Arc<RwLock<TensorData>>`:
/// 1. **Shared ownership** — cloning a handle is cheap and aliases the
///    same node; operations capture clones of their input handles, so
///    a node lives as long as any handle or consuming operation.
/// 2. **Interior mutability** — the gradient accumulator is mutated
///    through shared references during backward passes.
///
/// Equality and hashing are *node identity* (pointer), not value
/// equality: two handles compare equal iff they alias the same node.
pub struct Tensor {
    pub(crate) data: Arc<RwLock<TensorData>>,
}

impl Tensor {
    /// Creates a leaf tensor from an explicit matrix.
    pub fn new(data: Matrix, requires_grad: bool) -> Self {
        Tensor {
            data: Arc::new(RwLock::new(TensorData::new(data, requires_grad))),
        }
    }

    /// Allocates the output node of one forward step. Called by the
    /// `ops` modules only; `requires_grad` is implied by `grad_fn`.
    pub(crate) fn from_op(data: Matrix, grad_fn: Option<GradFn>) -> Self {
        Tensor {
            data: Arc::new(RwLock::new(TensorData::from_op(data, grad_fn))),
        }
    }

    /// Acquires a read lock on the node. Panics if the lock is poisoned.
    pub(crate) fn read_data(&self) -> std::sync::RwLockReadGuard<'_, TensorData> {
        self.data.read().expect("RwLock poisoned")
    }

    /// Acquires a write lock on the node. Panics if the lock is poisoned.
    pub(crate) fn write_data(&self) -> std::sync::RwLockWriteGuard<'_, TensorData> {
        self.data.write().expect("RwLock poisoned")
    }

    /// Stable node identity, used as the visited-set key by the
    /// backward engine. Valid while any handle to the node is alive.
    pub(crate) fn node_id(&self) -> *const RwLock<TensorData> {
        Arc::as_ptr(&self.data)
    }
}

impl Clone for Tensor {
    fn clone(&self) -> Self {
        Tensor {
            data: Arc::clone(&self.data),
        }
    }
}

impl PartialEq for Tensor {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.node_id(), other.node_id())
    }
}

impl Eq for Tensor {}

impl Hash for Tensor {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.node_id().hash(state);
    }
}

impl std::fmt::Debug for Tensor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let guard = self.read_data();
        f.debug_struct("Tensor")
            .field("shape", &guard.shape())
            .field("requires_grad", &guard.requires_grad)
            .field("grad_fn", &guard.grad_fn.as_ref().map(|g| g.name()))
            .field("data", &guard.data)
            .finish()
    }
}

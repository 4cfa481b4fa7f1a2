// picograd-core/src/value/autograd_methods.rs

use log::debug;
use num_traits::Float;

use crate::autograd::graph::topo_sort;
use crate::value::Value;

impl<T: Float> Value<T> {
    /// Runs the backward pass from this node.
    ///
    /// Computes a topological order over the ancestor DAG (each node
    /// exactly once, shared subexpressions included), seeds this node's
    /// gradient with 1.0 (d(self)/d(self) = 1), then replays each node's
    /// gradient rule in reverse order so every ancestor ends up holding
    /// the total partial derivative of this node with respect to it.
    ///
    /// Gradients are only ever incremented: calling `backward()` twice
    /// without resetting compounds contributions additively. Zeroing the
    /// accumulators between passes is the caller's responsibility.
    pub fn backward(&self) {
        let sorted = topo_sort(self);
        debug!("backward: replaying {} nodes", sorted.len());

        self.inner.borrow_mut().grad = T::one();

        for node in sorted.iter().rev() {
            node.apply_rule();
        }
    }

    /// Dispatches this node's gradient rule, if it has one.
    fn apply_rule(&self) {
        // Snapshot under a short borrow: the rule mutates operand nodes,
        // which are always distinct from this one (the graph is acyclic).
        let (op, operands, data, grad) = {
            let node = self.inner.borrow();
            match node.op {
                None => return, // leaf: nothing upstream of it
                Some(op) => (op, node.operands.clone(), node.data, node.grad),
            }
        };
        op.propagate(&operands, data, grad);
    }
}

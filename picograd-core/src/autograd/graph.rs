// picograd-core/src/autograd/graph.rs

use std::cell::RefCell;
use std::collections::HashSet;

use log::trace;
use num_traits::Float;

use crate::value::{Value, ValueData};

/// Builds a topological sort of the ancestor DAG of `node`.
/// Used by `backward()` to process nodes in the correct order.
///
/// Iterative post-order depth-first traversal with an explicit stack, so
/// stack usage stays bounded regardless of graph depth. The visited set is
/// keyed by node identity (pointer address), which guarantees each node is
/// enqueued exactly once however many paths reach it.
///
/// In the returned sequence a node always appears after all of its
/// operands; `node` itself is last.
pub(crate) fn topo_sort<T: Float>(node: &Value<T>) -> Vec<Value<T>> {
    let mut sorted_list = Vec::new();
    let mut visited: HashSet<*const RefCell<ValueData<T>>> = HashSet::new();
    // (node, operands_done): a node is re-pushed with the flag set and only
    // appended once every operand below it has been emitted.
    let mut stack = vec![(node.clone(), false)];

    while let Some((current, operands_done)) = stack.pop() {
        if operands_done {
            sorted_list.push(current);
            continue;
        }
        if !visited.insert(current.id_ptr()) {
            trace!("topo_sort: node {:?} already visited", current.id_ptr());
            continue;
        }
        trace!("topo_sort: visiting node {:?}", current.id_ptr());
        stack.push((current.clone(), true));
        for operand in current.operands() {
            stack.push((operand, false));
        }
    }

    sorted_list
}

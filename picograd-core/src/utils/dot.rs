// picograd-core/src/utils/dot.rs

use std::collections::HashSet;
use std::fmt::Display;

use num_traits::Float;

use crate::value::Value;

/// Renders the expression graph rooted at `root` in Graphviz DOT syntax.
///
/// Each node becomes a record showing its label (when set), data and grad.
/// Non-leaf nodes additionally get a small circle carrying the operation
/// tag, wired between the node and its parents, so the drawing reads as
/// data flowing left to right.
pub fn to_dot<T: Float + Display>(root: &Value<T>) -> String {
    let mut out = String::from("digraph {\n  rankdir=LR;\n");
    let mut visited: HashSet<usize> = HashSet::new();
    let mut stack = vec![root.clone()];

    while let Some(node) = stack.pop() {
        let id = node.id_ptr() as usize;
        if !visited.insert(id) {
            continue;
        }

        let header = match node.label() {
            Some(label) => format!("{} | ", label),
            None => String::new(),
        };
        out.push_str(&format!(
            "  n{} [shape=record, label=\"{{{}data {:.4} | grad {:.4}}}\"];\n",
            id,
            header,
            node.data(),
            node.grad()
        ));

        if let Some(tag) = node.op_tag() {
            out.push_str(&format!("  n{}op [label=\"{}\"];\n", id, tag));
            out.push_str(&format!("  n{}op -> n{};\n", id, id));
            for parent in node.parents() {
                out.push_str(&format!("  n{} -> n{}op;\n", parent.id_ptr() as usize, id));
                stack.push(parent);
            }
        }
    }

    out.push_str("}\n");
    out
}

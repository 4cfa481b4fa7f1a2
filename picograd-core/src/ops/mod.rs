// The graph-builder surface: every function here eagerly computes a
// forward value and returns a freshly wired node.

pub mod activation;
pub mod arithmetic;
pub mod math_elem;

// Reverse-mode machinery: the gradient rule table (`Op`), the backward
// scheduler's topological sort, and the finite-difference gradient checker.
// The `backward()` entry point itself lives on `Value`
// (value/autograd_methods.rs).

pub mod grad_check;
pub(crate) mod graph;
pub mod op;

pub use grad_check::{check_grad, GradCheckError};
pub use op::Op;

// picograd-core/src/value/mod.rs

use std::cell::RefCell;
use std::collections::HashSet;
use std::fmt::Display;
use std::rc::Rc;

use num_traits::Float;

use crate::autograd::Op;

mod autograd_methods;
mod traits;
pub mod value_data;

pub use value_data::ValueData;

/// A scalar node in a computation graph.
///
/// `Value` uses `Rc<RefCell<ValueData>>` internally to allow for:
/// 1.  **Shared Ownership:** a node may be the input of many derived nodes
///     (the graph is a DAG, not a tree); every handle is a cheap clone that
///     shares the same underlying node.
/// 2.  **Interior Mutability:** the gradient accumulator (and, for leaves,
///     the data itself between training iterations) is mutated through
///     immutable handles during the backward pass.
///
/// Equality and hashing are by node identity, never numeric value: two
/// distinct nodes holding the same number are different graph entities.
pub struct Value<T> {
    pub(crate) inner: Rc<RefCell<ValueData<T>>>,
}

impl<T> Value<T> {
    /// Stable identity of the underlying node, used as a visitation key.
    pub(crate) fn id_ptr(&self) -> *const RefCell<ValueData<T>> {
        Rc::as_ptr(&self.inner)
    }
}

impl<T: Float> Value<T> {
    /// Creates a leaf node from a bare numeric value.
    ///
    /// This is the single promotion path: every operator entry point that
    /// accepts a raw scalar routes it through here, keeping both operand
    /// positions symmetric for commutative operations.
    pub fn new(data: T) -> Self {
        Value {
            inner: Rc::new(RefCell::new(ValueData::leaf(data))),
        }
    }

    /// Attaches a rendering label and hands the node back, so expressions
    /// can be labeled inline as they are built.
    pub fn with_label(self, label: &str) -> Self {
        self.set_label(label);
        self
    }

    /// Wires up a derived node: eager forward value, operation variant and
    /// ordered operand handles.
    pub(crate) fn from_op(data: T, operands: Vec<Value<T>>, op: Op<T>) -> Self {
        Value {
            inner: Rc::new(RefCell::new(ValueData::from_op(data, operands, op))),
        }
    }

    /// Returns the forward value.
    pub fn data(&self) -> T {
        self.inner.borrow().data
    }

    /// Overwrites the forward value.
    ///
    /// Intended for externally-designated leaf/parameter nodes mutated by
    /// an optimizer between training iterations; the engine itself never
    /// calls this.
    pub fn set_data(&self, data: T) {
        self.inner.borrow_mut().data = data;
    }

    /// Returns the accumulated gradient.
    pub fn grad(&self) -> T {
        self.inner.borrow().grad
    }

    /// Overwrites the accumulated gradient.
    pub fn set_grad(&self, grad: T) {
        self.inner.borrow_mut().grad = grad;
    }

    /// Resets the gradient accumulator to zero.
    ///
    /// `backward()` never does this implicitly; the caller must reset every
    /// node of interest before a new pass or contributions compound.
    pub fn zero_grad(&self) {
        self.inner.borrow_mut().grad = T::zero();
    }

    /// Adds a contribution to the gradient accumulator. Accumulation is
    /// always additive so that fan-out sums rather than overwrites.
    pub(crate) fn acc_grad(&self, delta: T) {
        let mut data = self.inner.borrow_mut();
        data.grad = data.grad + delta;
    }

    /// Returns the rendering label, if one was set.
    pub fn label(&self) -> Option<String> {
        self.inner.borrow().label.clone()
    }

    /// Sets the rendering label.
    pub fn set_label(&self, label: &str) {
        self.inner.borrow_mut().label = Some(label.to_string());
    }

    /// Returns the direct inputs of this node, deduplicated by identity.
    ///
    /// Together with [`Value::op_tag`] this is the inspection surface a
    /// visualization collaborator needs to render the expression DAG.
    pub fn parents(&self) -> Vec<Value<T>> {
        let mut seen: HashSet<*const RefCell<ValueData<T>>> = HashSet::new();
        let mut parents = Vec::new();
        for operand in self.inner.borrow().operands.iter() {
            if seen.insert(operand.id_ptr()) {
                parents.push(operand.clone());
            }
        }
        parents
    }

    /// Ordered operands, duplicates preserved, for the gradient dispatch.
    pub(crate) fn operands(&self) -> Vec<Value<T>> {
        self.inner.borrow().operands.clone()
    }

    /// True for nodes constructed directly from a numeric value.
    pub fn is_leaf(&self) -> bool {
        self.inner.borrow().op.is_none()
    }

    /// Raises this node to a fixed constant exponent. The exponent is a
    /// plain number known at construction time, never a node.
    pub fn pow(&self, exponent: T) -> Value<T> {
        crate::ops::arithmetic::pow_op(self, exponent)
    }

    /// e^x.
    pub fn exp(&self) -> Value<T> {
        crate::ops::math_elem::exp_op(self)
    }

    /// Epsilon-stabilized natural logarithm.
    pub fn ln(&self) -> Value<T> {
        crate::ops::math_elem::ln_op(self)
    }

    /// Hyperbolic tangent activation.
    pub fn tanh(&self) -> Value<T> {
        crate::ops::activation::tanh_op(self)
    }

    /// Rectified linear activation.
    pub fn relu(&self) -> Value<T> {
        crate::ops::activation::relu_op(self)
    }

    /// Logistic sigmoid activation.
    pub fn sigmoid(&self) -> Value<T> {
        crate::ops::activation::sigmoid_op(self)
    }

    /// Identity activation (a distinct graph node with gradient 1).
    pub fn linear(&self) -> Value<T> {
        crate::ops::activation::identity_op(self)
    }
}

impl<T: Float + Display> Value<T> {
    /// Identifies the gradient rule that produced this node, e.g. `"add"`,
    /// `"mul"`, `"pow:2"`. `None` for leaf nodes.
    pub fn op_tag(&self) -> Option<String> {
        self.inner.borrow().op.as_ref().map(|op| op.tag())
    }
}

// picograd-core/src/value/value_data.rs

use crate::autograd::Op;
use crate::value::Value;

/// Internal storage and provenance for a graph node.
///
/// This struct holds the forward value, the gradient accumulator and the
/// record of how the value was derived (operation variant plus the ordered
/// operand handles). It is wrapped in `Rc<RefCell<ValueData>>` by the
/// `Value` handle to allow shared ownership and interior mutability: a node
/// may be an ancestor of many children, so single-owner models do not apply.
#[derive(Debug)]
pub struct ValueData<T> {
    /// The forward value, computed eagerly at construction. The core never
    /// mutates it; only an external optimizer overwrites leaf values.
    pub(crate) data: T,
    /// Additive gradient accumulator. Zero at construction, incremented
    /// during backward replay, reset only by the caller.
    pub(crate) grad: T,
    /// The operation that produced this node; `None` for leaves.
    pub(crate) op: Option<Op<T>>,
    /// Ordered direct inputs. Duplicates are preserved here because the
    /// gradient dispatch is positional (`a * a` contributes through both
    /// slots); the public `parents()` accessor deduplicates by identity.
    pub(crate) operands: Vec<Value<T>>,
    /// Free-form label for graph rendering.
    pub(crate) label: Option<String>,
}

impl<T: num_traits::Float> ValueData<T> {
    /// Storage for a zero-parent leaf node.
    pub(crate) fn leaf(data: T) -> Self {
        ValueData {
            data,
            grad: T::zero(),
            op: None,
            operands: Vec::new(),
            label: None,
        }
    }

    /// Storage for a derived node with its provenance wired in.
    pub(crate) fn from_op(data: T, operands: Vec<Value<T>>, op: Op<T>) -> Self {
        ValueData {
            data,
            grad: T::zero(),
            op: Some(op),
            operands,
            label: None,
        }
    }
}

// picograd-core/src/value/traits.rs

use crate::value::Value;
use std::fmt::{self, Debug, Display};
use std::hash::{Hash, Hasher};
use std::rc::Rc;

// --- Trait Implementations ---

impl<T> Clone for Value<T> {
    /// Clones the handle. This is a shallow clone that increases the
    /// reference count of the underlying node; modifications through one
    /// clone are visible through the others.
    fn clone(&self) -> Self {
        Value {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: Debug> Debug for Value<T> {
    /// Shallow debug rendering: data, gradient and operation, but not the
    /// ancestor graph (which may be large and shared).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let data = self.inner.borrow();
        f.debug_struct("Value")
            .field("data", &data.data)
            .field("grad", &data.grad)
            .field("op", &data.op)
            .field("operands", &data.operands.len())
            .finish()
    }
}

impl<T: Display> Display for Value<T> {
    /// Human-readable rendering of the node's value.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Value(data={})", self.inner.borrow().data)
    }
}

impl<T> PartialEq for Value<T> {
    /// Node identity, not numeric equality.
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl<T> Eq for Value<T> {}

impl<T> Hash for Value<T> {
    /// Hashes by the pointer address of the shared node, consistent with
    /// the identity-based `PartialEq`.
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id_ptr().hash(state);
    }
}

#[cfg(test)]
mod tests {
    use crate::value::Value;
    use std::collections::HashSet;

    #[test]
    fn test_display_matches_repr() {
        let x = Value::new(3.5_f64);
        assert_eq!(format!("{}", x), "Value(data=3.5)");
    }

    #[test]
    fn test_hash_by_identity() {
        let a = Value::new(1.0_f64);
        let b = Value::new(1.0_f64);
        let mut set = HashSet::new();
        set.insert(a.clone());
        set.insert(a.clone());
        set.insert(b);
        assert_eq!(set.len(), 2);
    }
}

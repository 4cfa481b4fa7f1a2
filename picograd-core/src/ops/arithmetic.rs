// picograd-core/src/ops/arithmetic.rs

use std::ops::{Add, Div, Mul, Neg, Sub};

use num_traits::Float;

use crate::autograd::Op;
use crate::value::Value;

// --- Forward operations ---

/// Adds two nodes. Local gradient is 1 toward each operand.
pub fn add_op<T: Float>(a: &Value<T>, b: &Value<T>) -> Value<T> {
    Value::from_op(a.data() + b.data(), vec![a.clone(), b.clone()], Op::Add)
}

/// Multiplies two nodes. Local gradient toward each operand is the other
/// operand's value.
pub fn mul_op<T: Float>(a: &Value<T>, b: &Value<T>) -> Value<T> {
    Value::from_op(a.data() * b.data(), vec![a.clone(), b.clone()], Op::Mul)
}

/// Negation, composed as `a * -1` (the constant is promoted to a leaf).
pub fn neg_op<T: Float>(a: &Value<T>) -> Value<T> {
    mul_op(a, &Value::new(-T::one()))
}

/// Subtraction, composed as `a + (-b)`.
pub fn sub_op<T: Float>(a: &Value<T>, b: &Value<T>) -> Value<T> {
    add_op(a, &neg_op(b))
}

/// Raises `base` to a fixed constant exponent: d/da = k * a^(k-1).
///
/// The exponent is a plain number known at construction time; a
/// node-valued exponent is unrepresentable by this signature, which is the
/// construction-time rejection the engine guarantees.
pub fn pow_op<T: Float>(base: &Value<T>, exponent: T) -> Value<T> {
    Value::from_op(
        base.data().powf(exponent),
        vec![base.clone()],
        Op::Pow(exponent),
    )
}

/// Division, composed as `a * b^-1`.
pub fn div_op<T: Float>(a: &Value<T>, b: &Value<T>) -> Value<T> {
    mul_op(a, &pow_op(b, -T::one()))
}

// --- Operator sugar ---
//
// Every combination of borrowed/owned nodes, plus scalar operands on
// either side. Raw scalars are promoted through the single `Value::new`
// constructor path, so `x + 2.0` and `2.0 + x` build the same graph shape.

macro_rules! impl_binary_op {
    ($trait:ident, $method:ident, $func:ident) => {
        impl<T: Float> $trait<&Value<T>> for &Value<T> {
            type Output = Value<T>;
            fn $method(self, rhs: &Value<T>) -> Value<T> {
                $func(self, rhs)
            }
        }

        impl<T: Float> $trait<Value<T>> for &Value<T> {
            type Output = Value<T>;
            fn $method(self, rhs: Value<T>) -> Value<T> {
                $func(self, &rhs)
            }
        }

        impl<T: Float> $trait<&Value<T>> for Value<T> {
            type Output = Value<T>;
            fn $method(self, rhs: &Value<T>) -> Value<T> {
                $func(&self, rhs)
            }
        }

        impl<T: Float> $trait<Value<T>> for Value<T> {
            type Output = Value<T>;
            fn $method(self, rhs: Value<T>) -> Value<T> {
                $func(&self, &rhs)
            }
        }

        impl<T: Float> $trait<T> for &Value<T> {
            type Output = Value<T>;
            fn $method(self, rhs: T) -> Value<T> {
                $func(self, &Value::new(rhs))
            }
        }

        impl<T: Float> $trait<T> for Value<T> {
            type Output = Value<T>;
            fn $method(self, rhs: T) -> Value<T> {
                $func(&self, &Value::new(rhs))
            }
        }
    };
}

impl_binary_op!(Add, add, add_op);
impl_binary_op!(Sub, sub, sub_op);
impl_binary_op!(Mul, mul, mul_op);
impl_binary_op!(Div, div, div_op);

// Scalar-on-the-left forms (constant minus node, constant divided by node,
// ...). A blanket `impl Add<Value<T>> for T` is not coherent, so the
// concrete float types are covered explicitly.
macro_rules! impl_scalar_lhs {
    ($t:ty) => {
        impl Add<&Value<$t>> for $t {
            type Output = Value<$t>;
            fn add(self, rhs: &Value<$t>) -> Value<$t> {
                add_op(&Value::new(self), rhs)
            }
        }

        impl Add<Value<$t>> for $t {
            type Output = Value<$t>;
            fn add(self, rhs: Value<$t>) -> Value<$t> {
                add_op(&Value::new(self), &rhs)
            }
        }

        impl Sub<&Value<$t>> for $t {
            type Output = Value<$t>;
            fn sub(self, rhs: &Value<$t>) -> Value<$t> {
                sub_op(&Value::new(self), rhs)
            }
        }

        impl Sub<Value<$t>> for $t {
            type Output = Value<$t>;
            fn sub(self, rhs: Value<$t>) -> Value<$t> {
                sub_op(&Value::new(self), &rhs)
            }
        }

        impl Mul<&Value<$t>> for $t {
            type Output = Value<$t>;
            fn mul(self, rhs: &Value<$t>) -> Value<$t> {
                mul_op(&Value::new(self), rhs)
            }
        }

        impl Mul<Value<$t>> for $t {
            type Output = Value<$t>;
            fn mul(self, rhs: Value<$t>) -> Value<$t> {
                mul_op(&Value::new(self), &rhs)
            }
        }

        impl Div<&Value<$t>> for $t {
            type Output = Value<$t>;
            fn div(self, rhs: &Value<$t>) -> Value<$t> {
                div_op(&Value::new(self), rhs)
            }
        }

        impl Div<Value<$t>> for $t {
            type Output = Value<$t>;
            fn div(self, rhs: Value<$t>) -> Value<$t> {
                div_op(&Value::new(self), &rhs)
            }
        }
    };
}

impl_scalar_lhs!(f32);
impl_scalar_lhs!(f64);

impl<T: Float> Neg for &Value<T> {
    type Output = Value<T>;
    fn neg(self) -> Value<T> {
        neg_op(self)
    }
}

impl<T: Float> Neg for Value<T> {
    type Output = Value<T>;
    fn neg(self) -> Value<T> {
        neg_op(&self)
    }
}

// --- Tests ---

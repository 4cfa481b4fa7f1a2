// picograd-core/src/ops/math_elem.rs

use num_traits::Float;

use crate::autograd::Op;
use crate::value::Value;

/// Additive shift applied to `ln`'s argument.
///
/// Avoids the singularity at zero at the cost of a slight bias. Negative
/// inputs are *not* rejected: for x <= -ε the math yields NaN, a known
/// precision/correctness gap callers must be aware of.
pub const LN_EPSILON: f64 = 1e-15;

pub(crate) fn ln_epsilon<T: Float>() -> T {
    T::from(LN_EPSILON).expect("epsilon must be representable in T")
}

/// e^x. The local gradient is the output value itself.
pub fn exp_op<T: Float>(a: &Value<T>) -> Value<T> {
    Value::from_op(a.data().exp(), vec![a.clone()], Op::Exp)
}

/// Epsilon-stabilized natural logarithm: ln(x + ε), d/dx = 1/(x + ε).
pub fn ln_op<T: Float>(a: &Value<T>) -> Value<T> {
    Value::from_op(
        (a.data() + ln_epsilon::<T>()).ln(),
        vec![a.clone()],
        Op::Ln,
    )
}

// --- Tests ---

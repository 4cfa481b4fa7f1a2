// picograd-core/src/autograd/op.rs

use std::fmt::Display;

use num_traits::Float;

use crate::ops::math_elem::ln_epsilon;
use crate::value::Value;

/// The finite set of differentiable operations.
///
/// Each derived node stores one of these variants instead of a
/// runtime-constructed closure; [`Op::propagate`] is the single dispatch
/// point mapping (operand values, output value, output gradient) to
/// per-operand gradient contributions.
///
/// Negation, subtraction and division have no variant of their own: they
/// are composed from `Mul`, `Add` and `Pow` at construction time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Op<T> {
    Add,
    Mul,
    /// Power by a fixed constant exponent (never a node).
    Pow(T),
    Exp,
    Ln,
    Tanh,
    Relu,
    Sigmoid,
    Identity,
}

impl<T: Float + Display> Op<T> {
    /// Short human-readable tag identifying the gradient rule.
    pub fn tag(&self) -> String {
        match self {
            Op::Add => "add".to_string(),
            Op::Mul => "mul".to_string(),
            Op::Pow(exponent) => format!("pow:{}", exponent),
            Op::Exp => "exp".to_string(),
            Op::Ln => "log".to_string(),
            Op::Tanh => "tanh".to_string(),
            Op::Relu => "relu".to_string(),
            Op::Sigmoid => "sigmoid".to_string(),
            Op::Identity => "linear".to_string(),
        }
    }
}

impl<T: Float> Op<T> {
    /// Executes this node's gradient rule, incrementing each operand's
    /// accumulator by its local-derivative contribution scaled by the
    /// node's own (already final) gradient.
    ///
    /// Accumulation is strictly additive: an operand reached through
    /// several paths sums the contributions from every usage site.
    pub(crate) fn propagate(&self, operands: &[Value<T>], out_data: T, out_grad: T) {
        match self {
            Op::Add => {
                for operand in operands {
                    operand.acc_grad(out_grad);
                }
            }
            Op::Mul => {
                let a = operands[0].data();
                let b = operands[1].data();
                operands[0].acc_grad(b * out_grad);
                operands[1].acc_grad(a * out_grad);
            }
            Op::Pow(exponent) => {
                let x = operands[0].data();
                operands[0].acc_grad(*exponent * x.powf(*exponent - T::one()) * out_grad);
            }
            Op::Exp => {
                // d(e^x)/dx is the output itself
                operands[0].acc_grad(out_data * out_grad);
            }
            Op::Ln => {
                let x = operands[0].data();
                operands[0].acc_grad(out_grad / (x + ln_epsilon::<T>()));
            }
            Op::Tanh => {
                operands[0].acc_grad((T::one() - out_data * out_data) * out_grad);
            }
            Op::Relu => {
                // Gradient is 1 on [0, inf), including at exactly 0
                if operands[0].data() >= T::zero() {
                    operands[0].acc_grad(out_grad);
                }
            }
            Op::Sigmoid => {
                operands[0].acc_grad(out_data * (T::one() - out_data) * out_grad);
            }
            Op::Identity => {
                operands[0].acc_grad(out_grad);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tags() {
        assert_eq!(Op::<f64>::Add.tag(), "add");
        assert_eq!(Op::<f64>::Mul.tag(), "mul");
        assert_eq!(Op::Pow(2.0_f64).tag(), "pow:2");
        assert_eq!(Op::Pow(-1.0_f64).tag(), "pow:-1");
        assert_eq!(Op::<f64>::Ln.tag(), "log");
        assert_eq!(Op::<f64>::Identity.tag(), "linear");
    }

    #[test]
    fn test_propagate_is_additive() {
        let x = Value::new(3.0_f64);
        x.set_grad(5.0);
        Op::Add.propagate(&[x.clone()], 3.0, 2.0);
        assert_eq!(x.grad(), 7.0, "propagate must increment, not overwrite");
    }

    #[test]
    fn test_mul_rule_uses_opposite_operand() {
        let a = Value::new(2.0_f64);
        let b = Value::new(5.0_f64);
        Op::Mul.propagate(&[a.clone(), b.clone()], 10.0, 1.0);
        assert_eq!(a.grad(), 5.0);
        assert_eq!(b.grad(), 2.0);
    }

    #[test]
    fn test_mul_rule_with_shared_operand() {
        let x = Value::new(3.0_f64);
        // x * x: both slots hold the same node, contributions sum to 2x
        Op::Mul.propagate(&[x.clone(), x.clone()], 9.0, 1.0);
        assert_eq!(x.grad(), 6.0);
    }

    #[test]
    fn test_relu_rule_at_boundary() {
        let x = Value::new(0.0_f64);
        Op::Relu.propagate(&[x.clone()], 0.0, 1.0);
        assert_eq!(x.grad(), 1.0);

        let y = Value::new(-1.0_f64);
        Op::Relu.propagate(&[y.clone()], 0.0, 1.0);
        assert_eq!(y.grad(), 0.0);
    }
}

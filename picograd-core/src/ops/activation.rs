// picograd-core/src/ops/activation.rs

use num_traits::Float;

use crate::autograd::Op;
use crate::error::PicoGradError;
use crate::value::Value;

/// Hyperbolic tangent: d/dx = 1 - tanh(x)^2.
pub fn tanh_op<T: Float>(a: &Value<T>) -> Value<T> {
    Value::from_op(a.data().tanh(), vec![a.clone()], Op::Tanh)
}

/// Rectified linear unit: max(x, 0), gradient 1 on [0, inf) and 0 below.
pub fn relu_op<T: Float>(a: &Value<T>) -> Value<T> {
    let x = a.data();
    let rectified = if x < T::zero() { T::zero() } else { x };
    Value::from_op(rectified, vec![a.clone()], Op::Relu)
}

/// Logistic sigmoid: s = 1/(1 + e^-x), d/dx = s * (1 - s).
pub fn sigmoid_op<T: Float>(a: &Value<T>) -> Value<T> {
    let x = a.data();
    let s = T::one() / (T::one() + (-x).exp());
    Value::from_op(s, vec![a.clone()], Op::Sigmoid)
}

/// Identity activation. Forward is a pass-through, but the result is a new
/// graph node tagged "linear" with gradient 1 toward its input.
pub fn identity_op<T: Float>(a: &Value<T>) -> Value<T> {
    Value::from_op(a.data(), vec![a.clone()], Op::Identity)
}

/// Activation functions selectable by name when describing a network
/// architecture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
    Tanh,
    Relu,
    Sigmoid,
    Linear,
}

impl Activation {
    pub fn from_str(s: &str) -> Result<Self, PicoGradError> {
        match s.to_lowercase().as_str() {
            "tanh" => Ok(Activation::Tanh),
            "relu" => Ok(Activation::Relu),
            "sigmoid" => Ok(Activation::Sigmoid),
            "linear" => Ok(Activation::Linear),
            _ => Err(PicoGradError::UnknownActivation(s.to_string())),
        }
    }

    /// Applies the selected activation, producing a new node.
    pub fn apply<T: Float>(&self, input: &Value<T>) -> Value<T> {
        match self {
            Activation::Tanh => tanh_op(input),
            Activation::Relu => relu_op(input),
            Activation::Sigmoid => sigmoid_op(input),
            Activation::Linear => identity_op(input),
        }
    }
}

// --- Tests ---

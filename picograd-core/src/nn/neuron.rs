// picograd-core/src/nn/neuron.rs

use std::fmt::Debug;

use num_traits::Float;
use rand::Rng;

use crate::error::PicoGradError;
use crate::nn::init;
use crate::ops::activation::Activation;
use crate::ops::arithmetic::{add_op, mul_op};
use crate::value::Value;

/// A single neuron: activation(w . x + b).
///
/// Weights and bias are leaf nodes initialized uniformly in [-1, 1].
#[derive(Debug)]
pub struct Neuron<T> {
    weights: Vec<Value<T>>,
    bias: Value<T>,
    activation: Activation,
}

impl<T: Float + Debug> Neuron<T> {
    pub fn new<R: Rng + ?Sized>(in_features: usize, activation: Activation, rng: &mut R) -> Self {
        Neuron {
            weights: init::uniform_leaves(rng, in_features),
            bias: init::uniform_leaf(rng),
            activation,
        }
    }

    /// Number of inputs this neuron expects.
    pub fn in_features(&self) -> usize {
        self.weights.len()
    }

    /// Weighted sum plus bias, passed through the activation.
    pub fn forward(&self, inputs: &[Value<T>]) -> Result<Value<T>, PicoGradError> {
        if inputs.len() != self.weights.len() {
            return Err(PicoGradError::LengthMismatch {
                expected: self.weights.len(),
                actual: inputs.len(),
                operation: "Neuron forward".to_string(),
            });
        }

        let mut pre_activation = self.bias.clone();
        for (weight, input) in self.weights.iter().zip(inputs) {
            pre_activation = add_op(&pre_activation, &mul_op(weight, input));
        }
        Ok(self.activation.apply(&pre_activation))
    }

    /// Weights followed by the bias.
    pub fn parameters(&self) -> Vec<Value<T>> {
        let mut params = self.weights.clone();
        params.push(self.bias.clone());
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_parameter_count() {
        let mut rng = StdRng::seed_from_u64(1);
        let neuron: Neuron<f64> = Neuron::new(4, Activation::Tanh, &mut rng);
        assert_eq!(neuron.in_features(), 4);
        assert_eq!(neuron.parameters().len(), 5);
    }

    #[test]
    fn test_forward_matches_manual_dot_product() {
        let mut rng = StdRng::seed_from_u64(2);
        let neuron: Neuron<f64> = Neuron::new(3, Activation::Linear, &mut rng);
        let inputs: Vec<Value<f64>> = [0.5, -1.0, 2.0].iter().map(|&x| Value::new(x)).collect();

        let output = neuron.forward(&inputs).unwrap();

        let params = neuron.parameters();
        let expected: f64 = params[..3]
            .iter()
            .zip(&inputs)
            .map(|(w, x)| w.data() * x.data())
            .sum::<f64>()
            + params[3].data();
        assert_relative_eq!(output.data(), expected);
    }

    #[test]
    fn test_forward_arity_mismatch() {
        let mut rng = StdRng::seed_from_u64(3);
        let neuron: Neuron<f64> = Neuron::new(3, Activation::Relu, &mut rng);
        let inputs = vec![Value::new(1.0_f64)];
        let result = neuron.forward(&inputs);
        assert_eq!(
            result.err(),
            Some(PicoGradError::LengthMismatch {
                expected: 3,
                actual: 1,
                operation: "Neuron forward".to_string(),
            })
        );
    }

    #[test]
    fn test_gradients_flow_to_all_parameters() {
        let mut rng = StdRng::seed_from_u64(4);
        let neuron: Neuron<f64> = Neuron::new(2, Activation::Linear, &mut rng);
        let inputs = vec![Value::new(1.0_f64), Value::new(2.0_f64)];

        let output = neuron.forward(&inputs).unwrap();
        output.backward();

        let params = neuron.parameters();
        // Linear activation: dw_i = x_i, db = 1
        assert_relative_eq!(params[0].grad(), 1.0);
        assert_relative_eq!(params[1].grad(), 2.0);
        assert_relative_eq!(params[2].grad(), 1.0);
    }
}

// picograd-core/src/nn/layers/dense.rs

use std::fmt::Debug;

use num_traits::Float;
use rand::Rng;

use crate::error::PicoGradError;
use crate::nn::module::Module;
use crate::nn::neuron::Neuron;
use crate::ops::activation::Activation;
use crate::value::Value;

/// A fully-connected layer: `out_features` neurons sharing one activation,
/// each reading the full input slice.
#[derive(Debug)]
pub struct Dense<T> {
    neurons: Vec<Neuron<T>>,
    in_features: usize,
    out_features: usize,
}

impl<T: Float + Debug> Dense<T> {
    pub fn new<R: Rng + ?Sized>(
        in_features: usize,
        out_features: usize,
        activation: Activation,
        rng: &mut R,
    ) -> Self {
        let neurons = (0..out_features)
            .map(|_| Neuron::new(in_features, activation, rng))
            .collect();
        Dense {
            neurons,
            in_features,
            out_features,
        }
    }

    pub fn in_features(&self) -> usize {
        self.in_features
    }

    pub fn out_features(&self) -> usize {
        self.out_features
    }
}

impl<T: Float + Debug> Module<T> for Dense<T> {
    fn forward(&self, inputs: &[Value<T>]) -> Result<Vec<Value<T>>, PicoGradError> {
        self.neurons
            .iter()
            .map(|neuron| neuron.forward(inputs))
            .collect()
    }

    fn parameters(&self) -> Vec<Value<T>> {
        self.neurons
            .iter()
            .flat_map(|neuron| neuron.parameters())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_output_width_and_parameter_count() {
        let mut rng = StdRng::seed_from_u64(11);
        let layer: Dense<f64> = Dense::new(3, 5, Activation::Tanh, &mut rng);
        assert_eq!(layer.in_features(), 3);
        assert_eq!(layer.out_features(), 5);
        // 5 neurons x (3 weights + 1 bias)
        assert_eq!(layer.parameters().len(), 20);

        let inputs: Vec<Value<f64>> = (0..3).map(|i| Value::new(i as f64)).collect();
        let outputs = layer.forward(&inputs).unwrap();
        assert_eq!(outputs.len(), 5);
    }

    #[test]
    fn test_zero_grad_resets_all_parameters() {
        let mut rng = StdRng::seed_from_u64(12);
        let layer: Dense<f64> = Dense::new(2, 2, Activation::Linear, &mut rng);
        let inputs = vec![Value::new(1.0_f64), Value::new(-1.0_f64)];

        let outputs = layer.forward(&inputs).unwrap();
        for output in &outputs {
            output.backward();
        }
        assert!(layer.parameters().iter().any(|p| p.grad() != 0.0));

        layer.zero_grad();
        assert!(layer.parameters().iter().all(|p| p.grad() == 0.0));
    }

    #[test]
    fn test_arity_error_propagates() {
        let mut rng = StdRng::seed_from_u64(13);
        let layer: Dense<f64> = Dense::new(4, 2, Activation::Relu, &mut rng);
        let inputs = vec![Value::new(1.0_f64)];
        assert!(layer.forward(&inputs).is_err());
    }
}

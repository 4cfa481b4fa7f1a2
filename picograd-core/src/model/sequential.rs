// picograd-core/src/model/sequential.rs

use std::fmt::Debug;

use log::debug;
use num_traits::Float;
use rand::Rng;

use crate::error::PicoGradError;
use crate::nn::layers::Dense;
use crate::nn::module::Module;
use crate::ops::activation::Activation;
use crate::value::Value;

/// A feed-forward stack of [`Dense`] layers, applied in order.
///
/// `layer_sizes[i]` is the width of layer `i`; each layer reads the previous
/// layer's full output (the first reads `input_features` values).
#[derive(Debug)]
pub struct Sequential<T> {
    layers: Vec<Dense<T>>,
}

impl<T: Float + Debug> Sequential<T> {
    /// Builds the network with one activation per layer. Returns
    /// [`PicoGradError::ArchitectureMismatch`] when the two lists disagree.
    pub fn new<R: Rng + ?Sized>(
        input_features: usize,
        layer_sizes: &[usize],
        activations: &[Activation],
        rng: &mut R,
    ) -> Result<Self, PicoGradError> {
        if layer_sizes.len() != activations.len() {
            return Err(PicoGradError::ArchitectureMismatch {
                layers: layer_sizes.len(),
                activations: activations.len(),
            });
        }

        let mut layers = Vec::with_capacity(layer_sizes.len());
        let mut in_features = input_features;
        for (&width, &activation) in layer_sizes.iter().zip(activations) {
            layers.push(Dense::new(in_features, width, activation, rng));
            in_features = width;
        }

        let model = Sequential { layers };
        debug!(
            "Built sequential model: {} layers, {} parameters",
            model.layers.len(),
            model.parameters().len()
        );
        Ok(model)
    }

    /// Same as [`Sequential::new`] but resolving activations by name
    /// ("tanh", "relu", "sigmoid", "linear").
    pub fn from_names<R: Rng + ?Sized>(
        input_features: usize,
        layer_sizes: &[usize],
        activation_names: &[&str],
        rng: &mut R,
    ) -> Result<Self, PicoGradError> {
        let activations = activation_names
            .iter()
            .map(|name| Activation::from_str(name))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(input_features, layer_sizes, &activations, rng)
    }

    pub fn layers(&self) -> &[Dense<T>] {
        &self.layers
    }

    /// Runs the forward pass for a whole batch and strips the graph away,
    /// returning plain output data per sample.
    pub fn predict(&self, batch: &[Vec<T>]) -> Result<Vec<Vec<T>>, PicoGradError> {
        batch
            .iter()
            .map(|sample| {
                let inputs: Vec<Value<T>> = sample.iter().map(|&x| Value::new(x)).collect();
                let outputs = self.forward(&inputs)?;
                Ok(outputs.iter().map(|out| out.data()).collect())
            })
            .collect()
    }
}

impl<T: Float + Debug> Module<T> for Sequential<T> {
    fn forward(&self, inputs: &[Value<T>]) -> Result<Vec<Value<T>>, PicoGradError> {
        let mut activations = inputs.to_vec();
        for layer in &self.layers {
            activations = layer.forward(&activations)?;
        }
        Ok(activations)
    }

    fn parameters(&self) -> Vec<Value<T>> {
        self.layers
            .iter()
            .flat_map(|layer| layer.parameters())
            .collect()
    }
}

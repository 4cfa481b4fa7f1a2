// picograd-core/src/nn/module.rs

use std::fmt::Debug;

use num_traits::Float;

use crate::error::PicoGradError;
use crate::value::Value;

/// The base trait for all network components (layers, containers).
///
/// A module maps a slice of scalar input nodes to output nodes and exposes
/// its trainable leaf parameters for an external optimizer.
pub trait Module<T: Float>: Debug {
    /// Performs a forward pass, building new graph nodes.
    ///
    /// # Errors
    /// Returns `PicoGradError::LengthMismatch` if the input arity does not
    /// match what the module was constructed for.
    fn forward(&self, inputs: &[Value<T>]) -> Result<Vec<Value<T>>, PicoGradError>;

    /// All trainable leaf parameters, in a stable order (weights before
    /// bias, layer by layer).
    fn parameters(&self) -> Vec<Value<T>>;

    /// Resets the gradient accumulator of every parameter.
    ///
    /// Must run before each backward pass: the engine never resets
    /// gradients implicitly, so skipping this compounds contributions
    /// across passes.
    fn zero_grad(&self) {
        for parameter in self.parameters() {
            parameter.zero_grad();
        }
    }
}

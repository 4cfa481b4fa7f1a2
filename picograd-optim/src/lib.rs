use num_traits::Float;
use picograd_core::Value;

// Define modules for optimizers
pub mod sgd;

pub use sgd::Sgd;

/// Trait for optimization algorithms.
/// Optimizers update the parameters of a model based on their gradients.
pub trait Optimizer<T: Float> {
    /// Performs a single optimization step (parameter update).
    ///
    /// # Arguments
    /// * `params` - The model parameters to update in place.
    fn step(&mut self, params: &[Value<T>]);

    /// Clears the gradients of all given parameters.
    /// Should be called before the backward pass to avoid accumulating
    /// gradients from multiple iterations.
    fn zero_grad(&self, params: &[Value<T>]) {
        for param in params {
            param.zero_grad();
        }
    }
}

// picograd-core/src/nn/losses/mse.rs

use num_traits::Float;

use crate::error::PicoGradError;
use crate::ops::arithmetic::{add_op, pow_op, sub_op};
use crate::value::Value;

/// Squared-error loss over a batch of scalar predictions:
/// sum_i (y_i - yhat_i)^2.
///
/// Note this is a sum, not a mean: the cost scales with the batch size.
pub fn mse_loss<T: Float>(
    targets: &[T],
    predictions: &[Value<T>],
) -> Result<Value<T>, PicoGradError> {
    if targets.len() != predictions.len() {
        return Err(PicoGradError::LengthMismatch {
            expected: targets.len(),
            actual: predictions.len(),
            operation: "mse_loss".to_string(),
        });
    }
    if predictions.is_empty() {
        return Err(PicoGradError::EmptyBatch);
    }

    let two = T::one() + T::one();
    let mut cost = Value::new(T::zero());
    for (target, prediction) in targets.iter().zip(predictions) {
        let residual = sub_op(&Value::new(*target), prediction);
        cost = add_op(&cost, &pow_op(&residual, two));
    }
    Ok(cost)
}

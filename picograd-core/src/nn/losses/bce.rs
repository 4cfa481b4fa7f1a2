// picograd-core/src/nn/losses/bce.rs

use num_traits::Float;

use crate::error::PicoGradError;
use crate::ops::arithmetic::{add_op, div_op, mul_op, neg_op, sub_op};
use crate::ops::math_elem::{ln_epsilon, ln_op};
use crate::value::Value;

/// Mean binary cross-entropy over a batch of probabilities:
/// -(1/n) * sum_i [ y_i * ln(p_i + eps) + (1 - y_i) * ln(1 - p_i) ].
///
/// Targets are expected in {0, 1}; predictions in (0, 1). The epsilon
/// shift on the positive term keeps ln finite for p = 0.
pub fn binary_cross_entropy<T: Float>(
    targets: &[T],
    predictions: &[Value<T>],
) -> Result<Value<T>, PicoGradError> {
    if targets.len() != predictions.len() {
        return Err(PicoGradError::LengthMismatch {
            expected: targets.len(),
            actual: predictions.len(),
            operation: "binary_cross_entropy".to_string(),
        });
    }
    if predictions.is_empty() {
        return Err(PicoGradError::EmptyBatch);
    }

    let one = T::one();
    let mut total = Value::new(T::zero());
    for (target, prediction) in targets.iter().zip(predictions) {
        let shifted = add_op(prediction, &Value::new(ln_epsilon::<T>()));
        let positive_term = mul_op(&Value::new(*target), &ln_op(&shifted));
        let negative_term = mul_op(
            &Value::new(one - *target),
            &ln_op(&sub_op(&Value::new(one), prediction)),
        );
        let sample_loss = neg_op(&add_op(&positive_term, &negative_term));
        total = add_op(&total, &sample_loss);
    }

    let batch_size = T::from(targets.len()).expect("batch size must be representable in T");
    Ok(div_op(&total, &Value::new(batch_size)))
}

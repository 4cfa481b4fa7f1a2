// picograd-core/src/autograd/grad_check.rs

use log::debug;
use num_traits::Float;
use thiserror::Error;

use crate::value::Value;

/// Error type specifically for gradient checking failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradCheckError {
    #[error("Gradient check failed for input {input_index}: analytical grad {analytical} != numerical grad {numerical}. Difference: {difference}")]
    GradientMismatch {
        input_index: usize,
        analytical: f64,
        numerical: f64,
        difference: f64,
    },

    #[error("Numerical gradient is NaN or infinite for input {input_index}. Loss+: {loss_plus}, Loss-: {loss_minus}")]
    NumericalGradNotFinite {
        input_index: usize,
        loss_plus: f64,
        loss_minus: f64,
    },

    #[error("Analytical gradient is NaN or infinite for input {input_index}. Value: {value}")]
    AnalyticalGradNotFinite { input_index: usize, value: f64 },
}

/// Checks analytical gradients against numerical gradients using central
/// finite differences.
///
/// `func` must rebuild the expression from the given leaves on every call
/// (forward evaluation is eager, so perturbing a leaf only matters for
/// graphs constructed after the perturbation). The inputs' data is
/// restored before returning.
pub fn check_grad<T, F>(
    func: F,
    inputs: &[Value<T>],
    epsilon: T,
    tolerance: T,
) -> Result<(), GradCheckError>
where
    T: Float,
    F: Fn(&[Value<T>]) -> Value<T>,
{
    // --- Analytical gradients from one backward pass ---
    for input in inputs {
        input.zero_grad();
    }
    let output = func(inputs);
    output.backward();
    let analytical_grads: Vec<T> = inputs.iter().map(|input| input.grad()).collect();

    // --- Central difference per input ---
    for (i, input) in inputs.iter().enumerate() {
        let original = input.data();

        input.set_data(original + epsilon);
        let loss_plus = func(inputs).data();

        input.set_data(original - epsilon);
        let loss_minus = func(inputs).data();

        input.set_data(original);

        let numerical = (loss_plus - loss_minus) / (epsilon + epsilon);
        let numerical_f64 = to_f64(numerical);
        let analytical_f64 = to_f64(analytical_grads[i]);

        if !numerical_f64.is_finite() {
            return Err(GradCheckError::NumericalGradNotFinite {
                input_index: i,
                loss_plus: to_f64(loss_plus),
                loss_minus: to_f64(loss_minus),
            });
        }
        if !analytical_f64.is_finite() {
            return Err(GradCheckError::AnalyticalGradNotFinite {
                input_index: i,
                value: analytical_f64,
            });
        }

        let difference = (analytical_f64 - numerical_f64).abs();
        let tolerance_f64 = to_f64(tolerance);
        // Absolute check first, relative check for large-magnitude gradients
        if difference > tolerance_f64
            && (difference / (analytical_f64.abs() + to_f64(epsilon))) > tolerance_f64
        {
            return Err(GradCheckError::GradientMismatch {
                input_index: i,
                analytical: analytical_f64,
                numerical: numerical_f64,
                difference,
            });
        }
        debug!(
            "check_grad: input {} ok (analytical {}, numerical {})",
            i, analytical_f64, numerical_f64
        );
    }

    Ok(())
}

fn to_f64<T: Float>(x: T) -> f64 {
    x.to_f64().unwrap_or(f64::NAN)
}

// picograd-optim/src/sgd.rs

use log::debug;
use num_traits::Float;
use picograd_core::Value;

use crate::Optimizer;

/// Implements plain stochastic gradient descent.
///
/// Updates parameters `p` according to the rule:
/// `p = p - lr * grad(p)`
#[derive(Debug)]
pub struct Sgd<T> {
    lr: T, // Learning rate
}

impl<T: Float> Sgd<T> {
    /// Creates a new SGD optimizer instance.
    ///
    /// # Arguments
    ///
    /// * `lr` - The learning rate.
    pub fn new(lr: f64) -> Self {
        let lr_t = T::from(lr).expect("Could not convert learning rate (lr) to type T.");
        Sgd { lr: lr_t }
    }

    pub fn learning_rate(&self) -> T {
        self.lr
    }
}

impl<T: Float> Optimizer<T> for Sgd<T> {
    /// Performs a single optimization step (parameter update).
    fn step(&mut self, params: &[Value<T>]) {
        debug!("SGD step over {} parameters", params.len());
        for param in params {
            let updated = param.data() - self.lr * param.grad();
            param.set_data(updated);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_sgd_step() {
        let p1 = Value::new(1.0_f64);
        let p2 = Value::new(3.0_f64);
        p1.set_grad(10.0);
        p2.set_grad(-20.0);

        let mut optim: Sgd<f64> = Sgd::new(0.1);
        optim.step(&[p1.clone(), p2.clone()]);

        assert_relative_eq!(p1.data(), 0.0);
        assert_relative_eq!(p2.data(), 5.0);
    }

    #[test]
    fn test_sgd_step_leaves_zero_grad_params_untouched() {
        let p = Value::new(4.0_f64);
        let mut optim: Sgd<f64> = Sgd::new(0.5);
        optim.step(&[p.clone()]);
        assert_relative_eq!(p.data(), 4.0);
    }

    #[test]
    fn test_sgd_zero_grad() {
        let p1 = Value::new(1.0_f64);
        let p2 = Value::new(2.0_f64);
        p1.set_grad(0.1);
        p2.set_grad(0.2);

        let optim: Sgd<f64> = Sgd::new(0.1);
        optim.zero_grad(&[p1.clone(), p2.clone()]);

        assert_relative_eq!(p1.grad(), 0.0);
        assert_relative_eq!(p2.grad(), 0.0);
    }

    #[test]
    fn test_step_descends_a_simple_objective() {
        // Minimize f(x) = (x - 3)^2 from x = 0
        let x = Value::new(0.0_f64);
        let mut optim: Sgd<f64> = Sgd::new(0.1);

        for _ in 0..50 {
            optim.zero_grad(&[x.clone()]);
            let diff = &x - 3.0;
            let loss = &diff * &diff;
            loss.backward();
            optim.step(&[x.clone()]);
        }

        assert_relative_eq!(x.data(), 3.0, epsilon = 1e-3);
    }
}

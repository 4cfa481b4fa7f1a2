//! # Training a Small MLP with SGD
//!
//! Fits a 3-input, two-hidden-layer tanh network to four samples with
//! targets in {-1, 1}, printing the loss curve and final predictions.
//!
//! Run with:
//! `cargo run --example train_mlp`

use picograd_core::model::Sequential;
use picograd_core::nn::losses::mse_loss;
use picograd_core::nn::Module;
use picograd_core::Value;
use picograd_optim::{Optimizer, Sgd};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn main() {
    let mut rng = StdRng::seed_from_u64(42);
    let model: Sequential<f64> =
        Sequential::from_names(3, &[4, 4, 1], &["tanh", "tanh", "tanh"], &mut rng)
            .expect("architecture and activation lists have matching lengths");

    let xs = vec![
        vec![2.0, 3.0, -1.0],
        vec![3.0, -1.0, 0.5],
        vec![0.5, 1.0, 1.0],
        vec![1.0, 1.0, -1.0],
    ];
    let ys = [1.0, -1.0, -1.0, 1.0];

    let params = model.parameters();
    println!("model: 3 -> 4 -> 4 -> 1, {} parameters", params.len());

    let mut optim: Sgd<f64> = Sgd::new(0.05);
    let epochs = 100;
    let mut history: Vec<(usize, f64)> = Vec::with_capacity(epochs);

    for epoch in 0..epochs {
        optim.zero_grad(&params);

        let predictions: Vec<Value<f64>> = xs
            .iter()
            .map(|sample| {
                let inputs: Vec<Value<f64>> = sample.iter().map(|&x| Value::new(x)).collect();
                model
                    .forward(&inputs)
                    .expect("input width matches the first layer")
                    .remove(0)
            })
            .collect();

        let loss = mse_loss(&ys, &predictions).expect("batch is non-empty and lengths match");
        loss.backward();
        optim.step(&params);

        history.push((epoch, loss.data()));
    }

    println!("loss history:");
    for (epoch, loss) in &history {
        println!("  epoch {:>3}  loss {:.6}", epoch, loss);
    }

    println!("\npredictions after training:");
    let predictions = model.predict(&xs).expect("input width matches the first layer");
    for (sample, (prediction, target)) in xs.iter().zip(predictions.iter().zip(ys.iter())) {
        println!(
            "  {:?} -> {:>8.4}  (target {:>4.1})",
            sample, prediction[0], target
        );
    }
}

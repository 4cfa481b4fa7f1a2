// picograd-optim/tests/train_mlp.rs
//
// Trains a small MLP on the classic four-sample toy dataset and checks
// that SGD actually drives the loss down.

use picograd_core::model::Sequential;
use picograd_core::nn::losses::mse_loss;
use picograd_core::nn::Module;
use picograd_core::Value;
use picograd_optim::{Optimizer, Sgd};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn batch_loss(model: &Sequential<f64>, xs: &[Vec<f64>], ys: &[f64]) -> Value<f64> {
    let predictions: Vec<Value<f64>> = xs
        .iter()
        .map(|sample| {
            let inputs: Vec<Value<f64>> = sample.iter().map(|&x| Value::new(x)).collect();
            model.forward(&inputs).unwrap().remove(0)
        })
        .collect();
    mse_loss(ys, &predictions).unwrap()
}

#[test]
fn test_sgd_reduces_mlp_loss() {
    let mut rng = StdRng::seed_from_u64(42);
    let model: Sequential<f64> =
        Sequential::from_names(3, &[4, 4, 1], &["tanh", "tanh", "tanh"], &mut rng).unwrap();

    let xs = vec![
        vec![2.0, 3.0, -1.0],
        vec![3.0, -1.0, 0.5],
        vec![0.5, 1.0, 1.0],
        vec![1.0, 1.0, -1.0],
    ];
    let ys = [1.0, -1.0, -1.0, 1.0];

    let params = model.parameters();
    let mut optim: Sgd<f64> = Sgd::new(0.05);

    let initial_loss = batch_loss(&model, &xs, &ys).data();

    for _ in 0..60 {
        optim.zero_grad(&params);
        let loss = batch_loss(&model, &xs, &ys);
        loss.backward();
        optim.step(&params);
    }

    let final_loss = batch_loss(&model, &xs, &ys).data();
    assert!(
        final_loss < initial_loss,
        "Training did not reduce the loss: {} -> {}",
        initial_loss,
        final_loss
    );
    assert!(final_loss < 1.0);
}

#[test]
fn test_trained_predictions_track_target_signs() {
    let mut rng = StdRng::seed_from_u64(7);
    let model: Sequential<f64> =
        Sequential::from_names(3, &[4, 4, 1], &["tanh", "tanh", "tanh"], &mut rng).unwrap();

    let xs = vec![
        vec![2.0, 3.0, -1.0],
        vec![3.0, -1.0, 0.5],
        vec![0.5, 1.0, 1.0],
        vec![1.0, 1.0, -1.0],
    ];
    let ys = [1.0, -1.0, -1.0, 1.0];

    let params = model.parameters();
    let mut optim: Sgd<f64> = Sgd::new(0.05);

    for _ in 0..200 {
        optim.zero_grad(&params);
        let loss = batch_loss(&model, &xs, &ys);
        loss.backward();
        optim.step(&params);
    }

    let predictions = model.predict(&xs).unwrap();
    for (prediction, target) in predictions.iter().zip(ys.iter()) {
        assert_eq!(prediction[0].signum(), target.signum());
    }
}

//! # Training a small MLP on XOR
//!
//! Builds a 2-[4, 1] network (relu hidden layer, linear output), trains it with
//! plain stochastic gradient descent and prints the loss curve and predictions.
//!
//! Run with:
//! `cargo run --example xor_mlp`

use semigrad_core::{Mlp, Module, SemigradError, TrainConfig, Value};

fn main() -> Result<(), SemigradError> {
    let inputs: Vec<Vec<Value>> = [[0.0, 0.0], [0.0, 1.0], [1.0, 0.0], [1.0, 1.0]]
        .iter()
        .map(|x| Value::from_slice(x))
        .collect();
    let targets: Vec<Vec<Value>> = [-1.0, 1.0, 1.0, -1.0]
        .iter()
        .map(|&y| vec![Value::new(y)])
        .collect();

    let mut model = Mlp::with_seed(2, &[4, 1], 42)?;
    println!("Model has {} parameters", model.num_parameters());

    let config = TrainConfig {
        epochs: 300,
        learning_rate: 0.05,
        log_every: 50,
    };
    let reports = model.fit(&inputs, &targets, &config)?;
    for report in reports.iter().filter(|r| (r.epoch + 1) % config.log_every == 0) {
        println!("Epoch {:>4}: mean loss = {:.6}", report.epoch + 1, report.mean_loss);
    }

    println!("\nPredictions:");
    for (x, t) in inputs.iter().zip(&targets) {
        let raw: Vec<f64> = x.iter().map(Value::data).collect();
        let out = model.predict(&raw)?;
        println!("  {:?} -> {:+.4} (target {:+})", raw, out[0], t[0].data());
    }

    Ok(())
}

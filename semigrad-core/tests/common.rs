use semigrad_core::{Mlp, Module, Value};

/// XOR with -1/1 targets, one `Vec<Value>` per example.
#[allow(dead_code)]
pub fn xor_dataset() -> (Vec<Vec<Value>>, Vec<Vec<Value>>) {
    let inputs = [[0.0, 0.0], [0.0, 1.0], [1.0, 0.0], [1.0, 1.0]]
        .iter()
        .map(|x| Value::from_slice(x))
        .collect();
    let targets = [-1.0, 1.0, 1.0, -1.0]
        .iter()
        .map(|&y| vec![Value::new(y)])
        .collect();
    (inputs, targets)
}

/// Overwrites every parameter of `mlp`, in `parameters()` order.
#[allow(dead_code)]
pub fn load_parameters(mlp: &Mlp, values: &[f64]) {
    let params = mlp.parameters();
    assert_eq!(params.len(), values.len(), "parameter count mismatch");
    for (param, &v) in params.iter().zip(values) {
        param.set_data(v);
    }
}

/// A 2-[4,1] network with fixed, reproducible starting weights.
#[allow(dead_code)]
pub fn xor_network() -> Mlp {
    let mlp = Mlp::new(2, &[4, 1]).expect("XOR network construction failed");
    let init = [
        0.5, 0.5, 0.1,
        0.6, 0.6, -0.5,
        0.3, -0.4, 0.2,
        -0.2, 0.5, 0.1,
        0.7, -0.8, 0.3, 0.4, -0.2,
    ];
    load_parameters(&mlp, &init);
    mlp
}

use crate::autograd::Op;
use crate::scalar::Value;

/// Logistic sigmoid `1 / (1 + e^-a)`; derivative `s * (1 - s)` from the captured output.
pub fn sigmoid_op(a: &Value) -> Value {
    let output = 1.0 / (1.0 + (-a.data()).exp());
    Value::from_op(output, vec![a.clone()], Op::Sigmoid { output })
}

#[cfg(test)]
#[path = "sigmoid_test.rs"]
mod tests;

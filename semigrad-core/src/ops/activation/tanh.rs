use crate::autograd::Op;
use crate::scalar::Value;

/// Hyperbolic tangent. d/dx tanh(x) = 1 - tanh²(x), computed from the captured output.
pub fn tanh_op(a: &Value) -> Value {
    let output = a.data().tanh();
    Value::from_op(output, vec![a.clone()], Op::Tanh { output })
}

#[cfg(test)]
#[path = "tanh_test.rs"]
mod tests;

use crate::autograd::Op;
use crate::scalar::Value;

/// `e ^ a`. The output is captured and reused as the local derivative.
pub fn exp_op(a: &Value) -> Value {
    let output = a.data().exp();
    Value::from_op(output, vec![a.clone()], Op::Exp { output })
}

#[cfg(test)]
#[path = "exp_test.rs"]
mod tests;

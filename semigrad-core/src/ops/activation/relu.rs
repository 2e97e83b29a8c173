use crate::autograd::Op;
use crate::scalar::Value;

/// Rectified linear unit: `max(0, a)`.
///
/// The gradient passes through only when `a > 0`; at exactly 0 nothing flows back.
pub fn relu_op(a: &Value) -> Value {
    let x = a.data();
    Value::from_op(x.max(0.0), vec![a.clone()], Op::Relu { active: x > 0.0 })
}

#[cfg(test)]
#[path = "relu_test.rs"]
mod tests;

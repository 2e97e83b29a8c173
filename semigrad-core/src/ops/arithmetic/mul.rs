use crate::autograd::Op;
use crate::scalar::Value;

/// `a * b` (product rule on the way back).
pub fn mul_op(a: &Value, b: &Value) -> Value {
    let (lhs, rhs) = (a.data(), b.data());
    Value::from_op(lhs * rhs, vec![a.clone(), b.clone()], Op::Mul { lhs, rhs })
}

#[cfg(test)]
#[path = "mul_test.rs"]
mod tests;

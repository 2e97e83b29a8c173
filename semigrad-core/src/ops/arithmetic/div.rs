use crate::autograd::Op;
use crate::scalar::Value;

/// `a / b`.
///
/// A zero divisor is not trapped: the result (and later the gradients) follow
/// IEEE-754 and become `±inf` or `NaN`.
pub fn div_op(a: &Value, b: &Value) -> Value {
    let (lhs, rhs) = (a.data(), b.data());
    Value::from_op(lhs / rhs, vec![a.clone(), b.clone()], Op::Div { lhs, rhs })
}

#[cfg(test)]
#[path = "div_test.rs"]
mod tests;

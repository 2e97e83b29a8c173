use crate::autograd::Op;
use crate::scalar::Value;

/// `a - b`. Recorded as its own node rather than `a + (-b)`.
pub fn sub_op(a: &Value, b: &Value) -> Value {
    Value::from_op(a.data() - b.data(), vec![a.clone(), b.clone()], Op::Sub)
}

#[cfg(test)]
#[path = "sub_test.rs"]
mod tests;

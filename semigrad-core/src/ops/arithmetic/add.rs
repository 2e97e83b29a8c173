use crate::autograd::Op;
use crate::scalar::Value;

/// `a + b`. Both operands receive the output gradient unchanged.
pub fn add_op(a: &Value, b: &Value) -> Value {
    Value::from_op(a.data() + b.data(), vec![a.clone(), b.clone()], Op::Add)
}

#[cfg(test)]
#[path = "add_test.rs"]
mod tests;

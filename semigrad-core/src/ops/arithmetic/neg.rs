use crate::autograd::Op;
use crate::scalar::Value;

pub fn neg_op(a: &Value) -> Value {
    Value::from_op(-a.data(), vec![a.clone()], Op::Neg)
}

#[cfg(test)]
#[path = "neg_test.rs"]
mod tests;

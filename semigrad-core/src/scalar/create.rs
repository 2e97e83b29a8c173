use crate::autograd::Op;
use crate::scalar::Value;
use crate::scalar_data::ScalarData;
use std::cell::RefCell;
use std::rc::Rc;

impl Value {
    /// Creates a leaf node (no operands, nothing to propagate).
    pub fn new(data: f64) -> Self {
        Self::from_op(data, Vec::new(), Op::Leaf)
    }

    /// Wraps each number as its own leaf.
    pub fn from_slice(data: &[f64]) -> Vec<Value> {
        data.iter().copied().map(Value::new).collect()
    }

    /// Creates the output node of an operation over `operands`.
    pub(crate) fn from_op(data: f64, operands: Vec<Value>, op: Op) -> Self {
        debug_assert_eq!(operands.len(), op.arity(), "operand count does not match {}", op);
        Value {
            data: Rc::new(RefCell::new(ScalarData::new(data, operands, op))),
        }
    }
}

/// Right-hand side of a binary operation: either an existing node or a raw constant.
///
/// Constants are resolved once, at call time, into fresh leaf nodes.
#[derive(Debug, Clone)]
pub enum Operand {
    Node(Value),
    Constant(f64),
}

impl Operand {
    pub fn into_value(self) -> Value {
        match self {
            Operand::Node(value) => value,
            Operand::Constant(c) => Value::new(c),
        }
    }
}

impl From<Value> for Operand {
    fn from(value: Value) -> Self {
        Operand::Node(value)
    }
}

impl From<&Value> for Operand {
    fn from(value: &Value) -> Self {
        Operand::Node(value.clone())
    }
}

macro_rules! impl_constant_operand {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Operand {
                fn from(c: $t) -> Self {
                    Operand::Constant(c as f64)
                }
            }
        )*
    };
}

impl_constant_operand!(f64, f32, i32, i64, u32, usize);

impl From<f64> for Value {
    fn from(data: f64) -> Self {
        Value::new(data)
    }
}

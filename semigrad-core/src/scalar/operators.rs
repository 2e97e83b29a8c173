//! `std::ops` overloads so expressions read like arithmetic:
//! `&a * &b + 1.0`, `2.0 * x`, `-y`.

use crate::ops::{add_op, div_op, mul_op, neg_op, sub_op};
use crate::scalar::{Operand, Value};
use std::ops::{Add, Div, Mul, Neg, Sub};

macro_rules! impl_binary_op {
    ($trait:ident, $method:ident, $op_fn:ident) => {
        impl<R: Into<Operand>> $trait<R> for &Value {
            type Output = Value;

            fn $method(self, rhs: R) -> Value {
                $op_fn(self, &rhs.into().into_value())
            }
        }

        impl<R: Into<Operand>> $trait<R> for Value {
            type Output = Value;

            fn $method(self, rhs: R) -> Value {
                $op_fn(&self, &rhs.into().into_value())
            }
        }

        impl $trait<Value> for f64 {
            type Output = Value;

            fn $method(self, rhs: Value) -> Value {
                $op_fn(&Value::new(self), &rhs)
            }
        }

        impl $trait<&Value> for f64 {
            type Output = Value;

            fn $method(self, rhs: &Value) -> Value {
                $op_fn(&Value::new(self), rhs)
            }
        }
    };
}

impl_binary_op!(Add, add, add_op);
impl_binary_op!(Sub, sub, sub_op);
impl_binary_op!(Mul, mul, mul_op);
impl_binary_op!(Div, div, div_op);

impl Neg for &Value {
    type Output = Value;

    fn neg(self) -> Value {
        neg_op(self)
    }
}

impl Neg for Value {
    type Output = Value;

    fn neg(self) -> Value {
        neg_op(&self)
    }
}

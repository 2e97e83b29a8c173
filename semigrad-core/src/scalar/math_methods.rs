use crate::ops::{exp_op, pow_op, relu_op, sigmoid_op, tanh_op};
use crate::scalar::Value;

impl Value {
    /// Raises this node to a fixed power.
    pub fn pow(&self, exponent: f64) -> Value {
        pow_op(self, exponent)
    }

    pub fn exp(&self) -> Value {
        exp_op(self)
    }

    pub fn tanh(&self) -> Value {
        tanh_op(self)
    }

    pub fn relu(&self) -> Value {
        relu_op(self)
    }

    pub fn sigmoid(&self) -> Value {
        sigmoid_op(self)
    }
}

//! Forward operations on scalar nodes.
//!
//! Every `*_op` computes its result eagerly, records its operands and captures
//! what its derivative rule needs in the returned node's [`Op`](crate::autograd::Op).

pub mod activation;
pub mod arithmetic;
pub mod math_elem;

pub use activation::{relu_op, sigmoid_op, tanh_op};
pub use arithmetic::{add_op, div_op, mul_op, neg_op, pow_op, sub_op};
pub use math_elem::exp_op;

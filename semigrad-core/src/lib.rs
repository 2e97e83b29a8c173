//! # semigrad-core
//!
//! A scalar reverse-mode automatic differentiation engine and a small
//! multi-layer perceptron trained on top of it.
//!
//! Every arithmetic or activation call on a [`Value`] computes its result
//! immediately and records how to send a gradient back to its operands.
//! [`Value::backward`] then walks the recorded graph once, from the output back
//! to the leaves.
//!
//! ```
//! use semigrad_core::Value;
//!
//! let a = Value::new(2.0);
//! let b = Value::new(-3.0);
//! let c = Value::new(10.0);
//! let f = Value::new(-2.0);
//! let l = (&a * &b + &c) * &f;
//! l.backward();
//! assert_eq!(a.grad(), -2.0 * -3.0);
//! assert_eq!(f.grad(), 2.0 * -3.0 + 10.0);
//! ```

pub mod autograd;
pub mod error;
pub mod model;
pub mod nn;
pub mod ops;
pub mod optim;
pub mod scalar;
pub mod scalar_data;
pub mod utils;

pub use error::{Result, SemigradError};
pub use model::{EpochReport, Mlp, TrainConfig};
pub use nn::Module;
pub use scalar::{Operand, Value};

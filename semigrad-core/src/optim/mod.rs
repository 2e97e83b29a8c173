//! Optimizers for training neural networks.
//!
//! Only plain gradient descent is provided: `value -= lr * grad`, no momentum,
//! no weight decay.

pub mod optimizer_trait;
pub mod sgd;

pub use optimizer_trait::Optimizer;
pub use sgd::Sgd;

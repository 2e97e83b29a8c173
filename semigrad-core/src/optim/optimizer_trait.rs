use crate::error::Result;

/// Trait defining the common interface for optimizers.
///
/// Optimizers update the parameters they were given, using the gradients the
/// last reverse pass accumulated on them.
pub trait Optimizer {
    /// Performs a single optimization step.
    fn step(&mut self) -> Result<()>;

    /// Clears the gradients of all parameters managed by the optimizer.
    fn zero_grad(&mut self);
}

use crate::scalar::Value;
use std::fmt::Debug;

/// The base trait for everything that owns trainable parameters.
///
/// Parameters are returned as handles: updating a returned [`Value`] updates the
/// module itself.
pub trait Module: Debug {
    /// All trainable leaves, in a stable order (update and reset iterate in it).
    fn parameters(&self) -> Vec<Value>;

    /// Same parameters, same order, each paired with a hierarchical name such as
    /// `layers.0.neurons.1.weight.0`.
    fn named_parameters(&self) -> Vec<(String, Value)>;

    /// Sets every parameter's gradient to exactly 0.
    ///
    /// Needed before each reverse pass since gradients accumulate.
    fn zero_grad(&self) {
        for param in self.parameters() {
            param.zero_grad();
        }
    }

    fn num_parameters(&self) -> usize {
        self.parameters().len()
    }
}

/// Prefixes each name of a child's `named_parameters` with `prefix.`.
pub(crate) fn prefixed(prefix: &str, named: Vec<(String, Value)>) -> Vec<(String, Value)> {
    named
        .into_iter()
        .map(|(name, param)| (format!("{}.{}", prefix, name), param))
        .collect()
}

use crate::error::{Result, SemigradError};
use crate::nn::init::ParamSampler;
use crate::nn::module::Module;
use crate::scalar::Value;
use rand::Rng;

/// One weighted sum plus bias, optionally followed by a relu.
#[derive(Debug, Clone)]
pub struct Neuron {
    weights: Vec<Value>,
    bias: Value,
    nonlinear: bool,
}

impl Neuron {
    /// Creates a neuron with `num_inputs` weights, all parameters drawn from `sampler`.
    pub fn new<R: Rng + ?Sized>(
        num_inputs: usize,
        nonlinear: bool,
        sampler: &ParamSampler,
        rng: &mut R,
    ) -> Self {
        let weights = (0..num_inputs)
            .map(|_| Value::new(sampler.sample(rng)))
            .collect();
        Neuron {
            weights,
            bias: Value::new(sampler.sample(rng)),
            nonlinear,
        }
    }

    /// Creates a neuron with explicit parameter values.
    pub fn from_parameters(weights: &[f64], bias: f64, nonlinear: bool) -> Self {
        Neuron {
            weights: Value::from_slice(weights),
            bias: Value::new(bias),
            nonlinear,
        }
    }

    /// `bias + Σ w_i * x_i`, summed left to right, then relu if the neuron is nonlinear.
    pub fn forward(&self, inputs: &[Value]) -> Result<Value> {
        if inputs.len() != self.weights.len() {
            return Err(SemigradError::shape_mismatch(
                self.weights.len(),
                inputs.len(),
                "Neuron forward",
            ));
        }

        let activation = self
            .weights
            .iter()
            .zip(inputs)
            .fold(self.bias.clone(), |acc, (w, x)| acc + w * x);

        if self.nonlinear {
            Ok(activation.relu())
        } else {
            Ok(activation)
        }
    }

    pub fn weights(&self) -> &[Value] {
        &self.weights
    }

    pub fn bias(&self) -> &Value {
        &self.bias
    }

    pub fn num_inputs(&self) -> usize {
        self.weights.len()
    }

    pub fn is_nonlinear(&self) -> bool {
        self.nonlinear
    }
}

impl Module for Neuron {
    /// Weights first, bias last.
    fn parameters(&self) -> Vec<Value> {
        let mut params = self.weights.clone();
        params.push(self.bias.clone());
        params
    }

    fn named_parameters(&self) -> Vec<(String, Value)> {
        let mut params: Vec<(String, Value)> = self
            .weights
            .iter()
            .enumerate()
            .map(|(i, w)| (format!("weight.{}", i), w.clone()))
            .collect();
        params.push(("bias".to_string(), self.bias.clone()));
        params
    }
}

#[cfg(test)]
#[path = "neuron_test.rs"]
mod tests;

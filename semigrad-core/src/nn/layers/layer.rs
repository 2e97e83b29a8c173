use crate::error::{Result, SemigradError};
use crate::nn::init::ParamSampler;
use crate::nn::layers::neuron::Neuron;
use crate::nn::module::{prefixed, Module};
use crate::scalar::Value;
use rand::Rng;

/// A row of neurons that all read the same inputs.
#[derive(Debug, Clone)]
pub struct Layer {
    neurons: Vec<Neuron>,
    in_features: usize,
}

impl Layer {
    /// Creates `out_features` neurons, each with `in_features` inputs.
    pub fn new<R: Rng + ?Sized>(
        in_features: usize,
        out_features: usize,
        nonlinear: bool,
        sampler: &ParamSampler,
        rng: &mut R,
    ) -> Self {
        let neurons = (0..out_features)
            .map(|_| Neuron::new(in_features, nonlinear, sampler, rng))
            .collect();
        Layer {
            neurons,
            in_features,
        }
    }

    /// Assembles a layer from prebuilt neurons, which must agree on their input width.
    pub fn from_neurons(neurons: Vec<Neuron>) -> Result<Self> {
        let in_features = match neurons.first() {
            Some(first) => first.num_inputs(),
            None => {
                return Err(SemigradError::InvalidConfig(
                    "a layer needs at least one neuron".to_string(),
                ))
            }
        };
        if let Some(odd) = neurons.iter().find(|n| n.num_inputs() != in_features) {
            return Err(SemigradError::shape_mismatch(
                in_features,
                odd.num_inputs(),
                "Layer from_neurons",
            ));
        }
        Ok(Layer {
            neurons,
            in_features,
        })
    }

    /// One output per neuron, in neuron order.
    pub fn forward(&self, inputs: &[Value]) -> Result<Vec<Value>> {
        self.neurons.iter().map(|n| n.forward(inputs)).collect()
    }

    pub fn neurons(&self) -> &[Neuron] {
        &self.neurons
    }

    pub fn in_features(&self) -> usize {
        self.in_features
    }

    pub fn out_features(&self) -> usize {
        self.neurons.len()
    }
}

impl Module for Layer {
    fn parameters(&self) -> Vec<Value> {
        self.neurons.iter().flat_map(|n| n.parameters()).collect()
    }

    fn named_parameters(&self) -> Vec<(String, Value)> {
        self.neurons
            .iter()
            .enumerate()
            .flat_map(|(i, n)| prefixed(&format!("neurons.{}", i), n.named_parameters()))
            .collect()
    }
}

#[cfg(test)]
#[path = "layer_test.rs"]
mod tests;

use crate::error::{Result, SemigradError};
use crate::nn::init::Init;
use crate::nn::layers::Layer;
use crate::nn::losses::{MseLoss, Reduction};
use crate::nn::module::{prefixed, Module};
use crate::optim::{Optimizer, Sgd};
use crate::scalar::Value;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A multi-layer perceptron: layers applied in sequence.
///
/// Hidden layers apply relu; the last layer is affine so the network can
/// regress to negative targets.
#[derive(Debug, Clone)]
pub struct Mlp {
    input_width: usize,
    layers: Vec<Layer>,
}

impl Mlp {
    /// Creates a network taking `input_width` inputs, with one layer per entry of
    /// `layer_widths`. Parameters are drawn uniformly from `[-1, 1)`.
    pub fn new(input_width: usize, layer_widths: &[usize]) -> Result<Self> {
        Self::with_init(
            input_width,
            layer_widths,
            Init::default(),
            &mut rand::thread_rng(),
        )
    }

    /// Like [`Mlp::new`], reproducibly.
    pub fn with_seed(input_width: usize, layer_widths: &[usize], seed: u64) -> Result<Self> {
        let mut rng = StdRng::seed_from_u64(seed);
        Self::with_init(input_width, layer_widths, Init::default(), &mut rng)
    }

    pub fn with_init<R: Rng + ?Sized>(
        input_width: usize,
        layer_widths: &[usize],
        init: Init,
        rng: &mut R,
    ) -> Result<Self> {
        if input_width == 0 {
            return Err(SemigradError::InvalidConfig(
                "input width must be at least 1".to_string(),
            ));
        }
        if layer_widths.is_empty() {
            return Err(SemigradError::InvalidConfig(
                "a network needs at least one layer".to_string(),
            ));
        }
        if let Some(i) = layer_widths.iter().position(|&w| w == 0) {
            return Err(SemigradError::InvalidConfig(format!(
                "layer {} has width 0",
                i
            )));
        }

        let sampler = init.sampler()?;
        let last = layer_widths.len() - 1;
        let mut in_features = input_width;
        let mut layers = Vec::with_capacity(layer_widths.len());
        for (i, &out_features) in layer_widths.iter().enumerate() {
            layers.push(Layer::new(in_features, out_features, i != last, &sampler, rng));
            in_features = out_features;
        }

        Ok(Mlp {
            input_width,
            layers,
        })
    }

    /// Chains prebuilt layers; each layer's input width must match the previous output width.
    pub fn from_layers(layers: Vec<Layer>) -> Result<Self> {
        let input_width = match layers.first() {
            Some(first) => first.in_features(),
            None => {
                return Err(SemigradError::InvalidConfig(
                    "a network needs at least one layer".to_string(),
                ))
            }
        };
        for pair in layers.windows(2) {
            if pair[0].out_features() != pair[1].in_features() {
                return Err(SemigradError::shape_mismatch(
                    pair[0].out_features(),
                    pair[1].in_features(),
                    "Mlp from_layers",
                ));
            }
        }
        Ok(Mlp {
            input_width,
            layers,
        })
    }

    /// Feeds `inputs` through every layer and returns the last layer's outputs.
    pub fn forward(&self, inputs: &[Value]) -> Result<Vec<Value>> {
        if inputs.len() != self.input_width {
            return Err(SemigradError::shape_mismatch(
                self.input_width,
                inputs.len(),
                "Mlp forward",
            ));
        }
        let mut current = inputs.to_vec();
        for layer in &self.layers {
            current = layer.forward(&current)?;
        }
        Ok(current)
    }

    /// Forward pass on raw numbers, returning raw numbers.
    pub fn predict(&self, inputs: &[f64]) -> Result<Vec<f64>> {
        let outputs = self.forward(&Value::from_slice(inputs))?;
        Ok(outputs.iter().map(Value::data).collect())
    }

    /// Mean squared error of the prediction for `inputs` against `targets`.
    ///
    /// The returned node is the root of the whole forward graph, ready for
    /// [`Value::backward`].
    pub fn loss(&self, inputs: &[Value], targets: &[Value]) -> Result<Value> {
        if targets.len() != self.output_width() {
            return Err(SemigradError::shape_mismatch(
                self.output_width(),
                targets.len(),
                "Mlp loss",
            ));
        }
        let predictions = self.forward(inputs)?;
        MseLoss::new(Reduction::Mean).calculate(&predictions, targets)
    }

    /// One gradient descent step: `value -= learning_rate * grad` on every parameter.
    ///
    /// Returns `InvalidConfig` unless `learning_rate` is finite and positive.
    pub fn optimize(&mut self, learning_rate: f64) -> Result<()> {
        Sgd::new(self.parameters(), learning_rate)?.step()
    }

    pub fn input_width(&self) -> usize {
        self.input_width
    }

    pub fn output_width(&self) -> usize {
        self.layers.last().map_or(0, Layer::out_features)
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }
}

impl Module for Mlp {
    fn parameters(&self) -> Vec<Value> {
        self.layers.iter().flat_map(|l| l.parameters()).collect()
    }

    fn named_parameters(&self) -> Vec<(String, Value)> {
        self.layers
            .iter()
            .enumerate()
            .flat_map(|(i, l)| prefixed(&format!("layers.{}", i), l.named_parameters()))
            .collect()
    }
}

#[cfg(test)]
#[path = "mlp_test.rs"]
mod tests;

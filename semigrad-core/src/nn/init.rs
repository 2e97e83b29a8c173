use crate::error::{Result, SemigradError};
use rand::distributions::Uniform;
use rand::Rng;
use rand_distr::{Distribution, Normal};

/// How fresh weights and biases are drawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Init {
    /// Uniform in `[low, high)`.
    Uniform { low: f64, high: f64 },
    /// Zero-mean normal.
    Normal { std_dev: f64 },
}

impl Default for Init {
    fn default() -> Self {
        Init::Uniform {
            low: -1.0,
            high: 1.0,
        }
    }
}

impl Init {
    /// Validates the parameters and builds the distribution once.
    pub fn sampler(&self) -> Result<ParamSampler> {
        match *self {
            Init::Uniform { low, high } => {
                if !(low.is_finite() && high.is_finite() && low < high) {
                    return Err(SemigradError::InvalidConfig(format!(
                        "uniform init needs finite low < high, got [{}, {})",
                        low, high
                    )));
                }
                Ok(ParamSampler::Uniform(Uniform::new(low, high)))
            }
            Init::Normal { std_dev } => Normal::new(0.0, std_dev)
                .map(ParamSampler::Normal)
                .map_err(|e| {
                    SemigradError::InvalidConfig(format!(
                        "normal init with std_dev {}: {}",
                        std_dev, e
                    ))
                }),
        }
    }
}

/// A validated [`Init`], ready to draw from.
#[derive(Debug, Clone)]
pub enum ParamSampler {
    Uniform(Uniform<f64>),
    Normal(Normal<f64>),
}

impl ParamSampler {
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        match self {
            ParamSampler::Uniform(dist) => dist.sample(rng),
            ParamSampler::Normal(dist) => dist.sample(rng),
        }
    }
}

// --- Tests ---
#[cfg(test)]
#[path = "init_test.rs"]
mod tests;

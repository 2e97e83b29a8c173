use crate::error::{Result, SemigradError};
use crate::optim::optimizer_trait::Optimizer;
use crate::scalar::Value;
use log::debug;

/// Plain gradient descent.
#[derive(Debug, Clone)]
pub struct Sgd {
    params: Vec<Value>,
    lr: f64,
}

impl Sgd {
    /// Creates a new `Sgd` over `params`.
    ///
    /// The learning rate must be finite and strictly positive.
    pub fn new(params: impl IntoIterator<Item = Value>, lr: f64) -> Result<Self> {
        validate_lr(lr)?;
        Ok(Sgd {
            params: params.into_iter().collect(),
            lr,
        })
    }

    pub fn lr(&self) -> f64 {
        self.lr
    }

    pub fn set_lr(&mut self, lr: f64) -> Result<()> {
        validate_lr(lr)?;
        self.lr = lr;
        Ok(())
    }

    pub fn params(&self) -> &[Value] {
        &self.params
    }
}

pub(crate) fn validate_lr(lr: f64) -> Result<()> {
    if lr.is_finite() && lr > 0.0 {
        Ok(())
    } else {
        Err(SemigradError::InvalidConfig(format!(
            "learning rate must be finite and positive, got {}",
            lr
        )))
    }
}

impl Optimizer for Sgd {
    fn step(&mut self) -> Result<()> {
        debug!("Sgd: step over {} params, lr = {}", self.params.len(), self.lr);
        for param in &self.params {
            param.set_data(param.data() - self.lr * param.grad());
        }
        Ok(())
    }

    fn zero_grad(&mut self) {
        for param in &self.params {
            param.zero_grad();
        }
    }
}

#[cfg(test)]
#[path = "sgd_test.rs"]
mod tests;

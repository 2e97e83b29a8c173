use crate::error::{Result, SemigradError};
use crate::model::mlp::Mlp;
use crate::nn::module::Module;
use crate::optim::sgd::validate_lr;
use crate::scalar::Value;
use log::{info, warn};

/// Hyperparameters of the training loop.
#[derive(Debug, Clone, PartialEq)]
pub struct TrainConfig {
    pub epochs: usize,
    pub learning_rate: f64,
    /// Log the epoch mean loss every `log_every` epochs (and always the last one).
    /// 0 disables the periodic lines.
    pub log_every: usize,
}

impl Default for TrainConfig {
    fn default() -> Self {
        TrainConfig {
            epochs: 100,
            learning_rate: 0.05,
            log_every: 10,
        }
    }
}

impl TrainConfig {
    pub fn validate(&self) -> Result<()> {
        if self.epochs == 0 {
            return Err(SemigradError::InvalidConfig(
                "epochs must be at least 1".to_string(),
            ));
        }
        validate_lr(self.learning_rate)
    }
}

/// Outcome of one pass over the training examples.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EpochReport {
    /// Zero-based.
    pub epoch: usize,
    /// Mean of the per-example losses, each measured before that example's update.
    pub mean_loss: f64,
}

impl Mlp {
    /// Stochastic gradient descent over `inputs_batch` / `targets_batch`.
    ///
    /// For each epoch and each example, in order: loss, zero_grad, backward,
    /// optimize. Returns the mean loss of every epoch.
    pub fn train(
        &mut self,
        inputs_batch: &[Vec<Value>],
        targets_batch: &[Vec<Value>],
        epochs: usize,
        learning_rate: f64,
    ) -> Result<Vec<f64>> {
        let config = TrainConfig {
            epochs,
            learning_rate,
            ..TrainConfig::default()
        };
        let reports = self.fit(inputs_batch, targets_batch, &config)?;
        Ok(reports.iter().map(|r| r.mean_loss).collect())
    }

    /// The training loop behind [`Mlp::train`], driven by a [`TrainConfig`].
    ///
    /// A shape error on any example aborts the run; parameters keep the updates
    /// made before it.
    pub fn fit(
        &mut self,
        inputs_batch: &[Vec<Value>],
        targets_batch: &[Vec<Value>],
        config: &TrainConfig,
    ) -> Result<Vec<EpochReport>> {
        config.validate()?;
        if inputs_batch.len() != targets_batch.len() {
            return Err(SemigradError::shape_mismatch(
                inputs_batch.len(),
                targets_batch.len(),
                "Mlp fit (examples vs targets)",
            ));
        }
        if inputs_batch.is_empty() {
            return Err(SemigradError::EmptyInput {
                operation: "Mlp fit".to_string(),
            });
        }

        let mut reports = Vec::with_capacity(config.epochs);
        for epoch in 0..config.epochs {
            let mut total_loss = 0.0;
            for (inputs, targets) in inputs_batch.iter().zip(targets_batch) {
                let loss = self.loss(inputs, targets)?;
                total_loss += loss.data();
                self.zero_grad();
                loss.backward();
                self.optimize(config.learning_rate)?;
            }

            let mean_loss = total_loss / inputs_batch.len() as f64;
            if !mean_loss.is_finite() {
                warn!("epoch {}: mean loss is {}", epoch + 1, mean_loss);
            }
            let is_last = epoch + 1 == config.epochs;
            if is_last || (config.log_every > 0 && (epoch + 1) % config.log_every == 0) {
                info!(
                    "epoch {}/{}: mean loss {:.6}",
                    epoch + 1,
                    config.epochs,
                    mean_loss
                );
            }
            reports.push(EpochReport { epoch, mean_loss });
        }

        Ok(reports)
    }
}

#[cfg(test)]
#[path = "train_test.rs"]
mod tests;

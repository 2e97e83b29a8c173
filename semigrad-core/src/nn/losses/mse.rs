// semigrad-core/src/nn/losses/mse.rs

use crate::error::{Result, SemigradError};
use crate::scalar::Value;

/// Specifies the reduction applied to the summed squared errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Reduction {
    #[default]
    Mean,
    Sum,
}

impl std::str::FromStr for Reduction {
    type Err = SemigradError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "mean" => Ok(Reduction::Mean),
            "sum" => Ok(Reduction::Sum),
            _ => Err(SemigradError::InvalidConfig(format!(
                "Unsupported reduction type: {}",
                s
            ))),
        }
    }
}

/// Squared-error loss between predictions and targets, built as graph nodes so
/// the result can be differentiated.
#[derive(Debug, Clone, Default)]
pub struct MseLoss {
    reduction: Reduction,
}

impl MseLoss {
    pub fn new(reduction: Reduction) -> Self {
        MseLoss { reduction }
    }

    pub fn reduction(&self) -> Reduction {
        self.reduction
    }

    /// `Σ (p_i - t_i)²`, divided by the number of targets for [`Reduction::Mean`].
    pub fn calculate(&self, predictions: &[Value], targets: &[Value]) -> Result<Value> {
        if predictions.len() != targets.len() {
            return Err(SemigradError::shape_mismatch(
                predictions.len(),
                targets.len(),
                "MseLoss calculate",
            ));
        }

        let total = predictions
            .iter()
            .zip(targets)
            .map(|(p, t)| (p - t).pow(2.0))
            .reduce(|acc, sq| acc + sq)
            .ok_or_else(|| SemigradError::EmptyInput {
                operation: "MseLoss calculate".to_string(),
            })?;

        match self.reduction {
            Reduction::Mean => Ok(total / targets.len() as f64),
            Reduction::Sum => Ok(total),
        }
    }
}

/// Mean squared error; shorthand for `MseLoss::new(Reduction::Mean).calculate(..)`.
pub fn mse_loss(predictions: &[Value], targets: &[Value]) -> Result<Value> {
    MseLoss::new(Reduction::Mean).calculate(predictions, targets)
}

#[cfg(test)]
#[path = "mse_test.rs"]
mod tests;

use crate::error::SemigradError;
use crate::scalar::Value;
use approx::relative_eq;
use thiserror::Error;

/// Error type specifically for gradient checking failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradCheckError {
    #[error("Gradient check failed for input {input_index}: analytical grad {analytical:?} != numerical grad {numerical:?} (difference {difference:?})")]
    GradientMismatch {
        input_index: usize,
        analytical: f64,
        numerical: f64,
        difference: f64,
    },

    #[error("Numerical gradient is NaN or infinite for input {input_index}. Loss+: {loss_plus:?}, Loss-: {loss_minus:?}")]
    NumericalGradNonFinite {
        input_index: usize,
        loss_plus: f64,
        loss_minus: f64,
    },

    #[error("Analytical gradient is NaN or infinite for input {input_index}: {value:?}")]
    AnalyticalGradNonFinite { input_index: usize, value: f64 },

    #[error("Gradient check input {input_index} must be a leaf node")]
    InputNotLeaf { input_index: usize },

    #[error("Forward function execution failed during gradient check: {0}")]
    ForwardPassError(SemigradError),
}

impl From<SemigradError> for GradCheckError {
    fn from(err: SemigradError) -> Self {
        GradCheckError::ForwardPassError(err)
    }
}

/// Checks analytical gradients against central finite differences.
///
/// `func` must rebuild its graph from `inputs` on every call; it is evaluated
/// once for the reverse pass and twice per input with that input nudged by
/// `±epsilon`. Every input is restored to its original value before returning.
/// Gradients agree when they are within `tolerance` absolutely or relatively.
pub fn check_grad<F>(
    func: F,
    inputs: &[Value],
    epsilon: f64,
    tolerance: f64,
) -> Result<(), GradCheckError>
where
    F: Fn(&[Value]) -> Result<Value, SemigradError>,
{
    for (i, input) in inputs.iter().enumerate() {
        if !input.is_leaf() {
            return Err(GradCheckError::InputNotLeaf { input_index: i });
        }
        input.zero_grad();
    }

    let output = func(inputs)?;
    output.backward();
    let analytical_grads: Vec<f64> = inputs.iter().map(Value::grad).collect();

    for (i, input) in inputs.iter().enumerate() {
        let analytical = analytical_grads[i];
        if !analytical.is_finite() {
            return Err(GradCheckError::AnalyticalGradNonFinite {
                input_index: i,
                value: analytical,
            });
        }

        let original = input.data();
        input.set_data(original + epsilon);
        let loss_plus = func(inputs).map(|v| v.data());
        input.set_data(original - epsilon);
        let loss_minus = func(inputs).map(|v| v.data());
        input.set_data(original);
        let (loss_plus, loss_minus) = (loss_plus?, loss_minus?);

        let numerical = (loss_plus - loss_minus) / (2.0 * epsilon);
        if !numerical.is_finite() {
            return Err(GradCheckError::NumericalGradNonFinite {
                input_index: i,
                loss_plus,
                loss_minus,
            });
        }

        if !relative_eq!(
            analytical,
            numerical,
            epsilon = tolerance,
            max_relative = tolerance
        ) {
            return Err(GradCheckError::GradientMismatch {
                input_index: i,
                analytical,
                numerical,
                difference: (analytical - numerical).abs(),
            });
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "grad_check_test.rs"]
mod tests;

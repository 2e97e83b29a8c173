use thiserror::Error;

/// Custom error type for the semigrad engine.
///
/// Division by zero, `NaN` and infinities are not errors; they flow through the
/// graph as ordinary IEEE-754 floats.
#[derive(Error, Debug, PartialEq, Clone)]
pub enum SemigradError {
    #[error("Shape mismatch: expected {expected}, got {actual} during operation {operation}")]
    ShapeMismatch {
        expected: usize,
        actual: usize,
        operation: String,
    },

    #[error("Operation {operation} received no elements")]
    EmptyInput { operation: String },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SemigradError>;

impl SemigradError {
    pub(crate) fn shape_mismatch(expected: usize, actual: usize, operation: &str) -> Self {
        SemigradError::ShapeMismatch {
            expected,
            actual,
            operation: operation.to_string(),
        }
    }
}

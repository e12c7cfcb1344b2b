//! Trend-break estimation error types.

use thiserror::Error;

/// Trend-break estimation errors.
///
/// Every variant is a caller-input defect surfaced synchronously; there are
/// no transient failure modes and no partial results.
#[derive(Debug, Error)]
pub enum EstimatorError {
    #[error("Insufficient data: required {required}, got {got}")]
    InsufficientData { required: usize, got: usize },

    #[error("Degenerate fit: {0}")]
    DegenerateFit(String),

    #[error("Length mismatch: expected {expected}, got {got}")]
    LengthMismatch { expected: usize, got: usize },

    #[error("Division by zero: {0}")]
    DivisionByZero(String),

    #[error("Invalid parameter: {name} - {reason}")]
    InvalidParameter { name: String, reason: String },
}

/// Result type for trend-break operations.
pub type Result<T> = std::result::Result<T, EstimatorError>;

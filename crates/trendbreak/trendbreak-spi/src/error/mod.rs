//! Error types for trend-break estimation.
//!
//! This module contains error types and the Result alias.

mod estimator_error;

pub use estimator_error::{EstimatorError, Result};

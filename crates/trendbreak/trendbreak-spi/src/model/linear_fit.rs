//! Linear fit result type.

use serde::{Deserialize, Serialize};

/// Ordinary least squares fit of a series segment.
///
/// Fits `y = intercept + slope * x` where `x` is the series position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearFit {
    /// Trend per time unit.
    pub slope: f64,
    /// Value at position zero.
    pub intercept: f64,
    /// Pearson correlation coefficient of the fitted segment.
    pub correlation: f64,
    /// Squared correlation (coefficient of determination).
    pub r_squared: f64,
    /// Number of observations used in fitting.
    pub n_observations: usize,
}

impl LinearFit {
    /// Create a fit; `r_squared` is derived from the correlation.
    pub fn new(slope: f64, intercept: f64, correlation: f64, n_observations: usize) -> Self {
        Self {
            slope,
            intercept,
            correlation,
            r_squared: correlation * correlation,
            n_observations,
        }
    }

    /// Evaluate the fitted line at a position.
    pub fn predict_at(&self, x: f64) -> f64 {
        self.intercept + self.slope * x
    }
}

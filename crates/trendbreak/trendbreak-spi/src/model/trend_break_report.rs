//! Complete trend-break analysis result.

use serde::{Deserialize, Serialize};

use crate::model::{DivergenceSummary, LinearFit, Projection};

/// The full structured result of a trend-break estimation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendBreakReport {
    /// Fit of the baseline regime, the source of the projection.
    pub baseline_fit: LinearFit,
    /// Fit of the observed regime. Informational only; reports the change
    /// in regime stability and never feeds back into the projection.
    pub observed_fit: LinearFit,
    /// Baseline trend extrapolated across the observed regime.
    pub projection: Projection,
    /// Gap between projection and observed values.
    pub divergence: DivergenceSummary,
    /// First position of the observed regime.
    pub split: usize,
    /// Commission multiplier applied to the total gap.
    pub multiplier: f64,
}

impl TrendBreakReport {
    /// Baseline and observed r-squared, in that order.
    pub fn stability_change(&self) -> (f64, f64) {
        (self.baseline_fit.r_squared, self.observed_fit.r_squared)
    }
}

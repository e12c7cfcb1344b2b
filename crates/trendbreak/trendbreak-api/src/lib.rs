//! Trend-Break Consumer API
//!
//! Configuration types for trend-break estimation, plus re-exports from the
//! SPI for convenience.

use serde::{Deserialize, Serialize};

// Re-export SPI types
pub use trendbreak_spi::{
    BreakEstimator, DivergenceSummary, EstimatorError, LinearFit, Period, Projection,
    ReportRenderer, Result, RevenueSeries, SplitIndex, TrendBreakReport, TrendFitter,
};

/// Estimator configuration.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct EstimatorConfig {
    /// Commission/share rate applied to the total gap (default: 0.35).
    pub multiplier: f64,
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        Self { multiplier: 0.35 }
    }
}

impl EstimatorConfig {
    pub fn new(multiplier: f64) -> Self {
        Self { multiplier }
    }
}

/// An externally supplied conservative loss figure.
///
/// Never derived from the fit; callers who want to report a hand-adjusted
/// estimate (discounting novelty effects and the like) attach one alongside
/// the computed report.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConservativeEstimate {
    /// The supplied loss figure.
    pub loss: f64,
    /// The loss figure scaled by the commission multiplier.
    pub scaled_loss: f64,
}

impl ConservativeEstimate {
    /// Pair a supplied loss figure with its commission-scaled value.
    pub fn from_loss(loss: f64, multiplier: f64) -> Self {
        Self {
            loss,
            scaled_loss: loss * multiplier,
        }
    }
}

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{ConservativeEstimate, EstimatorConfig};
    pub use trendbreak_spi::{
        BreakEstimator, DivergenceSummary, EstimatorError, LinearFit, Period, Projection,
        ReportRenderer, Result, RevenueSeries, SplitIndex, TrendBreakReport, TrendFitter,
    };
}

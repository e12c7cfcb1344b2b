//! Break estimator trait definition.

use crate::error::Result;
use crate::model::{RevenueSeries, SplitIndex, TrendBreakReport};

/// Break estimator trait.
///
/// Implementations fit a trend to the baseline regime, extrapolate it across
/// the observed regime, and quantify the divergence. Estimation is pure:
/// identical inputs always yield identical reports.
pub trait BreakEstimator: Send + Sync {
    /// Estimate the trend break for a series at the given split.
    fn estimate(&self, series: &RevenueSeries, split: SplitIndex) -> Result<TrendBreakReport>;
}

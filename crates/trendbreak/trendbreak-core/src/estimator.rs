//! Trend-break estimator implementation.

use trendbreak_api::EstimatorConfig;
use trendbreak_spi::{
    BreakEstimator, DivergenceSummary, EstimatorError, Projection, Result, RevenueSeries,
    SplitIndex, TrendBreakReport,
};

use crate::regression;

/// Trend-break estimator.
///
/// Fits a baseline trend before the split, extrapolates it across the
/// observed regime, and quantifies the divergence. Holds only the commission
/// multiplier; estimation itself is pure and safe to share across threads.
#[derive(Debug, Clone, Copy)]
pub struct TrendBreakEstimator {
    multiplier: f64,
}

impl TrendBreakEstimator {
    /// Create an estimator with the given commission multiplier.
    pub fn new(multiplier: f64) -> Result<Self> {
        if !(multiplier >= 0.0) {
            return Err(EstimatorError::InvalidParameter {
                name: "multiplier".to_string(),
                reason: format!("must be non-negative, got {}", multiplier),
            });
        }
        Ok(Self { multiplier })
    }

    /// Create from configuration.
    pub fn from_config(config: EstimatorConfig) -> Result<Self> {
        Self::new(config.multiplier)
    }

    /// The commission multiplier applied to the total gap.
    pub fn multiplier(&self) -> f64 {
        self.multiplier
    }
}

impl Default for TrendBreakEstimator {
    fn default() -> Self {
        Self {
            multiplier: EstimatorConfig::default().multiplier,
        }
    }
}

impl BreakEstimator for TrendBreakEstimator {
    fn estimate(&self, series: &RevenueSeries, split: SplitIndex) -> Result<TrendBreakReport> {
        if split.series_len() != series.len() {
            return Err(EstimatorError::InvalidParameter {
                name: "split".to_string(),
                reason: format!(
                    "validated against a series of length {}, applied to one of length {}",
                    split.series_len(),
                    series.len()
                ),
            });
        }

        let baseline_fit = regression::fit_series(series.baseline(split))?;

        // Informational regime-stability comparison; does not feed the
        // projection.
        let observed_positions: Vec<f64> =
            (split.index()..series.len()).map(|i| i as f64).collect();
        let observed_fit = regression::fit_points(&observed_positions, series.observed(split))?;

        let start = split.projection_start();
        let values: Vec<f64> = (start..series.len())
            .map(|x| baseline_fit.predict_at(x as f64))
            .collect();
        let projection = Projection::new(start, values);

        let divergence = divergence(&projection, series.observed(split), self.multiplier)?;

        Ok(TrendBreakReport {
            baseline_fit,
            observed_fit,
            projection,
            divergence,
            split: split.index(),
            multiplier: self.multiplier,
        })
    }
}

/// Divergence between a projection and the observed amounts.
///
/// The projection's values past its overlap point must align one-to-one with
/// the observed regime.
pub fn divergence(
    projection: &Projection,
    actual: &[f64],
    multiplier: f64,
) -> Result<DivergenceSummary> {
    let projected = projection.beyond_overlap();
    if projected.len() != actual.len() {
        return Err(EstimatorError::LengthMismatch {
            expected: projected.len(),
            got: actual.len(),
        });
    }
    if actual.is_empty() {
        return Err(EstimatorError::InsufficientData {
            required: 1,
            got: 0,
        });
    }

    let total_gap = projected.iter().sum::<f64>() - actual.iter().sum::<f64>();
    let scaled_loss = total_gap * multiplier;

    let first_projected = projected[0];
    if first_projected == 0.0 {
        return Err(EstimatorError::DivisionByZero(
            "projected value at the split point is zero".to_string(),
        ));
    }
    let immediate_drop_pct = (first_projected - actual[0]) / first_projected * 100.0;

    Ok(DivergenceSummary {
        total_gap,
        scaled_loss,
        immediate_drop_pct,
    })
}

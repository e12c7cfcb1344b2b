//! Divergence summary model.

use serde::{Deserialize, Serialize};

/// Divergence between the projected baseline and observed revenue.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DivergenceSummary {
    /// Projected minus actual, summed over the observed regime. Positive
    /// when revenue fell short of the projection.
    pub total_gap: f64,
    /// `total_gap` scaled by the commission multiplier.
    pub scaled_loss: f64,
    /// Relative drop at the first observed position, in percent.
    pub immediate_drop_pct: f64,
}

impl DivergenceSummary {
    /// Whether the observed regime underperformed the projection overall.
    pub fn is_shortfall(&self) -> bool {
        self.total_gap > 0.0
    }
}

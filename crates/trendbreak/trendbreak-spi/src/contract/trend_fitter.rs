//! Trait for fitting a linear trend to a series segment.

use crate::error::Result;
use crate::model::LinearFit;

/// Trait for fitting a linear trend to a series segment.
pub trait TrendFitter: Send + Sync {
    /// Fit amounts against sequential positions `0..n`.
    fn fit(&self, data: &[f64]) -> Result<LinearFit>;

    /// Fit amounts against explicit positions.
    fn fit_at(&self, positions: &[f64], data: &[f64]) -> Result<LinearFit>;
}

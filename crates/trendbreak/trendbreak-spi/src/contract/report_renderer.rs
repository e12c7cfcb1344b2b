//! Report renderer trait definition.

use crate::error::Result;
use crate::model::{RevenueSeries, TrendBreakReport};

/// Presentation-side collaborator.
///
/// The estimator hands a renderer the series and the computed report; what
/// the renderer does with them (text, chart, dashboard) is its own concern.
/// No data flows back from a renderer into estimation.
pub trait ReportRenderer: Send + Sync {
    /// Produce a rendition of the report for display.
    fn render(&self, series: &RevenueSeries, report: &TrendBreakReport) -> Result<String>;
}

//! Contract module containing trait definitions for trend-break operations

mod break_estimator;
mod report_renderer;
mod trend_fitter;

pub use break_estimator::BreakEstimator;
pub use report_renderer::ReportRenderer;
pub use trend_fitter::TrendFitter;

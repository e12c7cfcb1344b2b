//! Trend-Break Analysis Service Provider Interface
//!
//! Defines traits and types for estimating the divergence between a
//! pre-break revenue trend and post-break observed revenue.

pub mod contract;
pub mod error;
pub mod model;

// Re-export all public items at crate root for convenience
pub use contract::{BreakEstimator, ReportRenderer, TrendFitter};
pub use error::{EstimatorError, Result};
pub use model::{
    DivergenceSummary, LinearFit, Period, Projection, RevenueSeries, SplitIndex, TrendBreakReport,
};

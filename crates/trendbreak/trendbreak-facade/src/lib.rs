//! Trend-Break Facade
//!
//! High-level API for trend-break revenue analysis. Re-exports all public
//! types from the trendbreak stack for convenient usage.

// Re-export everything from API (which includes SPI)
pub use trendbreak_api::*;

// Explicit re-exports for documentation
pub use trendbreak_api::prelude;

// Re-export core modules for direct access
pub use trendbreak_core::{estimator, regression};

// Re-export implementations at root
pub use trendbreak_core::{divergence, fit_points, fit_series, pearson};
pub use trendbreak_core::{LeastSquaresFitter, TrendBreakEstimator};

//! # trendbreak-core
//!
//! Trend-break estimation over monthly revenue series.
//!
//! Fits an ordinary least squares baseline to the pre-break segment of a
//! series, extrapolates it across the break, and quantifies the divergence
//! between the projection and what was actually observed.
//!
//! ## Example
//!
//! ```rust
//! use trendbreak_core::TrendBreakEstimator;
//! use trendbreak_spi::{BreakEstimator, Period, RevenueSeries};
//!
//! let start = Period::new(2023, 2).unwrap();
//! let series = RevenueSeries::from_start(start, vec![100.0, 200.0, 300.0, 50.0, 60.0]).unwrap();
//! let split = series.split_at(3).unwrap();
//!
//! let estimator = TrendBreakEstimator::default();
//! let report = estimator.estimate(&series, split).unwrap();
//! assert!((report.divergence.total_gap - 790.0).abs() < 1e-9);
//! ```

pub mod estimator;
pub mod regression;

pub use estimator::{divergence, TrendBreakEstimator};
pub use regression::{fit_points, fit_series, pearson, LeastSquaresFitter};

//! Ordinary least squares fitting.
//!
//! Uses the closed-form OLS solution to fit a linear trend to a series
//! segment, with the Pearson correlation of the segment alongside.

use trendbreak_spi::{EstimatorError, LinearFit, Result, TrendFitter};

/// Fit amounts against sequential positions `0..n`.
pub fn fit_series(data: &[f64]) -> Result<LinearFit> {
    let positions: Vec<f64> = (0..data.len()).map(|i| i as f64).collect();
    fit_points(&positions, data)
}

/// Fit amounts against explicit positions.
///
/// The general form exists for non-sequential inputs; zero variance in the
/// positions leaves the slope undefined and is rejected.
pub fn fit_points(positions: &[f64], data: &[f64]) -> Result<LinearFit> {
    if positions.len() != data.len() {
        return Err(EstimatorError::LengthMismatch {
            expected: positions.len(),
            got: data.len(),
        });
    }
    if data.len() < 2 {
        return Err(EstimatorError::InsufficientData {
            required: 2,
            got: data.len(),
        });
    }

    let n = data.len() as f64;
    let sum_x: f64 = positions.iter().sum();
    let sum_y: f64 = data.iter().sum();
    let sum_x2: f64 = positions.iter().map(|x| x * x).sum();
    let sum_xy: f64 = positions.iter().zip(data.iter()).map(|(x, y)| x * y).sum();

    // OLS formulas
    let denominator = n * sum_x2 - sum_x * sum_x;
    if denominator.abs() < 1e-10 {
        return Err(EstimatorError::DegenerateFit(
            "zero variance in fit positions".to_string(),
        ));
    }

    let slope = (n * sum_xy - sum_x * sum_y) / denominator;
    let intercept = (sum_y - slope * sum_x) / n;
    let correlation = pearson(positions, data);

    Ok(LinearFit::new(slope, intercept, correlation, data.len()))
}

/// Pearson correlation between two equal-length series.
///
/// Returns 0.0 when either series carries no variation.
pub fn pearson(x: &[f64], y: &[f64]) -> f64 {
    if x.len() != y.len() || x.is_empty() {
        return f64::NAN;
    }

    let n = x.len() as f64;
    let mean_x: f64 = x.iter().sum::<f64>() / n;
    let mean_y: f64 = y.iter().sum::<f64>() / n;

    let mut cov = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;

    for (xi, yi) in x.iter().zip(y.iter()) {
        let dx = xi - mean_x;
        let dy = yi - mean_y;
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }

    let denominator = (var_x * var_y).sqrt();
    if denominator.abs() < 1e-10 {
        0.0
    } else {
        cov / denominator
    }
}

/// Ordinary least squares [`TrendFitter`].
#[derive(Debug, Clone, Copy, Default)]
pub struct LeastSquaresFitter;

impl LeastSquaresFitter {
    pub fn new() -> Self {
        Self
    }
}

impl TrendFitter for LeastSquaresFitter {
    fn fit(&self, data: &[f64]) -> Result<LinearFit> {
        fit_series(data)
    }

    fn fit_at(&self, positions: &[f64], data: &[f64]) -> Result<LinearFit> {
        fit_points(positions, data)
    }
}

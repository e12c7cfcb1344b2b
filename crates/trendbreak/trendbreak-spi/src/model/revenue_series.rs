//! Monthly revenue series type.

use serde::{Deserialize, Serialize};

use crate::error::{EstimatorError, Result};
use crate::model::{Period, SplitIndex};

/// An ordered monthly revenue series.
///
/// One amount per calendar month, periods strictly increasing, amounts
/// non-negative. Immutable once constructed; all validation happens in the
/// constructor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevenueSeries {
    periods: Vec<Period>,
    amounts: Vec<f64>,
}

impl RevenueSeries {
    /// Create a new series from aligned periods and amounts.
    pub fn new(periods: Vec<Period>, amounts: Vec<f64>) -> Result<Self> {
        if periods.len() != amounts.len() {
            return Err(EstimatorError::LengthMismatch {
                expected: periods.len(),
                got: amounts.len(),
            });
        }
        if amounts.is_empty() {
            return Err(EstimatorError::InsufficientData {
                required: 1,
                got: 0,
            });
        }
        for (i, &amount) in amounts.iter().enumerate() {
            if !(amount >= 0.0) {
                return Err(EstimatorError::InvalidParameter {
                    name: "amounts".to_string(),
                    reason: format!("amount at position {} is not non-negative: {}", i, amount),
                });
            }
        }
        for window in periods.windows(2) {
            if window[1] <= window[0] {
                return Err(EstimatorError::InvalidParameter {
                    name: "periods".to_string(),
                    reason: format!("{} does not follow {}", window[1], window[0]),
                });
            }
        }
        Ok(Self { periods, amounts })
    }

    /// Create a series from `"Feb 2023"`-style labels and amounts.
    pub fn from_labels(labels: &[&str], amounts: Vec<f64>) -> Result<Self> {
        let periods = labels
            .iter()
            .map(|l| l.parse())
            .collect::<Result<Vec<Period>>>()?;
        Self::new(periods, amounts)
    }

    /// Create a series of consecutive months starting at `start`.
    pub fn from_start(start: Period, amounts: Vec<f64>) -> Result<Self> {
        let mut periods = Vec::with_capacity(amounts.len());
        let mut current = start;
        for _ in 0..amounts.len() {
            periods.push(current);
            current = current.next();
        }
        Self::new(periods, amounts)
    }

    /// Number of months in the series.
    pub fn len(&self) -> usize {
        self.amounts.len()
    }

    /// Whether the series is empty. Always false for a constructed series.
    pub fn is_empty(&self) -> bool {
        self.amounts.is_empty()
    }

    /// Monthly amounts in period order.
    pub fn amounts(&self) -> &[f64] {
        &self.amounts
    }

    /// Periods in order.
    pub fn periods(&self) -> &[Period] {
        &self.periods
    }

    /// Display labels for each period.
    pub fn labels(&self) -> Vec<String> {
        self.periods.iter().map(|p| p.to_string()).collect()
    }

    /// Position of a period in the series, if present.
    pub fn position_of(&self, period: Period) -> Option<usize> {
        self.periods.iter().position(|&p| p == period)
    }

    /// Build a validated split index for this series.
    pub fn split_at(&self, index: usize) -> Result<SplitIndex> {
        SplitIndex::new(index, self.len())
    }

    /// Baseline-regime amounts, `[0, split)`.
    pub fn baseline(&self, split: SplitIndex) -> &[f64] {
        &self.amounts[..split.index()]
    }

    /// Observed-regime amounts, `[split, len)`.
    pub fn observed(&self, split: SplitIndex) -> &[f64] {
        &self.amounts[split.index()..]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn periods(n: usize) -> Vec<Period> {
        let mut out = Vec::new();
        let mut current = Period::new(2023, 2).unwrap();
        for _ in 0..n {
            out.push(current);
            current = current.next();
        }
        out
    }

    #[test]
    fn test_series_construction() {
        let series = RevenueSeries::new(periods(3), vec![100.0, 200.0, 300.0]).unwrap();
        assert_eq!(series.len(), 3);
        assert_eq!(series.amounts(), &[100.0, 200.0, 300.0]);
        assert!(!series.is_empty());
    }

    #[test]
    fn test_series_rejects_misaligned_lengths() {
        let result = RevenueSeries::new(periods(3), vec![100.0, 200.0]);
        assert!(matches!(
            result.unwrap_err(),
            EstimatorError::LengthMismatch {
                expected: 3,
                got: 2
            }
        ));
    }

    #[test]
    fn test_series_rejects_empty() {
        let result = RevenueSeries::new(vec![], vec![]);
        assert!(matches!(
            result.unwrap_err(),
            EstimatorError::InsufficientData { required: 1, got: 0 }
        ));
    }

    #[test]
    fn test_series_rejects_negative_amount() {
        let result = RevenueSeries::new(periods(3), vec![100.0, -1.0, 300.0]);
        assert!(matches!(
            result.unwrap_err(),
            EstimatorError::InvalidParameter { .. }
        ));
    }

    #[test]
    fn test_series_rejects_nan_amount() {
        let result = RevenueSeries::new(periods(2), vec![100.0, f64::NAN]);
        assert!(result.is_err());
    }

    #[test]
    fn test_series_rejects_non_increasing_periods() {
        let p = Period::new(2023, 5).unwrap();
        let result = RevenueSeries::new(vec![p, p], vec![1.0, 2.0]);
        assert!(matches!(
            result.unwrap_err(),
            EstimatorError::InvalidParameter { .. }
        ));
    }

    #[test]
    fn test_series_allows_gaps_in_periods() {
        // Strictly increasing is the contract; consecutive months are not.
        let p1 = Period::new(2023, 1).unwrap();
        let p2 = Period::new(2023, 6).unwrap();
        assert!(RevenueSeries::new(vec![p1, p2], vec![1.0, 2.0]).is_ok());
    }

    #[test]
    fn test_from_labels() {
        let series =
            RevenueSeries::from_labels(&["Feb 2023", "Mar 2023"], vec![100.0, 200.0]).unwrap();
        assert_eq!(series.labels(), vec!["Feb 2023", "Mar 2023"]);
    }

    #[test]
    fn test_from_labels_bad_label() {
        let result = RevenueSeries::from_labels(&["Feb 2023", "nope"], vec![100.0, 200.0]);
        assert!(result.is_err());
    }

    #[test]
    fn test_from_start() {
        let start = Period::new(2023, 11).unwrap();
        let series = RevenueSeries::from_start(start, vec![1.0, 2.0, 3.0]).unwrap();
        assert_eq!(series.labels(), vec!["Nov 2023", "Dec 2023", "Jan 2024"]);
    }

    #[test]
    fn test_position_of() {
        let series = RevenueSeries::new(periods(5), vec![1.0; 5]).unwrap();
        let target = Period::new(2023, 4).unwrap();
        assert_eq!(series.position_of(target), Some(2));
        assert_eq!(series.position_of(Period::new(2030, 1).unwrap()), None);
    }

    #[test]
    fn test_baseline_and_observed_slices() {
        let series =
            RevenueSeries::new(periods(5), vec![100.0, 200.0, 300.0, 50.0, 60.0]).unwrap();
        let split = series.split_at(3).unwrap();
        assert_eq!(series.baseline(split), &[100.0, 200.0, 300.0]);
        assert_eq!(series.observed(split), &[50.0, 60.0]);
    }
}

//! Split index value object.

use serde::{Deserialize, Serialize};

use crate::error::{EstimatorError, Result};

/// Index separating the baseline regime from the observed regime.
///
/// The convention is inclusive-start-of-observed: the index is the first
/// position of the observed regime and the baseline is `[0, index)`.
/// Construction enforces `0 < index < series_len` with at least
/// [`SplitIndex::MIN_SEGMENT`] points on each side, so a held value is
/// always usable without further bounds checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitIndex {
    index: usize,
    series_len: usize,
}

impl SplitIndex {
    /// Minimum number of points required in each regime.
    pub const MIN_SEGMENT: usize = 2;

    /// Validate and create a split index for a series of `series_len` points.
    pub fn new(index: usize, series_len: usize) -> Result<Self> {
        if index == 0 || index >= series_len {
            return Err(EstimatorError::InvalidParameter {
                name: "split".to_string(),
                reason: format!(
                    "index {} out of range for a series of length {}",
                    index, series_len
                ),
            });
        }
        if index < Self::MIN_SEGMENT {
            return Err(EstimatorError::InsufficientData {
                required: Self::MIN_SEGMENT,
                got: index,
            });
        }
        let observed_len = series_len - index;
        if observed_len < Self::MIN_SEGMENT {
            return Err(EstimatorError::InsufficientData {
                required: Self::MIN_SEGMENT,
                got: observed_len,
            });
        }
        Ok(Self { index, series_len })
    }

    /// First position of the observed regime.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Length of the series this split was validated against.
    pub fn series_len(&self) -> usize {
        self.series_len
    }

    /// Number of baseline points.
    pub fn baseline_len(&self) -> usize {
        self.index
    }

    /// Number of observed points.
    pub fn observed_len(&self) -> usize {
        self.series_len - self.index
    }

    /// Position of the first projected value, the last baseline point.
    pub fn projection_start(&self) -> usize {
        self.index - 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_split() {
        let split = SplitIndex::new(3, 5).unwrap();
        assert_eq!(split.index(), 3);
        assert_eq!(split.series_len(), 5);
        assert_eq!(split.baseline_len(), 3);
        assert_eq!(split.observed_len(), 2);
        assert_eq!(split.projection_start(), 2);
    }

    #[test]
    fn test_zero_index_rejected() {
        let result = SplitIndex::new(0, 5);
        assert!(matches!(
            result.unwrap_err(),
            EstimatorError::InvalidParameter { .. }
        ));
    }

    #[test]
    fn test_index_at_length_rejected() {
        // No observed regime to compare against.
        let result = SplitIndex::new(5, 5);
        assert!(result.is_err());
    }

    #[test]
    fn test_index_past_length_rejected() {
        assert!(SplitIndex::new(7, 5).is_err());
    }

    #[test]
    fn test_one_point_baseline_rejected() {
        // A baseline of one point cannot support a regression.
        let result = SplitIndex::new(1, 5);
        assert!(matches!(
            result.unwrap_err(),
            EstimatorError::InsufficientData {
                required: 2,
                got: 1
            }
        ));
    }

    #[test]
    fn test_one_point_observed_rejected() {
        let result = SplitIndex::new(4, 5);
        assert!(matches!(
            result.unwrap_err(),
            EstimatorError::InsufficientData {
                required: 2,
                got: 1
            }
        ));
    }

    #[test]
    fn test_minimum_viable_series() {
        // Four points, split in the middle, is the smallest valid input.
        assert!(SplitIndex::new(2, 4).is_ok());
        assert!(SplitIndex::new(2, 3).is_err());
    }
}

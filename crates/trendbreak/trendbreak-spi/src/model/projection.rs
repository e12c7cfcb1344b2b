//! Projection model.

use serde::{Deserialize, Serialize};

/// The baseline trend extrapolated across the observed regime.
///
/// Values run from the last baseline position through the end of the series,
/// so the leading value overlaps the baseline and the projected and actual
/// lines join at the regime boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Projection {
    /// Series position of the first projected value.
    pub start: usize,
    /// Projected values, one per position from `start` onward.
    pub values: Vec<f64>,
}

impl Projection {
    /// Create a new projection.
    pub fn new(start: usize, values: Vec<f64>) -> Self {
        Self { start, values }
    }

    /// The overlap value at the last baseline position, if any.
    pub fn overlap(&self) -> Option<f64> {
        self.values.first().copied()
    }

    /// Projected values past the overlap point, aligned with the observed
    /// regime.
    pub fn beyond_overlap(&self) -> &[f64] {
        self.values.get(1..).unwrap_or(&[])
    }

    /// Series positions covered by the projection.
    pub fn positions(&self) -> Vec<usize> {
        (self.start..self.start + self.values.len()).collect()
    }

    /// Number of projected values.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the projection holds no values.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

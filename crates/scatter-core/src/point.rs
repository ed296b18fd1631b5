// File: crates/scatter-core/src/point.rs
// Summary: Data model for a labeled (x, y) observation plus up-front validation.

use crate::error::{ChartError, Result};

/// One labeled observation: `x` is the independent value (e.g. study hours),
/// `y` the dependent value (e.g. score).
#[derive(Clone, Debug, PartialEq)]
pub struct DataPoint {
    pub x: f64,
    pub y: f64,
    pub label: String,
}

impl DataPoint {
    pub fn new(x: f64, y: f64, label: impl Into<String>) -> Self {
        Self { x, y, label: label.into() }
    }

    /// Both coordinates are finite (no NaN/Infinity).
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Reject empty sequences and non-finite coordinates before any drawing.
pub(crate) fn validate_points(points: &[DataPoint]) -> Result<()> {
    if points.is_empty() {
        return Err(ChartError::InvalidData { reason: "empty point sequence".to_string() });
    }
    for (i, p) in points.iter().enumerate() {
        if !p.x.is_finite() {
            return Err(ChartError::InvalidData {
                reason: format!("point {} ({:?}) has non-finite x: {}", i, p.label, p.x),
            });
        }
        if !p.y.is_finite() {
            return Err(ChartError::InvalidData {
                reason: format!("point {} ({:?}) has non-finite y: {}", i, p.label, p.y),
            });
        }
    }
    Ok(())
}

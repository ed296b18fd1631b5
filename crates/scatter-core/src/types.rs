// File: crates/scatter-core/src/types.rs
// Summary: Shared types and constants (sizes, margins, marker/tooltip styling).

/// Default surface width in pixels.
pub const WIDTH: f64 = 600.0;
/// Default surface height in pixels.
pub const HEIGHT: f64 = 400.0;

/// Marker fill opacity at rest.
pub const MARKER_OPACITY: f64 = 0.7;
/// Marker fill opacity while hovered.
pub const HOVER_OPACITY: f64 = 1.0;

/// Tooltip text offset from the marker center, in pixels.
pub const TOOLTIP_OFFSET_X: f64 = 10.0;
pub const TOOLTIP_OFFSET_Y: f64 = -10.0;

/// Trend line dash pattern (on, off) and stroke width, in pixels.
pub const TREND_DASH: (f64, f64) = (5.0, 5.0);
pub const TREND_STROKE_WIDTH: f64 = 2.0;

/// Tick mark length, in pixels.
pub const TICK_LENGTH: f64 = 6.0;

/// Margins reserved for axis chrome, in pixels.
/// Contract: all fields are finite and non-negative.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Margin {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Margin {
    /// Create new margins in CSS order (top, right, bottom, left).
    pub const fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self { top, right, bottom, left }
    }
    /// Total horizontal margin (left + right).
    pub fn hsum(&self) -> f64 {
        self.left + self.right
    }
    /// Total vertical margin (top + bottom).
    pub fn vsum(&self) -> f64 {
        self.top + self.bottom
    }
}

impl Default for Margin {
    fn default() -> Self {
        Self::new(20.0, 20.0, 40.0, 40.0)
    }
}

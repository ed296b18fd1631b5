// File: crates/scatter-core/src/config.rs
// Summary: Render configuration with documented defaults and drawable-region validation.

use crate::error::{ChartError, Result};
use crate::point::DataPoint;
use crate::theme::Theme;
use crate::types::{Margin, HEIGHT, WIDTH};

/// Caller-supplied tooltip text builder. A plain function pointer keeps the
/// config `Clone` and the default const-constructible.
pub type TooltipFormat = fn(&DataPoint) -> String;

/// Default tooltip text: `"{label}: {y}"`, no unit. Callers that want a unit
/// (the original use case appended `%`) supply their own formatter.
pub fn default_tooltip(p: &DataPoint) -> String {
    format!("{}: {}", p.label, p.y)
}

/// Everything a render pass needs besides the data.
///
/// Defaults: 600x400 surface, margins 20/20/40/40, marker radius 6 growing
/// to 8 on hover, color `#CFAEFF`, 5 ticks per axis, dark theme.
#[derive(Clone, Debug)]
pub struct ChartConfig {
    pub width: f64,
    pub height: f64,
    pub margin: Margin,
    pub point_radius: f64,
    pub hover_radius: f64,
    /// Stroke/fill for markers, trend line, and tooltip text. Any SVG color
    /// string the host's styling system hands over.
    pub color: String,
    /// Requested tick count per axis; the tick generator may emit slightly
    /// fewer or more to land on nice steps.
    pub tick_count: usize,
    pub theme: Theme,
    pub tooltip_format: TooltipFormat,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            margin: Margin::default(),
            point_radius: 6.0,
            hover_radius: 8.0,
            color: "#CFAEFF".to_string(),
            tick_count: 5,
            theme: Theme::dark(),
            tooltip_format: default_tooltip,
        }
    }
}

impl ChartConfig {
    /// Width of the drawable region after subtracting horizontal margins.
    pub fn inner_width(&self) -> f64 {
        self.width - self.margin.hsum()
    }

    /// Height of the drawable region after subtracting vertical margins.
    pub fn inner_height(&self) -> f64 {
        self.height - self.margin.vsum()
    }

    /// Fail with `InvalidConfig` unless the drawable region is strictly
    /// positive. Written as `!(v > 0.0)` so a NaN from non-finite config
    /// fields fails the same check.
    pub fn validate(&self) -> Result<()> {
        let iw = self.inner_width();
        let ih = self.inner_height();
        if !(iw > 0.0) {
            return Err(ChartError::InvalidConfig {
                reason: format!("non-positive inner width: {iw} (width {} minus horizontal margins {})", self.width, self.margin.hsum()),
            });
        }
        if !(ih > 0.0) {
            return Err(ChartError::InvalidConfig {
                reason: format!("non-positive inner height: {ih} (height {} minus vertical margins {})", self.height, self.margin.vsum()),
            });
        }
        Ok(())
    }
}

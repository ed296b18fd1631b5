// File: crates/scatter-core/src/axis.rs
// Summary: Axis model plus bottom/left axis drawing (baseline, tick marks, labels, titles).

use crate::config::ChartConfig;
use crate::scale::{tick_label, tick_step, ticks, LinearScale};
use crate::scene::{Shape, TextAnchor, VectorSurface};
use crate::types::TICK_LENGTH;

const AXIS_STROKE_WIDTH: f64 = 1.5;
const TICK_STROKE_WIDTH: f64 = 1.0;
const TICK_LABEL_SIZE: f64 = 10.0;
const AXIS_TITLE_SIZE: f64 = 12.0;

/// Axis title model. Domains are derived from the data at render time
/// (origin-anchored), so the axis carries only its label.
#[derive(Clone, Debug, PartialEq)]
pub struct Axis {
    pub label: String,
}

impl Axis {
    pub fn new(label: impl Into<String>) -> Self {
        Self { label: label.into() }
    }

    pub fn default_x() -> Self {
        Self::new("X")
    }

    pub fn default_y() -> Self {
        Self::new("Y")
    }
}

/// Baseline along the bottom edge of the inner area, downward tick marks,
/// tick labels beneath them, and a centered axis title in the bottom margin.
pub(crate) fn draw_bottom_axis(
    surface: &mut VectorSurface,
    axis: &Axis,
    scale: &LinearScale,
    cfg: &ChartConfig,
) {
    let left = cfg.margin.left;
    let bottom = cfg.margin.top + cfg.inner_height();
    let theme = cfg.theme;

    surface.push(Shape::Line {
        x1: left,
        y1: bottom,
        x2: left + cfg.inner_width(),
        y2: bottom,
        stroke: theme.axis.to_string(),
        stroke_width: AXIS_STROKE_WIDTH,
    });

    let domain = scale.domain();
    let step = tick_step(domain, cfg.tick_count);
    for t in ticks(domain, cfg.tick_count) {
        let x = left + scale.map(t);
        surface.push(Shape::Line {
            x1: x,
            y1: bottom,
            x2: x,
            y2: bottom + TICK_LENGTH,
            stroke: theme.axis.to_string(),
            stroke_width: TICK_STROKE_WIDTH,
        });
        surface.push(Shape::Text {
            x,
            y: bottom + TICK_LENGTH + TICK_LABEL_SIZE + 2.0,
            content: tick_label(t, step),
            fill: theme.tick_label.to_string(),
            size: TICK_LABEL_SIZE,
            anchor: TextAnchor::Middle,
            rotate: None,
        });
    }

    surface.push(Shape::Text {
        x: left + cfg.inner_width() * 0.5,
        y: cfg.height - 6.0,
        content: axis.label.clone(),
        fill: theme.axis.to_string(),
        size: AXIS_TITLE_SIZE,
        anchor: TextAnchor::Middle,
        rotate: None,
    });
}

/// Baseline along the left edge, leftward tick marks, right-anchored tick
/// labels, and a title rotated 90 degrees counter-clockwise in the left
/// margin (matching the usual y-axis treatment).
pub(crate) fn draw_left_axis(
    surface: &mut VectorSurface,
    axis: &Axis,
    scale: &LinearScale,
    cfg: &ChartConfig,
) {
    let left = cfg.margin.left;
    let top = cfg.margin.top;
    let theme = cfg.theme;

    surface.push(Shape::Line {
        x1: left,
        y1: top,
        x2: left,
        y2: top + cfg.inner_height(),
        stroke: theme.axis.to_string(),
        stroke_width: AXIS_STROKE_WIDTH,
    });

    let domain = scale.domain();
    let step = tick_step(domain, cfg.tick_count);
    for t in ticks(domain, cfg.tick_count) {
        let y = top + scale.map(t);
        surface.push(Shape::Line {
            x1: left - TICK_LENGTH,
            y1: y,
            x2: left,
            y2: y,
            stroke: theme.axis.to_string(),
            stroke_width: TICK_STROKE_WIDTH,
        });
        surface.push(Shape::Text {
            x: left - TICK_LENGTH - 4.0,
            y: y + TICK_LABEL_SIZE * 0.35,
            content: tick_label(t, step),
            fill: theme.tick_label.to_string(),
            size: TICK_LABEL_SIZE,
            anchor: TextAnchor::End,
            rotate: None,
        });
    }

    surface.push(Shape::Text {
        x: AXIS_TITLE_SIZE,
        y: top + cfg.inner_height() * 0.5,
        content: axis.label.clone(),
        fill: theme.axis.to_string(),
        size: AXIS_TITLE_SIZE,
        anchor: TextAnchor::Middle,
        rotate: Some(-90.0),
    });
}

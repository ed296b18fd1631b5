// File: crates/scatter-core/src/chart.rs
// Summary: ScatterChart struct and the validate/clear/axes/markers/trend render pipeline.

use std::path::Path;

use crate::axis::{draw_bottom_axis, draw_left_axis, Axis};
use crate::config::ChartConfig;
use crate::error::Result;
use crate::point::{validate_points, DataPoint};
use crate::scale::LinearScale;
use crate::scene::{Shape, VectorSurface};
use crate::types::{MARKER_OPACITY, TREND_DASH, TREND_STROKE_WIDTH};
use crate::view::{ChartView, MarkerState};

/// A scatter chart over an ordered point sequence. Points are plain owned
/// state: mutate them and call [`render`](Self::render) again to update —
/// re-render clears first, so stale markers and stale hover state are
/// discarded by construction.
#[derive(Clone, Debug)]
pub struct ScatterChart {
    pub points: Vec<DataPoint>,
    pub x_axis: Axis,
    pub y_axis: Axis,
}

impl Default for ScatterChart {
    fn default() -> Self {
        Self::new()
    }
}

impl ScatterChart {
    pub fn new() -> Self {
        Self {
            points: Vec::new(),
            x_axis: Axis::default_x(),
            y_axis: Axis::default_y(),
        }
    }

    pub fn with_points(points: Vec<DataPoint>) -> Self {
        Self { points, ..Self::new() }
    }

    pub fn add_point(&mut self, point: DataPoint) {
        self.points.push(point);
    }

    /// One synchronous layout-and-draw pass.
    ///
    /// Validates config and points up front — on error the surface is left
    /// exactly as it was, not partially drawn and not cleared. On success the
    /// surface holds background, axes, one circle per point, and a dashed
    /// trend polyline connecting the points in input order (a raw
    /// connect-the-dots line, not a fitted regression). Returns the
    /// [`ChartView`] that owns hover state for this pass.
    pub fn render(&self, surface: &mut VectorSurface, config: &ChartConfig) -> Result<ChartView> {
        config.validate()?;
        validate_points(&self.points)?;

        surface.clear();
        surface.set_background(Some(config.theme.background.to_string()));

        let left = config.margin.left;
        let top = config.margin.top;
        let inner_w = config.inner_width();
        let inner_h = config.inner_height();

        // Origin-anchored domains: lower bound 0 regardless of the data
        // minimum. Degenerate spans map to the range midpoint (scale policy).
        let x_max = self.points.iter().fold(f64::NEG_INFINITY, |m, p| m.max(p.x));
        let y_max = self.points.iter().fold(f64::NEG_INFINITY, |m, p| m.max(p.y));
        let sx = LinearScale::new([0.0, x_max], [0.0, inner_w]);
        let sy = LinearScale::new([0.0, y_max], [inner_h, 0.0]);

        draw_bottom_axis(surface, &self.x_axis, &sx, config);
        draw_left_axis(surface, &self.y_axis, &sy, config);

        let mut markers = Vec::with_capacity(self.points.len());
        for p in &self.points {
            let cx = left + sx.map(p.x);
            let cy = top + sy.map(p.y);
            let node = surface.push(Shape::Circle {
                cx,
                cy,
                r: config.point_radius,
                fill: config.color.clone(),
                opacity: MARKER_OPACITY,
            });
            markers.push(MarkerState { point: p.clone(), cx, cy, node });
        }

        surface.push(Shape::Polyline {
            points: markers.iter().map(|m| (m.cx, m.cy)).collect(),
            stroke: config.color.clone(),
            stroke_width: TREND_STROKE_WIDTH,
            dash: Some(TREND_DASH),
        });

        Ok(ChartView::new(
            markers,
            sx,
            sy,
            config.point_radius,
            config.hover_radius,
            config.color.clone(),
            config.tooltip_format,
        ))
    }

    /// Render into a fresh surface and serialize to SVG text.
    pub fn render_to_svg_string(&self, config: &ChartConfig) -> Result<String> {
        let mut surface = VectorSurface::new();
        self.render(&mut surface, config)?;
        Ok(surface.to_svg(config.width, config.height))
    }

    /// Render into a fresh surface and write the SVG to `path`, creating
    /// parent directories.
    pub fn render_to_svg(&self, config: &ChartConfig, path: impl AsRef<Path>) -> Result<()> {
        let mut surface = VectorSurface::new();
        self.render(&mut surface, config)?;
        surface.write_svg(config.width, config.height, path)?;
        Ok(())
    }
}

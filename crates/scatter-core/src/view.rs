// File: crates/scatter-core/src/view.rs
// Summary: Interactive view state from one render pass: per-marker records, hover slot, hit-testing.

use crate::config::TooltipFormat;
use crate::point::DataPoint;
use crate::scale::LinearScale;
use crate::scene::{NodeId, Shape, TextAnchor, VectorSurface};
use crate::types::{HOVER_OPACITY, MARKER_OPACITY, TOOLTIP_OFFSET_X, TOOLTIP_OFFSET_Y};

const TOOLTIP_SIZE: f64 = 12.0;

/// One marker's explicit state record: the point it represents, its center
/// in surface coordinates, and the circle node drawn for it.
#[derive(Clone, Debug)]
pub struct MarkerState {
    pub point: DataPoint,
    pub cx: f64,
    pub cy: f64,
    pub node: NodeId,
}

/// The product of one render pass. Owns the hover state machine: a single
/// active-marker slot and a single tooltip slot, so at most one tooltip node
/// exists at any time by construction.
///
/// A view outlived by its render is harmless: node ids are never reused, so
/// every surface access on a stale view resolves to nothing and the entry
/// points no-op.
#[derive(Clone, Debug)]
pub struct ChartView {
    markers: Vec<MarkerState>,
    x_scale: LinearScale,
    y_scale: LinearScale,
    point_radius: f64,
    hover_radius: f64,
    color: String,
    tooltip_format: TooltipFormat,
    hovered: Option<usize>,
    tooltip: Option<NodeId>,
}

impl ChartView {
    pub(crate) fn new(
        markers: Vec<MarkerState>,
        x_scale: LinearScale,
        y_scale: LinearScale,
        point_radius: f64,
        hover_radius: f64,
        color: String,
        tooltip_format: TooltipFormat,
    ) -> Self {
        Self {
            markers,
            x_scale,
            y_scale,
            point_radius,
            hover_radius,
            color,
            tooltip_format,
            hovered: None,
            tooltip: None,
        }
    }

    pub fn markers(&self) -> &[MarkerState] {
        &self.markers
    }

    /// Index of the currently hovered marker, if any.
    pub fn hovered(&self) -> Option<usize> {
        self.hovered
    }

    /// Node id of the live tooltip, if any.
    pub fn tooltip_node(&self) -> Option<NodeId> {
        self.tooltip
    }

    pub fn x_scale(&self) -> &LinearScale {
        &self.x_scale
    }

    pub fn y_scale(&self) -> &LinearScale {
        &self.y_scale
    }

    /// Activate marker `index`: grow it to the hover radius at full opacity
    /// and show its tooltip. Any previously hovered marker is restored first
    /// (hover exclusivity). Out-of-range indices, re-entering the active
    /// marker, and stale views are all no-ops.
    pub fn hover_enter(&mut self, surface: &mut VectorSurface, index: usize) {
        if index >= self.markers.len() || self.hovered == Some(index) {
            return;
        }
        if let Some(prev) = self.hovered.take() {
            self.restore_marker(surface, prev);
            self.remove_tooltip(surface);
        }

        let marker = &self.markers[index];
        match surface.get_mut(marker.node) {
            Some(Shape::Circle { r, opacity, .. }) => {
                *r = self.hover_radius;
                *opacity = HOVER_OPACITY;
            }
            // Stale view: the surface has been re-rendered since this view
            // was produced. Leave the new scene alone.
            _ => return,
        }

        let text = (self.tooltip_format)(&marker.point);
        let node = surface.push(Shape::Text {
            x: marker.cx + TOOLTIP_OFFSET_X,
            y: marker.cy + TOOLTIP_OFFSET_Y,
            content: text,
            fill: self.color.clone(),
            size: TOOLTIP_SIZE,
            anchor: TextAnchor::Start,
            rotate: None,
        });
        self.tooltip = Some(node);
        self.hovered = Some(index);
    }

    /// Deactivate marker `index`: restore its resting radius/opacity and
    /// remove the tooltip. Only acts when `index` is the active marker, so
    /// double-leaving or leaving a never-hovered marker is a silent no-op.
    pub fn hover_leave(&mut self, surface: &mut VectorSurface, index: usize) {
        if self.hovered != Some(index) {
            return;
        }
        self.hovered = None;
        self.restore_marker(surface, index);
        self.remove_tooltip(surface);
    }

    /// Nearest marker whose center lies within the hover radius of the
    /// pointer, in surface coordinates. Linear scan: marker counts are tens,
    /// not millions.
    pub fn hit_test(&self, px: f64, py: f64) -> Option<usize> {
        let max_d2 = self.hover_radius * self.hover_radius;
        let mut best: Option<(usize, f64)> = None;
        for (i, m) in self.markers.iter().enumerate() {
            let dx = px - m.cx;
            let dy = py - m.cy;
            let d2 = dx * dx + dy * dy;
            if d2 <= max_d2 && best.map_or(true, |(_, bd2)| d2 < bd2) {
                best = Some((i, d2));
            }
        }
        best.map(|(i, _)| i)
    }

    /// Map a pointer position to the enter/leave transitions. Leave always
    /// fires before a subsequent enter for a different marker.
    pub fn pointer_moved(&mut self, surface: &mut VectorSurface, px: f64, py: f64) {
        let hit = self.hit_test(px, py);
        if hit == self.hovered {
            return;
        }
        if let Some(prev) = self.hovered {
            self.hover_leave(surface, prev);
        }
        if let Some(next) = hit {
            self.hover_enter(surface, next);
        }
    }

    fn restore_marker(&self, surface: &mut VectorSurface, index: usize) {
        if let Some(Shape::Circle { r, opacity, .. }) = surface.get_mut(self.markers[index].node) {
            *r = self.point_radius;
            *opacity = MARKER_OPACITY;
        }
    }

    fn remove_tooltip(&mut self, surface: &mut VectorSurface) {
        if let Some(node) = self.tooltip.take() {
            surface.remove(node);
        }
    }
}

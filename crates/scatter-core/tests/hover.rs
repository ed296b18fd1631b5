// File: crates/scatter-core/tests/hover.rs
// Purpose: Hover state machine: exclusivity, idempotent leave, dispatch, stale-view safety.

use scatter_core::{ChartConfig, DataPoint, ScatterChart, Shape, VectorSurface};

fn setup() -> (ScatterChart, ChartConfig) {
    let chart = ScatterChart::with_points(vec![
        DataPoint::new(2.0, 65.0, "A"),
        DataPoint::new(8.0, 95.0, "B"),
        DataPoint::new(4.0, 75.0, "C"),
    ]);
    (chart, ChartConfig::default())
}

fn count_tooltips(surface: &VectorSurface, view: &scatter_core::ChartView) -> usize {
    // Tooltips are the only nodes the view adds after render; count by id.
    view.tooltip_node()
        .and_then(|id| surface.get(id))
        .map_or(0, |_| 1)
}

fn marker_style(surface: &VectorSurface, view: &scatter_core::ChartView, index: usize) -> (f64, f64) {
    match surface.get(view.markers()[index].node) {
        Some(Shape::Circle { r, opacity, .. }) => (*r, *opacity),
        other => panic!("marker {index} resolved to {other:?}"),
    }
}

#[test]
fn enter_grows_marker_and_shows_tooltip() {
    let (chart, cfg) = setup();
    let mut surface = VectorSurface::new();
    let mut view = chart.render(&mut surface, &cfg).expect("render");
    let before = surface.len();

    view.hover_enter(&mut surface, 0);

    assert_eq!(view.hovered(), Some(0));
    assert_eq!(marker_style(&surface, &view, 0), (cfg.hover_radius, 1.0));
    assert_eq!(surface.len(), before + 1, "exactly one tooltip node added");

    let tooltip = view.tooltip_node().expect("tooltip exists");
    match surface.get(tooltip) {
        Some(Shape::Text { content, x, y, .. }) => {
            assert_eq!(content, "A: 65");
            let m = &view.markers()[0];
            assert_eq!(*x, m.cx + 10.0);
            assert_eq!(*y, m.cy - 10.0);
        }
        other => panic!("tooltip resolved to {other:?}"),
    }
}

#[test]
fn hover_is_exclusive_across_markers() {
    let (chart, cfg) = setup();
    let mut surface = VectorSurface::new();
    let mut view = chart.render(&mut surface, &cfg).expect("render");
    let before = surface.len();

    // Enter A then B with no intervening leave.
    view.hover_enter(&mut surface, 0);
    view.hover_enter(&mut surface, 1);

    assert_eq!(view.hovered(), Some(1));
    assert_eq!(surface.len(), before + 1, "at most one tooltip may exist");
    match surface.get(view.tooltip_node().unwrap()) {
        Some(Shape::Text { content, .. }) => assert_eq!(content, "B: 95"),
        other => panic!("tooltip resolved to {other:?}"),
    }
    // A is back at rest.
    assert_eq!(marker_style(&surface, &view, 0), (cfg.point_radius, 0.7));
    assert_eq!(marker_style(&surface, &view, 1), (cfg.hover_radius, 1.0));
}

#[test]
fn reentering_active_marker_is_a_noop() {
    let (chart, cfg) = setup();
    let mut surface = VectorSurface::new();
    let mut view = chart.render(&mut surface, &cfg).expect("render");

    view.hover_enter(&mut surface, 2);
    let tooltip = view.tooltip_node();
    view.hover_enter(&mut surface, 2);
    assert_eq!(view.tooltip_node(), tooltip, "tooltip must not be recreated");
}

#[test]
fn leave_is_idempotent() {
    let (chart, cfg) = setup();
    let mut surface = VectorSurface::new();
    let mut view = chart.render(&mut surface, &cfg).expect("render");
    let resting = surface.len();

    // Leave on a never-hovered marker.
    view.hover_leave(&mut surface, 1);
    assert_eq!(marker_style(&surface, &view, 1), (cfg.point_radius, 0.7));

    // Enter then double-leave.
    view.hover_enter(&mut surface, 1);
    view.hover_leave(&mut surface, 1);
    view.hover_leave(&mut surface, 1);

    assert_eq!(view.hovered(), None);
    assert_eq!(count_tooltips(&surface, &view), 0);
    assert_eq!(marker_style(&surface, &view, 1), (cfg.point_radius, 0.7));
    assert_eq!(surface.len(), resting, "surface back to its resting node count");
}

#[test]
fn out_of_range_indices_are_noops() {
    let (chart, cfg) = setup();
    let mut surface = VectorSurface::new();
    let mut view = chart.render(&mut surface, &cfg).expect("render");
    let before = surface.len();

    view.hover_enter(&mut surface, 99);
    view.hover_leave(&mut surface, 99);

    assert_eq!(view.hovered(), None);
    assert_eq!(surface.len(), before);
}

#[test]
fn pointer_dispatch_fires_leave_before_enter() {
    let (chart, cfg) = setup();
    let mut surface = VectorSurface::new();
    let mut view = chart.render(&mut surface, &cfg).expect("render");

    let (ax, ay) = (view.markers()[0].cx, view.markers()[0].cy);
    let (bx, by) = (view.markers()[1].cx, view.markers()[1].cy);

    // Over A.
    view.pointer_moved(&mut surface, ax + 1.0, ay - 1.0);
    assert_eq!(view.hovered(), Some(0));

    // Into the gap between markers.
    view.pointer_moved(&mut surface, (ax + bx) * 0.5, (ay + by) * 0.5);
    assert_eq!(view.hovered(), None);
    assert_eq!(count_tooltips(&surface, &view), 0);

    // Directly from the gap onto B; the A→B jump without a gap works too.
    view.pointer_moved(&mut surface, bx, by);
    assert_eq!(view.hovered(), Some(1));
    view.pointer_moved(&mut surface, ax, ay);
    assert_eq!(view.hovered(), Some(0));
    assert_eq!(marker_style(&surface, &view, 1), (cfg.point_radius, 0.7));
}

#[test]
fn stale_view_does_not_disturb_a_rerendered_scene() {
    let (chart, cfg) = setup();
    let mut surface = VectorSurface::new();
    let mut stale = chart.render(&mut surface, &cfg).expect("first render");

    // Re-render invalidates every node the stale view knows about.
    let fresh = chart.render(&mut surface, &cfg).expect("second render");
    let count = surface.len();

    stale.hover_enter(&mut surface, 0);
    stale.hover_leave(&mut surface, 0);

    assert_eq!(surface.len(), count, "stale view must leave the new scene alone");
    assert!(fresh.tooltip_node().is_none());
}

#[test]
fn custom_tooltip_format_is_used() {
    let (chart, mut cfg) = setup();
    cfg.tooltip_format = |p| format!("{}: {}%", p.label, p.y);
    let mut surface = VectorSurface::new();
    let mut view = chart.render(&mut surface, &cfg).expect("render");

    view.hover_enter(&mut surface, 1);
    match surface.get(view.tooltip_node().unwrap()) {
        Some(Shape::Text { content, .. }) => assert_eq!(content, "B: 95%"),
        other => panic!("tooltip resolved to {other:?}"),
    }
}

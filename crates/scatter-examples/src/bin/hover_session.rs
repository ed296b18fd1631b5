// File: crates/scatter-examples/src/bin/hover_session.rs
// Summary: Simulates a pointer sweep over the chart and prints the hover transitions.

use scatter_core::{Axis, ChartConfig, DataPoint, ScatterChart, VectorSurface};

fn main() {
    let mut chart = ScatterChart::with_points(vec![
        DataPoint::new(2.0, 65.0, "A"),
        DataPoint::new(4.0, 75.0, "C"),
        DataPoint::new(8.0, 95.0, "B"),
    ]);
    chart.x_axis = Axis::new("Hours");
    chart.y_axis = Axis::new("Score");

    let cfg = ChartConfig::default();
    let mut surface = VectorSurface::new();
    let mut view = chart.render(&mut surface, &cfg).expect("render");

    // Sweep the pointer left to right along the trend line's rough height.
    let mut last = None;
    for step in 0..=60 {
        let px = step as f64 * 10.0;
        let py = view
            .markers()
            .iter()
            .min_by(|a, b| (a.cx - px).abs().total_cmp(&(b.cx - px).abs()))
            .map(|m| m.cy)
            .unwrap_or(0.0);
        view.pointer_moved(&mut surface, px, py);
        if view.hovered() != last {
            match view.hovered() {
                Some(i) => println!("enter {} at x={px}", view.markers()[i].point.label),
                None => println!("leave at x={px}"),
            }
            last = view.hovered();
        }
    }

    let out = std::path::PathBuf::from("target/out/example_hover.svg");
    surface
        .write_svg(cfg.width, cfg.height, &out)
        .expect("write svg");
    println!("Wrote {} (final frame, hovered: {:?})", out.display(), view.hovered());
}

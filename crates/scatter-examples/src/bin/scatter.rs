// File: crates/scatter-examples/src/bin/scatter.rs
// Summary: Minimal example that renders a simple scatter chart to SVG.

use scatter_core::{Axis, ChartConfig, DataPoint, ScatterChart};

fn main() {
    let mut chart = ScatterChart::with_points(vec![
        DataPoint::new(1.0, 45.0, "Avery"),
        DataPoint::new(2.0, 52.0, "Blake"),
        DataPoint::new(4.0, 66.0, "Devon"),
        DataPoint::new(6.0, 79.0, "Finley"),
        DataPoint::new(8.0, 95.0, "Harper"),
    ]);
    chart.x_axis = Axis::new("Study Hours");
    chart.y_axis = Axis::new("Score");

    let cfg = ChartConfig::default();
    let out = std::path::PathBuf::from("target/out/example_scatter.svg");
    chart.render_to_svg(&cfg, &out).expect("render to svg");
    println!("Wrote {}", out.display());
}

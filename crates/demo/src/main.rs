// File: crates/demo/src/main.rs
// Summary: Demo loads labeled (x, y) CSV rows and renders resting + hovered scatter frames to SVG.

use anyhow::{Context, Result};
use scatter_core::{Axis, ChartConfig, DataPoint, ScatterChart, VectorSurface};
use std::path::{Path, PathBuf};

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    // Accept a CSV path from the CLI or fall back to the bundled sample set.
    let path = match std::env::args().nth(1) {
        Some(raw) => {
            let p = PathBuf::from(raw);
            anyhow::ensure!(p.exists(), "file not found: {}", p.display());
            p
        }
        None => {
            let p = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data/study_hours.csv");
            tracing::info!("no input given, using bundled sample {}", p.display());
            p
        }
    };

    let points = load_points_csv(&path)
        .with_context(|| format!("failed to load CSV '{}'", path.display()))?;
    tracing::info!("loaded {} points from {}", points.len(), path.display());
    anyhow::ensure!(!points.is_empty(), "no points loaded — check headers/delimiter.");

    let mut chart = ScatterChart::with_points(points);
    chart.x_axis = Axis::new("Study Hours");
    chart.y_axis = Axis::new("Score");

    let cfg = ChartConfig {
        // The sample's dependent variable is a percentage; the library
        // default deliberately carries no unit.
        tooltip_format: |p| format!("{}: {}%", p.label, p.y),
        ..ChartConfig::default()
    };

    // Resting frame.
    let out = out_name_with(&path, "scatter");
    chart.render_to_svg(&cfg, &out)?;
    tracing::info!("wrote {}", out.display());

    // Hovered frame: simulate a pointer over the highest-scoring point.
    let mut surface = VectorSurface::new();
    let mut view = chart.render(&mut surface, &cfg)?;
    let top = view
        .markers()
        .iter()
        .enumerate()
        .max_by(|(_, a), (_, b)| a.point.y.total_cmp(&b.point.y))
        .map(|(i, _)| i)
        .unwrap_or(0);
    view.hover_enter(&mut surface, top);
    let out_hover = out_name_with(&path, "scatter_hover");
    surface.write_svg(cfg.width, cfg.height, &out_hover)?;
    tracing::info!("wrote {}", out_hover.display());

    Ok(())
}

/// Produce output file name like target/out/chart_<stem>_<suffix>.svg
fn out_name_with(input: &Path, suffix: &str) -> PathBuf {
    let stem = input.file_stem().and_then(|s| s.to_str()).unwrap_or("chart");
    let mut out = PathBuf::from("target/out");
    std::fs::create_dir_all(&out).ok();
    out.push(format!("chart_{}_{}.svg", stem, suffix));
    out
}

/// Load labeled (x, y) rows from CSV. Headers are matched case-insensitively
/// against small alias lists; rows that fail to parse are skipped with a
/// warning. A missing label column falls back to the row number.
fn load_points_csv(path: &Path) -> Result<Vec<DataPoint>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr
        .headers()?
        .iter()
        .map(|h| h.to_lowercase())
        .collect::<Vec<_>>();
    tracing::debug!("headers: {headers:?}");

    let idx = |names: &[&str]| -> Option<usize> {
        for (i, h) in headers.iter().enumerate() {
            for want in names {
                if h == want {
                    return Some(i);
                }
            }
        }
        None
    };

    let i_x = idx(&["x", "hours", "study_hours", "independent"]);
    let i_y = idx(&["y", "score", "value", "dependent"]);
    let i_label = idx(&["label", "student", "name", "id"]);

    anyhow::ensure!(
        i_x.is_some() && i_y.is_some(),
        "could not find x/y columns among headers {headers:?}"
    );

    let mut out = Vec::new();
    for (row, rec) in rdr.records().enumerate() {
        let rec = rec?;
        let parse = |i: Option<usize>| -> Option<f64> {
            i.and_then(|ix| rec.get(ix)).and_then(|s| s.parse::<f64>().ok())
        };
        match (parse(i_x), parse(i_y)) {
            (Some(x), Some(y)) if x.is_finite() && y.is_finite() => {
                let label = i_label
                    .and_then(|ix| rec.get(ix))
                    .filter(|s| !s.is_empty())
                    .map(str::to_string)
                    .unwrap_or_else(|| format!("#{}", row + 1));
                out.push(DataPoint::new(x, y, label));
            }
            _ => tracing::warn!("skipping row {}: unparseable x/y", row + 1),
        }
    }
    Ok(out)
}

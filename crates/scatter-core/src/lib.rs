// File: crates/scatter-core/src/lib.rs
// Summary: Core library entry point; exports public API for chart construction, rendering, and hover.

pub mod chart;
pub mod point;
pub mod axis;
pub mod types;
pub mod scale;
pub mod scene;
pub mod view;
pub mod theme;
pub mod config;
pub mod error;

pub use chart::ScatterChart;
pub use point::DataPoint;
pub use axis::Axis;
pub use types::Margin;
pub use scale::{tick_label, tick_step, ticks, LinearScale};
pub use scene::{NodeId, Shape, TextAnchor, VectorSurface};
pub use view::{ChartView, MarkerState};
pub use theme::Theme;
pub use config::{ChartConfig, TooltipFormat};
pub use error::{ChartError, Result};

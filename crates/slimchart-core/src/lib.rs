// File: crates/slimchart-core/src/lib.rs
// Summary: Core library entry point; exports the public chart API.

pub mod chart;
pub mod color;
pub mod config;
pub mod error;
pub mod grid;
pub mod recording;
pub mod scale;
pub mod series;
pub mod surface;
pub mod types;

pub use chart::Chart;
pub use color::Color;
pub use config::ChartConfig;
pub use error::ChartError;
pub use recording::{DrawCall, RecordingSurface};
pub use scale::AxisScale;
pub use series::{ChartData, Dataset};
pub use surface::{DrawingSurface, TextAlign, TextBaseline};
pub use types::GraphArea;

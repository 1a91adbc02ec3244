// File: crates/slimchart-core/src/config.rs
// Summary: Render configuration: formatters, pickers, axis bounds, smoothing.

use crate::color::{random_color, Color};
use crate::error::{ChartError, Result};
use crate::series::Dataset;

/// Formats one x-axis label. `None` or an empty string skips that label's
/// tick and text entirely.
pub type XAxisFormatter = Box<dyn Fn(&str) -> Option<String>>;
/// Formats one y-axis row value, given the resolved axis maximum.
pub type YAxisFormatter = Box<dyn Fn(f64, f64) -> String>;
/// Picks a stroke color for a dataset; called once per dataset per draw.
pub type ColorPicker = Box<dyn Fn(&Dataset) -> Color>;
/// Picks a point marker size for a dataset; a non-positive size draws no
/// markers. Called once per dataset per draw.
pub type PointSizePicker = Box<dyn Fn(&Dataset) -> f64>;

/// Per-chart render configuration. Set once at construction; replace it
/// wholesale through [`crate::Chart::set_config`] to reconfigure between
/// draws.
pub struct ChartConfig {
    pub axis_line_width: f64,
    pub axis_line_color: Color,
    pub axis_text_color: Color,
    pub x_axis_formatter: XAxisFormatter,
    pub y_axis_formatter: YAxisFormatter,
    /// Explicit lower bound; unset defaults to the dataset minimum.
    pub y_axis_min: Option<f64>,
    /// Explicit upper bound; unset defaults to the rounded dataset maximum.
    pub y_axis_max: Option<f64>,
    pub y_axis_steps: usize,
    /// Full-width horizontal gridlines are drawn per y row when set.
    pub gridline_color: Option<Color>,
    pub dataset_line_width: f64,
    pub dataset_color_picker: ColorPicker,
    pub dataset_point_size_picker: PointSizePicker,
    /// Connect points with quadratic curves instead of straight segments.
    pub smooth: bool,
    /// Curvature divisor for smoothing; larger values flatten the curves.
    pub tension: f64,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            axis_line_width: 1.0,
            axis_line_color: Color::BLACK,
            axis_text_color: Color::BLACK,
            x_axis_formatter: Box::new(default_x_axis_formatter),
            y_axis_formatter: Box::new(default_y_axis_formatter),
            y_axis_min: None,
            y_axis_max: None,
            y_axis_steps: 5,
            gridline_color: None,
            dataset_line_width: 2.0,
            dataset_color_picker: Box::new(|_| random_color()),
            dataset_point_size_picker: Box::new(|_| 0.0),
            smooth: false,
            tension: 4.0,
        }
    }
}

impl ChartConfig {
    /// Reject configurations the renderer cannot draw with.
    pub(crate) fn validate(&self) -> Result<()> {
        if self.y_axis_steps == 0 {
            return Err(ChartError::Configuration(
                "y_axis_steps must be at least 1".into(),
            ));
        }
        if !(self.axis_line_width.is_finite() && self.axis_line_width > 0.0) {
            return Err(ChartError::Configuration(format!(
                "axis_line_width must be a positive number, got {}",
                self.axis_line_width
            )));
        }
        if !(self.dataset_line_width.is_finite() && self.dataset_line_width > 0.0) {
            return Err(ChartError::Configuration(format!(
                "dataset_line_width must be a positive number, got {}",
                self.dataset_line_width
            )));
        }
        if !(self.tension.is_finite() && self.tension > 0.0) {
            return Err(ChartError::Configuration(format!(
                "tension must be a positive number, got {}",
                self.tension
            )));
        }
        for (name, bound) in [("y_axis_min", self.y_axis_min), ("y_axis_max", self.y_axis_max)] {
            if let Some(v) = bound {
                if !v.is_finite() {
                    return Err(ChartError::Configuration(format!(
                        "{name} must be finite, got {v}"
                    )));
                }
            }
        }
        if let (Some(min), Some(max)) = (self.y_axis_min, self.y_axis_max) {
            if min >= max {
                return Err(ChartError::Configuration(format!(
                    "y_axis_min ({min}) must be below y_axis_max ({max})"
                )));
            }
        }
        Ok(())
    }
}

/// Default x formatter: echo the label.
pub fn default_x_axis_formatter(label: &str) -> Option<String> {
    Some(label.to_owned())
}

/// Default y formatter: precision tracks the axis ceiling's magnitude, and
/// zero renders blank so the origin row shows only its tick.
pub fn default_y_axis_formatter(value: f64, axis_max: f64) -> String {
    if value == 0.0 {
        String::new()
    } else if axis_max <= 0.1 {
        format!("{value:.2}")
    } else if axis_max <= 1.0 {
        format!("{value:.1}")
    } else if axis_max <= 10.0 {
        format!("{value:.1}")
    } else {
        format!("{value:.0}")
    }
}

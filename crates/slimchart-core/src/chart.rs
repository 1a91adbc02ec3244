// File: crates/slimchart-core/src/chart.rs
// Summary: Chart renderer: validation, resolution normalization, layout, axes, datasets.

use std::time::Instant;

use crate::config::ChartConfig;
use crate::error::{ChartError, Result};
use crate::grid::linspace;
use crate::scale::AxisScale;
use crate::series::ChartData;
use crate::surface::{DrawingSurface, TextAlign, TextBaseline};
use crate::types::{GraphArea, TICK_LEN};

/// Line chart renderer. Owns its configuration; borrows a drawing surface
/// for the duration of each draw call.
pub struct Chart {
    config: ChartConfig,
}

impl Chart {
    /// Build a chart, rejecting invalid configuration up front.
    pub fn new(config: ChartConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    /// Replace the configuration between draws, revalidating it. The old
    /// configuration stays in place when the new one is rejected.
    pub fn set_config(&mut self, config: ChartConfig) -> Result<()> {
        config.validate()?;
        self.config = config;
        Ok(())
    }

    /// Draw (or redraw) the chart. Safe to call repeatedly with fresh data;
    /// every call clears and redraws from scratch. Fails with
    /// [`ChartError::Validation`] before touching the surface when the data
    /// contains non-finite values.
    pub fn draw(&self, surface: &mut dyn DrawingSurface, data: &ChartData) -> Result<()> {
        validate_data(data)?;

        let start = Instant::now();

        let (physical_w, physical_h) = surface.physical_size();
        surface.clear_rect(0.0, 0.0, physical_w, physical_h);

        normalize_resolution(surface);

        let scale = AxisScale::resolve(
            self.config.y_axis_min,
            self.config.y_axis_max,
            data.extent(),
            self.config.y_axis_steps,
        );
        tracing::trace!(min = scale.min, max = scale.max, steps = scale.steps, "resolved y-axis scale");

        let (logical_w, logical_h) = surface.logical_size();
        let area = GraphArea::from_logical_size(logical_w, logical_h);
        let x_step = if data.labels.is_empty() {
            0.0
        } else {
            area.width() / data.labels.len() as f64
        };

        draw_axes(surface, &self.config, &area, &scale, x_step, data);
        draw_datasets(surface, &self.config, &area, &scale, x_step, data);

        tracing::debug!(
            datasets = data.datasets.len(),
            labels = data.labels.len(),
            elapsed = ?start.elapsed(),
            "chart drawn"
        );
        Ok(())
    }
}

// ---- helpers ----------------------------------------------------------------

/// Reject values the scale and mapping math cannot place.
fn validate_data(data: &ChartData) -> Result<()> {
    for (di, dataset) in data.datasets.iter().enumerate() {
        for (vi, &v) in dataset.values.iter().enumerate() {
            if !v.is_finite() {
                return Err(ChartError::Validation(format!(
                    "dataset {di} value {vi} is not finite ({v})"
                )));
            }
        }
    }
    Ok(())
}

/// Promote the backing buffer to the device's pixel density while keeping
/// the logical size fixed, then scale the coordinate system to match. Runs
/// at most once per surface; the surface's marker keeps redraws from
/// compounding the factor.
fn normalize_resolution(surface: &mut dyn DrawingSurface) {
    if surface.density_scaled() {
        return;
    }
    let (width, height) = surface.physical_size();
    let dpr = surface.device_pixel_ratio();
    surface.set_logical_size(width, height);
    surface.set_physical_size(width * dpr, height * dpr);
    surface.scale(dpr, dpr);
    surface.set_density_scaled();
}

/// Gridlines, axis lines, tick marks, and labels, under a half-pixel
/// translation so 1px strokes land on pixel centers.
fn draw_axes(
    surface: &mut dyn DrawingSurface,
    config: &ChartConfig,
    area: &GraphArea,
    scale: &AxisScale,
    x_step: f64,
    data: &ChartData,
) {
    surface.translate(0.5, 0.5);
    surface.set_line_width(config.axis_line_width);

    let rows = linspace(area.top, area.bottom, scale.steps + 1);

    // Horizontal gridlines sit under the axes; the bottom row is skipped
    // since it coincides with the x-axis line.
    if let Some(color) = config.gridline_color {
        surface.set_stroke_color(color);
        for &y in rows.iter().take(rows.len() - 1) {
            surface.begin_path();
            surface.move_to(area.left, y);
            surface.line_to(area.right, y);
            surface.stroke();
        }
    }

    surface.set_stroke_color(config.axis_line_color);
    surface.begin_path();
    surface.move_to(area.left, area.top);
    surface.line_to(area.left, area.bottom);
    surface.line_to(area.right, area.bottom);
    surface.stroke();

    surface.set_fill_color(config.axis_text_color);
    surface.set_text_baseline(TextBaseline::Top);
    surface.set_text_align(TextAlign::Center);

    for (i, label) in data.labels.iter().enumerate() {
        let x = (area.left + x_step * i as f64).round();
        let y = area.bottom;
        // A formatter yielding nothing suppresses the tick as well as the
        // text, so thinned label sets thin their ticks with them.
        let text = match (config.x_axis_formatter)(label) {
            Some(t) if !t.is_empty() => t,
            _ => continue,
        };
        surface.begin_path();
        surface.move_to(x, y);
        surface.line_to(x, y + TICK_LEN);
        surface.stroke();
        surface.fill_text(&text, x, y + TICK_LEN);
    }

    surface.set_text_baseline(TextBaseline::Middle);
    surface.set_text_align(TextAlign::End);

    for (&y, &value) in rows.iter().zip(scale.tick_values().iter()) {
        surface.begin_path();
        surface.move_to(area.left, y);
        surface.line_to(area.left - TICK_LEN, y);
        surface.stroke();

        let text = (config.y_axis_formatter)(value, scale.max);
        if !text.is_empty() {
            surface.fill_text(&text, area.left - TICK_LEN - 3.0, y);
        }
    }

    surface.translate(-0.5, -0.5);
}

/// Plot every dataset as a polyline (straight or smoothed) plus optional
/// point markers, stacked over the grid and axes.
fn draw_datasets(
    surface: &mut dyn DrawingSurface,
    config: &ChartConfig,
    area: &GraphArea,
    scale: &AxisScale,
    x_step: f64,
    data: &ChartData,
) {
    // No labels means no x anchors to place points on.
    if data.labels.is_empty() {
        return;
    }

    for dataset in &data.datasets {
        let color = (config.dataset_color_picker)(dataset);
        let point_size = (config.dataset_point_size_picker)(dataset);

        let points: Vec<(f64, f64)> = dataset
            .values
            .iter()
            .enumerate()
            .map(|(i, &v)| {
                let x = area.left + x_step * i as f64;
                let y = area.bottom - area.height() * scale.ratio(v);
                (x, y)
            })
            .collect();

        if points.is_empty() {
            continue;
        }

        surface.set_line_width(config.dataset_line_width);
        surface.set_stroke_color(color);
        surface.begin_path();
        if config.smooth && points.len() >= 2 {
            trace_smooth_path(surface, &points, config.tension);
        } else {
            trace_segment_path(surface, &points);
        }
        surface.stroke();

        if point_size > 0.0 {
            surface.set_fill_color(color);
            let half = point_size / 2.0;
            for &(x, y) in &points {
                surface.fill_rect(x - half, y - half, point_size, point_size);
            }
        }
    }
}

fn trace_segment_path(surface: &mut dyn DrawingSurface, points: &[(f64, f64)]) {
    let (x0, y0) = points[0];
    surface.move_to(x0, y0);
    for &(x, y) in points.iter().skip(1) {
        surface.line_to(x, y);
    }
}

/// Two quadratic curves per point pair, meeting at the segment midpoint.
/// Control points sit `dx / tension` inside each endpoint, so the curve
/// leaves and enters points horizontally.
fn trace_smooth_path(surface: &mut dyn DrawingSurface, points: &[(f64, f64)], tension: f64) {
    let (x0, y0) = points[0];
    surface.move_to(x0, y0);
    for pair in points.windows(2) {
        let (px, py) = pair[0];
        let (qx, qy) = pair[1];
        let dx = qx - px;
        let (mx, my) = ((px + qx) / 2.0, (py + qy) / 2.0);
        surface.quad_to(px + dx / tension, py, mx, my);
        surface.quad_to(qx - dx / tension, qy, qx, qy);
    }
}

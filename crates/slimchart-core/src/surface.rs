// File: crates/slimchart-core/src/surface.rs
// Summary: DrawingSurface capability trait the renderer draws against.

use crate::color::Color;

/// Horizontal anchoring for drawn text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAlign {
    Start,
    Center,
    End,
}

/// Vertical anchoring for drawn text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextBaseline {
    Top,
    Middle,
    Bottom,
}

/// Capability contract for the 2D surface a chart renders onto.
///
/// The renderer borrows a surface for the duration of each draw call and
/// issues these primitives against it; acquisition, lifecycle, and actual
/// rasterization belong to the backend. Coordinates are logical pixels once
/// the density scale transform has been applied.
///
/// Dimension semantics mirror a canvas: `logical_size` is the layout size,
/// `physical_size` the backing buffer. `density_scaled` is a one-time marker
/// the renderer uses to keep resolution normalization idempotent across
/// repeated draws.
pub trait DrawingSurface {
    /// Layout dimensions in logical pixels.
    fn logical_size(&self) -> (f64, f64);
    /// Backing buffer dimensions in physical pixels.
    fn physical_size(&self) -> (f64, f64);
    /// Physical pixels per logical pixel for the host display.
    fn device_pixel_ratio(&self) -> f64;
    fn set_logical_size(&mut self, width: f64, height: f64);
    fn set_physical_size(&mut self, width: f64, height: f64);

    /// Whether resolution normalization has already run on this surface.
    fn density_scaled(&self) -> bool;
    fn set_density_scaled(&mut self);

    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64);

    fn set_line_width(&mut self, width: f64);
    fn set_stroke_color(&mut self, color: Color);
    fn set_fill_color(&mut self, color: Color);

    fn begin_path(&mut self);
    fn move_to(&mut self, x: f64, y: f64);
    fn line_to(&mut self, x: f64, y: f64);
    /// Quadratic curve from the current point through control `(cx, cy)` to `(x, y)`.
    fn quad_to(&mut self, cx: f64, cy: f64, x: f64, y: f64);
    fn stroke(&mut self);

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64);

    fn set_text_align(&mut self, align: TextAlign);
    fn set_text_baseline(&mut self, baseline: TextBaseline);
    fn fill_text(&mut self, text: &str, x: f64, y: f64);

    /// Translate the coordinate system by `(dx, dy)`.
    fn translate(&mut self, dx: f64, dy: f64);
    /// Apply a coordinate scale factor on each axis.
    fn scale(&mut self, sx: f64, sy: f64);
}

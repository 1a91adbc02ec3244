// File: crates/slimchart-core/src/recording.rs
// Summary: Recording DrawingSurface backend; captures calls for tests, benches, and the demo.

use crate::color::Color;
use crate::surface::{DrawingSurface, TextAlign, TextBaseline};
use crate::types::{HEIGHT, WIDTH};

/// One recorded surface operation, in issue order.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCall {
    ClearRect { x: f64, y: f64, width: f64, height: f64 },
    SetLineWidth { width: f64 },
    SetStrokeColor { color: Color },
    SetFillColor { color: Color },
    BeginPath,
    MoveTo { x: f64, y: f64 },
    LineTo { x: f64, y: f64 },
    QuadTo { cx: f64, cy: f64, x: f64, y: f64 },
    Stroke,
    FillRect { x: f64, y: f64, width: f64, height: f64 },
    SetTextAlign { align: TextAlign },
    SetTextBaseline { baseline: TextBaseline },
    FillText { text: String, x: f64, y: f64 },
    Translate { dx: f64, dy: f64 },
    Scale { sx: f64, sy: f64 },
}

/// Surface that records every operation without rasterizing anything.
///
/// Backs the test suite (call-sequence assertions, determinism comparison)
/// and stands in for a real canvas in the demo and benchmarks.
pub struct RecordingSurface {
    logical: (f64, f64),
    physical: (f64, f64),
    dpr: f64,
    density_scaled: bool,
    calls: Vec<DrawCall>,
}

impl RecordingSurface {
    /// Surface with matching logical/physical dimensions and a 1.0 pixel ratio.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            logical: (width, height),
            physical: (width, height),
            dpr: 1.0,
            density_scaled: false,
            calls: Vec::new(),
        }
    }

    /// Surface simulating a high-density display.
    pub fn with_device_pixel_ratio(width: f64, height: f64, dpr: f64) -> Self {
        let mut s = Self::new(width, height);
        s.dpr = dpr;
        s
    }

    /// Recorded operations since construction or the last [`Self::clear_recording`].
    pub fn calls(&self) -> &[DrawCall] {
        &self.calls
    }

    /// Drop the recording, keeping dimensions and the density marker.
    pub fn clear_recording(&mut self) {
        self.calls.clear();
    }

    /// Count recorded calls matching a predicate.
    pub fn count(&self, pred: impl Fn(&DrawCall) -> bool) -> usize {
        self.calls.iter().filter(|c| pred(c)).count()
    }
}

impl Default for RecordingSurface {
    fn default() -> Self {
        Self::new(WIDTH, HEIGHT)
    }
}

impl DrawingSurface for RecordingSurface {
    fn logical_size(&self) -> (f64, f64) {
        self.logical
    }

    fn physical_size(&self) -> (f64, f64) {
        self.physical
    }

    fn device_pixel_ratio(&self) -> f64 {
        self.dpr
    }

    fn set_logical_size(&mut self, width: f64, height: f64) {
        self.logical = (width, height);
    }

    fn set_physical_size(&mut self, width: f64, height: f64) {
        self.physical = (width, height);
    }

    fn density_scaled(&self) -> bool {
        self.density_scaled
    }

    fn set_density_scaled(&mut self) {
        self.density_scaled = true;
    }

    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.calls.push(DrawCall::ClearRect { x, y, width, height });
    }

    fn set_line_width(&mut self, width: f64) {
        self.calls.push(DrawCall::SetLineWidth { width });
    }

    fn set_stroke_color(&mut self, color: Color) {
        self.calls.push(DrawCall::SetStrokeColor { color });
    }

    fn set_fill_color(&mut self, color: Color) {
        self.calls.push(DrawCall::SetFillColor { color });
    }

    fn begin_path(&mut self) {
        self.calls.push(DrawCall::BeginPath);
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.calls.push(DrawCall::MoveTo { x, y });
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.calls.push(DrawCall::LineTo { x, y });
    }

    fn quad_to(&mut self, cx: f64, cy: f64, x: f64, y: f64) {
        self.calls.push(DrawCall::QuadTo { cx, cy, x, y });
    }

    fn stroke(&mut self) {
        self.calls.push(DrawCall::Stroke);
    }

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.calls.push(DrawCall::FillRect { x, y, width, height });
    }

    fn set_text_align(&mut self, align: TextAlign) {
        self.calls.push(DrawCall::SetTextAlign { align });
    }

    fn set_text_baseline(&mut self, baseline: TextBaseline) {
        self.calls.push(DrawCall::SetTextBaseline { baseline });
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64) {
        self.calls.push(DrawCall::FillText { text: text.to_owned(), x, y });
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        self.calls.push(DrawCall::Translate { dx, dy });
    }

    fn scale(&mut self, sx: f64, sy: f64) {
        self.calls.push(DrawCall::Scale { sx, sy });
    }
}

// File: crates/slimchart-core/src/scale.rs
// Summary: Y-axis scale resolution: nice ceiling, range policy, value-to-ratio mapping.

use crate::grid::linspace;

/// Fallback axis minimum when there is no data to scan.
pub const DEFAULT_MIN: f64 = 0.0;
/// Fallback axis ceiling when there is no data, or the maximum is not a
/// positive finite number.
pub const DEFAULT_MAX: f64 = 100.0;

/// Buckets a normalized maximum snaps up to. Keeping the set small makes the
/// ceiling stable under small data changes.
const BUCKETS: [f64; 4] = [2.0, 3.0, 5.0, 10.0];

/// Round `max_value` up to a "nice" number relative to its order of
/// magnitude: the smallest of {2, 3, 5, 10} times `10^floor(log10(v))` that
/// is >= the value.
///
/// Non-positive and non-finite inputs fall back to [`DEFAULT_MAX`] so
/// `log10` is never taken of a value without a magnitude.
pub fn nice_ceiling(max_value: f64) -> f64 {
    if !max_value.is_finite() || max_value <= 0.0 {
        return DEFAULT_MAX;
    }
    let magnitude = max_value.log10().floor();
    let multiplier = 10f64.powi(magnitude as i32);
    let relative = max_value / multiplier;
    let snapped = BUCKETS
        .iter()
        .copied()
        .find(|&b| relative <= b)
        .unwrap_or(10.0);
    snapped * multiplier
}

/// Resolved value-axis range for one draw. Recomputed per call, never stored
/// between draws.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisScale {
    pub min: f64,
    pub max: f64,
    pub steps: usize,
}

impl AxisScale {
    /// Resolve the axis range from configured bounds and the dataset extent.
    ///
    /// Policy: bounds supplied by the caller win. With both set the range is
    /// used verbatim. Otherwise missing bounds fill from the scanned extent
    /// and the effective maximum is rounded up via [`nice_ceiling`]; the
    /// minimum stays raw, which keeps axes label-friendly at the top without
    /// padding the bottom. With no extent at all the range falls back to
    /// `[DEFAULT_MIN, DEFAULT_MAX]` unrounded.
    pub fn resolve(
        configured_min: Option<f64>,
        configured_max: Option<f64>,
        extent: Option<(f64, f64)>,
        steps: usize,
    ) -> Self {
        if let (Some(min), Some(max)) = (configured_min, configured_max) {
            return Self { min, max, steps };
        }
        let (min, max) = match extent {
            Some((data_min, data_max)) => (
                configured_min.unwrap_or(data_min),
                nice_ceiling(configured_max.unwrap_or(data_max)),
            ),
            None => (
                configured_min.unwrap_or(DEFAULT_MIN),
                configured_max.unwrap_or(DEFAULT_MAX),
            ),
        };
        Self { min, max, steps }
    }

    /// Normalized position of `value` in the range, 0 at `min`, 1 at `max`.
    /// A degenerate range maps everything to the mid-line.
    pub fn ratio(&self, value: f64) -> f64 {
        let range = self.max - self.min;
        if range.abs() < 1e-12 {
            return 0.5;
        }
        (value - self.min) / range
    }

    /// Tick values for `steps + 1` rows, from `max` at the top row down to
    /// `min` at the bottom row.
    pub fn tick_values(&self) -> Vec<f64> {
        linspace(self.max, self.min, self.steps + 1)
    }
}

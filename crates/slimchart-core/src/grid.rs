// File: crates/slimchart-core/src/grid.rs
// Summary: Simple grid/tick layout helpers.

/// Evenly spaced values from `start` to `end` inclusive. Works in either
/// direction, so tick values interpolate max-down-to-min with the same call
/// that lays out pixel rows top-to-bottom.
pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps < 2 {
        return vec![start, end];
    }
    let step = (end - start) / (steps as f64 - 1.0);
    (0..steps).map(|i| start + step * i as f64).collect()
}

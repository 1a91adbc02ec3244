// File: crates/slimchart-core/src/series.rs
// Summary: Chart data model: labeled x positions and positional datasets.

/// One plotted value sequence. A dataset has no identity beyond its position
/// in [`ChartData::datasets`]; color and point size derive from the
/// configured pickers.
#[derive(Clone, Debug, PartialEq)]
pub struct Dataset {
    pub values: Vec<f64>,
}

impl Dataset {
    pub fn new(values: Vec<f64>) -> Self {
        Self { values }
    }
}

/// Input to a draw call: categorical x-axis labels plus one or more datasets.
///
/// Contract: each dataset should hold exactly `labels.len()` values. A
/// mismatch renders misaligned rather than failing; this is a caller
/// contract, not a runtime check.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

impl ChartData {
    pub fn new(labels: Vec<String>, datasets: Vec<Dataset>) -> Self {
        Self { labels, datasets }
    }

    /// True min/max across every dataset value, or `None` when there are no
    /// values at all.
    pub fn extent(&self) -> Option<(f64, f64)> {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        let mut any = false;
        for dataset in &self.datasets {
            for &v in &dataset.values {
                min = min.min(v);
                max = max.max(v);
                any = true;
            }
        }
        if any {
            Some((min, max))
        } else {
            None
        }
    }
}

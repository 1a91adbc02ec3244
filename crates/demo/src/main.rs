// File: crates/demo/src/main.rs
// Summary: Demo loads labeled series from CSV (or synthesizes them) and draws
// into a recording surface, reporting the resolved scale and call counts.

use anyhow::{Context, Result};
use slimchart_core::scale::AxisScale;
use slimchart_core::{
    Chart, ChartConfig, ChartData, Color, Dataset, DrawCall, DrawingSurface, RecordingSurface,
};
use std::path::Path;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let data = match std::env::args().nth(1) {
        Some(path) => {
            println!("Using input file: {path}");
            load_labeled_csv(Path::new(&path))
                .with_context(|| format!("failed to load CSV '{path}'"))?
        }
        None => sample_data(),
    };
    println!(
        "Loaded {} labels x {} datasets",
        data.labels.len(),
        data.datasets.len()
    );

    let mut config = ChartConfig::default();
    config.gridline_color = Some(Color::from_hex("#e6e6eb").unwrap());
    config.dataset_point_size_picker = Box::new(|_| 4.0);
    config.smooth = true;
    let steps = config.y_axis_steps;
    let chart = Chart::new(config)?;

    // Report the range the renderer will resolve for this data.
    let scale = AxisScale::resolve(None, None, data.extent(), steps);
    println!(
        "Resolved y axis: [{:.4}, {:.4}] in {} steps",
        scale.min, scale.max, scale.steps
    );

    // Simulate a high-density display; the first draw normalizes it.
    let mut surface = RecordingSurface::with_device_pixel_ratio(1024.0, 640.0, 2.0);
    chart.draw(&mut surface, &data)?;

    let strokes = surface.count(|c| matches!(c, DrawCall::Stroke));
    let labels = surface.count(|c| matches!(c, DrawCall::FillText { .. }));
    let markers = surface.count(|c| matches!(c, DrawCall::FillRect { .. }));
    println!(
        "Recorded {} surface calls ({} strokes, {} labels, {} markers)",
        surface.calls().len(),
        strokes,
        labels,
        markers
    );
    println!(
        "Surface now {}x{} physical pixels",
        surface.physical_size().0,
        surface.physical_size().1
    );

    Ok(())
}

/// Load `label,value,...` rows; every numeric column becomes one dataset.
fn load_labeled_csv(path: &Path) -> Result<ChartData> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)?;

    let mut labels = Vec::new();
    let mut columns: Vec<Vec<f64>> = Vec::new();

    for (row, record) in rdr.records().enumerate() {
        let record = record.with_context(|| format!("row {row}"))?;
        let mut fields = record.iter();
        let label = fields
            .next()
            .with_context(|| format!("row {row}: missing label column"))?;
        labels.push(label.to_owned());

        for (col, field) in fields.enumerate() {
            let value: f64 = field
                .trim()
                .parse()
                .with_context(|| format!("row {row} column {}: '{field}'", col + 1))?;
            if columns.len() <= col {
                columns.resize_with(col + 1, Vec::new);
            }
            columns[col].push(value);
        }
    }

    anyhow::ensure!(!labels.is_empty(), "no rows loaded - check headers/delimiter");
    Ok(ChartData::new(labels, columns.into_iter().map(Dataset::new).collect()))
}

/// Twelve months of made-up figures, two series.
fn sample_data() -> ChartData {
    let labels = [
        "Jan", "Feb", "Mar", "Apr", "May", "Jun",
        "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect();

    let primary = (0..12)
        .map(|i| 40.0 + (i as f64 * 0.7).sin() * 25.0 + i as f64)
        .collect();
    let secondary = (0..12)
        .map(|i| 30.0 + (i as f64 * 0.4).cos() * 12.0)
        .collect();

    ChartData::new(labels, vec![Dataset::new(primary), Dataset::new(secondary)])
}

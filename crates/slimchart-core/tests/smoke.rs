// File: crates/slimchart-core/tests/smoke.rs
// Purpose: End-to-end draw against the recording surface: call sequence,
// determinism with injected pickers, and resolution normalization.

use slimchart_core::{
    Chart, ChartConfig, ChartData, Color, Dataset, DrawCall, DrawingSurface, RecordingSurface,
};

fn sample_data() -> ChartData {
    ChartData::new(
        vec!["Jan".into(), "Feb".into(), "Mar".into()],
        vec![Dataset::new(vec![3.5, 12.2, 6.8])],
    )
}

fn deterministic_config() -> ChartConfig {
    let mut config = ChartConfig::default();
    config.dataset_color_picker = Box::new(|_| Color::from_rgb(10, 20, 30));
    config
}

#[test]
fn draw_emits_clear_axes_labels_and_dataset() {
    let chart = Chart::new(deterministic_config()).unwrap();
    let mut surface = RecordingSurface::new(400.0, 300.0);

    chart.draw(&mut surface, &sample_data()).unwrap();

    let calls = surface.calls();
    assert!(!calls.is_empty());
    assert_eq!(
        calls[0],
        DrawCall::ClearRect { x: 0.0, y: 0.0, width: 400.0, height: 300.0 },
        "clear must come first"
    );

    // Graph area for 400x300: left 50, top 10, right 400, bottom 250.
    // The first x label lands on the axis origin, below the tick.
    assert!(calls.contains(&DrawCall::FillText { text: "Jan".into(), x: 50.0, y: 255.0 }));

    // 3 x labels plus 6 y rows (min 3.5 formats non-empty).
    assert_eq!(surface.count(|c| matches!(c, DrawCall::FillText { .. })), 9);

    // Strokes: axis polyline + 3 x ticks + 6 y ticks + 1 dataset.
    assert_eq!(surface.count(|c| matches!(c, DrawCall::Stroke)), 11);

    // Dataset line runs in the configured color.
    assert!(calls.contains(&DrawCall::SetStrokeColor { color: Color::from_rgb(10, 20, 30) }));
}

#[test]
fn repeated_draws_record_identical_calls() {
    let chart = Chart::new(deterministic_config()).unwrap();
    let mut surface = RecordingSurface::new(400.0, 300.0);
    let data = sample_data();

    // First draw performs one-time resolution normalization; discard it so
    // the compared draws start from identical surface state.
    chart.draw(&mut surface, &data).unwrap();
    surface.clear_recording();

    chart.draw(&mut surface, &data).unwrap();
    let first: Vec<DrawCall> = surface.calls().to_vec();
    surface.clear_recording();

    chart.draw(&mut surface, &data).unwrap();
    assert_eq!(first, surface.calls());
}

#[test]
fn resolution_normalization_runs_once() {
    let chart = Chart::new(deterministic_config()).unwrap();
    let mut surface = RecordingSurface::with_device_pixel_ratio(300.0, 200.0, 2.0);
    let data = sample_data();

    chart.draw(&mut surface, &data).unwrap();
    assert_eq!(surface.physical_size(), (600.0, 400.0));
    assert_eq!(surface.logical_size(), (300.0, 200.0));
    assert_eq!(surface.count(|c| matches!(c, DrawCall::Scale { .. })), 1);

    // A second draw must not compound the density factor.
    chart.draw(&mut surface, &data).unwrap();
    assert_eq!(surface.physical_size(), (600.0, 400.0));
    assert_eq!(surface.count(|c| matches!(c, DrawCall::Scale { .. })), 1);
}

#[test]
fn empty_datasets_draw_axes_without_panicking() {
    let chart = Chart::new(deterministic_config()).unwrap();
    let mut surface = RecordingSurface::new(400.0, 300.0);

    chart
        .draw(&mut surface, &ChartData::new(vec![], vec![]))
        .unwrap();

    // Axis polyline plus 6 y rows; no x labels, no dataset strokes.
    assert_eq!(surface.count(|c| matches!(c, DrawCall::Stroke)), 7);
}

#[test]
fn datasets_without_labels_are_skipped() {
    let chart = Chart::new(deterministic_config()).unwrap();
    let mut surface = RecordingSurface::new(400.0, 300.0);
    let data = ChartData::new(vec![], vec![Dataset::new(vec![1.0, 2.0, 3.0])]);

    chart.draw(&mut surface, &data).unwrap();

    // Only axis and y tick strokes; there is no x anchor for the points.
    assert_eq!(surface.count(|c| matches!(c, DrawCall::Stroke)), 7);
}

#[test]
fn x_formatter_returning_none_skips_tick_and_text() {
    let mut config = deterministic_config();
    // Thin every other label.
    config.x_axis_formatter = Box::new(|label| {
        if label == "Feb" {
            None
        } else {
            Some(label.to_owned())
        }
    });
    let chart = Chart::new(config).unwrap();
    let mut surface = RecordingSurface::new(400.0, 300.0);

    chart.draw(&mut surface, &sample_data()).unwrap();

    assert_eq!(
        surface.count(|c| matches!(c, DrawCall::FillText { text, .. } if text.as_str() == "Feb")),
        0
    );
    // One x tick dropped with its label: axis + 2 x ticks + 6 y ticks + dataset.
    assert_eq!(surface.count(|c| matches!(c, DrawCall::Stroke)), 10);
}

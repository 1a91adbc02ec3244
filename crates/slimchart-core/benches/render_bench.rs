// File: crates/slimchart-core/benches/render_bench.rs
// Purpose: Benchmark scale resolution and full draws against the recording surface.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use slimchart_core::scale::nice_ceiling;
use slimchart_core::{Chart, ChartConfig, ChartData, Color, Dataset, RecordingSurface};

fn build_data(n: usize) -> ChartData {
    let labels = (0..n).map(|i| i.to_string()).collect();
    let values = (0..n)
        .map(|i| (i as f64 * 0.01).sin() * 10.0 + (i as f64 * 0.0001))
        .collect();
    ChartData::new(labels, vec![Dataset::new(values)])
}

fn bench_ceiling(c: &mut Criterion) {
    c.bench_function("nice_ceiling", |b| {
        b.iter(|| {
            for v in [0.07, 3.4, 12.2, 950.0, 123456.0] {
                black_box(nice_ceiling(black_box(v)));
            }
        });
    });
}

fn bench_draw(c: &mut Criterion) {
    let mut group = c.benchmark_group("draw_recording");
    for &n in &[1_000usize, 10_000usize] {
        group.bench_function(format!("points_{n}"), |b| {
            let mut config = ChartConfig::default();
            config.dataset_color_picker = Box::new(|_| Color::from_rgb(64, 160, 255));
            let chart = Chart::new(config).unwrap();
            let data = build_data(n);
            let mut surface = RecordingSurface::new(1024.0, 640.0);
            b.iter(|| {
                surface.clear_recording();
                chart.draw(&mut surface, &data).unwrap();
                black_box(surface.calls().len());
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_ceiling, bench_draw);
criterion_main!(benches);

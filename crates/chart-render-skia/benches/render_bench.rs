use anyhow::Result;
use chart_core::config::BarChartConfig;
use chart_core::{bar, ChartOption};
use chart_render_skia::{Render, RenderOptions};
use criterion::{criterion_group, criterion_main, Criterion, black_box};

fn build_bar_option(n: usize) -> ChartOption {
    let config = BarChartConfig {
        categories: (0..n).map(|i| format!("C{i}")).collect(),
        values: (0..n).map(|i| (i as f64 * 0.3).sin() * 10.0 + 12.0).collect(),
        ..BarChartConfig::default()
    };
    bar::build_option(&config)
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_png_bytes");
    for &n in &[10usize, 200usize] {
        group.bench_function(format!("bar_{n}"), |b| {
            let option = build_bar_option(n);
            let mut opts = RenderOptions::default();
            opts.draw_labels = false;
            b.iter(|| -> Result<()> {
                let bytes = option.render_to_png_bytes(&opts)?;
                black_box(bytes);
                Ok(())
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_render);
criterion_main!(benches);

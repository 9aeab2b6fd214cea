use criterion::{criterion_group, criterion_main, Criterion, black_box};
use pricing_core::{sample, ChartLayout, PricingChart, PricingType, RenderOptions};

fn bench_layout(c: &mut Criterion) {
    let chart = PricingChart::new(sample::types_with_deltas(), sample::random(5_000, 3));
    let mut legend = chart.legend_state();
    legend.hover_enter(PricingType::City);
    let opts = RenderOptions { hover_index: Some(2_500), ..RenderOptions::default() };

    c.bench_function("layout_5000_points", |b| {
        b.iter(|| black_box(ChartLayout::compute(&chart, &legend, &opts)))
    });
    c.bench_function("nearest_index", |b| {
        let layout = ChartLayout::compute(&chart, &legend, &opts);
        b.iter(|| black_box(layout.nearest_index(black_box(400.0))))
    });
}

criterion_group!(benches, bench_layout);
criterion_main!(benches);

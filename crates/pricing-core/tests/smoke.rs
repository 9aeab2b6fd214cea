// File: crates/pricing-core/tests/smoke.rs
// Purpose: Basic end-to-end render smoke test writing a PNG.

use pricing_core::{sample, ChartEngine, ChartLayout, PricingChart, PricingType, RenderOptions};

#[test]
fn render_smoke_png() {
    let chart = PricingChart::new(sample::default_types(), sample::fixture().expect("fixture"));

    let opts = RenderOptions::default();
    let out = std::path::PathBuf::from("target/test_out/smoke.png");
    std::fs::create_dir_all(out.parent().unwrap()).unwrap();

    chart.render_to_png(&opts, &out).expect("render should succeed");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");

    // Also verify in-memory API works
    let bytes = chart.render_to_png_bytes(&opts).expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");
}

#[test]
fn render_empty_chart() {
    let chart = PricingChart::new(sample::default_types(), Vec::new());
    let bytes = chart.render_to_png_bytes(&RenderOptions::default()).expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]));
}

#[test]
fn precomputed_layout_renders_the_same_image() {
    let chart = PricingChart::new(sample::default_types(), sample::fixture().expect("fixture"));
    let mut legend = chart.legend_state();
    legend.hover_enter(PricingType::District);
    let opts = RenderOptions { hover_index: Some(4), ..RenderOptions::default() };
    let engine = ChartEngine::load();

    let layout = ChartLayout::compute(&chart, &legend, &opts);
    let from_layout = engine.render_layout_to_png_bytes(&layout, &opts).expect("layout bytes");
    let from_chart = engine.render_to_png_bytes(&chart, &legend, &opts).expect("chart bytes");

    let a = image::load_from_memory(&from_layout).expect("decode").to_rgba8();
    let b = image::load_from_memory(&from_chart).expect("decode").to_rgba8();
    assert_eq!(a.dimensions(), (opts.width as u32, opts.height as u32));
    assert_eq!(a.as_raw(), b.as_raw());
}

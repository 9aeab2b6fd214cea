// File: crates/pricing-core/tests/rgba.rs
// Purpose: Validate RGBA rendering buffer shape and a few pixels.

use pricing_core::{ChartEngine, DataPoint, LoadState, PricingChart, PricingType, RenderOptions, SeriesDescriptor};

#[test]
fn render_rgba8_buffer() {
    let chart = PricingChart::new(
        vec![SeriesDescriptor::new(PricingType::City, "#000")],
        vec![
            DataPoint::new(0.0).with(PricingType::City, 0.0),
            DataPoint::new(4.0).with(PricingType::City, 4.0),
        ],
    );

    let mut opts = RenderOptions::default();
    opts.draw_labels = false; // avoid font variance
    opts.draw_legend = false;
    let engine = ChartEngine::load();
    let (px, w, h, stride) = engine
        .render_to_rgba8(&chart, &chart.legend_state(), &opts)
        .expect("rgba render");
    assert_eq!(w as usize * h as usize * 4, px.len());
    assert_eq!(stride, (w as usize) * 4);

    // Top-left pixel is opaque white background
    assert_eq!(&px[0..4], &[255, 255, 255, 255]);
}

#[test]
fn load_state_transitions_to_ready() {
    let state = LoadState::default();
    assert!(!state.is_ready());
    assert!(state.engine().is_none());

    let state = LoadState::Ready(std::rc::Rc::new(ChartEngine::load()));
    assert!(state.is_ready());
    assert!(state.engine().is_some());
}

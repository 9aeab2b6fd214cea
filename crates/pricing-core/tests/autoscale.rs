// File: crates/pricing-core/tests/autoscale.rs
// Purpose: Validate data-driven axis ranges over active series only.

use pricing_core::{DataPoint, PricingChart, PricingType, SeriesDescriptor, ViewState};

fn chart() -> PricingChart {
    PricingChart::new(
        vec![
            SeriesDescriptor::new(PricingType::District, "#f00").named("District"),
            SeriesDescriptor::new(PricingType::City, "#00f").named("City"),
        ],
        vec![
            DataPoint::new(10.0).with(PricingType::District, 100.0).with(PricingType::City, 1_000.0),
            DataPoint::new(20.0).with(PricingType::District, 300.0),
            DataPoint::new(50.0).with(PricingType::City, 2_000.0),
        ],
    )
}

#[test]
fn autoscale_spans_all_active_series() {
    let chart = chart();
    let view = ViewState::from_chart(&chart, &chart.legend_state());
    assert_eq!((view.x_min, view.x_max), (10.0, 50.0));
    assert_eq!((view.y_min, view.y_max), (100.0, 2_000.0));

    let (x, y) = view.axes(8, 5);
    assert_eq!((x.min, x.max), (10.0, 50.0));
    // nice domain covers the data
    assert!(y.min <= 100.0 && y.max >= 2_000.0);
}

#[test]
fn hidden_series_do_not_stretch_the_value_axis() {
    let chart = chart();
    let mut legend = chart.legend_state();
    legend.toggle(PricingType::City);
    let view = ViewState::from_chart(&chart, &legend);
    assert_eq!((view.y_min, view.y_max), (100.0, 300.0));
    // date range still covers every record
    assert_eq!((view.x_min, view.x_max), (10.0, 50.0));
}

#[test]
fn empty_data_falls_back_to_default_ranges() {
    let chart = PricingChart::new(vec![SeriesDescriptor::new(PricingType::City, "#000")], Vec::new());
    let view = ViewState::from_chart(&chart, &chart.legend_state());
    assert_eq!((view.x_min, view.x_max), (0.0, 1.0));
    assert_eq!((view.y_min, view.y_max), (0.0, 100.0));
}

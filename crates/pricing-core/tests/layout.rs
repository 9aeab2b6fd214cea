// File: crates/pricing-core/tests/layout.rs
// Purpose: Pixel layout: line segments and gaps, ticks, stripes, hover lookup.

use pricing_core::format::format_price_with_divider;
use pricing_core::{sample, ChartLayout, DataPoint, PricingChart, PricingType, RenderOptions, SeriesDescriptor};

fn close(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-3
}

#[test]
fn extreme_values_still_lay_out() {
    let data = vec![
        DataPoint::new(1.0).with(PricingType::City, -1.7e308),
        DataPoint::new(2.0).with(PricingType::City, 1.7e308),
    ];
    let chart = PricingChart::new(vec![SeriesDescriptor::new(PricingType::City, "#000")], data);
    let layout = ChartLayout::compute(&chart, &chart.legend_state(), &RenderOptions::default());

    assert_eq!(layout.y_ticks.len(), 5);
    let line = layout.line(PricingType::City).expect("city line");
    let pts = &line.segments[0];
    assert!(close(pts[0].1, layout.plot.bottom as f32));
    assert!(close(pts[1].1, layout.plot.top as f32));
}

#[test]
fn two_point_city_line_and_value_labels() {
    let types: Vec<SeriesDescriptor> =
        serde_json::from_str(r##"[{"typeName":"city","color":"#000"}]"##).expect("types");
    let data: Vec<DataPoint> =
        serde_json::from_str(r#"[{"date":1,"city":5000},{"date":2,"city":6000}]"#).expect("data");
    let chart = PricingChart::new(types, data);
    let opts = RenderOptions::default();
    let layout = ChartLayout::compute(&chart, &chart.legend_state(), &opts);

    let city = layout.line(PricingType::City).expect("city line");
    assert_eq!(city.segments.len(), 1);
    assert_eq!(city.segments[0].len(), 2);

    // 5000 and 6000 are the ends of the value domain
    assert_eq!((layout.y_axis.min, layout.y_axis.max), (5000.0, 6000.0));
    let (p0, p1) = (city.segments[0][0], city.segments[0][1]);
    assert!(close(p0.0, layout.plot.left as f32));
    assert!(close(p1.0, layout.plot.right as f32));
    assert!(close(p0.1, layout.plot.bottom as f32));
    assert!(close(p1.1, layout.plot.top as f32));

    assert_eq!(format_price_with_divider(5000.0, &opts.divider), "5 000");
    assert_eq!(layout.y_ticks.first().map(|t| t.label.as_str()), Some("5 000"));
    assert_eq!(layout.y_ticks.last().map(|t| t.label.as_str()), Some("6 000"));
}

#[test]
fn missing_values_break_the_line() {
    let chart = PricingChart::new(
        vec![SeriesDescriptor::new(PricingType::City, "#000")],
        vec![
            DataPoint::new(1.0).with(PricingType::City, 100.0),
            DataPoint::new(2.0).with(PricingType::City, 200.0),
            DataPoint::new(3.0),
            DataPoint::new(4.0).with(PricingType::City, 300.0),
            DataPoint::new(5.0).with(PricingType::City, 400.0),
        ],
    );
    let mut opts = RenderOptions::default();
    let layout = ChartLayout::compute(&chart, &chart.legend_state(), &opts);
    let city = layout.line(PricingType::City).unwrap();
    assert_eq!(city.segments.len(), 2);
    assert_eq!(city.point_count(), 4);

    // the gap never becomes a synthetic zero: no point sits below the 100 line
    let y_of_100 = city.segments[0][0].1;
    assert!(city.segments.iter().flatten().all(|&(_, y)| y <= y_of_100 + 1e-3));

    opts.connect_gaps = true;
    let layout = ChartLayout::compute(&chart, &chart.legend_state(), &opts);
    let city = layout.line(PricingType::City).unwrap();
    assert_eq!(city.segments.len(), 1);
    assert_eq!(city.point_count(), 4);
}

#[test]
fn hidden_series_are_not_laid_out() {
    let chart = PricingChart::new(sample::default_types(), sample::fixture().unwrap());
    let mut legend = chart.legend_state();
    legend.toggle(PricingType::District);
    legend.hover_enter(PricingType::City);
    let layout = ChartLayout::compute(&chart, &legend, &RenderOptions::default());

    let drawn: Vec<_> = layout.lines.iter().map(|l| l.type_name).collect();
    assert_eq!(drawn, vec![PricingType::City, PricingType::ObjectId]);
    assert_eq!(layout.line(PricingType::City).unwrap().opacity, 1.0);
    assert_eq!(layout.line(PricingType::ObjectId).unwrap().opacity, 0.5);
}

#[test]
fn time_axis_keeps_first_and_last_labels() {
    let chart = PricingChart::new(sample::default_types(), sample::fixture().unwrap());
    let mut opts = RenderOptions::default();
    opts.width = 240; // too narrow for all eight labels
    let layout = ChartLayout::compute(&chart, &chart.legend_state(), &opts);

    let first_date = chart.data.first().unwrap().date;
    let last_date = chart.data.last().unwrap().date;
    assert_eq!(layout.x_ticks.len(), 8);
    assert_eq!(layout.x_ticks[0].value, first_date);
    assert!((layout.x_ticks[7].value - last_date).abs() < 1.0);
    assert!(layout.x_ticks[0].show_label);
    assert!(layout.x_ticks[7].show_label);
    assert!(layout.x_ticks.iter().any(|t| !t.show_label));
}

#[test]
fn stripes_alternate_between_grid_lines() {
    let chart = PricingChart::new(sample::default_types(), sample::fixture().unwrap());
    let layout = ChartLayout::compute(&chart, &chart.legend_state(), &RenderOptions::default());
    assert_eq!(layout.stripes.len(), layout.y_ticks.len() - 1);
    for (i, s) in layout.stripes.iter().enumerate() {
        assert_eq!(s.fill, i % 2);
        assert!(s.top < s.bottom);
    }
}

#[test]
fn nearest_index_follows_the_pointer() {
    let chart = PricingChart::new(sample::default_types(), sample::fixture().unwrap());
    let layout = ChartLayout::compute(&chart, &chart.legend_state(), &RenderOptions::default());
    let last = chart.data.len() - 1;

    assert_eq!(layout.nearest_index(layout.plot.left as f32), Some(0));
    assert_eq!(layout.nearest_index(layout.plot.right as f32), Some(last));
    assert_eq!(layout.nearest_index(layout.plot.left as f32 - 10.0), None);
    assert_eq!(layout.nearest_index(layout.plot.right as f32 + 10.0), None);
}

#[test]
fn hover_builds_tooltip_and_dots_for_solid_lines() {
    let mut types = sample::default_types();
    types.push(SeriesDescriptor::new(PricingType::AddCity, "rgb(41, 143, 202)").named("City change").dashed());
    let data = vec![
        DataPoint::new(1_609_718_400_000.0)
            .with(PricingType::City, 5_000.0)
            .with(PricingType::AddCity, 120.0),
        DataPoint::new(1_610_323_200_000.0)
            .with(PricingType::City, 6_000.0)
            .with(PricingType::AddCity, 150.0),
    ];
    let chart = PricingChart::new(types, data);
    let mut opts = RenderOptions::default();
    opts.hover_index = Some(1);
    let layout = ChartLayout::compute(&chart, &chart.legend_state(), &opts);

    let hover = layout.hover.as_ref().expect("hover");
    assert_eq!(hover.index, 1);
    let tip = hover.tooltip.as_ref().expect("tooltip");
    assert_eq!(tip.label, "11 January 2021");
    assert_eq!(tip.entries.len(), 2);

    assert!(layout.line(PricingType::City).unwrap().active_dot.is_some());
    assert!(layout.line(PricingType::AddCity).unwrap().active_dot.is_none());
    // no value for the district at that date
    assert!(layout.line(PricingType::District).unwrap().active_dot.is_none());
}

#[test]
fn out_of_range_hover_is_ignored() {
    let chart = PricingChart::new(sample::default_types(), sample::fixture().unwrap());
    let mut opts = RenderOptions::default();
    opts.hover_index = Some(chart.data.len());
    let layout = ChartLayout::compute(&chart, &chart.legend_state(), &opts);
    assert!(layout.hover.is_none());
}

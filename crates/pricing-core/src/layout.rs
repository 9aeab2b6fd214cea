// File: crates/pricing-core/src/layout.rs
// Summary: Renderer-agnostic chart layout: plot rect, ticks, stripes, line segments and hover state in pixels.

use crate::axis::{approx_text_width, preserve_start_end, Axis};
use crate::color::Rgb;
use crate::data::segments;
use crate::format::{format_day_month, format_price_with_divider};
use crate::geometry::RectI32;
use crate::grid::{stripes, Stripe};
use crate::legend::{LegendItem, LegendState};
use crate::scale::{TimeScale, ValueScale};
use crate::series::PricingType;
use crate::tooltip::{self, Tooltip};
use crate::types::{FONT_SIZE, MIN_TICK_GAP};
use crate::view::ViewState;
use crate::{PricingChart, RenderOptions};

#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
    pub value: f64,
    /// Position along the axis (x for the time axis, y for the value axis).
    pub px: f32,
    pub label: String,
    /// False when the label was thinned out to avoid overlap.
    pub show_label: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LineLayout {
    pub type_name: PricingType,
    pub rgb: Rgb,
    pub opacity: f32,
    pub dashed: bool,
    /// Polylines in pixel space; a gap in the data starts a new one.
    pub segments: Vec<Vec<(f32, f32)>>,
    /// Marker at the hovered date (solid series only).
    pub active_dot: Option<(f32, f32)>,
}

impl LineLayout {
    pub fn point_count(&self) -> usize {
        self.segments.iter().map(Vec::len).sum()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct HoverLayout {
    pub index: usize,
    pub x_px: f32,
    pub tooltip: Option<Tooltip>,
}

#[derive(Clone, Debug)]
pub struct ChartLayout {
    pub width: i32,
    pub height: i32,
    pub plot: RectI32,
    pub view: ViewState,
    pub x_axis: Axis,
    pub y_axis: Axis,
    pub x_ticks: Vec<Tick>,
    pub y_ticks: Vec<Tick>,
    pub stripes: Vec<Stripe>,
    pub lines: Vec<LineLayout>,
    pub legend: Vec<LegendItem>,
    pub hover: Option<HoverLayout>,
    time_scale: TimeScale,
    dates: Vec<f64>,
}

impl ChartLayout {
    pub fn compute(chart: &PricingChart, legend: &LegendState, opts: &RenderOptions) -> Self {
        let plot = RectI32::from_ltrb(
            opts.insets.left as i32,
            opts.insets.top as i32,
            (opts.width - opts.insets.right as i32).max(opts.insets.left as i32 + 1),
            (opts.height - opts.insets.bottom as i32).max(opts.insets.top as i32 + 1),
        );
        let (l, t, r, b) = (plot.left as f32, plot.top as f32, plot.right as f32, plot.bottom as f32);

        let view = ViewState::from_chart(chart, legend);
        let (x_axis, y_axis) = view.axes(opts.x_tick_count, opts.y_tick_count);
        let xs = TimeScale::new(l, r, x_axis.min, x_axis.max);
        let ys = ValueScale::new_linear(t, b, y_axis.min, y_axis.max);

        let x_ticks = label_ticks(
            x_axis.ticks().into_iter().map(|v| (v, xs.to_px(v), format_day_month(v))),
            |px, label| {
                let half = approx_text_width(label, FONT_SIZE) * 0.5;
                (px - half, px + half)
            },
        );
        let y_ticks = label_ticks(
            y_axis
                .ticks()
                .into_iter()
                .map(|v| (v, ys.to_px(v), format_price_with_divider(v, &opts.divider))),
            // screen y grows downwards while values grow upwards
            |px, _| (-px - FONT_SIZE * 0.5, -px + FONT_SIZE * 0.5),
        );
        let stripe_ys: Vec<f32> = y_ticks.iter().map(|t| t.px).collect();

        let hover_index = opts.hover_index.filter(|&i| i < chart.data.len());
        let hover_point = hover_index.map(|i| &chart.data[i]);

        let lines = legend
            .active()
            .map(|p| {
                let t = p.type_name();
                let segments: Vec<Vec<(f32, f32)>> = segments(&chart.data, t, opts.connect_gaps)
                    .into_iter()
                    .map(|run| run.into_iter().map(|(x, y)| (xs.to_px(x), ys.to_px(y))).collect())
                    .collect();
                let active_dot = match hover_point {
                    Some(pt) if !p.descriptor.dashed => pt.value(t).map(|v| (xs.to_px(pt.date), ys.to_px(v))),
                    _ => None,
                };
                LineLayout {
                    type_name: t,
                    rgb: p.descriptor.rgb(),
                    opacity: p.opacity,
                    dashed: p.descriptor.dashed,
                    segments,
                    active_dot,
                }
            })
            .collect();

        let hover = hover_index.map(|index| HoverLayout {
            index,
            x_px: xs.to_px(chart.data[index].date),
            tooltip: tooltip::build(legend.types(), &chart.data[index], &opts.divider),
        });

        log::debug!(
            "layout {}x{}: {} lines, {} x ticks, {} y ticks",
            opts.width,
            opts.height,
            legend.active().count(),
            x_ticks.len(),
            y_ticks.len()
        );

        Self {
            width: opts.width,
            height: opts.height,
            plot,
            view,
            x_axis,
            y_axis,
            x_ticks,
            y_ticks,
            stripes: stripes(&stripe_ys),
            lines,
            legend: legend.items(),
            hover,
            time_scale: xs,
            dates: chart.data.iter().map(|p| p.date).collect(),
        }
    }

    pub fn line(&self, t: PricingType) -> Option<&LineLayout> {
        self.lines.iter().find(|l| l.type_name == t)
    }

    /// Index of the data point whose date is closest to pixel column `px`.
    /// `None` outside the plot area or without data.
    pub fn nearest_index(&self, px: f32) -> Option<usize> {
        if px < self.plot.left as f32 || px > self.plot.right as f32 {
            return None;
        }
        let target = self.time_scale.from_px(px);
        self.dates
            .iter()
            .enumerate()
            .filter(|(_, d)| d.is_finite())
            .map(|(i, &d)| (i, (d - target).abs()))
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(i, _)| i)
    }
}

fn label_ticks(
    ticks: impl Iterator<Item = (f64, f32, String)>,
    span_of: impl Fn(f32, &str) -> (f32, f32),
) -> Vec<Tick> {
    let mut ticks: Vec<Tick> = ticks
        .map(|(value, px, label)| Tick { value, px, label, show_label: true })
        .collect();
    let spans: Vec<(f32, f32)> = ticks.iter().map(|t| span_of(t.px, &t.label)).collect();
    for (tick, keep) in ticks.iter_mut().zip(preserve_start_end(&spans, MIN_TICK_GAP)) {
        tick.show_label = keep;
    }
    ticks
}

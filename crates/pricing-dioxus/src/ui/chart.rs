// File: crates/pricing-dioxus/src/ui/chart.rs
// Summary: DynamicPricing component: owns legend state, loads the engine once, renders the chart.

use std::rc::Rc;

use base64::Engine as _;
use dioxus::prelude::*;
use pricing_core::{
    ChartEngine, ChartLayout, DataPoint, LegendState, LoadState, PricingChart, PricingType,
    SeriesDescriptor, WidgetConfig,
};

use crate::styles::{tooltip_left, ROOT_HEIGHT_PX, STYLESHEET};
use super::{CustomizedLegend, CustomizedTooltip};

#[derive(Props, Clone, PartialEq)]
pub struct DynamicPricingProps {
    pub types: Vec<SeriesDescriptor>,
    pub data: Vec<DataPoint>,
    #[props(default)]
    pub config: WidgetConfig,
}

#[component]
pub fn DynamicPricing(props: DynamicPricingProps) -> Element {
    let mut legend = use_signal(|| LegendState::new(&props.types));
    let mut hover = use_signal(|| Option::<usize>::None);

    // New series set: start over with everything visible and nothing hovered.
    use_effect(use_reactive((&props.types,), move |(types,)| {
        legend.write().replace_types(&types);
        hover.set(None);
    }));

    let engine = use_resource(|| async move { Rc::new(ChartEngine::load_async().await) });
    let state = match engine.cloned() {
        Some(e) => LoadState::Ready(e),
        None => LoadState::Loading,
    };

    let Some(engine) = state.engine() else {
        return rsx! {
            style { "{STYLESHEET}" }
            div { class: "dp-root", style: "height: {ROOT_HEIGHT_PX}px;",
                div { class: "dp-loader", "Loading..." }
            }
        };
    };

    let chart = PricingChart::new(props.types.clone(), props.data.clone());
    let mut opts = props.config.render_options();
    opts.draw_legend = false;
    opts.draw_tooltip = false;
    opts.hover_index = hover();

    let legend_state: LegendState = legend.cloned();
    let layout = ChartLayout::compute(&chart, &legend_state, &opts);
    let img_src = match engine.render_layout_to_png_bytes(&layout, &opts) {
        Ok(bytes) => Some(format!(
            "data:image/png;base64,{}",
            base64::engine::general_purpose::STANDARD.encode(bytes)
        )),
        Err(err) => {
            log::error!("chart render failed: {err}");
            None
        }
    };

    let tooltip = layout
        .hover
        .as_ref()
        .and_then(|h| h.tooltip.clone().map(|t| (t, tooltip_left(h.x_px, opts.width as f32))));
    let items = legend_state.items();
    let (width, height) = (opts.width, opts.height);

    rsx! {
        style { "{STYLESHEET}" }
        div { class: "dp-root",
            CustomizedLegend {
                items,
                on_hover: move |t: PricingType| legend.write().hover_enter(t),
                on_leave: move |_| legend.write().hover_leave(),
                on_toggle: move |t: PricingType| legend.write().toggle(t),
            }
            div {
                class: "dp-plot",
                style: "width: {width}px; height: {height}px;",
                onmousemove: move |evt: MouseEvent| {
                    let p = evt.element_coordinates();
                    let idx = layout.nearest_index(p.x as f32);
                    if hover() != idx {
                        hover.set(idx);
                    }
                },
                onmouseleave: move |_| hover.set(None),
                if let Some(src) = img_src {
                    img { style: "display: block; width: {width}px; height: {height}px;", src }
                }
                if let Some((tooltip, left)) = tooltip {
                    CustomizedTooltip { tooltip, left }
                }
            }
        }
    }
}

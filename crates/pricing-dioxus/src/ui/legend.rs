// File: crates/pricing-dioxus/src/ui/legend.rs
// Summary: Interactive legend: hover dims the other series, click toggles visibility.

use dioxus::prelude::*;
use pricing_core::{LegendItem, PricingType};

use crate::styles::{legend_type_class, legend_type_style};

#[derive(Props, Clone, PartialEq)]
pub struct CustomizedLegendProps {
    pub items: Vec<LegendItem>,
    pub on_hover: EventHandler<PricingType>,
    pub on_leave: EventHandler<()>,
    pub on_toggle: EventHandler<PricingType>,
}

#[component]
pub fn CustomizedLegend(props: CustomizedLegendProps) -> Element {
    let on_hover = props.on_hover;
    let on_leave = props.on_leave;
    let on_toggle = props.on_toggle;

    rsx! {
        div { class: "dp-legend",
            p { class: "dp-legend-title", "Cost per m", sup { "2" } }
            ul { class: "dp-legend-list",
                for item in props.items.iter().cloned() {
                    li {
                        key: "{item.type_name}",
                        class: "dp-legend-list-item",
                        "data-type": "{item.type_name}",
                        onmouseenter: move |_| on_hover.call(item.type_name),
                        onmouseleave: move |_| on_leave.call(()),
                        onclick: move |_| on_toggle.call(item.type_name),
                        div { class: legend_type_class(&item), style: legend_type_style(&item),
                            div { class: "dp-legend-type-info",
                                svg { class: "dp-legend-type-info-surface", width: "14", height: "2",
                                    path { d: "M 0,1 L 14,1", style: "stroke: {item.color}" }
                                }
                                span { "{item.label}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

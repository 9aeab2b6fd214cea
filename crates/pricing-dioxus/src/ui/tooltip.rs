// File: crates/pricing-dioxus/src/ui/tooltip.rs
// Summary: Tooltip box for the hovered date.

use dioxus::prelude::*;
use pricing_core::Tooltip;

#[derive(Props, Clone, PartialEq)]
pub struct CustomizedTooltipProps {
    pub tooltip: Tooltip,
    /// Left offset inside the plot container, in pixels.
    pub left: f32,
}

#[component]
pub fn CustomizedTooltip(props: CustomizedTooltipProps) -> Element {
    let tooltip = props.tooltip;
    rsx! {
        div { class: "dp-tooltip", style: "left: {props.left}px;",
            p { class: "dp-tooltip-label", "{tooltip.label}" }
            ul { class: "dp-tooltip-list",
                for entry in tooltip.entries.iter() {
                    li { key: "{entry.type_name}", style: "color: {entry.color}",
                        "{entry.name}: {entry.text}"
                    }
                }
            }
        }
    }
}

// File: crates/pricing-dioxus/src/styles.rs
// Summary: Stylesheet and class/style helpers shared by the legend and tooltip components.

use pricing_core::LegendItem;

/// Height of the widget root, in pixels.
pub const ROOT_HEIGHT_PX: i32 = 450;

/// Tooltip box width used for edge flipping.
pub const TOOLTIP_WIDTH_PX: f32 = 220.0;

pub const STYLESHEET: &str = r#"
.dp-root { position: relative; font-family: system-ui, -apple-system, sans-serif; color: #333; }
.dp-loader { display: flex; align-items: center; justify-content: center; height: 100%; color: #666; }
.dp-legend { display: flex; align-items: center; gap: 16px; flex-wrap: wrap; margin: 0 0 8px 0; }
.dp-legend-title { font-weight: 600; margin: 0; }
.dp-legend-list { display: flex; gap: 8px; list-style: none; margin: 0; padding: 0; }
.dp-legend-list-item { cursor: pointer; user-select: none; }
.dp-legend-type { border-radius: 4px; padding: 4px 8px; transition: opacity 0.2s; }
.dp-legend-type-hover { opacity: 0.5; }
.dp-legend-type-disable { color: #a0a4a8; }
.dp-legend-type-info { display: flex; align-items: center; gap: 6px; }
.dp-legend-type-info-surface path { stroke-width: 2; }
.dp-plot { position: relative; }
.dp-tooltip { position: absolute; top: 48px; pointer-events: none; background: #fff; border: 1px solid #ddd; border-radius: 4px; padding: 6px 10px; box-shadow: 0 2px 6px rgba(0,0,0,0.08); }
.dp-tooltip-label { font-weight: 600; margin: 0 0 4px 0; }
.dp-tooltip-list { list-style: none; margin: 0; padding: 0; }
"#;

/// Class list of a legend chip: hover-dimmed and disabled modifiers on top of the base class.
pub fn legend_type_class(item: &LegendItem) -> String {
    let mut class = String::from("dp-legend-type");
    if item.dimmed {
        class.push_str(" dp-legend-type-hover");
    }
    if item.disabled {
        class.push_str(" dp-legend-type-disable");
    }
    class
}

pub fn legend_type_style(item: &LegendItem) -> String {
    format!("background-color: {};", item.background)
}

/// Left offset of the tooltip box: right of the cursor, flipped left near the right edge.
pub fn tooltip_left(cursor_x: f32, container_width: f32) -> f32 {
    let right_side = cursor_x + 12.0;
    if right_side + TOOLTIP_WIDTH_PX > container_width {
        (cursor_x - 12.0 - TOOLTIP_WIDTH_PX).max(0.0)
    } else {
        right_side
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pricing_core::{LegendState, PricingType, SeriesDescriptor};

    fn items() -> Vec<LegendItem> {
        let mut legend = LegendState::new(&[
            SeriesDescriptor::new(PricingType::District, "rgb(254, 171, 76)").named("By district"),
            SeriesDescriptor::new(PricingType::City, "rgb(41, 143, 202)").named("In the city"),
            SeriesDescriptor::new(PricingType::ObjectId, "rgb(97, 189, 79)").named("This object"),
        ]);
        legend.toggle(PricingType::ObjectId);
        legend.hover_enter(PricingType::City);
        legend.items()
    }

    #[test]
    fn chip_classes_follow_state() {
        let items = items();
        assert_eq!(legend_type_class(&items[0]), "dp-legend-type dp-legend-type-hover");
        assert_eq!(legend_type_class(&items[1]), "dp-legend-type");
        assert_eq!(legend_type_class(&items[2]), "dp-legend-type dp-legend-type-disable");
        assert_eq!(legend_type_style(&items[2]), "background-color: #F8F9F9;");
        assert_eq!(legend_type_style(&items[1]), "background-color: rgba(41, 143, 202, 0.1);");
    }

    #[test]
    fn tooltip_flips_near_the_right_edge() {
        assert_eq!(tooltip_left(100.0, 960.0), 112.0);
        assert_eq!(tooltip_left(900.0, 960.0), 900.0 - 12.0 - TOOLTIP_WIDTH_PX);
        assert_eq!(tooltip_left(100.0, 200.0), 0.0);
    }
}

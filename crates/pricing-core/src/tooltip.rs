// File: crates/pricing-core/src/tooltip.rs
// Summary: Tooltip model for the hovered date: header plus one entry per visible, non-zero value.

use crate::color::Rgb;
use crate::data::DataPoint;
use crate::format::{format_full_date, to_numeric_string_with_divider};
use crate::series::{PreparedSeries, PricingType};

/// Unit suffix appended to every tooltip value.
pub const UNIT_SUFFIX: &str = "/m\u{b2}";

#[derive(Clone, Debug, PartialEq)]
pub struct Tooltip {
    pub date: f64,
    pub label: String,
    pub entries: Vec<TooltipEntry>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TooltipEntry {
    pub type_name: PricingType,
    pub name: String,
    pub value: f64,
    /// Grouped value with the unit suffix, e.g. `5 000/m²`.
    pub text: String,
    pub color: String,
    pub rgb: Rgb,
}

/// Build the tooltip for `point`.
///
/// Only active series with a visual name and a defined, non-zero value are
/// listed. Returns `None` when nothing would be listed.
pub fn build(types: &[PreparedSeries], point: &DataPoint, divider: &str) -> Option<Tooltip> {
    let entries: Vec<TooltipEntry> = types
        .iter()
        .filter(|p| p.active)
        .filter_map(|p| {
            let name = p.descriptor.visual_name.clone()?;
            let value = point.value(p.type_name()).filter(|v| *v != 0.0)?;
            Some(TooltipEntry {
                type_name: p.type_name(),
                name,
                value,
                text: format!("{}{}", to_numeric_string_with_divider(value, divider), UNIT_SUFFIX),
                color: p.descriptor.color.clone(),
                rgb: p.descriptor.rgb(),
            })
        })
        .collect();
    if entries.is_empty() {
        return None;
    }
    Some(Tooltip { date: point.date, label: format_full_date(point.date), entries })
}

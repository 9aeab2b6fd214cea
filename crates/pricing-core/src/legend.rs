// File: crates/pricing-core/src/legend.rs
// Summary: Legend interaction state (hover dimming, click toggling) and legend item view models.
//
// Per series the state is one of: visible at full opacity, visible but dimmed
// while another active series is hovered, or hidden. A hidden series is never
// dimmed.

use crate::color::Rgb;
use crate::series::{prepare_types, PreparedSeries, PricingType, SeriesDescriptor};

/// Opacity applied to the other active series while one is hovered.
pub const DIMMED_OPACITY: f32 = 0.5;
/// Legend heading.
pub const LEGEND_TITLE: &str = "Cost per m\u{b2}";
/// Background of a disabled legend chip.
pub const DISABLED_BACKGROUND: &str = "#F8F9F9";

#[derive(Clone, Debug, Default, PartialEq)]
pub struct LegendState {
    types: Vec<PreparedSeries>,
    hovered: Option<PricingType>,
}

impl LegendState {
    pub fn new(types: &[SeriesDescriptor]) -> Self {
        Self { types: prepare_types(types), hovered: None }
    }

    /// Re-prepare from a new series configuration, discarding hover and toggle state.
    pub fn replace_types(&mut self, types: &[SeriesDescriptor]) {
        *self = Self::new(types);
    }

    pub fn types(&self) -> &[PreparedSeries] {
        &self.types
    }

    pub fn get(&self, t: PricingType) -> Option<&PreparedSeries> {
        self.types.iter().find(|p| p.type_name() == t)
    }

    pub fn hovered(&self) -> Option<PricingType> {
        self.hovered
    }

    /// Series currently drawn, in configuration order.
    pub fn active(&self) -> impl Iterator<Item = &PreparedSeries> {
        self.types.iter().filter(|p| p.active)
    }

    pub fn active_types(&self) -> Vec<PricingType> {
        self.active().map(|p| p.type_name()).collect()
    }

    /// Pointer entered the legend entry of `t`. Ignored for hidden or unknown series.
    pub fn hover_enter(&mut self, t: PricingType) {
        if !self.get(t).is_some_and(|p| p.active) {
            return;
        }
        self.hovered = Some(t);
        self.apply_dimming(t);
    }

    /// Pointer left a legend entry: everything back to full opacity.
    pub fn hover_leave(&mut self) {
        self.hovered = None;
        for p in &mut self.types {
            p.opacity = 1.0;
        }
    }

    /// Click on the legend entry of `t`: flip its visibility.
    pub fn toggle(&mut self, t: PricingType) {
        let Some(p) = self.types.iter_mut().find(|p| p.type_name() == t) else {
            return;
        };
        p.active = !p.active;
        let now_active = p.active;
        if !now_active {
            p.opacity = 1.0;
        }
        match self.hovered {
            Some(h) if h == t && now_active => self.apply_dimming(t),
            Some(h) if h == t => {
                for p in &mut self.types {
                    p.opacity = 1.0;
                }
            }
            _ => {}
        }
    }

    fn apply_dimming(&mut self, hovered: PricingType) {
        for p in &mut self.types {
            if p.type_name() == hovered {
                continue;
            }
            if p.active {
                p.opacity = DIMMED_OPACITY;
            }
        }
    }

    /// View models for the legend; series without a visual name are skipped.
    pub fn items(&self) -> Vec<LegendItem> {
        self.types
            .iter()
            .filter_map(|p| {
                let label = p.descriptor.visual_name.clone()?;
                let rgb = p.descriptor.rgb();
                Some(LegendItem {
                    type_name: p.type_name(),
                    label,
                    color: p.descriptor.color.clone(),
                    rgb,
                    dimmed: p.is_dimmed(),
                    disabled: !p.active,
                    background: if p.active {
                        rgb.to_css_rgba(0.1)
                    } else {
                        DISABLED_BACKGROUND.to_string()
                    },
                })
            })
            .collect()
    }
}

/// Everything a legend renderer needs for one entry.
#[derive(Clone, Debug, PartialEq)]
pub struct LegendItem {
    pub type_name: PricingType,
    pub label: String,
    /// Caller-supplied CSS color, used for the swatch stroke.
    pub color: String,
    pub rgb: Rgb,
    pub dimmed: bool,
    pub disabled: bool,
    /// CSS background of the chip.
    pub background: String,
}

// File: crates/pricing-dioxus/src/ui/mod.rs
// Summary: Dioxus components for the Dynamic Pricing widget (desktop only).

mod app;
mod chart;
mod legend;
mod tooltip;

pub use app::{run_demo_ui, App};
pub use chart::{DynamicPricing, DynamicPricingProps};
pub use legend::{CustomizedLegend, CustomizedLegendProps};
pub use tooltip::{CustomizedTooltip, CustomizedTooltipProps};

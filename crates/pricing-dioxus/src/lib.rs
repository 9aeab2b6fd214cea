// File: crates/pricing-dioxus/src/lib.rs
// Summary: Dioxus desktop widget for the Dynamic Pricing chart.
// Notes:
// - UI deps sit behind the `desktop` feature, so the workspace builds
//   without fetching Dioxus unless explicitly enabled.
// - The chart body is rendered by pricing-core into a PNG and shown as an
//   <img>; legend and tooltip are plain DOM so they can carry pointer events.

pub mod styles;

#[cfg(feature = "desktop")]
pub mod ui;

#[cfg(feature = "desktop")]
pub use ui::run_demo_ui;

/// Fallback when the `desktop` feature is not enabled.
#[cfg(not(feature = "desktop"))]
pub fn run_demo_ui() -> Result<(), &'static str> {
    Err("pricing-dioxus built without `desktop` feature; enable features to run UI demo")
}

// File: crates/pricing-dioxus/src/ui/app.rs
// Summary: Demo root view and desktop launcher.

use dioxus::prelude::*;
use pricing_core::{sample, DataPoint};

use super::DynamicPricing;

#[component]
pub fn App() -> Element {
    let mut data = use_signal(|| {
        sample::fixture().unwrap_or_else(|err| {
            log::warn!("fixture unavailable ({err}); using random data");
            sample::random(26, 0)
        })
    });
    let mut seed = use_signal(|| 1_u64);
    let mut with_deltas = use_signal(|| false);

    let types = if with_deltas() { sample::types_with_deltas() } else { sample::default_types() };
    let points: Vec<DataPoint> = data.cloned();

    rsx! {
        div { style: "padding: 16px;",
            div { style: "display: flex; gap: 8px; margin-bottom: 12px;",
                button {
                    onclick: move |_| {
                        let s = seed();
                        data.set(sample::random(26, s));
                        seed.set(s + 1);
                    },
                    "Random data"
                }
                button {
                    onclick: move |_| match sample::fixture() {
                        Ok(points) => data.set(points),
                        Err(err) => log::error!("fixture: {err}"),
                    },
                    "Sample data"
                }
                button {
                    onclick: move |_| with_deltas.set(!with_deltas()),
                    if with_deltas() { "Hide deltas" } else { "Show deltas" }
                }
            }
            DynamicPricing { types, data: points }
        }
    }
}

/// Launch the demo window.
pub fn run_demo_ui() -> Result<(), String> {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).map_err(|e| e.to_string())?;

    let cfg = dioxus_desktop::Config::new()
        .with_window(dioxus_desktop::WindowBuilder::new().with_title("Dynamic Pricing"))
        .with_prerendered("<style>html,body{margin:0;background:#fff}</style>".to_string());
    let providers: Vec<Box<dyn Fn() -> Box<dyn std::any::Any> + Send + Sync>> = Vec::new();
    let globals: Vec<Box<dyn std::any::Any>> = vec![Box::new(cfg)];
    dioxus_desktop::launch::launch(App, providers, globals);
    Ok(())
}

// File: crates/pricing-dioxus/src/bin/desktop_demo.rs
// Summary: Opens the Dynamic Pricing demo window (requires the `desktop` feature).

fn main() {
    if let Err(e) = pricing_dioxus::run_demo_ui() {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

// File: crates/pricing-demo/src/main.rs
// Summary: Renders the Dynamic Pricing chart to PNG from a data file or random data,
//          with legend hover/toggle and tooltip position taken from flags.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::Parser;
use pricing_core::{
    data, sample, ChartEngine, LegendState, PricingChart, PricingType, SeriesDescriptor, WidgetConfig,
};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "dynamic-pricing", version, about = "Render the Dynamic Pricing chart to PNG")]
struct Cli {
    /// Data file (.json array of records or .csv with a header row)
    #[arg(long, conflicts_with = "random")]
    data: Option<PathBuf>,
    /// Generate this many weekly records instead of reading a file
    #[arg(long)]
    random: Option<usize>,
    /// Seed for --random
    #[arg(long, default_value_t = 0)]
    seed: u64,
    /// JSON array of series descriptors; defaults to district/city/object
    #[arg(long)]
    types: Option<PathBuf>,
    /// Widget config (TOML)
    #[arg(long)]
    config: Option<PathBuf>,
    /// Output PNG path
    #[arg(long, default_value = "dynamic_pricing.png")]
    out: PathBuf,
    /// Toggle a series off, as if its legend item was clicked (repeatable)
    #[arg(long = "hide", value_name = "TYPE")]
    hide: Vec<PricingType>,
    /// Hover a legend item, dimming the other series
    #[arg(long, value_name = "TYPE")]
    hover: Option<PricingType>,
    /// Show the tooltip and cursor at this record index
    #[arg(long, value_name = "INDEX")]
    tooltip_at: Option<usize>,
}

fn main() -> Result<()> {
    FmtSubscriber::builder()
        .with_max_level(
            std::env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .init();

    let cli = Cli::parse();

    let points = match (&cli.data, cli.random) {
        (Some(path), _) => data::load(path).with_context(|| format!("failed to load data '{}'", path.display()))?,
        (None, Some(n)) => sample::random(n, cli.seed),
        (None, None) => sample::fixture().context("embedded sample data is invalid")?,
    };
    let types = match &cli.types {
        Some(path) => load_types(path)?,
        None => sample::default_types(),
    };
    let config = match &cli.config {
        Some(path) => WidgetConfig::load(path).with_context(|| format!("failed to load config '{}'", path.display()))?,
        None => WidgetConfig::default(),
    };
    tracing::info!(records = points.len(), series = types.len(), "input ready");

    let chart = PricingChart::new(types, points);
    let mut legend = chart.legend_state();
    apply_legend_flags(&mut legend, &cli.hide, cli.hover)?;

    let mut opts = config.render_options();
    if let Some(i) = cli.tooltip_at {
        if i >= chart.data.len() {
            tracing::warn!(index = i, records = chart.data.len(), "tooltip index out of range; ignored");
        } else {
            opts.hover_index = Some(i);
        }
    }

    let engine = ChartEngine::load();
    engine
        .render_to_png(&chart, &legend, &opts, &cli.out)
        .with_context(|| format!("failed to write '{}'", cli.out.display()))?;
    println!("Wrote {}", cli.out.display());
    Ok(())
}

/// Replay `--hide` and `--hover` as legend clicks and pointer entry.
/// Naming a series that is not configured is an error for both flags.
fn apply_legend_flags(legend: &mut LegendState, hide: &[PricingType], hover: Option<PricingType>) -> Result<()> {
    for &t in hide {
        match legend.get(t).map(|s| s.active) {
            None => bail!("--hide {t}: series is not configured"),
            Some(true) => legend.toggle(t),
            Some(false) => {}
        }
    }
    if let Some(t) = hover {
        match legend.get(t).map(|s| s.active) {
            None => bail!("--hover {t}: series is not configured"),
            Some(false) => tracing::warn!(series = %t, "hovered series is hidden; no dimming applied"),
            Some(true) => legend.hover_enter(t),
        }
    }
    Ok(())
}

fn load_types(path: &Path) -> Result<Vec<SeriesDescriptor>> {
    let text = std::fs::read_to_string(path).with_context(|| format!("failed to read '{}'", path.display()))?;
    let types: Vec<SeriesDescriptor> =
        serde_json::from_str(&text).with_context(|| format!("invalid series descriptors in '{}'", path.display()))?;
    Ok(types)
}

// File: crates/pricing-core/src/lib.rs
// Summary: Core library entry point; exports the data model, legend state, layout and Skia rendering.

pub mod chart;
pub mod series;
pub mod data;
pub mod axis;
pub mod grid;
pub mod types;
pub mod geometry;
pub mod scale;
pub mod view;
pub mod theme;
pub mod text;
pub mod color;
pub mod format;
pub mod legend;
pub mod tooltip;
pub mod layout;
pub mod engine;
pub mod config;
pub mod sample;
pub mod error;

pub use chart::{PricingChart, RenderOptions};
pub use series::{PreparedSeries, PricingType, SeriesDescriptor};
pub use data::DataPoint;
pub use axis::Axis;
pub use view::ViewState;
pub use theme::Theme;
pub use text::TextShaper;
pub use legend::{LegendItem, LegendState};
pub use tooltip::Tooltip;
pub use layout::ChartLayout;
pub use engine::{ChartEngine, LoadState};
pub use config::WidgetConfig;
pub use error::ChartError;
pub use format::{format_price, to_numeric_string, to_numeric_string_with_divider};

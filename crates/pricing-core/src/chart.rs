// File: crates/pricing-core/src/chart.rs
// Summary: Chart model (series configuration + data) and render options.

use std::path::Path;

use crate::data::DataPoint;
use crate::engine::ChartEngine;
use crate::error::Result;
use crate::format::DEFAULT_DIVIDER;
use crate::legend::LegendState;
use crate::series::SeriesDescriptor;
use crate::theme::Theme;
use crate::types::{Insets, HEIGHT, WIDTH};

#[derive(Clone, Debug)]
pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    pub theme: Theme,
    pub draw_labels: bool,
    /// Paint the legend strip into the top inset.
    pub draw_legend: bool,
    /// Paint the tooltip box for `hover_index`.
    pub draw_tooltip: bool,
    /// Join values across gaps instead of breaking the line.
    pub connect_gaps: bool,
    pub x_tick_count: usize,
    pub y_tick_count: usize,
    pub divider: String,
    /// Index into the chart data of the hovered date.
    pub hover_index: Option<usize>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            theme: Theme::light(),
            draw_labels: true,
            draw_legend: true,
            draw_tooltip: true,
            connect_gaps: false,
            x_tick_count: 8,
            y_tick_count: 5,
            divider: DEFAULT_DIVIDER.to_string(),
            hover_index: None,
        }
    }
}

/// Series configuration plus the dated records to plot. Both are read-only to
/// the renderer; interaction state lives in [`LegendState`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PricingChart {
    pub types: Vec<SeriesDescriptor>,
    pub data: Vec<DataPoint>,
}

impl PricingChart {
    pub fn new(types: Vec<SeriesDescriptor>, data: Vec<DataPoint>) -> Self {
        Self { types, data }
    }

    /// Fresh legend state: every series visible at full opacity.
    pub fn legend_state(&self) -> LegendState {
        LegendState::new(&self.types)
    }

    /// Render with a freshly loaded engine and default legend state.
    pub fn render_to_png(&self, opts: &RenderOptions, output_png_path: impl AsRef<Path>) -> Result<()> {
        ChartEngine::load().render_to_png(self, &self.legend_state(), opts, output_png_path)
    }

    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        ChartEngine::load().render_to_png_bytes(self, &self.legend_state(), opts)
    }
}

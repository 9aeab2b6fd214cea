// File: crates/pricing-core/src/config.rs
// Summary: Widget configuration loaded from TOML; every key is optional.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::format::DEFAULT_DIVIDER;
use crate::theme;
use crate::types::{HEIGHT, WIDTH};
use crate::RenderOptions;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WidgetConfig {
    pub width: i32,
    pub height: i32,
    /// Theme preset name (`light`, `dark`).
    pub theme: String,
    /// Thousands separator for axis and tooltip values.
    pub divider: String,
    pub x_tick_count: usize,
    pub y_tick_count: usize,
    pub connect_gaps: bool,
    pub draw_legend: bool,
    pub draw_labels: bool,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            theme: "light".to_string(),
            divider: DEFAULT_DIVIDER.to_string(),
            x_tick_count: 8,
            y_tick_count: 5,
            connect_gaps: false,
            draw_legend: true,
            draw_labels: true,
        }
    }
}

impl WidgetConfig {
    pub fn from_toml_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let cfg = Self::from_toml_str(&std::fs::read_to_string(path)?)?;
        log::debug!("loaded widget config from {}: {cfg:?}", path.display());
        Ok(cfg)
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            width: self.width.max(1),
            height: self.height.max(1),
            theme: theme::find(&self.theme),
            draw_labels: self.draw_labels,
            draw_legend: self.draw_legend,
            connect_gaps: self.connect_gaps,
            x_tick_count: self.x_tick_count.max(2),
            y_tick_count: self.y_tick_count.max(2),
            divider: self.divider.clone(),
            ..RenderOptions::default()
        }
    }
}

// File: crates/pricing-core/src/view.rs
// Visible data ranges: full date range on X, active series' values on Y.

use crate::axis::Axis;
use crate::data::{date_extent, value_extent};
use crate::legend::LegendState;
use crate::PricingChart;

/// Y range used when no active series has a value.
const EMPTY_Y_RANGE: (f64, f64) = (0.0, 100.0);

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewState {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl ViewState {
    /// Data-driven ranges. Hidden series do not contribute to the Y range.
    pub fn from_chart(chart: &PricingChart, legend: &LegendState) -> Self {
        let (x_min, x_max) = date_extent(&chart.data).unwrap_or((0.0, 1.0));
        let (y_min, y_max) = value_extent(&chart.data, &legend.active_types()).unwrap_or(EMPTY_Y_RANGE);
        Self { x_min, x_max, y_min, y_max }
    }

    /// Time and value axes for this view.
    pub fn axes(&self, x_tick_count: usize, y_tick_count: usize) -> (Axis, Axis) {
        (
            Axis::time(self.x_min, self.x_max, x_tick_count),
            Axis::value_auto(self.y_min, self.y_max, y_tick_count),
        )
    }
}

// File: crates/pricing-core/src/types.rs
// Summary: Shared types and constants (sizes, paddings, stroke metrics).

/// Default surface width in pixels.
pub const WIDTH: i32 = 960;
/// Default surface height in pixels; the widget is laid out 450px tall.
pub const HEIGHT: i32 = 450;

/// Stroke width of every price line.
pub const LINE_WIDTH: f32 = 3.0;
/// Radius of the dot marking the hovered date on solid lines.
pub const ACTIVE_DOT_RADIUS: f32 = 8.0;
/// Dash pattern (on, off) for dashed series.
pub const DASH_PATTERN: [f32; 2] = [4.0, 4.0];
/// Font size of tick labels, legend and tooltip text.
pub const FONT_SIZE: f32 = 14.0;
/// Length of axis tick marks.
pub const TICK_SIZE: f32 = 6.0;
/// Gap between a tick mark and its label.
pub const TICK_MARGIN: f32 = 6.0;
/// Minimum horizontal gap between two neighbouring tick labels.
pub const MIN_TICK_GAP: f32 = 5.0;

/// Screen margins, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    /// Create new insets (non-negative by type).
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
}

impl Default for Insets {
    /// A 100px value axis pulled 25px to the left, 40px headroom for the legend
    /// strip and 30px for the time axis.
    fn default() -> Self {
        Self::new(75, 5, 40, 30)
    }
}

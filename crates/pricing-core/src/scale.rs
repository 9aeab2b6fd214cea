// File: crates/pricing-core/src/scale.rs
// Summary: Linear world-to-pixel transforms for the time (X) and value (Y) axes.

/// Logical X coordinate (timestamp in milliseconds).
pub type Logical = f64;
/// Value Y coordinate (price).
pub type Value = f64;

/// Horizontal scale mapping `[start, end]` onto `[left_px, right_px]`.
#[derive(Clone, Copy, Debug)]
pub struct TimeScale {
    pub left_px: f32,
    pub right_px: f32,
    pub start: Logical,
    pub end: Logical,
}

impl TimeScale {
    pub fn new(left_px: f32, right_px: f32, start: Logical, end: Logical) -> Self {
        Self { left_px, right_px, start, end }
    }
    #[inline]
    pub fn to_px(&self, x: Logical) -> f32 {
        let span = self.end - self.start;
        if span.abs() < 1e-12 {
            // single date: centre it
            return (self.left_px + self.right_px) * 0.5;
        }
        self.left_px + ((x - self.start) / span) as f32 * (self.right_px - self.left_px)
    }
    #[inline]
    pub fn from_px(&self, px: f32) -> Logical {
        let width = (self.right_px - self.left_px).max(1.0);
        self.start + ((px - self.left_px) / width) as f64 * (self.end - self.start)
    }
}

/// Vertical value scale mapping data range to [top, bottom] pixels.
#[derive(Clone, Copy, Debug)]
pub struct ValueScale {
    pub top_px: f32,
    pub bottom_px: f32,
    pub vmin: Value,
    pub vmax: Value,
}

impl ValueScale {
    pub fn new_linear(top_px: f32, bottom_px: f32, vmin: Value, vmax: Value) -> Self {
        let mut s = Self { top_px, bottom_px, vmin, vmax };
        if (s.vmax - s.vmin).abs() < 1e-12 { s.vmax = s.vmin + 1.0; }
        s
    }
    #[inline]
    pub fn to_px(&self, y: Value) -> f32 {
        // halved so that ranges near f64::MAX do not overflow
        let half_span = (self.vmax / 2.0 - self.vmin / 2.0).max(1e-12);
        self.bottom_px - ((y / 2.0 - self.vmin / 2.0) / half_span) as f32 * (self.bottom_px - self.top_px)
    }
}

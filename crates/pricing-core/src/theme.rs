// File: crates/pricing-core/src/theme.rs
// Summary: Light/Dark theming for the pricing chart (stripes, axes, legend and tooltip chrome).

use skia_safe as skia;

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    /// Alternating fills of the horizontal grid bands, top band first.
    pub stripe_fills: [skia::Color; 2],
    pub grid: skia::Color,
    pub axis_line: skia::Color,
    pub axis_label: skia::Color,
    pub cursor: skia::Color,
    pub tooltip_background: skia::Color,
    pub tooltip_border: skia::Color,
    pub tooltip_label: skia::Color,
    pub legend_title: skia::Color,
    pub legend_disabled: skia::Color,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light",
            background: skia::Color::from_argb(255, 0xff, 0xff, 0xff),
            stripe_fills: [
                skia::Color::from_argb(255, 0xf8, 0xf9, 0xf9),
                skia::Color::from_argb(255, 0xff, 0xff, 0xff),
            ],
            grid: skia::Color::from_argb(255, 0xe6, 0xe8, 0xea),
            axis_line: skia::Color::from_argb(255, 0x66, 0x66, 0x66),
            axis_label: skia::Color::from_argb(255, 0x33, 0x33, 0x33),
            cursor: skia::Color::from_argb(255, 0xcc, 0xcc, 0xcc),
            tooltip_background: skia::Color::from_argb(255, 0xff, 0xff, 0xff),
            tooltip_border: skia::Color::from_argb(255, 0xdd, 0xdd, 0xdd),
            tooltip_label: skia::Color::from_argb(255, 0x33, 0x33, 0x33),
            legend_title: skia::Color::from_argb(255, 0x33, 0x33, 0x33),
            legend_disabled: skia::Color::from_argb(255, 0xa0, 0xa4, 0xa8),
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 18, 18, 20),
            stripe_fills: [
                skia::Color::from_argb(255, 26, 26, 30),
                skia::Color::from_argb(255, 18, 18, 20),
            ],
            grid: skia::Color::from_argb(255, 40, 40, 45),
            axis_line: skia::Color::from_argb(255, 180, 180, 190),
            axis_label: skia::Color::from_argb(255, 235, 235, 245),
            cursor: skia::Color::from_argb(255, 90, 90, 100),
            tooltip_background: skia::Color::from_argb(255, 32, 32, 36),
            tooltip_border: skia::Color::from_argb(255, 70, 70, 78),
            tooltip_label: skia::Color::from_argb(255, 235, 235, 245),
            legend_title: skia::Color::from_argb(255, 235, 235, 245),
            legend_disabled: skia::Color::from_argb(255, 110, 110, 120),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::light(), Theme::dark()]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    for t in presets() { if t.name.eq_ignore_ascii_case(name) { return t; } }
    log::warn!("unknown theme {name:?}, using light");
    Theme::light()
}

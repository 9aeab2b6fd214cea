// File: crates/pricing-core/src/color.rs
// Summary: CSS color parsing for series colors (`rgb()`, `rgba()`, `#rrggbb`, `#rgb`).

use skia_safe as skia;

/// Opaque RGB triple parsed from a CSS color string.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#rrggbb`, `#rgb`, `rgb(r, g, b)` or `rgba(r, g, b, a)`; the alpha
    /// channel of `rgba` is ignored.
    pub fn parse(value: &str) -> Option<Self> {
        let v = value.trim();
        if let Some(hex) = v.strip_prefix('#') {
            // byte slicing below needs one byte per char
            if !hex.is_ascii() {
                return None;
            }
            return match hex.len() {
                6 => Some(Self::new(
                    u8::from_str_radix(&hex[0..2], 16).ok()?,
                    u8::from_str_radix(&hex[2..4], 16).ok()?,
                    u8::from_str_radix(&hex[4..6], 16).ok()?,
                )),
                3 => {
                    let nib = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).ok().map(|n| n * 17);
                    Some(Self::new(nib(0)?, nib(1)?, nib(2)?))
                }
                _ => None,
            };
        }
        let inner = v
            .strip_prefix("rgba(")
            .or_else(|| v.strip_prefix("rgb("))?
            .strip_suffix(')')?;
        let parts: Vec<_> = inner.split(',').map(|s| s.trim()).collect();
        if parts.len() < 3 {
            return None;
        }
        Some(Self::new(
            parts[0].parse().ok()?,
            parts[1].parse().ok()?,
            parts[2].parse().ok()?,
        ))
    }

    /// Parse or fall back to black for unrecognised input.
    pub fn parse_or_black(value: &str) -> Self {
        Self::parse(value).unwrap_or(Self::new(0, 0, 0))
    }

    /// CSS `rgba(r, g, b, a)` string.
    pub fn to_css_rgba(&self, alpha: f32) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, alpha)
    }

    /// Skia color with `opacity` in 0..=1 mapped onto the alpha channel.
    pub fn to_skia(&self, opacity: f32) -> skia::Color {
        let a = (opacity.clamp(0.0, 1.0) * 255.0).round() as u8;
        skia::Color::from_argb(a, self.r, self.g, self.b)
    }
}

// File: crates/pricing-core/src/axis.rs
// Summary: Axis model with domains, tick generation and start/end-preserving label thinning.

use crate::grid::linspace;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AxisKind {
    /// Dates; domain is exactly the data range, ticks evenly spaced.
    Time,
    /// Prices; domain is widened to "nice" round numbers.
    Value,
}

#[derive(Clone, Debug)]
pub struct Axis {
    pub kind: AxisKind,
    pub min: f64,
    pub max: f64,
    pub tick_count: usize,
}

impl Axis {
    /// Time axis spanning `[min, max]` exactly.
    pub fn time(min: f64, max: f64, tick_count: usize) -> Self {
        Self { kind: AxisKind::Time, min, max, tick_count }
    }

    /// Value axis with a domain rounded outwards to multiples of a nice step.
    pub fn value_auto(min: f64, max: f64, tick_count: usize) -> Self {
        let (lo, hi, _) = nice_domain(min, max, tick_count);
        Self { kind: AxisKind::Value, min: lo, max: hi, tick_count }
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    pub fn ticks(&self) -> Vec<f64> {
        match self.kind {
            AxisKind::Time => {
                if self.span().abs() < 1e-9 {
                    vec![self.min]
                } else {
                    linspace(self.min, self.max, self.tick_count.max(2))
                }
            }
            AxisKind::Value => {
                let (lo, hi, step) = nice_domain(self.min, self.max, self.tick_count);
                let n = (hi / step - lo / step).round() as usize;
                (0..=n).map(|i| snap((lo / step + i as f64) * step, step)).collect()
            }
        }
    }
}

/// Round a rough step to 1, 2, 2.5, 5 or 10 times a power of ten.
pub fn nice_step(rough: f64) -> f64 {
    if !(rough.is_finite() && rough > 0.0) {
        return 1.0;
    }
    let exp = 10f64.powf(rough.log10().floor());
    let f = rough / exp;
    let nice = if f <= 1.0 {
        1.0
    } else if f <= 2.0 {
        2.0
    } else if f <= 2.5 {
        2.5
    } else if f <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * exp
}

/// `(lo, hi, step)` covering `[min, max]` with at most `tick_count` ticks.
pub fn nice_domain(min: f64, max: f64, tick_count: usize) -> (f64, f64, f64) {
    let (mut min, mut max) = if min <= max { (min, max) } else { (max, min) };
    if (max - min).abs() < 1e-9 {
        let pad = (min.abs() * 0.1).max(1.0);
        min -= pad;
        max += pad;
    }
    let intervals = tick_count.max(2) as f64 - 1.0;
    // Spans past f64::MAX cannot be rounded; keep the raw range.
    if !(max - min).is_finite() {
        return (min, max, max / intervals - min / intervals);
    }
    let mut step = nice_step((max - min) / intervals);
    loop {
        let lo = snap((min / step).floor() * step, step);
        let hi = snap((max / step).ceil() * step, step);
        if !(lo.is_finite() && hi.is_finite()) {
            return (min, max, max / intervals - min / intervals);
        }
        if (hi / step - lo / step).round() <= intervals {
            return (lo, hi, step);
        }
        step = nice_step(step * 1.01);
    }
}

fn snap(v: f64, step: f64) -> f64 {
    let snapped = (v / step).round() * step;
    if snapped == 0.0 { 0.0 } else { snapped }
}

/// Approximate rendered width of `text` at `font_size`, used for label collision.
pub fn approx_text_width(text: &str, font_size: f32) -> f32 {
    text.chars().count() as f32 * font_size * 0.6
}

/// Decide which tick labels to draw along one axis.
///
/// `spans` are `(start, end)` pixel extents of each label in axis order. The
/// first and last labels are always kept; a middle label is kept only when it
/// clears the previously kept label and the last label by `min_gap`.
pub fn preserve_start_end(spans: &[(f32, f32)], min_gap: f32) -> Vec<bool> {
    let n = spans.len();
    let mut keep = vec![false; n];
    if n == 0 {
        return keep;
    }
    keep[0] = true;
    keep[n - 1] = true;
    if n <= 2 {
        return keep;
    }
    let last = spans[n - 1];
    let mut prev_end = spans[0].1;
    for i in 1..n - 1 {
        let (s, e) = spans[i];
        if s >= prev_end + min_gap && e + min_gap <= last.0 {
            keep[i] = true;
            prev_end = e;
        }
    }
    keep
}

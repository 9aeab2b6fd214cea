// File: crates/pricing-core/src/grid.rs
// Summary: Tick spacing helpers and the horizontal striped background bands.

pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps < 2 { return vec![start, end]; }
    let step = (end - start) / (steps as f64 - 1.0);
    (0..steps).map(|i| start + step * i as f64).collect()
}

/// A horizontal band between two neighbouring grid lines.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stripe {
    pub top: f32,
    pub bottom: f32,
    /// Index into the two alternating fills, counted from the top.
    pub fill: usize,
}

/// Bands between consecutive horizontal grid lines (pixel y, any order),
/// alternating fills from the top of the plot.
pub fn stripes(line_ys: &[f32]) -> Vec<Stripe> {
    let mut ys = line_ys.to_vec();
    ys.sort_by(|a, b| a.total_cmp(b));
    ys.dedup();
    ys.windows(2)
        .enumerate()
        .map(|(i, w)| Stripe { top: w[0], bottom: w[1], fill: i % 2 })
        .collect()
}

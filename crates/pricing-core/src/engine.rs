// File: crates/pricing-core/src/engine.rs
// Summary: Skia-backed chart engine: one-shot loading and the CPU raster paint pipeline.

use std::path::Path;
use std::rc::Rc;

use skia_safe as skia;

use crate::error::{ChartError, Result};
use crate::layout::{ChartLayout, HoverLayout, LineLayout};
use crate::legend::{LegendState, LEGEND_TITLE};
use crate::text::TextShaper;
use crate::theme::Theme;
use crate::tooltip::Tooltip;
use crate::types::{ACTIVE_DOT_RADIUS, DASH_PATTERN, FONT_SIZE, LINE_WIDTH, TICK_MARGIN, TICK_SIZE};
use crate::{PricingChart, RenderOptions};

/// Loaded rendering capabilities (font collection and text shaping).
pub struct ChartEngine {
    shaper: TextShaper,
}

/// Engine availability as seen by a widget: a placeholder is shown until `Ready`.
#[derive(Clone, Default)]
pub enum LoadState {
    #[default]
    Loading,
    Ready(Rc<ChartEngine>),
}

impl LoadState {
    pub fn is_ready(&self) -> bool {
        matches!(self, LoadState::Ready(_))
    }

    pub fn engine(&self) -> Option<&ChartEngine> {
        match self {
            LoadState::Ready(e) => Some(e.as_ref()),
            LoadState::Loading => None,
        }
    }
}

impl ChartEngine {
    /// Build the font collection. Expensive; do it once per widget.
    pub fn load() -> Self {
        let shaper = TextShaper::new();
        log::info!("chart engine loaded");
        Self { shaper }
    }

    /// [`ChartEngine::load`] as a future, for UI frameworks that resolve
    /// resources asynchronously after the first paint.
    pub async fn load_async() -> Self {
        Self::load()
    }

    fn paint_to_surface(&self, layout: &ChartLayout, opts: &RenderOptions) -> Result<skia::Surface> {
        let mut surface = skia::surfaces::raster_n32_premul((opts.width, opts.height))
            .ok_or(ChartError::Surface { width: opts.width, height: opts.height })?;
        self.paint(surface.canvas(), layout, opts);
        Ok(surface)
    }

    /// Paint a computed layout onto any Skia canvas.
    pub fn paint(&self, canvas: &skia::Canvas, layout: &ChartLayout, opts: &RenderOptions) {
        let theme = &opts.theme;
        canvas.clear(theme.background);

        draw_grid(canvas, layout, theme);
        if let Some(h) = &layout.hover {
            draw_cursor(canvas, layout, h, theme);
        }
        draw_axes(canvas, layout, theme);
        if opts.draw_labels {
            self.draw_tick_labels(canvas, layout, theme);
        }
        for line in &layout.lines {
            draw_line_series(canvas, line);
        }
        if opts.draw_legend {
            self.draw_legend(canvas, layout, theme);
        }
        if opts.draw_tooltip {
            if let Some(tip) = layout.hover.as_ref().and_then(|h| h.tooltip.as_ref().map(|t| (h, t))) {
                self.draw_tooltip(canvas, layout, tip.0, tip.1, theme);
            }
        }
    }

    pub fn render_to_png_bytes(&self, chart: &PricingChart, legend: &LegendState, opts: &RenderOptions) -> Result<Vec<u8>> {
        self.render_layout_to_png_bytes(&ChartLayout::compute(chart, legend, opts), opts)
    }

    /// Encode an already computed layout, for callers that also hit-test it.
    pub fn render_layout_to_png_bytes(&self, layout: &ChartLayout, opts: &RenderOptions) -> Result<Vec<u8>> {
        let mut surface = self.paint_to_surface(layout, opts)?;
        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or(ChartError::Encode)?;
        Ok(data.as_bytes().to_vec())
    }

    /// Render to straight-alpha RGBA8. Returns `(pixels, width, height, row_bytes)`.
    pub fn render_to_rgba8(&self, chart: &PricingChart, legend: &LegendState, opts: &RenderOptions) -> Result<(Vec<u8>, u32, u32, usize)> {
        let layout = ChartLayout::compute(chart, legend, opts);
        let mut surface = self.paint_to_surface(&layout, opts)?;
        let (w, h) = (opts.width.max(1), opts.height.max(1));
        let info = skia::ImageInfo::new((w, h), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None);
        let row_bytes = w as usize * 4;
        let mut pixels = vec![0u8; row_bytes * h as usize];
        if !surface.read_pixels(&info, &mut pixels, row_bytes, (0, 0)) {
            return Err(ChartError::ReadPixels);
        }
        Ok((pixels, w as u32, h as u32, row_bytes))
    }

    pub fn render_to_png(
        &self,
        chart: &PricingChart,
        legend: &LegendState,
        opts: &RenderOptions,
        output_png_path: impl AsRef<Path>,
    ) -> Result<()> {
        let bytes = self.render_to_png_bytes(chart, legend, opts)?;
        if let Some(parent) = output_png_path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(output_png_path, bytes)?;
        Ok(())
    }

    fn draw_tick_labels(&self, canvas: &skia::Canvas, layout: &ChartLayout, theme: &Theme) {
        let p = &layout.plot;
        for t in layout.x_ticks.iter().filter(|t| t.show_label) {
            let y = p.bottom as f32 + TICK_SIZE + TICK_MARGIN + FONT_SIZE;
            self.shaper.draw_centered(canvas, &t.label, t.px, y, FONT_SIZE, theme.axis_label);
        }
        for t in layout.y_ticks.iter().filter(|t| t.show_label) {
            let right = p.left as f32 - TICK_SIZE - TICK_MARGIN;
            self.shaper.draw_right(canvas, &t.label, right, t.px + FONT_SIZE * 0.35, FONT_SIZE, theme.axis_label);
        }
    }

    fn draw_legend(&self, canvas: &skia::Canvas, layout: &ChartLayout, theme: &Theme) {
        let baseline = (layout.plot.top as f32 * 0.5 + FONT_SIZE * 0.35).max(FONT_SIZE);
        let mut x = layout.plot.left as f32;
        self.shaper.draw_left(canvas, LEGEND_TITLE, x, baseline, FONT_SIZE, theme.legend_title, true);
        x += self.shaper.measure_width(LEGEND_TITLE, FONT_SIZE, true) + 16.0;

        let mut chip = skia::Paint::default();
        chip.set_anti_alias(true);
        let mut swatch = skia::Paint::default();
        swatch.set_anti_alias(true);
        swatch.set_style(skia::paint::Style::Stroke);
        swatch.set_stroke_width(2.0);

        for item in &layout.legend {
            let alpha = if item.dimmed { 0.5 } else { 1.0 };
            let text_w = self.shaper.measure_width(&item.label, FONT_SIZE, false);
            let w = 8.0 + 14.0 + 6.0 + text_w + 8.0;
            let rect = skia::Rect::from_xywh(x, baseline - FONT_SIZE - 2.0, w, FONT_SIZE + 10.0);
            if item.disabled {
                chip.set_color(theme.stripe_fills[0]);
            } else {
                chip.set_color(item.rgb.to_skia(0.1 * alpha));
            }
            canvas.draw_round_rect(rect, 4.0, 4.0, &chip);

            swatch.set_color(item.rgb.to_skia(alpha));
            let sy = baseline - FONT_SIZE * 0.35;
            canvas.draw_line((x + 8.0, sy), (x + 22.0, sy), &swatch);

            let mut label_color = if item.disabled { theme.legend_disabled } else { theme.legend_title };
            if item.dimmed {
                label_color = label_color.with_a(128);
            }
            self.shaper.draw_left(canvas, &item.label, x + 28.0, baseline, FONT_SIZE, label_color, false);
            x += w + 8.0;
        }
    }

    fn draw_tooltip(&self, canvas: &skia::Canvas, layout: &ChartLayout, hover: &HoverLayout, tip: &Tooltip, theme: &Theme) {
        let line_h = FONT_SIZE + 6.0;
        let rows: Vec<String> = tip.entries.iter().map(|e| format!("{}: {}", e.name, e.text)).collect();
        let content_w = rows
            .iter()
            .map(|r| self.shaper.measure_width(r, FONT_SIZE, false))
            .fold(self.shaper.measure_width(&tip.label, FONT_SIZE, true), f32::max);
        let w = content_w + 20.0;
        let h = line_h * (rows.len() as f32 + 1.0) + 12.0;

        let p = &layout.plot;
        let mut left = hover.x_px + 12.0;
        if left + w > p.right as f32 {
            left = hover.x_px - 12.0 - w;
        }
        let left = crate::geometry::clamp(left, 0.0, (layout.width as f32 - w).max(0.0));
        let top = p.top as f32 + 8.0;
        let rect = skia::Rect::from_xywh(left, top, w, h);

        let mut bg = skia::Paint::default();
        bg.set_anti_alias(true);
        bg.set_color(theme.tooltip_background);
        canvas.draw_round_rect(rect, 4.0, 4.0, &bg);
        let mut border = skia::Paint::default();
        border.set_anti_alias(true);
        border.set_style(skia::paint::Style::Stroke);
        border.set_stroke_width(1.0);
        border.set_color(theme.tooltip_border);
        canvas.draw_round_rect(rect, 4.0, 4.0, &border);

        let mut y = top + 6.0 + FONT_SIZE;
        self.shaper.draw_left(canvas, &tip.label, left + 10.0, y, FONT_SIZE, theme.tooltip_label, true);
        for (row, entry) in rows.iter().zip(&tip.entries) {
            y += line_h;
            self.shaper.draw_left(canvas, row, left + 10.0, y, FONT_SIZE, entry.rgb.to_skia(1.0), false);
        }
    }
}

// ---- helpers ----------------------------------------------------------------

fn draw_grid(canvas: &skia::Canvas, layout: &ChartLayout, theme: &Theme) {
    let p = &layout.plot;
    let (l, r) = (p.left as f32, p.right as f32);

    let mut fill = skia::Paint::default();
    for s in &layout.stripes {
        fill.set_color(theme.stripe_fills[s.fill % 2]);
        canvas.draw_rect(skia::Rect::from_ltrb(l, s.top, r, s.bottom), &fill);
    }

    let mut paint = skia::Paint::default();
    paint.set_color(theme.grid);
    paint.set_anti_alias(true);
    paint.set_stroke_width(1.0);
    // horizontals only
    for t in &layout.y_ticks {
        canvas.draw_line((l, t.px), (r, t.px), &paint);
    }
}

fn draw_cursor(canvas: &skia::Canvas, layout: &ChartLayout, hover: &HoverLayout, theme: &Theme) {
    let mut paint = skia::Paint::default();
    paint.set_color(theme.cursor);
    paint.set_stroke_width(1.0);
    canvas.draw_line(
        (hover.x_px, layout.plot.top as f32),
        (hover.x_px, layout.plot.bottom as f32),
        &paint,
    );
}

fn draw_axes(canvas: &skia::Canvas, layout: &ChartLayout, theme: &Theme) {
    let p = &layout.plot;
    let (l, t, r, b) = (p.left as f32, p.top as f32, p.right as f32, p.bottom as f32);

    let mut axis_paint = skia::Paint::default();
    axis_paint.set_color(theme.axis_line);
    axis_paint.set_anti_alias(true);
    axis_paint.set_stroke_width(1.0);

    // X and Y axis lines
    canvas.draw_line((l, b), (r, b), &axis_paint);
    canvas.draw_line((l, t), (l, b), &axis_paint);

    for tick in &layout.x_ticks {
        canvas.draw_line((tick.px, b), (tick.px, b + TICK_SIZE), &axis_paint);
    }
    for tick in &layout.y_ticks {
        canvas.draw_line((l - TICK_SIZE, tick.px), (l, tick.px), &axis_paint);
    }
}

fn draw_line_series(canvas: &skia::Canvas, line: &LineLayout) {
    let mut stroke = skia::Paint::default();
    stroke.set_anti_alias(true);
    stroke.set_style(skia::paint::Style::Stroke);
    stroke.set_stroke_width(LINE_WIDTH);
    stroke.set_stroke_join(skia::paint::Join::Round);
    stroke.set_color(line.rgb.to_skia(line.opacity));
    if line.dashed {
        stroke.set_path_effect(skia::PathEffect::dash(&DASH_PATTERN, 0.0));
    }

    for seg in &line.segments {
        // a lone point has nothing to connect to
        if seg.len() < 2 {
            continue;
        }
        let mut path = skia::Path::new();
        path.move_to(seg[0]);
        for &pt in seg.iter().skip(1) {
            path.line_to(pt);
        }
        canvas.draw_path(&path, &stroke);
    }

    if let Some((x, y)) = line.active_dot {
        let mut dot = skia::Paint::default();
        dot.set_anti_alias(true);
        dot.set_color(line.rgb.to_skia(line.opacity));
        canvas.draw_circle((x, y), ACTIVE_DOT_RADIUS, &dot);
        let mut ring = skia::Paint::default();
        ring.set_anti_alias(true);
        ring.set_style(skia::paint::Style::Stroke);
        ring.set_stroke_width(2.0);
        ring.set_color(skia::Color::WHITE);
        canvas.draw_circle((x, y), ACTIVE_DOT_RADIUS, &ring);
    }
}

// File: crates/chart-render-skia/src/render.rs
// Summary: Headless rendering pipeline using Skia CPU raster surfaces (RGBA buffer, PNG bytes, PNG file).

use std::io::Cursor;
use std::path::Path;

use anyhow::{Context, Result};
use skia_safe as skia;

use chart_core::types::{HEIGHT, WIDTH};

use crate::geometry::PlotRect;
use crate::text::{Align, TextShaper};
use crate::theme::Theme;
use crate::types::Insets;

pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    pub theme: Theme,
    /// Skip all text (titles, ticks, legends); keeps pixels independent of installed fonts.
    pub draw_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            theme: Theme::light(),
            draw_labels: true,
        }
    }
}

/// Per-render drawing state handed to each chart kind.
pub struct Painter<'a> {
    pub canvas: &'a skia::Canvas,
    pub theme: &'a Theme,
    pub width: f32,
    pub height: f32,
    pub plot: PlotRect,
    text: Option<TextShaper>,
}

impl<'a> Painter<'a> {
    pub fn label(&self, text: &str, x: f32, y: f32, size: f32, color: skia::Color, align: Align) {
        if let Some(shaper) = &self.text {
            shaper.draw(self.canvas, text, x, y, size, color, align);
        }
    }

    /// Text width, or an estimate when labels are off.
    pub fn text_width(&self, text: &str, size: f32) -> f32 {
        match &self.text {
            Some(shaper) => shaper.measure_width(text, size),
            None => text.chars().count() as f32 * size * 0.55,
        }
    }

    pub fn stroke(&self, color: skia::Color, width: f32) -> skia::Paint {
        let mut p = skia::Paint::default();
        p.set_anti_alias(true);
        p.set_style(skia::paint::Style::Stroke);
        p.set_stroke_width(width);
        p.set_color(color);
        p
    }

    pub fn fill(&self, color: skia::Color) -> skia::Paint {
        let mut p = skia::Paint::default();
        p.set_anti_alias(true);
        p.set_style(skia::paint::Style::Fill);
        p.set_color(color);
        p
    }

    pub fn title(&self, text: &str) {
        self.label(text, self.width * 0.5, 36.0, 20.0, self.theme.title, Align::Center);
    }

    /// Centered row of color swatches and names along the bottom edge.
    pub fn legend(&self, entries: &[(String, skia::Color)]) {
        if entries.is_empty() {
            return;
        }
        const SWATCH: f32 = 14.0;
        const GAP: f32 = 8.0;
        const SPACING: f32 = 20.0;
        const SIZE: f32 = 12.0;

        let widths: Vec<f32> = entries.iter().map(|(name, _)| SWATCH + GAP + self.text_width(name, SIZE)).collect();
        let total = widths.iter().sum::<f32>() + SPACING * (entries.len() - 1) as f32;
        let mut x = (self.width - total) * 0.5;
        let y = self.height - 22.0;

        for ((name, color), w) in entries.iter().zip(&widths) {
            let swatch = skia::Rect::from_xywh(x, y - SWATCH * 0.5, SWATCH, SWATCH * 0.7);
            self.canvas.draw_rect(swatch, &self.fill(*color));
            self.label(name, x + SWATCH + GAP, y + SIZE * 0.35, SIZE, self.theme.legend_text, Align::Left);
            x += w + SPACING;
        }
    }
}

/// Resolve an option color string to a Skia color, falling back when unparseable.
pub fn skia_color(color: &str, fallback: skia::Color) -> skia::Color {
    match chart_core::parse_color(color) {
        Ok(c) => skia::Color::from_argb(c.alpha_u8(), c.r, c.g, c.b),
        Err(err) => {
            tracing::warn!(%err, "falling back to theme color");
            fallback
        }
    }
}

/// Something that can be drawn onto a cleared canvas.
pub trait Render {
    /// Background color string from the option object, if it names one.
    fn background(&self) -> Option<&str> {
        None
    }

    fn draw(&self, painter: &Painter<'_>);

    /// Render into a tightly packed, non-premultiplied RGBA8 buffer.
    /// Returns `(pixels, width, height, stride)`.
    fn render_to_rgba8(&self, opts: &RenderOptions) -> Result<(Vec<u8>, i32, i32, usize)> {
        let mut surface = skia::surfaces::raster_n32_premul((opts.width, opts.height))
            .ok_or_else(|| anyhow::anyhow!("failed to create {}x{} raster surface", opts.width, opts.height))?;

        {
            let canvas = surface.canvas();
            let bg = self
                .background()
                .map(|c| skia_color(c, opts.theme.background))
                .unwrap_or(opts.theme.background);
            canvas.clear(bg);

            let painter = Painter {
                canvas,
                theme: &opts.theme,
                width: opts.width as f32,
                height: opts.height as f32,
                plot: PlotRect::inset(opts.width, opts.height, &opts.insets),
                text: opts.draw_labels.then(TextShaper::new),
            };
            self.draw(&painter);
        }

        let info = skia::ImageInfo::new(
            (opts.width, opts.height),
            skia::ColorType::RGBA8888,
            skia::AlphaType::Unpremul,
            None,
        );
        let stride = opts.width as usize * 4;
        let mut px = vec![0u8; stride * opts.height as usize];
        if !surface.read_pixels(&info, &mut px, stride, (0, 0)) {
            anyhow::bail!("failed to read back surface pixels");
        }
        Ok((px, opts.width, opts.height, stride))
    }

    fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        let (px, w, h, _) = self.render_to_rgba8(opts)?;
        let img = image::RgbaImage::from_raw(w as u32, h as u32, px)
            .ok_or_else(|| anyhow::anyhow!("pixel buffer does not match {w}x{h}"))?;
        let mut bytes = Vec::new();
        img.write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)
            .context("encode PNG failed")?;
        Ok(bytes)
    }

    /// Render the chart to a PNG at `output_png_path`.
    fn render_to_png(&self, opts: &RenderOptions, output_png_path: impl AsRef<Path>) -> Result<()>
    where
        Self: Sized,
    {
        let path = output_png_path.as_ref();
        let bytes = self.render_to_png_bytes(opts)?;
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("creating {}", parent.display()))?;
            }
        }
        std::fs::write(path, &bytes).with_context(|| format!("writing {}", path.display()))?;
        tracing::debug!(path = %path.display(), bytes = bytes.len(), "wrote PNG");
        Ok(())
    }
}

// File: crates/area-core/src/render.rs
// Summary: Area path drawing on a Skia canvas and headless PNG/RGBA rendering of a view.

use anyhow::Result;
use skia_safe as skia;

use crate::animation::RenderState;
use crate::error::ChartError;
use crate::geometry::{area_outline, PlotRect};
use crate::normalize::Normalizer;
use crate::style::AreaStyle;
use crate::types::{HEIGHT, WIDTH};
use crate::AreaView;

pub use skia::Color;

pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub background: skia::Color,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            background: skia::Color::from_argb(255, 250, 250, 252),
        }
    }
}

/// Normalized heights for the visible window of `state`.
///
/// A flat window has no meaningful scale; every point is placed at mid-height.
pub fn visible_norms(state: &RenderState) -> Vec<f64> {
    let normalizer = Normalizer::new(&state.values, state.start, state.minimum, state.maximum);
    match normalizer.norms() {
        Ok(norms) => norms,
        Err(ChartError::FlatRange { value }) => {
            log::warn!("flat window at {value}; drawing at mid-height");
            vec![0.5; normalizer.visible_len()]
        }
        Err(e) => {
            log::debug!("nothing to draw: {e}");
            Vec::new()
        }
    }
}

/// Build the closed area path for `norms` inside `rect`. `None` when there is nothing to draw.
pub fn area_path(norms: &[f64], rect: &PlotRect) -> Option<skia::Path> {
    let pts = area_outline(norms, rect);
    let (&first, rest) = pts.split_first()?;
    let mut path = skia::Path::new();
    path.move_to(first);
    for &p in rest {
        path.line_to(p);
    }
    path.close();
    Some(path)
}

/// Fill then stroke the area of `state` into `rect`.
pub fn draw_area(canvas: &skia::Canvas, state: &RenderState, style: &AreaStyle, rect: &PlotRect) {
    let norms = visible_norms(state);
    let Some(path) = area_path(&norms, rect) else {
        return;
    };

    let mut fill = skia::Paint::default();
    fill.set_anti_alias(true);
    fill.set_style(skia::paint::Style::Fill);
    fill.set_color(style.fill);
    canvas.draw_path(&path, &fill);

    let mut stroke = skia::Paint::default();
    stroke.set_anti_alias(true);
    stroke.set_style(skia::paint::Style::Stroke);
    stroke.set_stroke_width(style.stroke_width);
    stroke.set_color(style.stroke);
    canvas.draw_path(&path, &stroke);
}

impl AreaView {
    fn render_surface(&self, opts: &RenderOptions) -> Result<skia::Surface> {
        let mut surface = skia::surfaces::raster_n32_premul((opts.width, opts.height))
            .ok_or(ChartError::Surface { width: opts.width, height: opts.height })?;
        let canvas = surface.canvas();
        canvas.clear(opts.background);
        let rect = PlotRect::from_size(opts.width as f32, opts.height as f32);
        self.draw(canvas, &rect);
        Ok(surface)
    }

    /// Render the current state to PNG bytes using a CPU raster surface.
    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        let mut surface = self.render_surface(opts)?;
        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or(ChartError::Encode)?;
        Ok(data.as_bytes().to_vec())
    }

    /// Render the current state to a PNG at `output_png_path`.
    pub fn render_to_png(
        &self,
        opts: &RenderOptions,
        output_png_path: impl AsRef<std::path::Path>,
    ) -> Result<()> {
        let bytes = self.render_to_png_bytes(opts)?;
        if let Some(parent) = output_png_path.as_ref().parent() {
            std::fs::create_dir_all(parent).map_err(ChartError::from)?;
        }
        std::fs::write(output_png_path, bytes).map_err(ChartError::from)?;
        Ok(())
    }

    /// Render to an unpremultiplied RGBA8 buffer. Returns `(pixels, width, height, stride)`.
    pub fn render_to_rgba8(&self, opts: &RenderOptions) -> Result<(Vec<u8>, i32, i32, usize)> {
        let mut surface = self.render_surface(opts)?;
        let info = skia::ImageInfo::new(
            (opts.width, opts.height),
            skia::ColorType::RGBA8888,
            skia::AlphaType::Unpremul,
            None,
        );
        let stride = opts.width as usize * 4;
        let mut pixels = vec![0u8; stride * opts.height as usize];
        if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
            anyhow::bail!("failed to read back {}x{} pixels", opts.width, opts.height);
        }
        Ok((pixels, opts.width, opts.height, stride))
    }
}

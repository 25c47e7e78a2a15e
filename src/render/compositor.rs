use std::collections::HashMap;

use crate::assets::decode::{PreparedImage, decode_background};
use crate::document::{BackgroundSource, ThumbnailDocument};
use crate::foundation::core::{SURFACE_HEIGHT, SURFACE_WIDTH};
use crate::foundation::error::{ThumbError, ThumbResult};
use crate::render::background::{
    gradient_background, prepared_to_image, rgba_premul_to_image, stretch_fill_transform,
};
use crate::render::surface::RenderedSurface;
use crate::text::layout::{
    BlockStyle, CENTER_X, OVERLAY_RGBA, SUBTITLE_STYLE, TITLE_STYLE, backdrop_rect, backdrop_shape,
};
use crate::text::shape::TextShaper;

/// The canvas surface manager: owns the fixed 1280x720 drawing surface and performs a full,
/// idempotent repaint of a [`ThumbnailDocument`] on every call.
///
/// Paint order is fixed: clear, background (stretched bitmap or gradient fallback), contrast
/// overlay, title block, subtitle block. Text never paints before the background.
pub struct Compositor {
    ctx: Option<vello_cpu::RenderContext>,
    shaper: TextShaper,
    font: Option<vello_cpu::peniko::FontData>,

    // Keyed by BackgroundSource::cache_key(); None records a decode failure, which renders as
    // the gradient fallback without retrying the decode.
    background_cache: HashMap<u64, Option<PreparedImage>>,
    gradient_paint: Option<vello_cpu::Image>,
}

impl Default for Compositor {
    fn default() -> Self {
        Self::new()
    }
}

impl Compositor {
    /// Construct a compositor with no registered font.
    ///
    /// Documents whose title and subtitle are both empty render without one; painting text
    /// requires [`Compositor::register_font`] first.
    pub fn new() -> Self {
        Self {
            ctx: None,
            shaper: TextShaper::new(),
            font: None,
            background_cache: HashMap::new(),
            gradient_paint: None,
        }
    }

    /// Register the font used for title and subtitle glyphs.
    pub fn register_font(&mut self, font_bytes: &[u8]) -> ThumbResult<()> {
        self.shaper.register_font(font_bytes)?;
        self.font = Some(vello_cpu::peniko::FontData::new(
            vello_cpu::peniko::Blob::from(font_bytes.to_vec()),
            0,
        ));
        Ok(())
    }

    /// Render the document into a fresh 1280x720 surface.
    ///
    /// Idempotent: the same document state always produces byte-identical pixels. A background
    /// that fails to decode falls back to the gradient; the failure never propagates.
    #[tracing::instrument(skip(self, doc), fields(fingerprint = doc.fingerprint()))]
    pub fn render(&mut self, doc: &ThumbnailDocument) -> ThumbResult<RenderedSurface> {
        doc.validate()?;

        let w = SURFACE_WIDTH as u16;
        let h = SURFACE_HEIGHT as u16;
        let mut pixmap = vello_cpu::Pixmap::new(w, h);

        let background = match &doc.background {
            Some(src) => self.background_image(src),
            None => None,
        };

        self.with_ctx_mut(w, h, |this, ctx| {
            ctx.set_blend_mode(vello_cpu::peniko::BlendMode::default());
            ctx.set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);

            this.paint_background(ctx, background.as_ref())?;

            if !doc.title.is_empty() || !doc.subtitle.is_empty() {
                ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
                ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
                    OVERLAY_RGBA[0],
                    OVERLAY_RGBA[1],
                    OVERLAY_RGBA[2],
                    OVERLAY_RGBA[3],
                ));
                ctx.fill_rect(&full_surface_rect());
            }

            this.paint_block(ctx, &doc.title, doc.title_size_px, &TITLE_STYLE)?;
            this.paint_block(ctx, &doc.subtitle, doc.subtitle_size_px, &SUBTITLE_STYLE)?;

            ctx.flush();
            ctx.render_to_pixmap(&mut pixmap);
            Ok(())
        })?;

        Ok(RenderedSurface {
            width: SURFACE_WIDTH,
            height: SURFACE_HEIGHT,
            data: pixmap.data_as_u8_slice().to_vec(),
        })
    }

    /// Return the cached decode result for a background, decoding synchronously on a miss.
    ///
    /// `None` means "paint the gradient": either no decode has succeeded for this key or the
    /// payload is not a decodable raster.
    pub(crate) fn background_image(&mut self, src: &BackgroundSource) -> Option<PreparedImage> {
        let key = src.cache_key();
        if let Some(cached) = self.background_cache.get(&key) {
            return cached.clone();
        }
        let decoded = match decode_background(src) {
            Ok(img) => Some(img),
            Err(e) => {
                tracing::warn!(error = %e, "background decode failed; using gradient fallback");
                None
            }
        };
        self.background_cache.insert(key, decoded.clone());
        decoded
    }

    /// Record an externally produced decode result (used by the render session so the render
    /// path itself never blocks on IO).
    pub(crate) fn insert_decoded(&mut self, key: u64, decoded: Option<PreparedImage>) {
        self.background_cache.insert(key, decoded);
    }

    /// Whether a decode result (success or failure) is already cached for this key.
    pub(crate) fn has_decoded(&self, key: u64) -> bool {
        self.background_cache.contains_key(&key)
    }

    fn paint_background(
        &mut self,
        ctx: &mut vello_cpu::RenderContext,
        background: Option<&PreparedImage>,
    ) -> ThumbResult<()> {
        match background {
            Some(img) => {
                let paint = prepared_to_image(img)?;
                ctx.set_transform(affine_to_cpu(stretch_fill_transform(img.width, img.height)));
                ctx.set_paint(paint);
                ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
                    0.0,
                    0.0,
                    img.width as f64,
                    img.height as f64,
                ));
            }
            None => {
                let paint = match &self.gradient_paint {
                    Some(p) => p.clone(),
                    None => {
                        let bytes = gradient_background();
                        let p = rgba_premul_to_image(&bytes, SURFACE_WIDTH, SURFACE_HEIGHT)?;
                        self.gradient_paint = Some(p.clone());
                        p
                    }
                };
                ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
                ctx.set_paint(paint);
                ctx.fill_rect(&full_surface_rect());
            }
        }
        Ok(())
    }

    fn paint_block(
        &mut self,
        ctx: &mut vello_cpu::RenderContext,
        text: &str,
        size_px: u32,
        style: &BlockStyle,
    ) -> ThumbResult<()> {
        if text.is_empty() {
            return Ok(());
        }
        let font = self
            .font
            .clone()
            .ok_or_else(|| ThumbError::validation("no font registered; cannot paint text"))?;

        let layout = self.shaper.layout(text, size_px as f32, style.bold)?;
        let measured = f64::from(layout.width());
        let Some(rect) = backdrop_rect(measured, f64::from(size_px), style) else {
            // Degenerate measurement: the whole block is skipped, backdrop included.
            tracing::debug!(measured, "degenerate text measurement; skipping block");
            return Ok(());
        };

        ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        ctx.set_paint(rgba8_color(style.backdrop_rgba));
        ctx.fill_path(&rounded_rect_to_cpu(&backdrop_shape(rect, style)));

        // Center-based glyph semantics: the layout box's vertical middle sits on the anchor.
        let offset_x = CENTER_X - measured / 2.0;
        let offset_y = style.anchor_y - f64::from(layout.height()) / 2.0;
        ctx.set_transform(affine_to_cpu(kurbo::Affine::translate((offset_x, offset_y))));

        for line in layout.lines() {
            for item in line.items() {
                let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                    continue;
                };
                let glyphs: Vec<vello_cpu::Glyph> = run
                    .glyphs()
                    .map(|g| vello_cpu::Glyph {
                        id: g.id,
                        x: g.x,
                        y: g.y,
                    })
                    .collect();
                let font_size = run.run().font_size();

                // Outline first, fill second: the stroke reads as a halo around the fill.
                ctx.set_stroke(vello_cpu::kurbo::Stroke::new(style.stroke_width));
                ctx.set_paint(rgba8_color(style.stroke_rgba));
                ctx.glyph_run(&font)
                    .font_size(font_size)
                    .stroke_glyphs(glyphs.iter().copied());

                ctx.set_paint(rgba8_color(style.fill_rgba));
                ctx.glyph_run(&font)
                    .font_size(font_size)
                    .fill_glyphs(glyphs.into_iter());
            }
        }
        Ok(())
    }

    fn with_ctx_mut<R>(
        &mut self,
        width: u16,
        height: u16,
        f: impl FnOnce(&mut Self, &mut vello_cpu::RenderContext) -> ThumbResult<R>,
    ) -> ThumbResult<R> {
        let mut ctx = match self.ctx.take() {
            None => vello_cpu::RenderContext::new(width, height),
            Some(ctx) if ctx.width() == width && ctx.height() == height => ctx,
            Some(_) => vello_cpu::RenderContext::new(width, height),
        };
        ctx.reset();
        let out = f(self, &mut ctx)?;
        self.ctx = Some(ctx);
        Ok(out)
    }
}

fn full_surface_rect() -> vello_cpu::kurbo::Rect {
    vello_cpu::kurbo::Rect::new(0.0, 0.0, SURFACE_WIDTH as f64, SURFACE_HEIGHT as f64)
}

fn rgba8_color(rgba: [u8; 4]) -> vello_cpu::peniko::Color {
    vello_cpu::peniko::Color::from_rgba8(rgba[0], rgba[1], rgba[2], rgba[3])
}

fn affine_to_cpu(a: kurbo::Affine) -> vello_cpu::kurbo::Affine {
    vello_cpu::kurbo::Affine::new(a.as_coeffs())
}

fn rounded_rect_to_cpu(rr: &kurbo::RoundedRect) -> vello_cpu::kurbo::BezPath {
    use kurbo::{PathEl, Shape};

    let mut out = vello_cpu::kurbo::BezPath::new();
    for el in rr.path_elements(0.1) {
        match el {
            PathEl::MoveTo(p) => out.move_to(vello_cpu::kurbo::Point::new(p.x, p.y)),
            PathEl::LineTo(p) => out.line_to(vello_cpu::kurbo::Point::new(p.x, p.y)),
            PathEl::QuadTo(p1, p2) => out.quad_to(
                vello_cpu::kurbo::Point::new(p1.x, p1.y),
                vello_cpu::kurbo::Point::new(p2.x, p2.y),
            ),
            PathEl::CurveTo(p1, p2, p3) => out.curve_to(
                vello_cpu::kurbo::Point::new(p1.x, p1.y),
                vello_cpu::kurbo::Point::new(p2.x, p2.y),
                vello_cpu::kurbo::Point::new(p3.x, p3.y),
            ),
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

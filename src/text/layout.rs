use kurbo::{Rect, RoundedRect};

use crate::foundation::core::{SURFACE_HEIGHT, SURFACE_WIDTH};

/// Horizontal center of every text block.
pub const CENTER_X: f64 = SURFACE_WIDTH as f64 / 2.0;

/// Title anchor: 50px above vertical center, center-based glyph semantics.
pub const TITLE_ANCHOR_Y: f64 = SURFACE_HEIGHT as f64 / 2.0 - 50.0;

/// Subtitle anchor: 50px below vertical center.
pub const SUBTITLE_ANCHOR_Y: f64 = SURFACE_HEIGHT as f64 / 2.0 + 50.0;

/// Full-surface contrast overlay, black at 30% opacity. Painted beneath all text whenever at
/// least one block is non-empty.
pub const OVERLAY_RGBA: [u8; 4] = [0, 0, 0, 77];

/// Visual style of one text block: backdrop geometry plus glyph paint.
///
/// Colors are straight-alpha RGBA8.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BlockStyle {
    /// Vertical anchor of the block's center line.
    pub anchor_y: f64,
    /// Horizontal padding either side of the measured text; also sets backdrop height slack.
    pub padding: f64,
    /// Backdrop corner radius in pixels.
    pub corner_radius: f64,
    /// Backdrop fill color.
    pub backdrop_rgba: [u8; 4],
    /// Glyph fill color.
    pub fill_rgba: [u8; 4],
    /// Glyph outline color. The outline paints first so it reads as a halo around the fill.
    pub stroke_rgba: [u8; 4],
    /// Glyph outline width in pixels.
    pub stroke_width: f64,
    /// Whether glyphs use the bold face.
    pub bold: bool,
}

/// Style of the title block.
pub const TITLE_STYLE: BlockStyle = BlockStyle {
    anchor_y: TITLE_ANCHOR_Y,
    padding: 30.0,
    corner_radius: 15.0,
    backdrop_rgba: [0, 0, 0, 179],
    fill_rgba: [255, 255, 255, 255],
    stroke_rgba: [0, 0, 0, 255],
    stroke_width: 4.0,
    bold: true,
};

/// Style of the subtitle block.
pub const SUBTITLE_STYLE: BlockStyle = BlockStyle {
    anchor_y: SUBTITLE_ANCHOR_Y,
    padding: 20.0,
    corner_radius: 10.0,
    backdrop_rgba: [255, 193, 7, 230],
    fill_rgba: [0, 0, 0, 255],
    stroke_rgba: [255, 255, 255, 255],
    stroke_width: 2.0,
    bold: false,
};

/// Compute the backdrop rectangle for a measured text block.
///
/// The rect is `measured_width + 2*padding` wide and `font_size_px + padding` tall, centered on
/// `(CENTER_X, style.anchor_y)`. Backdrops wider than the surface are allowed to overflow the
/// canvas edges.
///
/// Returns `None` for a degenerate measurement (zero, negative, or non-finite width): that block
/// paints nothing at all.
pub fn backdrop_rect(measured_width: f64, font_size_px: f64, style: &BlockStyle) -> Option<Rect> {
    if !measured_width.is_finite() || measured_width <= 0.0 {
        return None;
    }

    let w = measured_width + 2.0 * style.padding;
    let h = font_size_px + style.padding;
    Some(Rect::new(
        CENTER_X - w / 2.0,
        style.anchor_y - h / 2.0,
        CENTER_X + w / 2.0,
        style.anchor_y + h / 2.0,
    ))
}

/// Rounded-rectangle backdrop shape: four quarter-circle corners, one closed filled region.
pub fn backdrop_shape(rect: Rect, style: &BlockStyle) -> RoundedRect {
    RoundedRect::from_rect(rect, style.corner_radius)
}

#[cfg(test)]
#[path = "../../tests/unit/text/layout.rs"]
mod tests;

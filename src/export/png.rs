use std::path::{Path, PathBuf};

use anyhow::Context;
use image::ImageEncoder;

use crate::foundation::error::{ThumbError, ThumbResult};
use crate::render::surface::RenderedSurface;

/// Fixed filename of the exported thumbnail.
pub const EXPORT_FILENAME: &str = "youtube-thumbnail.png";

/// Encode the surface as a lossless PNG at full resolution.
///
/// Surface pixels are premultiplied; PNG carries straight alpha, so channels are
/// unpremultiplied first. An encoder that yields no bytes is surfaced as a retryable
/// [`ThumbError::Export`], never silently swallowed.
pub fn encode_png(surface: &RenderedSurface) -> ThumbResult<Vec<u8>> {
    let expected = (surface.width as usize)
        .saturating_mul(surface.height as usize)
        .saturating_mul(4);
    if surface.data.len() != expected {
        return Err(ThumbError::export("surface buffer size mismatch"));
    }

    let mut straight = surface.data.clone();
    unpremultiply_rgba8_in_place(&mut straight);

    let mut out = Vec::new();
    image::codecs::png::PngEncoder::new(&mut out)
        .write_image(
            &straight,
            surface.width,
            surface.height,
            image::ExtendedColorType::Rgba8,
        )
        .map_err(|e| ThumbError::export(format!("png encode failed: {e}")))?;

    if out.is_empty() {
        return Err(ThumbError::export("png encoder produced no data"));
    }
    Ok(out)
}

/// Write the exported PNG under its fixed filename into `dir`, returning the full path.
pub fn export_to_file(surface: &RenderedSurface, dir: &Path) -> ThumbResult<PathBuf> {
    let bytes = encode_png(surface)?;
    let path = dir.join(EXPORT_FILENAME);
    std::fs::write(&path, bytes)
        .with_context(|| format!("write exported thumbnail '{}'", path.display()))?;
    Ok(path)
}

fn unpremultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = px[3] as u16;
        if a == 0 || a == 255 {
            continue;
        }
        px[0] = (((px[0] as u16) * 255 + a / 2) / a).min(255) as u8;
        px[1] = (((px[1] as u16) * 255 + a / 2) / a).min(255) as u8;
        px[2] = (((px[2] as u16) * 255 + a / 2) / a).min(255) as u8;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/export/png.rs"]
mod tests;

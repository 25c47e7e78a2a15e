use std::sync::Arc;

use anyhow::Context;
use base64::Engine as _;

use crate::document::BackgroundSource;
use crate::foundation::error::{ThumbError, ThumbResult};

/// Prepared raster image in premultiplied RGBA8 form.
#[derive(Clone, Debug)]
pub struct PreparedImage {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Pixel bytes in row-major premultiplied RGBA8.
    pub rgba8_premul: Arc<Vec<u8>>,
}

/// Decode encoded image bytes and convert to premultiplied RGBA8.
pub fn decode_image(bytes: &[u8]) -> ThumbResult<PreparedImage> {
    let dyn_img = image::load_from_memory(bytes).context("decode image from memory")?;
    let rgba = dyn_img.to_rgba8();
    let (width, height) = rgba.dimensions();

    let mut rgba8_premul = rgba.into_raw();
    premultiply_rgba8_in_place(&mut rgba8_premul);

    Ok(PreparedImage {
        width,
        height,
        rgba8_premul: Arc::new(rgba8_premul),
    })
}

/// Decode a background source, whichever form it takes.
#[tracing::instrument(skip(source), fields(key = source.cache_key()))]
pub fn decode_background(source: &BackgroundSource) -> ThumbResult<PreparedImage> {
    match source {
        BackgroundSource::Encoded(bytes) => decode_image(bytes),
        BackgroundSource::DataUrl(url) => {
            let bytes = data_url_payload(url)?;
            decode_image(&bytes)
        }
    }
}

/// Extract and base64-decode the payload of a `data:` URL.
///
/// Accepts any `image/*` media type; the media type itself is ignored because the image decoder
/// sniffs the container format from the payload.
fn data_url_payload(url: &str) -> ThumbResult<Vec<u8>> {
    let rest = url
        .strip_prefix("data:")
        .ok_or_else(|| ThumbError::decode("background URL is not a data: URL"))?;
    let (meta, payload) = rest
        .split_once(',')
        .ok_or_else(|| ThumbError::decode("data URL has no payload separator"))?;
    if !meta.ends_with(";base64") {
        return Err(ThumbError::decode("data URL payload must be base64"));
    }

    base64::engine::general_purpose::STANDARD
        .decode(payload.trim())
        .map_err(|e| ThumbError::decode(format!("invalid base64 payload: {e}")))
}

fn premultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = px[3] as u16;
        if a == 0 {
            px[0] = 0;
            px[1] = 0;
            px[2] = 0;
            continue;
        }
        px[0] = ((px[0] as u16 * a + 127) / 255) as u8;
        px[1] = ((px[1] as u16 * a + 127) / 255) as u8;
        px[2] = ((px[2] as u16 * a + 127) / 255) as u8;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/decode.rs"]
mod tests;

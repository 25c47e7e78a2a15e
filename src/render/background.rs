use std::sync::Arc;

use crate::assets::decode::PreparedImage;
use crate::foundation::core::{Rgba8Premul, SURFACE_HEIGHT, SURFACE_WIDTH};
use crate::foundation::error::{ThumbError, ThumbResult};

/// Gradient start color at (0,0): `#FF0000`.
pub const GRADIENT_START: Rgba8Premul = Rgba8Premul {
    r: 255,
    g: 0,
    b: 0,
    a: 255,
};

/// Gradient end color at (1280,720): `#FF6B00`.
pub const GRADIENT_END: Rgba8Premul = Rgba8Premul {
    r: 255,
    g: 107,
    b: 0,
    a: 255,
};

/// Generate the fallback background: a linear gradient from the top-left corner to the
/// bottom-right corner, interpolated along the projection of each pixel onto the diagonal.
///
/// Deterministic and opaque, so premultiplied equals straight alpha.
pub fn gradient_background() -> Vec<u8> {
    let w = SURFACE_WIDTH as usize;
    let h = SURFACE_HEIGHT as usize;
    let mut bytes = vec![0u8; w * h * 4];

    // t = (x*W + y*H) / (W^2 + H^2): 0 at (0,0), 1 at (W,H).
    let wf = SURFACE_WIDTH as f32;
    let hf = SURFACE_HEIGHT as f32;
    let denom = wf * wf + hf * hf;

    for y in 0..h {
        for x in 0..w {
            let t = ((x as f32) * wf + (y as f32) * hf) / denom;
            let idx = (y * w + x) * 4;
            bytes[idx] = lerp_u8(GRADIENT_START.r, GRADIENT_END.r, t);
            bytes[idx + 1] = lerp_u8(GRADIENT_START.g, GRADIENT_END.g, t);
            bytes[idx + 2] = lerp_u8(GRADIENT_START.b, GRADIENT_END.b, t);
            bytes[idx + 3] = 255;
        }
    }
    bytes
}

/// Wrap premultiplied RGBA8 bytes as a `vello_cpu` image paint.
pub(crate) fn rgba_premul_to_image(
    bytes_premul: &[u8],
    width: u32,
    height: u32,
) -> ThumbResult<vello_cpu::Image> {
    let pixmap = pixmap_from_premul_bytes(bytes_premul, width, height)?;
    Ok(vello_cpu::Image {
        image: vello_cpu::ImageSource::Pixmap(Arc::new(pixmap)),
        sampler: vello_cpu::peniko::ImageSampler::default(),
    })
}

/// Wrap a prepared (already premultiplied) image as a paint.
pub(crate) fn prepared_to_image(img: &PreparedImage) -> ThumbResult<vello_cpu::Image> {
    rgba_premul_to_image(&img.rgba8_premul, img.width, img.height)
}

/// Transform that stretches a `width x height` source to exactly fill the surface.
///
/// Aspect ratio is intentionally not preserved: full-bleed coverage is the contract.
pub(crate) fn stretch_fill_transform(width: u32, height: u32) -> kurbo::Affine {
    let sx = SURFACE_WIDTH as f64 / (width.max(1) as f64);
    let sy = SURFACE_HEIGHT as f64 / (height.max(1) as f64);
    kurbo::Affine::scale_non_uniform(sx, sy)
}

fn pixmap_from_premul_bytes(bytes: &[u8], width: u32, height: u32) -> ThumbResult<vello_cpu::Pixmap> {
    let w: u16 = width
        .try_into()
        .map_err(|_| ThumbError::render("pixmap width exceeds u16"))?;
    let h: u16 = height
        .try_into()
        .map_err(|_| ThumbError::render("pixmap height exceeds u16"))?;
    if bytes.len()
        != (width as usize)
            .saturating_mul(height as usize)
            .saturating_mul(4)
    {
        return Err(ThumbError::render("pixmap byte len mismatch"));
    }
    // Pixmap stores PremulRgba8; our bytes are already premultiplied.
    let mut pixels = Vec::<vello_cpu::peniko::color::PremulRgba8>::with_capacity(
        (width as usize) * (height as usize),
    );
    for px in bytes.chunks_exact(4) {
        pixels.push(vello_cpu::peniko::color::PremulRgba8::from_u8_array([
            px[0], px[1], px[2], px[3],
        ]));
    }
    Ok(vello_cpu::Pixmap::from_parts_with_opacity(pixels, w, h, true))
}

fn lerp_u8(a: u8, b: u8, t: f32) -> u8 {
    let af = a as f32;
    let bf = b as f32;
    (af + (bf - af) * t).round().clamp(0.0, 255.0) as u8
}

#[cfg(test)]
#[path = "../../tests/unit/render/background.rs"]
mod tests;

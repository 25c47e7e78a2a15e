/// A rendered thumbnail surface as premultiplied RGBA8 pixels.
///
/// Fully regenerated on every render; there is no identity beyond "latest surface for this
/// document state". Always exactly 1280x720.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderedSurface {
    /// Surface width in pixels.
    pub width: u32,
    /// Surface height in pixels.
    pub height: u32,
    /// RGBA8 bytes, tightly packed, row-major, premultiplied alpha.
    pub data: Vec<u8>,
}

impl RenderedSurface {
    /// Read one pixel as `[r, g, b, a]` premultiplied bytes.
    ///
    /// Returns `None` when out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
        let px = self.data.get(idx..idx + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }

    /// Order-sensitive 64-bit digest of the pixel data.
    ///
    /// Cheap determinism check: two surfaces with equal digests are byte-identical for all
    /// practical purposes in tests.
    pub fn digest(&self) -> u64 {
        let mut state = 0x9E37_79B9_7F4A_7C15u64;
        for chunk in self.data.chunks(8) {
            let mut v = 0u64;
            for (i, &b) in chunk.iter().enumerate() {
                v |= (b as u64) << (i * 8);
            }
            state = mix64(state ^ v);
        }
        state
    }
}

fn mix64(mut z: u64) -> u64 {
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

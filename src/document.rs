use std::sync::Arc;

use xxhash_rust::xxh3::Xxh3;

use crate::foundation::error::{ThumbError, ThumbResult};

/// Inclusive title font size range in pixels.
pub const TITLE_SIZE_RANGE: (u32, u32) = (40, 120);

/// Inclusive subtitle font size range in pixels.
pub const SUBTITLE_SIZE_RANGE: (u32, u32) = (20, 60);

/// Where background pixels come from.
///
/// Both forms carry an encoded raster of arbitrary dimensions; the renderer stretches it to fill
/// the full surface.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum BackgroundSource {
    /// Encoded image bytes (PNG, JPEG, ...) from an uploaded file.
    Encoded(Arc<Vec<u8>>),
    /// A `data:image/...;base64,...` URL, as delivered by the background generation service.
    DataUrl(String),
}

impl BackgroundSource {
    /// Build a source from encoded image bytes.
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Self::Encoded(Arc::new(bytes.into()))
    }

    /// Stable cache key for the underlying payload.
    pub fn cache_key(&self) -> u64 {
        let mut h = Xxh3::new();
        match self {
            Self::Encoded(bytes) => {
                h.update(&[0x01]);
                h.update(bytes);
            }
            Self::DataUrl(url) => {
                h.update(&[0x02]);
                h.update(url.as_bytes());
            }
        }
        h.digest()
    }
}

/// The editable thumbnail document.
///
/// Transient, in-memory, owned by a single editing session. The rendered surface is always
/// exactly 1280x720 regardless of these fields; the five fields below are the complete set of
/// render inputs, and [`ThumbnailDocument::fingerprint`] over them is the sole repaint
/// invalidation signal.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ThumbnailDocument {
    /// Optional background raster; absent means the gradient fallback.
    pub background: Option<BackgroundSource>,
    /// Main overlay text.
    pub title: String,
    /// Secondary overlay text.
    pub subtitle: String,
    /// Title font size in pixels, clamped to [40, 120].
    pub title_size_px: u32,
    /// Subtitle font size in pixels, clamped to [20, 60].
    pub subtitle_size_px: u32,
}

impl Default for ThumbnailDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl ThumbnailDocument {
    /// Create an empty document with the editor's default font sizes.
    pub fn new() -> Self {
        Self {
            background: None,
            title: String::new(),
            subtitle: String::new(),
            title_size_px: 72,
            subtitle_size_px: 36,
        }
    }

    /// Set the background source.
    pub fn set_background(&mut self, background: Option<BackgroundSource>) {
        self.background = background;
    }

    /// Set the title text.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    /// Set the subtitle text.
    pub fn set_subtitle(&mut self, subtitle: impl Into<String>) {
        self.subtitle = subtitle.into();
    }

    /// Set the title font size, clamped to the valid range.
    pub fn set_title_size_px(&mut self, size: u32) {
        self.title_size_px = size.clamp(TITLE_SIZE_RANGE.0, TITLE_SIZE_RANGE.1);
    }

    /// Set the subtitle font size, clamped to the valid range.
    pub fn set_subtitle_size_px(&mut self, size: u32) {
        self.subtitle_size_px = size.clamp(SUBTITLE_SIZE_RANGE.0, SUBTITLE_SIZE_RANGE.1);
    }

    /// Validate font size ranges.
    ///
    /// Setters clamp, so this only rejects documents built by hand or deserialized from JSON.
    pub fn validate(&self) -> ThumbResult<()> {
        if self.title_size_px < TITLE_SIZE_RANGE.0 || self.title_size_px > TITLE_SIZE_RANGE.1 {
            return Err(ThumbError::validation(format!(
                "title_size_px {} outside [{}, {}]",
                self.title_size_px, TITLE_SIZE_RANGE.0, TITLE_SIZE_RANGE.1
            )));
        }
        if self.subtitle_size_px < SUBTITLE_SIZE_RANGE.0
            || self.subtitle_size_px > SUBTITLE_SIZE_RANGE.1
        {
            return Err(ThumbError::validation(format!(
                "subtitle_size_px {} outside [{}, {}]",
                self.subtitle_size_px, SUBTITLE_SIZE_RANGE.0, SUBTITLE_SIZE_RANGE.1
            )));
        }
        Ok(())
    }

    /// Hash of exactly the render-relevant fields.
    ///
    /// Two documents with equal fingerprints render to identical surfaces, and a repaint
    /// is warranted iff the fingerprint changed.
    pub fn fingerprint(&self) -> u64 {
        let mut h = Xxh3::new();
        match &self.background {
            None => h.update(&[0x00]),
            Some(src) => {
                h.update(&[0x01]);
                h.update(&src.cache_key().to_le_bytes());
            }
        }
        h.update(&(self.title.len() as u64).to_le_bytes());
        h.update(self.title.as_bytes());
        h.update(&(self.subtitle.len() as u64).to_le_bytes());
        h.update(self.subtitle.as_bytes());
        h.update(&self.title_size_px.to_le_bytes());
        h.update(&self.subtitle_size_px.to_le_bytes());
        h.digest()
    }
}

#[cfg(test)]
#[path = "../tests/unit/document.rs"]
mod tests;

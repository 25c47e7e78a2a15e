//! Thumbforge is a deterministic thumbnail compositing engine.
//!
//! It renders a [`ThumbnailDocument`] (background, title, subtitle, font sizes) into a fixed
//! 1280x720 raster surface that matches a live on-screen preview exactly:
//!
//! - Build a [`ThumbnailDocument`] and feed it to a [`Compositor`] (synchronous), or drive a
//!   [`RenderSession`] for last-write-wins rendering with off-thread background decode
//! - Export the [`RenderedSurface`] as a lossless PNG with [`export::png::encode_png`]
//! - Mirror it into a platform-style video card with [`preview::mirror_to_preview`]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

/// Background image decode.
pub mod assets;
/// The editable thumbnail document.
pub mod document;
/// PNG export adapter.
pub mod export;
/// Preview card adapter.
pub mod preview;
/// Surface rendering: background, compositor, session.
pub mod render;
/// Text shaping and block geometry.
pub mod text;

pub use crate::foundation::core::{Rgba8Premul, SURFACE_HEIGHT, SURFACE_WIDTH};
pub use crate::foundation::error::{ThumbError, ThumbResult};

pub use crate::document::{BackgroundSource, ThumbnailDocument};
pub use crate::export::png::{EXPORT_FILENAME, encode_png, export_to_file};
pub use crate::preview::{PreviewCard, mirror_to_preview, truncate_title};
pub use crate::render::compositor::Compositor;
pub use crate::render::session::RenderSession;
pub use crate::render::surface::RenderedSurface;

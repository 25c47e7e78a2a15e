/// Background painting: gradient fallback and stretch-fill bitmaps.
pub mod background;
/// The canvas surface manager.
pub mod compositor;
/// Last-write-wins render orchestration.
pub mod session;
/// Rendered surface type.
pub mod surface;

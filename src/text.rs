/// Pure block geometry: anchors, styles, backdrop rectangles.
pub mod layout;
/// Parley-backed shaping and measurement.
pub mod shape;

/// Lossless PNG encoding and the fixed-name file export.
pub mod png;

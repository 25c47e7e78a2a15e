/// Background image decode into premultiplied RGBA8.
pub mod decode;

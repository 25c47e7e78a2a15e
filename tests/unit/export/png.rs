use super::*;

fn solid_surface(w: u32, h: u32, rgba: [u8; 4]) -> RenderedSurface {
    let mut data = Vec::with_capacity((w * h * 4) as usize);
    for _ in 0..(w * h) {
        data.extend_from_slice(&rgba);
    }
    RenderedSurface {
        width: w,
        height: h,
        data,
    }
}

#[test]
fn encode_decodes_back_at_same_dimensions() {
    let surface = solid_surface(8, 4, [255, 0, 0, 255]);
    let png = encode_png(&surface).unwrap();
    let back = image::load_from_memory(&png).unwrap().to_rgba8();
    assert_eq!(back.dimensions(), (8, 4));
    assert_eq!(back.get_pixel(0, 0).0, [255, 0, 0, 255]);
}

#[test]
fn encode_unpremultiplies_partial_alpha() {
    // Premultiplied half-alpha red: straight form is (255, 0, 0, 128).
    let surface = solid_surface(2, 2, [128, 0, 0, 128]);
    let png = encode_png(&surface).unwrap();
    let back = image::load_from_memory(&png).unwrap().to_rgba8();
    let [r, _, _, a] = back.get_pixel(0, 0).0;
    assert_eq!(a, 128);
    assert_eq!(r, 255);
}

#[test]
fn encode_rejects_mismatched_buffers() {
    let mut surface = solid_surface(4, 4, [0, 0, 0, 255]);
    surface.data.pop();
    assert!(matches!(encode_png(&surface), Err(ThumbError::Export(_))));
}

#[test]
fn export_writes_the_fixed_filename() {
    let dir = tempfile::tempdir().unwrap();
    let surface = solid_surface(4, 4, [0, 255, 0, 255]);
    let path = export_to_file(&surface, dir.path()).unwrap();

    assert_eq!(path.file_name().unwrap(), EXPORT_FILENAME);
    let bytes = std::fs::read(&path).unwrap();
    assert!(!bytes.is_empty());
    assert!(image::load_from_memory(&bytes).is_ok());
}

use super::*;

use image::ImageEncoder;

fn tiny_png() -> Vec<u8> {
    // 2x1: opaque red, half-transparent green.
    let pixels: Vec<u8> = vec![255, 0, 0, 255, 0, 255, 0, 128];
    let mut out = Vec::new();
    image::codecs::png::PngEncoder::new(&mut out)
        .write_image(&pixels, 2, 1, image::ExtendedColorType::Rgba8)
        .unwrap();
    out
}

#[test]
fn decode_image_premultiplies() {
    let img = decode_image(&tiny_png()).unwrap();
    assert_eq!((img.width, img.height), (2, 1));

    let px = &img.rgba8_premul;
    assert_eq!(&px[0..4], &[255, 0, 0, 255]);
    // 255 * 128 / 255 = 128.
    assert_eq!(&px[4..8], &[0, 128, 0, 128]);
}

#[test]
fn decode_image_rejects_garbage() {
    assert!(decode_image(b"definitely not an image").is_err());
}

#[test]
fn decode_background_accepts_data_urls() {
    let payload = base64::engine::general_purpose::STANDARD.encode(tiny_png());
    let src = BackgroundSource::DataUrl(format!("data:image/png;base64,{payload}"));
    let img = decode_background(&src).unwrap();
    assert_eq!((img.width, img.height), (2, 1));
}

#[test]
fn decode_background_rejects_malformed_data_urls() {
    let not_data = BackgroundSource::DataUrl("https://example.com/a.png".to_string());
    assert!(matches!(
        decode_background(&not_data),
        Err(ThumbError::Decode(_))
    ));

    let no_comma = BackgroundSource::DataUrl("data:image/png;base64".to_string());
    assert!(decode_background(&no_comma).is_err());

    let not_base64 = BackgroundSource::DataUrl("data:image/png,plain".to_string());
    assert!(decode_background(&not_base64).is_err());

    let bad_payload = BackgroundSource::DataUrl("data:image/png;base64,!!!".to_string());
    assert!(decode_background(&bad_payload).is_err());
}

#[test]
fn decode_background_accepts_encoded_bytes() {
    let src = BackgroundSource::from_bytes(tiny_png());
    assert!(decode_background(&src).is_ok());
}

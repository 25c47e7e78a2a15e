use super::*;

fn pixel(bytes: &[u8], x: u32, y: u32) -> [u8; 4] {
    let idx = ((y as usize) * (SURFACE_WIDTH as usize) + (x as usize)) * 4;
    [bytes[idx], bytes[idx + 1], bytes[idx + 2], bytes[idx + 3]]
}

#[test]
fn gradient_corners_hit_the_stop_colors() {
    let bytes = gradient_background();
    assert_eq!(
        bytes.len(),
        (SURFACE_WIDTH * SURFACE_HEIGHT * 4) as usize
    );

    // Top-left is exactly #FF0000.
    assert_eq!(pixel(&bytes, 0, 0), [255, 0, 0, 255]);

    // Bottom-right approaches #FF6B00 (the last pixel center is one step short of t=1).
    let [r, g, b, a] = pixel(&bytes, SURFACE_WIDTH - 1, SURFACE_HEIGHT - 1);
    assert_eq!((r, b, a), (255, 0, 255));
    assert!(g >= 105, "expected near-107 green, got {g}");
}

#[test]
fn gradient_is_monotone_along_the_diagonal() {
    let bytes = gradient_background();
    let mut last_g = 0u8;
    for i in 0..8u32 {
        let x = i * (SURFACE_WIDTH / 8);
        let y = i * (SURFACE_HEIGHT / 8);
        let [_, g, _, _] = pixel(&bytes, x, y);
        assert!(g >= last_g);
        last_g = g;
    }
}

#[test]
fn gradient_is_deterministic() {
    assert_eq!(gradient_background(), gradient_background());
}

#[test]
fn stretch_fill_maps_source_extents_onto_the_surface() {
    let t = stretch_fill_transform(640, 1440);
    let c = t.as_coeffs();
    assert_eq!(c[0], 2.0);
    assert_eq!(c[3], 0.5);

    let far = t * kurbo::Point::new(640.0, 1440.0);
    assert_eq!(far, kurbo::Point::new(SURFACE_WIDTH as f64, SURFACE_HEIGHT as f64));
}

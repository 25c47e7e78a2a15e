use super::*;

#[test]
fn anchors_sit_fifty_px_off_vertical_center() {
    assert_eq!(CENTER_X, 640.0);
    assert_eq!(TITLE_ANCHOR_Y, 310.0);
    assert_eq!(SUBTITLE_ANCHOR_Y, 410.0);
}

#[test]
fn backdrop_adds_padding_both_sides_and_stays_centered() {
    let r = backdrop_rect(500.0, 72.0, &TITLE_STYLE).unwrap();
    assert_eq!(r.width(), 500.0 + 60.0);
    assert_eq!(r.height(), 72.0 + 30.0);
    assert_eq!((r.x0 + r.x1) / 2.0, 640.0);
    assert_eq!((r.y0 + r.y1) / 2.0, TITLE_ANCHOR_Y);

    let r = backdrop_rect(200.0, 36.0, &SUBTITLE_STYLE).unwrap();
    assert_eq!(r.width(), 200.0 + 40.0);
    assert_eq!(r.height(), 36.0 + 20.0);
    assert_eq!((r.x0 + r.x1) / 2.0, 640.0);
    assert_eq!((r.y0 + r.y1) / 2.0, SUBTITLE_ANCHOR_Y);
}

#[test]
fn degenerate_measurements_paint_nothing() {
    assert!(backdrop_rect(0.0, 72.0, &TITLE_STYLE).is_none());
    assert!(backdrop_rect(-4.0, 72.0, &TITLE_STYLE).is_none());
    assert!(backdrop_rect(f64::NAN, 72.0, &TITLE_STYLE).is_none());
    assert!(backdrop_rect(f64::INFINITY, 72.0, &TITLE_STYLE).is_none());
}

#[test]
fn wide_text_overflows_the_canvas_instead_of_clamping() {
    let r = backdrop_rect(1400.0, 72.0, &TITLE_STYLE).unwrap();
    assert!(r.x0 < 0.0);
    assert!(r.x1 > SURFACE_WIDTH as f64);
    // Still centered.
    assert_eq!((r.x0 + r.x1) / 2.0, 640.0);
}

#[test]
fn backdrop_shape_keeps_rect_and_radius() {
    let rect = backdrop_rect(500.0, 72.0, &TITLE_STYLE).unwrap();
    let rr = backdrop_shape(rect, &TITLE_STYLE);
    assert_eq!(rr.rect(), rect);
    assert_eq!(rr.radii().top_left, 15.0);

    let rect = backdrop_rect(200.0, 36.0, &SUBTITLE_STYLE).unwrap();
    let rr = backdrop_shape(rect, &SUBTITLE_STYLE);
    assert_eq!(rr.radii().top_left, 10.0);
}

#[test]
fn styles_match_the_canvas_design() {
    assert!(TITLE_STYLE.bold);
    assert!(!SUBTITLE_STYLE.bold);
    assert_eq!(TITLE_STYLE.stroke_width, 4.0);
    assert_eq!(SUBTITLE_STYLE.stroke_width, 2.0);
    assert_eq!(TITLE_STYLE.backdrop_rgba, [0, 0, 0, 179]);
    assert_eq!(SUBTITLE_STYLE.backdrop_rgba, [255, 193, 7, 230]);
    assert_eq!(OVERLAY_RGBA, [0, 0, 0, 77]);
}

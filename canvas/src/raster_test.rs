use super::*;

const FILL: Rgba<u8> = Rgba([9, 9, 9, 255]);

/// Image where every pixel encodes its own coordinates.
fn gradient(width: u32, height: u32) -> RgbaImage {
    RgbaImage::from_fn(width, height, |x, y| Rgba([x as u8, y as u8, 128, 255]))
}

// --- pad_to_square / crop_to_frame ---

#[test]
fn pad_places_original_at_offset() {
    let img = gradient(6, 4);
    let (square, frame) = pad_to_square(&img, FILL).unwrap();
    assert_eq!(square.dimensions(), (6, 6));
    assert_eq!(frame.offset_y, 1);
    assert_eq!(*square.get_pixel(0, 0), FILL);
    assert_eq!(*square.get_pixel(3, 1), *img.get_pixel(3, 0));
    assert_eq!(*square.get_pixel(5, 5), FILL);
}

#[test]
fn pad_square_input_is_unchanged() {
    let img = gradient(5, 5);
    let (square, frame) = pad_to_square(&img, FILL).unwrap();
    assert!(frame.is_identity());
    assert_eq!(square, img);
}

#[test]
fn pad_empty_image_errors() {
    let img = RgbaImage::new(0, 3);
    assert!(matches!(pad_to_square(&img, FILL), Err(CanvasError::EmptyImage { .. })));
}

#[test]
fn pad_then_crop_restores_original() {
    for (w, h) in [(7, 3), (3, 7), (10, 9), (1, 12), (4, 4)] {
        let img = gradient(w, h);
        let (square, frame) = pad_to_square(&img, FILL).unwrap();
        let back = crop_to_frame(&square, &frame).unwrap();
        assert_eq!(back, img, "round trip failed for {w}x{h}");
    }
}

#[test]
fn crop_to_frame_rescales_larger_answer() {
    let img = gradient(40, 20);
    let (square, frame) = pad_to_square(&img, FILL).unwrap();
    let upscaled = imageops::resize(&square, 80, 80, FilterType::Nearest);
    let back = crop_to_frame(&upscaled, &frame).unwrap();
    assert_eq!(back.dimensions(), (40, 20));
}

#[test]
fn crop_to_frame_handles_non_square_answer() {
    let img = gradient(20, 10);
    let (_, frame) = pad_to_square(&img, FILL).unwrap();
    let answer = RgbaImage::from_pixel(40, 30, Rgba([1, 2, 3, 255]));
    let back = crop_to_frame(&answer, &frame).unwrap();
    assert_eq!(back.dimensions(), (20, 10));
    let px = back.get_pixel(10, 5);
    assert!(px[0].abs_diff(1) <= 1 && px[2].abs_diff(3) <= 1);
}

#[test]
fn crop_to_frame_empty_answer_errors() {
    let frame = SquareFrame::for_size(Size::new(4, 2));
    let answer = RgbaImage::new(0, 0);
    assert!(matches!(crop_to_frame(&answer, &frame), Err(CanvasError::EmptyImage { .. })));
}

#[test]
fn crop_to_frame_degenerate_rect_errors() {
    // A 1000x1 strip padded to 1000x1000, answered at 2x2: the strip's
    // scaled height rounds to zero.
    let frame = SquareFrame::for_size(Size::new(1000, 1));
    let answer = RgbaImage::from_pixel(2, 2, FILL);
    assert!(matches!(crop_to_frame(&answer, &frame), Err(CanvasError::DegenerateRect { .. })));
}

// --- mark_hotspot ---

#[test]
fn marker_paints_centre_and_ring() {
    let mut img = RgbaImage::from_pixel(100, 100, Rgba([0, 0, 255, 255]));
    let style = MarkerStyle::for_side(100);
    mark_hotspot(&mut img, Point::new(50.0, 50.0), style).unwrap();

    assert_eq!(*img.get_pixel(50, 50), style.fill);
    // Radius is 6px at this size; the ring sits just outside it.
    assert_eq!(*img.get_pixel(57, 50), style.ring_color);
    assert_eq!(*img.get_pixel(70, 50), Rgba([0, 0, 255, 255]));
}

#[test]
fn marker_near_edge_is_clipped() {
    let mut img = RgbaImage::from_pixel(10, 10, Rgba([0, 0, 0, 255]));
    let style = MarkerStyle::for_side(10);
    mark_hotspot(&mut img, Point::new(0.0, 9.5), style).unwrap();
    assert_eq!(*img.get_pixel(0, 9), style.fill);
}

#[test]
fn marker_outside_image_errors() {
    let mut img = RgbaImage::new(10, 10);
    let err = mark_hotspot(&mut img, Point::new(10.0, 2.0), MarkerStyle::for_side(10)).unwrap_err();
    assert!(matches!(err, CanvasError::PointOutOfBounds { .. }));
}

#[test]
fn marker_radius_scales_with_side() {
    assert!((MarkerStyle::for_side(100).radius - MARKER_MIN_RADIUS_PX).abs() < f64::EPSILON);
    assert!((MarkerStyle::for_side(2000).radius - 30.0).abs() < 1e-9);
}

// --- expand / crop / resize_to ---

#[test]
fn expand_places_original_and_fills() {
    let img = gradient(4, 3);
    let exp = Expansion { top: 1, right: 2, bottom: 0, left: 3 };
    let (grown, placed) = expand(&img, exp, FILL).unwrap();
    assert_eq!(grown.dimensions(), (9, 4));
    assert_eq!(placed, Rect::new(3, 1, 4, 3));
    assert_eq!(*grown.get_pixel(0, 0), FILL);
    assert_eq!(*grown.get_pixel(3, 1), *img.get_pixel(0, 0));
}

#[test]
fn expand_without_growth_errors() {
    let img = gradient(4, 3);
    assert!(matches!(expand(&img, Expansion::default(), FILL), Err(CanvasError::EmptyExpansion)));
}

#[test]
fn crop_clamps_to_bounds() {
    let img = gradient(10, 10);
    let out = crop(&img, Rect::new(8, 7, 50, 50)).unwrap();
    assert_eq!(out.dimensions(), (2, 3));
    assert_eq!(*out.get_pixel(0, 0), *img.get_pixel(8, 7));
}

#[test]
fn crop_outside_errors() {
    let img = gradient(10, 10);
    assert!(matches!(crop(&img, Rect::new(10, 0, 1, 1)), Err(CanvasError::DegenerateRect { .. })));
}

#[test]
fn resize_to_changes_dimensions() {
    let img = gradient(10, 10);
    assert_eq!(resize_to(&img, Size::new(5, 20)).unwrap().dimensions(), (5, 20));
    assert_eq!(resize_to(&img, Size::new(10, 10)).unwrap(), img);
    assert!(resize_to(&img, Size::new(0, 20)).is_err());
}

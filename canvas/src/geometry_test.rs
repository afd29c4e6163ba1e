#![allow(clippy::float_cmp)]

use super::*;

// --- SquareFrame ---

#[test]
fn frame_for_landscape_pads_vertically() {
    let frame = SquareFrame::for_size(Size::new(400, 300));
    assert_eq!(frame.side, 400);
    assert_eq!(frame.offset_x, 0);
    assert_eq!(frame.offset_y, 50);
    assert_eq!(frame.content_rect(), Rect::new(0, 50, 400, 300));
}

#[test]
fn frame_for_portrait_pads_horizontally() {
    let frame = SquareFrame::for_size(Size::new(300, 400));
    assert_eq!(frame.side, 400);
    assert_eq!(frame.offset_x, 50);
    assert_eq!(frame.offset_y, 0);
}

#[test]
fn frame_odd_padding_goes_right() {
    let frame = SquareFrame::for_size(Size::new(10, 7));
    assert_eq!(frame.side, 10);
    // 3 px of padding: 1 above, 2 below.
    assert_eq!(frame.offset_y, 1);
    let rect = frame.content_rect();
    assert_eq!(frame.side - (rect.y + rect.height), 2);
}

#[test]
fn frame_for_square_is_identity() {
    let frame = SquareFrame::for_size(Size::new(512, 512));
    assert!(frame.is_identity());
    assert_eq!(frame.content_rect(), Rect::new(0, 0, 512, 512));
}

#[test]
fn frame_point_round_trip() {
    let frame = SquareFrame::for_size(Size::new(640, 480));
    let p = Point::new(12.5, 99.0);
    let sq = frame.to_square(p);
    assert_eq!(sq, Point::new(12.5, 179.0));
    assert_eq!(frame.from_square(sq), p);
}

#[test]
fn content_rect_in_same_size_is_unscaled() {
    let frame = SquareFrame::for_size(Size::new(400, 300));
    assert_eq!(frame.content_rect_in(Size::new(400, 400)), frame.content_rect());
}

#[test]
fn content_rect_in_scales_to_returned_resolution() {
    let frame = SquareFrame::for_size(Size::new(400, 300));
    let rect = frame.content_rect_in(Size::new(1024, 1024));
    assert_eq!(rect, Rect::new(0, 128, 1024, 768));
}

#[test]
fn content_rect_in_scales_axes_independently() {
    let frame = SquareFrame::for_size(Size::new(300, 400));
    let rect = frame.content_rect_in(Size::new(800, 400));
    assert_eq!(rect, Rect::new(100, 0, 600, 400));
}

#[test]
fn content_rect_in_empty_returned_is_empty() {
    let frame = SquareFrame::for_size(Size::new(300, 400));
    assert!(frame.content_rect_in(Size::new(0, 0)).is_empty());
}

#[test]
fn frame_serializes_fields() {
    let frame = SquareFrame::for_size(Size::new(4, 2));
    let json = serde_json::to_value(frame).unwrap();
    assert_eq!(json["side"], 4);
    assert_eq!(json["offset_y"], 1);
}

// --- Rect ---

#[test]
fn clamp_inside_is_unchanged() {
    let r = Rect::new(1, 2, 3, 4);
    assert_eq!(r.clamp_to(Size::new(10, 10)), Some(r));
}

#[test]
fn clamp_trims_overhang() {
    let r = Rect::new(8, 8, 10, 10);
    assert_eq!(r.clamp_to(Size::new(10, 12)), Some(Rect::new(8, 8, 2, 4)));
}

#[test]
fn clamp_outside_is_none() {
    assert_eq!(Rect::new(20, 0, 5, 5).clamp_to(Size::new(10, 10)), None);
    assert_eq!(Rect::new(0, 0, 0, 5).clamp_to(Size::new(10, 10)), None);
}

#[test]
fn clamp_saturates_huge_rect() {
    let r = Rect::new(u32::MAX - 1, 0, u32::MAX, 1);
    assert_eq!(r.clamp_to(Size::new(10, 10)), None);
}

// --- display_to_natural ---

#[test]
fn display_maps_proportionally() {
    let p = display_to_natural(Point::new(50.0, 25.0), 100.0, 50.0, Size::new(1000, 500)).unwrap();
    assert_eq!(p, Point::new(500.0, 250.0));
}

#[test]
fn display_edge_clamps_to_last_pixel() {
    let p = display_to_natural(Point::new(100.0, 50.0), 100.0, 50.0, Size::new(1000, 500)).unwrap();
    assert_eq!(p, Point::new(999.0, 499.0));
}

#[test]
fn display_outside_is_none() {
    assert!(display_to_natural(Point::new(-1.0, 5.0), 100.0, 50.0, Size::new(10, 10)).is_none());
    assert!(display_to_natural(Point::new(5.0, 51.0), 100.0, 50.0, Size::new(10, 10)).is_none());
}

#[test]
fn display_zero_size_is_none() {
    assert!(display_to_natural(Point::new(0.0, 0.0), 0.0, 50.0, Size::new(10, 10)).is_none());
    assert!(display_to_natural(Point::new(0.0, 0.0), 10.0, 10.0, Size::new(0, 10)).is_none());
}

// --- Expansion ---

#[test]
fn expansion_apply_places_original() {
    let exp = Expansion { top: 10, right: 20, bottom: 30, left: 40 };
    let (size, rect) = exp.apply(Size::new(100, 50));
    assert_eq!(size, Size::new(160, 90));
    assert_eq!(rect, Rect::new(40, 10, 100, 50));
}

#[test]
fn expansion_uniform_and_empty() {
    assert!(Expansion::default().is_empty());
    assert!(!Expansion::uniform(1).is_empty());
    let (size, _) = Expansion::uniform(5).apply(Size::new(10, 10));
    assert_eq!(size, Size::new(20, 20));
}

// --- Size ---

#[test]
fn size_contains_is_half_open() {
    let s = Size::new(10, 10);
    assert!(s.contains(Point::new(0.0, 0.0)));
    assert!(s.contains(Point::new(9.9, 9.9)));
    assert!(!s.contains(Point::new(10.0, 0.0)));
    assert!(!s.contains(Point::new(-0.1, 0.0)));
}

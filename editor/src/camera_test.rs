#![allow(clippy::float_cmp)]

use super::*;

const EPSILON: f64 = 1e-9;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

fn point_approx_eq(a: Point, b: Point) -> bool {
    approx_eq(a.x, b.x) && approx_eq(a.y, b.y)
}

// =============================================================
// Point / Rect
// =============================================================

#[test]
fn point_distance_is_euclidean() {
    assert!(approx_eq(Point::new(0.0, 0.0).distance(Point::new(3.0, 4.0)), 5.0));
}

#[test]
fn rect_from_corners_normalizes_any_drag_direction() {
    let r = Rect::from_corners(Point::new(50.0, 40.0), Point::new(10.0, 90.0));
    assert_eq!(r, Rect::new(10.0, 40.0, 40.0, 50.0));
}

#[test]
fn rect_centered_square() {
    let r = Rect::centered(Point::new(100.0, 100.0), 10.0);
    assert_eq!(r, Rect::new(95.0, 95.0, 10.0, 10.0));
    assert_eq!(r.center(), Point::new(100.0, 100.0));
}

#[test]
fn rect_contains_point_includes_edges() {
    let r = Rect::new(0.0, 0.0, 10.0, 10.0);
    assert!(r.contains_point(Point::new(0.0, 10.0)));
    assert!(r.contains_point(Point::new(5.0, 5.0)));
    assert!(!r.contains_point(Point::new(10.1, 5.0)));
}

#[test]
fn rect_contains_rect_requires_full_containment() {
    let outer = Rect::new(0.0, 0.0, 100.0, 100.0);
    assert!(outer.contains_rect(&Rect::new(10.0, 10.0, 20.0, 20.0)));
    assert!(outer.contains_rect(&Rect::new(0.0, 0.0, 100.0, 100.0)));
    assert!(!outer.contains_rect(&Rect::new(90.0, 10.0, 20.0, 20.0)));
}

// =============================================================
// Camera: construction
// =============================================================

#[test]
fn camera_default_is_identity() {
    let cam = Camera::default();
    assert_eq!(cam.pan_x, 0.0);
    assert_eq!(cam.pan_y, 0.0);
    assert_eq!(cam.zoom, 1.0);
}

#[test]
fn camera_new_clamps_zoom() {
    assert_eq!(Camera::new(0.0, 0.0, 10.0).zoom, 3.0);
    assert_eq!(Camera::new(0.0, 0.0, 0.01).zoom, 0.3);
    assert_eq!(Camera::new(0.0, 0.0, f64::NAN).zoom, 1.0);
}

// =============================================================
// Camera: coordinate conversion
// =============================================================

#[test]
fn screen_to_world_divides_out_zoom_after_pan() {
    let cam = Camera { pan_x: 50.0, pan_y: 30.0, zoom: 2.0 };
    let world = cam.screen_to_world(Point::new(0.0, 0.0));
    assert!(approx_eq(world.x, -25.0));
    assert!(approx_eq(world.y, -15.0));
}

#[test]
fn world_to_screen_with_pan_and_zoom() {
    let cam = Camera { pan_x: 20.0, pan_y: 10.0, zoom: 3.0 };
    let screen = cam.world_to_screen(Point::new(5.0, 5.0));
    assert!(point_approx_eq(screen, Point::new(35.0, 25.0)));
}

#[test]
fn round_trip_fractional_zoom() {
    let cam = Camera { pan_x: 13.7, pan_y: -42.3, zoom: 0.75 };
    let world = Point::new(333.3, -999.9);
    let back = cam.screen_to_world(cam.world_to_screen(world));
    assert!(point_approx_eq(world, back));
}

#[test]
fn screen_rect_to_world_scales_size() {
    let cam = Camera { pan_x: 10.0, pan_y: 20.0, zoom: 2.0 };
    let r = cam.screen_rect_to_world(&Rect::new(10.0, 20.0, 100.0, 50.0));
    assert_eq!(r, Rect::new(0.0, 0.0, 50.0, 25.0));
    assert_eq!(cam.world_rect_to_screen(&r), Rect::new(10.0, 20.0, 100.0, 50.0));
}

#[test]
fn screen_dist_to_world_ignores_pan() {
    let cam = Camera { pan_x: 999.0, pan_y: -999.0, zoom: 4.0 };
    assert!(approx_eq(cam.screen_dist_to_world(8.0), 2.0));
}

// =============================================================
// Camera: zoom_at
// =============================================================

#[test]
fn zoom_in_at_cursor_keeps_world_point_fixed() {
    let mut cam = Camera::default();
    let cursor = Point::new(100.0, 100.0);
    assert!(cam.zoom_at(cursor, ZoomDirection::In));
    assert!(approx_eq(cam.zoom, 1.1));
    let screen = cam.world_to_screen(Point::new(100.0, 100.0));
    assert!(point_approx_eq(screen, cursor));
}

#[test]
fn zoom_out_at_cursor_keeps_world_point_fixed() {
    let mut cam = Camera { pan_x: -40.0, pan_y: 25.0, zoom: 1.5 };
    let cursor = Point::new(320.0, 200.0);
    let before = cam.screen_to_world(cursor);
    cam.zoom_at(cursor, ZoomDirection::Out);
    assert!(approx_eq(cam.zoom, 1.35));
    assert!(point_approx_eq(cam.world_to_screen(before), cursor));
}

#[test]
fn zoom_clamps_at_upper_bound() {
    let mut cam = Camera::default();
    for _ in 0..50 {
        cam.zoom_at(Point::new(10.0, 10.0), ZoomDirection::In);
    }
    assert_eq!(cam.zoom, 3.0);
    assert!(!cam.zoom_at(Point::new(10.0, 10.0), ZoomDirection::In));
}

#[test]
fn zoom_clamps_at_lower_bound() {
    let mut cam = Camera::default();
    for _ in 0..50 {
        cam.zoom_at(Point::new(10.0, 10.0), ZoomDirection::Out);
    }
    assert_eq!(cam.zoom, 0.3);
}

#[test]
fn zoom_clamped_tick_still_anchors_cursor() {
    let mut cam = Camera { pan_x: 0.0, pan_y: 0.0, zoom: 2.9 };
    let cursor = Point::new(200.0, 50.0);
    let before = cam.screen_to_world(cursor);
    cam.zoom_at(cursor, ZoomDirection::In);
    assert_eq!(cam.zoom, 3.0);
    assert!(point_approx_eq(cam.world_to_screen(before), cursor));
}

#[test]
fn pan_by_translates_offset() {
    let mut cam = Camera::default();
    cam.pan_by(15.0, -5.0);
    assert_eq!(cam.pan_x, 15.0);
    assert_eq!(cam.pan_y, -5.0);
}

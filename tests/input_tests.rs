// Host-side tests for pointer and canvas-size math.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod input {
    include!("../src/input.rs");
}

use glam::Vec2;
use input::*;

#[test]
fn pointer_at_rect_origin_maps_to_zero() {
    let px = client_to_viewport_px(
        Vec2::new(40.0, 60.0),
        Vec2::new(40.0, 60.0),
        Vec2::new(800.0, 600.0),
        Vec2::new(800.0, 600.0),
    );
    assert_eq!(px, Vec2::ZERO);
}

#[test]
fn pointer_is_offset_by_canvas_position() {
    let px = client_to_viewport_px(
        Vec2::new(140.0, 160.0),
        Vec2::new(40.0, 60.0),
        Vec2::new(800.0, 600.0),
        Vec2::new(800.0, 600.0),
    );
    assert_eq!(px, Vec2::new(100.0, 100.0));
}

#[test]
fn pointer_is_scaled_when_canvas_is_stretched() {
    // canvas shown at half the viewport size
    let px = client_to_viewport_px(
        Vec2::new(200.0, 150.0),
        Vec2::ZERO,
        Vec2::new(400.0, 300.0),
        Vec2::new(800.0, 600.0),
    );
    assert!((px - Vec2::new(400.0, 300.0)).length() < 1e-4);
}

#[test]
fn degenerate_rect_passes_pointer_through() {
    let px = client_to_viewport_px(
        Vec2::new(12.0, 34.0),
        Vec2::new(2.0, 4.0),
        Vec2::ZERO,
        Vec2::new(800.0, 600.0),
    );
    assert_eq!(px, Vec2::new(10.0, 30.0));
}

#[test]
fn backing_size_follows_device_pixel_ratio() {
    assert_eq!(backing_size(800.0, 500.0, 1.0), (800, 500));
    assert_eq!(backing_size(800.0, 500.0, 2.0), (1600, 1000));
    assert_eq!(backing_size(333.0, 100.0, 1.5), (499, 150));
}

#[test]
fn backing_size_is_never_zero() {
    assert_eq!(backing_size(0.0, 0.0, 2.0), (1, 1));
    assert_eq!(backing_size(0.2, 640.0, 1.0), (1, 640));
}

use glam::Vec2;

/// Map a client-space pointer position into viewport pixels.
///
/// `rect_origin`/`rect_size` describe the canvas' bounding client rect; the
/// result is scaled so that the rect spans `viewport_size`.
#[inline]
pub fn client_to_viewport_px(
    client: Vec2,
    rect_origin: Vec2,
    rect_size: Vec2,
    viewport_size: Vec2,
) -> Vec2 {
    let local = client - rect_origin;
    if rect_size.x > 0.0 && rect_size.y > 0.0 {
        local / rect_size * viewport_size
    } else {
        local
    }
}

/// Backing-store size for a canvas of the given CSS size, never zero.
#[inline]
pub fn backing_size(css_width: f64, css_height: f64, device_pixel_ratio: f64) -> (u32, u32) {
    let w = (css_width * device_pixel_ratio) as u32;
    let h = (css_height * device_pixel_ratio) as u32;
    (w.max(1), h.max(1))
}

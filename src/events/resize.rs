use crate::constants::CUBE_VIEW_HEIGHT;
use crate::dom::{self, EventListener};
use globe_core::DemoScene;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use web_sys as web;

/// The globe fills the window.
pub fn globe_view_size(window: &web::Window) -> (u32, u32) {
    dom::window_inner_size(window)
}

/// The cube spans the window width at a fixed height.
pub fn cube_view_size(window: &web::Window) -> (u32, u32) {
    (dom::window_inner_size(window).0, CUBE_VIEW_HEIGHT)
}

/// Size `canvas` for the current window and keep it in sync on every resize.
/// The GPU surface follows the canvas backing size on the next frame.
pub fn wire_resize<S: DemoScene + 'static>(
    window: &web::Window,
    canvas: web::HtmlCanvasElement,
    scene: Rc<RefCell<S>>,
    view_size: fn(&web::Window) -> (u32, u32),
) -> anyhow::Result<EventListener> {
    let apply = move |window: &web::Window| {
        let (w, h) = view_size(window);
        dom::set_canvas_css_size(&canvas, w, h);
        dom::sync_canvas_backing_size(&canvas);
        if let Err(e) = scene.borrow_mut().resize(w, h) {
            log::warn!("[resize] ignored: {}", e);
        }
    };
    apply(window);
    let closure = Closure::wrap(Box::new(move || {
        if let Some(window) = web::window() {
            apply(&window);
        }
    }) as Box<dyn FnMut()>);
    EventListener::new(window, "resize", closure)
}

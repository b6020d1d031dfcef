use crate::dom::EventListener;
use crate::input;
use crate::popup;
use glam::Vec2;
use globe_core::{DemoScene, GlobeScene};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use web_sys as web;

/// Show the destination pop-up while the pointer is over a marker.
pub fn wire_hover(
    window: &web::Window,
    document: web::Document,
    canvas: web::HtmlCanvasElement,
    globe: Rc<RefCell<GlobeScene>>,
) -> anyhow::Result<EventListener> {
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        if !canvas.is_connected() {
            return;
        }
        let globe = globe.borrow();
        let vp = globe.viewport();
        let px = pointer_viewport_px(&ev, &canvas, Vec2::new(vp.width as f32, vp.height as f32));
        let next = globe.hover(px);
        if next.is_visible() && popup::is_hidden(&document) {
            log::debug!("[hover] {:?}", next);
        }
        popup::apply(&document, &next);
    }) as Box<dyn FnMut(_)>);
    EventListener::new(window, "pointermove", closure)
}

fn pointer_viewport_px(
    ev: &web::PointerEvent,
    canvas: &web::HtmlCanvasElement,
    viewport_size: Vec2,
) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    input::client_to_viewport_px(
        Vec2::new(ev.client_x() as f32, ev.client_y() as f32),
        Vec2::new(rect.left() as f32, rect.top() as f32),
        Vec2::new(rect.width() as f32, rect.height() as f32),
        viewport_size,
    )
}

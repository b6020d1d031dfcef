use crate::input;
use std::any::Any;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

#[inline]
pub fn js_err(e: JsValue) -> anyhow::Error {
    anyhow::anyhow!("{:?}", e)
}

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// True when the browser exposes `navigator.gpu`.
pub fn webgpu_available(window: &web::Window) -> bool {
    js_sys::Reflect::get(&window.navigator(), &JsValue::from_str("gpu"))
        .map(|gpu| !gpu.is_undefined() && !gpu.is_null())
        .unwrap_or(false)
}

/// Window inner size in CSS pixels.
pub fn window_inner_size(window: &web::Window) -> (u32, u32) {
    let dim = |v: Result<JsValue, JsValue>| v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0) as u32;
    (dim(window.inner_width()), dim(window.inner_height()))
}

/// Create a canvas and append it to `container`.
pub fn append_canvas(
    document: &web::Document,
    container: &web::Element,
) -> anyhow::Result<web::HtmlCanvasElement> {
    let canvas = document
        .create_element("canvas")
        .map_err(js_err)?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    container.append_child(&canvas).map_err(js_err)?;
    Ok(canvas)
}

pub fn set_canvas_css_size(canvas: &web::HtmlCanvasElement, width: u32, height: u32) {
    _ = canvas.set_attribute(
        "style",
        &format!("display:block;width:{}px;height:{}px", width, height),
    );
}

pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let rect = canvas.get_bounding_client_rect();
        let (w_px, h_px) = input::backing_size(rect.width(), rect.height(), w.device_pixel_ratio());
        canvas.set_width(w_px);
        canvas.set_height(h_px);
    }
}

/// A registered DOM listener, removed from its target when dropped.
pub struct EventListener {
    target: web::EventTarget,
    kind: &'static str,
    callback: js_sys::Function,
    _closure: Box<dyn Any>,
}

impl EventListener {
    pub fn new<T>(
        target: &web::EventTarget,
        kind: &'static str,
        closure: Closure<T>,
    ) -> anyhow::Result<Self>
    where
        T: ?Sized + 'static,
    {
        let callback = closure
            .as_ref()
            .unchecked_ref::<js_sys::Function>()
            .clone();
        target
            .add_event_listener_with_callback(kind, &callback)
            .map_err(js_err)?;
        Ok(Self {
            target: target.clone(),
            kind,
            callback,
            _closure: Box::new(closure),
        })
    }
}

impl Drop for EventListener {
    fn drop(&mut self) {
        _ = self
            .target
            .remove_event_listener_with_callback(self.kind, &self.callback);
        log::debug!("[dom] removed {} listener", self.kind);
    }
}

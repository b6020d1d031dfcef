#![cfg(target_arch = "wasm32")]
use crate::constants::{CUBE_CONTAINER_ID, GLOBE_CONTAINER_ID, WEBGPU_MISSING};
use globe_core::{
    default_destinations, CubeConfig, CubeScene, FrameStats, GlobeConfig, GlobeScene, Popup,
    Viewport,
};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod popup;
mod render;

/// A running demo. Dropping it, or calling `stop`, ends the animation loop
/// and detaches every listener the demo registered.
#[wasm_bindgen]
pub struct DemoHandle {
    name: &'static str,
    animation: frame::AnimationLoop,
    listeners: Vec<dom::EventListener>,
}

#[wasm_bindgen]
impl DemoHandle {
    pub fn stop(&mut self) {
        self.animation.stop();
        let n = self.listeners.len();
        self.listeners.clear();
        log::info!("[{}] stopped, {} listeners removed", self.name, n);
    }

    #[wasm_bindgen(getter)]
    pub fn running(&self) -> bool {
        self.animation.is_running()
    }

    #[wasm_bindgen(getter)]
    pub fn frames(&self) -> f64 {
        self.animation.frames() as f64
    }
}

thread_local! {
    // demos started from the page's default containers
    static AUTO_STARTED: RefCell<Vec<DemoHandle>> = RefCell::new(Vec::new());
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("globe-web starting");

    let document = dom::window_document().ok_or_else(|| JsValue::from_str("no document"))?;
    if document.get_element_by_id(CUBE_CONTAINER_ID).is_some() {
        spawn_local(async {
            match init_cube(CUBE_CONTAINER_ID).await {
                Ok(h) => AUTO_STARTED.with(|a| a.borrow_mut().push(h)),
                Err(e) => log::error!("[cube] {:#}", e),
            }
        });
    }
    if document.get_element_by_id(GLOBE_CONTAINER_ID).is_some() {
        spawn_local(async {
            match init_globe(GLOBE_CONTAINER_ID).await {
                Ok(h) => AUTO_STARTED.with(|a| a.borrow_mut().push(h)),
                Err(e) => log::error!("[globe] init error: {:#}", e),
            }
        });
    }
    Ok(())
}

/// Start the spinning cube inside the element with id `container_id`.
#[wasm_bindgen]
pub async fn start_cube_demo(container_id: String) -> Result<DemoHandle, JsValue> {
    init_cube(&container_id).await.map_err(|e| {
        log::error!("[cube] {:#}", e);
        JsValue::from(js_sys::Error::new(&format!("{:#}", e)))
    })
}

/// Start the destination globe inside the element with id `container_id`.
#[wasm_bindgen]
pub async fn start_globe_demo(container_id: String) -> Result<DemoHandle, JsValue> {
    init_globe(&container_id).await.map_err(|e| {
        log::error!("[globe] init error: {:#}", e);
        JsValue::from(js_sys::Error::new(&format!("{:#}", e)))
    })
}

/// Stop the demos that were started automatically on page load.
#[wasm_bindgen]
pub fn stop_all() {
    AUTO_STARTED.with(|a| {
        for mut h in a.borrow_mut().drain(..) {
            h.stop();
        }
    });
}

struct Host {
    window: web::Window,
    document: web::Document,
    canvas: web::HtmlCanvasElement,
}

fn mount(container_id: &str) -> anyhow::Result<Host> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    let container = document
        .get_element_by_id(container_id)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", container_id))?;
    let canvas = dom::append_canvas(&document, &container)?;
    Ok(Host {
        window,
        document,
        canvas,
    })
}

async fn init_cube(container_id: &str) -> anyhow::Result<DemoHandle> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    if !dom::webgpu_available(&window) {
        anyhow::bail!(WEBGPU_MISSING);
    }
    let Host { window, canvas, .. } = mount(container_id)?;

    let (w, h) = events::cube_view_size(&window);
    dom::set_canvas_css_size(&canvas, w, h);
    dom::sync_canvas_backing_size(&canvas);
    let viewport = Viewport::new(w.max(1), h.max(1))?;
    let scene = Rc::new(RefCell::new(CubeScene::new(CubeConfig::default(), viewport)?));

    let gpu = render::GpuState::new(&canvas).await?;
    let resize =
        events::wire_resize(&window, canvas.clone(), scene.clone(), events::cube_view_size)?;
    let animation = frame::start_loop(frame::FrameContext {
        scene,
        gpu,
        canvas,
        stats: FrameStats::new("cube"),
    })?;
    Ok(DemoHandle {
        name: "cube",
        animation,
        listeners: vec![resize],
    })
}

async fn init_globe(container_id: &str) -> anyhow::Result<DemoHandle> {
    let Host {
        window,
        document,
        canvas,
    } = mount(container_id)?;

    let (w, h) = events::globe_view_size(&window);
    dom::set_canvas_css_size(&canvas, w, h);
    dom::sync_canvas_backing_size(&canvas);
    let viewport = Viewport::new(w.max(1), h.max(1))?;
    let globe = GlobeScene::new(GlobeConfig::default(), default_destinations(), viewport)?;
    let scene = Rc::new(RefCell::new(globe));
    popup::apply(&document, &Popup::Hidden);

    let gpu = render::GpuState::new(&canvas).await?;
    let resize =
        events::wire_resize(&window, canvas.clone(), scene.clone(), events::globe_view_size)?;
    let hover = events::wire_hover(&window, document, canvas.clone(), scene.clone())?;
    let animation = frame::start_loop(frame::FrameContext {
        scene,
        gpu,
        canvas,
        stats: FrameStats::new("globe"),
    })?;
    Ok(DemoHandle {
        name: "globe",
        animation,
        listeners: vec![resize, hover],
    })
}

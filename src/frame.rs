use crate::render::GpuState;
use globe_core::{DemoScene, FrameStats, LoopHandle};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext<S: DemoScene> {
    pub scene: Rc<RefCell<S>>,
    pub gpu: GpuState,
    pub canvas: web::HtmlCanvasElement,
    pub stats: FrameStats,
}

impl<S: DemoScene> FrameContext<S> {
    /// Advance and draw one frame. Returns false once the loop was stopped.
    pub fn frame(&mut self, handle: &LoopHandle) -> bool {
        if !handle.step(&mut *self.scene.borrow_mut()) {
            return false;
        }
        self.gpu
            .resize_if_needed(self.canvas.width(), self.canvas.height());
        if let Err(e) = self.gpu.render(&*self.scene.borrow()) {
            log::error!("[gpu] render error: {:?}", e);
        }
        self.stats.record_frame();
        true
    }
}

type TickClosure = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// A running `requestAnimationFrame` loop.
pub struct AnimationLoop {
    handle: LoopHandle,
    pending: Rc<Cell<Option<i32>>>,
    tick: TickClosure,
}

impl AnimationLoop {
    pub fn is_running(&self) -> bool {
        self.handle.is_running()
    }

    pub fn frames(&self) -> u64 {
        self.handle.frames()
    }

    /// Stop scheduling frames and cancel the one already requested.
    pub fn stop(&self) {
        self.handle.stop();
        if let Some(id) = self.pending.take() {
            if let Some(w) = web::window() {
                _ = w.cancel_animation_frame(id);
            }
        }
        // drop the closure to break its self-reference
        self.tick.borrow_mut().take();
    }
}

impl Drop for AnimationLoop {
    fn drop(&mut self) {
        self.stop();
    }
}

fn request_frame(tick: &Closure<dyn FnMut()>) -> Option<i32> {
    web::window()?
        .request_animation_frame(tick.as_ref().unchecked_ref())
        .ok()
}

pub fn start_loop<S: DemoScene + 'static>(
    mut frame_ctx: FrameContext<S>,
) -> anyhow::Result<AnimationLoop> {
    let handle = LoopHandle::new();
    let pending = Rc::new(Cell::new(None::<i32>));
    let tick: TickClosure = Rc::new(RefCell::new(None));

    let tick_clone = tick.clone();
    let pending_tick = pending.clone();
    let handle_tick = handle.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        pending_tick.set(None);
        if !frame_ctx.frame(&handle_tick) {
            return;
        }
        if let Some(t) = tick_clone.borrow().as_ref() {
            pending_tick.set(request_frame(t));
        }
    }) as Box<dyn FnMut()>));

    let first = tick
        .borrow()
        .as_ref()
        .and_then(request_frame)
        .ok_or_else(|| anyhow::anyhow!("requestAnimationFrame failed"))?;
    pending.set(Some(first));
    log::info!("[loop] started");

    Ok(AnimationLoop {
        handle,
        pending,
        tick,
    })
}

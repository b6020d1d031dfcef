//! Frame-driven animation: the scene trait the front-ends drive, the
//! cancellable loop handle, and lightweight frame statistics.

use crate::camera::{PerspectiveCamera, Viewport};
use crate::error::Result;
use crate::scene::Scene;
use instant::Instant;
use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

/// A self-contained demo: scene graph, camera and per-frame behaviour.
pub trait DemoScene {
    fn scene(&self) -> &Scene;
    fn camera(&self) -> &PerspectiveCamera;
    fn viewport(&self) -> Viewport;
    /// Apply one frame's worth of animation. Steps are per displayed frame,
    /// not per unit of time.
    fn advance(&mut self);
    fn resize(&mut self, width: u32, height: u32) -> Result<()>;
}

/// Shared stop flag for a running frame loop.
///
/// Clones observe the same state. Once stopped, a loop never resumes.
#[derive(Clone, Debug, Default)]
pub struct LoopHandle {
    stopped: Rc<Cell<bool>>,
    frames: Rc<Cell<u64>>,
}

impl LoopHandle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stop(&self) {
        if !self.stopped.replace(true) {
            log::info!("[loop] stopped after {} frames", self.frames.get());
        }
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        !self.stopped.get()
    }

    #[inline]
    pub fn frames(&self) -> u64 {
        self.frames.get()
    }

    /// Advance `scene` by one frame unless the loop was stopped.
    /// Returns whether the caller should render and schedule another frame.
    pub fn step<S: DemoScene + ?Sized>(&self, scene: &mut S) -> bool {
        if self.stopped.get() {
            return false;
        }
        scene.advance();
        self.frames.set(self.frames.get() + 1);
        true
    }
}

const STATS_INTERVAL: Duration = Duration::from_secs(5);

/// Counts frames and logs the average rate every few seconds at debug level.
pub struct FrameStats {
    label: &'static str,
    window_start: Instant,
    frames: u32,
}

impl FrameStats {
    pub fn new(label: &'static str) -> Self {
        Self {
            label,
            window_start: Instant::now(),
            frames: 0,
        }
    }

    pub fn record_frame(&mut self) {
        self.frames += 1;
        let elapsed = self.window_start.elapsed();
        if elapsed >= STATS_INTERVAL {
            let fps = self.frames as f32 / elapsed.as_secs_f32();
            log::debug!("[{}] {:.1} fps", self.label, fps);
            self.frames = 0;
            self.window_start = Instant::now();
        }
    }
}

use glam::Vec2;
use globe_core::{
    default_destinations, CubeConfig, CubeScene, DemoScene, FrameStats, GlobeConfig, GlobeScene,
    LoopHandle, Popup, SceneRenderer, Viewport,
};
use winit::{event::*, event_loop::EventLoop, window::WindowBuilder};

const WINDOW_WIDTH: u32 = 1280;
const WINDOW_HEIGHT: u32 = 720;

/// Scenes the cursor can hover. Only the globe has anything to show.
trait HoverTarget {
    fn hover_at(&self, pointer_px: Vec2) -> Popup;
}

impl HoverTarget for GlobeScene {
    fn hover_at(&self, pointer_px: Vec2) -> Popup {
        self.hover(pointer_px)
    }
}

impl HoverTarget for CubeScene {
    fn hover_at(&self, _pointer_px: Vec2) -> Popup {
        Popup::Hidden
    }
}

struct GpuState<'w> {
    window: &'w winit::window::Window,
    surface: wgpu::Surface<'w>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    renderer: SceneRenderer,
}

impl<'w> GpuState<'w> {
    async fn new(window: &'w winit::window::Window) -> anyhow::Result<Self> {
        let size = window.inner_size();
        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(window)?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No GPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await?;

        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .first()
            .copied()
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: caps
                .alpha_modes
                .first()
                .copied()
                .unwrap_or(wgpu::CompositeAlphaMode::Auto),
            desired_maximum_frame_latency: 2,
            view_formats: vec![],
        };
        surface.configure(&device, &config);
        let renderer = SceneRenderer::new(&device, format, config.width, config.height);
        log::info!(
            "[gpu] surface {}x{} format {:?}",
            config.width,
            config.height,
            format
        );

        Ok(Self {
            window,
            surface,
            device,
            queue,
            config,
            renderer,
        })
    }

    fn resize(&mut self, new_size: winit::dpi::PhysicalSize<u32>) {
        if new_size.width == 0 || new_size.height == 0 {
            return;
        }
        self.config.width = new_size.width;
        self.config.height = new_size.height;
        self.surface.configure(&self.device, &self.config);
        self.renderer
            .resize(&self.device, new_size.width, new_size.height);
    }

    fn render<S: DemoScene + ?Sized>(&mut self, demo: &S) -> Result<(), wgpu::SurfaceError> {
        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        self.renderer
            .render(&self.device, &self.queue, &view, demo.scene(), demo.camera());
        frame.present();
        Ok(())
    }
}

fn title_for(base: &str, popup: &Popup) -> String {
    match popup {
        Popup::Hidden => base.to_string(),
        Popup::Shown { name, description } => format!("{} | {}: {}", base, name, description),
    }
}

fn run<S: DemoScene + HoverTarget>(
    event_loop: EventLoop<()>,
    window: &winit::window::Window,
    mut scene: S,
    label: &'static str,
) -> anyhow::Result<()> {
    let mut gpu = pollster::block_on(GpuState::new(window))?;
    let handle = LoopHandle::new();
    let mut stats = FrameStats::new(label);
    let mut popup = Popup::Hidden;
    let base_title = window.title();

    event_loop.run(move |event, elwt| match event {
        Event::WindowEvent {
            event: WindowEvent::Resized(size),
            ..
        } => {
            gpu.resize(size);
            match scene.resize(size.width, size.height) {
                Ok(()) => log::debug!("[resize] {}x{}", size.width, size.height),
                Err(e) => log::warn!("[resize] ignored: {}", e),
            }
        }
        Event::WindowEvent {
            event: WindowEvent::CursorMoved { position, .. },
            ..
        } => {
            let next = scene.hover_at(Vec2::new(position.x as f32, position.y as f32));
            if next != popup {
                match &next {
                    Popup::Shown { name, .. } => log::info!("[hover] {}", name),
                    Popup::Hidden => log::info!("[hover] none"),
                }
                gpu.window.set_title(&title_for(&base_title, &next));
                popup = next;
            }
        }
        Event::WindowEvent {
            event: WindowEvent::CloseRequested,
            ..
        } => {
            handle.stop();
            elwt.exit();
        }
        Event::AboutToWait => {
            if !handle.step(&mut scene) {
                return;
            }
            stats.record_frame();
            match gpu.render(&scene) {
                Ok(_) => gpu.window.request_redraw(),
                Err(wgpu::SurfaceError::Lost) => gpu.resize(gpu.window.inner_size()),
                Err(wgpu::SurfaceError::OutOfMemory) => {
                    log::error!("[gpu] out of memory");
                    handle.stop();
                    elwt.exit();
                }
                Err(e) => log::warn!("[gpu] {:?}", e),
            }
        }
        _ => {}
    })?;
    Ok(())
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let demo = std::env::args().nth(1).unwrap_or_else(|| "globe".to_string());
    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title(format!("{} demo", demo))
        .with_inner_size(winit::dpi::PhysicalSize::new(WINDOW_WIDTH, WINDOW_HEIGHT))
        .build(&event_loop)?;
    let size = window.inner_size();
    let viewport = Viewport::new(size.width.max(1), size.height.max(1))?;

    match demo.as_str() {
        "globe" => {
            let scene = GlobeScene::new(GlobeConfig::default(), default_destinations(), viewport)?;
            run(event_loop, &window, scene, "globe")
        }
        "cube" => {
            let scene = CubeScene::new(CubeConfig::default(), viewport)?;
            run(event_loop, &window, scene, "cube")
        }
        other => anyhow::bail!("unknown demo '{}', expected 'globe' or 'cube'", other),
    }
}

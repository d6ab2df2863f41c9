//! Blob outline simulation.
//!
//! Clusters of fluid particles cohere around drifting attractors; each
//! frame the cluster field is rasterized to an off-screen buffer and run
//! through a GPU edge-detection pass, so only the blob outlines reach the
//! screen.

use blob_physics::SimParams;
use blob_renderer::{PostProcessPipeline, Rasterizer, RenderError};
use blob_simulation::SimulationWorld;
use rand::rngs::ThreadRng;
use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Instant;
use winit::{
    application::ApplicationHandler,
    event::*,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

/// Off-screen raster resolution; the outline pass scales it to the window.
const FRAME_WIDTH: u32 = 1280;
const FRAME_HEIGHT: u32 = 720;

struct GpuState {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,

    world: SimulationWorld,
    rasterizer: Rasterizer,
    post_process: PostProcessPipeline,
    rng: ThreadRng,

    frame_times: VecDeque<f32>,
    last_frame_time: Instant,
}

impl GpuState {
    async fn new(window: Arc<Window>) -> Result<Self, RenderError> {
        let size = window.inner_size();

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor::default());

        let surface = instance.create_surface(window.clone())?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await?;

        log::info!("✓ Using GPU: {}", adapter.get_info().name);

        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some("Device"),
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::default(),
                memory_hints: wgpu::MemoryHints::default(),
                experimental_features: wgpu::ExperimentalFeatures::default(),
                trace: wgpu::Trace::Off,
            })
            .await?;

        let surface_caps = surface.get_capabilities(&adapter);
        let surface_format = surface_caps
            .formats
            .iter()
            .find(|f| f.is_srgb())
            .copied()
            .unwrap_or(surface_caps.formats[0]);

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: size.width,
            height: size.height,
            present_mode: wgpu::PresentMode::AutoVsync,
            alpha_mode: surface_caps.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let params = SimParams::default();
        let mut rng = rand::rng();

        let world = SimulationWorld::new(params, FRAME_WIDTH, FRAME_HEIGHT, &mut rng)?;
        log::info!(
            "✓ World initialized with {} seed particles",
            world.particle_count()
        );

        let rasterizer = Rasterizer::new(FRAME_WIDTH, FRAME_HEIGHT)?;
        let post_process = PostProcessPipeline::new(
            &device,
            &queue,
            config.format,
            FRAME_WIDTH,
            FRAME_HEIGHT,
            params.edge_detect_threshold,
        );
        log::info!("✓ Renderer initialized at {}x{}", FRAME_WIDTH, FRAME_HEIGHT);

        Ok(Self {
            surface,
            device,
            queue,
            config,
            world,
            rasterizer,
            post_process,
            rng,
            frame_times: VecDeque::with_capacity(100),
            last_frame_time: Instant::now(),
        })
    }

    fn resize(&mut self, new_size: winit::dpi::PhysicalSize<u32>) {
        // The off-screen raster keeps its fixed resolution; only the
        // surface follows the window.
        if new_size.width > 0 && new_size.height > 0 {
            self.config.width = new_size.width;
            self.config.height = new_size.height;
            self.surface.configure(&self.device, &self.config);
        }
    }

    fn render(&mut self) -> Result<(f32, f32), wgpu::SurfaceError> {
        let now = Instant::now();
        let frame_time = (now - self.last_frame_time).as_secs_f32() * 1000.0;
        self.last_frame_time = now;

        self.frame_times.push_back(frame_time);
        if self.frame_times.len() > 100 {
            self.frame_times.pop_front();
        }
        let avg_frame_time = self.frame_times.iter().sum::<f32>() / self.frame_times.len() as f32;
        let fps = 1000.0 / avg_frame_time;

        // Advance the world one fixed step, then redraw the raster.
        self.world.tick(&mut self.rng);
        let frame = self.rasterizer.draw(&self.world);

        let output = self.surface.get_current_texture()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        self.post_process
            .render(&self.device, &self.queue, frame, &view);

        output.present();
        Ok((fps, avg_frame_time))
    }
}

struct App {
    window: Option<Arc<Window>>,
    gpu_state: Option<GpuState>,
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            let window_attributes = Window::default_attributes()
                .with_title("Blobs")
                .with_inner_size(winit::dpi::LogicalSize::new(FRAME_WIDTH, FRAME_HEIGHT));

            let window = Arc::new(event_loop.create_window(window_attributes).unwrap());
            self.window = Some(window.clone());

            match pollster::block_on(GpuState::new(window)) {
                Ok(gpu_state) => self.gpu_state = Some(gpu_state),
                Err(e) => {
                    log::error!("GPU initialization failed: {}", e);
                    event_loop.exit();
                }
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested
            | WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(KeyCode::Escape),
                        ..
                    },
                ..
            } => event_loop.exit(),

            WindowEvent::Resized(physical_size) => {
                if let Some(gpu_state) = &mut self.gpu_state {
                    gpu_state.resize(physical_size);
                }
            }

            WindowEvent::RedrawRequested => {
                if let (Some(window), Some(gpu_state)) = (&self.window, &mut self.gpu_state) {
                    match gpu_state.render() {
                        Ok((fps, frame_time)) => {
                            window.set_title(&format!(
                                "Blobs - {:.0} FPS ({:.2}ms) - {} particles",
                                fps,
                                frame_time,
                                gpu_state.world.particle_count()
                            ));
                        }
                        Err(wgpu::SurfaceError::Lost) => gpu_state.resize(window.inner_size()),
                        Err(wgpu::SurfaceError::OutOfMemory) => event_loop.exit(),
                        Err(e) => eprintln!("Render error: {:?}", e),
                    }
                }
            }

            _ => {}
        }

        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

fn main() {
    // Initialize logger (RUST_LOG=debug for verbose output)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("Starting blob outline simulation...");

    let event_loop = EventLoop::new().unwrap();
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App {
        window: None,
        gpu_state: None,
    };

    event_loop.run_app(&mut app).unwrap();
}

//! Seaglass - an animated, stylized water surface.
//!
//! A plane is displaced every frame by a sum of sine bands and shaded by
//! elevation. Drag with the left mouse button to orbit, scroll to zoom.

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use winit::{
    application::ApplicationHandler,
    dpi::LogicalSize,
    event::*,
    event_loop::{ActiveEventLoop, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use seaglass::camera::OrbitCamera;
use seaglass::cli::Args;
use seaglass::clock::{FpsTracker, FrameClock};
use seaglass::params::{OrbitParams, RenderConfig, ShadingParams, WaveParams};
use seaglass::rendering::{RenderSystem, Uniforms};
use seaglass::wave::WaveField;

/// Pixels per wheel line for touchpads reporting pixel deltas
const PIXELS_PER_LINE: f32 = 40.0;

/// Main application state
struct App {
    // Window and rendering
    window: Option<Arc<Window>>,
    render_system: Option<RenderSystem>,

    // Scene
    field: WaveField,
    camera: OrbitCamera,

    // Configuration
    render_config: RenderConfig,
    shading: ShadingParams,

    // Time tracking
    clock: FrameClock,
    fps: FpsTracker,
    last_cursor: Option<(f64, f64)>,
}

impl App {
    fn new(args: &Args) -> Self {
        let render_config = args.render_config();
        let field = WaveField::new(&args.grid_params(), WaveParams::default());
        let camera = OrbitCamera::new(OrbitParams::default(), &render_config);

        Self {
            window: None,
            render_system: None,
            field,
            camera,
            shading: args.shading_params(),
            render_config,
            clock: FrameClock::new(),
            fps: FpsTracker::new(),
            last_cursor: None,
        }
    }

    /// Apply a viewport change between frames
    fn resize(&mut self, width: u32, height: u32) {
        self.camera.resize(width, height);
        if let Some(render_system) = &mut self.render_system {
            render_system.resize(width, height);
        }
    }

    /// Render a single frame
    fn render_frame(&mut self, event_loop: &ActiveEventLoop) {
        let Some(ref render_system) = self.render_system else {
            return;
        };

        let time_s = self.clock.elapsed_secs();

        self.camera.update();
        self.field.update(time_s);

        let uniforms = Uniforms::new(
            self.camera.view_proj(),
            self.camera.eye(),
            &self.shading,
            &self.render_config.fog,
        );
        render_system.update_vertices(&self.field.grid.vertices);
        render_system.update_uniforms(&uniforms);

        let result = render_system.render();
        let (width, height) = render_system.size();

        match result {
            Ok(()) => self.fps.record_frame(),
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                self.resize(width, height);
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                log::error!("GPU out of memory, exiting");
                event_loop.exit();
            }
            Err(e) => log::warn!("render error: {:?}", e),
        }
    }
}

impl ApplicationHandler for App {
    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }

    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return; // Already initialized
        }

        let window_attributes = Window::default_attributes()
            .with_title("Seaglass")
            .with_inner_size(LogicalSize::new(
                self.render_config.window_width,
                self.render_config.window_height,
            ));

        let window = match event_loop.create_window(window_attributes) {
            Ok(window) => Arc::new(window),
            Err(e) => {
                log::error!("failed to create window: {}", e);
                event_loop.exit();
                return;
            }
        };

        let render_system = match pollster::block_on(RenderSystem::new(
            Arc::clone(&window),
            &self.field.grid,
            &self.render_config,
        )) {
            Ok(render_system) => render_system,
            Err(e) => {
                log::error!("{}", e);
                event_loop.exit();
                return;
            }
        };

        let size = window.inner_size();
        self.camera.resize(size.width, size.height);
        log::info!(
            "window {}x{} @ {:.2}x scale",
            size.width,
            size.height,
            window.scale_factor()
        );
        log::info!("drag to orbit, scroll to zoom, ESC to quit");

        self.window = Some(window);
        self.render_system = Some(render_system);
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _window_id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state: ElementState::Pressed,
                        physical_key: PhysicalKey::Code(KeyCode::Escape),
                        ..
                    },
                ..
            } => event_loop.exit(),
            WindowEvent::Resized(size) => self.resize(size.width, size.height),
            WindowEvent::MouseInput {
                state,
                button: MouseButton::Left,
                ..
            } => match state {
                ElementState::Pressed => self.camera.begin_drag(),
                ElementState::Released => self.camera.end_drag(),
            },
            WindowEvent::CursorMoved { position, .. } => {
                if let Some((x, y)) = self.last_cursor {
                    self.camera
                        .drag((position.x - x) as f32, (position.y - y) as f32);
                }
                self.last_cursor = Some((position.x, position.y));
            }
            WindowEvent::CursorLeft { .. } => self.last_cursor = None,
            WindowEvent::MouseWheel { delta, .. } => {
                let lines = match delta {
                    MouseScrollDelta::LineDelta(_, y) => y,
                    MouseScrollDelta::PixelDelta(p) => p.y as f32 / PIXELS_PER_LINE,
                };
                self.camera.zoom(lines);
            }
            WindowEvent::RedrawRequested => self.render_frame(event_loop),
            _ => {}
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    log::info!("Seaglass - stylized procedural water");

    let mut app = App::new(&args);
    let event_loop = EventLoop::new()?;
    event_loop.run_app(&mut app)?;
    Ok(())
}

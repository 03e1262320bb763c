//! Hypercycle - Animated Hypercube Dimension Viewer
//!
//! Cycles through n-dimensional hypercubes (square through enneract)
//! projected onto the 2D viewport, with play/pause/reset/speed controls.

use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::PhysicalKey,
    window::WindowId,
};

use hypercycle::config::AppConfig;
use hypercycle::input::{InputAction, InputMapper};
use hypercycle::systems::{PlaybackSystem, RenderError, RenderSystem, WindowSystem};
use hypercycle_core::{Frame, Playback};

/// Main application state
struct App {
    /// Application configuration
    config: AppConfig,
    /// The dimension-cycle state machine
    playback: Playback,
    /// Wall-clock driver for the state machine
    playback_system: PlaybackSystem,
    /// Current fully computed frame
    frame: Frame,
    window: Option<WindowSystem>,
    render: Option<RenderSystem>,
}

impl App {
    fn new(config: AppConfig) -> Self {
        let mut playback = Playback::new(config.playback.interval_seconds)
            .with_dimension(config.playback.start_dimension)
            .with_speed(config.playback.speed);
        if !config.playback.autoplay {
            playback = playback.paused();
        }

        // Placeholder extent until the surface exists; resumed() rebuilds
        let frame = Frame::build(playback.dimension(), 100.0);

        Self {
            config,
            playback,
            playback_system: PlaybackSystem::new(),
            frame,
            window: None,
            render: None,
        }
    }

    /// Recompute the frame for the current dimension and surface size,
    /// re-upload it, and refresh the title
    fn rebuild_frame(&mut self) {
        let extent = self
            .render
            .as_ref()
            .map(|r| r.projection_extent())
            .unwrap_or(100.0);
        self.frame = Frame::build(self.playback.dimension(), extent);

        if let Some(render) = &mut self.render {
            render.upload_frame(&self.frame);
        }
        self.refresh_title();
    }

    fn refresh_title(&self) {
        if let Some(window) = &self.window {
            window.update_title(self.frame.info.name, &self.playback);
        }
    }

    fn apply_action(&mut self, action: InputAction, event_loop: &ActiveEventLoop) {
        match action {
            InputAction::TogglePlayback => {
                let state = self.playback.toggle();
                log::info!("Playback {:?}", state);
                self.refresh_title();
            }
            InputAction::Reset => {
                self.playback.reset();
                self.rebuild_frame();
            }
            InputAction::SpeedUp => {
                let speed = self.playback.speed_up();
                log::info!("Speed {:.2}x", speed);
                self.refresh_title();
            }
            InputAction::SpeedDown => {
                let speed = self.playback.speed_down();
                log::info!("Speed {:.2}x", speed);
                self.refresh_title();
            }
            InputAction::StepForward => {
                self.playback.step_forward();
                self.rebuild_frame();
            }
            InputAction::StepBack => {
                self.playback.step_back();
                self.rebuild_frame();
            }
            InputAction::ToggleFullscreen => {
                if let Some(window) = &self.window {
                    window.toggle_fullscreen();
                }
            }
            InputAction::Exit => {
                event_loop.exit();
            }
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            let window = WindowSystem::create(event_loop, &self.config.window)
                .unwrap_or_else(|e| panic!("Failed to create window: {}", e));

            let render = RenderSystem::new(
                window.window().clone(),
                self.config.rendering.clone(),
                self.config.window.vsync,
            );

            self.window = Some(window);
            self.render = Some(render);

            // Now that the surface size is known, build the real frame
            self.rebuild_frame();
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }

            WindowEvent::Resized(physical_size) => {
                if let Some(render) = &mut self.render {
                    render.resize(physical_size.width, physical_size.height);
                }
                // Projection extent tracks the surface size
                self.rebuild_frame();
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(key) = event.physical_key {
                    if let Some(action) = InputMapper::map_keyboard(key, event.state) {
                        self.apply_action(action, event_loop);
                    }
                }
            }

            WindowEvent::RedrawRequested => {
                let result = self.playback_system.update(&mut self.playback);
                if result.dimension_changed {
                    self.rebuild_frame();
                }

                if let Some(render) = &mut self.render {
                    match render.render_frame() {
                        Ok(()) => {}
                        Err(RenderError::SurfaceLost) => {
                            let (width, height) = render.size();
                            render.resize(width, height);
                        }
                        Err(RenderError::OutOfMemory) => {
                            log::error!("GPU out of memory, exiting");
                            event_loop.exit();
                        }
                        Err(e) => {
                            log::warn!("Render error: {}", e);
                        }
                    }
                }

                // Request next frame
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }

            _ => {}
        }
    }
}

fn main() {
    // Load configuration first so the logger can honor debug.log_level;
    // RUST_LOG still overrides it
    let config_result = AppConfig::load();
    let level = config_result
        .as_ref()
        .map(|c| c.debug.log_level.clone())
        .unwrap_or_else(|_| "info".to_string());

    let mut builder = env_logger::Builder::new();
    if let Ok(filter) = level.parse::<log::LevelFilter>() {
        builder.filter_level(filter);
    }
    builder.parse_default_env().init();

    let config = config_result.unwrap_or_else(|e| {
        log::warn!("Failed to load config: {}. Using defaults.", e);
        AppConfig::default()
    });

    log::info!("Starting Hypercycle");

    let event_loop = EventLoop::new().expect("Failed to create event loop");
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new(config);
    event_loop.run_app(&mut app).expect("Event loop error");
}

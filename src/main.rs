//! Neonfield - animated neon backdrop
//!
//! Opens a window and drives the scene host from the winit event loop.

use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::PhysicalKey,
    window::WindowId,
};

use neonfield::{
    config::AppConfig,
    input::{InputAction, InputMapper},
    systems::{RenderSystem, WindowSystem},
    SceneHost,
};
use neonfield_input::{HoverEvent, HoverTracker, PointerTracker};
use neonfield_render::{RenderError, RenderTarget};

/// What the window is showing
enum Backdrop {
    /// Window not created yet
    Pending,
    /// Animated scene
    Running(SceneHost<RenderSystem>),
    /// Animation off; the surface, if any, is only cleared
    Disabled(Option<RenderSystem>),
}

/// Main application state
struct App {
    /// Application configuration
    config: AppConfig,
    window: Option<WindowSystem>,
    backdrop: Backdrop,
    pointer: PointerTracker,
    hover: HoverTracker,
    frames: u64,
}

impl App {
    fn new(config: AppConfig) -> Self {
        let mut pointer = PointerTracker::new(config.window.width, config.window.height)
            .with_line_height(config.interaction.scroll_line_height);
        if let Some(max) = config.interaction.max_scroll {
            pointer = pointer.with_max_scroll(max);
        }
        let hover = HoverTracker::new(config.interaction.hover_regions.clone());

        Self {
            config,
            window: None,
            backdrop: Backdrop::Pending,
            pointer,
            hover,
            frames: 0,
        }
    }

    /// Start the scene host, or fall back to a cleared surface
    fn start_backdrop(&self, window: &WindowSystem) -> Backdrop {
        let (width, height) = window.size();
        let render = || {
            RenderSystem::new(
                window.window().clone(),
                self.config.window.vsync,
                self.config.rendering.background_color,
            )
        };

        if !self.config.features.animations {
            log::warn!("Animations disabled by configuration");
            return Backdrop::Disabled(render().ok());
        }

        let settings = match self.config.to_host_settings() {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("Animation disabled: {}", e);
                return Backdrop::Disabled(render().ok());
            }
        };

        let target = match render() {
            Ok(target) => target,
            Err(e) => {
                log::warn!("Animation disabled: {}", e);
                return Backdrop::Disabled(None);
            }
        };

        match SceneHost::initialize(target, width, height, &settings) {
            Ok(host) => Backdrop::Running(host),
            Err(e) => {
                log::warn!("Animation disabled: {}", e);
                Backdrop::Disabled(None)
            }
        }
    }

    fn handle_action(&mut self, action: InputAction, event_loop: &ActiveEventLoop) {
        match action {
            InputAction::Exit => event_loop.exit(),
            InputAction::ToggleFullscreen => {
                if let Some(window) = &self.window {
                    window.toggle_fullscreen();
                }
            }
            InputAction::ToggleLayer(layer) => {
                if let Backdrop::Running(host) = &mut self.backdrop {
                    let layers = host.layers() ^ layer;
                    host.set_layers(layers);
                    log::info!("Layers: {:?}", layers);
                }
            }
        }
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let result = match &mut self.backdrop {
            Backdrop::Running(host) => host.tick().map(Some),
            Backdrop::Disabled(Some(render)) => render.clear().map(|()| None),
            Backdrop::Disabled(None) | Backdrop::Pending => Ok(None),
        };

        match result {
            Ok(Some(report)) => {
                self.frames += 1;
                let interval = self.config.debug.report_interval;
                if interval > 0 && self.frames % interval == 0 {
                    log::info!("Frame {}: {:?}", self.frames, report);
                    if let Some(window) = &self.window {
                        window.update_title(report.live, self.pointer.scroll_offset());
                    }
                }
            }
            Ok(None) => {}
            Err(RenderError::SurfaceLost) => match &mut self.backdrop {
                Backdrop::Running(host) => host.target_mut().recover_surface(),
                Backdrop::Disabled(Some(render)) => render.recover_surface(),
                _ => {}
            },
            Err(RenderError::OutOfMemory) => {
                log::error!("GPU out of memory, exiting");
                event_loop.exit();
            }
            Err(e) => log::warn!("{}", e),
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window = match WindowSystem::create(event_loop, &self.config.window) {
            Ok(window) => window,
            Err(e) => {
                log::error!("{}", e);
                event_loop.exit();
                return;
            }
        };

        let (width, height) = window.size();
        self.pointer.resize(width, height);
        self.backdrop = self.start_backdrop(&window);
        window.request_redraw();
        self.window = Some(window);
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }

            WindowEvent::Resized(size) => {
                self.pointer.resize(size.width, size.height);
                match &mut self.backdrop {
                    Backdrop::Running(host) => host.on_resize(size.width, size.height),
                    Backdrop::Disabled(Some(render)) => render.resize(size.width, size.height),
                    _ => {}
                }
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(key) = event.physical_key {
                    if let Some(action) = InputMapper::map_keyboard(key, event.state) {
                        self.handle_action(action, event_loop);
                    }
                }
            }

            WindowEvent::CursorMoved { position, .. } => {
                self.pointer.process_cursor_moved(position.x, position.y);
                let events = self.hover.update(Some((position.x as f32, position.y as f32)));
                if let Backdrop::Running(host) = &mut self.backdrop {
                    for event in events {
                        if let HoverEvent::Enter { center: (cx, cy), .. } = event {
                            host.on_hover_enter(cx, cy);
                        }
                    }
                }
            }

            WindowEvent::CursorLeft { .. } => {
                self.pointer.process_cursor_left();
                self.hover.update(None);
            }

            WindowEvent::MouseInput { state, button, .. } => {
                if let Some((x, y)) = self.pointer.process_mouse_button(button, state) {
                    if let Backdrop::Running(host) = &mut self.backdrop {
                        host.on_click(x, y);
                    }
                }
            }

            WindowEvent::MouseWheel { delta, .. } => {
                let offset = self.pointer.process_scroll(delta);
                if let Backdrop::Running(host) = &mut self.backdrop {
                    host.on_scroll(offset);
                }
            }

            WindowEvent::RedrawRequested => {
                self.redraw(event_loop);

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
    let config = AppConfig::load();

    // Initialize logging; RUST_LOG overrides the configured level
    let level = config
        .as_ref()
        .map(|c| c.debug.log_level.clone())
        .unwrap_or_else(|_| "info".to_string());
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
    log::info!("Starting Neonfield");

    let config = config.unwrap_or_else(|e| {
        log::warn!("Failed to load config: {}. Using defaults.", e);
        AppConfig::default()
    });

    // Create event loop
    let event_loop = EventLoop::new().expect("Failed to create event loop");
    event_loop.set_control_flow(ControlFlow::Poll);

    // Create and run application
    let mut app = App::new(config);
    event_loop.run_app(&mut app).expect("Event loop error");
}

//! Main application struct and event loop.

use std::time::Instant;

use thiserror::Error;
use winit::application::ApplicationHandler;
use winit::event::{ElementState, WindowEvent};
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::keyboard::PhysicalKey;
use winit::window::{Window, WindowId};

use primview_core::mesh::MeshError;
use primview_core::{ConfigError, ViewerConfig, ViewerState};

use crate::args::{ViewerArgs, WindowMode};
use crate::input::{map_winit_button, map_winit_key};
use crate::renderer::{FrameRenderer, RendererError};
use crate::ui::{self, EguiController};

/// Application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Event loop error: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),
    #[error("Failed to create window: {0}")]
    Window(#[from] winit::error::OsError),
    #[error(transparent)]
    Renderer(#[from] RendererError),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Viewer application: owns the window, the viewer state, the debug UI and
/// the renderer, and drives them from winit events.
pub struct ViewerApp<R: FrameRenderer> {
    config: ViewerConfig,
    max_frames: Option<u64>,
    viewer: ViewerState,
    renderer: R,
    window: Option<Window>,
    egui: Option<EguiController>,
    size: (u32, u32),
    cursor: (f32, f32),
    start_time: Instant,
    frame_number: u64,
    last_mesh_error: Option<MeshError>,
    error: Option<AppError>,
}

impl<R: FrameRenderer> ViewerApp<R> {
    pub fn new(config: ViewerConfig, renderer: R, max_frames: Option<u64>) -> Self {
        let viewer = ViewerState::new(&config);
        Self {
            size: (config.window.width, config.window.height),
            config,
            max_frames,
            viewer,
            renderer,
            window: None,
            egui: None,
            cursor: (0.0, 0.0),
            start_time: Instant::now(),
            frame_number: 0,
            last_mesh_error: None,
            error: None,
        }
    }

    /// Run the event loop until the window closes, `--max-frames` is
    /// reached, or startup fails.
    pub fn run(config: ViewerConfig, args: &ViewerArgs, renderer: R) -> Result<(), AppError> {
        let event_loop = EventLoop::new()?;
        let mut app = Self::new(config, renderer, args.max_frames);
        event_loop.run_app(&mut app)?;
        match app.error.take() {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    pub fn viewer(&self) -> &ViewerState {
        &self.viewer
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn frame_number(&self) -> u64 {
        self.frame_number
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, error: AppError) {
        log::error!("{error}");
        self.error = Some(error);
        event_loop.exit();
    }

    fn create_window(&mut self, event_loop: &ActiveEventLoop) -> Result<(), AppError> {
        let mut attributes = Window::default_attributes()
            .with_title(self.config.window.title.as_str())
            .with_inner_size(winit::dpi::LogicalSize::new(
                self.config.window.width,
                self.config.window.height,
            ));
        if ViewerArgs::window_mode(&self.config) == WindowMode::Borderless {
            attributes =
                attributes.with_fullscreen(Some(winit::window::Fullscreen::Borderless(None)));
        }

        let window = event_loop.create_window(attributes)?;
        let physical = window.inner_size();
        self.size = (physical.width, physical.height);
        log::info!(
            "Window created ({}x{} physical, scale_factor={})",
            physical.width,
            physical.height,
            window.scale_factor()
        );

        self.renderer
            .init(physical.width, physical.height, &self.config.textures)?;
        log::info!("Renderer initialized: {}", self.renderer.name());

        self.egui = Some(EguiController::new(
            physical.width,
            physical.height,
            window.scale_factor(),
        ));
        self.window = Some(window);
        Ok(())
    }

    fn on_resize(&mut self, width: u32, height: u32) {
        self.size = (width, height);
        if width == 0 || height == 0 {
            return;
        }
        if let Some(egui) = &mut self.egui {
            egui.on_resize(width, height);
        }
        self.renderer.resize(width, height);
    }

    /// Run the UI, advance the viewer and render one frame.
    ///
    /// Returns `false` once the frame limit is reached.
    pub fn render_frame(&mut self) -> bool {
        let (width, height) = self.size;
        if width == 0 || height == 0 {
            return true;
        }
        let aspect = width as f32 / height as f32;
        let elapsed = self.start_time.elapsed().as_secs_f64();

        let ui_frame = match &mut self.egui {
            Some(egui) => {
                let viewer = &mut self.viewer;
                egui.run(elapsed, |ctx| ui::show_viewer_panel(ctx, viewer))
            }
            None => ui::UiFrame::default(),
        };

        let packet = match self.viewer.frame(aspect, elapsed as f32) {
            Ok(packet) => {
                self.last_mesh_error = None;
                packet
            }
            Err(e) => {
                if self.last_mesh_error.as_ref() != Some(&e) {
                    log::warn!("Keeping previous mesh: {e}");
                    self.last_mesh_error = Some(e);
                }
                self.viewer.packet(aspect, elapsed as f32)
            }
        };

        // the panel is drawn even without a mesh so invalid values can be reset
        if let Err(e) = self.renderer.render(&packet, &ui_frame) {
            log::warn!("Frame {} failed: {e}", self.frame_number);
        }

        self.frame_number += 1;
        if let Some(max_frames) = self.max_frames
            && self.frame_number >= max_frames
        {
            log::info!("Reached max frames limit ({}), exiting", max_frames);
            return false;
        }
        true
    }

    fn on_keyboard(&mut self, event: &winit::event::KeyEvent) {
        let captured = self.egui.as_mut().is_some_and(|egui| egui.on_key(event));
        let pressed = event.state.is_pressed();
        // releases always reach the camera so keys never stick
        if captured && pressed {
            return;
        }
        if let PhysicalKey::Code(code) = event.physical_key
            && let Some(key) = map_winit_key(code)
        {
            self.viewer.on_key(key, pressed);
        }
    }
}

impl<R: FrameRenderer> ApplicationHandler for ViewerApp<R> {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        if let Err(e) = self.create_window(event_loop) {
            self.fail(event_loop, e);
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                log::info!("Close requested");
                event_loop.exit();
            }

            WindowEvent::Resized(size) => self.on_resize(size.width, size.height),

            WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                let (width, height) = self.size;
                if let Some(egui) = &mut self.egui {
                    egui.on_scale_factor_changed(scale_factor, width, height);
                }
                log::info!("Scale factor changed to {}", scale_factor);
            }

            WindowEvent::Focused(focused) => {
                if let Some(egui) = &mut self.egui {
                    egui.on_focus_changed(focused);
                }
                if !focused {
                    self.viewer.release_input();
                }
            }

            WindowEvent::ModifiersChanged(modifiers) => {
                if let Some(egui) = &mut self.egui {
                    egui.on_modifiers_changed(modifiers.state());
                }
            }

            WindowEvent::KeyboardInput { event, .. } => self.on_keyboard(&event),

            WindowEvent::CursorMoved { position, .. } => {
                if let Some(egui) = &mut self.egui {
                    egui.on_mouse_move(position.x, position.y);
                }
                self.cursor = (position.x as f32, position.y as f32);
                // drags that started in the viewport keep orbiting over the panel
                self.viewer.on_pointer_move(self.cursor.0, self.cursor.1);
            }

            WindowEvent::CursorLeft { .. } => {
                if let Some(egui) = &mut self.egui {
                    egui.on_mouse_left();
                }
            }

            WindowEvent::MouseInput { state, button, .. } => {
                let pressed = state == ElementState::Pressed;
                let captured = self
                    .egui
                    .as_mut()
                    .is_some_and(|egui| egui.on_mouse_button(button, pressed));
                if !(captured && pressed) {
                    let (x, y) = self.cursor;
                    self.viewer
                        .on_pointer_button(map_winit_button(button), pressed, x, y);
                }
            }

            WindowEvent::MouseWheel { delta, .. } => {
                if let Some(egui) = &mut self.egui {
                    egui.on_mouse_scroll(delta);
                }
            }

            WindowEvent::RedrawRequested => {
                if !self.render_frame() {
                    event_loop.exit();
                } else if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }

            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::HeadlessRenderer;
    use primview_core::mesh::Primitive;

    fn app(max_frames: Option<u64>) -> ViewerApp<HeadlessRenderer> {
        let config = ViewerConfig::default();
        let mut renderer = HeadlessRenderer::new();
        renderer.init(1280, 720, &config.textures).unwrap();
        ViewerApp::new(config, renderer, max_frames)
    }

    #[test]
    fn render_frame_stops_at_max_frames() {
        let mut app = app(Some(3));
        assert!(app.render_frame());
        assert!(app.render_frame());
        assert!(!app.render_frame());
        assert_eq!(app.frame_number(), 3);
        assert_eq!(app.renderer().frames(), 3);
        assert_eq!(app.renderer().mesh_uploads(), 1);
    }

    #[test]
    fn minimized_window_skips_rendering() {
        let mut app = app(None);
        app.on_resize(0, 0);
        assert!(app.render_frame());
        assert_eq!(app.frame_number(), 0);
        assert_eq!(app.renderer().frames(), 0);
    }

    #[test]
    fn invalid_parameters_keep_drawing_previous_mesh() {
        let mut app = app(None);
        app.viewer.set_primitive(Primitive::Torus);
        assert!(app.render_frame());

        app.viewer.shapes.torus.tube_radius = 5.0;
        assert!(app.render_frame());
        assert!(app.render_frame());
        assert!(matches!(
            app.last_mesh_error,
            Some(MeshError::TubeTooThick { .. })
        ));
        assert_eq!(app.renderer().frames(), 3);
        assert_eq!(app.renderer().mesh_uploads(), 1);
        assert_eq!(app.viewer().stats().triangles, 2 * 32 * 16);
    }

    #[test]
    fn frames_render_before_any_mesh_exists() {
        let mut app = app(None);
        app.viewer.set_primitive(Primitive::Sphere);
        app.viewer.shapes.sphere.stack_count = 1;

        assert!(app.render_frame());
        assert!(app.render_frame());
        assert_eq!(app.renderer().frames(), 2);
        assert_eq!(app.renderer().mesh_uploads(), 0);
        assert!(matches!(
            app.last_mesh_error,
            Some(MeshError::CountTooLow { .. })
        ));

        app.viewer.reset_shape();
        assert!(app.render_frame());
        assert!(app.last_mesh_error.is_none());
        assert_eq!(app.renderer().mesh_uploads(), 1);
    }
}

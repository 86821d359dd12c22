//! Egui controller that manages the UI lifecycle.
//!
//! The controller owns the egui context, feeds it the collected input and
//! tessellates the output into a [`UiFrame`] for the renderer.

use egui::Context;
use winit::event::{KeyEvent, MouseButton, MouseScrollDelta};
use winit::keyboard::ModifiersState;

use super::input::EguiInputState;

/// Tessellated UI output for one frame.
pub struct UiFrame {
    pub primitives: Vec<egui::ClippedPrimitive>,
    /// Font and image texture changes the renderer must apply before
    /// drawing `primitives`.
    pub textures_delta: egui::TexturesDelta,
    pub pixels_per_point: f32,
}

impl Default for UiFrame {
    fn default() -> Self {
        Self {
            primitives: Vec::new(),
            textures_delta: egui::TexturesDelta::default(),
            pixels_per_point: 1.0,
        }
    }
}

impl UiFrame {
    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }
}

/// Owns the egui context and input state for the viewer panel.
pub struct EguiController {
    ctx: Context,
    input_state: EguiInputState,
    /// Whether egui wants keyboard input this frame.
    pub wants_keyboard_input: bool,
    /// Whether egui wants pointer input this frame.
    pub wants_pointer_input: bool,
}

impl EguiController {
    /// `width` and `height` are physical pixels; `scale_factor` is pixels
    /// per point.
    pub fn new(width: u32, height: u32, scale_factor: f64) -> Self {
        Self {
            ctx: Context::default(),
            input_state: EguiInputState::new(width, height, scale_factor as f32),
            wants_keyboard_input: false,
            wants_pointer_input: false,
        }
    }

    pub fn context(&self) -> &Context {
        &self.ctx
    }

    /// `width` and `height` are physical pixels.
    pub fn on_resize(&mut self, width: u32, height: u32) {
        self.input_state.set_screen_size(width, height);
    }

    pub fn on_scale_factor_changed(&mut self, scale_factor: f64, width: u32, height: u32) {
        self.input_state.rescale(scale_factor as f32, width, height);
    }

    pub fn on_focus_changed(&mut self, focused: bool) {
        self.input_state.on_focus_changed(focused);
    }

    /// Returns `true` if egui wants the pointer.
    pub fn on_mouse_move(&mut self, x: f64, y: f64) -> bool {
        self.input_state.on_mouse_move(x, y);
        self.wants_pointer_input
    }

    pub fn on_mouse_left(&mut self) {
        self.input_state.on_mouse_left();
    }

    /// Returns `true` if egui wants the pointer.
    pub fn on_mouse_button(&mut self, button: MouseButton, pressed: bool) -> bool {
        self.input_state.on_mouse_button(button, pressed);
        self.wants_pointer_input
    }

    /// Returns `true` if egui wants the pointer.
    pub fn on_mouse_scroll(&mut self, delta: MouseScrollDelta) -> bool {
        self.input_state.on_mouse_scroll(delta);
        self.wants_pointer_input
    }

    pub fn on_modifiers_changed(&mut self, state: ModifiersState) {
        self.input_state.on_modifiers_changed(state);
    }

    /// Forwards the key and any typed text. Returns `true` if egui wants
    /// the keyboard.
    pub fn on_key(&mut self, event: &KeyEvent) -> bool {
        self.input_state
            .on_key(event.physical_key, event.state.is_pressed(), event.repeat);

        if event.state.is_pressed()
            && let Some(ref text) = event.text
        {
            self.input_state.on_text_input(text.as_str());
        }

        self.wants_keyboard_input
    }

    /// `elapsed_time` is seconds since startup.
    pub fn begin_frame(&mut self, elapsed_time: f64) {
        let raw_input = self.input_state.take_raw_input(elapsed_time);
        self.ctx.begin_pass(raw_input);
    }

    /// End the frame and tessellate the UI.
    pub fn end_frame(&mut self) -> UiFrame {
        let output = self.ctx.end_pass();

        self.wants_keyboard_input = self.ctx.wants_keyboard_input();
        self.wants_pointer_input = self.ctx.wants_pointer_input();

        let primitives = self.ctx.tessellate(output.shapes, output.pixels_per_point);
        UiFrame {
            primitives,
            textures_delta: output.textures_delta,
            pixels_per_point: output.pixels_per_point,
        }
    }

    /// Run `build_ui` as one complete egui frame.
    pub fn run(&mut self, elapsed_time: f64, build_ui: impl FnOnce(&Context)) -> UiFrame {
        self.begin_frame(elapsed_time);
        build_ui(&self.ctx);
        self.end_frame()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn run_produces_primitives_and_font_texture() {
        let mut controller = EguiController::new(800, 600, 1.0);
        let frame = controller.run(0.0, |ctx| {
            egui::Window::new("test").show(ctx, |ui| {
                ui.label("hello");
            });
        });
        assert!(!frame.is_empty());
        assert!(!frame.textures_delta.set.is_empty());
        assert_eq!(frame.pixels_per_point, 1.0);
    }

    #[test]
    fn empty_ui_has_no_primitives() {
        let mut controller = EguiController::new(800, 600, 1.0);
        let frame = controller.run(0.0, |_| {});
        assert!(frame.is_empty());
        assert!(!controller.wants_pointer_input);
    }

    #[test]
    fn scale_factor_is_forwarded() {
        let mut controller = EguiController::new(800, 600, 1.0);
        controller.on_scale_factor_changed(2.0, 800, 600);
        let frame = controller.run(0.0, |ctx| {
            egui::Window::new("test").show(ctx, |ui| {
                ui.label("hello");
            });
        });
        assert_eq!(frame.pixels_per_point, 2.0);
    }
}

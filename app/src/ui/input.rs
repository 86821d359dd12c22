//! Translation from winit events to egui input.

use egui::{Key, Modifiers, PointerButton, Pos2, RawInput, Rect, Vec2};
use winit::event::{MouseButton, MouseScrollDelta};
use winit::keyboard::{KeyCode, ModifiersState, PhysicalKey};

/// Points scrolled per wheel line.
const LINE_SCROLL_POINTS: f32 = 24.0;

/// Accumulates winit events between panel passes, in egui points.
pub struct EguiInputState {
    mouse_pos: Pos2,
    modifiers: Modifiers,
    screen_rect: Rect,
    pixels_per_point: f32,
    events: Vec<egui::Event>,
    focused: bool,
}

impl EguiInputState {
    /// `width` and `height` are physical pixels.
    pub fn new(width: u32, height: u32, pixels_per_point: f32) -> Self {
        let mut state = Self {
            mouse_pos: Pos2::ZERO,
            modifiers: Modifiers::default(),
            screen_rect: Rect::NOTHING,
            pixels_per_point,
            events: Vec::new(),
            focused: true,
        };
        state.set_screen_size(width, height);
        state
    }

    pub fn set_screen_size(&mut self, width: u32, height: u32) {
        self.screen_rect = Rect::from_min_size(
            Pos2::ZERO,
            Vec2::new(
                width as f32 / self.pixels_per_point,
                height as f32 / self.pixels_per_point,
            ),
        );
    }

    /// Switch to a new DPI scale; the screen rect is recomputed from the
    /// physical size.
    pub fn rescale(&mut self, pixels_per_point: f32, width: u32, height: u32) {
        self.pixels_per_point = pixels_per_point;
        self.set_screen_size(width, height);
    }

    pub fn on_focus_changed(&mut self, focused: bool) {
        self.focused = focused;
        self.events.push(egui::Event::WindowFocused(focused));
    }

    /// `x` and `y` are physical pixels.
    pub fn on_mouse_move(&mut self, x: f64, y: f64) {
        let pos = Pos2::new(
            x as f32 / self.pixels_per_point,
            y as f32 / self.pixels_per_point,
        );
        self.mouse_pos = pos;
        self.events.push(egui::Event::PointerMoved(pos));
    }

    pub fn on_mouse_left(&mut self) {
        self.events.push(egui::Event::PointerGone);
    }

    /// Back/forward become egui's extra buttons; other buttons are ignored.
    pub fn on_mouse_button(&mut self, button: MouseButton, pressed: bool) {
        let egui_button = match button {
            MouseButton::Left => Some(PointerButton::Primary),
            MouseButton::Right => Some(PointerButton::Secondary),
            MouseButton::Middle => Some(PointerButton::Middle),
            MouseButton::Back => Some(PointerButton::Extra1),
            MouseButton::Forward => Some(PointerButton::Extra2),
            MouseButton::Other(_) => None,
        };

        if let Some(button) = egui_button {
            self.events.push(egui::Event::PointerButton {
                pos: self.mouse_pos,
                button,
                pressed,
                modifiers: self.modifiers,
            });
        }
    }

    pub fn on_mouse_scroll(&mut self, delta: MouseScrollDelta) {
        let delta = match delta {
            MouseScrollDelta::LineDelta(x, y) => {
                Vec2::new(x * LINE_SCROLL_POINTS, y * LINE_SCROLL_POINTS)
            }
            MouseScrollDelta::PixelDelta(pos) => Vec2::new(
                pos.x as f32 / self.pixels_per_point,
                pos.y as f32 / self.pixels_per_point,
            ),
        };

        self.events.push(egui::Event::MouseWheel {
            unit: egui::MouseWheelUnit::Point,
            delta,
            modifiers: self.modifiers,
        });
    }

    pub fn on_modifiers_changed(&mut self, state: ModifiersState) {
        self.modifiers = Modifiers {
            alt: state.alt_key(),
            ctrl: state.control_key(),
            shift: state.shift_key(),
            mac_cmd: cfg!(target_os = "macos") && state.super_key(),
            command: if cfg!(target_os = "macos") {
                state.super_key()
            } else {
                state.control_key()
            },
        };
    }

    /// Keys the panel has no use for are dropped.
    pub fn on_key(&mut self, physical_key: PhysicalKey, pressed: bool, repeat: bool) {
        if let PhysicalKey::Code(keycode) = physical_key
            && let Some(key) = translate_keycode(keycode)
        {
            self.events.push(egui::Event::Key {
                key,
                physical_key: Some(key),
                pressed,
                repeat,
                modifiers: self.modifiers,
            });
        }
    }

    /// Control characters are stripped; an empty remainder sends nothing.
    pub fn on_text_input(&mut self, text: &str) {
        let filtered: String = text.chars().filter(|c| !c.is_control()).collect();
        if !filtered.is_empty() {
            self.events.push(egui::Event::Text(filtered));
        }
    }

    /// Drain the collected events into egui's input for one pass.
    pub fn take_raw_input(&mut self, time: f64) -> RawInput {
        let events = std::mem::take(&mut self.events);

        let mut viewports = egui::viewport::ViewportIdMap::default();
        viewports.insert(
            egui::ViewportId::ROOT,
            egui::ViewportInfo {
                native_pixels_per_point: Some(self.pixels_per_point),
                focused: Some(self.focused),
                ..Default::default()
            },
        );

        RawInput {
            viewport_id: egui::ViewportId::ROOT,
            viewports,
            screen_rect: Some(self.screen_rect),
            max_texture_side: Some(8192),
            time: Some(time),
            predicted_dt: 1.0 / 60.0,
            modifiers: self.modifiers,
            events,
            focused: self.focused,
            ..Default::default()
        }
    }
}

/// Editing and navigation keys for the panel's drag values and combo box.
fn translate_keycode(keycode: KeyCode) -> Option<Key> {
    Some(match keycode {
        KeyCode::Escape => Key::Escape,
        KeyCode::Home => Key::Home,
        KeyCode::Delete => Key::Delete,
        KeyCode::End => Key::End,
        KeyCode::ArrowLeft => Key::ArrowLeft,
        KeyCode::ArrowUp => Key::ArrowUp,
        KeyCode::ArrowRight => Key::ArrowRight,
        KeyCode::ArrowDown => Key::ArrowDown,
        KeyCode::Backspace => Key::Backspace,
        KeyCode::Enter | KeyCode::NumpadEnter => Key::Enter,
        KeyCode::Tab => Key::Tab,
        KeyCode::Space => Key::Space,

        KeyCode::KeyA => Key::A,
        KeyCode::KeyC => Key::C,
        KeyCode::KeyD => Key::D,
        KeyCode::KeyE => Key::E,
        KeyCode::KeyQ => Key::Q,
        KeyCode::KeyS => Key::S,
        KeyCode::KeyV => Key::V,
        KeyCode::KeyW => Key::W,
        KeyCode::KeyX => Key::X,
        KeyCode::KeyZ => Key::Z,

        KeyCode::Digit0 | KeyCode::Numpad0 => Key::Num0,
        KeyCode::Digit1 | KeyCode::Numpad1 => Key::Num1,
        KeyCode::Digit2 | KeyCode::Numpad2 => Key::Num2,
        KeyCode::Digit3 | KeyCode::Numpad3 => Key::Num3,
        KeyCode::Digit4 | KeyCode::Numpad4 => Key::Num4,
        KeyCode::Digit5 | KeyCode::Numpad5 => Key::Num5,
        KeyCode::Digit6 | KeyCode::Numpad6 => Key::Num6,
        KeyCode::Digit7 | KeyCode::Numpad7 => Key::Num7,
        KeyCode::Digit8 | KeyCode::Numpad8 => Key::Num8,
        KeyCode::Digit9 | KeyCode::Numpad9 => Key::Num9,

        KeyCode::Minus | KeyCode::NumpadSubtract => Key::Minus,
        KeyCode::Period | KeyCode::NumpadDecimal => Key::Period,

        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn screen_rect_is_in_points() {
        let state = EguiInputState::new(1280, 720, 2.0);
        assert_eq!(state.screen_rect.width(), 640.0);
        assert_eq!(state.screen_rect.height(), 360.0);
    }

    #[test]
    fn pointer_events_are_scaled() {
        let mut state = EguiInputState::new(800, 600, 2.0);
        state.on_mouse_move(100.0, 50.0);
        state.on_mouse_button(MouseButton::Right, true);
        state.on_mouse_button(MouseButton::Other(7), true);

        let raw = state.take_raw_input(1.5);
        assert_eq!(raw.events.len(), 2);
        assert_eq!(raw.events[0], egui::Event::PointerMoved(Pos2::new(50.0, 25.0)));
        assert!(matches!(
            raw.events[1],
            egui::Event::PointerButton {
                button: PointerButton::Secondary,
                pressed: true,
                ..
            }
        ));
        assert_eq!(raw.time, Some(1.5));
        assert!(state.events.is_empty());
    }

    #[test]
    fn line_scroll_is_converted_to_points() {
        let mut state = EguiInputState::new(800, 600, 1.0);
        state.on_mouse_scroll(MouseScrollDelta::LineDelta(0.0, -2.0));
        let raw = state.take_raw_input(0.0);
        assert!(matches!(
            raw.events[0],
            egui::Event::MouseWheel { delta, .. } if delta == Vec2::new(0.0, -48.0)
        ));
    }

    #[test]
    fn keys_and_text() {
        let mut state = EguiInputState::new(800, 600, 1.0);
        state.on_key(PhysicalKey::Code(KeyCode::Digit4), true, false);
        state.on_key(PhysicalKey::Code(KeyCode::F12), true, false);
        state.on_text_input("4\u{8}");
        let raw = state.take_raw_input(0.0);
        assert_eq!(raw.events.len(), 2);
        assert!(matches!(raw.events[0], egui::Event::Key { key: Key::Num4, .. }));
        assert_eq!(raw.events[1], egui::Event::Text("4".into()));
    }

    #[test]
    fn text_input_drops_control_characters() {
        let mut state = EguiInputState::new(800, 600, 1.0);
        state.on_text_input("\r");
        state.on_text_input("\u{7f}\t");
        state.on_text_input("-1.\u{1b}5");
        let raw = state.take_raw_input(0.0);
        assert_eq!(raw.events, vec![egui::Event::Text("-1.5".into())]);
    }

    #[test]
    fn rescale_recomputes_screen_rect() {
        let mut state = EguiInputState::new(1000, 500, 1.0);
        state.rescale(2.0, 1000, 500);
        state.on_mouse_move(200.0, 100.0);
        assert_eq!(state.screen_rect.size(), Vec2::new(500.0, 250.0));
        assert_eq!(state.mouse_pos, Pos2::new(100.0, 50.0));
    }

    #[test]
    fn focus_is_reported() {
        let mut state = EguiInputState::new(800, 600, 1.0);
        state.on_focus_changed(false);
        let raw = state.take_raw_input(0.0);
        assert!(!raw.focused);
        assert_eq!(raw.events, vec![egui::Event::WindowFocused(false)]);
    }
}

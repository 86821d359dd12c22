//! Input conversion utilities.
//!
//! Maps platform-specific (winit) key codes and mouse buttons to the
//! platform-agnostic [`primview_core::input`] types.

use primview_core::input::{KeyCode, MouseButton};
use winit::{event, keyboard};

/// Convert a winit [`keyboard::KeyCode`] to a core movement [`KeyCode`].
/// Keys that do not move the camera map to `None`.
pub fn map_winit_key(key: keyboard::KeyCode) -> Option<KeyCode> {
    Some(match key {
        keyboard::KeyCode::KeyW => KeyCode::W,
        keyboard::KeyCode::KeyA => KeyCode::A,
        keyboard::KeyCode::KeyS => KeyCode::S,
        keyboard::KeyCode::KeyD => KeyCode::D,
        keyboard::KeyCode::KeyE => KeyCode::E,
        keyboard::KeyCode::KeyQ => KeyCode::Q,
        _ => return None,
    })
}

/// Convert a winit [`event::MouseButton`] to a core [`MouseButton`].
pub fn map_winit_button(button: event::MouseButton) -> MouseButton {
    match button {
        event::MouseButton::Left => MouseButton::Left,
        event::MouseButton::Right => MouseButton::Right,
        event::MouseButton::Middle => MouseButton::Middle,
        event::MouseButton::Back => MouseButton::Other(3),
        event::MouseButton::Forward => MouseButton::Other(4),
        event::MouseButton::Other(id) => MouseButton::Other(id),
    }
}

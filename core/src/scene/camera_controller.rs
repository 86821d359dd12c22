//! Camera controller system
//!
//! Turns pointer drags and held movement keys into [`FlyCamera`] updates.
//! Pointer events are applied as they arrive; key movement is applied once
//! per frame in [`CameraController::update`].

use crate::input::{MouseButton, MoveDirection};
use crate::math::Vec2;

use super::camera::{CameraSettings, FlyCamera};

/// Held state of the movement keys.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CameraInput {
    pub forward: bool,
    pub backward: bool,
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
}

impl CameraInput {
    pub fn new() -> Self {
        Self::default()
    }

    fn slot(&mut self, direction: MoveDirection) -> &mut bool {
        match direction {
            MoveDirection::Forward => &mut self.forward,
            MoveDirection::Backward => &mut self.backward,
            MoveDirection::Left => &mut self.left,
            MoveDirection::Right => &mut self.right,
            MoveDirection::Up => &mut self.up,
            MoveDirection::Down => &mut self.down,
        }
    }

    /// Record a key press or release for `direction`.
    pub fn set(&mut self, direction: MoveDirection, held: bool) {
        *self.slot(direction) = held;
    }

    pub fn is_held(&self, direction: MoveDirection) -> bool {
        match direction {
            MoveDirection::Forward => self.forward,
            MoveDirection::Backward => self.backward,
            MoveDirection::Left => self.left,
            MoveDirection::Right => self.right,
            MoveDirection::Up => self.up,
            MoveDirection::Down => self.down,
        }
    }

    /// True when any movement key is held.
    pub fn any_held(&self) -> bool {
        MoveDirection::ALL.iter().any(|&d| self.is_held(d))
    }

    /// Held directions whose opposite is not also held.
    pub fn net_directions(&self) -> impl Iterator<Item = MoveDirection> + '_ {
        MoveDirection::ALL
            .into_iter()
            .filter(|&d| self.is_held(d) && !self.is_held(d.opposite()))
    }

    /// Release every key.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Pointer interaction state.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum PointerMode {
    #[default]
    Idle,
    /// The control button is down; drags rotate the camera.
    Orbiting { last_pointer: Vec2 },
}

/// Abstract camera controller trait
pub trait CameraController {
    /// Apply per-frame movement to the camera.
    fn update(&mut self, camera: &mut FlyCamera);

    /// Get the controller name for debugging
    fn name(&self) -> &'static str;

    /// Reset the controller to default state
    fn reset(&mut self);
}

/// Free-fly camera controller.
///
/// - Control button (right by default) held + drag: yaw/pitch
/// - Bound movement keys: move along the camera basis each frame
#[derive(Debug, Clone)]
pub struct FreeFlyController {
    /// Degrees of rotation per pixel of drag.
    pub sensitivity: f32,
    /// World units per frame per held direction.
    pub move_speed: f32,
    /// Movement keys only act while orbiting.
    pub keys_require_drag: bool,
    /// Button that starts an orbit drag.
    pub control_button: MouseButton,
    mode: PointerMode,
    input: CameraInput,
}

impl Default for FreeFlyController {
    fn default() -> Self {
        Self::new(&CameraSettings::default())
    }
}

impl FreeFlyController {
    pub fn new(settings: &CameraSettings) -> Self {
        Self {
            sensitivity: settings.rotate_sensitivity,
            move_speed: settings.move_speed,
            keys_require_drag: settings.keys_require_drag,
            control_button: MouseButton::Right,
            mode: PointerMode::Idle,
            input: CameraInput::new(),
        }
    }

    /// Use a different button to start orbit drags.
    pub fn with_control_button(mut self, button: MouseButton) -> Self {
        self.control_button = button;
        self
    }

    pub fn mode(&self) -> PointerMode {
        self.mode
    }

    pub fn input(&self) -> &CameraInput {
        &self.input
    }

    pub fn is_orbiting(&self) -> bool {
        matches!(self.mode, PointerMode::Orbiting { .. })
    }

    /// Record a movement key press or release.
    pub fn on_key_state(&mut self, direction: MoveDirection, pressed: bool) {
        self.input.set(direction, pressed);
    }

    /// Handle a pointer button. Only the control button changes the mode.
    pub fn on_pointer_button(&mut self, button: MouseButton, pressed: bool, x: f32, y: f32) {
        if button != self.control_button {
            return;
        }
        match (self.mode, pressed) {
            (PointerMode::Idle, true) => {
                log::debug!("Camera controller: idle -> orbiting at ({x}, {y})");
                self.mode = PointerMode::Orbiting {
                    last_pointer: Vec2::new(x, y),
                };
            }
            (PointerMode::Orbiting { .. }, false) => {
                log::debug!("Camera controller: orbiting -> idle");
                self.mode = PointerMode::Idle;
            }
            _ => {}
        }
    }

    /// Handle a pointer move to `(x, y)`, rotating the camera while orbiting.
    pub fn on_pointer_move(&mut self, camera: &mut FlyCamera, x: f32, y: f32) {
        let PointerMode::Orbiting { last_pointer } = self.mode else {
            return;
        };
        let pointer = Vec2::new(x, y);
        let delta = pointer - last_pointer;
        camera.rotate(-delta.x * self.sensitivity, -delta.y * self.sensitivity);
        self.mode = PointerMode::Orbiting {
            last_pointer: pointer,
        };
    }
}

impl CameraController for FreeFlyController {
    fn update(&mut self, camera: &mut FlyCamera) {
        if self.keys_require_drag && !self.is_orbiting() {
            return;
        }
        if !self.input.any_held() {
            return;
        }
        let directions: Vec<_> = self.input.net_directions().collect();
        for direction in directions {
            camera.translate(direction, self.move_speed);
        }
    }

    fn name(&self) -> &'static str {
        "FreeFly"
    }

    fn reset(&mut self) {
        self.mode = PointerMode::Idle;
        self.input.clear();
    }
}

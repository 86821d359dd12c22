//! Platform-agnostic input types.
//!
//! Provides [`KeyCode`] and [`MouseButton`] so the camera and viewer never
//! depend on a windowing crate, plus the [`MoveDirection`] vocabulary the
//! camera controller understands.

/// Physical movement key, named by its US QWERTY position.
///
/// Platform layers map their native key codes to this enum and drop
/// everything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    W,
    A,
    S,
    D,
    E,
    Q,
}

impl KeyCode {
    /// The direction this key moves the camera: W/S forward/back, D/A
    /// strafe right/left and E/Q up/down.
    pub fn direction(self) -> MoveDirection {
        match self {
            Self::W => MoveDirection::Forward,
            Self::S => MoveDirection::Backward,
            Self::A => MoveDirection::Left,
            Self::D => MoveDirection::Right,
            Self::E => MoveDirection::Up,
            Self::Q => MoveDirection::Down,
        }
    }
}

/// Pointer button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
    Other(u16),
}

/// A camera translation direction, relative to the camera's own basis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveDirection {
    Forward,
    Backward,
    Left,
    Right,
    Up,
    Down,
}

impl MoveDirection {
    /// Every direction, in a stable order.
    pub const ALL: [MoveDirection; 6] = [
        MoveDirection::Forward,
        MoveDirection::Backward,
        MoveDirection::Left,
        MoveDirection::Right,
        MoveDirection::Up,
        MoveDirection::Down,
    ];

    /// The opposite direction.
    pub fn opposite(self) -> Self {
        match self {
            Self::Forward => Self::Backward,
            Self::Backward => Self::Forward,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
            Self::Up => Self::Down,
            Self::Down => Self::Up,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn movement_keys() {
        assert_eq!(KeyCode::W.direction(), MoveDirection::Forward);
        assert_eq!(KeyCode::S.direction(), MoveDirection::Backward);
        assert_eq!(KeyCode::A.direction(), MoveDirection::Left);
        assert_eq!(KeyCode::D.direction(), MoveDirection::Right);
        assert_eq!(KeyCode::E.direction(), MoveDirection::Up);
        assert_eq!(KeyCode::Q.direction(), MoveDirection::Down);
    }

    #[test]
    fn opposites_pair_up() {
        for dir in MoveDirection::ALL {
            assert_ne!(dir, dir.opposite());
            assert_eq!(dir, dir.opposite().opposite());
        }
    }
}

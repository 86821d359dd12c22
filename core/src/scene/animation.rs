//! Model animation and transform composition.

use crate::math::{self, Mat4, Vec3};

/// Default spin rate for [`AnimationMode::Spinning`].
pub const DEFAULT_SPIN_DEGREES_PER_SECOND: f32 = 120.0;

/// How the model is rotated over time.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum AnimationMode {
    /// No rotation.
    #[default]
    Static,
    /// A constant rotation about `axis`.
    FixedOffset { axis: Vec3, angle_degrees: f32 },
    /// Continuous rotation about `axis`.
    Spinning { axis: Vec3, degrees_per_second: f32 },
}

impl AnimationMode {
    /// Display names in UI order.
    pub const NAMES: [&'static str; 3] = ["static", "fixed offset", "spinning"];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Static => Self::NAMES[0],
            Self::FixedOffset { .. } => Self::NAMES[1],
            Self::Spinning { .. } => Self::NAMES[2],
        }
    }

    /// Spin about +Y at the default rate.
    pub fn spinning() -> Self {
        Self::Spinning {
            axis: Vec3::y(),
            degrees_per_second: DEFAULT_SPIN_DEGREES_PER_SECOND,
        }
    }

    /// The rotation axis, if the mode has one.
    pub fn axis(&self) -> Option<Vec3> {
        match self {
            Self::Static => None,
            Self::FixedOffset { axis, .. } | Self::Spinning { axis, .. } => Some(*axis),
        }
    }

    /// Switch to the mode named by `index` into [`Self::NAMES`], keeping the
    /// current axis where both modes have one.
    pub fn switch_to(&self, index: usize) -> Self {
        let axis = self.axis().unwrap_or_else(Vec3::y);
        match index {
            1 => Self::FixedOffset {
                axis,
                angle_degrees: match self {
                    Self::FixedOffset { angle_degrees, .. } => *angle_degrees,
                    _ => 0.0,
                },
            },
            2 => Self::Spinning {
                axis,
                degrees_per_second: match self {
                    Self::Spinning {
                        degrees_per_second, ..
                    } => *degrees_per_second,
                    _ => DEFAULT_SPIN_DEGREES_PER_SECOND,
                },
            },
            _ => Self::Static,
        }
    }

    /// Index of this mode in [`Self::NAMES`].
    pub fn index(&self) -> usize {
        match self {
            Self::Static => 0,
            Self::FixedOffset { .. } => 1,
            Self::Spinning { .. } => 2,
        }
    }

    /// Model rotation at `elapsed_secs` since start. A zero-length axis
    /// yields identity.
    pub fn model_rotation(&self, elapsed_secs: f32) -> Mat4 {
        let rotation = match self {
            Self::Static => None,
            Self::FixedOffset {
                axis,
                angle_degrees,
            } => math::mat4_from_axis_angle(axis, *angle_degrees),
            Self::Spinning {
                axis,
                degrees_per_second,
            } => math::mat4_from_axis_angle(axis, elapsed_secs * degrees_per_second),
        };
        rotation.unwrap_or_else(Mat4::identity)
    }
}

/// Model scale plus animation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModelTransform {
    pub scale: Vec3,
    pub animation: AnimationMode,
}

impl Default for ModelTransform {
    fn default() -> Self {
        Self {
            scale: Vec3::new(1.0, 1.0, 1.0),
            animation: AnimationMode::Static,
        }
    }
}

impl ModelTransform {
    /// Model matrix, `scale * rotation`.
    pub fn model_matrix(&self, elapsed_secs: f32) -> Mat4 {
        math::mat4_from_scale(&self.scale) * self.animation.model_rotation(elapsed_secs)
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Vec4;

    fn apply(m: &Mat4, v: Vec3) -> Vec3 {
        (m * Vec4::new(v.x, v.y, v.z, 1.0)).xyz()
    }

    #[test]
    fn static_is_identity() {
        assert_eq!(AnimationMode::Static.model_rotation(12.0), Mat4::identity());
    }

    #[test]
    fn zero_axis_is_identity() {
        let fixed = AnimationMode::FixedOffset {
            axis: Vec3::zeros(),
            angle_degrees: 45.0,
        };
        let spin = AnimationMode::Spinning {
            axis: Vec3::zeros(),
            degrees_per_second: 120.0,
        };
        assert_eq!(fixed.model_rotation(1.0), Mat4::identity());
        assert_eq!(spin.model_rotation(1.0), Mat4::identity());
    }

    #[test]
    fn fixed_offset_ignores_time() {
        let mode = AnimationMode::FixedOffset {
            axis: Vec3::new(0.0, 2.0, 0.0),
            angle_degrees: 90.0,
        };
        let a = mode.model_rotation(0.0);
        let b = mode.model_rotation(5.0);
        assert_eq!(a, b);
        let p = apply(&a, Vec3::new(1.0, 0.0, 0.0));
        assert!((p - Vec3::new(0.0, 0.0, -1.0)).norm() < 1e-5);
    }

    #[test]
    fn spinning_advances_with_time() {
        let mode = AnimationMode::spinning();
        // 0.75s at 120 deg/s is a quarter turn about +Y
        let p = apply(&mode.model_rotation(0.75), Vec3::new(1.0, 0.0, 0.0));
        assert!((p - Vec3::new(0.0, 0.0, -1.0)).norm() < 1e-4);
        let p = apply(&mode.model_rotation(3.0), Vec3::new(1.0, 0.0, 0.0));
        assert!((p - Vec3::new(1.0, 0.0, 0.0)).norm() < 1e-4);
    }

    #[test]
    fn model_matrix_scales_after_rotating() {
        let transform = ModelTransform {
            scale: Vec3::new(2.0, 1.0, 1.0),
            animation: AnimationMode::FixedOffset {
                axis: Vec3::y(),
                angle_degrees: 90.0,
            },
        };
        // (0,0,1) rotates to (1,0,0) and is then stretched along X
        let p = apply(&transform.model_matrix(0.0), Vec3::new(0.0, 0.0, 1.0));
        assert!((p - Vec3::new(2.0, 0.0, 0.0)).norm() < 1e-5);
    }

    #[test]
    fn switching_modes_keeps_axis() {
        let mode = AnimationMode::FixedOffset {
            axis: Vec3::x(),
            angle_degrees: 30.0,
        };
        let spin = mode.switch_to(2);
        assert_eq!(spin.axis(), Some(Vec3::x()));
        assert_eq!(spin.index(), 2);
        assert_eq!(spin.switch_to(1).axis(), Some(Vec3::x()));
        assert_eq!(spin.switch_to(0), AnimationMode::Static);
        assert_eq!(AnimationMode::Static.switch_to(2), AnimationMode::spinning());
    }

    #[test]
    fn reset_restores_default() {
        let mut transform = ModelTransform {
            scale: Vec3::new(3.0, 3.0, 3.0),
            animation: AnimationMode::spinning(),
        };
        transform.reset();
        assert_eq!(transform, ModelTransform::default());
        assert_eq!(transform.animation.name(), "static");
    }
}

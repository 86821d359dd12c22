//! Fly camera state.
//!
//! The camera stores only position, yaw and pitch. The facing direction and
//! the right/up basis are derived from yaw and pitch every time they are
//! asked for, so they can never drift out of sync with the angles.

use serde::Deserialize;
use thiserror::Error;

use crate::input::MoveDirection;
use crate::math::{self, Mat4, Vec3, Vec4};

/// World-space up axis.
pub const WORLD_UP: Vec3 = Vec3::new(0.0, 1.0, 0.0);

/// Largest pitch limit; at 90 degrees the view basis degenerates.
pub const MAX_PITCH_LIMIT: f32 = 89.0;

/// A camera setting outside its valid range.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("camera.{setting} {requirement}, got {value}")]
pub struct InvalidCameraSetting {
    pub setting: &'static str,
    pub requirement: &'static str,
    pub value: f32,
}

fn require(
    ok: bool,
    setting: &'static str,
    requirement: &'static str,
    value: f32,
) -> Result<(), InvalidCameraSetting> {
    if ok {
        Ok(())
    } else {
        Err(InvalidCameraSetting {
            setting,
            requirement,
            value,
        })
    }
}

/// Tunables for the fly camera and its controller.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct CameraSettings {
    /// Position the camera starts at and resets to.
    pub start_position: [f32; 3],
    /// Yaw in degrees the camera starts at and resets to.
    pub start_yaw: f32,
    /// Pitch in degrees the camera starts at and resets to.
    pub start_pitch: f32,
    /// Degrees of rotation per pixel of pointer drag.
    pub rotate_sensitivity: f32,
    /// World units moved per frame while a direction key is held.
    pub move_speed: f32,
    /// Pitch is clamped to `[-pitch_limit, pitch_limit]` degrees.
    pub pitch_limit: f32,
    /// Vertical field of view in degrees.
    pub fov_y: f32,
    pub near: f32,
    pub far: f32,
    /// Only move on key presses while the pointer is dragging.
    pub keys_require_drag: bool,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            start_position: [0.0, 0.0, 3.0],
            start_yaw: 0.0,
            start_pitch: 0.0,
            rotate_sensitivity: 0.8,
            move_speed: 0.05,
            pitch_limit: MAX_PITCH_LIMIT,
            fov_y: 45.0,
            near: 0.01,
            far: 30.0,
            keys_require_drag: false,
        }
    }
}

impl CameraSettings {
    /// Check the settings a camera can be built from without producing
    /// NaN matrices or an empty pitch range.
    pub fn validate(&self) -> Result<(), InvalidCameraSetting> {
        for (setting, value) in [
            ("start_position", self.start_position[0]),
            ("start_position", self.start_position[1]),
            ("start_position", self.start_position[2]),
            ("start_yaw", self.start_yaw),
            ("start_pitch", self.start_pitch),
            ("rotate_sensitivity", self.rotate_sensitivity),
        ] {
            require(value.is_finite(), setting, "must be finite", value)?;
        }
        require(
            self.move_speed.is_finite() && self.move_speed >= 0.0,
            "move_speed",
            "must be finite and not negative",
            self.move_speed,
        )?;
        require(
            self.pitch_limit > 0.0 && self.pitch_limit <= MAX_PITCH_LIMIT,
            "pitch_limit",
            "must be in (0, 89]",
            self.pitch_limit,
        )?;
        require(
            self.fov_y > 0.0 && self.fov_y < 180.0,
            "fov_y",
            "must be in (0, 180)",
            self.fov_y,
        )?;
        require(
            self.near.is_finite() && self.near > 0.0,
            "near",
            "must be a positive finite number",
            self.near,
        )?;
        require(
            self.far.is_finite() && self.far > self.near,
            "far",
            "must be finite and greater than near",
            self.far,
        )
    }
}

/// Perspective projection parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    /// Vertical field of view in degrees.
    pub fov_y: f32,
    pub near: f32,
    pub far: f32,
}

impl Projection {
    /// Projection matrix for a viewport with the given aspect ratio.
    pub fn matrix(&self, aspect: f32) -> Mat4 {
        math::perspective_rh(self.fov_y.to_radians(), aspect, self.near, self.far)
    }
}

/// Free-fly camera: a position plus yaw/pitch orientation in degrees.
#[derive(Debug, Clone, PartialEq)]
pub struct FlyCamera {
    pub position: Vec3,
    yaw: f32,
    pitch: f32,
    pitch_limit: f32,
    pub projection: Projection,
    home_position: Vec3,
    home_yaw: f32,
    home_pitch: f32,
}

impl Default for FlyCamera {
    fn default() -> Self {
        Self::new(&CameraSettings::default())
    }
}

impl FlyCamera {
    pub fn new(settings: &CameraSettings) -> Self {
        let position = Vec3::from(settings.start_position);
        let pitch_limit = if settings.pitch_limit.is_nan() {
            MAX_PITCH_LIMIT
        } else {
            settings.pitch_limit.abs().min(MAX_PITCH_LIMIT)
        };
        let yaw = math::wrap_degrees(settings.start_yaw);
        let pitch = settings.start_pitch.clamp(-pitch_limit, pitch_limit);
        Self {
            position,
            yaw,
            pitch,
            pitch_limit,
            projection: Projection {
                fov_y: settings.fov_y,
                near: settings.near,
                far: settings.far,
            },
            home_position: position,
            home_yaw: yaw,
            home_pitch: pitch,
        }
    }

    /// Yaw in degrees, always in `[0, 360)`.
    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    /// Pitch in degrees, always within the pitch limit.
    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    pub fn pitch_limit(&self) -> f32 {
        self.pitch_limit
    }

    pub fn set_yaw(&mut self, degrees: f32) {
        self.yaw = math::wrap_degrees(degrees);
    }

    pub fn set_pitch(&mut self, degrees: f32) {
        self.pitch = degrees.clamp(-self.pitch_limit, self.pitch_limit);
    }

    /// Add angle deltas (degrees), wrapping yaw and clamping pitch.
    pub fn rotate(&mut self, delta_yaw: f32, delta_pitch: f32) {
        self.set_yaw(self.yaw + delta_yaw);
        self.set_pitch(self.pitch + delta_pitch);
    }

    /// Facing direction: -Z rotated by pitch about X, then by yaw about Y.
    pub fn front(&self) -> Vec3 {
        let rotation = math::mat4_from_rotation_y(self.yaw) * math::mat4_from_rotation_x(self.pitch);
        (rotation * Vec4::new(0.0, 0.0, -1.0, 0.0)).xyz()
    }

    /// Camera right vector, `normalize(world_up x -front)`.
    pub fn right(&self) -> Vec3 {
        WORLD_UP.cross(&-self.front()).normalize()
    }

    /// Camera up vector, `normalize(-front x right)`.
    pub fn up(&self) -> Vec3 {
        (-self.front()).cross(&self.right()).normalize()
    }

    /// Unit vector for a movement direction in the current camera basis.
    pub fn direction_vector(&self, direction: MoveDirection) -> Vec3 {
        match direction {
            MoveDirection::Forward => self.front(),
            MoveDirection::Backward => -self.front(),
            MoveDirection::Right => self.right(),
            MoveDirection::Left => -self.right(),
            MoveDirection::Up => self.up(),
            MoveDirection::Down => -self.up(),
        }
    }

    /// Move `amount` world units in `direction`.
    pub fn translate(&mut self, direction: MoveDirection, amount: f32) {
        self.position += self.direction_vector(direction) * amount;
    }

    /// View matrix looking from the position along the front vector.
    pub fn view_matrix(&self) -> Mat4 {
        let target = self.position + self.front();
        math::look_at_rh(&self.position, &target, &WORLD_UP)
    }

    /// Projection matrix for the given viewport aspect ratio.
    pub fn projection_matrix(&self, aspect: f32) -> Mat4 {
        self.projection.matrix(aspect)
    }

    /// Restore the starting position and orientation.
    pub fn reset(&mut self) {
        self.position = self.home_position;
        self.yaw = self.home_yaw;
        self.pitch = self.home_pitch;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_vec_eq(a: Vec3, b: Vec3) {
        assert!((a - b).norm() < 1e-5, "{a:?} != {b:?}");
    }

    #[test]
    fn default_basis_looks_down_negative_z() {
        let cam = FlyCamera::default();
        assert_eq!(cam.position, Vec3::new(0.0, 0.0, 3.0));
        assert_vec_eq(cam.front(), Vec3::new(0.0, 0.0, -1.0));
        assert_vec_eq(cam.right(), Vec3::new(1.0, 0.0, 0.0));
        assert_vec_eq(cam.up(), Vec3::new(0.0, 1.0, 0.0));
    }

    #[test]
    fn yaw_90_faces_negative_x() {
        let mut cam = FlyCamera::default();
        cam.set_yaw(90.0);
        assert_vec_eq(cam.front(), Vec3::new(-1.0, 0.0, 0.0));
    }

    #[test]
    fn positive_pitch_looks_up() {
        let mut cam = FlyCamera::default();
        cam.set_pitch(45.0);
        assert!(cam.front().y > 0.0);
    }

    #[test]
    fn rotate_wraps_and_clamps() {
        let mut cam = FlyCamera::default();
        cam.rotate(-8.0, 500.0);
        assert!((cam.yaw() - 352.0).abs() < 1e-4);
        assert_eq!(cam.pitch(), 89.0);
        cam.rotate(0.0, -1000.0);
        assert_eq!(cam.pitch(), -89.0);
    }

    #[test]
    fn basis_is_orthonormal_at_steep_pitch() {
        let mut cam = FlyCamera::default();
        cam.rotate(37.0, 89.0);
        let (f, r, u) = (cam.front(), cam.right(), cam.up());
        assert!((f.norm() - 1.0).abs() < 1e-5);
        assert!(f.dot(&r).abs() < 1e-4);
        assert!(f.dot(&u).abs() < 1e-4);
        assert!(r.dot(&u).abs() < 1e-4);
    }

    #[test]
    fn translate_moves_along_basis() {
        let mut cam = FlyCamera::default();
        cam.translate(MoveDirection::Forward, 1.0);
        assert_vec_eq(cam.position, Vec3::new(0.0, 0.0, 2.0));
        cam.translate(MoveDirection::Left, 0.5);
        assert_vec_eq(cam.position, Vec3::new(-0.5, 0.0, 2.0));
        cam.translate(MoveDirection::Up, 0.25);
        assert_vec_eq(cam.position, Vec3::new(-0.5, 0.25, 2.0));
    }

    #[test]
    fn view_matrix_puts_camera_at_origin() {
        let cam = FlyCamera::default();
        let p = cam
            .view_matrix()
            .transform_point(&nalgebra::Point3::from(cam.position));
        assert!(p.coords.norm() < 1e-5);
        let ahead = cam
            .view_matrix()
            .transform_point(&nalgebra::Point3::new(0.0, 0.0, 0.0));
        // origin is 3 units ahead, i.e. at -3 on the view Z axis
        assert!((ahead.z + 3.0).abs() < 1e-5);
    }

    #[test]
    fn reset_restores_start() {
        let mut cam = FlyCamera::default();
        cam.rotate(10.0, 10.0);
        cam.translate(MoveDirection::Up, 2.0);
        cam.reset();
        assert_eq!(cam, FlyCamera::default());
    }

    #[test]
    fn settings_clamp_start_pitch() {
        let settings = CameraSettings {
            start_pitch: 120.0,
            start_yaw: -90.0,
            ..Default::default()
        };
        let cam = FlyCamera::new(&settings);
        assert_eq!(cam.pitch(), 89.0);
        assert!((cam.yaw() - 270.0).abs() < 1e-4);
    }

    #[test]
    fn nan_pitch_limit_falls_back_to_max() {
        let settings = CameraSettings {
            pitch_limit: f32::NAN,
            start_pitch: 30.0,
            ..Default::default()
        };
        assert!(settings.validate().is_err());
        let cam = FlyCamera::new(&settings);
        assert_eq!(cam.pitch_limit(), MAX_PITCH_LIMIT);
        assert_eq!(cam.pitch(), 30.0);
    }

    #[test]
    fn validate_rejects_out_of_range_settings() {
        assert!(CameraSettings::default().validate().is_ok());

        let cases = [
            CameraSettings {
                pitch_limit: 0.0,
                ..Default::default()
            },
            CameraSettings {
                pitch_limit: 90.0,
                ..Default::default()
            },
            CameraSettings {
                fov_y: f32::INFINITY,
                ..Default::default()
            },
            CameraSettings {
                near: 0.0,
                ..Default::default()
            },
            CameraSettings {
                near: 5.0,
                far: 5.0,
                ..Default::default()
            },
            CameraSettings {
                move_speed: -1.0,
                ..Default::default()
            },
            CameraSettings {
                start_position: [0.0, f32::NAN, 0.0],
                ..Default::default()
            },
        ];
        for settings in cases {
            assert!(settings.validate().is_err(), "{settings:?}");
        }

        let err = CameraSettings {
            far: 0.001,
            ..Default::default()
        }
        .validate()
        .unwrap_err();
        assert_eq!(err.setting, "far");
        assert_eq!(
            err.to_string(),
            "camera.far must be finite and greater than near, got 0.001"
        );
    }
}

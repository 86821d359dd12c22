//! Math type aliases and helper functions.
//!
//! All rendering math is `f32` and built on nalgebra. Angles exposed to the
//! UI are in degrees; helpers that take radians say so.

pub use nalgebra;

/// 2D vector (f32).
pub type Vec2 = nalgebra::Vector2<f32>;

/// 3D vector (f32).
pub type Vec3 = nalgebra::Vector3<f32>;

/// 4D vector (f32).
pub type Vec4 = nalgebra::Vector4<f32>;

/// 4x4 matrix (f32).
pub type Mat4 = nalgebra::Matrix4<f32>;

/// Axis lengths below this are treated as "no axis".
pub const AXIS_EPSILON: f32 = 1e-6;

/// Build a right-handed perspective projection with depth range [0, 1] (wgpu/Vulkan convention).
pub fn perspective_rh(yfov: f32, aspect: f32, znear: f32, zfar: f32) -> Mat4 {
    let f = 1.0 / (yfov / 2.0).tan();
    let nf = 1.0 / (znear - zfar);
    #[rustfmt::skip]
    let result = Mat4::new(
        f / aspect, 0.0,  0.0,              0.0,
        0.0,        f,    0.0,              0.0,
        0.0,        0.0,  zfar * nf,        znear * zfar * nf,
        0.0,        0.0,  -1.0,             0.0,
    );
    result
}

/// Right-handed look-at view matrix.
pub fn look_at_rh(eye: &Vec3, target: &Vec3, up: &Vec3) -> Mat4 {
    let eye_point = nalgebra::Point3::from(*eye);
    let target_point = nalgebra::Point3::from(*target);
    nalgebra::Isometry3::look_at_rh(&eye_point, &target_point, up).to_homogeneous()
}

/// Rotation about the X axis by `degrees`.
pub fn mat4_from_rotation_x(degrees: f32) -> Mat4 {
    nalgebra::Rotation3::from_axis_angle(&Vec3::x_axis(), degrees.to_radians()).to_homogeneous()
}

/// Rotation about the Y axis by `degrees`.
pub fn mat4_from_rotation_y(degrees: f32) -> Mat4 {
    nalgebra::Rotation3::from_axis_angle(&Vec3::y_axis(), degrees.to_radians()).to_homogeneous()
}

/// Rotation about an arbitrary axis by `degrees`.
///
/// Returns `None` when the axis is (numerically) zero-length, since no
/// rotation direction can be derived from it.
pub fn mat4_from_axis_angle(axis: &Vec3, degrees: f32) -> Option<Mat4> {
    let axis = nalgebra::Unit::try_new(*axis, AXIS_EPSILON)?;
    Some(nalgebra::Rotation3::from_axis_angle(&axis, degrees.to_radians()).to_homogeneous())
}

/// Build a non-uniform scale matrix.
pub fn mat4_from_scale(scale: &Vec3) -> Mat4 {
    Mat4::new_nonuniform_scaling(scale)
}

/// Wrap an angle in degrees into `[0, 360)`.
pub fn wrap_degrees(degrees: f32) -> f32 {
    let wrapped = degrees.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

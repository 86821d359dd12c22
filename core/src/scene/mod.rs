//! Scene state: the fly camera, its controller and model animation.

mod animation;
mod camera;
mod camera_controller;

pub use animation::{AnimationMode, DEFAULT_SPIN_DEGREES_PER_SECOND, ModelTransform};
pub use camera::{
    CameraSettings, FlyCamera, InvalidCameraSetting, MAX_PITCH_LIMIT, Projection, WORLD_UP,
};
pub use camera_controller::{CameraController, CameraInput, FreeFlyController, PointerMode};

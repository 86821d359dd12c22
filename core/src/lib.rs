//! # primview core
//!
//! Procedural primitive meshes, the fly camera and the per-frame viewer
//! state. Nothing here touches a window or a GPU; the application crate
//! feeds input in and hands [`viewer::FramePacket`]s to a renderer.

pub mod config;
pub mod input;
pub mod math;
pub mod mesh;
pub mod scene;
pub mod viewer;

pub use config::{ConfigError, ViewerConfig};
pub use viewer::{FramePacket, TextureSlot, ViewerState};

/// Core library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Log the core library version.
pub fn init() {
    log::info!("primview core v{} initialized", VERSION);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}

//! Renderer seam.
//!
//! GPU resources, shaders and image decoding live behind [`FrameRenderer`].
//! The viewer only hands it a [`FramePacket`] and a [`UiFrame`] per frame.
//! [`HeadlessRenderer`] implements the seam without a GPU, for smoke runs
//! and tests.

use primview_core::config::TextureConfig;
use primview_core::{FramePacket, TextureSlot};
use thiserror::Error;

use crate::ui::UiFrame;

/// Renderer error type
#[derive(Error, Debug)]
pub enum RendererError {
    #[error("Failed to initialize renderer: {0}")]
    InitializationFailed(String),
    #[error("Failed to render frame: {0}")]
    Frame(String),
}

/// Draws viewer frames.
pub trait FrameRenderer {
    /// Get the renderer name for logging.
    fn name(&self) -> &'static str;

    /// Create resources and load the slot textures. Called once before the
    /// first frame; an error aborts startup.
    fn init(&mut self, width: u32, height: u32, textures: &TextureConfig)
    -> Result<(), RendererError>;

    /// The drawable size changed, in physical pixels.
    fn resize(&mut self, width: u32, height: u32);

    /// Clear, draw the mesh (if the packet has one) with the packet's
    /// transform and texture, then draw the UI on top.
    fn render(&mut self, packet: &FramePacket, ui: &UiFrame) -> Result<(), RendererError>;
}

/// Renderer that records what it would draw.
#[derive(Debug, Default)]
pub struct HeadlessRenderer {
    initialized: bool,
    size: (u32, u32),
    frames: u64,
    mesh_uploads: u64,
    last_texture: Option<TextureSlot>,
}

impl HeadlessRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of frames rendered.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Number of times mesh buffers were (re)uploaded.
    pub fn mesh_uploads(&self) -> u64 {
        self.mesh_uploads
    }

    pub fn size(&self) -> (u32, u32) {
        self.size
    }

    /// Texture slot bound by the last frame.
    pub fn last_texture(&self) -> Option<TextureSlot> {
        self.last_texture
    }
}

impl FrameRenderer for HeadlessRenderer {
    fn name(&self) -> &'static str {
        "Headless"
    }

    fn init(
        &mut self,
        width: u32,
        height: u32,
        textures: &TextureConfig,
    ) -> Result<(), RendererError> {
        for slot in TextureSlot::ALL {
            log::debug!(
                "HeadlessRenderer: texture unit {} <- {}",
                slot.unit(),
                textures.path(slot).display()
            );
        }
        self.size = (width, height);
        self.initialized = true;
        Ok(())
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.size = (width, height);
    }

    fn render(&mut self, packet: &FramePacket, ui: &UiFrame) -> Result<(), RendererError> {
        if !self.initialized {
            return Err(RendererError::Frame("renderer not initialized".into()));
        }
        let mut index_count = 0;
        if let Some(mesh) = &packet.mesh {
            if packet.regenerated || self.mesh_uploads == 0 {
                log::debug!(
                    "HeadlessRenderer: uploading {} ({} vertex bytes, {} index bytes)",
                    packet.primitive.name(),
                    mesh.vertex_byte_len(),
                    mesh.index_byte_len()
                );
                self.mesh_uploads += 1;
            }
            index_count = mesh.index_count();
        }
        log::trace!(
            "HeadlessRenderer: frame {} draws {} indices, {} ui primitives",
            self.frames,
            index_count,
            ui.primitives.len()
        );
        self.last_texture = Some(packet.texture);
        self.frames += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use primview_core::mesh::Primitive;
    use primview_core::{ViewerConfig, ViewerState};

    #[test]
    fn test_error_display() {
        let err = RendererError::InitializationFailed("no adapter".to_string());
        assert_eq!(err.to_string(), "Failed to initialize renderer: no adapter");
    }

    #[test]
    fn render_before_init_fails() {
        let mut viewer = ViewerState::new(&ViewerConfig::default());
        let packet = viewer.frame(1.0, 0.0).unwrap();
        let mut renderer = HeadlessRenderer::new();
        assert!(renderer.render(&packet, &UiFrame::default()).is_err());
    }

    #[test]
    fn uploads_only_on_regeneration() {
        let config = ViewerConfig::default();
        let mut viewer = ViewerState::new(&config);
        let mut renderer = HeadlessRenderer::new();
        renderer.init(640, 480, &config.textures).unwrap();

        for _ in 0..3 {
            let packet = viewer.frame(1.0, 0.0).unwrap();
            renderer.render(&packet, &UiFrame::default()).unwrap();
        }
        viewer.set_primitive(Primitive::Sphere);
        viewer.texture = TextureSlot::Earth;
        let packet = viewer.frame(1.0, 0.0).unwrap();
        renderer.render(&packet, &UiFrame::default()).unwrap();

        assert_eq!(renderer.frames(), 4);
        assert_eq!(renderer.mesh_uploads(), 2);
        assert_eq!(renderer.last_texture(), Some(TextureSlot::Earth));

        renderer.resize(100, 50);
        assert_eq!(renderer.size(), (100, 50));
    }

    #[test]
    fn packet_without_mesh_renders_ui_only() {
        let config = ViewerConfig::default();
        let viewer = ViewerState::new(&config);
        let mut renderer = HeadlessRenderer::new();
        renderer.init(640, 480, &config.textures).unwrap();

        let packet = viewer.packet(1.0, 0.0);
        assert!(packet.mesh.is_none());
        renderer.render(&packet, &UiFrame::default()).unwrap();
        assert_eq!(renderer.frames(), 1);
        assert_eq!(renderer.mesh_uploads(), 0);
    }
}

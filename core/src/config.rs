//! Viewer configuration loaded from TOML.
//!
//! Every field is optional; anything missing falls back to the built-in
//! defaults, so an empty file is a valid configuration. Values that are
//! present are validated on load, so a bad shape or camera setting fails
//! at startup instead of on the first frame.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::mesh::{MeshError, Primitive, ShapeParams};
use crate::scene::{CameraSettings, InvalidCameraSetting};
use crate::viewer::TextureSlot;

/// Default background color.
pub const DEFAULT_CLEAR_COLOR: [f32; 4] = [0.5, 0.5, 0.5, 0.0];

/// Configuration loading error
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Invalid shape in config: {0}")]
    Invalid(#[from] MeshError),
    #[error("Invalid config: {0}")]
    Camera(#[from] InvalidCameraSetting),
}

/// Top-level viewer configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    pub window: WindowConfig,
    pub camera: CameraSettings,
    pub shapes: ShapeParams,
    pub textures: TextureConfig,
    pub clear_color: [f32; 4],
    pub primitive: Primitive,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            camera: CameraSettings::default(),
            shapes: ShapeParams::default(),
            textures: TextureConfig::default(),
            clear_color: DEFAULT_CLEAR_COLOR,
            primitive: Primitive::default(),
        }
    }
}

impl ViewerConfig {
    /// Load a config from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&content)?;
        log::info!("Loaded viewer config from {}", path.display());
        Ok(config)
    }

    /// Parse and validate a config from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check every shape's parameters and the camera settings.
    ///
    /// All shapes are checked, not only the starting one, since the UI can
    /// switch to any of them.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for primitive in Primitive::ALL {
            self.shapes.validate(primitive)?;
        }
        self.camera.validate()?;
        Ok(())
    }
}

/// Window settings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: u32,
    pub height: u32,
    pub title: String,
    pub fullscreen: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
            title: "primview".into(),
            fullscreen: false,
        }
    }
}

/// Texture asset paths, one per [`TextureSlot`]. Decoding happens in the
/// renderer.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct TextureConfig {
    pub wood: PathBuf,
    pub metal: PathBuf,
    pub earth: PathBuf,
}

impl Default for TextureConfig {
    fn default() -> Self {
        Self {
            wood: TextureSlot::Wood.default_path().into(),
            metal: TextureSlot::Metal.default_path().into(),
            earth: TextureSlot::Earth.default_path().into(),
        }
    }
}

impl TextureConfig {
    pub fn path(&self, slot: TextureSlot) -> &Path {
        match slot {
            TextureSlot::Wood => &self.wood,
            TextureSlot::Metal => &self.metal,
            TextureSlot::Earth => &self.earth,
        }
    }
}

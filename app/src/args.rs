//! Command line arguments.
//!
//! Uses clap for CLI parsing with help text (`--help`), validation and
//! clear error messages. Flags override values from the config file.

use std::path::PathBuf;

use clap::Parser;
use primview_core::mesh::Primitive;
use primview_core::{ConfigError, ViewerConfig};

/// Window mode enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WindowMode {
    /// Windowed mode with decorations.
    #[default]
    Windowed,
    /// Borderless fullscreen.
    Borderless,
}

/// Primitive selection for CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum CliPrimitive {
    Box,
    Cylinder,
    Sphere,
    Torus,
}

impl From<CliPrimitive> for Primitive {
    fn from(cli: CliPrimitive) -> Self {
        match cli {
            CliPrimitive::Box => Primitive::Box,
            CliPrimitive::Cylinder => Primitive::Cylinder,
            CliPrimitive::Sphere => Primitive::Sphere,
            CliPrimitive::Torus => Primitive::Torus,
        }
    }
}

/// primview command line arguments.
#[derive(Parser, Debug, Clone, Default)]
#[command(
    name = "primview",
    about = "Interactive viewer for procedurally generated primitives",
    long_about = "Renders a box, cylinder, sphere or torus under a free-fly camera.\n\n\
        CONTROLS:\n\
          Right mouse drag   look around\n\
          W/S A/D E/Q        move forward/back, left/right, up/down\n\
        \n\
        EXAMPLES:\n\
          # Start on the sphere\n\
          primview --primitive sphere\n\
        \n\
          # Smoke test: render 10 frames then exit\n\
          primview --max-frames 10",
    version
)]
pub struct ViewerArgs {
    /// TOML config file. Missing fields use built-in defaults.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Initial window width in pixels.
    #[arg(long)]
    pub width: Option<u32>,

    /// Initial window height in pixels.
    #[arg(long)]
    pub height: Option<u32>,

    /// Run in borderless fullscreen mode.
    #[arg(long)]
    pub fullscreen: bool,

    /// Primitive shown at startup.
    #[arg(long, value_enum)]
    pub primitive: Option<CliPrimitive>,

    /// Exit after rendering N frames (useful for testing).
    #[arg(long)]
    pub max_frames: Option<u64>,
}

impl ViewerArgs {
    /// Load the config file named by `--config` (or the defaults) and apply
    /// the command line overrides on top.
    pub fn load_config(&self) -> Result<ViewerConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => ViewerConfig::load(path)?,
            None => ViewerConfig::default(),
        };
        self.apply(&mut config);
        Ok(config)
    }

    /// Apply command line overrides to `config`.
    pub fn apply(&self, config: &mut ViewerConfig) {
        if let Some(width) = self.width {
            config.window.width = width;
        }
        if let Some(height) = self.height {
            config.window.height = height;
        }
        if self.fullscreen {
            config.window.fullscreen = true;
        }
        if let Some(primitive) = self.primitive {
            config.primitive = primitive.into();
        }
    }

    pub fn window_mode(config: &ViewerConfig) -> WindowMode {
        if config.window.fullscreen {
            WindowMode::Borderless
        } else {
            WindowMode::Windowed
        }
    }
}

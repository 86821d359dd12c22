//! # primview App
//!
//! Windowed shell around [`primview_core::ViewerState`].
//!
//! ## Overview
//!
//! - [`ViewerApp`] - winit event loop that routes input and drives frames
//! - [`ViewerArgs`] - command line arguments layered over the config file
//! - [`FrameRenderer`] - seam for the GPU backend; [`HeadlessRenderer`] runs without one
//! - [`ui`] - egui debug panel

mod app;
mod args;
mod input;
mod renderer;
pub mod ui;

pub use app::{AppError, ViewerApp};
pub use args::{CliPrimitive, ViewerArgs, WindowMode};
pub use input::{map_winit_button, map_winit_key};
pub use renderer::{FrameRenderer, HeadlessRenderer, RendererError};

/// App library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the app subsystem.
///
/// This should be called before using any app functionality.
pub fn init() {
    log::info!("primview app v{} initialized", VERSION);
}

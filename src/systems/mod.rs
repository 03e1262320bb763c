//! Application systems
//!
//! Modular systems extracted from main.rs for better organization and testability.

mod playback;
mod render;
mod window;

pub use playback::{PlaybackSystem, PlaybackResult};
pub use render::{RenderSystem, RenderError};
pub use window::{WindowSystem, WindowError};

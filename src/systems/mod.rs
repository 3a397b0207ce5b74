//! Application systems
//!
//! The window and the GPU target the scene host draws to.

mod render;
mod window;

pub use render::RenderSystem;
pub use window::{WindowError, WindowSystem};

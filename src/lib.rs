//! Neonfield - animated neon backdrop
//!
//! Application layer: configuration, the [`SceneHost`] that owns the running
//! scene, and the window/GPU systems the binary wires together.

pub mod config;
pub mod host;
pub mod input;
pub mod systems;

pub use host::{HostError, HostSettings, InteractionEffects, SceneHost};

//! Neonfield rendering library
//!
//! This crate turns a [`neonfield_core::Scene`] into pixels. Scene content is
//! flattened into point instances and line segments on the CPU each frame and
//! drawn with additive blending by a small wgpu pipeline.
//!
//! ## Key Components
//!
//! - [`camera::PerspectiveCamera`] - Fixed perspective camera with unprojection
//! - [`renderable::FrameGeometry`] - Per-frame CPU geometry built from a scene
//! - [`target::RenderTarget`] - Seam between the scene host and a drawing surface
//! - [`context::RenderContext`] - WGPU device, queue, and surface management
//! - [`pipeline::ScenePipeline`] - Point and line pipelines sharing one uniform buffer

pub mod camera;
pub mod context;
pub mod error;
pub mod pipeline;
pub mod renderable;
pub mod target;

pub use camera::PerspectiveCamera;
pub use error::{RenderError, StartupError};
pub use renderable::{FrameGeometry, LayerMask};
pub use target::RenderTarget;

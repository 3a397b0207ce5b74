//! Rendering pipeline components
//!
//! This module contains the point and line pipelines for the backdrop.

pub mod types;
pub mod scene_pipeline;

// Re-export types
pub use types::{LineVertex, PointInstance, SceneUniforms, QUAD_VERTEX_COUNT};

// Re-export pipelines
pub use scene_pipeline::{ScenePipeline, ADDITIVE_BLENDING};

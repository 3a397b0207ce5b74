//! GPU-compatible data types for the scene pipeline
//!
//! These types match the shader layouts in `scene.wgsl` exactly.
//! All types derive Pod and Zeroable for safe GPU buffer operations.

use bytemuck::{Pod, Zeroable};
use neonfield_math::mat4;

/// One billboarded point, drawn as an instanced quad
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct PointInstance {
    /// World-space centre
    pub position: [f32; 3],
    /// Quad edge length in world units
    pub size: f32,
    /// RGBA color (alpha is the layer opacity)
    pub color: [f32; 4],
}

impl PointInstance {
    pub fn new(position: [f32; 3], size: f32, color: [f32; 4]) -> Self {
        Self { position, size, color }
    }
}

/// One end of a line segment
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct LineVertex {
    /// World-space position
    pub position: [f32; 3],
    /// RGBA color
    pub color: [f32; 4],
}

impl LineVertex {
    pub fn new(position: [f32; 3], color: [f32; 4]) -> Self {
        Self { position, color }
    }
}

/// Camera uniforms shared by both pipelines
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct SceneUniforms {
    /// World to view transform
    pub view_matrix: [[f32; 4]; 4],
    /// View to clip transform
    pub projection_matrix: [[f32; 4]; 4],
}

impl Default for SceneUniforms {
    fn default() -> Self {
        Self {
            view_matrix: mat4::IDENTITY,
            projection_matrix: mat4::IDENTITY,
        }
    }
}

/// Vertices per point quad (two triangles)
pub const QUAD_VERTEX_COUNT: u32 = 6;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_instance_size() {
        // position(12) + size(4) + color(16)
        assert_eq!(std::mem::size_of::<PointInstance>(), 32);
    }

    #[test]
    fn test_line_vertex_size() {
        // position(12) + color(16)
        assert_eq!(std::mem::size_of::<LineVertex>(), 28);
    }

    #[test]
    fn test_uniforms_size() {
        assert_eq!(std::mem::size_of::<SceneUniforms>(), 128);
    }
}

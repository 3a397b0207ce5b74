//! Accumulated Euler rotation
//!
//! Rotations in the scene are only ever accumulated per axis and then applied,
//! so a plain XYZ Euler triple is enough. Application order matches the usual
//! scene-graph convention: Z first, then Y, then X.

use serde::{Serialize, Deserialize};
use crate::Vec3;

/// Rotation angles (radians) around the X, Y and Z axes
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Euler3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Euler3 {
    pub const IDENTITY: Self = Self { x: 0.0, y: 0.0, z: 0.0 };

    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Add per-axis increments
    #[inline]
    pub fn accumulate(&mut self, delta: Vec3) {
        self.x += delta.x;
        self.y += delta.y;
        self.z += delta.z;
    }

    /// Angles as a vector
    #[inline]
    pub fn as_vec3(self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }

    /// Rotate a point: `Rx * Ry * Rz * p`
    pub fn rotate(self, p: Vec3) -> Vec3 {
        let (sx, cx) = self.x.sin_cos();
        let (sy, cy) = self.y.sin_cos();
        let (sz, cz) = self.z.sin_cos();

        // Z
        let p = Vec3::new(p.x * cz - p.y * sz, p.x * sz + p.y * cz, p.z);
        // Y
        let p = Vec3::new(p.x * cy + p.z * sy, p.y, -p.x * sy + p.z * cy);
        // X
        Vec3::new(p.x, p.y * cx - p.z * sx, p.y * sx + p.z * cx)
    }
}

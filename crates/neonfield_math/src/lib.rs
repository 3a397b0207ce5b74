//! 3D Mathematics Library
//!
//! This crate provides the vector, rotation and polyhedron types used by the
//! Neonfield scene.
//!
//! ## Core Types
//!
//! - [`Vec3`] - 3D vector with x, y, z components
//! - [`Euler3`] - Accumulated XYZ Euler rotation
//! - [`Mat4`] - 4x4 column-major matrix for projection and view transforms
//!
//! ## Shape Types
//!
//! - [`Polyhedron`] - Wireframe vertices and edges of a small convex solid

mod vec3;
mod euler;
pub mod mat4;
pub mod polyhedron;

pub use vec3::Vec3;
pub use euler::Euler3;
pub use mat4::Mat4;
pub use polyhedron::Polyhedron;

//! Core types for the Neonfield backdrop
//!
//! This crate holds all simulation state of the animated scene. Nothing here
//! touches the GPU or the window; everything can be ticked synchronously.
//!
//! - [`ParticleField`] - Ambient point cloud rotated as a whole
//! - [`FloatingBody`] / [`FloatingBodySet`] - Bobbing wireframe polyhedra
//! - [`ConnectorLines`] - Static decorative polylines
//! - [`ExplosionEffect`] - Short-lived particle bursts
//! - [`Scene`] - Owner of every entity, with an arena for live explosions
//! - [`Palette`] - Non-empty enumerated value sets with injectable selection

mod error;
mod sampling;
mod palette;
mod particle_field;
mod floating_body;
mod connector_lines;
mod explosion;
mod scene;

pub use error::SceneError;
pub use sampling::{pick, random_in_cube, symmetric, uniform};
pub use palette::{BodyMaterial, BodyShape, NeonColor, Palette};
pub use particle_field::{FieldSettings, ParticleField, FIELD_EXTENT};
pub use floating_body::{BodyAnimation, BodySettings, FloatingBody, FloatingBodySet, BODY_EXTENT};
pub use connector_lines::{ConnectorLine, ConnectorLines, LineSettings, LINE_EXTENT};
pub use explosion::{EffectState, ExplosionEffect, ExplosionSettings};
pub use scene::{EffectKey, Scene, SceneSettings, TickReport};

// Re-export commonly used types from neonfield_math for convenience
pub use neonfield_math::{Euler3, Polyhedron, Vec3};

//! Renderable geometry - bridges the Scene to GPU buffers
//!
//! The backdrop is small enough to flatten on the CPU every frame: the
//! particle field and explosions become point instances, connector lines and
//! body wireframes become line segments.

use bitflags::bitflags;
use neonfield_core::Scene;
use crate::pipeline::{LineVertex, PointInstance};

/// Point size of the ambient particle field, in world units
pub const FIELD_POINT_SIZE: f32 = 0.05;

bitflags! {
    /// Which scene layers are drawn
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct LayerMask: u8 {
        /// Ambient particle field
        const FIELD = 1 << 0;
        /// Floating body wireframes
        const BODIES = 1 << 1;
        /// Connector lines
        const LINES = 1 << 2;
        /// Explosion bursts
        const EFFECTS = 1 << 3;
    }
}

impl Default for LayerMask {
    fn default() -> Self {
        LayerMask::all()
    }
}

/// GPU-ready geometry for one frame
#[derive(Clone, Debug, Default)]
pub struct FrameGeometry {
    /// Billboarded points (field and explosions)
    pub points: Vec<PointInstance>,
    /// Line list vertices, two per segment (lines and wireframes)
    pub lines: Vec<LineVertex>,
}

impl FrameGeometry {
    /// Create an empty frame
    pub fn new() -> Self {
        Self::default()
    }

    /// Flatten every enabled layer of `scene`
    pub fn from_scene(scene: &Scene, layers: LayerMask) -> Self {
        let mut frame = Self::new();
        if layers.contains(LayerMask::FIELD) {
            frame.add_field(scene);
        }
        if layers.contains(LayerMask::LINES) {
            frame.add_connector_lines(scene);
        }
        if layers.contains(LayerMask::BODIES) {
            frame.add_bodies(scene);
        }
        if layers.contains(LayerMask::EFFECTS) {
            frame.add_effects(scene);
        }
        frame
    }

    fn add_field(&mut self, scene: &Scene) {
        let Some(field) = scene.field() else {
            return;
        };
        let opacity = field.opacity();
        self.points.reserve(field.len());
        for (position, rgb) in field.world_positions().zip(field.colors()) {
            let [r, g, b] = *rgb;
            self.points.push(PointInstance::new(position.to_array(), FIELD_POINT_SIZE, [r, g, b, opacity]));
        }
    }

    fn add_connector_lines(&mut self, scene: &Scene) {
        let lines = scene.lines();
        let opacity = lines.opacity();
        for line in lines.lines() {
            let color = line.color().rgba(opacity);
            for pair in line.points().windows(2) {
                self.lines.push(LineVertex::new(pair[0].to_array(), color));
                self.lines.push(LineVertex::new(pair[1].to_array(), color));
            }
        }
    }

    fn add_bodies(&mut self, scene: &Scene) {
        let set = scene.bodies();
        for body in set.iter() {
            let mesh = set.mesh(body.shape());
            let rotation = body.rotation();
            let position = body.position();
            let color = body.material().rgba();
            let vertices = mesh.vertices();
            for [a, b] in mesh.edges() {
                let pa = position + rotation.rotate(vertices[*a]);
                let pb = position + rotation.rotate(vertices[*b]);
                self.lines.push(LineVertex::new(pa.to_array(), color));
                self.lines.push(LineVertex::new(pb.to_array(), color));
            }
        }
    }

    fn add_effects(&mut self, scene: &Scene) {
        for (_, effect) in scene.effects() {
            let color = effect.color().rgba(effect.opacity());
            let size = effect.point_size();
            for p in effect.positions() {
                self.points.push(PointInstance::new(p.to_array(), size, color));
            }
        }
    }

    /// Number of point instances
    #[inline]
    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    /// Number of line segments
    #[inline]
    pub fn segment_count(&self) -> usize {
        self.lines.len() / 2
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty() && self.lines.is_empty()
    }
}

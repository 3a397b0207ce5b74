//! Floating wireframe bodies
//!
//! Each body spins at its own per-axis speed and bobs vertically around its
//! anchor. The vertical phase is offset by the body's index in the set so the
//! bodies never bob in unison.

use neonfield_math::{Euler3, Polyhedron, Vec3};
use rand::Rng;
use serde::{Serialize, Deserialize};
use std::f32::consts::PI;
use crate::{random_in_cube, symmetric, uniform, BodyMaterial, BodyShape, Palette, SceneError};

/// Edge length of the cube bodies are placed in
pub const BODY_EXTENT: f32 = 10.0;

/// Parameters for building the floating body set
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BodySettings {
    pub count: usize,
    pub extent: f32,
    pub shapes: Palette<BodyShape>,
    pub materials: Palette<BodyMaterial>,
    /// Full width of the symmetric per-axis rotation speed range
    pub rotation_speed_range: f32,
    /// `[min, max)` vertical float speed
    pub float_speed: [f32; 2],
    /// `[min, max)` vertical float amplitude
    pub float_amplitude: [f32; 2],
    /// Vertical nudge per scroll event, scaled by `sin(scroll * scroll_phase + index)`
    pub scroll_drift: f32,
    /// Scroll-to-phase factor for the scroll nudge
    pub scroll_phase: f32,
}

impl Default for BodySettings {
    fn default() -> Self {
        Self {
            count: 20,
            extent: BODY_EXTENT,
            shapes: Palette::all_shapes(),
            materials: Palette::all_materials(),
            rotation_speed_range: 0.02,
            float_speed: [0.005, 0.015],
            float_amplitude: [1.0, 3.0],
            scroll_drift: 0.001,
            scroll_phase: 0.001,
        }
    }
}

impl BodySettings {
    /// Check counts and ranges without building anything
    pub fn validate(&self) -> Result<(), SceneError> {
        SceneError::require_count(self.count, "floating body count")?;
        SceneError::require_positive(self.extent, "floating body extent")?;
        SceneError::require_range(0.0, self.rotation_speed_range, "rotation speed")?;
        SceneError::require_range(self.float_speed[0], self.float_speed[1], "float speed")?;
        SceneError::require_range(self.float_amplitude[0], self.float_amplitude[1], "float amplitude")
    }
}

/// Fixed per-body animation parameters
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BodyAnimation {
    /// Rotation added every tick, per axis
    pub rotation_speed: Vec3,
    /// Angular frequency of the vertical bob
    pub float_speed: f32,
    /// Peak vertical displacement of the bob
    pub float_amplitude: f32,
}

/// A single spinning, bobbing polyhedron
#[derive(Clone, Debug, PartialEq)]
pub struct FloatingBody {
    shape: BodyShape,
    material: BodyMaterial,
    anchor: Vec3,
    position: Vec3,
    rotation: Euler3,
    animation: BodyAnimation,
    drift: f32,
}

impl FloatingBody {
    /// Create a body at `anchor` with explicit parameters
    pub fn new(
        shape: BodyShape,
        material: BodyMaterial,
        anchor: Vec3,
        rotation: Euler3,
        animation: BodyAnimation,
    ) -> Self {
        Self {
            shape,
            material,
            anchor,
            position: anchor,
            rotation,
            animation,
            drift: 0.0,
        }
    }

    fn random<R: Rng + ?Sized>(settings: &BodySettings, rng: &mut R) -> Self {
        let shape = settings.shapes.choose(rng);
        let material = settings.materials.choose(rng);
        let anchor = random_in_cube(rng, settings.extent);
        let rotation = Euler3::new(
            rng.gen::<f32>() * PI,
            rng.gen::<f32>() * PI,
            rng.gen::<f32>() * PI,
        );
        let range = settings.rotation_speed_range;
        let animation = BodyAnimation {
            rotation_speed: Vec3::new(symmetric(rng, range), symmetric(rng, range), symmetric(rng, range)),
            float_speed: uniform(rng, settings.float_speed[0], settings.float_speed[1]),
            float_amplitude: uniform(rng, settings.float_amplitude[0], settings.float_amplitude[1]),
        };
        Self::new(shape, material, anchor, rotation, animation)
    }

    /// Vertical bob offset at `time` for the body at `index`
    ///
    /// Pure: depends only on the arguments and the body's fixed parameters.
    #[inline]
    pub fn float_offset(&self, time: f32, index: usize) -> f32 {
        self.animation.float_amplitude * (time * self.animation.float_speed + index as f32).sin()
    }

    /// Advance one tick: accumulate rotation and re-place the body on its bob
    pub fn advance(&mut self, time: f32, index: usize) {
        self.rotation.accumulate(self.animation.rotation_speed);
        self.position = Vec3::new(
            self.anchor.x,
            self.anchor.y + self.float_offset(time, index) + self.drift,
            self.anchor.z,
        );
    }

    /// Nudge the body vertically; the nudge persists across ticks
    pub fn nudge(&mut self, dy: f32) {
        self.drift += dy;
        self.position.y += dy;
    }

    #[inline]
    pub fn shape(&self) -> BodyShape {
        self.shape
    }

    #[inline]
    pub fn material(&self) -> BodyMaterial {
        self.material
    }

    #[inline]
    pub fn anchor(&self) -> Vec3 {
        self.anchor
    }

    #[inline]
    pub fn position(&self) -> Vec3 {
        self.position
    }

    #[inline]
    pub fn rotation(&self) -> Euler3 {
        self.rotation
    }

    #[inline]
    pub fn animation(&self) -> &BodyAnimation {
        &self.animation
    }

    /// Accumulated scroll nudge
    #[inline]
    pub fn drift(&self) -> f32 {
        self.drift
    }
}

/// The fixed-size collection of floating bodies
#[derive(Clone, Debug)]
pub struct FloatingBodySet {
    bodies: Vec<FloatingBody>,
    /// One wireframe per shape, indexed by `BodyShape as usize`
    meshes: [Polyhedron; 4],
    scroll_drift: f32,
    scroll_phase: f32,
}

impl FloatingBodySet {
    /// Create `count` bodies with the default placement and animation ranges
    pub fn create<R: Rng + ?Sized>(
        count: usize,
        shapes: &Palette<BodyShape>,
        materials: &Palette<BodyMaterial>,
        rng: &mut R,
    ) -> Result<Self, SceneError> {
        let settings = BodySettings {
            count,
            shapes: shapes.clone(),
            materials: materials.clone(),
            ..BodySettings::default()
        };
        Self::from_settings(&settings, rng)
    }

    /// Build from settings
    pub fn from_settings<R: Rng + ?Sized>(settings: &BodySettings, rng: &mut R) -> Result<Self, SceneError> {
        settings.validate()?;
        let bodies = (0..settings.count).map(|_| FloatingBody::random(settings, rng)).collect();
        Ok(Self {
            bodies,
            meshes: BodyShape::ALL.map(BodyShape::polyhedron),
            scroll_drift: settings.scroll_drift,
            scroll_phase: settings.scroll_phase,
        })
    }

    /// Advance every body, in order, to `time` seconds
    pub fn advance_all(&mut self, time: f32) {
        for (index, body) in self.bodies.iter_mut().enumerate() {
            body.advance(time, index);
        }
    }

    /// Scroll perturbation: each body is nudged by `sin(scroll * phase + index) * drift`
    pub fn apply_scroll(&mut self, scroll_offset: f32) {
        for (index, body) in self.bodies.iter_mut().enumerate() {
            let dy = (scroll_offset * self.scroll_phase + index as f32).sin() * self.scroll_drift;
            body.nudge(dy);
        }
    }

    pub fn bodies(&self) -> &[FloatingBody] {
        &self.bodies
    }

    /// Local-space wireframe for `shape`, built once with the set
    #[inline]
    pub fn mesh(&self, shape: BodyShape) -> &Polyhedron {
        &self.meshes[shape as usize]
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FloatingBody> {
        self.bodies.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn make_set(count: usize) -> FloatingBodySet {
        let mut rng = StdRng::seed_from_u64(20);
        FloatingBodySet::create(count, &Palette::all_shapes(), &Palette::all_materials(), &mut rng).unwrap()
    }

    #[test]
    fn test_create_twenty_bodies_inside_cube() {
        let set = make_set(20);
        assert_eq!(set.len(), 20);
        for body in set.iter() {
            let p = body.position();
            assert!((-5.0..=5.0).contains(&p.x));
            assert!((-5.0..=5.0).contains(&p.y));
            assert!((-5.0..=5.0).contains(&p.z));
        }
    }

    #[test]
    fn test_parameters_within_ranges() {
        let set = make_set(200);
        for body in set.iter() {
            let a = body.animation();
            assert!(a.rotation_speed.within_cube(0.01));
            assert!((0.005..0.015).contains(&a.float_speed));
            assert!((1.0..3.0).contains(&a.float_amplitude));
            let r = body.rotation();
            assert!((0.0..PI).contains(&r.x) && (0.0..PI).contains(&r.y) && (0.0..PI).contains(&r.z));
        }
    }

    #[test]
    fn test_palette_membership() {
        let shapes = Palette::new([BodyShape::Tetrahedron], "shape").unwrap();
        let materials = Palette::new([BodyMaterial::Magenta, BodyMaterial::Green], "material").unwrap();
        let mut rng = StdRng::seed_from_u64(4);
        let set = FloatingBodySet::create(50, &shapes, &materials, &mut rng).unwrap();
        for body in set.iter() {
            assert_eq!(body.shape(), BodyShape::Tetrahedron);
            assert!(materials.contains(&body.material()));
        }
    }

    #[test]
    fn test_meshes_match_shapes() {
        let set = make_set(3);
        for shape in BodyShape::ALL {
            assert_eq!(*set.mesh(shape), shape.polyhedron());
        }
        let body = &set.bodies()[0];
        assert!(std::ptr::eq(set.mesh(body.shape()), set.mesh(body.shape())));
    }

    #[test]
    fn test_zero_count_rejected() {
        let mut rng = StdRng::seed_from_u64(1);
        let result = FloatingBodySet::create(0, &Palette::all_shapes(), &Palette::all_materials(), &mut rng);
        assert!(matches!(result, Err(SceneError::InvalidCount { .. })));
    }

    #[test]
    fn test_inverted_range_rejected() {
        let settings = BodySettings { float_speed: [0.02, 0.01], ..BodySettings::default() };
        let mut rng = StdRng::seed_from_u64(1);
        let result = FloatingBodySet::from_settings(&settings, &mut rng);
        assert!(matches!(result, Err(SceneError::InvalidRange { what: "float speed", .. })));
    }

    #[test]
    fn test_advance_is_deterministic() {
        let set = make_set(5);
        let mut a = set.bodies()[3].clone();
        let mut b = set.bodies()[3].clone();

        assert_eq!(a.float_offset(12.5, 3), a.float_offset(12.5, 3));

        a.advance(12.5, 3);
        b.advance(12.5, 3);
        assert_eq!(a.position(), b.position());
        assert_eq!(a.rotation(), b.rotation());
    }

    #[test]
    fn test_float_offset_formula() {
        let body = FloatingBody::new(
            BodyShape::Cube,
            BodyMaterial::Cyan,
            Vec3::new(1.0, 2.0, 3.0),
            Euler3::IDENTITY,
            BodyAnimation { rotation_speed: Vec3::ZERO, float_speed: 0.01, float_amplitude: 2.0 },
        );
        let expected = 2.0 * (100.0f32 * 0.01 + 4.0).sin();
        assert!((body.float_offset(100.0, 4) - expected).abs() < 1e-6);
    }

    #[test]
    fn test_index_shifts_phase() {
        let set = make_set(1);
        let body = &set.bodies()[0];
        assert_ne!(body.float_offset(0.0, 0), body.float_offset(0.0, 1));
    }

    #[test]
    fn test_rotation_accumulates_per_tick() {
        let speed = Vec3::new(0.01, -0.005, 0.002);
        let mut body = FloatingBody::new(
            BodyShape::Octahedron,
            BodyMaterial::Green,
            Vec3::ZERO,
            Euler3::IDENTITY,
            BodyAnimation { rotation_speed: speed, float_speed: 0.01, float_amplitude: 1.0 },
        );
        for _ in 0..10 {
            body.advance(0.0, 0);
        }
        assert!((body.rotation().as_vec3() - speed * 10.0).length() < 1e-5);
    }

    #[test]
    fn test_scroll_nudge_persists() {
        let mut set = make_set(3);
        set.advance_all(1.0);
        let before: Vec<_> = set.iter().map(|b| b.position().y).collect();

        set.apply_scroll(500.0);
        for (index, body) in set.iter().enumerate() {
            let expected = (500.0f32 * 0.001 + index as f32).sin() * 0.001;
            assert!((body.drift() - expected).abs() < 1e-7);
            assert!((body.position().y - before[index] - expected).abs() < 1e-5);
        }

        // Nudge survives the next tick
        set.advance_all(1.0);
        for (index, body) in set.iter().enumerate() {
            let expected = body.anchor().y + body.float_offset(1.0, index) + body.drift();
            assert!((body.position().y - expected).abs() < 1e-6);
        }
    }
}

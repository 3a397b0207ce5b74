//! Ambient particle field
//!
//! A fixed-size point cloud stored as parallel position/colour arrays. The
//! field animates only through its whole-field rotation; individual particle
//! positions never change after creation.

use neonfield_math::{Euler3, Vec3};
use rand::Rng;
use serde::{Serialize, Deserialize};
use crate::{random_in_cube, NeonColor, Palette, SceneError};

/// Edge length of the cube particles are scattered in
pub const FIELD_EXTENT: f32 = 20.0;

/// Parameters for building and animating the particle field
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FieldSettings {
    /// Number of particles
    pub count: usize,
    /// Edge length of the spawn cube
    pub extent: f32,
    /// Colours particles are drawn from
    pub palette: Palette<NeonColor>,
    /// Rotation added every tick (radians per axis)
    pub spin: Vec3,
    /// Parallax roll per pixel of scroll
    pub scroll_roll: f32,
    /// Point opacity
    pub opacity: f32,
}

impl Default for FieldSettings {
    fn default() -> Self {
        Self {
            count: 1000,
            extent: FIELD_EXTENT,
            palette: Palette::neon(),
            spin: Vec3::new(0.001, 0.002, 0.0),
            scroll_roll: 0.0001,
            opacity: 0.8,
        }
    }
}

impl FieldSettings {
    /// Check counts and ranges without building anything
    pub fn validate(&self) -> Result<(), SceneError> {
        SceneError::require_count(self.count, "particle count")?;
        SceneError::require_positive(self.extent, "particle field extent")?;
        SceneError::require_range(0.0, self.opacity, "particle opacity")
    }
}

/// The ambient point cloud
#[derive(Clone, Debug)]
pub struct ParticleField {
    positions: Vec<Vec3>,
    colors: Vec<[f32; 3]>,
    rotation: Euler3,
    opacity: f32,
}

impl ParticleField {
    /// Scatter `count` particles in the default 20-unit cube
    pub fn create<R: Rng + ?Sized>(
        count: usize,
        palette: &Palette<NeonColor>,
        rng: &mut R,
    ) -> Result<Self, SceneError> {
        Self::create_in(count, FIELD_EXTENT, palette, rng)
    }

    /// Scatter `count` particles in a cube with edge length `extent`
    pub fn create_in<R: Rng + ?Sized>(
        count: usize,
        extent: f32,
        palette: &Palette<NeonColor>,
        rng: &mut R,
    ) -> Result<Self, SceneError> {
        SceneError::require_count(count, "particle count")?;
        SceneError::require_positive(extent, "particle field extent")?;

        let mut positions = Vec::with_capacity(count);
        let mut colors = Vec::with_capacity(count);
        for _ in 0..count {
            positions.push(random_in_cube(rng, extent));
            colors.push(palette.choose(rng).rgb());
        }

        Ok(Self {
            positions,
            colors,
            rotation: Euler3::IDENTITY,
            opacity: 0.8,
        })
    }

    /// Build from settings
    pub fn from_settings<R: Rng + ?Sized>(settings: &FieldSettings, rng: &mut R) -> Result<Self, SceneError> {
        settings.validate()?;
        let mut field = Self::create_in(settings.count, settings.extent, &settings.palette, rng)?;
        field.opacity = settings.opacity;
        Ok(field)
    }

    /// Rotate the whole field by per-axis increments
    #[inline]
    pub fn rotate(&mut self, dx: f32, dy: f32, dz: f32) {
        self.rotation.accumulate(Vec3::new(dx, dy, dz));
    }

    /// Set the roll (Z rotation) directly, used for scroll parallax
    #[inline]
    pub fn set_roll(&mut self, z: f32) {
        self.rotation.z = z;
    }

    #[inline]
    pub fn rotation(&self) -> Euler3 {
        self.rotation
    }

    /// Local-space particle positions
    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    /// Per-particle RGB colours
    pub fn colors(&self) -> &[[f32; 3]] {
        &self.colors
    }

    #[inline]
    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    /// Number of particles
    #[inline]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// World-space positions with the field rotation applied
    pub fn world_positions(&self) -> impl Iterator<Item = Vec3> + '_ {
        let rotation = self.rotation;
        self.positions.iter().map(move |p| rotation.rotate(*p))
    }
}

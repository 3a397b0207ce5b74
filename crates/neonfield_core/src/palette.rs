//! Palettes of selectable values
//!
//! Colours, body shapes and body materials are fixed enumerated sets. A
//! [`Palette`] is a non-empty selection of one of those sets; random choice is
//! delegated to [`crate::pick`].

use neonfield_math::Polyhedron;
use rand::Rng;
use serde::{Serialize, Deserialize};
use crate::{pick, SceneError};

/// The neon colour set used across the backdrop
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NeonColor {
    /// #00ffff
    Cyan,
    /// #ff00ff
    Magenta,
    /// #00ff41
    Green,
    /// #8a2be2
    Purple,
    /// #0080ff
    Blue,
}

impl NeonColor {
    /// Every colour, in declaration order
    pub const ALL: [NeonColor; 5] = [
        NeonColor::Cyan,
        NeonColor::Magenta,
        NeonColor::Green,
        NeonColor::Purple,
        NeonColor::Blue,
    ];

    /// Linear RGB components in `[0, 1]`
    pub fn rgb(self) -> [f32; 3] {
        match self {
            NeonColor::Cyan => [0.0, 1.0, 1.0],
            NeonColor::Magenta => [1.0, 0.0, 1.0],
            NeonColor::Green => [0.0, 1.0, 65.0 / 255.0],
            NeonColor::Purple => [138.0 / 255.0, 43.0 / 255.0, 226.0 / 255.0],
            NeonColor::Blue => [0.0, 128.0 / 255.0, 1.0],
        }
    }

    /// RGBA with the given alpha
    pub fn rgba(self, alpha: f32) -> [f32; 4] {
        let [r, g, b] = self.rgb();
        [r, g, b, alpha]
    }
}

/// Shapes a floating body can take
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BodyShape {
    Cube,
    Octahedron,
    Tetrahedron,
    Icosahedron,
}

impl BodyShape {
    pub const ALL: [BodyShape; 4] = [
        BodyShape::Cube,
        BodyShape::Octahedron,
        BodyShape::Tetrahedron,
        BodyShape::Icosahedron,
    ];

    /// Wireframe geometry at the fixed body size
    pub fn polyhedron(self) -> Polyhedron {
        match self {
            BodyShape::Cube => Polyhedron::cube(0.2),
            BodyShape::Octahedron => Polyhedron::octahedron(0.15),
            BodyShape::Tetrahedron => Polyhedron::tetrahedron(0.15),
            BodyShape::Icosahedron => Polyhedron::icosahedron(0.12),
        }
    }
}

/// Wireframe materials for floating bodies
///
/// All body materials are wireframe with the same fixed opacity; only the
/// colour differs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BodyMaterial {
    Cyan,
    Magenta,
    Green,
}

impl BodyMaterial {
    pub const ALL: [BodyMaterial; 3] = [BodyMaterial::Cyan, BodyMaterial::Magenta, BodyMaterial::Green];

    /// Opacity shared by every body material
    pub const OPACITY: f32 = 0.6;

    pub fn color(self) -> NeonColor {
        match self {
            BodyMaterial::Cyan => NeonColor::Cyan,
            BodyMaterial::Magenta => NeonColor::Magenta,
            BodyMaterial::Green => NeonColor::Green,
        }
    }

    /// RGBA including the material opacity
    pub fn rgba(self) -> [f32; 4] {
        self.color().rgba(Self::OPACITY)
    }
}

/// A non-empty set of selectable values
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(
    try_from = "Vec<T>",
    into = "Vec<T>",
    bound(serialize = "T: Serialize", deserialize = "T: Deserialize<'de>")
)]
pub struct Palette<T: Copy> {
    entries: Vec<T>,
}

impl<T: Copy> Palette<T> {
    /// Create a palette, rejecting an empty entry list
    pub fn new(entries: impl Into<Vec<T>>, what: &'static str) -> Result<Self, SceneError> {
        let entries = entries.into();
        if entries.is_empty() {
            return Err(SceneError::EmptyPalette { what });
        }
        Ok(Self { entries })
    }

    /// Uniformly choose one entry
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> T {
        self.entries[pick(self.entries.len(), rng)]
    }

    pub fn entries(&self) -> &[T] {
        &self.entries
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false; kept for API symmetry with collections
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T: Copy + PartialEq> Palette<T> {
    pub fn contains(&self, value: &T) -> bool {
        self.entries.contains(value)
    }
}

impl Palette<NeonColor> {
    /// The five-colour palette of the ambient particle field
    pub fn neon() -> Self {
        Self { entries: NeonColor::ALL.to_vec() }
    }

    /// The two-colour palette of connector lines
    pub fn line_colors() -> Self {
        Self { entries: vec![NeonColor::Cyan, NeonColor::Magenta] }
    }
}

impl Palette<BodyShape> {
    pub fn all_shapes() -> Self {
        Self { entries: BodyShape::ALL.to_vec() }
    }
}

impl Palette<BodyMaterial> {
    pub fn all_materials() -> Self {
        Self { entries: BodyMaterial::ALL.to_vec() }
    }
}

impl<T: Copy> TryFrom<Vec<T>> for Palette<T> {
    type Error = SceneError;

    fn try_from(entries: Vec<T>) -> Result<Self, Self::Error> {
        Palette::new(entries, "configured")
    }
}

impl<T: Copy> From<Palette<T>> for Vec<T> {
    fn from(palette: Palette<T>) -> Self {
        palette.entries
    }
}

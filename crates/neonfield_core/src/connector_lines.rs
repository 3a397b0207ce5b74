//! Static decorative polylines
//!
//! Lines are generated once and never mutated afterwards.

use neonfield_math::Vec3;
use rand::Rng;
use serde::{Serialize, Deserialize};
use std::ops::RangeInclusive;
use crate::{random_in_cube, NeonColor, Palette, SceneError};

/// Edge length of the cube line points are placed in
pub const LINE_EXTENT: f32 = 15.0;

/// Parameters for building connector lines
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LineSettings {
    pub count: usize,
    /// Smallest number of points per line (at least 2)
    pub min_points: usize,
    /// Largest number of points per line, inclusive
    pub max_points: usize,
    pub extent: f32,
    pub palette: Palette<NeonColor>,
    pub opacity: f32,
}

impl Default for LineSettings {
    fn default() -> Self {
        Self {
            count: 50,
            min_points: 3,
            max_points: 7,
            extent: LINE_EXTENT,
            palette: Palette::line_colors(),
            opacity: 0.3,
        }
    }
}

impl LineSettings {
    /// Check counts and ranges without building anything
    pub fn validate(&self) -> Result<(), SceneError> {
        SceneError::require_count(self.count, "connector line count")?;
        if self.min_points < 2 || self.min_points > self.max_points {
            return Err(SceneError::InvalidRange {
                what: "connector line point count",
                min: self.min_points as f32,
                max: self.max_points as f32,
            });
        }
        SceneError::require_positive(self.extent, "connector line extent")
    }
}

/// One open polyline
#[derive(Clone, Debug, PartialEq)]
pub struct ConnectorLine {
    points: Vec<Vec3>,
    color: NeonColor,
}

impl ConnectorLine {
    pub fn points(&self) -> &[Vec3] {
        &self.points
    }

    #[inline]
    pub fn color(&self) -> NeonColor {
        self.color
    }

    /// Number of segments in the strip
    #[inline]
    pub fn segment_count(&self) -> usize {
        self.points.len().saturating_sub(1)
    }
}

/// The immutable set of connector lines
#[derive(Clone, Debug)]
pub struct ConnectorLines {
    lines: Vec<ConnectorLine>,
    opacity: f32,
}

impl ConnectorLines {
    /// Build `line_count` lines in the 15-unit cube using the two-colour palette
    pub fn create<R: Rng + ?Sized>(
        line_count: usize,
        point_count: RangeInclusive<usize>,
        rng: &mut R,
    ) -> Result<Self, SceneError> {
        let settings = LineSettings {
            count: line_count,
            min_points: *point_count.start(),
            max_points: *point_count.end(),
            ..LineSettings::default()
        };
        Self::from_settings(&settings, rng)
    }

    /// Build from settings
    pub fn from_settings<R: Rng + ?Sized>(settings: &LineSettings, rng: &mut R) -> Result<Self, SceneError> {
        settings.validate()?;

        let lines = (0..settings.count)
            .map(|_| {
                let n = rng.gen_range(settings.min_points..=settings.max_points);
                let points = (0..n).map(|_| random_in_cube(rng, settings.extent)).collect();
                ConnectorLine { points, color: settings.palette.choose(rng) }
            })
            .collect();

        Ok(Self { lines, opacity: settings.opacity })
    }

    pub fn lines(&self) -> &[ConnectorLine] {
        &self.lines
    }

    #[inline]
    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

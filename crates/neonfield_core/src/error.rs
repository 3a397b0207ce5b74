//! Scene construction errors
//!
//! Every entity constructor validates its parameters up front; a scene is
//! either built completely or not at all.

use std::fmt;

/// Error type for invalid scene construction parameters
#[derive(Debug, Clone, PartialEq)]
pub enum SceneError {
    /// A count that must be positive was zero
    InvalidCount {
        /// Which count was rejected (e.g. "particle count")
        what: &'static str,
    },
    /// A palette was constructed without entries
    EmptyPalette {
        /// Which palette was empty
        what: &'static str,
    },
    /// A numeric range or scalar parameter was out of bounds
    InvalidRange {
        /// Which parameter was rejected
        what: &'static str,
        /// Lower bound as given
        min: f32,
        /// Upper bound as given
        max: f32,
    },
}

impl SceneError {
    pub(crate) fn require_count(value: usize, what: &'static str) -> Result<(), SceneError> {
        if value == 0 {
            Err(SceneError::InvalidCount { what })
        } else {
            Ok(())
        }
    }

    pub(crate) fn require_range(min: f32, max: f32, what: &'static str) -> Result<(), SceneError> {
        if min.is_finite() && max.is_finite() && min <= max {
            Ok(())
        } else {
            Err(SceneError::InvalidRange { what, min, max })
        }
    }

    pub(crate) fn require_positive(value: f32, what: &'static str) -> Result<(), SceneError> {
        if value.is_finite() && value > 0.0 {
            Ok(())
        } else {
            Err(SceneError::InvalidRange { what, min: value, max: value })
        }
    }
}

impl fmt::Display for SceneError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SceneError::InvalidCount { what } => write!(f, "Invalid {}: must be positive", what),
            SceneError::EmptyPalette { what } => write!(f, "Empty {} palette", what),
            SceneError::InvalidRange { what, min, max } if min == max => {
                write!(f, "Invalid {}: {}", what, min)
            }
            SceneError::InvalidRange { what, min, max } => {
                write!(f, "Invalid {} range: [{}, {}]", what, min, max)
            }
        }
    }
}

impl std::error::Error for SceneError {}

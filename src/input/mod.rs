//! Input handling module
//!
//! Provides keyboard mapping from raw events to semantic actions.

mod input_mapper;

pub use input_mapper::{InputMapper, InputAction};

//! Neonfield input handling
//!
//! This crate turns raw window events into the three interactions the
//! backdrop reacts to: clicks, hover enter/leave over designated regions,
//! and the page scroll offset.

mod pointer;
mod hover;

pub use pointer::{viewport_to_ndc, PointerTracker, DEFAULT_LINE_HEIGHT};
pub use hover::{HoverEvent, HoverRegion, HoverTracker};

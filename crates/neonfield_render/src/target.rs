//! Render target seam
//!
//! The scene host only needs to size a surface and hand it a frame. The GPU
//! implementation lives in the application; tests use headless recorders.

use crate::{FrameGeometry, PerspectiveCamera, RenderError, StartupError};

/// Something a frame can be drawn to
pub trait RenderTarget {
    /// Confirm the target can draw before any scene content is built
    ///
    /// A failure here disables the backdrop for the session.
    fn check_capability(&self) -> Result<(), StartupError> {
        Ok(())
    }

    /// Resize the drawing surface; must tolerate repeated identical sizes
    fn resize(&mut self, width: u32, height: u32);

    /// Current surface size in physical pixels
    fn size(&self) -> (u32, u32);

    /// Draw one frame as seen from `camera`
    fn render(&mut self, frame: &FrameGeometry, camera: &PerspectiveCamera) -> Result<(), RenderError>;
}

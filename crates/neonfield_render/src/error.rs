//! Startup and per-frame rendering errors

use std::fmt;

/// Fatal errors while acquiring a drawing surface
///
/// Any of these means the backdrop is disabled for the session.
#[derive(Debug)]
pub enum StartupError {
    /// The window could not provide a surface
    SurfaceUnavailable(String),
    /// No adapter is compatible with the surface
    NoAdapter,
    /// The adapter refused to create a device
    DeviceRequest(String),
    /// The viewport has a zero dimension
    InvalidViewport { width: u32, height: u32 },
    /// The target reported it cannot draw the scene
    Unsupported(String),
}

impl fmt::Display for StartupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StartupError::SurfaceUnavailable(msg) => write!(f, "Render surface unavailable: {}", msg),
            StartupError::NoAdapter => write!(f, "No compatible GPU adapter"),
            StartupError::DeviceRequest(msg) => write!(f, "Device request failed: {}", msg),
            StartupError::InvalidViewport { width, height } => {
                write!(f, "Invalid viewport: {}x{}", width, height)
            }
            StartupError::Unsupported(msg) => write!(f, "Rendering unsupported: {}", msg),
        }
    }
}

impl std::error::Error for StartupError {}

/// Per-frame surface errors
#[derive(Debug)]
pub enum RenderError {
    /// Surface was lost or outdated (window resized, minimized, etc.)
    SurfaceLost,
    /// GPU out of memory
    OutOfMemory,
    /// Other surface error
    Other(String),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::SurfaceLost => write!(f, "Surface lost"),
            RenderError::OutOfMemory => write!(f, "Out of memory"),
            RenderError::Other(msg) => write!(f, "Render error: {}", msg),
        }
    }
}

impl std::error::Error for RenderError {}

impl From<wgpu::SurfaceError> for RenderError {
    fn from(err: wgpu::SurfaceError) -> Self {
        match err {
            wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated => RenderError::SurfaceLost,
            wgpu::SurfaceError::OutOfMemory => RenderError::OutOfMemory,
            other => RenderError::Other(format!("{:?}", other)),
        }
    }
}

//! Pointer and scroll tracking
//!
//! Tracks the cursor in viewport pixels, converts pixel positions to
//! normalized device coordinates, and accumulates wheel input into a page
//! scroll offset.

use neonfield_math::Vec3;
use winit::event::{ElementState, MouseButton, MouseScrollDelta};

/// Pixels scrolled per wheel line
pub const DEFAULT_LINE_HEIGHT: f32 = 40.0;

/// Tracks cursor position, viewport size and scroll offset
pub struct PointerTracker {
    cursor: Option<(f64, f64)>,
    width: u32,
    height: u32,
    scroll_offset: f32,
    max_scroll: Option<f32>,

    // Configuration
    pub line_height: f32,
}

impl PointerTracker {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            cursor: None,
            width,
            height,
            scroll_offset: 0.0,
            max_scroll: None,
            line_height: DEFAULT_LINE_HEIGHT,
        }
    }

    /// Set pixels per wheel line
    pub fn with_line_height(mut self, line_height: f32) -> Self {
        self.line_height = line_height;
        self
    }

    /// Clamp the scroll offset to `[0, max]`
    pub fn with_max_scroll(mut self, max: f32) -> Self {
        self.max_scroll = Some(max.max(0.0));
        self
    }

    /// Track a new viewport size
    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
    }

    pub fn process_cursor_moved(&mut self, x: f64, y: f64) {
        self.cursor = Some((x, y));
    }

    pub fn process_cursor_left(&mut self) {
        self.cursor = None;
    }

    /// Returns the click position when the primary button is pressed
    pub fn process_mouse_button(&mut self, button: MouseButton, state: ElementState) -> Option<(f64, f64)> {
        if button == MouseButton::Left && state == ElementState::Pressed {
            self.cursor
        } else {
            None
        }
    }

    /// Accumulate a wheel event and return the new scroll offset
    ///
    /// Wheel-down (negative delta) scrolls the page down, increasing the offset.
    pub fn process_scroll(&mut self, delta: MouseScrollDelta) -> f32 {
        let pixels = match delta {
            MouseScrollDelta::LineDelta(_, y) => -y * self.line_height,
            MouseScrollDelta::PixelDelta(pos) => -pos.y as f32,
        };
        self.scroll_by(pixels)
    }

    /// Scroll by a pixel amount and return the new offset
    pub fn scroll_by(&mut self, pixels: f32) -> f32 {
        let mut offset = (self.scroll_offset + pixels).max(0.0);
        if let Some(max) = self.max_scroll {
            offset = offset.min(max);
        }
        self.scroll_offset = offset;
        offset
    }

    #[inline]
    pub fn scroll_offset(&self) -> f32 {
        self.scroll_offset
    }

    #[inline]
    pub fn cursor(&self) -> Option<(f64, f64)> {
        self.cursor
    }

    #[inline]
    pub fn viewport(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Convert viewport pixels to normalized device coordinates at depth 0
    ///
    /// `(0, 0)` maps to the top-left corner `(-1, 1)`.
    pub fn to_ndc(&self, px: f64, py: f64) -> Vec3 {
        viewport_to_ndc(px, py, self.width, self.height)
    }
}

/// Convert viewport pixels to normalized device coordinates at depth 0
///
/// Pixel `y` grows downwards, NDC `y` grows upwards.
pub fn viewport_to_ndc(px: f64, py: f64, width: u32, height: u32) -> Vec3 {
    let w = width.max(1) as f32;
    let h = height.max(1) as f32;
    Vec3::new(
        (px as f32 / w) * 2.0 - 1.0,
        -(py as f32 / h) * 2.0 + 1.0,
        0.0,
    )
}

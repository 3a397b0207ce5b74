//! Input mapping from raw events to semantic actions
//!
//! Maps keyboard input to high-level actions like Exit and ToggleFullscreen.
//! Pointer, wheel and hover input is NOT mapped here - it goes to the
//! PointerTracker and HoverTracker.

use winit::event::ElementState;
use winit::keyboard::KeyCode;
use neonfield_render::LayerMask;

/// Actions triggered by keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    /// Exit application (Escape)
    Exit,
    /// Toggle fullscreen mode (F key)
    ToggleFullscreen,
    /// Show or hide one scene layer (1-4)
    ToggleLayer(LayerMask),
}

/// Maps raw input events to semantic actions
pub struct InputMapper;

impl InputMapper {
    /// Map keyboard input to an action
    ///
    /// Returns `Some(action)` for bound keys, `None` otherwise
    pub fn map_keyboard(key: KeyCode, state: ElementState) -> Option<InputAction> {
        // Only handle key presses, not releases
        if state != ElementState::Pressed {
            return None;
        }

        match key {
            KeyCode::Escape => Some(InputAction::Exit),
            KeyCode::KeyF => Some(InputAction::ToggleFullscreen),
            KeyCode::Digit1 => Some(InputAction::ToggleLayer(LayerMask::FIELD)),
            KeyCode::Digit2 => Some(InputAction::ToggleLayer(LayerMask::BODIES)),
            KeyCode::Digit3 => Some(InputAction::ToggleLayer(LayerMask::LINES)),
            KeyCode::Digit4 => Some(InputAction::ToggleLayer(LayerMask::EFFECTS)),
            _ => None,
        }
    }
}

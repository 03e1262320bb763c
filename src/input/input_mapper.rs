//! Input mapping from raw events to semantic actions
//!
//! Maps keyboard input to high-level playback actions like TogglePlayback,
//! Reset, SpeedUp, etc. The playback state machine itself lives in
//! `hypercycle_core`; this mapper only translates winit events.

use winit::event::ElementState;
use winit::keyboard::KeyCode;

/// Actions triggered by keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    /// Toggle play/pause (Space)
    TogglePlayback,
    /// Restart the cycle (R key)
    Reset,
    /// Increase the speed multiplier (ArrowUp)
    SpeedUp,
    /// Decrease the speed multiplier (ArrowDown)
    SpeedDown,
    /// Manually advance one dimension (ArrowRight)
    StepForward,
    /// Manually go back one dimension (ArrowLeft)
    StepBack,
    /// Toggle fullscreen mode (F key)
    ToggleFullscreen,
    /// Exit application (Escape)
    Exit,
}

/// Maps raw input events to semantic actions
pub struct InputMapper;

impl InputMapper {
    /// Map keyboard input to an action
    ///
    /// Returns `Some(action)` for mapped keys on press, `None` otherwise
    pub fn map_keyboard(key: KeyCode, state: ElementState) -> Option<InputAction> {
        // Only handle key presses, not releases
        if state != ElementState::Pressed {
            return None;
        }

        match key {
            KeyCode::Space => Some(InputAction::TogglePlayback),
            KeyCode::KeyR => Some(InputAction::Reset),
            KeyCode::ArrowUp => Some(InputAction::SpeedUp),
            KeyCode::ArrowDown => Some(InputAction::SpeedDown),
            KeyCode::ArrowRight => Some(InputAction::StepForward),
            KeyCode::ArrowLeft => Some(InputAction::StepBack),
            KeyCode::KeyF => Some(InputAction::ToggleFullscreen),
            KeyCode::Escape => Some(InputAction::Exit),
            _ => None,
        }
    }
}

//=========================================================================
// Input Processor
//=========================================================================
//
// Converts Winit keyboard events into engine InputEvents.
//
// Architecture:
//   Winit KeyEvent → InputProcessor → InputEvent (engine type) → InputBuffer
//
// Keys without an engine counterpart (function keys, letters, numpad)
// are filtered (returns None). OS auto-repeat is passed through as
// ordinary presses.
//
//=========================================================================

//=== External Dependencies ===============================================

use winit::{
    event::{ElementState, KeyEvent},
    keyboard::{KeyCode as WinitKeyCode, PhysicalKey},
};

//=== Internal Dependencies ===============================================

use crate::core::input::event::{InputEvent, KeyCode};

//=== InputProcessor ======================================================

/// Converts Winit key events to engine InputEvents.
#[derive(Debug, Default)]
pub(crate) struct InputProcessor;

impl InputProcessor {
    pub(crate) fn new() -> Self {
        Self
    }

    /// Converts a Winit KeyEvent to an InputEvent (filters unmapped keys).
    pub(crate) fn process_key_event(&self, key_event: &KeyEvent) -> Option<InputEvent> {
        let key = match key_event.physical_key {
            PhysicalKey::Code(code) => KeyCode::from(code),
            _ => return None,
        };

        Self::translate(key, key_event.state)
    }

    fn translate(key: KeyCode, state: ElementState) -> Option<InputEvent> {
        if key == KeyCode::Unidentified {
            return None;
        }

        Some(match state {
            ElementState::Pressed => InputEvent::KeyDown(key),
            ElementState::Released => InputEvent::KeyUp(key),
        })
    }
}

//=========================================================================
// Winit Conversions
//=========================================================================

/// Converts Winit physical key codes to engine key codes.
impl From<WinitKeyCode> for KeyCode {
    fn from(code: WinitKeyCode) -> Self {
        use WinitKeyCode::*;
        match code {
            //--- Arrows -------------------------------------------------------

            ArrowUp => KeyCode::ArrowUp,
            ArrowDown => KeyCode::ArrowDown,
            ArrowLeft => KeyCode::ArrowLeft,
            ArrowRight => KeyCode::ArrowRight,

            //--- Navigation ---------------------------------------------------

            Home => KeyCode::Home,
            End => KeyCode::End,
            PageUp => KeyCode::PageUp,
            PageDown => KeyCode::PageDown,

            //--- Special ------------------------------------------------------

            Space => KeyCode::Space,
            Enter => KeyCode::Enter,
            Escape => KeyCode::Escape,
            Tab => KeyCode::Tab,
            Backspace => KeyCode::Backspace,
            Delete => KeyCode::Delete,

            _ => KeyCode::Unidentified,
        }
    }
}

//=========================================================================
// Tests
//=========================================================================

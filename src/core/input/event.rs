//=========================================================================
// Input Event Types
//
// Engine-side representation of low-level keyboard events.
//
// This module abstracts platform-specific input (Winit) into a small,
// portable format consumed by the input system on the core thread.
//
// Event Flow:
// ```text
// Platform Layer (Winit)
//         ↓
//    InputEvent (this module)
//         ↓
//    KeyBindings (key → Command)
//         ↓
//    Simulation::apply
// ```
//
//=========================================================================

//=== KeyCode =============================================================

/// Physical keyboard key identifier.
///
/// Represents the physical key location, not the character produced.
/// Only keys the rig can be driven with (plus a few common neighbours
/// useful for rebinding) are listed; everything else arrives as
/// `Unidentified` and is dropped by the platform layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    //--- Arrow Keys -------------------------------------------------------
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    ArrowUp,

    //--- Navigation Keys --------------------------------------------------
    Home,
    End,
    PageUp,
    PageDown,

    //--- Special Keys -----------------------------------------------------
    Space,
    Enter,
    Escape,
    Tab,
    Backspace,
    Delete,

    /// Fallback for keys not explicitly mapped by the input layer.
    Unidentified,
}

//=== InputEvent ==========================================================

/// Keyboard event delivered by the platform layer.
///
/// Auto-repeat presses arrive as additional `KeyDown` events, so holding
/// a key keeps applying its command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputEvent {
    /// Key pressed (or auto-repeated).
    KeyDown(KeyCode),

    /// Key released.
    KeyUp(KeyCode),

    /// Unrecognized or unsupported event; ignored.
    Unidentified,
}

impl InputEvent {
    /// Returns the key of a press event.
    pub fn pressed_key(&self) -> Option<KeyCode> {
        match self {
            Self::KeyDown(key) => Some(*key),
            _ => None,
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn pressed_key_only_for_key_down() {
        assert_eq!(InputEvent::KeyDown(KeyCode::Home).pressed_key(), Some(KeyCode::Home));
        assert_eq!(InputEvent::KeyUp(KeyCode::Home).pressed_key(), None);
        assert_eq!(InputEvent::Unidentified.pressed_key(), None);
    }

    #[test]
    fn key_down_and_key_up_differ() {
        assert_ne!(InputEvent::KeyDown(KeyCode::Space), InputEvent::KeyUp(KeyCode::Space));
    }

    #[test]
    fn events_hash_by_payload() {
        let mut set = HashSet::new();
        set.insert(InputEvent::KeyDown(KeyCode::ArrowUp));
        set.insert(InputEvent::KeyDown(KeyCode::ArrowUp));
        set.insert(InputEvent::KeyDown(KeyCode::ArrowDown));

        assert_eq!(set.len(), 2);
    }
}

//=========================================================================
// Key Bindings
//=========================================================================
//
// Maps key presses to rig commands.
//
// Architecture:
//   KeyDown(key) → HashMap → Command
//
// Key releases never produce commands. Unbound keys map to nothing.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashMap;

//=== Internal Dependencies ===============================================

use super::{
    command::Command,
    event::{InputEvent, KeyCode},
};
use crate::core::rig::MotorId;

//=== KeyBindings =========================================================

/// Key → command lookup table.
///
/// [`KeyBindings::default`] installs the standard layout:
///
/// | Key         | Command                  |
/// |-------------|--------------------------|
/// | Up / Down   | motor A speed ± step     |
/// | Right / Left| motor B speed ± step     |
/// | Space       | reset                    |
/// | Home        | stop / resume            |
/// | Escape      | quit                     |
#[derive(Debug, Clone)]
pub struct KeyBindings {
    bindings: HashMap<KeyCode, Command>,
}

impl KeyBindings {
    /// Creates an empty table.
    pub fn empty() -> Self {
        Self {
            bindings: HashMap::new(),
        }
    }

    //--- Binding API ------------------------------------------------------

    /// Binds `key` to `command`, returning the command it replaced.
    pub fn bind(&mut self, key: KeyCode, command: Command) -> Option<Command> {
        self.bindings.insert(key, command)
    }

    /// Removes the binding for `key`, returning it.
    pub fn unbind(&mut self, key: KeyCode) -> Option<Command> {
        self.bindings.remove(&key)
    }

    /// Removes every binding.
    pub fn clear(&mut self) {
        self.bindings.clear();
    }

    /// Command bound to `key`, if any.
    pub fn get(&self, key: KeyCode) -> Option<Command> {
        self.bindings.get(&key).copied()
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    //--- Event Mapping ----------------------------------------------------

    /// Maps an input event to a command (key presses only).
    pub fn map_event(&self, event: &InputEvent) -> Option<Command> {
        event.pressed_key().and_then(|key| self.get(key))
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        let mut bindings = Self::empty();

        bindings.bind(KeyCode::ArrowUp, Command::speed_up(MotorId::A));
        bindings.bind(KeyCode::ArrowDown, Command::speed_down(MotorId::A));
        bindings.bind(KeyCode::ArrowRight, Command::speed_up(MotorId::B));
        bindings.bind(KeyCode::ArrowLeft, Command::speed_down(MotorId::B));
        bindings.bind(KeyCode::Space, Command::Reset);
        bindings.bind(KeyCode::Home, Command::TogglePause);
        bindings.bind(KeyCode::Escape, Command::Quit);

        bindings
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn key_down(key: KeyCode) -> InputEvent {
        InputEvent::KeyDown(key)
    }

    //=====================================================================
    // Default Layout
    //=====================================================================

    #[test]
    fn default_layout_arrows() {
        let bindings = KeyBindings::default();

        assert_eq!(bindings.map_event(&key_down(KeyCode::ArrowUp)), Some(Command::speed_up(MotorId::A)));
        assert_eq!(bindings.map_event(&key_down(KeyCode::ArrowDown)), Some(Command::speed_down(MotorId::A)));
        assert_eq!(bindings.map_event(&key_down(KeyCode::ArrowRight)), Some(Command::speed_up(MotorId::B)));
        assert_eq!(bindings.map_event(&key_down(KeyCode::ArrowLeft)), Some(Command::speed_down(MotorId::B)));
    }

    #[test]
    fn default_layout_specials() {
        let bindings = KeyBindings::default();

        assert_eq!(bindings.map_event(&key_down(KeyCode::Space)), Some(Command::Reset));
        assert_eq!(bindings.map_event(&key_down(KeyCode::Home)), Some(Command::TogglePause));
        assert_eq!(bindings.map_event(&key_down(KeyCode::Escape)), Some(Command::Quit));
        assert_eq!(bindings.len(), 7);
    }

    #[test]
    fn key_up_never_maps() {
        let bindings = KeyBindings::default();
        assert_eq!(bindings.map_event(&InputEvent::KeyUp(KeyCode::Escape)), None);
    }

    #[test]
    fn unbound_key_maps_to_none() {
        let bindings = KeyBindings::default();
        assert_eq!(bindings.map_event(&key_down(KeyCode::Tab)), None);
        assert_eq!(bindings.map_event(&InputEvent::Unidentified), None);
    }

    //=====================================================================
    // Rebinding
    //=====================================================================

    #[test]
    fn bind_replaces_previous_command() {
        let mut bindings = KeyBindings::default();

        let previous = bindings.bind(KeyCode::Space, Command::TogglePause);

        assert_eq!(previous, Some(Command::Reset));
        assert_eq!(bindings.get(KeyCode::Space), Some(Command::TogglePause));
    }

    #[test]
    fn unbind_removes_only_that_key() {
        let mut bindings = KeyBindings::default();

        assert_eq!(bindings.unbind(KeyCode::Escape), Some(Command::Quit));
        assert_eq!(bindings.get(KeyCode::Escape), None);
        assert_eq!(bindings.get(KeyCode::Space), Some(Command::Reset));
        assert_eq!(bindings.unbind(KeyCode::Escape), None);
    }

    #[test]
    fn clear_empties_table() {
        let mut bindings = KeyBindings::default();
        bindings.clear();

        assert!(bindings.is_empty());
        assert_eq!(bindings.map_event(&key_down(KeyCode::ArrowUp)), None);
    }

    #[test]
    fn empty_table_can_be_filled() {
        let mut bindings = KeyBindings::empty();
        bindings.bind(KeyCode::Enter, Command::Quit);

        assert_eq!(bindings.map_event(&key_down(KeyCode::Enter)), Some(Command::Quit));
    }
}

//=========================================================================
// Input System
//
// Turns per-frame batches of keyboard events into rig commands.
//
// Responsibilities:
// - Walk input batches in arrival order
// - Resolve key presses through `KeyBindings`
// - Expose this tick's commands and whether quit was requested
//
// Notes:
// This system is owned and updated by the CoreSystemsOrchestrator.
// Commands are rebuilt every tick; nothing carries over between ticks.
//
//=========================================================================

//=== Submodules ==========================================================

pub mod command;
pub mod event;
mod key_bindings;

//=== Public API ==========================================================

pub use command::Command;
pub use event::{InputEvent, KeyCode};
pub use key_bindings::KeyBindings;

//=== External Crates =====================================================

use log::{debug, trace};

//=== InputSystem =========================================================

/// Resolves raw input into this tick's command list.
#[derive(Debug, Default)]
pub struct InputSystem {
    bindings: KeyBindings,
    commands: Vec<Command>,
}

impl InputSystem {
    //--- Construction -----------------------------------------------------

    /// Creates an input system with the standard key layout.
    pub fn new() -> Self {
        Self::with_bindings(KeyBindings::default())
    }

    pub fn with_bindings(bindings: KeyBindings) -> Self {
        Self {
            bindings,
            commands: Vec::with_capacity(16),
        }
    }

    //--- Binding Access ---------------------------------------------------

    pub fn bindings(&self) -> &KeyBindings {
        &self.bindings
    }

    /// Mutable access for rebinding keys before the engine starts.
    pub fn bindings_mut(&mut self) -> &mut KeyBindings {
        &mut self.bindings
    }

    //--- process_frame() --------------------------------------------------
    //
    // Replaces the previous tick's commands with the ones resolved from
    // `batches`. Batches are walked in order, events within a batch in
    // order, so commands keep the order the keys were pressed in.
    //
    pub fn process_frame(&mut self, batches: &[Vec<InputEvent>]) {
        self.commands.clear();

        for event in batches.iter().flatten() {
            match self.bindings.map_event(event) {
                Some(command) => {
                    debug!(target: "core::input", "{:?} -> {:?}", event, command);
                    self.commands.push(command);
                }
                None => trace!(target: "core::input", "No command for {:?}", event),
            }
        }
    }

    //--- Query Methods ----------------------------------------------------

    /// Commands resolved during the last `process_frame`.
    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    /// Returns `true` if any command this tick asks to quit.
    pub fn quit_requested(&self) -> bool {
        self.commands.iter().any(Command::is_quit)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::rig::MotorId;

    fn down(key: KeyCode) -> InputEvent {
        InputEvent::KeyDown(key)
    }

    fn up(key: KeyCode) -> InputEvent {
        InputEvent::KeyUp(key)
    }

    #[test]
    fn empty_frame_produces_no_commands() {
        let mut system = InputSystem::new();
        system.process_frame(&[]);

        assert!(system.commands().is_empty());
        assert!(!system.quit_requested());
    }

    #[test]
    fn commands_keep_arrival_order_across_batches() {
        let mut system = InputSystem::new();

        system.process_frame(&[
            vec![down(KeyCode::ArrowUp), up(KeyCode::ArrowUp), down(KeyCode::Home)],
            vec![down(KeyCode::ArrowLeft)],
        ]);

        assert_eq!(
            system.commands(),
            &[
                Command::speed_up(MotorId::A),
                Command::TogglePause,
                Command::speed_down(MotorId::B),
            ]
        );
    }

    #[test]
    fn repeated_presses_each_produce_a_command() {
        let mut system = InputSystem::new();

        system.process_frame(&[vec![down(KeyCode::ArrowRight); 3]]);

        assert_eq!(system.commands().len(), 3);
    }

    #[test]
    fn commands_reset_every_frame() {
        let mut system = InputSystem::new();

        system.process_frame(&[vec![down(KeyCode::Space)]]);
        assert_eq!(system.commands(), &[Command::Reset]);

        system.process_frame(&[]);
        assert!(system.commands().is_empty());
    }

    #[test]
    fn escape_requests_quit() {
        let mut system = InputSystem::new();

        system.process_frame(&[vec![down(KeyCode::ArrowUp), down(KeyCode::Escape)]]);

        assert!(system.quit_requested());
    }

    #[test]
    fn rebinding_takes_effect_next_frame() {
        let mut system = InputSystem::new();
        system.bindings_mut().bind(KeyCode::Enter, Command::Reset);
        system.bindings_mut().unbind(KeyCode::Space);

        system.process_frame(&[vec![down(KeyCode::Space), down(KeyCode::Enter)]]);

        assert_eq!(system.commands(), &[Command::Reset]);
    }
}

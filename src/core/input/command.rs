//=========================================================================
// Commands
//=========================================================================
//
// Player intents produced by the input mapper and consumed by the
// simulation reducer.
//
// Commands are plain values, so a recorded sequence can be replayed
// against a fresh simulation without any window or keyboard.
//
//=========================================================================

use crate::core::rig::params::SPEED_STEP;
use crate::core::rig::MotorId;

//=== Command =============================================================

/// A single mutation request against the rig.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    /// Add `delta` (degrees per frame) to a motor's speed.
    AdjustSpeed { motor: MotorId, delta: f64 },

    /// Restore default speeds and full charge on both motors.
    Reset,

    /// Stop both motors, or resume them from the saved speeds.
    TogglePause,

    /// End the run loop.
    Quit,
}

impl Command {
    /// One speed step forward for `motor`.
    pub fn speed_up(motor: MotorId) -> Self {
        Self::AdjustSpeed { motor, delta: SPEED_STEP }
    }

    /// One speed step backward for `motor`.
    pub fn speed_down(motor: MotorId) -> Self {
        Self::AdjustSpeed { motor, delta: -SPEED_STEP }
    }

    pub fn is_quit(&self) -> bool {
        matches!(self, Self::Quit)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

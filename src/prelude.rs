//=========================================================================
// Prelude
//=========================================================================
//
// Convenience module that re-exports commonly used types.
//
// Usage:
//   use supermotor::prelude::*;
//
//=========================================================================

//=== Public API ==========================================================

// Runtime
pub use crate::engine::{Engine, EngineBuilder, EngineError};
pub use crate::PlatformError;

// Core systems
pub use crate::core::CoreSystems;

// Input
pub use crate::core::input::{Command, InputEvent, InputSystem, KeyBindings, KeyCode};

// Rig and simulation
pub use crate::core::rig::{Belt, BeltSegment, Motor, MotorId, Point, Wheel};
pub use crate::core::simulation::{RigSnapshot, Simulation};

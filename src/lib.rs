//=========================================================================
// SuperMotor: Library Root
//
// A two-motor belt drive turning a single wheel, simulated at a fixed
// tick rate and drawn in a desktop window.
//
// Responsibilities:
// - Expose the runtime facade (`Engine`, `EngineBuilder`)
// - Expose the simulation model (`core`) so it can be driven and tested
//   without a window
// - Keep the Winit/pixels integration (`platform`) private
//
// Typical usage:
// ```no_run
// use supermotor::EngineBuilder;
//
// fn main() -> Result<(), supermotor::EngineError> {
//     EngineBuilder::new().build().run()
// }
// ```
//
//=========================================================================

//--- Public Modules ------------------------------------------------------
//
// `core` holds the rig model, the simulation controller and the input
// mapping. None of it depends on the windowing stack.
//
pub mod core;
pub mod prelude;

//--- Internal Modules ----------------------------------------------------
//
// `platform` owns the OS window, keyboard polling and drawing.
// `engine` wires the platform and the core thread together.
//
mod engine;
mod platform;

//--- Public Exports ------------------------------------------------------

pub use crate::core::platform_bridge::PlatformError;
pub use engine::{Engine, EngineBuilder, EngineError};

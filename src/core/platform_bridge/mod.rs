//=========================================================================
// Platform Bridge
//=========================================================================
//
// Bridges the platform layer (Winit window + renderer) with core systems.
//
// This module defines the contract between the platform implementation
// and the simulation, so the presentation side can change without
// touching core code.
//
// Components:
// - `interface`: Event types and error definitions (the contract)
// - `event_collector`: Core-side event collection and buffering
//
//=========================================================================

//=== Module Declarations =================================================

pub(crate) mod event_collector;
pub(crate) mod interface;

//=== Internal API ========================================================

pub(crate) use event_collector::{EventCollector, TickControl};
pub use interface::PlatformError;
pub(crate) use interface::PlatformEvent;

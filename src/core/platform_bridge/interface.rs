//=========================================================================
// Platform Bridge Interface
//=========================================================================
//
// Platform-to-core interface types (events and errors).
//
// Defines the contract for communication between platform and core
// threads. Nothing here depends on Winit or the renderer; platform code
// converts its own error types into `PlatformError` at the boundary.
//
//=========================================================================

//=== External Dependencies ===============================================

use thiserror::Error;

//=== Internal Dependencies ===============================================

use crate::core::input::event::InputEvent;

//=== PlatformEvent =======================================================

/// Events sent from platform to core over the input channel.
#[derive(Debug, Clone)]
pub(crate) enum PlatformEvent {
    /// Key events gathered during one platform frame, in arrival order.
    Inputs(Vec<InputEvent>),

    /// Window close requested.
    WindowClosed,
}

//=== PlatformError =======================================================

/// Fatal presentation-layer failures.
///
/// Any of these ends the run; the binary reports them and exits with a
/// failure status.
#[derive(Debug, Error)]
pub enum PlatformError {
    /// Event loop creation failed (OS-level issue).
    #[error("event loop creation failed: {0}")]
    EventLoopCreation(String),

    /// Event loop execution error.
    #[error("event loop error: {0}")]
    EventLoopExecution(String),

    /// The OS refused to open the window.
    #[error("window creation failed: {0}")]
    WindowCreation(String),

    /// The drawing surface for the window could not be set up.
    #[error("drawing surface creation failed: {0}")]
    SurfaceCreation(String),

    /// Presenting or resizing a frame failed.
    #[error("render failed: {0}")]
    Render(String),
}

//=========================================================================
// Unit Tests
//=========================================================================

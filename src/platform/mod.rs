//=========================================================================
// Platform Subsystem
//
// Bridges Winit (OS-level events) with the core thread via channels.
//
// Architecture:
// ```text
//  Main Thread:                     Logic Thread:
//  ┌──────────────────────────┐    ┌──────────────────┐
//  │  Winit Event Loop        │    │  Core Systems    │
//  │   ↓                      │    │                  │
//  │  InputProcessor          │    │  InputSystem     │
//  │   ↓                      │    │  ↓               │
//  │  InputBuffer             │    │  KeyBindings     │
//  │   ↓                      │    │  ↓               │
//  │  RedrawRequested         │    │  Simulation      │
//  │   ├─ flush ──────────────┼───►│                  │
//  │   │          PlatformEvent│    │                  │
//  │   └─ draw  ◄─────────────┼────┤  RigSnapshot     │
//  └──────────────────────────┘    └──────────────────┘
//
//  Frame Boundary: RedrawRequested
//    → All buffered input sent as one batch
//    → Newest snapshot drawn
//    → Empty buffers NOT sent
// ```
//
// Key Design Decisions:
// - **Never block the event loop**: both channels use `try_*`; a full
//   input channel drops the batch, stale snapshots are skipped
// - **Core exit closes the window**: when the core thread ends (Escape),
//   its snapshot sender drops and the platform leaves the event loop
// - **Main thread requirement**: Winit mandates main thread on macOS/iOS,
//   so this runs on the thread that called `Engine::run()`
//
//=========================================================================

//=== Submodules ==========================================================

mod input_buffer;
mod input_processor;
mod render;

//=== Standard Library Imports ============================================

use std::sync::Arc;

//=== External Crates =====================================================

use crossbeam_channel::{Receiver, Sender, TryRecvError, TrySendError};
use log::*;
use winit::{
    application::ApplicationHandler,
    dpi::LogicalSize,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, EventLoop},
    window::{Window, WindowAttributes, WindowId},
};

//=== Internal Imports ====================================================

use crate::core::platform_bridge::{PlatformError, PlatformEvent};
use crate::core::rig::params::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::core::simulation::RigSnapshot;
use input_buffer::InputBuffer;
use input_processor::InputProcessor;
use render::Renderer;

//=== SnapshotFeed ========================================================

/// Outcome of pulling snapshots from the core thread.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SnapshotFeed {
    Live,
    CoreStopped,
}

//=== Platform ============================================================

/// Window manager, input aggregator and presenter.
///
/// Runs on the main thread and is not Send. Communication with the core
/// thread happens exclusively through the two channels.
///
/// # Fields
///
/// - `window`/`renderer`: Created lazily in `resumed()`
/// - `buffer`: Accumulates key events until `RedrawRequested`
/// - `latest`: Last snapshot received; redrawn when nothing newer arrived
/// - `fatal`: First unrecoverable error, returned from `run()`
pub(crate) struct Platform {
    window: Option<Arc<Window>>,
    renderer: Option<Renderer>,
    buffer: InputBuffer,
    event_sender: Sender<PlatformEvent>,
    snapshots: Receiver<RigSnapshot>,
    latest: RigSnapshot,
    input_processor: InputProcessor,
    fatal: Option<PlatformError>,
}

impl Platform {
    //--- Construction -----------------------------------------------------

    /// Does not create the window yet; that happens in `resumed()`.
    pub(crate) fn new(
        event_sender: Sender<PlatformEvent>,
        snapshots: Receiver<RigSnapshot>,
        initial: RigSnapshot,
    ) -> Self {
        info!(target: "platform", "Platform subsystem initialized");
        Self {
            window: None,
            renderer: None,
            buffer: InputBuffer::new(),
            event_sender,
            snapshots,
            latest: initial,
            input_processor: InputProcessor::new(),
            fatal: None,
        }
    }

    //--- Execution --------------------------------------------------------

    /// Runs the Winit event loop until the window closes or the core stops.
    ///
    /// # Errors
    ///
    /// Returns [`PlatformError`] if the event loop cannot be created or
    /// fails, or if window/surface setup or presenting failed while running.
    pub(crate) fn run(mut self) -> Result<(), PlatformError> {
        debug!(target: "platform", "Starting Winit event loop");

        let event_loop = EventLoop::new()
            .map_err(|e| PlatformError::EventLoopCreation(e.to_string()))?;

        event_loop
            .run_app(&mut self)
            .map_err(|e| PlatformError::EventLoopExecution(e.to_string()))?;

        match self.fatal.take() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }

    //--- Internal Helpers -------------------------------------------------

    /// Sends this frame's key events to the core thread as one batch.
    ///
    /// Never blocks: a full channel drops the batch with a warning, and a
    /// disconnected channel is left to `pull_snapshots` to notice.
    fn flush_input_buffer(&mut self) {
        let Some(events) = self.buffer.drain() else {
            return;
        };
        let count = events.len();

        trace!(target: "platform::input", "Flushing {} key events", count);

        match self.event_sender.try_send(PlatformEvent::Inputs(events)) {
            Ok(()) => {}
            Err(TrySendError::Full(_)) => {
                warn!(target: "platform::input", "Input channel full, dropping {} events", count);
            }
            Err(TrySendError::Disconnected(_)) => {
                debug!(target: "platform::input", "Core gone, dropping {} events", count);
            }
        }
    }

    /// Keeps the newest snapshot published since the last frame.
    fn pull_snapshots(&mut self) -> SnapshotFeed {
        loop {
            match self.snapshots.try_recv() {
                Ok(snapshot) => self.latest = snapshot,
                Err(TryRecvError::Empty) => return SnapshotFeed::Live,
                Err(TryRecvError::Disconnected) => return SnapshotFeed::CoreStopped,
            }
        }
    }

    /// Records the first fatal error and leaves the event loop.
    fn fail(&mut self, event_loop: &ActiveEventLoop, error: PlatformError) {
        error!(target: "platform", "{}", error);
        let _ = self.event_sender.try_send(PlatformEvent::WindowClosed);
        if self.fatal.is_none() {
            self.fatal = Some(error);
        }
        event_loop.exit();
    }

    fn create_window(event_loop: &ActiveEventLoop) -> Result<(Arc<Window>, Renderer), PlatformError> {
        let attrs = WindowAttributes::default()
            .with_title("SuperMotor")
            .with_inner_size(LogicalSize::new(SCREEN_WIDTH, SCREEN_HEIGHT));

        let window = event_loop
            .create_window(attrs)
            .map(Arc::new)
            .map_err(|e| PlatformError::WindowCreation(e.to_string()))?;

        let renderer = Renderer::new(Arc::clone(&window))?;
        Ok((window, renderer))
    }

    //--- Test Accessors ---------------------------------------------------

    #[cfg(test)]
    pub(crate) fn window(&self) -> Option<&Arc<Window>> {
        self.window.as_ref()
    }
}

//=== Winit Integration ===================================================

impl ApplicationHandler for Platform {
    /// Creates the window and drawing surface on first activation.
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            debug!(target: "platform", "Window already exists (mobile resume?)");
            return;
        }

        match Self::create_window(event_loop) {
            Ok((window, renderer)) => {
                info!(
                    target: "platform",
                    "Window created: {}x{} @ {}x DPI",
                    window.inner_size().width,
                    window.inner_size().height,
                    window.scale_factor()
                );
                window.request_redraw();
                self.window = Some(window);
                self.renderer = Some(renderer);
            }
            Err(e) => self.fail(event_loop, e),
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _window_id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                info!(target: "platform", "Window close requested");
                let _ = self.event_sender.try_send(PlatformEvent::WindowClosed);
                event_loop.exit();
            }

            WindowEvent::KeyboardInput { event: key_event, .. } => {
                if let Some(event) = self.input_processor.process_key_event(&key_event) {
                    self.buffer.push(event);
                } else {
                    trace!(target: "platform::input", "Unmapped key ignored");
                }
            }

            WindowEvent::Resized(size) => {
                if let Some(renderer) = self.renderer.as_mut() {
                    if let Err(e) = renderer.resize(size.width, size.height) {
                        self.fail(event_loop, e);
                    }
                }
            }

            WindowEvent::RedrawRequested => {
                // Frame boundary: flush input, then show the newest state
                self.flush_input_buffer();

                if self.pull_snapshots() == SnapshotFeed::CoreStopped {
                    info!(target: "platform", "Core stopped, closing window");
                    event_loop.exit();
                    return;
                }

                if let Some(renderer) = self.renderer.as_mut() {
                    if let Err(e) = renderer.draw(&self.latest) {
                        self.fail(event_loop, e);
                        return;
                    }
                }

                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }

            _ => {}
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::input::{InputEvent, KeyCode};
    use crate::core::simulation::Simulation;
    use crossbeam_channel::{bounded, unbounded};

    fn platform() -> (Platform, Receiver<PlatformEvent>, Sender<RigSnapshot>) {
        let (tx, rx) = unbounded();
        let (snap_tx, snap_rx) = unbounded();
        let platform = Platform::new(tx, snap_rx, Simulation::new().snapshot());
        (platform, rx, snap_tx)
    }

    //=====================================================================
    // Input Flush Tests
    //=====================================================================

    #[test]
    fn platform_creation() {
        let (platform, _rx, _snap_tx) = platform();
        assert!(platform.window().is_none(), "Window should be created lazily");
        assert_eq!(platform.latest.frame(), 0);
    }

    #[test]
    fn flush_empty_buffer_is_noop() {
        let (mut platform, rx, _snap_tx) = platform();

        platform.flush_input_buffer();

        assert!(rx.try_recv().is_err(), "No events should be sent for empty buffer");
    }

    #[test]
    fn flush_sends_buffered_events_in_order() {
        let (mut platform, rx, _snap_tx) = platform();

        platform.buffer.push(InputEvent::KeyDown(KeyCode::ArrowUp));
        platform.buffer.push(InputEvent::KeyDown(KeyCode::ArrowUp));
        platform.buffer.push(InputEvent::KeyDown(KeyCode::Space));

        platform.flush_input_buffer();

        match rx.try_recv() {
            Ok(PlatformEvent::Inputs(events)) => assert_eq!(
                events,
                vec![
                    InputEvent::KeyDown(KeyCode::ArrowUp),
                    InputEvent::KeyDown(KeyCode::ArrowUp),
                    InputEvent::KeyDown(KeyCode::Space),
                ]
            ),
            other => panic!("Expected Inputs event, got {:?}", other),
        }
    }

    #[test]
    fn flush_drops_batch_when_channel_full() {
        let (tx, rx) = bounded(1);
        let (_snap_tx, snap_rx) = unbounded();
        let mut platform = Platform::new(tx, snap_rx, Simulation::new().snapshot());

        platform.buffer.push(InputEvent::KeyDown(KeyCode::Home));
        platform.flush_input_buffer();
        platform.buffer.push(InputEvent::KeyDown(KeyCode::Space));
        platform.flush_input_buffer();

        assert!(matches!(rx.try_recv(), Ok(PlatformEvent::Inputs(_))));
        assert!(rx.try_recv().is_err());
        assert!(platform.buffer.is_empty());
    }

    #[test]
    fn flush_handles_disconnected_channel() {
        let (mut platform, rx, _snap_tx) = platform();
        platform.buffer.push(InputEvent::KeyDown(KeyCode::Space));

        drop(rx);

        platform.flush_input_buffer();
        assert!(platform.buffer.is_empty());
    }

    //=====================================================================
    // Snapshot Tests
    //=====================================================================

    #[test]
    fn pull_keeps_newest_snapshot() {
        let (mut platform, _rx, snap_tx) = platform();
        let mut sim = Simulation::new();

        for _ in 0..3 {
            sim.step();
            snap_tx.send(sim.snapshot()).unwrap();
        }

        assert_eq!(platform.pull_snapshots(), SnapshotFeed::Live);
        assert_eq!(platform.latest.frame(), 3);
    }

    #[test]
    fn pull_without_news_keeps_last_snapshot() {
        let (mut platform, _rx, _snap_tx) = platform();

        assert_eq!(platform.pull_snapshots(), SnapshotFeed::Live);
        assert_eq!(platform.latest.frame(), 0);
    }

    #[test]
    fn pull_reports_core_stopped_after_draining() {
        let (mut platform, _rx, snap_tx) = platform();
        let mut sim = Simulation::new();
        sim.step();
        snap_tx.send(sim.snapshot()).unwrap();

        drop(snap_tx);

        assert_eq!(platform.pull_snapshots(), SnapshotFeed::CoreStopped);
        assert_eq!(platform.latest.frame(), 1);
    }
}

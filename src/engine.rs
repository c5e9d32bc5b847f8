//=========================================================================
// SuperMotor Engine
//
// Main entry point and coordinator for the simulation runtime.
//
// Architecture:
// ```text
//     EngineBuilder  ──build()──>  Engine  ──run()──>  [Runtime]
//         │                          │
//         ├─ with_tps()              ├─ init() (optional)
//         └─ with_channel_capacity() └─ spawns core thread
//                                       runs platform
//                                       blocks until exit
// ```
//
//=========================================================================

//=== External Dependencies ===============================================

use crossbeam_channel::{bounded, Receiver, Sender};
use log::{error, info};
use thiserror::Error;

//=== Internal Dependencies ===============================================

use crate::core::platform_bridge::{PlatformError, PlatformEvent};
use crate::core::simulation::RigSnapshot;
use crate::core::{CoreSystems, CoreSystemsOrchestrator};
use crate::platform::Platform;

//=== EngineError =========================================================

/// Reasons a run ended unsuccessfully.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error(transparent)]
    Platform(#[from] PlatformError),

    #[error("core thread panicked")]
    CoreThreadPanicked,
}

//=== EngineBuilder =======================================================

/// Builder for configuring and constructing an [`Engine`].
///
/// # Default Values
///
/// - **TPS**: 60.0 (simulation frames per second)
/// - **Channel capacity**: 128 messages per direction
///
/// # Examples
///
/// ```no_run
/// use supermotor::EngineBuilder;
///
/// EngineBuilder::new()
///     .with_tps(120.0)
///     .with_channel_capacity(256)
///     .build()
///     .run()
///     .expect("simulation failed");
/// ```
pub struct EngineBuilder {
    tps: f64,
    channel_capacity: usize,
}

impl EngineBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            tps: 60.0,
            channel_capacity: 128,
        }
    }

    /// Sets how many simulation frames run per second.
    ///
    /// Every motor speed is measured in degrees per frame, so this also
    /// scales how fast the rig visibly turns.
    ///
    /// # Panics
    ///
    /// Panics if `tps <= 0.0`.
    pub fn with_tps(mut self, tps: f64) -> Self {
        assert!(tps > 0.0, "TPS must be positive, got {}", tps);
        self.tps = tps;
        self
    }

    /// Sets the capacity of both the input and the snapshot channel.
    ///
    /// # Panics
    ///
    /// Panics if `capacity == 0`.
    pub fn with_channel_capacity(mut self, capacity: usize) -> Self {
        assert!(capacity > 0, "Channel capacity must be positive");
        self.channel_capacity = capacity;
        self
    }

    pub fn build(self) -> Engine {
        info!("Building engine (TPS: {}, channel: {})", self.tps, self.channel_capacity);

        Engine {
            orchestrator: CoreSystemsOrchestrator::new(),
            tps: self.tps,
            channel_capacity: self.channel_capacity,
        }
    }
}

impl Default for EngineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

//=== Engine ==============================================================

/// SuperMotor runtime.
///
/// ```text
/// Engine (Main Thread)
///   ├─► CoreSystemsOrchestrator (Logic Thread @ TPS)
///   │     └─► InputSystem → Simulation
///   │
///   └─► Platform (Event Loop)
///         └─► Window, Input Polling, Renderer
///
/// Communication: PlatformEvent ─► core, RigSnapshot ─► platform
/// ```
pub struct Engine {
    orchestrator: CoreSystemsOrchestrator,
    tps: f64,
    channel_capacity: usize,
}

impl Engine {
    //--- Initialization ---------------------------------------------------

    /// Adjusts core systems before the run starts.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # use supermotor::EngineBuilder;
    /// use supermotor::core::input::{Command, KeyCode};
    ///
    /// EngineBuilder::new()
    ///     .build()
    ///     .init(|systems| {
    ///         systems.input.bindings_mut().bind(KeyCode::End, Command::Quit);
    ///     })
    ///     .run()
    ///     .expect("simulation failed");
    /// ```
    pub fn init<F>(mut self, init_fn: F) -> Self
    where
        F: FnOnce(&mut CoreSystems),
    {
        info!("Initializing engine systems");
        self.orchestrator.init_systems(init_fn);
        self
    }

    //--- Execution --------------------------------------------------------

    /// Starts the runtime and blocks until the application exits.
    ///
    /// # Lifecycle
    ///
    /// 1. Creates the input and snapshot channels
    /// 2. Spawns the core thread at the configured TPS
    /// 3. Runs the platform event loop (blocks here)
    /// 4. Joins the core thread
    ///
    /// Either side ending stops the other: closing the window sends
    /// `WindowClosed`, and the core thread exiting (Escape) disconnects the
    /// snapshot channel, which closes the window.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Platform`] for window, surface or event loop
    /// failures and [`EngineError::CoreThreadPanicked`] if the core thread
    /// panicked. A platform error takes precedence.
    pub fn run(self) -> Result<(), EngineError> {
        info!("Starting engine runtime (TPS: {})", self.tps);

        //--- 1. Create communication channels ----------------------------
        let (input_tx, input_rx): (Sender<PlatformEvent>, Receiver<PlatformEvent>) =
            bounded(self.channel_capacity);
        let (snapshot_tx, snapshot_rx): (Sender<RigSnapshot>, Receiver<RigSnapshot>) =
            bounded(self.channel_capacity);

        //--- 2. Spawn the core logic thread -------------------------------
        let initial = self.orchestrator.snapshot();
        let core_handle = self.orchestrator.spawn_core_thread(input_rx, snapshot_tx, self.tps);
        info!("Core logic thread spawned");

        //--- 3. Launch the platform subsystem -----------------------------
        let platform = Platform::new(input_tx, snapshot_rx, initial);
        info!("Platform initialized, entering event loop");

        // Dropping the platform drops the input sender, so the core thread
        // sees a disconnect even if `WindowClosed` never made it through.
        let platform_result = platform.run();
        info!("Platform event loop exited");

        //--- 4. Cleanup: wait for logic thread to terminate --------------
        let core_result = core_handle.join();

        if let Err(e) = platform_result {
            error!("Platform error: {}", e);
            return Err(e.into());
        }

        match core_result {
            Ok(()) => {
                info!("Engine shutdown complete");
                Ok(())
            }
            Err(_) => {
                error!("Core thread panicked");
                Err(EngineError::CoreThreadPanicked)
            }
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

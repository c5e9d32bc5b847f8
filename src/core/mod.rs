//=========================================================================
// Core Systems Orchestrator
//
// Central coordinator for the simulation running on the logic
// (non-platform) thread.
//
// Responsibilities:
// - Own the input system and the rig simulation
// - Receive platform events via channel, one batch per platform frame
// - Run exactly one simulation tick per loop iteration at a fixed TPS
// - Publish a read-only snapshot of the rig after every tick
//
// Notes:
// The orchestrator runs independently from the platform layer. Only the
// core thread ever touches `Simulation`, so each tick is one
// uninterrupted unit: drain input → apply commands → step → publish.
//
//=========================================================================

//=== Module Declarations =================================================

pub mod input;
pub mod rig;
pub mod simulation;

pub(crate) mod platform_bridge;

//=== Standard Library Imports ============================================

use std::thread;
use std::time::{Duration, Instant};

//=== External Crates =====================================================

use crossbeam_channel::{Receiver, Sender, TrySendError};
use log::{info, trace};

//=== Internal Modules ====================================================

use input::InputSystem;
use platform_bridge::{EventCollector, PlatformEvent, TickControl};
use simulation::{RigSnapshot, Simulation};

//=== CoreSystems =========================================================

/// Systems owned by the core thread.
///
/// Exposed to [`crate::Engine::init`] so bindings (or the starting rig)
/// can be adjusted before the run starts.
#[derive(Debug, Default)]
pub struct CoreSystems {
    pub input: InputSystem,
    pub simulation: Simulation,
}

impl CoreSystems {
    pub fn new() -> Self {
        Self::default()
    }
}

//=== CoreSystemsOrchestrator =============================================

pub(crate) struct CoreSystemsOrchestrator {
    systems: CoreSystems,
}

impl CoreSystemsOrchestrator {
    //--- Construction -----------------------------------------------------
    //
    // Initializes all core systems but does not yet start the logic thread.
    //
    pub(crate) fn new() -> Self {
        Self {
            systems: CoreSystems::new(),
        }
    }

    /// Runs a one-off setup closure against the systems.
    pub(crate) fn init_systems<F>(&mut self, init_fn: F)
    where
        F: FnOnce(&mut CoreSystems),
    {
        init_fn(&mut self.systems);
    }

    /// Snapshot of the rig before the first tick.
    pub(crate) fn snapshot(&self) -> RigSnapshot {
        self.systems.simulation.snapshot()
    }

    //--- spawn_core_thread() ---------------------------------------------
    //
    // Spawns the logic thread, ticking at `tps` until quit, window close,
    // or channel disconnect. The snapshot sender is dropped when the
    // thread ends, which tells the platform to close the window.
    //
    pub(crate) fn spawn_core_thread(
        mut self,
        receiver: Receiver<PlatformEvent>,
        snapshots: Sender<RigSnapshot>,
        tps: f64,
    ) -> thread::JoinHandle<()> {
        let frame_duration = Duration::from_secs_f64(1.0 / tps);

        thread::spawn(move || {
            let mut collector = EventCollector::new(receiver);

            loop {
                let frame_start = Instant::now();

                if self.tick(&mut collector, &snapshots) == TickControl::Exit {
                    break;
                }

                let elapsed = frame_start.elapsed();
                if elapsed < frame_duration {
                    thread::sleep(frame_duration - elapsed);
                }
            }

            info!(
                target: "core",
                "Core thread exiting after {} frames",
                self.systems.simulation.frame()
            );
        })
    }

    //--- tick() ----------------------------------------------------------
    //
    // One loop iteration:
    //  1. Collect platform events (exit on close/disconnect)
    //  2. Resolve key presses into commands
    //  3. Apply commands and step the rig
    //  4. Publish the snapshot
    //  5. Exit if a quit command was seen
    //
    fn tick(&mut self, collector: &mut EventCollector, snapshots: &Sender<RigSnapshot>) -> TickControl {
        if collector.collect_frame() == TickControl::Exit {
            return TickControl::Exit;
        }

        let CoreSystems { input, simulation } = &mut self.systems;

        input.process_frame(collector.batches());
        simulation.tick(input.commands());

        match snapshots.try_send(simulation.snapshot()) {
            Ok(()) => {}
            Err(TrySendError::Full(_)) => {
                trace!(target: "core", "Snapshot channel full, frame {} not shown", simulation.frame());
            }
            Err(TrySendError::Disconnected(_)) => {
                info!(target: "core", "Renderer gone, stopping");
                return TickControl::Exit;
            }
        }

        if input.quit_requested() {
            info!(target: "core", "Quit requested");
            return TickControl::Exit;
        }

        TickControl::Continue
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::input::{Command, InputEvent, KeyCode};
    use crate::core::rig::MotorId;
    use crossbeam_channel::{bounded, unbounded};

    fn press(keys: &[KeyCode]) -> PlatformEvent {
        PlatformEvent::Inputs(keys.iter().copied().map(InputEvent::KeyDown).collect())
    }

    #[test]
    fn tick_without_input_steps_once_and_publishes() {
        let (_tx, rx) = unbounded();
        let (snap_tx, snap_rx) = unbounded();
        let mut orchestrator = CoreSystemsOrchestrator::new();
        let mut collector = EventCollector::new(rx);

        let control = orchestrator.tick(&mut collector, &snap_tx);

        assert_eq!(control, TickControl::Continue);
        let snapshot = snap_rx.try_recv().expect("snapshot published");
        assert_eq!(snapshot.frame(), 1);
    }

    #[test]
    fn tick_applies_key_presses_before_step() {
        let (tx, rx) = unbounded();
        let (snap_tx, snap_rx) = unbounded();
        let mut orchestrator = CoreSystemsOrchestrator::new();
        let mut collector = EventCollector::new(rx);

        tx.send(press(&[KeyCode::Home])).unwrap();
        orchestrator.tick(&mut collector, &snap_tx);

        let snapshot = snap_rx.try_recv().unwrap();
        assert_eq!(snapshot.motor(MotorId::A).speed(), 0.0);
        assert_eq!(snapshot.wheel().rotation(), 0.0);
    }

    #[test]
    fn escape_ends_loop_after_publishing() {
        let (tx, rx) = unbounded();
        let (snap_tx, snap_rx) = unbounded();
        let mut orchestrator = CoreSystemsOrchestrator::new();
        let mut collector = EventCollector::new(rx);

        tx.send(press(&[KeyCode::Escape])).unwrap();

        assert_eq!(orchestrator.tick(&mut collector, &snap_tx), TickControl::Exit);
        assert!(snap_rx.try_recv().is_ok());
    }

    #[test]
    fn window_close_ends_loop_without_stepping() {
        let (tx, rx) = unbounded();
        let (snap_tx, snap_rx) = unbounded();
        let mut orchestrator = CoreSystemsOrchestrator::new();
        let mut collector = EventCollector::new(rx);

        tx.send(PlatformEvent::WindowClosed).unwrap();

        assert_eq!(orchestrator.tick(&mut collector, &snap_tx), TickControl::Exit);
        assert!(snap_rx.try_recv().is_err());
        assert_eq!(orchestrator.systems.simulation.frame(), 0);
    }

    #[test]
    fn full_snapshot_channel_does_not_stop_loop() {
        let (_tx, rx) = unbounded();
        let (snap_tx, _snap_rx) = bounded(1);
        let mut orchestrator = CoreSystemsOrchestrator::new();
        let mut collector = EventCollector::new(rx);

        assert_eq!(orchestrator.tick(&mut collector, &snap_tx), TickControl::Continue);
        assert_eq!(orchestrator.tick(&mut collector, &snap_tx), TickControl::Continue);
        assert_eq!(orchestrator.systems.simulation.frame(), 2);
    }

    #[test]
    fn dropped_renderer_stops_loop() {
        let (_tx, rx) = unbounded();
        let (snap_tx, snap_rx) = unbounded();
        let mut orchestrator = CoreSystemsOrchestrator::new();
        let mut collector = EventCollector::new(rx);

        drop(snap_rx);

        assert_eq!(orchestrator.tick(&mut collector, &snap_tx), TickControl::Exit);
    }

    #[test]
    fn init_systems_rebinds_keys() {
        let (tx, rx) = unbounded();
        let (snap_tx, _snap_rx) = unbounded();
        let mut orchestrator = CoreSystemsOrchestrator::new();
        orchestrator.init_systems(|systems| {
            systems.input.bindings_mut().bind(KeyCode::Enter, Command::Quit);
        });
        let mut collector = EventCollector::new(rx);

        tx.send(press(&[KeyCode::Enter])).unwrap();

        assert_eq!(orchestrator.tick(&mut collector, &snap_tx), TickControl::Exit);
    }

    #[test]
    fn core_thread_exits_on_window_close() {
        let (tx, rx) = unbounded();
        let (snap_tx, snap_rx) = unbounded();
        let orchestrator = CoreSystemsOrchestrator::new();

        let handle = orchestrator.spawn_core_thread(rx, snap_tx, 1000.0);
        tx.send(press(&[KeyCode::ArrowUp])).unwrap();
        tx.send(PlatformEvent::WindowClosed).unwrap();

        handle.join().expect("core thread should not panic");

        // sender dropped with the thread: receiver drains then disconnects
        while snap_rx.try_recv().is_ok() {}
        assert!(snap_rx.recv().is_err());
    }
}

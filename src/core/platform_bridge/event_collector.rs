//=========================================================================
// Event Collector
//=========================================================================
//
// Platform event collector with bounded polling and shutdown detection.
//
// Architecture:
//   Receiver<PlatformEvent> → collect_frame() → input_batches → TickControl
//
// Polling never blocks; the orchestrator paces the loop. The per-tick
// bound keeps a flooded channel from starving the simulation.
//
//=========================================================================

//=== External Dependencies ===============================================

use crossbeam_channel::{Receiver, TryRecvError};
use log::{info, warn};

//=== Internal Dependencies ===============================================

use super::PlatformEvent;
use crate::core::input::event::InputEvent;

//=== TickControl =========================================================

/// Update loop control signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TickControl {
    Continue,
    Exit,
}

//=== EventCollector ======================================================

/// Collects platform events with bounded polling and batch extraction.
pub(crate) struct EventCollector {
    receiver: Receiver<PlatformEvent>,
    input_batches: Vec<Vec<InputEvent>>,
}

impl EventCollector {
    /// Maximum channel messages drained in one tick.
    const MAX_EVENTS_PER_FRAME: usize = 100;

    pub(crate) fn new(receiver: Receiver<PlatformEvent>) -> Self {
        Self {
            receiver,
            input_batches: Vec::with_capacity(4),
        }
    }

    /// Drains pending platform events into this tick's batches.
    ///
    /// Returns `Exit` on window close or when the platform side of the
    /// channel is gone.
    pub(crate) fn collect_frame(&mut self) -> TickControl {
        self.input_batches.clear();
        let mut drained = 0;

        while drained < Self::MAX_EVENTS_PER_FRAME {
            match self.receiver.try_recv() {
                Ok(event) => {
                    if self.handle_event(event) == TickControl::Exit {
                        return TickControl::Exit;
                    }
                    drained += 1;
                }
                Err(TryRecvError::Disconnected) => {
                    info!(target: "core", "Platform channel disconnected");
                    return TickControl::Exit;
                }
                Err(TryRecvError::Empty) => break,
            }
        }

        if drained >= Self::MAX_EVENTS_PER_FRAME {
            warn!(target: "core", "Event queue backlog: drained {} events this frame", drained);
        }

        TickControl::Continue
    }

    /// Returns collected input batches for this frame.
    pub(crate) fn batches(&self) -> &[Vec<InputEvent>] {
        &self.input_batches
    }

    fn handle_event(&mut self, event: PlatformEvent) -> TickControl {
        match event {
            PlatformEvent::Inputs(batch) => {
                if !batch.is_empty() {
                    self.input_batches.push(batch);
                }
                TickControl::Continue
            }
            PlatformEvent::WindowClosed => {
                info!(target: "core", "Window closed");
                TickControl::Exit
            }
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

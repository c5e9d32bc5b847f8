//=========================================================================
// Rig Snapshot
//=========================================================================
//
// Immutable copy of the rig after a completed tick.
//
// Snapshots are what crosses from the core thread to the platform
// thread; the renderer never sees the live simulation.
//
//=========================================================================

use crate::core::rig::{Belt, Motor, MotorId, Wheel};

//=== RigSnapshot =========================================================

/// Read-only state of every rig entity at the end of a tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RigSnapshot {
    pub(super) frame: u64,
    pub(super) wheel: Wheel,
    pub(super) motors: [Motor; 2],
}

impl RigSnapshot {
    /// Number of completed ticks when the snapshot was taken.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn wheel(&self) -> &Wheel {
        &self.wheel
    }

    pub fn motor(&self, id: MotorId) -> &Motor {
        &self.motors[id.index()]
    }

    /// Both motors, in priority order.
    pub fn motors(&self) -> &[Motor; 2] {
        &self.motors
    }

    /// Belt between the wheel and `id`.
    pub fn belt(&self, id: MotorId) -> Belt<'_> {
        Belt::new(&self.wheel, self.motor(id))
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::simulation::Simulation;

    #[test]
    fn initial_snapshot_mirrors_simulation() {
        let sim = Simulation::new();
        let snapshot = sim.snapshot();

        assert_eq!(snapshot.frame(), 0);
        assert_eq!(snapshot.wheel(), sim.wheel());
        assert_eq!(snapshot.motor(MotorId::A), sim.motor(MotorId::A));
        assert_eq!(snapshot.motor(MotorId::B), sim.motor(MotorId::B));
    }

    #[test]
    fn snapshot_is_detached_from_later_ticks() {
        let mut sim = Simulation::new();
        let before = sim.snapshot();

        sim.step();

        assert_eq!(before.frame(), 0);
        assert_eq!(before.motor(MotorId::A).rotation(), 0.0);
        assert_ne!(sim.snapshot(), before);
    }

    #[test]
    fn belts_reference_their_motor() {
        let snapshot = Simulation::new().snapshot();

        for id in MotorId::PRIORITY {
            assert_eq!(snapshot.belt(id).motor_id(), id);
        }
    }
}

//=========================================================================
// Simulation Controller
//=========================================================================
//
// Owns the rig and advances it one frame at a time.
//
// Architecture:
// ```text
//   tick(commands)
//     ├─ 1. apply()        commands in arrival order
//     └─ step()
//          ├─ 2. motor spin          rotation += speed
//          ├─ 3. wheel drive         wheel += (speedA + speedB) / 2
//          ├─ 4. charge ceiling      charge = min(charge, 100)
//          ├─ 5. failover            first critical motor hands off
//          ├─ 6. charge transfer     first driving motor feeds the other
//          └─ 7. charge ceiling      re-applied at frame end
// ```
//
// Steps run in this exact order; later steps read what earlier ones
// wrote. Steps 5 and 6 walk `MotorId::PRIORITY`, so motor A wins every
// tie. At most one branch of each fires per frame.
//
// Pause is value-based: the rig counts as paused when both speeds are
// exactly zero, however they got there.
//
//=========================================================================

//=== Module Declarations =================================================

mod snapshot;

//=== Public API ==========================================================

pub use snapshot::RigSnapshot;

//=== External Crates =====================================================

use log::{debug, info, warn};

//=== Internal Dependencies ===============================================

use crate::core::input::Command;
use crate::core::rig::params::{CHARGE_TRANSFER, DEFAULT_MOTOR_SPEED, FAILOVER_TORQUE, MAX_CHARGE};
use crate::core::rig::{Motor, MotorId, Wheel};

//=== Simulation ==========================================================

/// Deterministic two-motor rig state machine.
///
/// The whole state is the wheel, both motors, the saved pause speeds and
/// the frame counter. There is no randomness and no clock: the same
/// command sequence always yields the same states.
#[derive(Debug, Clone)]
pub struct Simulation {
    wheel: Wheel,
    motors: [Motor; 2],

    /// Speeds to restore on resume, indexed by `MotorId::index`.
    saved_speeds: [f64; 2],

    frame: u64,

    /// Motor that failed over last frame, for edge-triggered logging.
    failed_over: Option<MotorId>,
}

impl Simulation {
    //--- Construction -----------------------------------------------------

    /// Creates the rig in its startup configuration.
    ///
    /// The pause snapshot is seeded with the startup speeds, so resuming
    /// before ever pausing restores them.
    pub fn new() -> Self {
        let motors = MotorId::PRIORITY.map(Motor::mounted);
        let saved_speeds = motors.map(|m| m.speed());

        Self {
            wheel: Wheel::mounted(),
            motors,
            saved_speeds,
            frame: 0,
            failed_over: None,
        }
    }

    //--- Accessors --------------------------------------------------------

    pub fn wheel(&self) -> &Wheel {
        &self.wheel
    }

    pub fn motor(&self, id: MotorId) -> &Motor {
        &self.motors[id.index()]
    }

    /// Mutable motor access, for setting up scenarios directly.
    pub fn motor_mut(&mut self, id: MotorId) -> &mut Motor {
        &mut self.motors[id.index()]
    }

    pub fn motors(&self) -> &[Motor; 2] {
        &self.motors
    }

    /// Speeds the next resume will restore.
    pub fn saved_speeds(&self) -> [f64; 2] {
        self.saved_speeds
    }

    /// Number of completed steps.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Returns `true` while both motors stand exactly still.
    pub fn is_paused(&self) -> bool {
        self.motors.iter().all(|m| m.speed() == 0.0)
    }

    /// Copies the current state for readers outside the core thread.
    pub fn snapshot(&self) -> RigSnapshot {
        RigSnapshot {
            frame: self.frame,
            wheel: self.wheel,
            motors: self.motors,
        }
    }

    //--- tick() -----------------------------------------------------------
    //
    // One full frame: every command in order, then the update step.
    //
    pub fn tick(&mut self, commands: &[Command]) {
        for command in commands {
            self.apply(*command);
        }
        self.step();
    }

    //--- apply() ----------------------------------------------------------
    //
    // Reducer for a single command. `Quit` has no effect on the rig; the
    // run loop reacts to it.
    //
    pub fn apply(&mut self, command: Command) {
        match command {
            Command::AdjustSpeed { motor, delta } => {
                self.motor_mut(motor).adjust_speed(delta);
            }
            Command::Reset => self.reset(),
            Command::TogglePause => self.toggle_pause(),
            Command::Quit => {}
        }
    }

    fn reset(&mut self) {
        for motor in &mut self.motors {
            let speed = match motor.id() {
                MotorId::A => DEFAULT_MOTOR_SPEED,
                MotorId::B => 0.0,
            };
            motor.set_speed(speed);
            motor.set_charge(MAX_CHARGE);
        }
        info!(target: "core::sim", "Rig reset");
    }

    fn toggle_pause(&mut self) {
        if self.is_paused() {
            for motor in &mut self.motors {
                motor.set_speed(self.saved_speeds[motor.id().index()]);
            }
            info!(target: "core::sim", "Resumed at {:?}", self.saved_speeds);
        } else {
            self.saved_speeds = self.motors.map(|m| m.speed());
            for motor in &mut self.motors {
                motor.set_speed(0.0);
            }
            info!(target: "core::sim", "Paused, saved {:?}", self.saved_speeds);
        }
    }

    //--- step() -----------------------------------------------------------
    //
    // Steps 2-7 of the frame. Total over all inputs; never fails.
    //
    pub fn step(&mut self) {
        // 2. Free-running motor spin
        for motor in &mut self.motors {
            motor.advance();
        }

        // 3. Wheel follows the average of both belts
        let average = self.motors.iter().map(Motor::speed).sum::<f64>() / 2.0;
        self.wheel.advance(average);

        // 4. Charge ceiling
        self.clamp_charges();

        // 5. Failover
        self.failover();

        // 6. Charge transfer and wheel correction
        self.transfer_charge();

        // 7. Frame-end ceiling
        self.clamp_charges();

        self.frame += 1;
    }

    //--- Rules ------------------------------------------------------------

    fn clamp_charges(&mut self) {
        for motor in &mut self.motors {
            motor.clamp_charge();
        }
    }

    /// The first critical motor stops and the other takes a fixed
    /// torque boost.
    fn failover(&mut self) {
        let critical = MotorId::PRIORITY
            .into_iter()
            .find(|&id| self.motor(id).is_critical());

        if let Some(id) = critical {
            self.motor_mut(id).set_speed(0.0);
            self.motor_mut(id.other()).adjust_speed(FAILOVER_TORQUE);

            if self.failed_over != Some(id) {
                info!(
                    target: "core::sim",
                    "Failover: {} critical at {:.1}%, load moved to {}",
                    id,
                    self.motor(id).charge(),
                    id.other()
                );
            }
        }

        self.failed_over = critical;
    }

    /// The first driving motor feeds charge to the other and pulls the
    /// wheel back by its own speed.
    fn transfer_charge(&mut self) {
        let Some(driver) = MotorId::PRIORITY
            .into_iter()
            .find(|&id| self.motor(id).is_driving())
        else {
            return;
        };

        let speed = self.motor(driver).speed();
        let before = self.motor(driver).charge();

        self.motor_mut(driver.other()).adjust_charge(CHARGE_TRANSFER);
        self.motor_mut(driver).adjust_charge(-CHARGE_TRANSFER);
        self.wheel.advance(-speed);

        let after = self.motor(driver).charge();
        if before >= 0.0 && after < 0.0 {
            warn!(target: "core::sim", "{} charge went negative ({:.1}%)", driver, after);
        }

        debug!(
            target: "core::sim",
            "Frame {}: {} driving at {:.2}, charge {:.1}%",
            self.frame,
            driver,
            speed,
            after
        );
    }
}

impl Default for Simulation {
    fn default() -> Self {
        Self::new()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

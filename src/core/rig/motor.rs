//=========================================================================
// Motor
//=========================================================================
//
// One of the two drive motors.
//
// A motor spins freely at its own speed and carries a charge level.
// It never regulates itself: speed and charge are only changed by the
// simulation controller or by player commands.
//
//=========================================================================

use super::params::{CRITICAL_THRESHOLD, DEFAULT_MOTOR_SPEED, MAX_CHARGE, MOTOR_A_CENTER, MOTOR_B_CENTER, MOTOR_RADIUS};
use super::{degrees_to_radians, MotorId, Point};

//=== Motor ===============================================================

/// Drive motor state.
///
/// - `speed`: signed, degrees per frame
/// - `charge`: percent; capped at [`MAX_CHARGE`] by the controller,
///   never floored (it can go negative)
/// - `rotation`: radians, accumulates without wrapping
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Motor {
    id: MotorId,
    center: Point,
    radius: f64,
    speed: f64,
    charge: f64,
    rotation: f64,
}

impl Motor {
    //--- Construction -----------------------------------------------------

    /// Creates a fully charged motor at rest angle 0.
    pub fn new(id: MotorId, center: Point, radius: f64, speed: f64) -> Self {
        Self {
            id,
            center,
            radius,
            speed,
            charge: MAX_CHARGE,
            rotation: 0.0,
        }
    }

    /// Creates the motor mounted at `id`'s standard position.
    ///
    /// Motor A starts at [`DEFAULT_MOTOR_SPEED`], motor B at rest.
    pub fn mounted(id: MotorId) -> Self {
        match id {
            MotorId::A => Self::new(id, MOTOR_A_CENTER, MOTOR_RADIUS, DEFAULT_MOTOR_SPEED),
            MotorId::B => Self::new(id, MOTOR_B_CENTER, MOTOR_RADIUS, 0.0),
        }
    }

    //--- Accessors --------------------------------------------------------

    pub fn id(&self) -> MotorId {
        self.id
    }

    pub fn center(&self) -> Point {
        self.center
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub fn charge(&self) -> f64 {
        self.charge
    }

    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    /// Returns `true` once charge has dropped to the failover threshold.
    pub fn is_critical(&self) -> bool {
        self.charge <= CRITICAL_THRESHOLD
    }

    /// Returns `true` if the motor is turning forward.
    pub fn is_driving(&self) -> bool {
        self.speed > 0.0
    }

    /// Point on the motor rim at the current rotation.
    pub fn rim_point(&self) -> Point {
        self.center.on_circle(self.radius, self.rotation)
    }

    //--- Mutation ---------------------------------------------------------

    /// Spins the motor by one frame at its current speed.
    pub fn advance(&mut self) {
        self.rotation += degrees_to_radians(self.speed);
    }

    pub fn set_speed(&mut self, speed: f64) {
        self.speed = speed;
    }

    pub fn adjust_speed(&mut self, delta: f64) {
        self.speed += delta;
    }

    pub fn set_charge(&mut self, charge: f64) {
        self.charge = charge;
    }

    pub fn adjust_charge(&mut self, delta: f64) {
        self.charge += delta;
    }

    /// Caps charge at [`MAX_CHARGE`]. Returns `true` if it was above.
    pub fn clamp_charge(&mut self) -> bool {
        if self.charge > MAX_CHARGE {
            self.charge = MAX_CHARGE;
            true
        } else {
            false
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

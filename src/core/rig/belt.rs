//=========================================================================
// Belt
//=========================================================================
//
// Geometry-only link between the wheel and one motor.
//
// A belt is drawn as two parallel strands from the wheel rim point at the
// wheel's rotation to the motor rim point at the motor's rotation, offset
// by the belt half width above and below. It has no simulation state.
//
//=========================================================================

use super::params::BELT_HALF_WIDTH;
use super::{Motor, MotorId, Point, Wheel};

//=== BeltSegment =========================================================

/// One straight strand of a belt, wheel side first.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BeltSegment {
    pub start: Point,
    pub end: Point,
}

//=== Belt ================================================================

/// Borrowed view of a wheel and the motor it is belted to.
#[derive(Debug, Clone, Copy)]
pub struct Belt<'a> {
    wheel: &'a Wheel,
    motor: &'a Motor,
}

impl<'a> Belt<'a> {
    pub fn new(wheel: &'a Wheel, motor: &'a Motor) -> Self {
        Self { wheel, motor }
    }

    pub fn motor_id(&self) -> MotorId {
        self.motor.id()
    }

    /// Lower and upper strands for the current rotations.
    pub fn segments(&self) -> [BeltSegment; 2] {
        let start = self.wheel.rim_point();
        let end = self.motor.rim_point();

        [BELT_HALF_WIDTH, -BELT_HALF_WIDTH].map(|dy| BeltSegment {
            start: start.shifted_y(dy),
            end: end.shifted_y(dy),
        })
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

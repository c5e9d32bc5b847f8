//=========================================================================
// Rig Entities
//=========================================================================
//
// The physical parts of the rig: one wheel, two motors, two belts.
//
// Architecture:
// ```text
//   Motor A ══ belt A ══╗
//                       ╠══ Wheel
//   Motor B ══ belt B ══╝
// ```
//
// Motors and the wheel own their kinematic state. Belts are views that
// borrow a wheel and a motor to derive drawing geometry. Cross-motor
// rules (failover, charge transfer) live in the simulation controller,
// not here.
//
//=========================================================================

//=== Module Declarations =================================================

pub mod params;

mod belt;
mod motor;
mod wheel;

//=== Public API ==========================================================

pub use belt::{Belt, BeltSegment};
pub use motor::Motor;
pub use wheel::Wheel;

//=== Standard Library Imports ============================================

use std::f64::consts::PI;
use std::fmt;

//=== MotorId =============================================================

/// Identifies one of the two motors.
///
/// The declaration order is also the priority order: whenever both
/// motors qualify for the same rule in a frame, `A` wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MotorId {
    A,
    B,
}

impl MotorId {
    /// Both motors, highest priority first.
    pub const PRIORITY: [MotorId; 2] = [MotorId::A, MotorId::B];

    /// Storage index of this motor.
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Self::A => 0,
            Self::B => 1,
        }
    }

    /// The motor on the other belt.
    #[inline]
    pub const fn other(self) -> Self {
        match self {
            Self::A => Self::B,
            Self::B => Self::A,
        }
    }

    /// Single-letter label used in logs and on screen.
    pub const fn label(self) -> char {
        match self {
            Self::A => 'A',
            Self::B => 'B',
        }
    }
}

impl fmt::Display for MotorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "motor {}", self.label())
    }
}

//=== Point ===============================================================

/// Scene-space position in pixels (top-left origin, y down).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Point on the circle of `radius` around `self` at `angle` radians.
    pub fn on_circle(self, radius: f64, angle: f64) -> Self {
        Self::new(self.x + radius * angle.cos(), self.y + radius * angle.sin())
    }

    /// Same point shifted vertically by `dy`.
    pub fn shifted_y(self, dy: f64) -> Self {
        Self::new(self.x, self.y + dy)
    }
}

//=== Angle Conversion ====================================================

/// Converts a per-frame speed in degrees to radians.
///
/// Multiplies before dividing, so results match `speed * π / 180`
/// exactly rather than `speed * (π / 180)`.
#[inline]
pub fn degrees_to_radians(degrees: f64) -> f64 {
    degrees * PI / 180.0
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    #[test]
    fn priority_order_is_a_then_b() {
        assert_eq!(MotorId::PRIORITY, [MotorId::A, MotorId::B]);
        assert!(MotorId::A < MotorId::B);
    }

    #[test]
    fn index_matches_priority_position() {
        for (position, id) in MotorId::PRIORITY.iter().enumerate() {
            assert_eq!(id.index(), position);
        }
    }

    #[test]
    fn other_is_an_involution() {
        assert_eq!(MotorId::A.other(), MotorId::B);
        assert_eq!(MotorId::B.other(), MotorId::A);
        assert_eq!(MotorId::A.other().other(), MotorId::A);
    }

    #[test]
    fn display_uses_label() {
        assert_eq!(MotorId::B.to_string(), "motor B");
    }

    #[test]
    fn on_circle_hits_cardinal_points() {
        let c = Point::new(10.0, 20.0);

        let east = c.on_circle(5.0, 0.0);
        assert!((east.x - 15.0).abs() < EPS && (east.y - 20.0).abs() < EPS);

        let south = c.on_circle(5.0, PI / 2.0);
        assert!((south.x - 10.0).abs() < EPS && (south.y - 25.0).abs() < EPS);
    }

    #[test]
    fn degrees_to_radians_known_values() {
        assert_eq!(degrees_to_radians(0.0), 0.0);
        assert!((degrees_to_radians(180.0) - PI).abs() < EPS);
        assert!((degrees_to_radians(-90.0) + PI / 2.0).abs() < EPS);
    }
}

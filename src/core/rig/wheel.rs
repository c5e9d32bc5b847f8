//=========================================================================
// Wheel
//=========================================================================
//
// The shared output wheel. Its rotation always stays in [0, 2π).
//
//=========================================================================

use std::f64::consts::TAU;

use super::params::{WHEEL_CENTER, WHEEL_RADIUS};
use super::{degrees_to_radians, Point};

//=== Wheel ===============================================================

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Wheel {
    center: Point,
    radius: f64,
    rotation: f64,
}

impl Wheel {
    pub fn new(center: Point, radius: f64) -> Self {
        Self {
            center,
            radius,
            rotation: 0.0,
        }
    }

    /// Creates the wheel at its standard mounting point.
    pub fn mounted() -> Self {
        Self::new(WHEEL_CENTER, WHEEL_RADIUS)
    }

    pub fn center(&self) -> Point {
        self.center
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Rotation in radians, within `[0, 2π)`.
    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    /// Point on the rim at the current rotation.
    pub fn rim_point(&self) -> Point {
        self.center.on_circle(self.radius, self.rotation)
    }

    /// Turns the wheel by `degrees` (negative turns it backwards).
    pub fn advance(&mut self, degrees: f64) {
        self.rotation = normalize_angle(self.rotation + degrees_to_radians(degrees));
    }
}

//=== Helpers =============================================================

/// Wraps an angle into `[0, 2π)`.
///
/// For a single wrap this is bit-identical to subtracting or adding `2π`
/// once. The final check catches tiny negative inputs whose sum with `2π`
/// rounds up to exactly `2π`.
fn normalize_angle(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(TAU);
    if wrapped >= TAU {
        0.0
    } else {
        wrapped
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    const EPS: f64 = 1e-12;

    #[test]
    fn starts_at_zero() {
        assert_eq!(Wheel::mounted().rotation(), 0.0);
    }

    #[test]
    fn advance_forward() {
        let mut wheel = Wheel::mounted();
        wheel.advance(90.0);
        assert!((wheel.rotation() - PI / 2.0).abs() < EPS);
    }

    #[test]
    fn advance_wraps_past_full_turn() {
        let mut wheel = Wheel::mounted();
        wheel.advance(350.0);
        wheel.advance(20.0);

        assert!((wheel.rotation() - degrees_to_radians(10.0)).abs() < 1e-9);
    }

    #[test]
    fn advance_backwards_wraps_below_zero() {
        let mut wheel = Wheel::mounted();
        wheel.advance(-0.5);

        let expected = TAU - degrees_to_radians(0.5);
        assert!((wheel.rotation() - expected).abs() < EPS);
        assert!(wheel.rotation() < TAU);
    }

    #[test]
    fn advance_handles_multiple_turns() {
        let mut wheel = Wheel::mounted();
        wheel.advance(3.0 * 360.0 + 45.0);
        assert!((wheel.rotation() - PI / 4.0).abs() < 1e-9);

        wheel.advance(-5.0 * 360.0);
        assert!((wheel.rotation() - PI / 4.0).abs() < 1e-9);
    }

    #[test]
    fn normalize_never_returns_full_turn() {
        let tiny = -1e-18;
        let wrapped = normalize_angle(tiny);
        assert!((0.0..TAU).contains(&wrapped));
    }

    #[test]
    fn normalize_single_wrap_matches_subtraction() {
        let angle = TAU + 0.25;
        assert_eq!(normalize_angle(angle), angle - TAU);

        let angle = -0.25;
        assert_eq!(normalize_angle(angle), angle + TAU);
    }

    #[test]
    fn rim_point_follows_rotation() {
        let mut wheel = Wheel::new(Point::new(0.0, 0.0), 10.0);
        wheel.advance(90.0);

        let rim = wheel.rim_point();
        assert!(rim.x.abs() < 1e-9);
        assert!((rim.y - 10.0).abs() < 1e-9);
    }
}

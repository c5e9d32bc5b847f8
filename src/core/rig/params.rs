//=========================================================================
// Rig Parameters
//=========================================================================
//
// Fixed geometry and tuning constants of the two-motor rig.
//
// Speeds are expressed in degrees per frame, charges in percent.
//
//=========================================================================

use super::Point;

//=== Screen ==============================================================

/// Logical width of the scene, in pixels.
pub const SCREEN_WIDTH: u32 = 800;

/// Logical height of the scene, in pixels.
pub const SCREEN_HEIGHT: u32 = 600;

//=== Geometry ============================================================

pub const WHEEL_RADIUS: f64 = 100.0;
pub const MOTOR_RADIUS: f64 = 50.0;

/// Vertical offset of each belt strand from the rim-to-rim line.
pub const BELT_HALF_WIDTH: f64 = 20.0;

/// Vertical distance of each motor from the horizontal center line.
pub const MOTOR_SPACING: f64 = 75.0;

pub const WHEEL_CENTER: Point = Point::new(SCREEN_WIDTH as f64 / 2.0, SCREEN_HEIGHT as f64 / 2.0);

pub const MOTOR_A_CENTER: Point = Point::new(
    SCREEN_WIDTH as f64 / 4.0,
    SCREEN_HEIGHT as f64 / 2.0 - MOTOR_SPACING,
);

pub const MOTOR_B_CENTER: Point = Point::new(
    SCREEN_WIDTH as f64 / 4.0,
    SCREEN_HEIGHT as f64 / 2.0 + MOTOR_SPACING,
);

//=== Dynamics ============================================================

/// Speed motor A starts with and returns to on reset.
pub const DEFAULT_MOTOR_SPEED: f64 = 1.0;

/// Speed change per key press.
pub const SPEED_STEP: f64 = 0.1;

/// Charge ceiling, applied every frame.
pub const MAX_CHARGE: f64 = 100.0;

/// Charge at or below which a motor hands its load to the other one.
pub const CRITICAL_THRESHOLD: f64 = 10.0;

/// Speed added to the surviving motor on failover.
pub const FAILOVER_TORQUE: f64 = 1.0;

/// Charge moved from the driving motor to the idle one each frame.
pub const CHARGE_TRANSFER: f64 = 0.1;

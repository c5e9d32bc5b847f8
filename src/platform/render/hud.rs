//=========================================================================
// HUD
//=========================================================================
//
// Text overlay: live motor readouts followed by the static controls
// legend. Values are printed with six decimals.
//
//=========================================================================

use crate::core::rig::MotorId;
use crate::core::simulation::RigSnapshot;

use super::canvas::{Canvas, BLACK};

/// Left margin of every HUD line.
const HUD_X: i32 = 10;

/// Baseline of the first readout line.
const READOUT_Y: i32 = 10;

/// Baseline of the controls legend.
const CONTROLS_Y: i32 = 85;

const LINE_SPACING: i32 = 15;

const CONTROLS: [&str; 6] = [
    "Controls:",
    "Up/Down arrows: change motor A speed",
    "Left/Right arrows: change motor B speed",
    "Home: stop/resume motors",
    "Space: reset",
    "Escape: quit",
];

/// Charge and speed readouts, top to bottom.
pub(crate) fn readout_lines(snapshot: &RigSnapshot) -> [String; 4] {
    let a = snapshot.motor(MotorId::A);
    let b = snapshot.motor(MotorId::B);

    [
        format!("Motor A Charge: {:.6}%", a.charge()),
        format!("Motor B Charge: {:.6}%", b.charge()),
        format!("Motor A speed: {:.6}", a.speed()),
        format!("Motor B speed: {:.6}", b.speed()),
    ]
}

pub(crate) fn draw(canvas: &mut Canvas<'_>, snapshot: &RigSnapshot) {
    for (i, line) in readout_lines(snapshot).iter().enumerate() {
        canvas.text(HUD_X, READOUT_Y + i as i32 * LINE_SPACING, line, BLACK);
    }

    for (i, line) in CONTROLS.iter().enumerate() {
        canvas.text(HUD_X, CONTROLS_Y + i as i32 * LINE_SPACING, line, BLACK);
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

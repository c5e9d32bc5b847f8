//=========================================================================
// Renderer
//=========================================================================
//
// Presents rig snapshots in the window through a `pixels` surface.
//
// The logical frame buffer is fixed at the rig's screen size; `pixels`
// scales it to whatever the window surface currently is.
//
// Draw order (back to front):
//   clear (white) → belts (blue) → wheel (green) → motors (red) → HUD
//
//=========================================================================

//=== Submodules ==========================================================

mod canvas;
mod hud;

//=== Standard Library Imports ============================================

use std::f64::consts::FRAC_PI_4;
use std::sync::Arc;

//=== External Crates =====================================================

use log::debug;
use pixels::{Pixels, SurfaceTexture};
use winit::window::Window;

//=== Internal Imports ====================================================

use crate::core::platform_bridge::PlatformError;
use crate::core::rig::params::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::core::rig::{Motor, MotorId, Wheel};
use crate::core::simulation::RigSnapshot;
use canvas::{to_pixel, Canvas, BLUE, GLYPH_SIZE, GREEN, RED, WHITE};

//=== Renderer ============================================================

pub(crate) struct Renderer {
    pixels: Pixels<'static>,
}

impl Renderer {
    pub(crate) fn new(window: Arc<Window>) -> Result<Self, PlatformError> {
        let size = window.inner_size();
        let surface = SurfaceTexture::new(size.width.max(1), size.height.max(1), window);
        let pixels = Pixels::new(SCREEN_WIDTH, SCREEN_HEIGHT, surface)
            .map_err(|e| PlatformError::SurfaceCreation(e.to_string()))?;

        debug!(target: "render", "Surface {}x{}, frame {}x{}", size.width, size.height, SCREEN_WIDTH, SCREEN_HEIGHT);
        Ok(Self { pixels })
    }

    /// Follows a window resize. Zero-sized (minimized) windows are ignored.
    pub(crate) fn resize(&mut self, width: u32, height: u32) -> Result<(), PlatformError> {
        if width == 0 || height == 0 {
            return Ok(());
        }
        self.pixels
            .resize_surface(width, height)
            .map_err(|e| PlatformError::Render(e.to_string()))
    }

    pub(crate) fn draw(&mut self, snapshot: &RigSnapshot) -> Result<(), PlatformError> {
        let mut canvas = Canvas::new(self.pixels.frame_mut(), SCREEN_WIDTH, SCREEN_HEIGHT);
        paint_scene(&mut canvas, snapshot);

        self.pixels
            .render()
            .map_err(|e| PlatformError::Render(e.to_string()))
    }
}

//=== Scene ===============================================================

fn paint_scene(canvas: &mut Canvas<'_>, snapshot: &RigSnapshot) {
    canvas.clear(WHITE);

    for id in MotorId::PRIORITY {
        for strand in snapshot.belt(id).segments() {
            canvas.line(to_pixel(strand.start), to_pixel(strand.end), BLUE);
        }
    }

    paint_wheel(canvas, snapshot.wheel());

    for motor in snapshot.motors() {
        paint_motor(canvas, motor);
    }

    hud::draw(canvas, snapshot);
}

/// Rim plus eight spokes, every 45° from the current rotation.
fn paint_wheel(canvas: &mut Canvas<'_>, wheel: &Wheel) {
    let center = wheel.center();
    canvas.circle(center, wheel.radius(), wheel.rotation(), GREEN);

    for spoke in 0..8 {
        let angle = f64::from(spoke) * FRAC_PI_4 + wheel.rotation();
        let tip = center.on_circle(wheel.radius(), angle);
        canvas.line(to_pixel(center), to_pixel(tip), GREEN);
    }
}

/// Rim, a marker from hub to rim showing rotation, and the motor letter.
fn paint_motor(canvas: &mut Canvas<'_>, motor: &Motor) {
    let center = motor.center();
    canvas.circle(center, motor.radius(), 0.0, RED);
    canvas.line(to_pixel(center), to_pixel(motor.rim_point()), RED);

    let (x, y) = to_pixel(center);
    let mut label = [0u8; 4];
    canvas.text(
        x - GLYPH_SIZE / 2,
        y - GLYPH_SIZE / 2,
        motor.id().label().encode_utf8(&mut label),
        RED,
    );
}

//=========================================================================
// Unit Tests
//=========================================================================

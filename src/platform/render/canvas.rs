//=========================================================================
// Canvas
//=========================================================================
//
// Minimal software rasterizer over an RGBA8 frame buffer.
//
// Coordinates are window pixels with the origin top-left. Anything
// outside the frame is clipped per pixel, so callers never need to
// bounds-check.
//
//=========================================================================

use font8x8::{UnicodeFonts, BASIC_FONTS};

use crate::core::rig::Point;

//=== Color ===============================================================

pub(crate) type Rgba = [u8; 4];

pub(crate) const WHITE: Rgba = [255, 255, 255, 255];
pub(crate) const BLACK: Rgba = [0, 0, 0, 255];
pub(crate) const RED: Rgba = [255, 0, 0, 255];
pub(crate) const GREEN: Rgba = [0, 255, 0, 255];
pub(crate) const BLUE: Rgba = [0, 0, 255, 255];

/// Glyph cell size in pixels.
pub(crate) const GLYPH_SIZE: i32 = 8;

//=== Canvas ==============================================================

pub(crate) struct Canvas<'a> {
    frame: &'a mut [u8],
    width: u32,
    height: u32,
}

impl<'a> Canvas<'a> {
    /// Wraps `frame`, which must hold `width * height` RGBA pixels.
    pub(crate) fn new(frame: &'a mut [u8], width: u32, height: u32) -> Self {
        debug_assert_eq!(frame.len(), (width * height * 4) as usize);
        Self { frame, width, height }
    }

    pub(crate) fn clear(&mut self, color: Rgba) {
        for px in self.frame.chunks_exact_mut(4) {
            px.copy_from_slice(&color);
        }
    }

    pub(crate) fn plot(&mut self, x: i32, y: i32, color: Rgba) {
        if x < 0 || y < 0 {
            return;
        }
        let (x, y) = (x as u32, y as u32);
        if x >= self.width || y >= self.height {
            return;
        }
        let i = ((y * self.width + x) * 4) as usize;
        self.frame[i..i + 4].copy_from_slice(&color);
    }

    /// Bresenham line, both endpoints inclusive.
    pub(crate) fn line(&mut self, from: (i32, i32), to: (i32, i32), color: Rgba) {
        let (mut x0, mut y0) = from;
        let (x1, y1) = to;

        let dx = (x1 - x0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let dy = -(y1 - y0).abs();
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;

        loop {
            self.plot(x0, y0, color);
            if x0 == x1 && y0 == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x0 += sx;
            }
            if e2 <= dx {
                err += dx;
                y0 += sy;
            }
        }
    }

    /// Circle outline sampled once per degree starting at `phase` radians.
    pub(crate) fn circle(&mut self, center: Point, radius: f64, phase: f64, color: Rgba) {
        for degree in 0..360 {
            let angle = f64::from(degree).to_radians() + phase;
            let (x, y) = to_pixel(center.on_circle(radius, angle));
            self.plot(x, y, color);
        }
    }

    /// Draws `text` left to right with its top-left corner at `(x, y)`.
    ///
    /// Characters without a glyph advance the pen but draw nothing.
    pub(crate) fn text(&mut self, x: i32, y: i32, text: &str, color: Rgba) {
        let mut pen = x;
        for c in text.chars() {
            if let Some(glyph) = BASIC_FONTS.get(c) {
                for (row, bits) in glyph.iter().enumerate() {
                    for col in 0..GLYPH_SIZE {
                        if bits & (1 << col) != 0 {
                            self.plot(pen + col, y + row as i32, color);
                        }
                    }
                }
            }
            pen += GLYPH_SIZE;
        }
    }
}

/// Truncates toward zero like an integer cast of the rig coordinates.
pub(crate) fn to_pixel(point: Point) -> (i32, i32) {
    (point.x as i32, point.y as i32)
}

//=========================================================================
// Unit Tests
//=========================================================================

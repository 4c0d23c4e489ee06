// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Sketch canvas rasterization.
//!
//! The renderer redraws the whole surface from the room list on every call:
//! background, cosmetic grid, then each room in insertion order as a
//! translucent fill, an opaque border and its label.

pub mod text;

use crate::config::EditorConfig;
use crate::models::room::{Rgb, Room};
use image::{Rgba, RgbaImage};

/// Canvas background (`#1e293b`).
pub const BACKGROUND: Rgba<u8> = Rgba([0x1e, 0x29, 0x3b, 0xff]);
/// Grid lines: white at 5% opacity.
pub const GRID_LINE: Rgba<u8> = Rgba([0xff, 0xff, 0xff, 13]);
pub const LABEL_COLOR: Rgba<u8> = Rgba([0xff, 0xff, 0xff, 0xff]);
/// Opacity of a room's fill.
pub const FILL_ALPHA: u8 = 0x44;
/// Border thickness, centered on the room edge.
pub const STROKE_WIDTH: i64 = 2;
/// Offset of the label's baseline origin from the room's top-left corner.
pub const LABEL_OFFSET: (i64, i64) = (5, 15);

/// Rasterizes room lists at a fixed logical resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Renderer {
    width: u32,
    height: u32,
    grid_spacing: u32,
}

impl Renderer {
    pub fn new(config: &EditorConfig) -> Self {
        Self {
            width: config.canvas_width,
            height: config.canvas_height,
            grid_spacing: config.grid_spacing.max(1),
        }
    }

    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Render the rooms onto a fresh surface.
    pub fn render(&self, rooms: &[Room]) -> RgbaImage {
        let mut surface = RgbaImage::new(self.width, self.height);
        self.draw(&mut surface, rooms);
        surface
    }

    /// Redraw `surface` in place. A surface of the wrong size is replaced.
    pub fn draw(&self, surface: &mut RgbaImage, rooms: &[Room]) {
        if surface.dimensions() != (self.width, self.height) {
            *surface = RgbaImage::new(self.width, self.height);
        }

        for pixel in surface.pixels_mut() {
            *pixel = BACKGROUND;
        }
        self.draw_grid(surface);

        for room in rooms {
            draw_room(surface, room);
        }
    }

    fn draw_grid(&self, surface: &mut RgbaImage) {
        let (w, h) = (self.width as i64, self.height as i64);
        let step = self.grid_spacing as usize;

        for x in (0..w).step_by(step) {
            fill_rect(surface, x, 0, x + 1, h, GRID_LINE);
        }
        for y in (0..h).step_by(step) {
            fill_rect(surface, 0, y, w, y + 1, GRID_LINE);
        }
    }
}

fn with_alpha(color: Rgb, alpha: u8) -> Rgba<u8> {
    Rgba([color.0, color.1, color.2, alpha])
}

/// Round a room coordinate to a pixel, pinned just outside `[0, limit]` so
/// the stroke offsets below cannot overflow.
fn to_pixel(value: f64, limit: u32) -> i64 {
    let margin = STROKE_WIDTH as f64;
    if value.is_nan() {
        return -STROKE_WIDTH;
    }
    value.round().clamp(-margin, limit as f64 + margin) as i64
}

fn draw_room(surface: &mut RgbaImage, room: &Room) {
    let (w, h) = surface.dimensions();
    let x0 = to_pixel(room.x, w);
    let y0 = to_pixel(room.y, h);
    let x1 = to_pixel(room.x + room.width, w);
    let y1 = to_pixel(room.y + room.height, h);

    fill_rect(surface, x0, y0, x1, y1, with_alpha(room.color, FILL_ALPHA));

    let stroke = with_alpha(room.color, 0xff);
    let half = STROKE_WIDTH / 2;
    let outer = STROKE_WIDTH - half;
    fill_rect(surface, x0 - half, y0 - half, x1 + outer, y0 + outer, stroke);
    fill_rect(surface, x0 - half, y1 - half, x1 + outer, y1 + outer, stroke);
    fill_rect(surface, x0 - half, y0 - half, x0 + outer, y1 + outer, stroke);
    fill_rect(surface, x1 - half, y0 - half, x1 + outer, y1 + outer, stroke);

    text::draw_text(surface, x0 + LABEL_OFFSET.0, y0 + LABEL_OFFSET.1, &room.label, LABEL_COLOR);
}

/// Fill the half-open rectangle `[x0, x1) x [y0, y1)`, clipped to the surface.
fn fill_rect(surface: &mut RgbaImage, x0: i64, y0: i64, x1: i64, y1: i64, color: Rgba<u8>) {
    let (w, h) = (surface.width() as i64, surface.height() as i64);
    let (x0, x1) = (x0.clamp(0, w), x1.clamp(0, w));
    let (y0, y1) = (y0.clamp(0, h), y1.clamp(0, h));

    for y in y0..y1 {
        for x in x0..x1 {
            blend(surface.get_pixel_mut(x as u32, y as u32), color);
        }
    }
}

fn put(surface: &mut RgbaImage, x: i64, y: i64, color: Rgba<u8>) {
    if x >= 0 && y >= 0 && x < surface.width() as i64 && y < surface.height() as i64 {
        blend(surface.get_pixel_mut(x as u32, y as u32), color);
    }
}

/// Source-over compositing of `src` onto `dst`.
pub fn blend(dst: &mut Rgba<u8>, src: Rgba<u8>) {
    let a = src[3] as u32;
    if a == 0xff {
        *dst = src;
        return;
    }
    let inv = 0xff - a;
    for i in 0..3 {
        dst[i] = ((src[i] as u32 * a + dst[i] as u32 * inv + 127) / 255) as u8;
    }
    dst[3] = (a + (dst[3] as u32 * inv + 127) / 255).min(0xff) as u8;
}

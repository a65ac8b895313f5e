//! Raylib backend for the `Canvas` draw seam.
#![forbid(unsafe_code)]

use raylib::prelude::*;
use terrastep_geom::{Canvas, PixelRect, Rgb};

pub mod conv {
    use terrastep_geom::Rgb;

    pub fn rgb_to_rl(c: Rgb) -> raylib::prelude::Color {
        raylib::prelude::Color::new(c.r, c.g, c.b, 255)
    }
}

/// One frame of drawing. Raylib presents the frame when the draw handle is dropped.
pub struct RaylibCanvas<'a> {
    d: RaylibDrawHandle<'a>,
}

impl<'a> RaylibCanvas<'a> {
    pub fn begin(rl: &'a mut RaylibHandle, thread: &RaylibThread) -> Self {
        Self {
            d: rl.begin_drawing(thread),
        }
    }

    pub fn draw_fps(&mut self, x: i32, y: i32) {
        self.d.draw_fps(x, y);
    }

    /// Ends drawing and swaps buffers.
    pub fn present(self) {
        drop(self.d);
    }
}

impl Canvas for RaylibCanvas<'_> {
    fn clear(&mut self, color: Rgb) {
        self.d.clear_background(conv::rgb_to_rl(color));
    }

    fn fill_rect(&mut self, rect: PixelRect, color: Rgb) {
        self.d.draw_rectangle(rect.x, rect.y, rect.w, rect.h, conv::rgb_to_rl(color));
    }

    fn line(&mut self, from: (i32, i32), to: (i32, i32), color: Rgb) {
        self.d.draw_line(from.0, from.1, to.0, to.1, conv::rgb_to_rl(color));
    }

    fn text(&mut self, text: &str, x: i32, y: i32, size: i32, color: Rgb) {
        self.d.draw_text(text, x, y, size, conv::rgb_to_rl(color));
    }
}

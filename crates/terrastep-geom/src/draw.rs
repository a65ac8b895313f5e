//! Draw surface seam. The runtime composes frames against `Canvas`; a backend
//! (raylib) or a `DrawList` recorder executes them.

use std::ops::Deref;

use crate::{PixelRect, Rgb};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DrawCmd {
    Clear(Rgb),
    FillRect { rect: PixelRect, color: Rgb },
    Line { from: (i32, i32), to: (i32, i32), color: Rgb },
    Text { text: String, x: i32, y: i32, size: i32, color: Rgb },
}

pub trait Canvas {
    fn clear(&mut self, color: Rgb);
    fn fill_rect(&mut self, rect: PixelRect, color: Rgb);
    fn line(&mut self, from: (i32, i32), to: (i32, i32), color: Rgb);
    fn text(&mut self, text: &str, x: i32, y: i32, size: i32, color: Rgb);
}

/// Records draw calls in issue order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DrawList(pub Vec<DrawCmd>);

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn into_inner(self) -> Vec<DrawCmd> {
        self.0
    }
}

impl Deref for DrawList {
    type Target = [DrawCmd];

    fn deref(&self) -> &[DrawCmd] {
        &self.0
    }
}

impl Canvas for DrawList {
    fn clear(&mut self, color: Rgb) {
        self.0.push(DrawCmd::Clear(color));
    }

    fn fill_rect(&mut self, rect: PixelRect, color: Rgb) {
        self.0.push(DrawCmd::FillRect { rect, color });
    }

    fn line(&mut self, from: (i32, i32), to: (i32, i32), color: Rgb) {
        self.0.push(DrawCmd::Line { from, to, color });
    }

    fn text(&mut self, text: &str, x: i32, y: i32, size: i32, color: Rgb) {
        self.0.push(DrawCmd::Text {
            text: text.to_string(),
            x,
            y,
            size,
            color,
        });
    }
}

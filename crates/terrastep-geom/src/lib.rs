//! Minimal tile-space and pixel-space types shared by the engine crates (no Raylib dependency).
#![forbid(unsafe_code)]

pub mod draw;

pub use draw::{Canvas, DrawCmd, DrawList};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const RED: Rgb = Rgb::new(255, 0, 0);
    pub const DARK_GRAY: Rgb = Rgb::new(80, 80, 80);

    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from(value: (u8, u8, u8)) -> Self {
        Self::new(value.0, value.1, value.2)
    }
}

impl From<Rgb> for (u8, u8, u8) {
    fn from(value: Rgb) -> Self {
        (value.r, value.g, value.b)
    }
}

/// Integer world coordinate of a single tile.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TileCoord {
    pub col: i32,
    pub row: i32,
}

impl TileCoord {
    #[inline]
    pub const fn new(col: i32, row: i32) -> Self {
        Self { col, row }
    }
}

impl From<(i32, i32)> for TileCoord {
    fn from(value: (i32, i32)) -> Self {
        Self::new(value.0, value.1)
    }
}

impl From<TileCoord> for (i32, i32) {
    fn from(value: TileCoord) -> Self {
        (value.col, value.row)
    }
}

/// Tile rectangle, inclusive on the min edges and exclusive on the max edges.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct TileRect {
    pub min_col: i32,
    pub max_col: i32,
    pub min_row: i32,
    pub max_row: i32,
}

impl TileRect {
    #[inline]
    pub const fn new(min_col: i32, max_col: i32, min_row: i32, max_row: i32) -> Self {
        Self {
            min_col,
            max_col,
            min_row,
            max_row,
        }
    }

    /// Rectangle of `width` x `height` tiles whose top-left tile is `origin`.
    #[inline]
    pub const fn from_origin(origin: TileCoord, width: i32, height: i32) -> Self {
        Self::new(origin.col, origin.col + width, origin.row, origin.row + height)
    }

    #[inline]
    pub fn width(&self) -> i32 {
        (self.max_col - self.min_col).max(0)
    }

    #[inline]
    pub fn height(&self) -> i32 {
        (self.max_row - self.min_row).max(0)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width() == 0 || self.height() == 0
    }

    #[inline]
    pub fn area(&self) -> usize {
        self.width() as usize * self.height() as usize
    }

    #[inline]
    pub fn contains(&self, c: TileCoord) -> bool {
        c.col >= self.min_col
            && c.col < self.max_col
            && c.row >= self.min_row
            && c.row < self.max_row
    }

    /// True when every tile of `other` is also a tile of `self`.
    /// Empty rects are contained anywhere.
    pub fn contains_rect(&self, other: &TileRect) -> bool {
        if other.is_empty() {
            return true;
        }
        other.min_col >= self.min_col
            && other.max_col <= self.max_col
            && other.min_row >= self.min_row
            && other.max_row <= self.max_row
    }

    /// Grow by `dx` tiles on both horizontal edges and `dy` on both vertical edges.
    #[inline]
    pub fn expanded(&self, dx: i32, dy: i32) -> Self {
        Self::new(
            self.min_col - dx,
            self.max_col + dx,
            self.min_row - dy,
            self.max_row + dy,
        )
    }

    /// Row-major walk over every tile (rows outer, columns inner).
    pub fn iter(&self) -> impl Iterator<Item = TileCoord> + use<> {
        let (min_col, max_col) = (self.min_col, self.max_col);
        (self.min_row..self.max_row)
            .flat_map(move |row| (min_col..max_col).map(move |col| TileCoord::new(col, row)))
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PixelRect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl PixelRect {
    #[inline]
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    #[inline]
    pub fn top_left(&self) -> (i32, i32) {
        (self.x, self.y)
    }

    #[inline]
    pub fn top_right(&self) -> (i32, i32) {
        (self.x + self.w, self.y)
    }

    #[inline]
    pub fn bottom_left(&self) -> (i32, i32) {
        (self.x, self.y + self.h)
    }

    #[inline]
    pub fn bottom_right(&self) -> (i32, i32) {
        (self.x + self.w, self.y + self.h)
    }
}

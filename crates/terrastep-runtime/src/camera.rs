use terrastep_geom::{PixelRect, TileCoord, TileRect};

use crate::config::ViewConfig;

/// Keeps the fixed-size tile window centered on the player.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Camera {
    grid_width: i32,
    grid_height: i32,
    anchor: TileCoord,
}

impl Camera {
    pub fn new(view: &ViewConfig) -> Self {
        Self {
            grid_width: view.grid_width(),
            grid_height: view.grid_height(),
            anchor: TileCoord::default(),
        }
    }

    #[inline]
    pub fn grid_size(&self) -> (i32, i32) {
        (self.grid_width, self.grid_height)
    }

    #[inline]
    pub fn half_extents(&self) -> (i32, i32) {
        (self.grid_width / 2, self.grid_height / 2)
    }

    /// Top-left tile of the view from the last `recompute`.
    #[inline]
    pub fn anchor(&self) -> TileCoord {
        self.anchor
    }

    pub fn recompute(&mut self, player_x: i32, player_y: i32) -> TileCoord {
        let (hw, hh) = self.half_extents();
        self.anchor = TileCoord::new(player_x - hw, player_y - hh);
        self.anchor
    }

    /// Tiles on screen for `anchor`.
    pub fn visible_window(&self, anchor: TileCoord) -> TileRect {
        TileRect::from_origin(anchor, self.grid_width, self.grid_height)
    }

    /// The visible window plus one full screen on every side; this is what gets materialized.
    pub fn prefetch_window(&self, anchor: TileCoord) -> TileRect {
        self.visible_window(anchor).expanded(self.grid_width, self.grid_height)
    }
}

/// Screen box of tile `c` for a view anchored at `anchor`.
#[inline]
pub fn tile_to_pixel(c: TileCoord, anchor: TileCoord, tile_size: i32) -> PixelRect {
    PixelRect::new(
        (c.col - anchor.col) * tile_size,
        (c.row - anchor.row) * tile_size,
        tile_size,
        tile_size,
    )
}

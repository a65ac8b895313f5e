//! Composes one frame of draw calls for a `Session`. Only the prefetch window is drawn.

use terrastep_geom::{Canvas, Rgb};
use terrastep_world::BiomeDice;

use crate::Session;
use crate::camera::tile_to_pixel;

pub const BACKGROUND: Rgb = Rgb::WHITE;
pub const MARKER_COLOR: Rgb = Rgb::RED;
pub const PLAYER_COLOR: Rgb = Rgb::BLACK;
pub const HUD_COLOR: Rgb = Rgb::DARK_GRAY;
pub const HUD_FONT_SIZE: i32 = 20;

impl<D: BiomeDice> Session<D> {
    /// Clear, terrain over the prefetch window, marker crosses, player, then the optional HUD.
    pub fn render<C: Canvas + ?Sized>(&self, canvas: &mut C) {
        let anchor = self.camera().anchor();
        let ts = self.config().view.tile_size;
        canvas.clear(BACKGROUND);

        for c in self.prefetch_window().iter() {
            let tile = self.store().get_tile(c.col, c.row);
            canvas.fill_rect(tile_to_pixel(c, anchor, ts), tile.color);
        }

        for m in self.markers().within(self.prefetch_window()) {
            let r = tile_to_pixel(m, anchor, ts);
            canvas.line(r.top_left(), r.bottom_right(), MARKER_COLOR);
            canvas.line(r.top_right(), r.bottom_left(), MARKER_COLOR);
        }

        canvas.fill_rect(tile_to_pixel(self.player().position(), anchor, ts), PLAYER_COLOR);

        if self.config().view.show_hud {
            canvas.text(&self.hud_line(), 12, 12, HUD_FONT_SIZE, HUD_COLOR);
        }
    }

    pub fn hud_line(&self) -> String {
        let p = self.player();
        format!(
            "pos ({}, {})  tiles {}  markers {}",
            p.x,
            p.y,
            self.store().len(),
            self.markers().len()
        )
    }
}

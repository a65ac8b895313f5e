use terrastep_geom::TileCoord;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Player {
    pub x: i32,
    pub y: i32,
}

impl Player {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn position(&self) -> TileCoord {
        TileCoord::new(self.x, self.y)
    }

    /// One tile step per axis; each of `dx`, `dy` is -1, 0 or 1.
    pub fn move_by(&mut self, dx: i32, dy: i32) {
        debug_assert!((-1..=1).contains(&dx) && (-1..=1).contains(&dy));
        self.x += dx;
        self.y += dy;
    }

    /// Where a marker placed now would go. Does not move the player.
    #[inline]
    pub fn place_marker(&self) -> (i32, i32) {
        (self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn axes_move_independently() {
        let mut p = Player::new(2, 2);
        p.move_by(1, 0);
        p.move_by(0, -1);
        p.move_by(-1, 1);
        assert_eq!(p.position(), TileCoord::new(2, 2));
        p.move_by(1, 1);
        assert_eq!((p.x, p.y), (3, 3));
    }

    #[test]
    fn place_marker_reports_position_only() {
        let p = Player::new(-4, 9);
        assert_eq!(p.place_marker(), (-4, 9));
        assert_eq!(p, Player::new(-4, 9));
    }
}

//! Player-placed world markers.
#![forbid(unsafe_code)]

use terrastep_geom::{TileCoord, TileRect};

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkerLogStats {
    pub markers: usize,
    pub distinct_tiles: usize,
}

/// Append-only marker list in placement order. Repeated coordinates are kept
/// as separate entries.
#[derive(Default, Debug, Clone)]
pub struct MarkerLog {
    entries: Vec<TileCoord>,
}

impl MarkerLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, x: i32, y: i32) {
        self.entries.push(TileCoord::new(x, y));
    }

    /// Every marker, oldest first.
    pub fn all(&self) -> &[TileCoord] {
        &self.entries
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Markers inside `rect`, in placement order.
    pub fn within(&self, rect: TileRect) -> impl Iterator<Item = TileCoord> + '_ {
        self.entries.iter().copied().filter(move |c| rect.contains(*c))
    }

    pub fn stats(&self) -> MarkerLogStats {
        let mut tiles: Vec<TileCoord> = self.entries.clone();
        tiles.sort_unstable();
        tiles.dedup();
        MarkerLogStats {
            markers: self.entries.len(),
            distinct_tiles: tiles.len(),
        }
    }
}

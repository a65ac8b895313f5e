//! Sparse, never-shrinking tile store with materialize-once semantics.

use hashbrown::HashMap;
use rand::SeedableRng;
use rand::rngs::StdRng;
use terrastep_geom::{Rgb, TileCoord, TileRect};

use crate::biome::{BiomeDice, BiomeTable};
use crate::noise::TileNoise;
use crate::worldgen::WorldGenConfig;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tile {
    pub noise_value: f32,
    pub color: Rgb,
}

impl Tile {
    /// Stand-in for coordinates that were never materialized.
    pub const NEUTRAL: Tile = Tile {
        noise_value: 0.0,
        color: Rgb::WHITE,
    };
}

/// Outcome of one `ensure_region` call.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RegionReport {
    pub materialized: usize,
    pub unclaimed: usize,
    pub already_present: usize,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TerrainStoreStats {
    pub tiles: usize,
    pub materialized_total: u64,
    pub unclaimed_total: u64,
    pub ensure_calls: u64,
}

pub struct TerrainStore<D = StdRng> {
    seed: i32,
    noise: TileNoise,
    biomes: BiomeTable,
    tiles: HashMap<TileCoord, Tile>,
    dice: D,
    materialized_total: u64,
    unclaimed_total: u64,
    ensure_calls: u64,
}

impl TerrainStore<StdRng> {
    /// Store whose biome draws come from `color_seed`, or from OS entropy when unset.
    pub fn new(cfg: &WorldGenConfig) -> Self {
        let dice = match cfg.color_seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_entropy(),
        };
        Self::with_dice(cfg, dice)
    }
}

impl<D: BiomeDice> TerrainStore<D> {
    pub fn with_dice(cfg: &WorldGenConfig, dice: D) -> Self {
        Self {
            seed: cfg.seed,
            noise: TileNoise::new(cfg.seed, &cfg.noise),
            biomes: BiomeTable::from_config(&cfg.biomes),
            tiles: HashMap::new(),
            dice,
            materialized_total: 0,
            unclaimed_total: 0,
            ensure_calls: 0,
        }
    }

    #[inline]
    pub fn seed(&self) -> i32 {
        self.seed
    }

    #[inline]
    pub fn biomes(&self) -> &BiomeTable {
        &self.biomes
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    #[inline]
    pub fn contains(&self, c: TileCoord) -> bool {
        self.tiles.contains_key(&c)
    }

    pub fn tile(&self, c: TileCoord) -> Option<&Tile> {
        self.tiles.get(&c)
    }

    /// Stored tile, or `Tile::NEUTRAL` when `(col, row)` was never materialized.
    pub fn get_tile(&self, col: i32, row: i32) -> Tile {
        self.tiles
            .get(&TileCoord::new(col, row))
            .copied()
            .unwrap_or(Tile::NEUTRAL)
    }

    pub fn tiles(&self) -> impl Iterator<Item = (TileCoord, &Tile)> + '_ {
        self.tiles.iter().map(|(k, v)| (*k, v))
    }

    pub fn stats(&self) -> TerrainStoreStats {
        TerrainStoreStats {
            tiles: self.tiles.len(),
            materialized_total: self.materialized_total,
            unclaimed_total: self.unclaimed_total,
            ensure_calls: self.ensure_calls,
        }
    }

    /// `ensure_region` over `[min_col, max_col) x [min_row, max_row)`.
    pub fn ensure_region_bounds(
        &mut self,
        min_col: i32,
        max_col: i32,
        min_row: i32,
        max_row: i32,
    ) -> RegionReport {
        self.ensure_region(TileRect::new(min_col, max_col, min_row, max_row))
    }

    /// Materializes every tile of `rect` that is not stored yet. Present tiles are
    /// left untouched. A tile no biome claims is not stored and gets a fresh
    /// attempt on the next call that covers it.
    pub fn ensure_region(&mut self, rect: TileRect) -> RegionReport {
        self.ensure_calls += 1;
        let mut report = RegionReport::default();
        for c in rect.iter() {
            if self.tiles.contains_key(&c) {
                report.already_present += 1;
                continue;
            }
            let noise_value = self.noise.sample(c.col, c.row);
            match self.biomes.claim(&mut self.dice) {
                Some(color) => {
                    self.tiles.insert(c, Tile { noise_value, color });
                    report.materialized += 1;
                }
                None => report.unclaimed += 1,
            }
        }
        self.materialized_total += report.materialized as u64;
        self.unclaimed_total += report.unclaimed as u64;
        if report.materialized > 0 {
            log::debug!(
                target: "terrain",
                "materialized {} tile(s) in {:?} ({} unclaimed, {} stored)",
                report.materialized,
                rect,
                report.unclaimed,
                self.tiles.len()
            );
        }
        report
    }
}

//! Per-tick orchestration: input, player, camera, terrain materialization, frame composition.
#![forbid(unsafe_code)]

pub mod camera;
pub mod config;
pub mod frame;
pub mod input;
pub mod player;

use rand::rngs::StdRng;
use terrastep_edit::MarkerLog;
use terrastep_geom::TileRect;
use terrastep_world::{BiomeDice, TerrainStore};

pub use camera::{Camera, tile_to_pixel};
pub use config::{ConfigError, GameConfig, PlayerConfig, ViewConfig};
pub use input::{InputFrame, InputSource};
pub use player::Player;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    Continue,
    Quit,
}

/// Everything the frame loop owns for one play session.
pub struct Session<D = StdRng> {
    config: GameConfig,
    store: TerrainStore<D>,
    player: Player,
    markers: MarkerLog,
    camera: Camera,
    ticks: u64,
}

impl Session<StdRng> {
    pub fn new(config: GameConfig) -> Self {
        let store = TerrainStore::new(&config.world);
        Self::from_parts(config, store)
    }
}

impl<D: BiomeDice> Session<D> {
    /// Session whose biome colors come from `dice` instead of an RNG.
    pub fn with_dice(config: GameConfig, dice: D) -> Self {
        let store = TerrainStore::with_dice(&config.world, dice);
        Self::from_parts(config, store)
    }

    fn from_parts(config: GameConfig, store: TerrainStore<D>) -> Self {
        let player = Player::new(config.player.start_x, config.player.start_y);
        let camera = Camera::new(&config.view);
        let mut session = Self {
            config,
            store,
            player,
            markers: MarkerLog::new(),
            camera,
            ticks: 0,
        };
        session.sync_view();
        session
    }

    #[inline]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[inline]
    pub fn store(&self) -> &TerrainStore<D> {
        &self.store
    }

    #[inline]
    pub fn player(&self) -> &Player {
        &self.player
    }

    #[inline]
    pub fn markers(&self) -> &MarkerLog {
        &self.markers
    }

    #[inline]
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    #[inline]
    pub fn tick_count(&self) -> u64 {
        self.ticks
    }

    /// Region materialized and drawn for the current camera.
    pub fn prefetch_window(&self) -> TileRect {
        self.camera.prefetch_window(self.camera.anchor())
    }

    pub fn visible_window(&self) -> TileRect {
        self.camera.visible_window(self.camera.anchor())
    }

    pub fn step<I: InputSource + ?Sized>(&mut self, source: &mut I) -> TickOutcome {
        let input = source.poll();
        self.tick(&input)
    }

    /// Movement, then marker placement, then camera and terrain. Quit leaves state untouched.
    pub fn tick(&mut self, input: &InputFrame) -> TickOutcome {
        if input.quit {
            log::info!(target: "events", "[tick {}] QuitRequested", self.ticks);
            return TickOutcome::Quit;
        }
        self.ticks += 1;
        let (dx, dy) = input.axis();
        self.player.move_by(dx, dy);
        if input.place_marker {
            let (x, y) = self.player.place_marker();
            self.markers.append(x, y);
            log::debug!(
                target: "events",
                "[tick {}] MarkerPlaced ({}, {}) total={}",
                self.ticks,
                x,
                y,
                self.markers.len()
            );
        }
        log::trace!(
            target: "events",
            "[tick {}] Moved d=({}, {}) pos=({}, {})",
            self.ticks,
            dx,
            dy,
            self.player.x,
            self.player.y
        );
        self.sync_view();
        TickOutcome::Continue
    }

    fn sync_view(&mut self) {
        let anchor = self.camera.recompute(self.player.x, self.player.y);
        let window = self.camera.prefetch_window(anchor);
        self.store.ensure_region(window);
    }
}

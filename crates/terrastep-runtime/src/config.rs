use std::path::{Path, PathBuf};

use serde::Deserialize;
use terrastep_world::WorldGenConfig;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("read error: {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Startup configuration. Built once, then only read.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct GameConfig {
    #[serde(default)] pub view: ViewConfig,
    #[serde(default)] pub world: WorldGenConfig,
    #[serde(default)] pub player: PlayerConfig,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct ViewConfig {
    #[serde(default = "default_screen_width")] pub screen_width: i32,
    #[serde(default = "default_screen_height")] pub screen_height: i32,
    #[serde(default = "default_tile_size")] pub tile_size: i32,
    #[serde(default = "default_target_fps")] pub target_fps: u32,
    #[serde(default)] pub show_hud: bool,
}
fn default_screen_width() -> i32 { 800 }
fn default_screen_height() -> i32 { 600 }
fn default_tile_size() -> i32 { 40 }
fn default_target_fps() -> u32 { 60 }
impl Default for ViewConfig { fn default() -> Self { Self { screen_width: default_screen_width(), screen_height: default_screen_height(), tile_size: default_tile_size(), target_fps: default_target_fps(), show_hud: false } } }

impl ViewConfig {
    /// Visible columns (whole tiles only).
    #[inline]
    pub fn grid_width(&self) -> i32 {
        self.screen_width / self.tile_size
    }

    /// Visible rows (whole tiles only).
    #[inline]
    pub fn grid_height(&self) -> i32 {
        self.screen_height / self.tile_size
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct PlayerConfig {
    #[serde(default = "default_start")] pub start_x: i32,
    #[serde(default = "default_start")] pub start_y: i32,
}
fn default_start() -> i32 { 2 }
impl Default for PlayerConfig { fn default() -> Self { Self { start_x: default_start(), start_y: default_start() } } }

impl GameConfig {
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let cfg: GameConfig = toml::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let s = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&s)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let v = &self.view;
        if v.tile_size < 1 {
            return Err(ConfigError::Invalid(format!(
                "view.tile_size must be at least 1, got {}",
                v.tile_size
            )));
        }
        if v.screen_width < v.tile_size || v.screen_height < v.tile_size {
            return Err(ConfigError::Invalid(format!(
                "screen {}x{} is smaller than one {}px tile",
                v.screen_width, v.screen_height, v.tile_size
            )));
        }
        if v.target_fps == 0 {
            return Err(ConfigError::Invalid("view.target_fps must be positive".into()));
        }
        self.world.validate().map_err(ConfigError::Invalid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_grid_is_20_by_15() {
        let cfg = GameConfig::default();
        assert_eq!(cfg.view.grid_width(), 20);
        assert_eq!(cfg.view.grid_height(), 15);
        assert_eq!((cfg.player.start_x, cfg.player.start_y), (2, 2));
        assert_eq!(cfg.world.seed, 1234);
    }

    #[test]
    fn nested_tables_parse() {
        let src = r#"
            [view]
            tile_size = 20
            show_hud = true

            [world]
            seed = 99
            color_seed = 5

            [world.noise]
            octaves = 4

            [[world.biomes]]
            name = "ice"
            color = [220, 230, 255]
            probability = 1.0
        "#;
        let cfg = GameConfig::from_toml_str(src).unwrap();
        assert_eq!(cfg.view.grid_width(), 40);
        assert!(cfg.view.show_hud);
        assert_eq!(cfg.world.seed, 99);
        assert_eq!(cfg.world.color_seed, Some(5));
        assert_eq!(cfg.world.noise.octaves, 4);
        assert_eq!(cfg.world.biomes.len(), 1);
        assert_eq!(cfg.world.biomes[0].accent_probability, 0.0);
        assert_eq!(cfg.player.start_x, 2);
    }

    #[test]
    fn shipped_config_matches_defaults() {
        let cfg =
            GameConfig::from_toml_str(include_str!("../../../config/terrastep.toml")).unwrap();
        let def = GameConfig::default();
        assert_eq!(cfg.view, def.view);
        assert_eq!(cfg.player, def.player);
        assert_eq!(cfg.world.seed, def.world.seed);
        assert_eq!(cfg.world.color_seed, None);
        assert_eq!(cfg.world.noise, def.world.noise);
        assert_eq!(cfg.world.biomes, def.world.biomes);
    }

    #[test]
    fn zero_tile_size_is_invalid() {
        let err = GameConfig::from_toml_str("[view]\ntile_size = 0\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)), "{err}");
    }

    #[test]
    fn bad_world_is_invalid() {
        let err = GameConfig::from_toml_str("[world.noise]\nperiod = 0\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)), "{err}");
    }

    #[test]
    fn syntax_error_is_parse() {
        let err = GameConfig::from_toml_str("[view\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)), "{err}");
    }

    #[test]
    fn missing_file_is_read_error() {
        let err = GameConfig::load(Path::new("/definitely/not/here.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }), "{err}");
    }
}

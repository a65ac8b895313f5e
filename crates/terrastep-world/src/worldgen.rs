use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
pub struct WorldGenConfig {
    #[serde(default = "default_seed")] pub seed: i32,
    /// Seeds biome color draws. `None` draws from OS entropy, so colors differ between runs.
    #[serde(default)] pub color_seed: Option<u64>,
    #[serde(default)] pub noise: NoiseConfig,
    #[serde(default = "default_biomes")] pub biomes: Vec<BiomeConfig>,
}

fn default_seed() -> i32 { 1234 }

impl Default for WorldGenConfig {
    fn default() -> Self {
        Self {
            seed: default_seed(),
            color_seed: None,
            noise: NoiseConfig::default(),
            biomes: default_biomes(),
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct NoiseConfig {
    #[serde(default = "default_scale")] pub scale: f32,
    #[serde(default = "default_octaves")] pub octaves: i32,
    #[serde(default = "default_persistence")] pub persistence: f32,
    #[serde(default = "default_lacunarity")] pub lacunarity: f32,
    #[serde(default = "default_period")] pub period: i32,
}
fn default_scale() -> f32 { 10.0 }
fn default_octaves() -> i32 { 6 }
fn default_persistence() -> f32 { 0.5 }
fn default_lacunarity() -> f32 { 2.0 }
fn default_period() -> i32 { 1024 }
impl Default for NoiseConfig { fn default() -> Self { Self { scale: default_scale(), octaves: default_octaves(), persistence: default_persistence(), lacunarity: default_lacunarity(), period: default_period() } } }

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct BiomeConfig {
    pub name: String,
    pub color: [u8; 3],
    pub probability: f64,
    #[serde(default)] pub accent_probability: f64,
    #[serde(default)] pub accent_colors: Vec<[u8; 3]>,
}

// Declared order is claim order: green is tried before brown.
fn default_biomes() -> Vec<BiomeConfig> {
    vec![
        BiomeConfig {
            name: "green".into(),
            color: [117, 181, 142],
            probability: 0.8,
            accent_probability: 0.4,
            accent_colors: vec![[174, 211, 138], [139, 201, 116], [123, 189, 100]],
        },
        BiomeConfig {
            name: "brown".into(),
            color: [160, 95, 85],
            probability: 0.3,
            accent_probability: 0.5,
            accent_colors: vec![[198, 123, 102], [181, 94, 74], [157, 79, 61]],
        },
    ]
}

impl WorldGenConfig {
    pub fn validate(&self) -> Result<(), String> {
        let n = &self.noise;
        if n.scale.is_nan() || n.scale <= 0.0 {
            return Err(format!("noise.scale must be positive, got {}", n.scale));
        }
        if n.octaves < 1 {
            return Err(format!("noise.octaves must be at least 1, got {}", n.octaves));
        }
        if n.period < 1 {
            return Err(format!("noise.period must be at least 1, got {}", n.period));
        }
        for b in &self.biomes {
            let unit = 0.0..=1.0;
            if !unit.contains(&b.probability) {
                return Err(format!(
                    "biome {}: probability {} outside [0, 1]",
                    b.name, b.probability
                ));
            }
            if !unit.contains(&b.accent_probability) {
                return Err(format!(
                    "biome {}: accent_probability {} outside [0, 1]",
                    b.name, b.accent_probability
                ));
            }
        }
        Ok(())
    }
}

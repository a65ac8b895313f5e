//! Infinite tile terrain: coherent noise, biome coloring, and the materialize-once tile store.
#![forbid(unsafe_code)]

pub mod biome;
pub mod noise;
pub mod store;
pub mod worldgen;

pub use biome::{BiomeDefinition, BiomeDice, BiomeTable};
pub use noise::TileNoise;
pub use store::{RegionReport, TerrainStore, TerrainStoreStats, Tile};
pub use worldgen::{BiomeConfig, NoiseConfig, WorldGenConfig};

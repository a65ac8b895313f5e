//! Seeded, tileable fractal noise sampled per tile.

use fastnoise_lite::{FastNoiseLite, NoiseType};

use crate::worldgen::NoiseConfig;

pub struct TileNoise {
    noise: FastNoiseLite,
    params: NoiseConfig,
}

impl TileNoise {
    pub fn new(seed: i32, params: &NoiseConfig) -> Self {
        let mut noise = FastNoiseLite::with_seed(seed);
        noise.set_noise_type(Some(NoiseType::Perlin));
        // Octave frequencies are applied to the coordinates in `fractal2`.
        noise.set_frequency(Some(1.0));
        Self {
            noise,
            params: params.clone(),
        }
    }

    /// Noise for tile `(col, row)`, in roughly [-1, 1].
    pub fn sample(&self, col: i32, row: i32) -> f32 {
        let scale = self.params.scale;
        self.fractal2(col as f32 / scale, row as f32 / scale)
    }

    /// Normalized fBm. Every octave tiles on `period` in sample space.
    fn fractal2(&self, x: f32, y: f32) -> f32 {
        let period = self.params.period as f32;
        let mut amp = 1.0_f32;
        let mut freq = 1.0_f32;
        let mut sum = 0.0_f32;
        let mut max_amp = 0.0_f32;
        for _ in 0..self.params.octaves.max(1) {
            sum += self.tileable2(x * freq, y * freq, period * freq) * amp;
            max_amp += amp;
            amp *= self.params.persistence;
            freq *= self.params.lacunarity;
        }
        if max_amp > 0.0 { sum / max_amp } else { sum }
    }

    /// Noise that repeats every `wrap` units on both axes with no seam.
    /// Blends the field with its copies shifted back one period, weighted by
    /// the position inside the cell, so `wrap - e` meets `0` continuously.
    fn tileable2(&self, x: f32, y: f32, wrap: f32) -> f32 {
        let sx = x.rem_euclid(wrap);
        let sy = y.rem_euclid(wrap);
        let tx = sx / wrap;
        let ty = sy / wrap;
        let n = |a: f32, b: f32| self.noise.get_noise_2d(a, b);
        let near = n(sx, sy) * (1.0 - tx) + n(sx - wrap, sy) * tx;
        let far = n(sx, sy - wrap) * (1.0 - tx) + n(sx - wrap, sy - wrap) * tx;
        near * (1.0 - ty) + far * ty
    }
}

//! Static biome definitions and the first-success-wins color claim.

use rand::Rng;
use terrastep_geom::Rgb;

use crate::worldgen::BiomeConfig;

/// Source of the uniform draws used while coloring a tile.
pub trait BiomeDice {
    /// Uniform value in [0, 1).
    fn roll(&mut self) -> f64;
    /// Uniform index in `0..len`; `len` is never zero.
    fn pick(&mut self, len: usize) -> usize;
}

impl<R: Rng> BiomeDice for R {
    fn roll(&mut self) -> f64 {
        self.gen_range(0.0..1.0)
    }

    fn pick(&mut self, len: usize) -> usize {
        self.gen_range(0..len)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct BiomeDefinition {
    pub name: String,
    pub base_color: Rgb,
    pub selection_probability: f64,
    pub accent_probability: f64,
    pub accent_colors: Vec<Rgb>,
}

impl BiomeDefinition {
    pub fn from_config(cfg: &BiomeConfig) -> Self {
        let rgb = |c: [u8; 3]| Rgb::new(c[0], c[1], c[2]);
        Self {
            name: cfg.name.clone(),
            base_color: rgb(cfg.color),
            selection_probability: cfg.probability,
            accent_probability: cfg.accent_probability,
            accent_colors: cfg.accent_colors.iter().copied().map(rgb).collect(),
        }
    }

    /// One selection trial. On success returns the tile color (base or a random accent).
    pub fn trial<D: BiomeDice + ?Sized>(&self, dice: &mut D) -> Option<Rgb> {
        if dice.roll() > self.selection_probability {
            return None;
        }
        if dice.roll() < self.accent_probability && !self.accent_colors.is_empty() {
            let i = dice.pick(self.accent_colors.len());
            return Some(self.accent_colors[i.min(self.accent_colors.len() - 1)]);
        }
        Some(self.base_color)
    }

    /// Every color this biome can produce.
    pub fn palette(&self) -> impl Iterator<Item = Rgb> + '_ {
        std::iter::once(self.base_color).chain(self.accent_colors.iter().copied())
    }
}

/// Biomes in claim order.
#[derive(Clone, Debug, PartialEq)]
pub struct BiomeTable {
    biomes: Vec<BiomeDefinition>,
}

impl BiomeTable {
    pub fn new(biomes: Vec<BiomeDefinition>) -> Self {
        Self { biomes }
    }

    pub fn from_config(cfgs: &[BiomeConfig]) -> Self {
        Self::new(cfgs.iter().map(BiomeDefinition::from_config).collect())
    }

    pub fn biomes(&self) -> &[BiomeDefinition] {
        &self.biomes
    }

    pub fn get(&self, name: &str) -> Option<&BiomeDefinition> {
        self.biomes.iter().find(|b| b.name == name)
    }

    /// Tries each biome in order; the first successful trial colors the tile.
    /// `None` means no biome claimed it.
    pub fn claim<D: BiomeDice + ?Sized>(&self, dice: &mut D) -> Option<Rgb> {
        self.biomes.iter().find_map(|b| b.trial(dice))
    }
}

impl Default for BiomeTable {
    fn default() -> Self {
        Self::from_config(&crate::worldgen::WorldGenConfig::default().biomes)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::collections::VecDeque;

    /// Replays fixed rolls and picks; panics when a draw was not scripted.
    #[derive(Default)]
    pub(crate) struct ScriptedDice {
        pub rolls: VecDeque<f64>,
        pub picks: VecDeque<usize>,
    }

    impl ScriptedDice {
        pub fn new(rolls: &[f64], picks: &[usize]) -> Self {
            Self {
                rolls: rolls.iter().copied().collect(),
                picks: picks.iter().copied().collect(),
            }
        }
    }

    impl BiomeDice for ScriptedDice {
        fn roll(&mut self) -> f64 {
            self.rolls.pop_front().expect("unscripted roll")
        }
        fn pick(&mut self, len: usize) -> usize {
            let i = self.picks.pop_front().expect("unscripted pick");
            assert!(i < len);
            i
        }
    }

    fn table() -> BiomeTable {
        BiomeTable::default()
    }

    #[test]
    fn green_wins_when_its_trial_succeeds() {
        let t = table();
        // green selected, no accent; brown is never consulted
        let mut dice = ScriptedDice::new(&[0.1, 0.9], &[]);
        assert_eq!(t.claim(&mut dice), Some(Rgb::new(117, 181, 142)));
        assert!(dice.rolls.is_empty());
    }

    #[test]
    fn green_accent_uses_pick() {
        let t = table();
        let mut dice = ScriptedDice::new(&[0.8, 0.39], &[2]);
        assert_eq!(t.claim(&mut dice), Some(Rgb::new(123, 189, 100)));
    }

    #[test]
    fn selection_is_inclusive_accent_is_exclusive() {
        let t = table();
        // roll == selection probability still selects; roll == accent probability does not accent
        let mut dice = ScriptedDice::new(&[0.8, 0.4], &[]);
        assert_eq!(t.claim(&mut dice), Some(Rgb::new(117, 181, 142)));
    }

    #[test]
    fn brown_claims_after_green_fails() {
        let t = table();
        let mut dice = ScriptedDice::new(&[0.95, 0.2, 0.1], &[0]);
        assert_eq!(t.claim(&mut dice), Some(Rgb::new(198, 123, 102)));
    }

    #[test]
    fn nobody_claims() {
        let t = table();
        let mut dice = ScriptedDice::new(&[0.95, 0.31], &[]);
        assert_eq!(t.claim(&mut dice), None);
        assert!(dice.rolls.is_empty());
    }

    #[test]
    fn empty_accent_list_falls_back_to_base() {
        let b = BiomeDefinition {
            name: "plain".into(),
            base_color: Rgb::new(1, 2, 3),
            selection_probability: 1.0,
            accent_probability: 1.0,
            accent_colors: Vec::new(),
        };
        let mut dice = ScriptedDice::new(&[0.0, 0.0], &[]);
        assert_eq!(b.trial(&mut dice), Some(Rgb::new(1, 2, 3)));
    }

    #[test]
    fn rng_dice_stay_in_palette() {
        use rand::SeedableRng;
        let t = table();
        let mut rng = rand::rngs::StdRng::seed_from_u64(7);
        let all: Vec<Rgb> = t.biomes().iter().flat_map(|b| b.palette()).collect();
        for _ in 0..500 {
            if let Some(c) = t.claim(&mut rng) {
                assert!(all.contains(&c));
            }
        }
    }
}

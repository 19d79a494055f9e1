use derive_builder::Builder;
use rand::{
    distributions::{Distribution, Standard},
    Rng,
};
use ratatui::style::Color;
use strum::{Display, VariantArray};
use tracing::trace;

use super::{position::PositionMap, Tree};
use crate::{config::LightConfig, constants::tree};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, VariantArray)]
pub enum Hue {
    Red,
    Purple,
    Blue,
    Orange,
    Yellow,
}

impl Hue {
    pub fn color(self) -> Color {
        tree::ORNAMENT_COLORS[self as usize]
    }
}

impl Distribution<Hue> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Hue {
        Hue::VARIANTS[rng.gen_range(0..Hue::VARIANTS.len())]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, VariantArray)]
pub enum Glyph {
    Star,
    Diamond,
    Ball,
    Suit,
}

impl Glyph {
    pub fn symbol(self) -> char {
        tree::ORNAMENT_GLYPHS[self as usize]
    }
}

impl Distribution<Glyph> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Glyph {
        Glyph::VARIANTS[rng.gen_range(0..Glyph::VARIANTS.len())]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Builder)]
pub struct Light {
    pub layer: usize,
    pub column: usize,
    pub hue: Hue,
    pub glyph: Glyph,
    #[builder(default = "true")]
    pub on: bool,
}

impl Light {
    fn random<R: Rng + ?Sized>(layer: usize, column: usize, rng: &mut R) -> Self {
        Self { layer, column, hue: rng.gen(), glyph: rng.gen(), on: true }
    }

    fn step<R: Rng + ?Sized>(&mut self, tree: &Tree, rules: &LightConfig, rng: &mut R) {
        // A draw that lands on a narrow layer leaves the light where it is.
        if rng.gen_bool(rules.move_chance) {
            if let Some((layer, column)) = tree.sample_slot(rng) {
                self.layer = layer;
                self.column = column;
            }
        }

        if rng.gen_bool(rules.off_chance) {
            self.on = false;
        } else {
            self.on = true;
            if rng.gen_bool(rules.recolor_chance) {
                self.hue = rng.gen();
                self.glyph = rng.gen();
            }
        }
    }
}

/// All ornaments on the tree. Lives for the whole run and is mutated in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LightSet {
    lights: Vec<Light>,
}

impl From<Vec<Light>> for LightSet {
    fn from(lights: Vec<Light>) -> Self {
        Self { lights }
    }
}

impl LightSet {
    /// Hangs between `min_lights` and `max_lights` ornaments. Draws that hit a
    /// narrow layer are dropped, so the set may end up smaller.
    pub fn initialize<R: Rng + ?Sized>(tree: &Tree, rules: &LightConfig, rng: &mut R) -> Self {
        let target = rng.gen_range(rules.min_lights..=rules.max_lights);
        let mut lights = Vec::with_capacity(target);
        for _ in 0..target {
            if let Some((layer, column)) = tree.sample_slot(rng) {
                lights.push(Light::random(layer, column, rng));
            }
        }
        trace!(wanted = target, hung = lights.len(), "initialized lights");
        Self { lights }
    }

    pub fn advance<R: Rng + ?Sized>(&mut self, tree: &Tree, rules: &LightConfig, rng: &mut R) {
        for light in self.lights.iter_mut() {
            light.step(tree, rules, rng);
        }
    }

    pub fn project(&self, tree: &Tree) -> PositionMap {
        PositionMap::project(tree, &self.lights)
    }

    pub fn lights(&self) -> &[Light] {
        &self.lights
    }

    pub fn len(&self) -> usize {
        self.lights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lights.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;
    use crate::{config::Config, scene::Layer};

    fn rules() -> LightConfig {
        Config::new().unwrap().lights
    }

    fn assert_in_bounds(tree: &Tree, set: &LightSet) {
        for light in set.lights() {
            assert!((1..=6).contains(&light.layer), "layer out of range: {light:?}");
            let layer = tree.layers()[light.layer];
            assert!(layer.can_hold_lights());
            assert!((1..=layer.width - 2).contains(&light.column), "column out of range: {light:?}");
        }
    }

    #[test]
    fn test_initialize_bounds() {
        let tree = Tree::default();
        for seed in 0..200 {
            let mut rng = StdRng::seed_from_u64(seed);
            let set = LightSet::initialize(&tree, &rules(), &mut rng);
            // Every lit layer of the default tree is wide enough, so nothing is skipped.
            assert!((8..=10).contains(&set.len()));
            assert!(set.lights().iter().all(|light| light.on));
            assert_in_bounds(&tree, &set);
        }
    }

    #[test]
    fn test_advance_preserves_bounds() {
        let tree = Tree::default();
        let mut rng = StdRng::seed_from_u64(2024);
        let mut set = LightSet::initialize(&tree, &rules(), &mut rng);
        let count = set.len();
        for _ in 0..500 {
            set.advance(&tree, &rules(), &mut rng);
            assert_in_bounds(&tree, &set);
            assert_eq!(set.len(), count);
        }
    }

    #[test]
    fn test_initialize_skips_narrow_layers() {
        const NARROW: [Layer; 3] = [Layer::new(1, 2), Layer::new(2, 1), Layer::new(2, 0)];
        let tree = Tree::new(&NARROW);
        let mut rng = StdRng::seed_from_u64(1);
        let set = LightSet::initialize(&tree, &rules(), &mut rng);
        assert!(set.is_empty());
    }

    #[test]
    fn test_failed_relocation_keeps_placement() {
        // Layer 1 can hold lights but layer 2 cannot; a light parked on layer 1
        // either stays put or moves within layer 1.
        const MIXED: [Layer; 3] = [Layer::new(1, 2), Layer::new(3, 1), Layer::new(2, 0)];
        let tree = Tree::new(&MIXED);
        let mut rules = rules();
        rules.move_chance = 1.0;
        let mut set = LightSet::from(vec![LightBuilder::default()
            .layer(1)
            .column(1)
            .hue(Hue::Red)
            .glyph(Glyph::Star)
            .build()
            .unwrap()]);
        let mut rng = StdRng::seed_from_u64(99);
        for _ in 0..200 {
            set.advance(&tree, &rules, &mut rng);
            assert_eq!(set.lights()[0].layer, 1);
            assert_eq!(set.lights()[0].column, 1);
        }
    }

    #[test]
    fn test_never_off_never_moves() {
        let tree = Tree::default();
        let mut rules = rules();
        rules.move_chance = 0.0;
        rules.off_chance = 0.0;
        rules.recolor_chance = 0.0;
        let mut rng = StdRng::seed_from_u64(5);
        let mut set = LightSet::initialize(&tree, &rules, &mut rng);
        let before = set.clone();
        set.advance(&tree, &rules, &mut rng);
        assert_eq!(set, before);
    }

    #[test]
    fn test_advance_relocates_light() {
        let tree = Tree::default();
        let mut rules = rules();
        rules.move_chance = 1.0;
        let start = (3, 3);
        let mut set = LightSet::from(vec![LightBuilder::default()
            .layer(start.0)
            .column(start.1)
            .hue(Hue::Red)
            .glyph(Glyph::Star)
            .build()
            .unwrap()]);
        let mut rng = StdRng::seed_from_u64(42);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..20 {
            set.advance(&tree, &rules, &mut rng);
            let light = &set.lights()[0];
            seen.insert((light.layer, light.column));
        }
        // Seeded draws over the 36 interior cells do not all land on the start cell.
        assert!(seen.iter().any(|slot| *slot != start));
        assert!(seen.len() > 1);
    }

    #[test]
    fn test_advance_recolors_light() {
        let tree = Tree::default();
        let mut rules = rules();
        rules.move_chance = 0.0;
        rules.off_chance = 0.0;
        rules.recolor_chance = 1.0;
        let mut set = LightSet::from(vec![LightBuilder::default()
            .layer(2)
            .column(2)
            .hue(Hue::Red)
            .glyph(Glyph::Star)
            .build()
            .unwrap()]);
        let mut rng = StdRng::seed_from_u64(42);
        let mut looks = std::collections::HashSet::new();
        for _ in 0..20 {
            set.advance(&tree, &rules, &mut rng);
            let light = &set.lights()[0];
            assert!(light.on);
            assert_eq!((light.layer, light.column), (2, 2));
            looks.insert((light.hue, light.glyph));
        }
        assert!(looks.iter().any(|look| *look != (Hue::Red, Glyph::Star)));
        assert!(looks.len() > 1);
    }

    #[test]
    fn test_always_off() {
        let tree = Tree::default();
        let mut rules = rules();
        rules.off_chance = 1.0;
        let mut rng = StdRng::seed_from_u64(5);
        let mut set = LightSet::initialize(&tree, &rules, &mut rng);
        set.advance(&tree, &rules, &mut rng);
        assert!(set.lights().iter().all(|light| !light.on));
        assert!(set.project(&tree).is_empty());
    }

    #[test]
    fn test_off_light_turns_back_on() {
        let tree = Tree::default();
        let mut rules = rules();
        rules.off_chance = 0.0;
        let mut set = LightSet::from(vec![LightBuilder::default()
            .layer(2)
            .column(2)
            .hue(Hue::Blue)
            .glyph(Glyph::Ball)
            .on(false)
            .build()
            .unwrap()]);
        let mut rng = StdRng::seed_from_u64(3);
        set.advance(&tree, &rules, &mut rng);
        assert!(set.lights()[0].on);
    }

    #[test]
    fn test_recolor_covers_every_variant() {
        let mut rng = StdRng::seed_from_u64(11);
        let hues: std::collections::HashSet<Hue> = (0..500).map(|_| rng.gen()).collect();
        let glyphs: std::collections::HashSet<Glyph> = (0..500).map(|_| rng.gen()).collect();
        assert_eq!(hues.len(), Hue::VARIANTS.len());
        assert_eq!(glyphs.len(), Glyph::VARIANTS.len());
    }

    #[test]
    fn test_glyph_symbols() {
        let symbols: String = Glyph::VARIANTS.iter().map(|glyph| glyph.symbol()).collect();
        assert_eq!(symbols, "★◆●♦");
        assert_eq!(Hue::Purple.color(), Color::Indexed(129));
        assert_eq!(Hue::Orange.color(), Color::Indexed(208));
    }
}

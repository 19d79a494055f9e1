pub mod light;
pub mod position;

use rand::Rng;

use crate::constants::tree;

/// One horizontal row of the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layer {
    pub width: usize,
    pub indent: usize,
}

impl Layer {
    pub const fn new(width: usize, indent: usize) -> Self {
        Self { width, indent }
    }

    /// Whether ornaments may hang on this layer at all.
    pub fn can_hold_lights(&self) -> bool {
        self.width > 2
    }

    /// Edges never carry ornaments.
    pub fn is_interior(&self, column: usize) -> bool {
        self.can_hold_lights() && column >= 1 && column < self.width - 1
    }
}

/// Fixed tree geometry. Layer 0 sits right under the star and never carries lights.
#[derive(Debug, Clone, Copy)]
pub struct Tree {
    layers: &'static [Layer],
}

impl Default for Tree {
    fn default() -> Self {
        Self::new(&tree::LAYERS)
    }
}

impl Tree {
    pub const fn new(layers: &'static [Layer]) -> Self {
        Self { layers }
    }

    pub fn layers(&self) -> &'static [Layer] {
        self.layers
    }

    /// Layer at `index` if lights are allowed there (never layer 0).
    pub fn lit_layer(&self, index: usize) -> Option<&Layer> {
        if index == 0 {
            return None;
        }
        self.layers.get(index)
    }

    /// Column the star and trunk are drawn at.
    pub fn center(&self) -> usize {
        self.layers.first().map(|top| top.indent + top.width / 2).unwrap_or(0)
    }

    /// Draws a layer from `[1, last]` and an interior column of it.
    ///
    /// Returns `None` when the drawn layer is too narrow; callers drop the
    /// placement instead of drawing again.
    pub fn sample_slot<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<(usize, usize)> {
        if self.layers.len() < 2 {
            return None;
        }
        let index = rng.gen_range(1..self.layers.len());
        let layer = self.layers[index];
        if !layer.can_hold_lights() {
            return None;
        }
        let column = rng.gen_range(1..=layer.width - 2);
        Some((index, column))
    }
}

use std::collections::HashMap;

use derive_deref::{Deref, DerefMut};

use super::{
    light::{Glyph, Hue, Light},
    Tree,
};

/// A tree cell, addressed by its layer's indent and the column within the layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PositionKey {
    pub indent: usize,
    pub column: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Appearance {
    pub hue: Hue,
    pub glyph: Glyph,
}

/// Ornaments lit in the current frame.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deref, DerefMut)]
pub struct PositionMap(pub HashMap<PositionKey, Appearance>);

impl PositionMap {
    /// Builds the map from the live lights. Lights that are off or no longer
    /// sit on an interior cell of a lit layer are left out.
    pub fn project(tree: &Tree, lights: &[Light]) -> Self {
        let mut map = HashMap::new();
        for light in lights.iter().filter(|light| light.on) {
            let Some(layer) = tree.lit_layer(light.layer) else {
                continue;
            };
            if !layer.is_interior(light.column) {
                continue;
            }
            map.insert(
                PositionKey { indent: layer.indent, column: light.column },
                Appearance { hue: light.hue, glyph: light.glyph },
            );
        }
        Self(map)
    }

    pub fn appearance_at(&self, indent: usize, column: usize) -> Option<&Appearance> {
        self.get(&PositionKey { indent, column })
    }
}

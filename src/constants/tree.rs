use ratatui::style::Color;

use crate::scene::Layer;

/// Tree rows from the top (under the star) to the bottom.
pub const LAYERS: [Layer; 7] = [
    Layer::new(1, 19),
    Layer::new(3, 18),
    Layer::new(5, 17),
    Layer::new(7, 16),
    Layer::new(9, 15),
    Layer::new(11, 14),
    Layer::new(13, 13),
];

pub const STAR: char = '★';
pub const STAR_COLOR: Color = Color::LightYellow;

pub const BODY: char = '█';
pub const BODY_COLOR: Color = Color::Green;

pub const TRUNK: char = '█';
pub const TRUNK_COLOR: Color = Color::Indexed(130);

pub const GREETING_INDENT: usize = 12;
pub const GREETING_COLOR: Color = Color::LightRed;
pub const FAREWELL_COLOR: Color = Color::LightCyan;

// Indexed by `Hue as usize`
pub const ORNAMENT_COLORS: [Color; 5] =
    [Color::LightRed, Color::Indexed(129), Color::LightBlue, Color::Indexed(208), Color::LightYellow];

// Indexed by `Glyph as usize`
pub const ORNAMENT_GLYPHS: [char; 4] = ['★', '◆', '●', '♦'];

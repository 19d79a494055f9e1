use derive_builder::Builder;
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span, Text},
};

use crate::{
    constants::tree,
    scene::{position::PositionMap, Tree},
};

/// Draws the tree, its lit ornaments and the greeting underneath.
#[derive(Debug, Clone, Builder)]
pub struct TreeRenderer {
    #[builder(default)]
    tree: Tree,
    #[builder(setter(into))]
    greeting: String,
}

fn pad(width: usize) -> Span<'static> {
    Span::raw(" ".repeat(width))
}

fn cell(symbol: char, style: Style) -> Span<'static> {
    Span::styled(symbol.to_string(), style)
}

impl TreeRenderer {
    pub fn render(&self, positions: &PositionMap) -> Text<'static> {
        let center = self.tree.center();
        let bold = Style::default().add_modifier(Modifier::BOLD);
        let body = Style::default().fg(tree::BODY_COLOR);

        let mut lines = Vec::with_capacity(self.tree.layers().len() + 4);
        lines.push(Line::from(vec![pad(center), cell(tree::STAR, bold.fg(tree::STAR_COLOR))]));

        for layer in self.tree.layers() {
            let mut spans = Vec::with_capacity(layer.width + 1);
            spans.push(pad(layer.indent));
            spans.extend((0..layer.width).map(|column| match positions.appearance_at(layer.indent, column) {
                Some(ornament) => cell(ornament.glyph.symbol(), bold.fg(ornament.hue.color())),
                None => cell(tree::BODY, body),
            }));
            lines.push(Line::from(spans));
        }

        lines.push(Line::from(vec![pad(center), cell(tree::TRUNK, Style::default().fg(tree::TRUNK_COLOR))]));
        lines.push(Line::default());
        lines.push(Line::from(vec![
            pad(tree::GREETING_INDENT),
            Span::styled(self.greeting.clone(), Style::default().fg(tree::GREETING_COLOR)),
        ]));

        Text::from(lines)
    }
}

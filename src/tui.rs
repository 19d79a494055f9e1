use std::io::{self, Stdout, Write};

use color_eyre::eyre::Result;
use crossterm::{
    cursor, queue,
    style::{Attribute, Color as CColor, ContentStyle, Print, ResetColor, SetStyle},
    terminal::{Clear, ClearType},
};
use ratatui::{
    style::{Color, Modifier},
    text::{Line, Span},
};

/// Where frames end up. Kept minimal so the driver can run against memory in tests.
pub trait Surface {
    fn clear(&mut self) -> Result<()>;

    fn write_line(&mut self, line: &Line<'_>) -> Result<()>;

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }

    fn enter(&mut self) -> Result<()> {
        Ok(())
    }

    fn exit(&mut self) -> Result<()> {
        Ok(())
    }
}

/// ANSI terminal output. Every styled span is followed by a reset.
pub struct Tui<W: Write> {
    out: W,
}

impl Tui<Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> Tui<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_span(&mut self, span: &Span<'_>) -> Result<()> {
        let mut style = ContentStyle::new();
        style.foreground_color = span.style.fg.map(to_crossterm);
        style.background_color = span.style.bg.map(to_crossterm);
        if span.style.add_modifier.contains(Modifier::BOLD) {
            style.attributes.set(Attribute::Bold);
        }

        if style.foreground_color.is_none() && style.background_color.is_none() && style.attributes.is_empty() {
            queue!(self.out, Print(&span.content))?;
        } else {
            queue!(self.out, SetStyle(style), Print(&span.content), ResetColor)?;
        }
        Ok(())
    }
}

impl<W: Write> Surface for Tui<W> {
    fn clear(&mut self) -> Result<()> {
        queue!(self.out, Clear(ClearType::All), cursor::MoveTo(0, 0))?;
        Ok(())
    }

    fn write_line(&mut self, line: &Line<'_>) -> Result<()> {
        for span in &line.spans {
            self.write_span(span)?;
        }
        queue!(self.out, Print("\n"))?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }

    fn enter(&mut self) -> Result<()> {
        queue!(self.out, cursor::Hide)?;
        self.flush()
    }

    fn exit(&mut self) -> Result<()> {
        queue!(self.out, ResetColor, cursor::Show)?;
        self.flush()
    }
}

/// Puts the terminal back in a usable state after a crash.
pub fn restore() -> Result<()> {
    Tui::stdout().exit()
}

fn to_crossterm(color: Color) -> CColor {
    match color {
        Color::Reset => CColor::Reset,
        Color::Black => CColor::Black,
        Color::Red => CColor::DarkRed,
        Color::Green => CColor::DarkGreen,
        Color::Yellow => CColor::DarkYellow,
        Color::Blue => CColor::DarkBlue,
        Color::Magenta => CColor::DarkMagenta,
        Color::Cyan => CColor::DarkCyan,
        Color::Gray => CColor::Grey,
        Color::DarkGray => CColor::DarkGrey,
        Color::LightRed => CColor::Red,
        Color::LightGreen => CColor::Green,
        Color::LightYellow => CColor::Yellow,
        Color::LightBlue => CColor::Blue,
        Color::LightMagenta => CColor::Magenta,
        Color::LightCyan => CColor::Cyan,
        Color::White => CColor::White,
        Color::Rgb(r, g, b) => CColor::Rgb { r, g, b },
        Color::Indexed(i) => CColor::AnsiValue(i),
    }
}

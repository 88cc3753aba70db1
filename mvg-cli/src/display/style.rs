//! Terminal styling.
//!
//! Formatters produce [`Styled`] text; the table renderer decides whether
//! to emit ANSI escapes or plain text.

use std::fmt::Write;

use crate::domain::TransportType;

/// Foreground color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Rgb(u8, u8, u8),
    Red,
    Green,
    Cyan,
}

impl Color {
    /// Parse a `#rrggbb` hex color.
    pub const fn hex(rgb: u32) -> Self {
        Color::Rgb((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8)
    }

    fn write_ansi(&self, out: &mut String) {
        match self {
            Color::Rgb(r, g, b) => {
                let _ = write!(out, "38;2;{r};{g};{b}");
            }
            Color::Red => out.push_str("31"),
            Color::Green => out.push_str("32"),
            Color::Cyan => out.push_str("36"),
        }
    }
}

/// Text attributes for a cell or a whole row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Style {
    pub fg: Option<Color>,
    pub bold: bool,
    pub dim: bool,
}

impl Style {
    pub const PLAIN: Style = Style {
        fg: None,
        bold: false,
        dim: false,
    };

    pub const fn fg(color: Color) -> Self {
        Style {
            fg: Some(color),
            bold: false,
            dim: false,
        }
    }

    pub const fn dim() -> Self {
        Style {
            fg: None,
            bold: false,
            dim: true,
        }
    }

    pub const fn bold() -> Self {
        Style {
            fg: None,
            bold: true,
            dim: false,
        }
    }

    /// Lay `other` over `self`; set attributes in either survive.
    pub fn patch(self, other: Style) -> Style {
        Style {
            fg: other.fg.or(self.fg),
            bold: self.bold || other.bold,
            dim: self.dim || other.dim,
        }
    }

    pub fn is_plain(&self) -> bool {
        *self == Style::PLAIN
    }

    /// SGR escape that switches this style on, or `None` when plain.
    fn ansi_prefix(&self) -> Option<String> {
        if self.is_plain() {
            return None;
        }
        let mut codes = Vec::new();
        if self.bold {
            codes.push("1".to_string());
        }
        if self.dim {
            codes.push("2".to_string());
        }
        if let Some(fg) = self.fg {
            let mut s = String::new();
            fg.write_ansi(&mut s);
            codes.push(s);
        }
        Some(format!("\x1b[{}m", codes.join(";")))
    }
}

const RESET: &str = "\x1b[0m";

/// A run of text with one style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Styled {
    pub text: String,
    pub style: Style,
}

impl Styled {
    pub fn new(text: impl Into<String>, style: Style) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, Style::PLAIN)
    }

    /// Display width in terminal columns, ignoring styling.
    pub fn width(&self) -> usize {
        self.text.chars().count()
    }

    /// Write the text, wrapped in escapes when `color` is on.
    pub fn render(&self, base: Style, color: bool, out: &mut String) {
        let style = base.patch(self.style);
        match style.ansi_prefix().filter(|_| color) {
            Some(prefix) => {
                out.push_str(&prefix);
                out.push_str(&self.text);
                out.push_str(RESET);
            }
            None => out.push_str(&self.text),
        }
    }
}

/// Brand color per transport type.
const LINE_COLORS: &[(TransportType, Color)] = &[
    (TransportType::Ubahn, Color::hex(0x007AD1)),
    (TransportType::Sbahn, Color::hex(0x008D4F)),
    (TransportType::Tram, Color::hex(0xE30613)),
    (TransportType::Bus, Color::hex(0x0088A3)),
    (TransportType::RegionalBus, Color::hex(0x0088A3)),
    (TransportType::Bahn, Color::hex(0xFFFFFF)),
];

/// Used for any type missing from the table.
pub const DEFAULT_LINE_COLOR: Color = Color::Cyan;

/// The color a line label is drawn in.
pub fn line_color(transport_type: TransportType) -> Color {
    LINE_COLORS
        .iter()
        .find(|(ty, _)| *ty == transport_type)
        .map(|(_, c)| *c)
        .unwrap_or(DEFAULT_LINE_COLOR)
}

/// A line label in its transport type's color.
pub fn line_label(label: &str, transport_type: TransportType) -> Styled {
    Styled::new(label, Style::fg(line_color(transport_type)))
}

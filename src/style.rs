//! Text styling for rendered cells.
//!
//! A [`Style`] carries attribute flags and the standard foreground and
//! background colors. Styling is applied after a cell line has been padded
//! and aligned, so escape sequences never participate in width math.

use bitflags::bitflags;

/// Output form a table is rendered into.
///
/// Only [`OutputKind::Console`] produces styled output today. The two text
/// forms are declared extension points: content passes through them
/// unstyled, and their grid rendering is not specialized yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OutputKind {
    /// ANSI terminal output.
    #[default]
    Console,
    /// reStructuredText output (declared, not specialized).
    ReStructuredText,
    /// Markdown output (declared, not specialized).
    Markdown,
}

bitflags! {
    /// Text attribute flags.
    ///
    /// Each flag corresponds to a pair of ANSI SGR codes (set and unset).
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Attributes: u8 {
        /// Bold text (SGR 1 / 22).
        const BOLD      = 1 << 0;
        /// Italic text (SGR 3 / 23).
        const ITALIC    = 1 << 1;
        /// Underlined text (SGR 4 / 24).
        const UNDERLINE = 1 << 2;
    }
}

/// Standard ANSI colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
}

impl Color {
    /// ANSI SGR code selecting this color as the foreground.
    #[must_use]
    pub const fn foreground_code(self) -> u8 {
        match self {
            Self::Black => 30,
            Self::Red => 31,
            Self::Green => 32,
            Self::Yellow => 33,
            Self::Blue => 34,
            Self::Magenta => 35,
            Self::Cyan => 36,
            Self::White => 37,
        }
    }

    /// ANSI SGR code selecting this color as the background.
    #[must_use]
    pub const fn background_code(self) -> u8 {
        self.foreground_code() + 10
    }
}

/// Visual style of a cell's text.
///
/// Built with consuming setters:
///
/// ```rust
/// use textgrid::style::{Color, Style};
///
/// let style = Style::new().bold().foreground(Color::Red);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Style {
    /// Enabled attributes.
    pub attributes: Attributes,
    /// Foreground color.
    pub foreground: Option<Color>,
    /// Background color.
    pub background: Option<Color>,
}

impl Style {
    /// Create a plain style.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if the style changes nothing.
    #[must_use]
    pub const fn is_plain(&self) -> bool {
        self.attributes.is_empty() && self.foreground.is_none() && self.background.is_none()
    }

    /// Enable bold text.
    #[must_use]
    pub fn bold(mut self) -> Self {
        self.attributes.insert(Attributes::BOLD);
        self
    }

    /// Enable italic text.
    #[must_use]
    pub fn italic(mut self) -> Self {
        self.attributes.insert(Attributes::ITALIC);
        self
    }

    /// Enable underlined text.
    #[must_use]
    pub fn underline(mut self) -> Self {
        self.attributes.insert(Attributes::UNDERLINE);
        self
    }

    /// Set the foreground color.
    #[must_use]
    pub fn foreground(mut self, color: Color) -> Self {
        self.foreground = Some(color);
        self
    }

    /// Set the background color.
    #[must_use]
    pub fn background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    /// Extra cells the styling itself occupies in the given output form.
    ///
    /// Console escape sequences occupy no cells, and the declared text forms
    /// pass content through unstyled, so the overhead is currently always
    /// zero. Cell measurement subtracts it anyway so that a decorated output
    /// form can reserve room without touching the layout protocol.
    #[must_use]
    pub fn overhead(&self, output: OutputKind) -> usize {
        match output {
            OutputKind::Console | OutputKind::ReStructuredText | OutputKind::Markdown => 0,
        }
    }

    /// Apply the style to a fully laid-out line.
    ///
    /// Attributes wrap innermost, then the foreground, then the background,
    /// each closed by its own unset sequence. Plain styles and non-console
    /// outputs return the text unchanged.
    #[must_use]
    pub fn apply(&self, text: &str, output: OutputKind) -> String {
        if output != OutputKind::Console || self.is_plain() {
            return text.to_string();
        }

        let mut result = text.to_string();
        if self.attributes.contains(Attributes::BOLD) {
            result = format!("\x1b[1m{result}\x1b[22m");
        }
        if self.attributes.contains(Attributes::ITALIC) {
            result = format!("\x1b[3m{result}\x1b[23m");
        }
        if self.attributes.contains(Attributes::UNDERLINE) {
            result = format!("\x1b[4m{result}\x1b[24m");
        }
        if let Some(color) = self.foreground {
            result = format!("\x1b[{}m{result}\x1b[0m", color.foreground_code());
        }
        if let Some(color) = self.background {
            result = format!("\x1b[{}m{result}\x1b[0m", color.background_code());
        }
        result
    }
}

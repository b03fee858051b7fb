//! Colors and text attributes for cell decoration.
//!
//! A [`Colors`] value is a list of [`Color`]s which is rendered as one SGR
//! (Select Graphic Rendition) escape sequence around the decorated text:
//!
//! ```
//! use biscuit_table::{BasicColor, Color, Colors, Attribute};
//!
//! let colors = Colors::new(vec![Color::Fg(BasicColor::Green), Color::Attr(Attribute::Bold)]);
//! assert_eq!(colors.paint("ok"), "\x1b[32;1mok\x1b[0m");
//! assert_eq!(Colors::default().paint("plain"), "plain");
//! ```
//!
//! Decoration never takes part in layout; widths are always measured on the
//! undecorated text.

use serde::{Deserialize, Serialize};

/// A single byte value (0-255) representing one RGB color channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Octet(u8);

impl Octet {
    /// Creates a new `Octet` from a `u8` value.
    #[inline]
    pub const fn new(value: u8) -> Self {
        Self(value)
    }

    /// Returns the inner `u8` value.
    #[inline]
    pub const fn value(self) -> u8 {
        self.0
    }
}

impl From<u8> for Octet {
    #[inline]
    fn from(value: u8) -> Self {
        Self(value)
    }
}

/// Basic 8 color mode (ANSI colors 0-7 and bright variants 8-15).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BasicColor {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    BrightBlack,
    BrightRed,
    BrightGreen,
    BrightYellow,
    BrightBlue,
    BrightMagenta,
    BrightCyan,
    BrightWhite,
}

impl BasicColor {
    /// The SGR code for this color as a foreground color.
    pub const fn fg_code(self) -> u8 {
        match self {
            BasicColor::Black => 30,
            BasicColor::Red => 31,
            BasicColor::Green => 32,
            BasicColor::Yellow => 33,
            BasicColor::Blue => 34,
            BasicColor::Magenta => 35,
            BasicColor::Cyan => 36,
            BasicColor::White => 37,
            BasicColor::BrightBlack => 90,
            BasicColor::BrightRed => 91,
            BasicColor::BrightGreen => 92,
            BasicColor::BrightYellow => 93,
            BasicColor::BrightBlue => 94,
            BasicColor::BrightMagenta => 95,
            BasicColor::BrightCyan => 96,
            BasicColor::BrightWhite => 97,
        }
    }

    /// The SGR code for this color as a background color.
    #[inline]
    pub const fn bg_code(self) -> u8 {
        self.fg_code() + 10
    }
}

/// A 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RgbColor {
    red: Octet,
    green: Octet,
    blue: Octet,
}

impl RgbColor {
    /// Creates a new RGB color with the specified channel values.
    #[inline]
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self {
            red: Octet::new(red),
            green: Octet::new(green),
            blue: Octet::new(blue),
        }
    }

    /// Returns the red channel value.
    #[inline]
    pub const fn red(&self) -> u8 {
        self.red.value()
    }

    /// Returns the green channel value.
    #[inline]
    pub const fn green(&self) -> u8 {
        self.green.value()
    }

    /// Returns the blue channel value.
    #[inline]
    pub const fn blue(&self) -> u8 {
        self.blue.value()
    }
}

/// Text attributes which are not colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Attribute {
    Bold,
    Faint,
    Italic,
    Underline,
    Blink,
    Reverse,
    Concealed,
    CrossedOut,
}

impl Attribute {
    /// The SGR code which turns this attribute on.
    pub const fn code(self) -> u8 {
        match self {
            Attribute::Bold => 1,
            Attribute::Faint => 2,
            Attribute::Italic => 3,
            Attribute::Underline => 4,
            Attribute::Blink => 5,
            Attribute::Reverse => 7,
            Attribute::Concealed => 8,
            Attribute::CrossedOut => 9,
        }
    }
}

/// One piece of decoration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Color {
    /// a basic foreground color
    Fg(BasicColor),
    /// a basic background color
    Bg(BasicColor),
    /// a 24-bit foreground color
    FgRgb(RgbColor),
    /// a 24-bit background color
    BgRgb(RgbColor),
    /// a text attribute such as bold or italic
    Attr(Attribute),
}

impl Color {
    /// The SGR parameter string for this color (without `ESC [` and `m`).
    pub fn sgr_params(&self) -> String {
        match self {
            Color::Fg(c) => c.fg_code().to_string(),
            Color::Bg(c) => c.bg_code().to_string(),
            Color::FgRgb(c) => format!("38;2;{};{};{}", c.red(), c.green(), c.blue()),
            Color::BgRgb(c) => format!("48;2;{};{};{}", c.red(), c.green(), c.blue()),
            Color::Attr(a) => a.code().to_string(),
        }
    }
}

/// An ordered set of colors applied together to one cell.
///
/// An empty set means "no decoration".
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Colors(Vec<Color>);

impl Colors {
    /// Creates a color set from the given colors.
    pub fn new(colors: Vec<Color>) -> Self {
        Self(colors)
    }

    /// Whether this set decorates anything.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The colors in this set.
    pub fn as_slice(&self) -> &[Color] {
        &self.0
    }

    /// The opening escape sequence, or `""` for an empty set.
    pub fn escape_seq(&self) -> String {
        if self.0.is_empty() {
            return String::new();
        }
        let params: Vec<String> = self.0.iter().map(Color::sgr_params).collect();
        format!("\x1b[{}m", params.join(";"))
    }

    /// Wraps `content` in this set's escape sequence and a reset.
    pub fn paint<T: AsRef<str>>(&self, content: T) -> String {
        let content = content.as_ref();
        if self.0.is_empty() || content.is_empty() {
            return content.to_string();
        }
        format!("{}{}\x1b[0m", self.escape_seq(), content)
    }
}

impl From<Vec<Color>> for Colors {
    fn from(colors: Vec<Color>) -> Self {
        Self(colors)
    }
}

impl From<Color> for Colors {
    fn from(color: Color) -> Self {
        Self(vec![color])
    }
}

impl FromIterator<Color> for Colors {
    fn from_iter<I: IntoIterator<Item = Color>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

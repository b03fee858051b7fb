//! Table styles.
//!
//! A [`Style`] bundles everything about the look of a table which is not
//! tied to a particular column: the border glyphs ([`BoxStyle`]), the
//! text-case transform per row kind ([`FormatOptions`]) and the marker used
//! when a line is cut short by the row-length cap.
//!
//! Styles are plain data and serialize with `serde`, so a preset can be
//! stored alongside other application settings.

mod presets;

use serde::{Deserialize, Serialize};

use crate::layout::RowKind;
use crate::text::eval::display_width;

pub use crate::text::case::TextCase;

/// The glyphs used to draw borders, separators and cell padding.
///
/// Every glyph is a string so that multi-character decorations work; the
/// `horizontal` glyph is repeated once per display column it has to fill.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoxStyle {
    /// top border, left corner
    pub top_left: String,
    /// top border, between two columns
    pub top_junction: String,
    /// top border, right corner
    pub top_right: String,
    /// bottom border, left corner
    pub bottom_left: String,
    /// bottom border, between two columns
    pub bottom_junction: String,
    /// bottom border, right corner
    pub bottom_right: String,
    /// separator line, left end
    pub separator_left: String,
    /// separator line, between two columns
    pub separator_junction: String,
    /// separator line, right end
    pub separator_right: String,
    /// left border of a content line
    pub left: String,
    /// right border of a content line
    pub right: String,
    /// fill glyph of border and separator lines
    pub horizontal: String,
    /// glyph between two cells of a content line
    pub vertical: String,
    /// padding before the cell content
    pub padding_left: String,
    /// padding after the cell content
    pub padding_right: String,
    /// appended to a line cut short by the row-length cap
    pub unfinished: String,
}

impl BoxStyle {
    /// Display width of the padding around one cell.
    pub fn padding_width(&self) -> usize {
        display_width(&self.padding_left) + display_width(&self.padding_right)
    }

    /// The character content must not contain, if the vertical glyph is a
    /// single character.
    pub fn reserved_char(&self) -> Option<char> {
        let mut chars = self.vertical.chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) if !ch.is_whitespace() => Some(ch),
            _ => None,
        }
    }
}

/// Text-case transforms for each row kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatOptions {
    pub header: TextCase,
    pub body: TextCase,
    pub footer: TextCase,
}

impl FormatOptions {
    /// The transform for rows of the given kind.
    pub fn for_kind(&self, kind: RowKind) -> TextCase {
        match kind {
            RowKind::Header => self.header,
            RowKind::Body => self.body,
            RowKind::Footer => self.footer,
        }
    }
}

impl Default for FormatOptions {
    /// Header and footer upper-cased, body untouched.
    fn default() -> Self {
        Self {
            header: TextCase::Upper,
            body: TextCase::Default,
            footer: TextCase::Upper,
        }
    }
}

/// The complete look of a table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Style {
    /// A human readable name for the style.
    pub name: String,
    /// Border and padding glyphs.
    #[serde(rename = "box")]
    pub boxes: BoxStyle,
    /// Text-case transforms per row kind.
    #[serde(default)]
    pub format: FormatOptions,
}

impl Default for Style {
    fn default() -> Self {
        Style::ascii()
    }
}

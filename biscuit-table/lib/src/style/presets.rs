//! Built-in styles.
//!
//! ```text
//! ascii        light        bold         double       rounded
//! +---+---+    ┌───┬───┐    ┏━━━┳━━━┓    ╔═══╦═══╗    ╭───┬───╮
//! | a | b |    │ a │ b │    ┃ a ┃ b ┃    ║ a ║ b ║    │ a │ b │
//! +---+---+    └───┴───┘    ┗━━━┻━━━┛    ╚═══╩═══╝    ╰───┴───╯
//! ```

use super::{BoxStyle, FormatOptions, Style};

/// Glyphs in the order top (left, junction, right), bottom, separator,
/// then left, right, horizontal, vertical.
struct Glyphs<'a> {
    top: [&'a str; 3],
    bottom: [&'a str; 3],
    separator: [&'a str; 3],
    left: &'a str,
    right: &'a str,
    horizontal: &'a str,
    vertical: &'a str,
    unfinished: &'a str,
}

impl Glyphs<'_> {
    fn into_style(self, name: &str) -> Style {
        Style {
            name: name.to_string(),
            boxes: BoxStyle {
                top_left: self.top[0].into(),
                top_junction: self.top[1].into(),
                top_right: self.top[2].into(),
                bottom_left: self.bottom[0].into(),
                bottom_junction: self.bottom[1].into(),
                bottom_right: self.bottom[2].into(),
                separator_left: self.separator[0].into(),
                separator_junction: self.separator[1].into(),
                separator_right: self.separator[2].into(),
                left: self.left.into(),
                right: self.right.into(),
                horizontal: self.horizontal.into(),
                vertical: self.vertical.into(),
                padding_left: " ".into(),
                padding_right: " ".into(),
                unfinished: self.unfinished.into(),
            },
            format: FormatOptions::default(),
        }
    }
}

impl Style {
    /// Plain ASCII borders (`+`, `-`, `|`). This is the default style.
    pub fn ascii() -> Style {
        Glyphs {
            top: ["+", "+", "+"],
            bottom: ["+", "+", "+"],
            separator: ["+", "+", "+"],
            left: "|",
            right: "|",
            horizontal: "-",
            vertical: "|",
            unfinished: " ~",
        }
        .into_style("ascii")
    }

    /// Thin box-drawing borders.
    pub fn light() -> Style {
        Glyphs {
            top: ["┌", "┬", "┐"],
            bottom: ["└", "┴", "┘"],
            separator: ["├", "┼", "┤"],
            left: "│",
            right: "│",
            horizontal: "─",
            vertical: "│",
            unfinished: " ≈",
        }
        .into_style("light")
    }

    /// Heavy box-drawing borders.
    pub fn bold() -> Style {
        Glyphs {
            top: ["┏", "┳", "┓"],
            bottom: ["┗", "┻", "┛"],
            separator: ["┣", "╋", "┫"],
            left: "┃",
            right: "┃",
            horizontal: "━",
            vertical: "┃",
            unfinished: " ≈",
        }
        .into_style("bold")
    }

    /// Double-line box-drawing borders.
    pub fn double() -> Style {
        Glyphs {
            top: ["╔", "╦", "╗"],
            bottom: ["╚", "╩", "╝"],
            separator: ["╠", "╬", "╣"],
            left: "║",
            right: "║",
            horizontal: "═",
            vertical: "║",
            unfinished: " ≈",
        }
        .into_style("double")
    }

    /// Thin borders with rounded corners.
    pub fn rounded() -> Style {
        Glyphs {
            top: ["╭", "┬", "╮"],
            bottom: ["╰", "┴", "╯"],
            separator: ["├", "┼", "┤"],
            left: "│",
            right: "│",
            horizontal: "─",
            vertical: "│",
            unfinished: " ≈",
        }
        .into_style("rounded")
    }

    /// Every built-in style.
    pub fn presets() -> Vec<Style> {
        vec![
            Style::ascii(),
            Style::light(),
            Style::bold(),
            Style::double(),
            Style::rounded(),
        ]
    }
}

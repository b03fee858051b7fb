//! Horizontal and vertical alignment of cell text.

use serde::{Deserialize, Serialize};

use super::eval::{Segment, char_width, display_width, segments};

/// Horizontal alignment of text within a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Align {
    /// Let the table decide: numbers right, everything else left.
    #[default]
    Default,
    /// Left-align content
    Left,
    /// Center content; the odd spare column goes to the left
    Center,
    /// Spread words so the text fills the whole width
    Justify,
    /// Right-align content
    Right,
}

impl Align {
    /// Pads `text` with spaces up to `width` display columns.
    ///
    /// Text already at least `width` wide is returned unchanged. `Default`
    /// behaves like `Left`; callers resolve it before rendering.
    ///
    /// ```
    /// use biscuit_table::Align;
    ///
    /// assert_eq!(Align::Left.apply("ab", 5), "ab   ");
    /// assert_eq!(Align::Right.apply("ab", 5), "   ab");
    /// assert_eq!(Align::Center.apply("B", 6), "   B  ");
    /// assert_eq!(Align::Justify.apply("a b c", 7), "a  b  c");
    /// ```
    pub fn apply(self, text: &str, width: usize) -> String {
        let text_width = display_width(text);
        if text_width >= width {
            return text.to_string();
        }

        let padding = width - text_width;

        match self {
            Align::Default | Align::Left => format!("{}{}", text, " ".repeat(padding)),
            Align::Right => format!("{}{}", " ".repeat(padding), text),
            Align::Center => {
                let right_pad = padding / 2;
                let left_pad = padding - right_pad;
                format!("{}{}{}", " ".repeat(left_pad), text, " ".repeat(right_pad))
            }
            Align::Justify => justify(text, width),
        }
    }

    /// The lowercase name used by markup encoders (`left`, `center`, ...).
    pub fn as_str(&self) -> &'static str {
        match self {
            Align::Default => "default",
            Align::Left => "left",
            Align::Center => "center",
            Align::Justify => "justify",
            Align::Right => "right",
        }
    }
}

/// Distributes spare width between the words of `text`.
///
/// Leading and trailing spaces are kept; the spare width goes into the
/// gaps between words, left-most gaps first. Text with a single word is
/// left aligned. Only visible spaces split words; escape sequences stick
/// to the word that follows them.
fn justify(text: &str, width: usize) -> String {
    let mut words: Vec<String> = Vec::new();
    let mut words_width = 0;
    let mut word = String::new();
    let mut visible = false;
    let mut leading = 0;
    let mut run = 0;
    for segment in segments(text) {
        match segment {
            Segment::Escape(seq) => word.push_str(seq),
            Segment::Text(t) => {
                for ch in t.chars() {
                    if ch == ' ' {
                        if visible {
                            words.push(std::mem::take(&mut word));
                            visible = false;
                        } else if words.is_empty() {
                            leading += 1;
                        }
                        run += 1;
                    } else {
                        word.push(ch);
                        words_width += char_width(ch);
                        visible = true;
                        run = 0;
                    }
                }
            }
        }
    }
    // escapes after the last visible character go after the trailing spaces
    let (trailing, tail) = if visible {
        words.push(std::mem::take(&mut word));
        (0, String::new())
    } else {
        (run, word)
    };
    if words.len() < 2 {
        return Align::Left.apply(text, width);
    }

    let gaps = words.len() - 1;
    // every gap gets at least one space since the input had one there
    let spare = width.saturating_sub(leading + trailing + words_width).max(gaps);
    let per_gap = spare / gaps;
    let extra = spare % gaps;

    let mut out = " ".repeat(leading);
    for (i, word) in words.iter().enumerate() {
        out.push_str(word);
        if i < gaps {
            let count = per_gap + usize::from(i < extra);
            out.push_str(&" ".repeat(count));
        }
    }
    out.push_str(&" ".repeat(trailing));
    out.push_str(&tail);
    out
}

/// Vertical alignment of a cell within a multi-line row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum VAlign {
    /// Same as `Top`.
    #[default]
    Default,
    /// Content first, blank lines below.
    Top,
    /// Blank lines split around the content, the odd one below.
    Middle,
    /// Blank lines first, content at the bottom.
    Bottom,
}

impl VAlign {
    /// Pads `lines` with empty lines until there are `height` of them.
    ///
    /// ```
    /// use biscuit_table::VAlign;
    ///
    /// let lines = vec!["x".to_string()];
    /// assert_eq!(VAlign::Bottom.apply(lines.clone(), 3), vec!["", "", "x"]);
    /// assert_eq!(VAlign::Middle.apply(lines, 2), vec!["x", ""]);
    /// ```
    pub fn apply(self, lines: Vec<String>, height: usize) -> Vec<String> {
        if lines.len() >= height {
            return lines;
        }
        let padding = height - lines.len();
        let (above, below) = match self {
            VAlign::Default | VAlign::Top => (0, padding),
            VAlign::Bottom => (padding, 0),
            VAlign::Middle => (padding / 2, padding - padding / 2),
        };

        let mut out = Vec::with_capacity(height);
        out.extend(std::iter::repeat_n(String::new(), above));
        out.extend(lines);
        out.extend(std::iter::repeat_n(String::new(), below));
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn left_and_right_pad_to_width() {
        assert_eq!(Align::Left.apply("Arya", 6), "Arya  ");
        assert_eq!(Align::Right.apply("20", 3), " 20");
        assert_eq!(Align::Default.apply("x", 2), "x ");
    }

    #[test]
    fn center_gives_odd_space_to_the_left() {
        assert_eq!(Align::Center.apply("A", 3), " A ");
        assert_eq!(Align::Center.apply("D", 4), "  D ");
        assert_eq!(Align::Center.apply("C", 9), "    C    ");
    }

    #[test]
    fn wide_text_is_untouched() {
        assert_eq!(Align::Right.apply("toolong", 3), "toolong");
        assert_eq!(Align::Center.apply("", 0), "");
    }

    #[test]
    fn alignment_ignores_escape_codes() {
        let red = "\x1b[31mab\x1b[0m";
        assert_eq!(Align::Right.apply(red, 4), format!("  {red}"));
    }

    #[test]
    fn justify_spreads_words() {
        assert_eq!(Align::Justify.apply("a b c", 8), "a   b  c");
        assert_eq!(Align::Justify.apply("one", 5), "one  ");
        assert_eq!(Align::Justify.apply("a  b", 6), "a    b");
    }

    #[test]
    fn justify_keeps_outer_spaces() {
        assert_eq!(Align::Justify.apply(" a b", 6), " a   b");
    }

    #[test]
    fn justify_ignores_spaces_inside_escapes() {
        // `ESC[2 q` selects a cursor shape; its space is not a word gap
        let text = "a\x1b[2 qb c";
        let out = Align::Justify.apply(text, 10);
        assert_eq!(display_width(&out), 10);
        assert_eq!(out, "a\x1b[2 qb       c");
    }

    #[test]
    fn justify_keeps_colors_on_their_words() {
        let text = "\x1b[31mred\x1b[0m fish";
        assert_eq!(Align::Justify.apply(text, 10), "\x1b[31mred\x1b[0m   fish");
        // a trailing reset stays after the trailing spaces
        assert_eq!(Align::Justify.apply("a b \x1b[0m", 6), "a   b \x1b[0m");
    }

    #[test]
    fn vertical_top_pads_below() {
        let lines = vec!["a".to_string()];
        assert_eq!(VAlign::Top.apply(lines.clone(), 3), vec!["a", "", ""]);
        assert_eq!(VAlign::Default.apply(lines, 2), vec!["a", ""]);
    }

    #[test]
    fn vertical_middle_puts_extra_line_below() {
        let lines = vec!["a".to_string()];
        assert_eq!(VAlign::Middle.apply(lines.clone(), 4), vec!["", "a", "", ""]);
        assert_eq!(VAlign::Middle.apply(lines, 3), vec!["", "a", ""]);
    }

    #[test]
    fn vertical_padding_is_noop_when_full() {
        let lines = vec!["a".to_string(), "b".to_string()];
        assert_eq!(VAlign::Bottom.apply(lines.clone(), 2), lines);
        assert_eq!(VAlign::Bottom.apply(lines.clone(), 1), lines);
    }
}

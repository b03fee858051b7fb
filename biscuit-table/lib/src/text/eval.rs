//! Escape-code-aware text evaluation utilities.
//!
//! Cell content may already carry ANSI escape sequences (pre-colored text,
//! OSC8 links). Those sequences occupy no columns on screen, so everything
//! that measures or cuts text goes through the helpers in this module.

use std::sync::LazyLock;

use regex::Regex;
use unicode_width::UnicodeWidthChar;

/// Regex pattern for ANSI escape sequences.
///
/// Matches:
/// - CSI sequences: `\x1b[` followed by parameter bytes, intermediate bytes, and final byte
/// - OSC sequences: `\x1b]` followed by content until BEL (\x07) or ST (\x1b\\)
/// - Other escape sequences: `\x1b` followed by single character
static ANSI_ESCAPE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"\x1b\[[\x30-\x3f]*[\x20-\x2f]*[\x40-\x7e]", // CSI sequences
        r"|\x1b\].*?(?:\x07|\x1b\\)",                  // OSC sequences (BEL or ST terminator)
        r"|\x1b[\x20-\x2f]*[\x40-\x5f]",               // Other escape sequences (Fe)
    ))
    .expect("Invalid ANSI escape regex")
});

/// Regex pattern for SGR (color/attribute) sequences.
static SGR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\x1b\[([0-9;]*)m$").expect("Invalid SGR regex"));

/// A piece of text which is either visible or an escape sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    /// Visible characters.
    Text(&'a str),
    /// A complete escape sequence (zero display width).
    Escape(&'a str),
}

/// Splits `text` into visible runs and escape sequences, in order.
pub fn segments(text: &str) -> Vec<Segment<'_>> {
    let mut out = Vec::new();
    let mut last = 0;
    for m in ANSI_ESCAPE_RE.find_iter(text) {
        if m.start() > last {
            out.push(Segment::Text(&text[last..m.start()]));
        }
        out.push(Segment::Escape(m.as_str()));
        last = m.end();
    }
    if last < text.len() {
        out.push(Segment::Text(&text[last..]));
    }
    out
}

/// Strip all ANSI escape sequences from text.
pub fn strip_ansi_codes(text: &str) -> String {
    ANSI_ESCAPE_RE.replace_all(text, "").into_owned()
}

/// Detects if the content contains any ANSI escape sequences.
///
/// ```
/// use biscuit_table::text::eval::has_escape_codes;
///
/// assert!(!has_escape_codes("plain text"));
/// assert!(has_escape_codes("\x1b[31mred\x1b[0m"));
/// ```
pub fn has_escape_codes(text: &str) -> bool {
    ANSI_ESCAPE_RE.is_match(text)
}

/// Returns the display width of a single line, ignoring escape sequences.
///
/// The width is the sum of the per-character widths so that it always agrees
/// with the way [`take_width`] and the wrapping code cut text.
///
/// ```
/// use biscuit_table::text::eval::display_width;
///
/// assert_eq!(display_width("hello"), 5);
/// assert_eq!(display_width("\x1b[31mred\x1b[0m"), 3);
/// assert_eq!(display_width("你好"), 4);
/// ```
pub fn display_width(text: &str) -> usize {
    if !text.contains('\x1b') {
        return text.chars().map(char_width).sum();
    }
    segments(text)
        .into_iter()
        .map(|segment| match segment {
            Segment::Text(t) => t.chars().map(char_width).sum(),
            Segment::Escape(_) => 0,
        })
        .sum()
}

/// The display width of one character (control characters count as zero).
#[inline]
pub fn char_width(ch: char) -> usize {
    UnicodeWidthChar::width(ch).unwrap_or(0)
}

/// The display width of the widest visible character in `text`.
///
/// ```
/// use biscuit_table::text::eval::widest_char;
///
/// assert_eq!(widest_char("abc"), 1);
/// assert_eq!(widest_char("a你b"), 2);
/// assert_eq!(widest_char("\x1b[31m\x1b[0m"), 0);
/// ```
pub fn widest_char(text: &str) -> usize {
    segments(text)
        .into_iter()
        .filter_map(|segment| match segment {
            Segment::Text(t) => t.chars().map(char_width).max(),
            Segment::Escape(_) => None,
        })
        .max()
        .unwrap_or(0)
}

/// Whether `seq` is an SGR sequence which resets all attributes.
pub fn is_sgr_reset(seq: &str) -> bool {
    SGR_RE
        .captures(seq)
        .map(|caps| matches!(&caps[1], "" | "0"))
        .unwrap_or(false)
}

/// Whether `seq` is an SGR (color/attribute) sequence.
pub fn is_sgr(seq: &str) -> bool {
    SGR_RE.is_match(seq)
}

/// Applies `f` to the visible runs of `text`, leaving escape sequences intact.
pub fn map_visible<F>(text: &str, f: F) -> String
where
    F: Fn(&str) -> String,
{
    if !text.contains('\x1b') {
        return f(text);
    }
    segments(text)
        .into_iter()
        .map(|segment| match segment {
            Segment::Text(t) => f(t),
            Segment::Escape(e) => e.to_string(),
        })
        .collect()
}

/// Returns the longest prefix of `text` whose display width is at most
/// `max_width`, along with that width.
///
/// Escape sequences inside the prefix are kept. When the prefix ends while
/// a color is active a reset is appended so the style cannot bleed.
pub fn take_width(text: &str, max_width: usize) -> (String, usize) {
    let mut out = String::new();
    let mut width = 0;
    let mut styled = false;
    'outer: for segment in segments(text) {
        match segment {
            Segment::Escape(seq) => {
                if is_sgr(seq) {
                    styled = !is_sgr_reset(seq);
                }
                out.push_str(seq);
            }
            Segment::Text(t) => {
                for ch in t.chars() {
                    let w = char_width(ch);
                    if width + w > max_width {
                        break 'outer;
                    }
                    out.push(ch);
                    width += w;
                }
            }
        }
    }
    if styled {
        out.push_str("\x1b[0m");
    }
    (out, width)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: plain ASCII text width should equal character count
        #[test]
        fn ascii_text_width_equals_length(s in "[a-zA-Z0-9 ]{0,100}") {
            prop_assert_eq!(display_width(&s), s.len());
        }

        /// Property: coloring text never changes its width
        #[test]
        fn sgr_wrapping_is_invisible(s in "[a-zA-Z0-9 ]{0,60}", code in 30u8..38) {
            let painted = format!("\x1b[{code}m{s}\x1b[0m");
            prop_assert_eq!(display_width(&painted), display_width(&s));
        }

        /// Property: take_width never exceeds the requested width
        #[test]
        fn take_width_respects_limit(s in "\\PC{0,40}", max in 0usize..30) {
            let (cut, width) = take_width(&s, max);
            prop_assert!(width <= max);
            prop_assert_eq!(display_width(&cut), width);
        }
    }
}

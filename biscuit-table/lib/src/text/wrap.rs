//! Hard character-boundary wrapping.
//!
//! Cell text is wrapped by cutting it into chunks of exactly the column
//! width; there is no word-boundary awareness. Escape sequences travel with
//! the characters they precede and an active color is closed at the end of
//! a chunk and re-opened at the start of the next one, so every chunk can be
//! printed on its own line.

use super::eval::{Segment, char_width, display_width, is_sgr, is_sgr_reset, segments};

/// Splits `line` into chunks no wider than `width` display columns.
///
/// - a `width` of `0` means "unlimited" and returns the line as-is
/// - a character wider than `width` gets a chunk of its own
/// - the last chunk may be narrower than `width`
///
/// ```
/// use biscuit_table::text::wrap::wrap_hard;
///
/// assert_eq!(wrap_hard("Arya", 1), vec!["A", "r", "y", "a"]);
/// assert_eq!(wrap_hard("3000", 3), vec!["300", "0"]);
/// assert_eq!(wrap_hard("Jon", 5), vec!["Jon"]);
/// ```
pub fn wrap_hard(line: &str, width: usize) -> Vec<String> {
    if width == 0 || display_width(line) <= width {
        return vec![line.to_string()];
    }

    let mut chunks = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;
    // SGR sequences in effect since the last reset
    let mut active: Vec<&str> = Vec::new();

    for segment in segments(line) {
        match segment {
            Segment::Escape(seq) => {
                if is_sgr(seq) {
                    if is_sgr_reset(seq) {
                        active.clear();
                    } else {
                        active.push(seq);
                    }
                }
                current.push_str(seq);
            }
            Segment::Text(text) => {
                for ch in text.chars() {
                    let w = char_width(ch);
                    if current_width + w > width && current_width > 0 {
                        if !active.is_empty() {
                            current.push_str("\x1b[0m");
                        }
                        chunks.push(std::mem::take(&mut current));
                        current_width = 0;
                        for seq in &active {
                            current.push_str(seq);
                        }
                    }
                    current.push(ch);
                    current_width += w;
                }
            }
        }
    }

    if !current.is_empty() {
        chunks.push(current);
    }
    chunks
}

/// Wraps every line of `lines` independently.
///
/// Lines created by explicit line breaks are never merged back together.
pub fn wrap_lines(lines: &[String], width: usize) -> Vec<String> {
    lines.iter().flat_map(|line| wrap_hard(line, width)).collect()
}

//! Cell normalization.
//!
//! Converts a [`Value`] into display lines: stringify, apply the row kind's
//! text case, expand tabs, drop control characters, split on line breaks and
//! neutralize the reserved separator glyph.

use crate::style::TextCase;
use crate::text::eval::display_width;
use crate::value::{Value, ValueKind};

use super::model::RowKind;

/// Number of spaces a tab expands to.
pub const TAB_WIDTH: usize = 4;

/// Replaces the reserved separator glyph inside cell content.
pub const SEPARATOR_SUBSTITUTE: char = '¦';

/// A value normalized for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    /// Kind of the source value.
    pub kind: ValueKind,
    /// Display lines; never contain line breaks or tabs.
    pub lines: Vec<String>,
    /// The rendered column the cell sits in.
    pub column: usize,
    /// `true` when the cell pads a row shorter than the table.
    pub filler: bool,
}

impl Cell {
    /// An empty cell used to pad short rows.
    pub fn filler(column: usize) -> Self {
        Self {
            kind: ValueKind::Empty,
            lines: vec![String::new()],
            column,
            filler: true,
        }
    }

    /// The widest of the cell's lines.
    pub fn width(&self) -> usize {
        self.lines.iter().map(|l| display_width(l)).max().unwrap_or(0)
    }
}

/// A row of normalized cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedRow {
    pub kind: RowKind,
    pub index: usize,
    pub cells: Vec<Cell>,
    /// The synthetic header row of column letters.
    pub auto_index_row: bool,
}

/// Normalizes values into [`Cell`]s.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Normalizer {
    tab_width: usize,
    reserved: Option<char>,
}

impl Default for Normalizer {
    fn default() -> Self {
        Self {
            tab_width: TAB_WIDTH,
            reserved: None,
        }
    }
}

impl Normalizer {
    /// A normalizer with the default tab width and no reserved glyph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the glyph which content must not contain; occurrences are
    /// replaced with [`SEPARATOR_SUBSTITUTE`].
    pub fn with_reserved(mut self, reserved: Option<char>) -> Self {
        self.reserved = reserved;
        self
    }

    /// Sets how many spaces a tab expands to.
    pub fn with_tab_width(mut self, tab_width: usize) -> Self {
        self.tab_width = tab_width;
        self
    }

    /// Normalizes `value` for a cell of `column`.
    ///
    /// ```
    /// use biscuit_table::layout::Normalizer;
    /// use biscuit_table::{TextCase, Value};
    ///
    /// let cell = Normalizer::new().normalize(&Value::from("Faceless\nMen"), TextCase::Default, 0);
    /// assert_eq!(cell.lines, vec!["Faceless", "Men"]);
    /// ```
    pub fn normalize(&self, value: &Value, case: TextCase, column: usize) -> Cell {
        Cell {
            kind: value.kind(),
            lines: self.normalize_text(&value.to_text(), case),
            column,
            filler: false,
        }
    }

    /// Normalizes raw text into display lines.
    pub fn normalize_text(&self, text: &str, case: TextCase) -> Vec<String> {
        let cased = case.apply(text);
        let tab = " ".repeat(self.tab_width);
        let cleaned: String = cased
            .replace("\r\n", "\n")
            .chars()
            .filter(|&ch| !ch.is_control() || matches!(ch, '\n' | '\t' | '\x1b'))
            .collect::<String>()
            .replace('\t', &tab);

        cleaned
            .split('\n')
            .map(|line| match self.reserved {
                Some(reserved) if line.contains(reserved) => {
                    line.replace(reserved, &SEPARATOR_SUBSTITUTE.to_string())
                }
                _ => line.to_string(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(value: impl Into<Value>) -> Vec<String> {
        Normalizer::new()
            .normalize(&value.into(), TextCase::Default, 0)
            .lines
    }

    #[test]
    fn scalars_become_one_line() {
        assert_eq!(lines(3000), vec!["3000"]);
        assert_eq!(lines(2.5), vec!["2.5"]);
        assert_eq!(lines(true), vec!["true"]);
        assert_eq!(lines(()), vec![""]);
    }

    #[test]
    fn both_line_break_styles_split() {
        assert_eq!(lines("a\nb"), vec!["a", "b"]);
        assert_eq!(lines("a\r\nb"), vec!["a", "b"]);
        assert_eq!(lines("a\n"), vec!["a", ""]);
    }

    #[test]
    fn tabs_expand_before_measuring() {
        let cell = Normalizer::new().normalize(&"Faceless\tMen".into(), TextCase::Default, 4);
        assert_eq!(cell.lines, vec!["Faceless    Men"]);
        assert_eq!(cell.width(), 15);
        assert_eq!(cell.column, 4);
        let narrow = Normalizer::new().with_tab_width(1);
        assert_eq!(narrow.normalize_text("a\tb", TextCase::Default), vec!["a b"]);
    }

    #[test]
    fn stray_control_characters_are_dropped() {
        assert_eq!(lines("be\rll\x07"), vec!["bell"]);
        // escape sequences survive
        assert_eq!(lines("\x1b[31mred\x1b[0m"), vec!["\x1b[31mred\x1b[0m"]);
    }

    #[test]
    fn reserved_glyph_is_substituted() {
        let normalizer = Normalizer::new().with_reserved(Some('|'));
        assert_eq!(
            normalizer.normalize_text("Faceless|Men", TextCase::Default),
            vec!["Faceless¦Men"]
        );
        assert_eq!(lines("Faceless|Men"), vec!["Faceless|Men"]);
    }

    #[test]
    fn case_is_applied_before_measuring() {
        let cell = Normalizer::new().normalize(&"straße".into(), TextCase::Upper, 0);
        assert_eq!(cell.lines, vec!["STRASSE"]);
        assert_eq!(cell.width(), 7);
    }

    #[test]
    fn filler_cells_are_blank() {
        let cell = Cell::filler(2);
        assert!(cell.filler);
        assert_eq!(cell.kind, ValueKind::Empty);
        assert_eq!(cell.width(), 0);
    }
}

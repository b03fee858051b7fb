use serde::{Deserialize, Serialize};

use crate::color::Colors;
use crate::text::align::{Align, VAlign};
use crate::value::ValueKind;

/// Which group of rows a row belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RowKind {
    Header,
    Body,
    Footer,
}

/// Where the content of a rendered column comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColumnSource {
    /// The synthetic leading column numbering body rows.
    AutoIndex,
    /// The caller's column with this (0-based) index.
    Data(usize),
}

/// A measured column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    /// Position among the rendered columns.
    pub index: usize,
    /// Where the column's content comes from.
    pub source: ColumnSource,
    /// Resolved content width (after the cap, without padding).
    pub width: usize,
    /// The hard cap that applied (`0` = unlimited).
    pub cap: usize,
    /// Whether every body value in the column is a number.
    pub numeric: bool,
}

/// A cell after the measure pass.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedCell {
    /// Kind of the value the cell was built from.
    pub kind: ValueKind,
    /// Normalized lines, before reflow.
    pub text: Vec<String>,
    /// Lines reflowed to the column width.
    pub lines: Vec<String>,
    /// Resolved horizontal alignment (never `Align::Default`).
    pub align: Align,
    /// Vertical alignment within the row.
    pub valign: VAlign,
    /// Decoration wrapped around the aligned text.
    pub colors: Colors,
}

impl ResolvedCell {
    /// The normalized text with its lines joined by `\n`.
    pub fn joined_text(&self) -> String {
        self.text.join("\n")
    }
}

/// A logical row after the measure pass.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedRow {
    pub kind: RowKind,
    /// Index of the row within its kind.
    pub index: usize,
    /// One cell per column.
    pub cells: Vec<ResolvedCell>,
    /// Number of physical lines the row occupies.
    pub height: usize,
    /// Whether this is the synthetic row of column letters.
    pub auto_index_row: bool,
}

/// Everything the render pass and the encoders need, fully resolved.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ResolvedTable {
    pub columns: Vec<Column>,
    pub header: Vec<ResolvedRow>,
    pub body: Vec<ResolvedRow>,
    pub footer: Vec<ResolvedRow>,
    pub caption: String,
}

impl ResolvedTable {
    /// Whether there is nothing to render.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// The column widths in render order.
    pub fn widths(&self) -> Vec<usize> {
        self.columns.iter().map(|c| c.width).collect()
    }

    /// Whether a synthetic auto-index column leads the table.
    pub fn has_auto_index(&self) -> bool {
        self.columns
            .first()
            .is_some_and(|c| c.source == ColumnSource::AutoIndex)
    }

    /// All rows in render order: header, body, footer.
    pub fn rows(&self) -> impl Iterator<Item = &ResolvedRow> {
        self.header.iter().chain(&self.body).chain(&self.footer)
    }
}

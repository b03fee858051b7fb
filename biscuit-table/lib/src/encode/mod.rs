//! Alternate encoders over the resolved table model.
//!
//! The bordered text grid is one way to present a [`ResolvedTable`]; the
//! encoders here are others. Each reads the normalized lines of every cell
//! (before reflow, escape sequences stripped) and applies its own escaping
//! for line breaks and reserved characters.
//!
//! ```
//! use biscuit_table::{row, CsvEncoder, Encoder, Table};
//!
//! let mut table = Table::new();
//! table.append_row(row![1, "Arya, of House Stark"]);
//! assert_eq!(CsvEncoder.encode(&table.resolve()), "1,\"Arya, of House Stark\"");
//! ```

mod csv;
mod html;
mod markdown;

pub use csv::CsvEncoder;
pub use html::HtmlEncoder;
pub use markdown::MarkdownEncoder;

use crate::layout::{ResolvedCell, ResolvedTable};
use crate::text::eval::strip_ansi_codes;

/// Turns a [`ResolvedTable`] into a textual representation.
pub trait Encoder {
    /// Encodes the whole table.
    fn encode(&self, table: &ResolvedTable) -> String;
}

/// The plain lines of a cell, escape sequences removed.
fn plain_lines(cell: &ResolvedCell) -> Vec<String> {
    cell.text.iter().map(|line| strip_ansi_codes(line)).collect()
}

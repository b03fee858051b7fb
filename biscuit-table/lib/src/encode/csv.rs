use crate::layout::{ResolvedRow, ResolvedTable};

use super::{Encoder, plain_lines};

/// Comma separated values, one record per row (header, body, footer).
///
/// Fields containing a comma, a quote or a line break are quoted, with
/// inner quotes doubled.
#[derive(Debug, Clone, Copy, Default)]
pub struct CsvEncoder;

impl Encoder for CsvEncoder {
    fn encode(&self, table: &ResolvedTable) -> String {
        table.rows().map(record).collect::<Vec<_>>().join("\n")
    }
}

fn record(row: &ResolvedRow) -> String {
    row.cells
        .iter()
        .map(|cell| field(&plain_lines(cell).join("\n")))
        .collect::<Vec<_>>()
        .join(",")
}

fn field(text: &str) -> String {
    if text.contains([',', '"', '\n']) {
        format!("\"{}\"", text.replace('"', "\"\""))
    } else {
        text.to_string()
    }
}

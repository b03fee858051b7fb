use crate::layout::{ResolvedRow, ResolvedTable};
use crate::text::align::Align;

use super::{Encoder, plain_lines};

/// A GitHub-flavored Markdown table.
///
/// The first header row becomes the Markdown header (an empty one is made
/// up when there is none), followed by the alignment row, the remaining
/// header rows, the body and the footer. Pipes are escaped as `\|` and line
/// breaks become `<br/>`.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkdownEncoder;

impl Encoder for MarkdownEncoder {
    fn encode(&self, table: &ResolvedTable) -> String {
        if table.is_empty() {
            return String::new();
        }

        let mut lines = Vec::new();
        let mut header = table.header.iter();
        match header.next() {
            Some(row) => lines.push(line(cells(row))),
            None => lines.push(line(vec![String::new(); table.columns.len()])),
        }
        lines.push(line(
            (0..table.columns.len())
                .map(|i| marker(column_align(table, i)).to_string())
                .collect(),
        ));
        lines.extend(header.chain(&table.body).chain(&table.footer).map(|row| line(cells(row))));
        lines.join("\n")
    }
}

fn cells(row: &ResolvedRow) -> Vec<String> {
    row.cells
        .iter()
        .map(|cell| plain_lines(cell).join("<br/>").replace('|', "\\|"))
        .collect()
}

fn line(cells: Vec<String>) -> String {
    format!("| {} |", cells.join(" | "))
}

/// Alignment of the column's first body cell, if any.
fn column_align(table: &ResolvedTable, column: usize) -> Align {
    table
        .body
        .first()
        .and_then(|row| row.cells.get(column))
        .map_or(Align::Default, |cell| cell.align)
}

fn marker(align: Align) -> &'static str {
    match align {
        Align::Left => ":---",
        Align::Center => ":---:",
        Align::Right => "---:",
        Align::Default | Align::Justify => "---",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::row;
    use crate::table::Table;

    #[test]
    fn header_alignment_and_body() {
        let mut table = Table::new();
        table.append_header(row!["#", "Name"]);
        table.append_row(row![1, "Arya"]);
        table.append_footer(row!["", "Total"]);
        assert_eq!(
            table.render_markdown(),
            "| # | NAME |\n| ---: | :--- |\n| 1 | Arya |\n|  | TOTAL |"
        );
    }

    #[test]
    fn missing_header_is_made_up() {
        let mut table = Table::new();
        table.append_row(row!["a", "b"]);
        table.set_align(vec![Align::Center]);
        assert_eq!(table.render_markdown(), "|  |  |\n| :---: | :--- |\n| a | b |");
    }

    #[test]
    fn pipes_and_line_breaks_are_escaped() {
        let mut table = Table::new();
        table.append_row(row!["a|b", "Coming.\nThe North Remembers!"]);
        let out = table.render_markdown();
        assert!(out.ends_with("| a\\|b | Coming.<br/>The North Remembers! |"));
    }

    #[test]
    fn empty_table_encodes_nothing() {
        assert_eq!(Table::new().render_markdown(), "");
    }
}

//! Column width resolution.

use super::model::{Column, ColumnSource, RowKind};
use super::normalize::NormalizedRow;
use crate::text::eval::widest_char;
use crate::value::ValueKind;

/// Spreadsheet-style letters for a 0-based column index.
///
/// ```
/// use biscuit_table::layout::column_letters;
///
/// assert_eq!(column_letters(0), "A");
/// assert_eq!(column_letters(25), "Z");
/// assert_eq!(column_letters(26), "AA");
/// assert_eq!(column_letters(27), "AB");
/// assert_eq!(column_letters(701), "ZZ");
/// assert_eq!(column_letters(702), "AAA");
/// ```
pub fn column_letters(index: usize) -> String {
    let mut letters = Vec::new();
    let mut n = index + 1;
    while n > 0 {
        let rem = (n - 1) % 26;
        letters.push(b'A' + rem as u8);
        n = (n - 1) / 26;
    }
    letters.reverse();
    String::from_utf8(letters).unwrap_or_default()
}

/// Measures every column of `rows`.
///
/// `sources` holds one entry per rendered column. The width of a column is
/// the widest line of any of its cells, clamped to the caller's cap for that
/// data column when the cap is positive. A cap never cuts a column below its
/// widest single character, so wide glyphs always fit. The auto-index column
/// takes no cap.
pub fn resolve_columns(
    rows: &[NormalizedRow],
    sources: &[ColumnSource],
    caps: &[usize],
) -> Vec<Column> {
    sources
        .iter()
        .enumerate()
        .map(|(index, &source)| {
            let content = rows
                .iter()
                .filter_map(|row| row.cells.get(index))
                .map(|cell| cell.width())
                .max()
                .unwrap_or(0);

            let cap = match source {
                ColumnSource::AutoIndex => 0,
                ColumnSource::Data(i) => caps.get(i).copied().unwrap_or(0),
            };
            let width = if cap > 0 {
                let widest = rows
                    .iter()
                    .filter_map(|row| row.cells.get(index))
                    .flat_map(|cell| cell.lines.iter())
                    .map(|line| widest_char(line))
                    .max()
                    .unwrap_or(0);
                content.min(cap).max(widest)
            } else {
                content
            };

            let mut body = rows
                .iter()
                .filter(|row| row.kind == RowKind::Body)
                .filter_map(|row| row.cells.get(index))
                .filter(|cell| !cell.filler)
                .peekable();
            let numeric = body.peek().is_some() && body.all(|cell| cell.kind == ValueKind::Numeric);

            tracing::trace!(column = index, ?source, content, cap, width, numeric, "resolved column");

            Column {
                index,
                source,
                width,
                cap,
                numeric,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::normalize::{Cell, Normalizer};
    use crate::style::TextCase;
    use crate::value::Value;

    fn row(kind: RowKind, values: &[Value], width: usize) -> NormalizedRow {
        let normalizer = Normalizer::new();
        let mut cells: Vec<Cell> = values
            .iter()
            .enumerate()
            .map(|(i, v)| normalizer.normalize(v, TextCase::Default, i))
            .collect();
        while cells.len() < width {
            cells.push(Cell::filler(cells.len()));
        }
        NormalizedRow {
            kind,
            index: 0,
            cells,
            auto_index_row: false,
        }
    }

    fn data_sources(n: usize) -> Vec<ColumnSource> {
        (0..n).map(ColumnSource::Data).collect()
    }

    fn sample() -> Vec<NormalizedRow> {
        vec![
            row(RowKind::Body, &crate::row![1, "Arya", "Stark", 3000], 5),
            row(
                RowKind::Body,
                &crate::row![20, "Jon", "Snow", 2000, "You know nothing, Jon Snow!"],
                5,
            ),
            row(RowKind::Body, &crate::row![300, "Tyrion", "Lannister", 5000], 5),
        ]
    }

    #[test]
    fn widths_are_widest_content() {
        let columns = resolve_columns(&sample(), &data_sources(5), &[]);
        let widths: Vec<usize> = columns.iter().map(|c| c.width).collect();
        assert_eq!(widths, vec![3, 6, 9, 4, 27]);
    }

    #[test]
    fn caps_clamp_widths() {
        let columns = resolve_columns(&sample(), &data_sources(5), &[0, 1, 2, 3, 7]);
        let widths: Vec<usize> = columns.iter().map(|c| c.width).collect();
        assert_eq!(widths, vec![3, 1, 2, 3, 7]);
        // a cap wider than the content changes nothing
        let columns = resolve_columns(&sample(), &data_sources(5), &[10]);
        assert_eq!(columns[0].width, 3);
    }

    #[test]
    fn caps_never_cut_below_a_wide_character() {
        let rows = vec![row(RowKind::Body, &crate::row!["你好", "abc"], 2)];
        let columns = resolve_columns(&rows, &data_sources(2), &[1, 1]);
        assert_eq!(columns[0].width, 2);
        assert_eq!(columns[0].cap, 1);
        assert_eq!(columns[1].width, 1);
    }

    #[test]
    fn auto_index_column_ignores_caps() {
        let mut rows = sample();
        for (i, r) in rows.iter_mut().enumerate() {
            let mut cell = Normalizer::new().normalize(&Value::from(i + 1), TextCase::Default, 0);
            cell.column = 0;
            r.cells.insert(0, cell);
        }
        let mut sources = vec![ColumnSource::AutoIndex];
        sources.extend(data_sources(5));
        let columns = resolve_columns(&rows, &sources, &[1, 1]);
        assert_eq!(columns[0].width, 1);
        assert_eq!(columns[0].cap, 0);
        assert_eq!(columns[1].width, 1);
        assert_eq!(columns[1].cap, 1);
    }

    #[test]
    fn numeric_columns_need_numeric_body_values() {
        let columns = resolve_columns(&sample(), &data_sources(5), &[]);
        let numeric: Vec<bool> = columns.iter().map(|c| c.numeric).collect();
        assert_eq!(numeric, vec![true, false, false, true, false]);
    }

    #[test]
    fn header_content_counts_for_width_not_type() {
        let mut rows = sample();
        rows.insert(0, row(RowKind::Header, &crate::row!["#", "First Name"], 5));
        let columns = resolve_columns(&rows, &data_sources(5), &[]);
        assert!(columns[0].numeric);
        assert_eq!(columns[1].width, 10);
    }

    #[test]
    fn columns_without_body_values_are_not_numeric() {
        let rows = vec![row(RowKind::Footer, &crate::row![10000], 1)];
        let columns = resolve_columns(&rows, &data_sources(1), &[]);
        assert!(!columns[0].numeric);
        assert_eq!(columns[0].width, 5);
    }
}

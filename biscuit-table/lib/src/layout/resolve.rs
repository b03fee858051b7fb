//! The measure pass: normalize, measure, reflow, align and color.

use crate::color::Colors;
use crate::table::{RenderConfig, Row};
use crate::text::align::{Align, VAlign};
use crate::text::wrap::wrap_lines;
use crate::value::{Value, ValueKind};

use super::columns::{column_letters, resolve_columns};
use super::model::{Column, ColumnSource, ResolvedCell, ResolvedRow, ResolvedTable, RowKind};
use super::normalize::{Cell, NormalizedRow, Normalizer};

/// The caller's rows, grouped by kind.
#[derive(Debug, Clone, Copy, Default)]
pub struct Rows<'a> {
    pub header: &'a [Row],
    pub body: &'a [Row],
    pub footer: &'a [Row],
}

impl Rows<'_> {
    /// The number of data columns: the longest row of any kind.
    pub fn column_count(&self) -> usize {
        self.header
            .iter()
            .chain(self.body)
            .chain(self.footer)
            .map(Vec::len)
            .max()
            .unwrap_or(0)
    }
}

/// Runs the measure pass over `rows` with the given configuration.
///
/// The auto-index column is only added when the table has no header rows;
/// a caller header already labels the columns.
pub fn measure(rows: Rows<'_>, config: &RenderConfig<'_>, normalizer: &Normalizer) -> ResolvedTable {
    let data_columns = rows.column_count();
    if data_columns == 0 {
        tracing::debug!("table has no columns, nothing to measure");
        return ResolvedTable {
            caption: config.caption.to_string(),
            ..Default::default()
        };
    }

    let auto_index = config.auto_index && rows.header.is_empty();
    let offset = usize::from(auto_index);
    let mut sources = Vec::with_capacity(data_columns + offset);
    if auto_index {
        sources.push(ColumnSource::AutoIndex);
    }
    sources.extend((0..data_columns).map(ColumnSource::Data));

    let format = &config.style.format;
    let normalize_group = |kind: RowKind, group: &[Row]| -> Vec<NormalizedRow> {
        group
            .iter()
            .enumerate()
            .map(|(index, row)| {
                let case = format.for_kind(kind);
                let mut cells = Vec::with_capacity(sources.len());
                if auto_index {
                    cells.push(match kind {
                        RowKind::Body => normalizer.normalize(&Value::from(index + 1), case, 0),
                        _ => Cell::filler(0),
                    });
                }
                for column in 0..data_columns {
                    cells.push(match row.get(column) {
                        Some(value) => normalizer.normalize(value, case, column + offset),
                        None => Cell::filler(column + offset),
                    });
                }
                NormalizedRow {
                    kind,
                    index,
                    cells,
                    auto_index_row: false,
                }
            })
            .collect()
    };

    let mut header = normalize_group(RowKind::Header, rows.header);
    if auto_index {
        header.push(letter_row(data_columns, normalizer, config));
    }
    let body = normalize_group(RowKind::Body, rows.body);
    let footer = normalize_group(RowKind::Footer, rows.footer);

    let all: Vec<NormalizedRow> = header
        .iter()
        .chain(&body)
        .chain(&footer)
        .cloned()
        .collect();
    let columns = resolve_columns(&all, &sources, config.allowed_column_lengths);

    tracing::debug!(
        columns = columns.len(),
        header = header.len(),
        body = body.len(),
        footer = footer.len(),
        auto_index,
        "measured table"
    );

    let resolve_group = |group: Vec<NormalizedRow>| -> Vec<ResolvedRow> {
        group
            .into_iter()
            .map(|row| resolve_row(row, &columns, config))
            .collect()
    };

    ResolvedTable {
        header: resolve_group(header),
        body: resolve_group(body),
        footer: resolve_group(footer),
        columns,
        caption: config.caption.to_string(),
    }
}

/// The synthetic header row: a blank over the index column, then A, B, C...
fn letter_row(data_columns: usize, normalizer: &Normalizer, config: &RenderConfig<'_>) -> NormalizedRow {
    let case = config.style.format.header;
    let mut cells = vec![Cell::filler(0)];
    cells.extend((0..data_columns).map(|column| {
        normalizer.normalize(&Value::from(column_letters(column)), case, column + 1)
    }));
    NormalizedRow {
        kind: RowKind::Header,
        index: 0,
        cells,
        auto_index_row: true,
    }
}

fn resolve_row(row: NormalizedRow, columns: &[Column], config: &RenderConfig<'_>) -> ResolvedRow {
    let cells: Vec<ResolvedCell> = row
        .cells
        .into_iter()
        .zip(columns)
        .map(|(cell, column)| {
            let lines = wrap_lines(&cell.lines, column.width);
            ResolvedCell {
                align: resolve_align(&cell, column, row.kind, row.auto_index_row, config),
                valign: resolve_valign(column, config),
                colors: resolve_colors(column, row.kind, config),
                kind: cell.kind,
                text: cell.lines,
                lines,
            }
        })
        .collect();
    let height = cells.iter().map(|c| c.lines.len()).max().unwrap_or(1);

    ResolvedRow {
        kind: row.kind,
        index: row.index,
        cells,
        height,
        auto_index_row: row.auto_index_row,
    }
}

/// Horizontal alignment of one cell.
///
/// 1. letters over the columns are centered
/// 2. an explicit alignment for the data column wins
/// 3. numbers align right, and so do header/footer cells over a numeric column
/// 4. everything else aligns left
fn resolve_align(
    cell: &Cell,
    column: &Column,
    kind: RowKind,
    auto_index_row: bool,
    config: &RenderConfig<'_>,
) -> Align {
    if auto_index_row {
        return Align::Center;
    }
    if let ColumnSource::Data(i) = column.source {
        match config.align.get(i) {
            Some(&align) if align != Align::Default => return align,
            _ => {}
        }
    }
    match cell.kind {
        ValueKind::Numeric => Align::Right,
        _ if kind != RowKind::Body && column.numeric => Align::Right,
        _ => Align::Left,
    }
}

fn resolve_valign(column: &Column, config: &RenderConfig<'_>) -> VAlign {
    match column.source {
        ColumnSource::Data(i) => config.valign.get(i).copied().unwrap_or_default(),
        ColumnSource::AutoIndex => VAlign::Top,
    }
}

/// Colors for one cell: the row kind's own set first, then the body set.
fn resolve_colors(column: &Column, kind: RowKind, config: &RenderConfig<'_>) -> Colors {
    let ColumnSource::Data(i) = column.source else {
        return Colors::default();
    };
    let own = match kind {
        RowKind::Header => config.colors_header.get(i),
        RowKind::Footer => config.colors_footer.get(i),
        RowKind::Body => None,
    };
    own.or_else(|| config.colors.get(i))
        .cloned()
        .unwrap_or_default()
}

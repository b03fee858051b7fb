//! Grid composition: turns resolved rows into bordered text lines.

use crate::layout::{Column, ResolvedRow, ResolvedTable};
use crate::style::BoxStyle;
use crate::table::RenderConfig;
use crate::text::eval::{display_width, take_width};

use super::truncate::truncate_lines;

/// The kind of horizontal rule drawn between content lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Top border of the table.
    Top,
    /// Between header, body and footer, or between body rows.
    Separator,
    /// Bottom border of the table.
    Bottom,
}

/// Renders `table` into its final text form.
///
/// Lines are joined with `\n`; there is no trailing line break. A table
/// without columns renders as an empty string.
pub fn render(table: &ResolvedTable, config: &RenderConfig<'_>) -> String {
    if table.is_empty() {
        tracing::debug!("table has no columns, rendering nothing");
        return String::new();
    }

    let boxes = &config.style.boxes;
    let border = config.show_border;
    let mut lines = Vec::new();

    if !table.caption.is_empty() {
        lines.extend(table.caption.lines().map(str::to_string));
    }
    if border {
        lines.push(border_line(&table.columns, boxes, Rule::Top, border));
    }

    let sections = [(&table.header, false), (&table.body, config.show_separators), (&table.footer, false)];
    let mut previous = false;
    for (rows, separated) in sections {
        if rows.is_empty() {
            continue;
        }
        if previous {
            lines.push(border_line(&table.columns, boxes, Rule::Separator, border));
        }
        for (index, row) in rows.iter().enumerate() {
            if separated && index > 0 {
                lines.push(border_line(&table.columns, boxes, Rule::Separator, border));
            }
            lines.extend(content_lines(row, &table.columns, boxes, border));
        }
        previous = true;
    }

    if border {
        lines.push(border_line(&table.columns, boxes, Rule::Bottom, border));
    }

    let composed = lines.len();
    let lines = truncate_lines(lines, config.allowed_row_length, &boxes.unfinished);
    tracing::trace!(composed, emitted = lines.len(), "composed grid");
    lines.join("\n")
}

/// A horizontal rule spanning every column.
///
/// Each column contributes one run of the horizontal glyph as wide as its
/// content plus padding; runs are joined by the rule's junction glyph and,
/// when `show_border` is set, closed by its corner glyphs.
///
/// ```
/// use biscuit_table::Style;
/// use biscuit_table::layout::{Column, ColumnSource};
/// use biscuit_table::render::border_line;
/// use biscuit_table::render::compose::Rule;
///
/// let columns: Vec<Column> = [3, 1]
///     .into_iter()
///     .enumerate()
///     .map(|(index, width)| Column {
///         index,
///         source: ColumnSource::Data(index),
///         width,
///         cap: 0,
///         numeric: false,
///     })
///     .collect();
/// let boxes = Style::ascii().boxes;
/// assert_eq!(border_line(&columns, &boxes, Rule::Top, true), "+-----+---+");
/// assert_eq!(border_line(&columns, &boxes, Rule::Separator, false), "-----+---");
/// ```
pub fn border_line(columns: &[Column], boxes: &BoxStyle, rule: Rule, show_border: bool) -> String {
    let (left, junction, right) = match rule {
        Rule::Top => (&boxes.top_left, &boxes.top_junction, &boxes.top_right),
        Rule::Separator => (&boxes.separator_left, &boxes.separator_junction, &boxes.separator_right),
        Rule::Bottom => (&boxes.bottom_left, &boxes.bottom_junction, &boxes.bottom_right),
    };
    let padding = boxes.padding_width();
    let inner = columns
        .iter()
        .map(|column| fill(&boxes.horizontal, column.width + padding))
        .collect::<Vec<_>>()
        .join(junction.as_str());

    if show_border {
        format!("{left}{inner}{right}")
    } else {
        inner
    }
}

/// The physical lines of one logical row.
///
/// Every cell is padded to the row height by its vertical alignment, each
/// line aligned to the column width and painted with the cell's colors.
pub fn content_lines(row: &ResolvedRow, columns: &[Column], boxes: &BoxStyle, show_border: bool) -> Vec<String> {
    let cells: Vec<Vec<String>> = row
        .cells
        .iter()
        .zip(columns)
        .map(|(cell, column)| {
            cell.valign
                .apply(cell.lines.clone(), row.height)
                .into_iter()
                .map(|line| {
                    let aligned = cell.align.apply(&line, column.width);
                    format!(
                        "{}{}{}",
                        boxes.padding_left,
                        cell.colors.paint(aligned),
                        boxes.padding_right
                    )
                })
                .collect()
        })
        .collect();

    (0..row.height)
        .map(|i| {
            let inner = cells
                .iter()
                .map(|lines| lines[i].as_str())
                .collect::<Vec<_>>()
                .join(boxes.vertical.as_str());
            if show_border {
                format!("{}{}{}", boxes.left, inner, boxes.right)
            } else {
                inner
            }
        })
        .collect()
}

/// Repeats `glyph` until it covers exactly `width` display columns.
fn fill(glyph: &str, width: usize) -> String {
    let glyph_width = display_width(glyph);
    if glyph_width == 0 {
        return " ".repeat(width);
    }
    let repeated = glyph.repeat(width.div_ceil(glyph_width));
    let (mut run, run_width) = take_width(&repeated, width);
    run.push_str(&" ".repeat(width - run_width));
    run
}

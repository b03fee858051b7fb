//! Property tests over whole tables.

use biscuit_table::text::eval::display_width;
use biscuit_table::{Row, Style, Table, Value};
use proptest::prelude::*;

fn value() -> impl Strategy<Value = Value> {
    prop_oneof![
        any::<i32>().prop_map(Value::from),
        "[a-zA-Z ,.]{0,14}".prop_map(Value::from),
        "[a-z]{1,6}\n[a-z]{0,6}".prop_map(Value::from),
        any::<bool>().prop_map(Value::from),
        Just(Value::Empty),
    ]
}

fn table_rows() -> impl Strategy<Value = Vec<Row>> {
    prop::collection::vec(prop::collection::vec(value(), 1..6), 1..8)
}

fn table_of(rows: Vec<Row>) -> Table {
    let mut table = Table::new();
    table.append_rows(rows);
    table
}

proptest! {
    /// Property: every rendered line has the same display width
    #[test]
    fn grid_is_rectangular(rows in table_rows(), separators in any::<bool>(), border in any::<bool>()) {
        let mut table = table_of(rows);
        table.show_separators(separators);
        table.show_border(border);
        let out = table.render();
        let widths: Vec<usize> = out.lines().map(display_width).collect();
        prop_assert!(widths.windows(2).all(|w| w[0] == w[1]), "{}", out);
    }

    /// Property: the same holds for the box-drawing presets
    #[test]
    fn presets_are_rectangular(rows in table_rows(), preset in 0usize..5) {
        let mut table = table_of(rows);
        table.set_style(Style::presets().swap_remove(preset));
        let out = table.render();
        let widths: Vec<usize> = out.lines().map(display_width).collect();
        prop_assert!(widths.windows(2).all(|w| w[0] == w[1]), "{}", out);
    }

    /// Property: under a row-length cap every line fits, and cut lines hit it exactly
    #[test]
    fn truncated_lines_fit(rows in table_rows(), allowed in 1usize..60) {
        let mut table = table_of(rows);
        let natural = table.render();
        table.set_allowed_row_length(allowed);
        let out = table.render();

        let marker = display_width(&Style::default().boxes.unfinished);
        if allowed <= marker {
            prop_assert_eq!(out, "");
        } else {
            for (before, after) in natural.lines().zip(out.lines()) {
                if display_width(before) > allowed {
                    prop_assert_eq!(display_width(after), allowed);
                    prop_assert!(after.ends_with(" ~"));
                } else {
                    prop_assert_eq!(before, after);
                }
            }
        }
    }

    /// Property: lowering a column cap never widens the column
    #[test]
    fn widths_shrink_with_caps(rows in table_rows(), high in 1usize..20, low in 1usize..20) {
        let (high, low) = (high.max(low), high.min(low));
        let mut table = table_of(rows);
        table.set_allowed_column_lengths(vec![high; 6]);
        let wide = table.resolve().widths();
        table.set_allowed_column_lengths(vec![low; 6]);
        let narrow = table.resolve().widths();
        for (w, n) in wide.iter().zip(&narrow) {
            prop_assert!(n <= w);
            prop_assert!(*n <= low);
        }
    }

    /// Property: longer content never narrows its column
    #[test]
    fn widths_grow_with_content(rows in table_rows(), extra in "[a-z]{1,10}") {
        let mut table = table_of(rows.clone());
        let before = table.resolve().widths();

        let mut longer = rows;
        let text = format!("{}{}", longer[0][0], extra);
        longer[0][0] = Value::from(text);
        table = table_of(longer);
        let after = table.resolve().widths();

        prop_assert!(after[0] >= before[0]);
        for (a, b) in after.iter().zip(&before).skip(1) {
            prop_assert_eq!(a, b);
        }
    }

    /// Property: every cell contributes exactly the row's height in lines
    #[test]
    fn rows_are_padded_to_their_height(rows in table_rows(), cap in 0usize..6) {
        let mut table = table_of(rows);
        table.set_allowed_column_lengths(vec![cap; 6]);
        let resolved = table.resolve();
        for row in resolved.rows() {
            let tallest = row.cells.iter().map(|c| c.lines.len()).max().unwrap_or(1);
            prop_assert_eq!(row.height, tallest);
            for (cell, column) in row.cells.iter().zip(&resolved.columns) {
                for line in &cell.lines {
                    prop_assert!(column.width == 0 || display_width(line) <= column.width);
                }
            }
        }
    }

    /// Property: auto-index numbers body rows 1, 2, 3...
    #[test]
    fn auto_index_numbers_rows(rows in table_rows()) {
        let count = rows.len();
        let mut table = table_of(rows);
        table.set_auto_index(true);
        let resolved = table.resolve();
        let ordinals: Vec<String> = resolved.body.iter().map(|r| r.cells[0].lines[0].clone()).collect();
        let expected: Vec<String> = (1..=count).map(|i| i.to_string()).collect();
        prop_assert_eq!(ordinals, expected);
    }
}

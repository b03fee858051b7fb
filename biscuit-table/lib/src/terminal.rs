//! Terminal width detection.

use std::env;

use terminal_size::{Width, terminal_size};

/// The width (in columns) of the terminal attached to stdout.
///
/// Falls back to the `COLUMNS` environment variable when stdout is not a
/// terminal; `None` when neither yields a positive width.
pub fn terminal_width() -> Option<usize> {
    terminal_size()
        .map(|(Width(w), _)| usize::from(w))
        .filter(|&w| w > 0)
        .or_else(|| columns_from_env(env::var("COLUMNS").ok().as_deref()))
}

fn columns_from_env(value: Option<&str>) -> Option<usize> {
    value?.trim().parse::<usize>().ok().filter(|&w| w > 0)
}

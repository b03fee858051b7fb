//! Row-length cap.

use crate::text::eval::{display_width, take_width};

/// Enforces a maximum display width on every line.
///
/// - `allowed == 0`: lines pass through untouched
/// - `allowed <= width(marker)`: nothing can be shown and no lines are returned
/// - otherwise a line wider than `allowed` is cut to `allowed - width(marker)`
///   columns and the marker is appended, so it ends up exactly `allowed` wide
///
/// ```
/// use biscuit_table::render::truncate_lines;
///
/// let lines = vec!["abcdefgh".to_string(), "abc".to_string()];
/// assert_eq!(truncate_lines(lines.clone(), 6, " ~"), vec!["abcd ~", "abc"]);
/// assert!(truncate_lines(lines, 2, " ~").is_empty());
/// ```
pub fn truncate_lines(lines: Vec<String>, allowed: usize, marker: &str) -> Vec<String> {
    if allowed == 0 {
        return lines;
    }
    let marker_width = display_width(marker);
    if allowed <= marker_width {
        tracing::warn!(
            allowed,
            marker_width,
            "row length cap leaves no room for content, rendering nothing"
        );
        return Vec::new();
    }

    let keep = allowed - marker_width;
    lines
        .into_iter()
        .map(|line| {
            let width = display_width(&line);
            if width <= allowed {
                return line;
            }
            let (mut cut, cut_width) = take_width(&line, keep);
            tracing::trace!(width, allowed, cut_width, "truncated line");
            cut.push_str(&" ".repeat(keep - cut_width));
            cut.push_str(marker);
            cut
        })
        .collect()
}

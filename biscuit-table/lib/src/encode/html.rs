use crate::layout::{ResolvedRow, ResolvedTable};
use crate::table::DEFAULT_HTML_CSS_CLASS;
use crate::text::align::Align;

use super::{Encoder, plain_lines};

/// An HTML `<table>`.
///
/// Header rows go into `<thead>` as `<th>` cells, body and footer rows into
/// `<tbody>` and `<tfoot>` as `<td>` cells. Text is HTML-escaped, line
/// breaks become `<br/>` and empty cells hold `&nbsp;`.
///
/// ```
/// use biscuit_table::{row, Encoder, HtmlEncoder, Table};
///
/// let mut table = Table::new();
/// table.append_row(row!["Arya"]);
/// let html = HtmlEncoder::default().encode(&table.resolve());
/// assert_eq!(
///     html,
///     "<table class=\"biscuit-table\">\n  <tbody>\n  <tr>\n    <td>Arya</td>\n  </tr>\n  </tbody>\n</table>"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlEncoder {
    css_class: String,
}

impl Default for HtmlEncoder {
    fn default() -> Self {
        Self::new(DEFAULT_HTML_CSS_CLASS)
    }
}

impl HtmlEncoder {
    /// An encoder which sets `css_class` on the `<table>` element.
    pub fn new<T: Into<String>>(css_class: T) -> Self {
        Self {
            css_class: css_class.into(),
        }
    }

    /// The CSS class of the `<table>` element.
    pub fn css_class(&self) -> &str {
        &self.css_class
    }
}

impl Encoder for HtmlEncoder {
    fn encode(&self, table: &ResolvedTable) -> String {
        let mut out = vec![format!(
            "<table class=\"{}\">",
            html_escape::encode_double_quoted_attribute(&self.css_class)
        )];
        if !table.caption.is_empty() {
            out.push(format!(
                "  <caption>{}</caption>",
                html_escape::encode_text(&table.caption)
            ));
        }
        section(&mut out, "thead", "th", &table.header);
        section(&mut out, "tbody", "td", &table.body);
        section(&mut out, "tfoot", "td", &table.footer);
        out.push("</table>".to_string());
        out.join("\n")
    }
}

fn section(out: &mut Vec<String>, tag: &str, cell_tag: &str, rows: &[ResolvedRow]) {
    if rows.is_empty() {
        return;
    }
    out.push(format!("  <{tag}>"));
    for row in rows {
        out.push("  <tr>".to_string());
        for cell in &row.cells {
            let lines: Vec<String> = plain_lines(cell)
                .iter()
                .map(|line| html_escape::encode_text(line).into_owned())
                .collect();
            let text = lines.join("<br/>");
            let text = if text.is_empty() { "&nbsp;" } else { text.as_str() };
            let align = match cell.align {
                Align::Default | Align::Left => String::new(),
                other => format!(" align=\"{}\"", other.as_str()),
            };
            out.push(format!("    <{cell_tag}{align}>{text}</{cell_tag}>"));
        }
        out.push("  </tr>".to_string());
    }
    out.push(format!("  </{tag}>"));
}

//! The caller-facing [`Table`].

use std::fmt;
use std::io::Write;
use std::sync::LazyLock;

use crate::color::Colors;
use crate::encode::{CsvEncoder, Encoder, HtmlEncoder, MarkdownEncoder};
use crate::error::{TableError, TableResult};
use crate::layout::{Normalizer, ResolvedTable, Rows, measure};
use crate::render::compose;
use crate::style::Style;
use crate::terminal;
use crate::text::align::{Align, VAlign};
use crate::value::Value;

/// One row of values.
pub type Row = Vec<Value>;

/// CSS class used by [`Table::render_html`] when none is set.
pub const DEFAULT_HTML_CSS_CLASS: &str = "biscuit-table";

static DEFAULT_STYLE: LazyLock<Style> = LazyLock::new(Style::default);

/// A borrowed, read-only snapshot of a table's configuration.
///
/// Every render pass captures one of these up front so nothing can change
/// underneath it.
#[derive(Debug, Clone, Copy)]
pub struct RenderConfig<'a> {
    pub style: &'a Style,
    pub align: &'a [Align],
    pub valign: &'a [VAlign],
    pub colors: &'a [Colors],
    pub colors_header: &'a [Colors],
    pub colors_footer: &'a [Colors],
    pub allowed_column_lengths: &'a [usize],
    pub allowed_row_length: usize,
    pub auto_index: bool,
    pub show_border: bool,
    pub show_separators: bool,
    pub caption: &'a str,
    pub html_css_class: &'a str,
}

/// A table of header, body and footer rows plus its presentation settings.
///
/// ```
/// use biscuit_table::{row, Table};
///
/// let mut table = Table::new();
/// table.append_row(row![1, "Arya", "Stark", 3000]);
/// assert_eq!(
///     table.render(),
///     "+---+------+-------+------+\n\
///      | 1 | Arya | Stark | 3000 |\n\
///      +---+------+-------+------+"
/// );
/// ```
#[derive(Default)]
pub struct Table {
    rows_header: Vec<Row>,
    rows: Vec<Row>,
    rows_footer: Vec<Row>,

    style: Option<Style>,
    align: Option<Vec<Align>>,
    valign: Option<Vec<VAlign>>,
    colors: Vec<Colors>,
    colors_header: Vec<Colors>,
    colors_footer: Vec<Colors>,
    allowed_column_lengths: Vec<usize>,
    allowed_row_length: usize,
    auto_index: bool,
    disable_border: bool,
    enable_separators: bool,
    caption: String,
    html_css_class: String,

    output_mirror: Option<Box<dyn Write + Send>>,
}

impl fmt::Debug for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Table")
            .field("rows_header", &self.rows_header)
            .field("rows", &self.rows)
            .field("rows_footer", &self.rows_footer)
            .field("style", &self.style.as_ref().map(|s| &s.name))
            .field("align", &self.align)
            .field("valign", &self.valign)
            .field("allowed_column_lengths", &self.allowed_column_lengths)
            .field("allowed_row_length", &self.allowed_row_length)
            .field("auto_index", &self.auto_index)
            .field("disable_border", &self.disable_border)
            .field("enable_separators", &self.enable_separators)
            .field("caption", &self.caption)
            .field("output_mirror", &self.output_mirror.is_some())
            .finish_non_exhaustive()
    }
}

impl Table {
    /// Creates an empty table with the default style.
    pub fn new() -> Self {
        Self::default()
    }

    // ------------------------------------------------------------------
    // rows
    // ------------------------------------------------------------------

    /// Appends a header row.
    pub fn append_header(&mut self, row: Row) {
        self.rows_header.push(row);
    }

    /// Appends a footer row.
    pub fn append_footer(&mut self, row: Row) {
        self.rows_footer.push(row);
    }

    /// Appends a body row.
    pub fn append_row(&mut self, row: Row) {
        self.rows.push(row);
    }

    /// Appends several body rows.
    pub fn append_rows<I>(&mut self, rows: I)
    where
        I: IntoIterator<Item = Row>,
    {
        self.rows.extend(rows);
    }

    /// Number of body rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no body rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The header rows.
    pub fn header_rows(&self) -> &[Row] {
        &self.rows_header
    }

    /// The body rows.
    pub fn body_rows(&self) -> &[Row] {
        &self.rows
    }

    /// The footer rows.
    pub fn footer_rows(&self) -> &[Row] {
        &self.rows_footer
    }

    // ------------------------------------------------------------------
    // configuration
    // ------------------------------------------------------------------

    /// Sets the style. Until one is set the table renders with
    /// [`Style::default`].
    pub fn set_style(&mut self, style: Style) {
        self.style = Some(style);
    }

    /// The style explicitly set on this table, if any.
    pub fn style(&self) -> Option<&Style> {
        self.style.as_ref()
    }

    /// Sets the horizontal alignment per data column.
    pub fn set_align(&mut self, align: Vec<Align>) {
        self.align = Some(align);
    }

    /// The horizontal alignment per data column, if set.
    pub fn align(&self) -> Option<&[Align]> {
        self.align.as_deref()
    }

    /// Sets the vertical alignment per data column.
    pub fn set_valign(&mut self, valign: Vec<VAlign>) {
        self.valign = Some(valign);
    }

    /// The vertical alignment per data column, if set.
    pub fn valign(&self) -> Option<&[VAlign]> {
        self.valign.as_deref()
    }

    /// Sets the colors of body cells per data column; header and footer
    /// cells fall back to these when their own set has no entry.
    pub fn set_colors(&mut self, colors: Vec<Colors>) {
        self.colors = colors;
    }

    /// The body colors per data column.
    pub fn colors(&self) -> &[Colors] {
        &self.colors
    }

    /// Sets the colors of header cells per data column.
    pub fn set_colors_header(&mut self, colors: Vec<Colors>) {
        self.colors_header = colors;
    }

    /// The header colors per data column.
    pub fn colors_header(&self) -> &[Colors] {
        &self.colors_header
    }

    /// Sets the colors of footer cells per data column.
    pub fn set_colors_footer(&mut self, colors: Vec<Colors>) {
        self.colors_footer = colors;
    }

    /// The footer colors per data column.
    pub fn colors_footer(&self) -> &[Colors] {
        &self.colors_footer
    }

    /// Caps the content width of each data column (`0` = unlimited).
    /// Longer lines are wrapped onto extra lines.
    pub fn set_allowed_column_lengths(&mut self, lengths: Vec<usize>) {
        self.allowed_column_lengths = lengths;
    }

    /// The content width caps per data column.
    pub fn allowed_column_lengths(&self) -> &[usize] {
        &self.allowed_column_lengths
    }

    /// Caps the width of every rendered line (`0` = unlimited).
    ///
    /// Longer lines are cut and end with the style's unfinished marker. A
    /// cap no wider than the marker renders nothing at all.
    pub fn set_allowed_row_length(&mut self, length: usize) {
        self.allowed_row_length = length;
    }

    /// The rendered line width cap.
    pub fn allowed_row_length(&self) -> usize {
        self.allowed_row_length
    }

    /// Caps the rendered line width at the width of the attached terminal.
    ///
    /// Returns the width used, or `None` (leaving the cap untouched) when
    /// no width can be detected.
    pub fn fit_to_terminal(&mut self) -> Option<usize> {
        let width = terminal::terminal_width()?;
        tracing::debug!(width, "capping rows at terminal width");
        self.allowed_row_length = width;
        Some(width)
    }

    /// Numbers body rows in a leading column and letters the columns in a
    /// header row. Has no effect while the table has header rows.
    pub fn set_auto_index(&mut self, auto_index: bool) {
        self.auto_index = auto_index;
    }

    /// Whether auto-indexing is enabled.
    pub fn auto_index(&self) -> bool {
        self.auto_index
    }

    /// Shows or hides the outer border.
    pub fn show_border(&mut self, show: bool) {
        self.disable_border = !show;
    }

    /// Whether the outer border is drawn.
    pub fn border_visible(&self) -> bool {
        !self.disable_border
    }

    /// Draws a separator line between every two body rows.
    pub fn show_separators(&mut self, show: bool) {
        self.enable_separators = show;
    }

    /// Whether separators between body rows are drawn.
    pub fn separators_visible(&self) -> bool {
        self.enable_separators
    }

    /// Sets a caption rendered above the table.
    pub fn set_caption<T: Into<String>>(&mut self, caption: T) {
        self.caption = caption.into();
    }

    /// The caption.
    pub fn caption(&self) -> &str {
        &self.caption
    }

    /// Sets the CSS class of the `<table>` element in [`Table::render_html`].
    pub fn set_html_css_class<T: Into<String>>(&mut self, class: T) {
        self.html_css_class = class.into();
    }

    /// The configured CSS class (empty when the default is used).
    pub fn html_css_class(&self) -> &str {
        &self.html_css_class
    }

    /// Mirrors every [`Table::render_mirrored`] output to `writer`,
    /// followed by a line break. [`Table::render`] and the encoders never
    /// write to it.
    pub fn set_output_mirror<W>(&mut self, writer: W)
    where
        W: Write + Send + 'static,
    {
        self.output_mirror = Some(Box::new(writer));
    }

    /// Removes the output mirror.
    pub fn clear_output_mirror(&mut self) {
        self.output_mirror = None;
    }

    /// Whether an output mirror is set.
    pub fn has_output_mirror(&self) -> bool {
        self.output_mirror.is_some()
    }

    /// A snapshot of the current configuration.
    pub fn config(&self) -> RenderConfig<'_> {
        RenderConfig {
            style: self.style.as_ref().unwrap_or(&DEFAULT_STYLE),
            align: self.align.as_deref().unwrap_or_default(),
            valign: self.valign.as_deref().unwrap_or_default(),
            colors: &self.colors,
            colors_header: &self.colors_header,
            colors_footer: &self.colors_footer,
            allowed_column_lengths: &self.allowed_column_lengths,
            allowed_row_length: self.allowed_row_length,
            auto_index: self.auto_index,
            show_border: !self.disable_border,
            show_separators: self.enable_separators,
            caption: &self.caption,
            html_css_class: if self.html_css_class.is_empty() {
                DEFAULT_HTML_CSS_CLASS
            } else {
                self.html_css_class.as_str()
            },
        }
    }

    // ------------------------------------------------------------------
    // rendering
    // ------------------------------------------------------------------

    fn grouped_rows(&self) -> Rows<'_> {
        Rows {
            header: &self.rows_header,
            body: &self.rows,
            footer: &self.rows_footer,
        }
    }

    /// Runs the measure pass and returns the resolved model.
    ///
    /// Cell text keeps the reserved separator glyph; encoders escape it in
    /// their own way.
    pub fn resolve(&self) -> ResolvedTable {
        measure(self.grouped_rows(), &self.config(), &Normalizer::new())
    }

    /// Renders the table as a bordered text grid.
    ///
    /// This never writes to the output mirror; use
    /// [`Table::render_mirrored`] for that.
    #[tracing::instrument(level = "debug", skip_all, fields(rows = self.rows.len()))]
    pub fn render(&self) -> String {
        let config = self.config();
        let normalizer = Normalizer::new().with_reserved(config.style.boxes.reserved_char());
        let resolved = measure(self.grouped_rows(), &config, &normalizer);
        compose::render(&resolved, &config)
    }

    /// Renders the table and writes the result, plus a line break, to the
    /// output mirror if one is set.
    ///
    /// ## Errors
    ///
    /// Returns [`TableError::Mirror`] if writing fails; the error still
    /// carries the rendered table.
    pub fn render_mirrored(&mut self) -> TableResult<String> {
        let output = self.render();
        if let Some(mirror) = self.output_mirror.as_mut() {
            let written = mirror
                .write_all(output.as_bytes())
                .and_then(|_| mirror.write_all(b"\n"))
                .and_then(|_| mirror.flush());
            if let Err(source) = written {
                tracing::error!(error = %source, "failed to mirror rendered table");
                return Err(TableError::Mirror { output, source });
            }
        }
        Ok(output)
    }

    /// Renders the table as CSV.
    pub fn render_csv(&self) -> String {
        CsvEncoder.encode(&self.resolve())
    }

    /// Renders the table as a GitHub-flavored Markdown table.
    pub fn render_markdown(&self) -> String {
        MarkdownEncoder.encode(&self.resolve())
    }

    /// Renders the table as an HTML `<table>`.
    pub fn render_html(&self) -> String {
        HtmlEncoder::new(self.config().html_css_class).encode(&self.resolve())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::row;
    use std::io;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

    impl SharedBuffer {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    impl Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn append_footer_does_not_count() {
        let mut table = Table::new();
        table.append_footer(row![]);
        table.append_footer(row![]);
        assert_eq!(table.len(), 0);
        assert_eq!(table.footer_rows().len(), 2);
        assert!(table.header_rows().is_empty());
    }

    #[test]
    fn append_header_does_not_count() {
        let mut table = Table::new();
        table.append_header(row![]);
        assert_eq!(table.len(), 0);
        assert_eq!(table.header_rows().len(), 1);
        assert!(table.footer_rows().is_empty());
    }

    #[test]
    fn append_row_and_rows_count() {
        let mut table = Table::new();
        assert!(table.is_empty());
        table.append_row(row![]);
        assert_eq!(table.len(), 1);
        table.append_rows(vec![row![], row![1]]);
        assert_eq!(table.len(), 3);
        table.append_header(row!["#"]);
        assert_eq!(table.len(), 3);
    }

    #[test]
    fn style_is_unset_until_chosen() {
        let mut table = Table::new();
        assert!(table.style().is_none());
        assert_eq!(table.config().style, &Style::default());
        table.set_style(Style::bold());
        assert_eq!(table.style(), Some(&Style::bold()));
    }

    #[test]
    fn setters_replace_previous_values() {
        let mut table = Table::new();
        assert!(table.align().is_none());
        table.set_align(vec![]);
        assert_eq!(table.align(), Some(&[][..]));
        table.set_align(vec![Align::Right]);
        assert_eq!(table.align(), Some(&[Align::Right][..]));

        table.set_allowed_column_lengths(vec![1, 2]);
        table.set_allowed_column_lengths(vec![3]);
        assert_eq!(table.allowed_column_lengths(), &[3]);

        table.set_caption("test-caption");
        assert_eq!(table.caption(), "test-caption");
        assert_eq!(table.config().caption, "test-caption");
    }

    #[test]
    fn toggles_are_reflected_in_config() {
        let mut table = Table::new();
        assert!(table.border_visible());
        assert!(!table.separators_visible());
        table.show_border(false);
        table.show_separators(true);
        table.set_auto_index(true);
        let config = table.config();
        assert!(!config.show_border);
        assert!(config.show_separators);
        assert!(config.auto_index);
    }

    #[test]
    fn html_class_defaults() {
        let mut table = Table::new();
        assert_eq!(table.html_css_class(), "");
        assert_eq!(table.config().html_css_class, DEFAULT_HTML_CSS_CLASS);
        table.set_html_css_class("test-css-class");
        assert_eq!(table.config().html_css_class, "test-css-class");
    }

    #[test]
    fn mirror_receives_output_and_newline() {
        let buffer = SharedBuffer::default();
        let mut table = Table::new();
        table.append_row(row![1, "Arya", "Stark", 3000]);
        assert!(!table.has_output_mirror());
        table.set_output_mirror(buffer.clone());
        assert!(table.has_output_mirror());

        let out = table.render_mirrored().unwrap();
        assert_eq!(out, table.render());
        assert_eq!(buffer.contents(), format!("{out}\n"));
    }

    #[test]
    fn render_without_mirror_is_pure() {
        let mut table = Table::new();
        table.append_row(row![1]);
        assert_eq!(table.render_mirrored().unwrap(), table.render());
    }

    #[test]
    fn plain_render_leaves_the_mirror_untouched() {
        let buffer = SharedBuffer::default();
        let mut table = Table::new();
        table.append_row(row![1, "Arya"]);
        table.set_output_mirror(buffer.clone());

        let out = table.render();
        assert!(!out.is_empty());
        assert!(!table.render_csv().is_empty());
        assert_eq!(buffer.contents(), "");

        table.render_mirrored().unwrap();
        assert_eq!(buffer.contents(), format!("{out}\n"));
    }

    #[test]
    fn mirror_errors_keep_the_output() {
        let mut table = Table::new();
        table.append_row(row!["x"]);
        table.set_output_mirror(BrokenPipe);
        let err = table.render_mirrored().unwrap_err();
        assert_eq!(err.output(), table.render());
        let TableError::Mirror { source, .. } = err;
        assert_eq!(source.kind(), io::ErrorKind::BrokenPipe);

        table.clear_output_mirror();
        assert!(table.render_mirrored().is_ok());
    }

    #[test]
    fn debug_output_hides_the_mirror() {
        let mut table = Table::new();
        table.set_output_mirror(io::sink());
        let debug = format!("{table:?}");
        assert!(debug.contains("output_mirror: true"));
    }
}

//! # biscuit-table
//!
//! Render rows of mixed scalar values as aligned, bordered tables for the
//! terminal (or any other fixed-width text surface).
//!
//! A table is built by appending header, body and footer rows and is then
//! configured with a [`Style`], alignment, colors, width caps and a handful
//! of toggles before being rendered to a `String`.
//!
//! ## Quick Start
//!
//! ```
//! use biscuit_table::{row, Table};
//!
//! let mut table = Table::new();
//! table.append_header(row!["#", "First Name", "Last Name", "Salary"]);
//! table.append_row(row![1, "Arya", "Stark", 3000]);
//! table.append_row(row![20, "Jon", "Snow", 2000]);
//!
//! let out = table.render();
//! assert!(out.starts_with("+----+"));
//! assert!(out.contains("| FIRST NAME |"));
//! ```
//!
//! ## Pipeline
//!
//! Rendering is two passes over an immutable [`RenderConfig`] snapshot:
//!
//! 1. **measure** ([`layout`]) - values are normalized into display lines,
//!    column widths are resolved, over-wide lines are reflowed and every
//!    cell gets its alignment and color. The result is a [`ResolvedTable`].
//! 2. **render** ([`render`]) - the resolved model is composed into a
//!    bordered grid and the row-length cap is enforced.
//!
//! The [`encode`] module turns the same [`ResolvedTable`] into CSV,
//! Markdown or HTML.
//!
//! ## Modules
//!
//! - [`table`] - the caller-facing [`Table`]
//! - [`value`] - the [`Value`] cell variant and the [`row!`] macro
//! - [`style`] - border glyphs, text-case transforms and presets
//! - [`color`] - ANSI colors and text attributes
//! - [`text`] - escape-aware width, alignment and wrapping helpers
//! - [`layout`] - the measure pass
//! - [`render`] - the render pass
//! - [`encode`] - alternate encoders
//! - [`terminal`] - terminal width detection

pub mod color;
pub mod encode;
pub mod error;
pub mod layout;
pub mod render;
pub mod style;
pub mod table;
pub mod terminal;
pub mod text;
pub mod value;

pub use color::{Attribute, BasicColor, Color, Colors, RgbColor};
pub use encode::{CsvEncoder, Encoder, HtmlEncoder, MarkdownEncoder};
pub use error::{TableError, TableResult};
pub use layout::{ResolvedTable, RowKind};
pub use style::{BoxStyle, FormatOptions, Style, TextCase};
pub use table::{RenderConfig, Row, Table};
pub use text::align::{Align, VAlign};
pub use value::Value;

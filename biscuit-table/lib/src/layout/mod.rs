//! The measure pass.
//!
//! Turns the caller's rows and the [`RenderConfig`](crate::RenderConfig)
//! snapshot into a [`ResolvedTable`]: every value normalized into display
//! lines, every column measured (and capped), every over-wide line reflowed
//! and every cell assigned its alignment and colors.
//!
//! The resolved model is the input of the grid composer in
//! [`render`](crate::render) and of every [`Encoder`](crate::Encoder).

mod columns;
mod model;
mod normalize;
mod resolve;

pub use columns::{column_letters, resolve_columns};
pub use model::{Column, ColumnSource, ResolvedCell, ResolvedRow, ResolvedTable, RowKind};
pub use normalize::{Cell, NormalizedRow, Normalizer, SEPARATOR_SUBSTITUTE, TAB_WIDTH};
pub use resolve::{Rows, measure};

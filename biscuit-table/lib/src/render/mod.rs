//! The render pass.
//!
//! Takes a [`ResolvedTable`](crate::layout::ResolvedTable) and turns it into
//! bordered text:
//!
//! - [`compose`] builds border, separator and content lines
//! - [`truncate`] enforces the row-length cap on the composed lines

pub mod compose;
pub mod truncate;

pub use compose::{border_line, content_lines};
pub use truncate::truncate_lines;

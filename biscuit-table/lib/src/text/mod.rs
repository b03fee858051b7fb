//! Text helpers shared by the layout and render passes.
//!
//! - [`eval`] - escape-aware width measurement and cutting
//! - [`align`] - horizontal and vertical alignment
//! - [`wrap`] - hard character-boundary wrapping
//! - [`case`] - text-case transforms

pub mod align;
pub mod case;
pub mod eval;
pub mod wrap;

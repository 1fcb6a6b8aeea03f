//! Rectangular grids for text puzzles.
//!
//! This crate defines [`Grid`], a fixed-size row-major container addressed
//! by [`Point`], along with the construction, addressing, and neighbour
//! enumeration routines puzzle solutions build on.
//!
//! # Construction
//!
//! - [`Grid::new`]: explicit dimensions and a fill value
//! - [`Grid::from_lines`] / [`Grid::parse`]: one cell per character of
//!   equal-length text lines, mapped through a closure
//!
//! # Neighbours
//!
//! [`Grid::neighbours`] yields the in-bounds cells adjacent to a point
//! under an [`AdjacentDirection`] policy. Offsets that leave the grid are
//! skipped; [`EdgeBehavior`] opts into clamped or toroidal edges instead.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod edge;
pub mod error;
pub mod grid;
pub mod neighbours;
pub mod parse;

#[cfg(test)]
pub(crate) mod compliance;

pub use edge::EdgeBehavior;
pub use error::GridError;
pub use grid::Grid;
pub use neighbours::Neighbours;
pub use parse::ParseOptions;
pub use tessel_core::{AdjacentDirection, Point};

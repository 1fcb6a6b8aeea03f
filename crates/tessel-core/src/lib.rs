//! Core value types for the Tessel grid toolkit.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! two value types every grid operation is expressed in:
//!
//! - [`Point`]: an immutable `(row, col)` coordinate.
//! - [`AdjacentDirection`]: which neighbouring offsets count as adjacent.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod direction;
pub mod point;

pub use direction::{
    AdjacentDirection, ParseDirectionError, ALL_OFFSETS, CARDINAL_OFFSETS, DIAGONAL_OFFSETS,
};
pub use point::Point;

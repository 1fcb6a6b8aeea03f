//! Tessel: rectangular grids for text puzzles.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the Tessel sub-crates. For most users, adding `tessel` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use tessel::prelude::*;
//!
//! // Parse a puzzle block, one cell per character.
//! let grid = Grid::parse("S.#\n..#\n#.E", |ch| ch).unwrap();
//! assert_eq!(grid.cell_count(), 9);
//!
//! let start = grid.position(|&c| c == 'S').unwrap();
//! assert_eq!(start, Point::new(0, 0));
//!
//! // Open cardinal neighbours of the start cell.
//! let open: Vec<Point> = grid
//!     .neighbours(start, AdjacentDirection::Cardinal)
//!     .filter(|&p| grid[p] != '#')
//!     .collect();
//! assert_eq!(open, vec![Point::new(1, 0), Point::new(0, 1)]);
//!
//! // Direct access outside the grid is an error, not a clamp.
//! assert!(grid.at_rc(3, 0).is_err());
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `tessel-core` | `Point`, `AdjacentDirection`, offset tables |
//! | [`grid`] | `tessel-grid` | `Grid`, errors, parse options, edge behavior |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Coordinate and adjacency value types (`tessel-core`).
pub use tessel_core as types;

/// Grid storage, parsing, and neighbour enumeration (`tessel-grid`).
pub use tessel_grid as grid;

/// Common imports for puzzle code.
///
/// ```rust
/// use tessel::prelude::*;
///
/// let g = Grid::new(2, 2, 0u8).unwrap();
/// assert_eq!(g.neighbours(Point::ORIGIN, AdjacentDirection::All).count(), 3);
/// ```
pub mod prelude {
    pub use tessel_core::{AdjacentDirection, Point};
    pub use tessel_grid::{EdgeBehavior, Grid, GridError, Neighbours, ParseOptions};
}

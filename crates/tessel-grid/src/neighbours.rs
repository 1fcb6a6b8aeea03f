//! Lazy neighbour enumeration.

use crate::edge::EdgeBehavior;
use std::iter::FusedIterator;
use std::slice;
use tessel_core::{AdjacentDirection, Point};

/// Iterator over the neighbours of one cell under an adjacency policy.
///
/// Produced by [`Grid::neighbours`](crate::Grid::neighbours) and
/// [`Grid::neighbours_with_edge`](crate::Grid::neighbours_with_edge).
/// Yields coordinates in the policy's offset order, skipping offsets that
/// fall outside the grid under [`EdgeBehavior::Absorb`].
///
/// The iterator copies the grid's dimensions instead of borrowing the
/// grid, so callers may mutate cells while walking neighbours. Clone it
/// to enumerate the same sequence again.
#[derive(Clone, Debug)]
pub struct Neighbours {
    origin: Point,
    offsets: slice::Iter<'static, Point>,
    rows: i32,
    cols: i32,
    edge: EdgeBehavior,
}

impl Neighbours {
    pub(crate) fn new(
        origin: Point,
        direction: AdjacentDirection,
        rows: i32,
        cols: i32,
        edge: EdgeBehavior,
    ) -> Self {
        Self {
            origin,
            offsets: direction.offsets().iter(),
            rows,
            cols,
            edge,
        }
    }

    /// The cell whose neighbours are being enumerated.
    pub fn origin(&self) -> Point {
        self.origin
    }
}

impl Iterator for Neighbours {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        for &delta in self.offsets.by_ref() {
            let candidate = self.origin.plus(delta);
            let r = self.edge.resolve_axis(candidate.row(), self.rows);
            let c = self.edge.resolve_axis(candidate.col(), self.cols);
            if let (Some(r), Some(c)) = (r, c) {
                return Some(Point::new(r, c));
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.offsets.len()))
    }
}

impl FusedIterator for Neighbours {}

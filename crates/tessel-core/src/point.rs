//! The [`Point`] coordinate type.

use std::fmt;
use std::ops::{Add, Neg, Sub};

/// An immutable two-dimensional integer coordinate.
///
/// Any `(row, col)` pair is a legal `Point`; range checking belongs to
/// the grid being addressed. Ordering is row-major (row first, then
/// column), which matches the canonical cell order of a grid.
///
/// Points double as offsets: adjacency tables in
/// [`AdjacentDirection`](crate::AdjacentDirection) are stored as `Point`
/// deltas and applied with [`plus`](Point::plus).
///
/// # Examples
///
/// ```
/// use tessel_core::Point;
///
/// let p = Point::new(2, 3);
/// let south = Point::new(1, 0);
/// assert_eq!(p.plus(south), Point::new(3, 3));
/// assert_eq!(p - Point::new(2, 3), Point::ORIGIN);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Point {
    row: i32,
    col: i32,
}

impl Point {
    /// The point `(0, 0)`.
    pub const ORIGIN: Point = Point::new(0, 0);

    /// Create a point. No validation is performed.
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Row component.
    pub const fn row(&self) -> i32 {
        self.row
    }

    /// Column component.
    pub const fn col(&self) -> i32 {
        self.col
    }

    /// Translate by `delta`, returning a new point.
    ///
    /// Arithmetic wraps on `i32` overflow so that probing neighbours of
    /// extreme coordinates never panics; wrapped results land far outside
    /// any grid and are filtered by bounds checks.
    pub const fn plus(self, delta: Point) -> Point {
        Point::new(
            self.row.wrapping_add(delta.row),
            self.col.wrapping_add(delta.col),
        )
    }

    /// Manhattan (L1) distance to `other`.
    ///
    /// Widened to `u64`: the two axis distances of extreme points can each
    /// reach `u32::MAX`.
    pub fn manhattan(self, other: Point) -> u64 {
        u64::from(self.row.abs_diff(other.row)) + u64::from(self.col.abs_diff(other.col))
    }

    /// Chebyshev (L-inf) distance to `other`.
    pub fn chebyshev(self, other: Point) -> u32 {
        self.row.abs_diff(other.row).max(self.col.abs_diff(other.col))
    }
}

impl From<(i32, i32)> for Point {
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}

impl From<Point> for (i32, i32) {
    fn from(p: Point) -> Self {
        (p.row, p.col)
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        self.plus(rhs)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(
            self.row.wrapping_sub(rhs.row),
            self.col.wrapping_sub(rhs.col),
        )
    }
}

impl Neg for Point {
    type Output = Point;

    fn neg(self) -> Point {
        Point::new(self.row.wrapping_neg(), self.col.wrapping_neg())
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::HashSet;

    #[test]
    fn accessors_return_components() {
        let p = Point::new(-4, 7);
        assert_eq!(p.row(), -4);
        assert_eq!(p.col(), 7);
    }

    #[test]
    fn equal_points_hash_once() {
        let mut set = HashSet::new();
        set.insert(Point::new(1, 2));
        set.insert(Point::new(1, 2));
        set.insert(Point::new(2, 1));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn ordering_is_row_major() {
        let mut pts = vec![Point::new(1, 0), Point::new(0, 5), Point::new(0, 1)];
        pts.sort();
        assert_eq!(pts, vec![Point::new(0, 1), Point::new(0, 5), Point::new(1, 0)]);
    }

    #[test]
    fn plus_at_extremes_does_not_panic() {
        let p = Point::new(i32::MAX, i32::MIN);
        let q = p.plus(Point::new(1, -1));
        assert_eq!(q, Point::new(i32::MIN, i32::MAX));
    }

    #[test]
    fn distances() {
        let a = Point::new(0, 0);
        let b = Point::new(3, -4);
        assert_eq!(a.manhattan(b), 7);
        assert_eq!(a.chebyshev(b), 4);
    }

    #[test]
    fn distances_at_coordinate_extremes() {
        let lo = Point::new(i32::MIN, i32::MIN);
        let hi = Point::new(i32::MAX, i32::MAX);
        assert_eq!(lo.manhattan(hi), 2 * u64::from(u32::MAX));
        assert_eq!(hi.manhattan(lo), lo.manhattan(hi));
        assert_eq!(lo.chebyshev(hi), u32::MAX);
    }

    #[test]
    fn display_and_tuple_conversion() {
        let p: Point = (3, 9).into();
        assert_eq!(p.to_string(), "(3, 9)");
        assert_eq!(<(i32, i32)>::from(p), (3, 9));
    }

    proptest! {
        #[test]
        fn plus_then_minus_is_identity(
            r in -1000i32..1000, c in -1000i32..1000,
            dr in -1000i32..1000, dc in -1000i32..1000,
        ) {
            let p = Point::new(r, c);
            let d = Point::new(dr, dc);
            prop_assert_eq!((p + d) - d, p);
            prop_assert_eq!(p + (-d), p - d);
        }

        #[test]
        fn manhattan_is_symmetric(
            ar in any::<i32>(), ac in any::<i32>(),
            br in any::<i32>(), bc in any::<i32>(),
        ) {
            let a = Point::new(ar, ac);
            let b = Point::new(br, bc);
            prop_assert_eq!(a.manhattan(b), b.manhattan(a));
            prop_assert!(u64::from(a.chebyshev(b)) <= a.manhattan(b));
        }
    }
}

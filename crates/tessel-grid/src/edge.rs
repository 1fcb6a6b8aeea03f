//! Edge (boundary) behavior for neighbour enumeration.

/// How neighbour enumeration treats offsets that leave the grid.
///
/// [`Grid::neighbours`](crate::Grid::neighbours) always uses `Absorb`;
/// the other behaviors are opt-in through
/// [`Grid::neighbours_with_edge`](crate::Grid::neighbours_with_edge).
///
/// # Examples
///
/// ```
/// use tessel_grid::{AdjacentDirection, EdgeBehavior, Grid, Point};
///
/// let grid = Grid::new(4, 4, 0u8).unwrap();
/// let corner = Point::new(0, 0);
///
/// // Absorb: corner has 2 cardinal neighbours.
/// assert_eq!(grid.neighbours(corner, AdjacentDirection::Cardinal).count(), 2);
///
/// // Wrap: every cell has 4 (torus).
/// let wrapped = grid.neighbours_with_edge(corner, AdjacentDirection::Cardinal, EdgeBehavior::Wrap);
/// assert_eq!(wrapped.count(), 4);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum EdgeBehavior {
    /// Out-of-bounds neighbour is omitted (fewer neighbours at edges).
    #[default]
    Absorb,
    /// Out-of-bounds neighbour maps to the boundary cell (self-loop).
    Clamp,
    /// Out-of-bounds neighbour wraps to the opposite side (periodic).
    Wrap,
}

impl EdgeBehavior {
    /// Resolve a single axis value against an axis of length `len`.
    ///
    /// Returns `None` when the value is out of range under `Absorb`, or
    /// when the axis is empty.
    pub(crate) fn resolve_axis(self, val: i32, len: i32) -> Option<i32> {
        if len <= 0 {
            return None;
        }
        if (0..len).contains(&val) {
            return Some(val);
        }
        match self {
            Self::Absorb => None,
            Self::Clamp => Some(val.clamp(0, len - 1)),
            Self::Wrap => Some(val.rem_euclid(len)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn in_range_is_identity_for_all_behaviors() {
        for edge in [EdgeBehavior::Absorb, EdgeBehavior::Clamp, EdgeBehavior::Wrap] {
            assert_eq!(edge.resolve_axis(3, 5), Some(3));
        }
    }

    #[test]
    fn out_of_range() {
        assert_eq!(EdgeBehavior::Absorb.resolve_axis(-1, 5), None);
        assert_eq!(EdgeBehavior::Absorb.resolve_axis(5, 5), None);
        assert_eq!(EdgeBehavior::Clamp.resolve_axis(-1, 5), Some(0));
        assert_eq!(EdgeBehavior::Clamp.resolve_axis(7, 5), Some(4));
        assert_eq!(EdgeBehavior::Wrap.resolve_axis(-1, 5), Some(4));
        assert_eq!(EdgeBehavior::Wrap.resolve_axis(5, 5), Some(0));
    }

    #[test]
    fn empty_axis_resolves_nothing() {
        for edge in [EdgeBehavior::Absorb, EdgeBehavior::Clamp, EdgeBehavior::Wrap] {
            assert_eq!(edge.resolve_axis(0, 0), None);
        }
    }

    #[test]
    fn default_is_absorb() {
        assert_eq!(EdgeBehavior::default(), EdgeBehavior::Absorb);
    }
}

//! Adjacency policies: which neighbouring offsets count as adjacent.

use crate::point::Point;
use std::error::Error;
use std::fmt;
use std::str::FromStr;

/// The 4 cardinal offsets in iteration order: N, S, W, E.
pub const CARDINAL_OFFSETS: [Point; 4] = [
    Point::new(-1, 0),
    Point::new(1, 0),
    Point::new(0, -1),
    Point::new(0, 1),
];

/// The 4 diagonal offsets in iteration order: NW, NE, SW, SE.
pub const DIAGONAL_OFFSETS: [Point; 4] = [
    Point::new(-1, -1),
    Point::new(-1, 1),
    Point::new(1, -1),
    Point::new(1, 1),
];

/// All 8 offsets: the cardinal offsets followed by the diagonal offsets.
pub const ALL_OFFSETS: [Point; 8] = [
    Point::new(-1, 0),
    Point::new(1, 0),
    Point::new(0, -1),
    Point::new(0, 1),
    Point::new(-1, -1),
    Point::new(-1, 1),
    Point::new(1, -1),
    Point::new(1, 1),
];

/// A named adjacency policy.
///
/// Each variant owns a fixed, ordered table of offsets. The order is part
/// of the contract: neighbour enumeration visits offsets in exactly this
/// order, so searches that break ties by discovery order are
/// deterministic.
///
/// | Variant | Offsets (row, col) |
/// |---------|--------------------|
/// | `Cardinal` | `(-1,0) (1,0) (0,-1) (0,1)` |
/// | `Diagonal` | `(-1,-1) (-1,1) (1,-1) (1,1)` |
/// | `All` | cardinal, then diagonal |
///
/// # Examples
///
/// ```
/// use tessel_core::{AdjacentDirection, Point};
///
/// assert_eq!(AdjacentDirection::All.degree(), 8);
/// assert!(AdjacentDirection::All.is_cardinal());
/// assert!(AdjacentDirection::All.is_diagonal());
/// assert_eq!(
///     AdjacentDirection::classify(Point::new(1, -1)),
///     Some(AdjacentDirection::Diagonal),
/// );
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AdjacentDirection {
    /// North, south, west, east.
    Cardinal,
    /// The four diagonals.
    Diagonal,
    /// Cardinal and diagonal together (Moore neighbourhood).
    All,
}

impl AdjacentDirection {
    /// Every variant, in declaration order.
    pub const VARIANTS: [AdjacentDirection; 3] = [Self::Cardinal, Self::Diagonal, Self::All];

    /// The ordered offset table for this policy.
    pub const fn offsets(self) -> &'static [Point] {
        match self {
            Self::Cardinal => &CARDINAL_OFFSETS,
            Self::Diagonal => &DIAGONAL_OFFSETS,
            Self::All => &ALL_OFFSETS,
        }
    }

    /// Number of offsets in this policy.
    pub const fn degree(self) -> usize {
        self.offsets().len()
    }

    /// Whether `offset` is a member of this policy.
    pub fn contains(self, offset: Point) -> bool {
        self.offsets().contains(&offset)
    }

    /// Whether this policy includes the cardinal offsets.
    ///
    /// True for `Cardinal` and `All`.
    pub fn is_cardinal(self) -> bool {
        CARDINAL_OFFSETS.iter().all(|&o| self.contains(o))
    }

    /// Whether this policy includes the diagonal offsets.
    ///
    /// True for `Diagonal` and `All`.
    pub fn is_diagonal(self) -> bool {
        DIAGONAL_OFFSETS.iter().all(|&o| self.contains(o))
    }

    /// Classify a single unit offset as `Cardinal` or `Diagonal`.
    ///
    /// Returns `None` for the zero offset and anything further than one
    /// step away.
    pub fn classify(offset: Point) -> Option<AdjacentDirection> {
        if Self::Cardinal.contains(offset) {
            Some(Self::Cardinal)
        } else if Self::Diagonal.contains(offset) {
            Some(Self::Diagonal)
        } else {
            None
        }
    }

    /// Canonical lowercase name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Cardinal => "cardinal",
            Self::Diagonal => "diagonal",
            Self::All => "all",
        }
    }
}

impl fmt::Display for AdjacentDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a string names no adjacency policy.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseDirectionError {
    /// The rejected input.
    pub input: String,
}

impl fmt::Display for ParseDirectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown adjacency policy '{}': expected cardinal, diagonal, all, 4 or 8",
            self.input
        )
    }
}

impl Error for ParseDirectionError {}

impl FromStr for AdjacentDirection {
    type Err = ParseDirectionError;

    /// Accepts the canonical names case-insensitively, plus `4` for
    /// `Cardinal` and `8` for `All`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cardinal" | "4" => Ok(Self::Cardinal),
            "diagonal" => Ok(Self::Diagonal),
            "all" | "8" => Ok(Self::All),
            _ => Err(ParseDirectionError {
                input: s.to_string(),
            }),
        }
    }
}

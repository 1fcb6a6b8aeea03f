//! Error types for grid construction and addressing.

use std::error::Error;
use std::fmt;
use tessel_core::Point;

/// Errors arising from grid construction or cell addressing.
///
/// Neighbour enumeration never produces these: out-of-bounds candidates
/// are skipped, not reported.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridError {
    /// Dimensioned construction was given an unusable shape.
    InvalidDimension {
        /// Requested row count.
        rows: i32,
        /// Requested column count.
        cols: i32,
        /// What went wrong.
        reason: &'static str,
    },
    /// Text input could not be turned into a rectangular grid.
    MalformedInput {
        /// Zero-based index of the offending line.
        line: usize,
        /// What went wrong.
        reason: String,
    },
    /// A coordinate lies outside `[0, rows) x [0, cols)`.
    OutOfBounds {
        /// The offending coordinate.
        point: Point,
        /// Row count of the addressed grid.
        rows: i32,
        /// Column count of the addressed grid.
        cols: i32,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimension { rows, cols, reason } => {
                write!(f, "invalid grid dimensions {rows}x{cols}: {reason}")
            }
            Self::MalformedInput { line, reason } => {
                write!(f, "malformed grid input at line {line}: {reason}")
            }
            Self::OutOfBounds { point, rows, cols } => {
                write!(f, "point {point} out of bounds: [0, {rows}) x [0, {cols})")
            }
        }
    }
}

impl Error for GridError {}

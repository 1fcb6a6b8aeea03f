//! The [`Grid`] container.

use crate::edge::EdgeBehavior;
use crate::error::GridError;
use crate::neighbours::Neighbours;
use smallvec::SmallVec;
use std::fmt;
use std::ops::{Index, IndexMut};
use tessel_core::{AdjacentDirection, Point};

/// A fixed-size rectangular grid of `T`, addressed by [`Point`].
///
/// Cell `(row, col)` is valid when `0 <= row < rows` and
/// `0 <= col < cols`. Storage is a single row-major buffer of
/// `rows * cols` elements; `(r, c)` lives at index `r * cols + c`, which
/// is also the cell's [`rank`](Grid::rank) in canonical order.
///
/// Zero-sized grids (either dimension 0) are legal and contain no
/// addressable cells.
///
/// Equality and hashing are structural: two grids are equal when their
/// dimensions match and every corresponding cell is equal, so grids can
/// key a `HashSet` of visited puzzle states.
///
/// # Examples
///
/// ```
/// use tessel_grid::{AdjacentDirection, Grid, Point};
///
/// let grid = Grid::from_lines(["12", "23"], |ch| ch.to_digit(10).unwrap()).unwrap();
/// assert_eq!(grid.cell_count(), 4);
/// assert_eq!(grid.at_rc(1, 1), Ok(&3));
///
/// let n: Vec<Point> = grid.neighbours(Point::new(0, 0), AdjacentDirection::All).collect();
/// assert_eq!(n, vec![Point::new(1, 0), Point::new(0, 1), Point::new(1, 1)]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Grid<T> {
    rows: i32,
    cols: i32,
    cells: Vec<T>,
}

impl<T> Grid<T> {
    /// Create a `rows x cols` grid with every cell set to `fill`.
    ///
    /// `fill` is an ordinary cell value; it is not remembered as an
    /// "unset" marker. Returns [`GridError::InvalidDimension`] if either
    /// dimension is negative, the buffer would exceed `isize::MAX` bytes,
    /// or the allocator cannot reserve it.
    pub fn new(rows: i32, cols: i32, fill: T) -> Result<Self, GridError>
    where
        T: Clone,
    {
        let len = Self::checked_len(rows, cols)?;
        let mut cells = Vec::new();
        cells
            .try_reserve_exact(len)
            .map_err(|_| GridError::InvalidDimension {
                rows,
                cols,
                reason: "cell count exceeds addressable memory",
            })?;
        cells.resize(len, fill);
        Ok(Self { rows, cols, cells })
    }

    /// Create a `rows x cols` grid of `T::default()`.
    pub fn from_default(rows: i32, cols: i32) -> Result<Self, GridError>
    where
        T: Default + Clone,
    {
        Self::new(rows, cols, T::default())
    }

    /// Adopt a row-major buffer as a `rows x cols` grid.
    ///
    /// Returns [`GridError::InvalidDimension`] if a dimension is negative
    /// or `cells.len() != rows * cols`.
    pub fn from_vec(rows: i32, cols: i32, cells: Vec<T>) -> Result<Self, GridError> {
        let len = Self::checked_len(rows, cols)?;
        if cells.len() != len {
            return Err(GridError::InvalidDimension {
                rows,
                cols,
                reason: "buffer length does not match rows * cols",
            });
        }
        Ok(Self { rows, cols, cells })
    }

    fn checked_len(rows: i32, cols: i32) -> Result<usize, GridError> {
        if rows < 0 || cols < 0 {
            return Err(GridError::InvalidDimension {
                rows,
                cols,
                reason: "dimensions must be non-negative",
            });
        }
        let len = (rows as usize).checked_mul(cols as usize);
        let bytes = len.and_then(|n| n.checked_mul(std::mem::size_of::<T>()));
        match (len, bytes) {
            (Some(len), Some(bytes)) if bytes <= isize::MAX as usize => Ok(len),
            _ => Err(GridError::InvalidDimension {
                rows,
                cols,
                reason: "cell count exceeds addressable memory",
            }),
        }
    }

    /// Number of rows.
    pub fn rows(&self) -> i32 {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> i32 {
        self.cols
    }

    /// Total number of cells, `rows * cols`. Zero for zero-sized grids.
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Returns `true` if the grid has no addressable cells.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether `p` addresses a cell of this grid.
    pub fn contains(&self, p: Point) -> bool {
        (0..self.rows).contains(&p.row()) && (0..self.cols).contains(&p.col())
    }

    /// Row-major position of `p`, or `None` if out of bounds.
    pub fn rank(&self, p: Point) -> Option<usize> {
        if self.contains(p) {
            Some(p.row() as usize * self.cols as usize + p.col() as usize)
        } else {
            None
        }
    }

    /// Inverse of [`rank`](Grid::rank).
    pub fn point_at(&self, rank: usize) -> Option<Point> {
        if rank >= self.cells.len() {
            return None;
        }
        let cols = self.cols as usize;
        Some(Point::new((rank / cols) as i32, (rank % cols) as i32))
    }

    fn out_of_bounds(&self, p: Point) -> GridError {
        GridError::OutOfBounds {
            point: p,
            rows: self.rows,
            cols: self.cols,
        }
    }

    // ── Cell access ─────────────────────────────────────────────

    /// The element at `p`, or [`GridError::OutOfBounds`].
    pub fn at(&self, p: Point) -> Result<&T, GridError> {
        self.get(p).ok_or_else(|| self.out_of_bounds(p))
    }

    /// The element at `(row, col)`, or [`GridError::OutOfBounds`].
    pub fn at_rc(&self, row: i32, col: i32) -> Result<&T, GridError> {
        self.at(Point::new(row, col))
    }

    /// Replace the element at `p`, returning the previous value.
    pub fn set(&mut self, p: Point, value: T) -> Result<T, GridError> {
        match self.rank(p) {
            Some(i) => Ok(std::mem::replace(&mut self.cells[i], value)),
            None => Err(self.out_of_bounds(p)),
        }
    }

    /// The element at `p`, or `None` if out of bounds.
    pub fn get(&self, p: Point) -> Option<&T> {
        self.rank(p).map(|i| &self.cells[i])
    }

    /// Mutable access to the element at `p`, or `None` if out of bounds.
    pub fn get_mut(&mut self, p: Point) -> Option<&mut T> {
        self.rank(p).map(|i| &mut self.cells[i])
    }

    /// Overwrite every cell with `value`.
    pub fn fill(&mut self, value: T)
    where
        T: Clone,
    {
        self.cells.fill(value);
    }

    /// The row-major backing buffer.
    pub fn as_slice(&self) -> &[T] {
        &self.cells
    }

    /// The cells of row `r`, or `None` if `r` is out of range.
    pub fn row(&self, r: i32) -> Option<&[T]> {
        if !(0..self.rows).contains(&r) {
            return None;
        }
        let start = r as usize * self.cols as usize;
        Some(&self.cells[start..start + self.cols as usize])
    }

    // ── Neighbours ──────────────────────────────────────────────

    /// In-bounds neighbours of `p` under `direction`.
    ///
    /// Candidates are produced in the policy's offset order and any that
    /// fall outside the grid are skipped, so edge and corner cells have
    /// fewer neighbours. Skipping is not an error.
    pub fn neighbours(&self, p: Point, direction: AdjacentDirection) -> Neighbours {
        self.neighbours_with_edge(p, direction, EdgeBehavior::Absorb)
    }

    /// Neighbours of `p` under `direction` with an explicit edge policy.
    ///
    /// `Clamp` may yield `p` itself; `Wrap` treats the grid as a torus.
    pub fn neighbours_with_edge(
        &self,
        p: Point,
        direction: AdjacentDirection,
        edge: EdgeBehavior,
    ) -> Neighbours {
        Neighbours::new(p, direction, self.rows, self.cols, edge)
    }

    /// [`neighbours`](Grid::neighbours) collected without heap allocation.
    pub fn neighbour_vec(&self, p: Point, direction: AdjacentDirection) -> SmallVec<[Point; 8]> {
        self.neighbours(p, direction).collect()
    }

    // ── Iteration ───────────────────────────────────────────────

    /// Every valid coordinate in row-major order.
    pub fn points(&self) -> impl Iterator<Item = Point> + Clone {
        let cols = self.cols;
        (0..self.rows).flat_map(move |r| (0..cols).map(move |c| Point::new(r, c)))
    }

    /// Every cell with its coordinate, in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Point, &T)> + '_ {
        self.points().zip(self.cells.iter())
    }

    /// Every cell mutably with its coordinate, in row-major order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (Point, &mut T)> + '_ {
        self.points().zip(self.cells.iter_mut())
    }

    /// First coordinate (row-major) whose cell satisfies `pred`.
    pub fn position(&self, mut pred: impl FnMut(&T) -> bool) -> Option<Point> {
        self.cells
            .iter()
            .position(|v| pred(v))
            .and_then(|i| self.point_at(i))
    }

    /// Every coordinate whose cell satisfies `pred`, in row-major order.
    pub fn positions<'a>(
        &'a self,
        mut pred: impl FnMut(&T) -> bool + 'a,
    ) -> impl Iterator<Item = Point> + 'a {
        self.iter().filter_map(move |(p, v)| pred(v).then_some(p))
    }

    /// Number of cells satisfying `pred`.
    pub fn count(&self, mut pred: impl FnMut(&T) -> bool) -> usize {
        self.cells.iter().filter(|v| pred(*v)).count()
    }

    // ── Transforms ──────────────────────────────────────────────

    /// A grid of the same shape with `f` applied to every cell.
    pub fn map<U>(&self, f: impl FnMut(&T) -> U) -> Grid<U> {
        Grid {
            rows: self.rows,
            cols: self.cols,
            cells: self.cells.iter().map(f).collect(),
        }
    }

    /// Rows and columns swapped.
    pub fn transposed(&self) -> Grid<T>
    where
        T: Clone,
    {
        let (rows, cols) = (self.cols, self.rows);
        let mut cells = Vec::with_capacity(self.cells.len());
        for r in 0..rows {
            for c in 0..cols {
                cells.push(self[Point::new(c, r)].clone());
            }
        }
        Grid { rows, cols, cells }
    }

    /// A copy surrounded by `border` rows and columns of `fill` on every side.
    ///
    /// Cell `p` of `self` lands at `p + (border, border)`.
    pub fn padded(&self, border: i32, fill: T) -> Result<Grid<T>, GridError>
    where
        T: Clone,
    {
        let grow = |n: i32| border.checked_mul(2).and_then(|b| n.checked_add(b));
        let (rows, cols) = match (border >= 0, grow(self.rows), grow(self.cols)) {
            (true, Some(rows), Some(cols)) => (rows, cols),
            _ => {
                return Err(GridError::InvalidDimension {
                    rows: self.rows,
                    cols: self.cols,
                    reason: "padding border must be non-negative and fit in i32",
                })
            }
        };
        let mut out = Grid::new(rows, cols, fill)?;
        let shift = Point::new(border, border);
        for (p, v) in self.iter() {
            out[p + shift] = v.clone();
        }
        Ok(out)
    }

    /// Render one character per cell, rows joined by `\n`.
    ///
    /// The inverse of [`Grid::parse`] for a matching pair of mappings.
    pub fn render(&self, mut f: impl FnMut(&T) -> char) -> String {
        let mut out = String::with_capacity(self.cells.len() + self.rows.max(0) as usize);
        for r in 0..self.rows {
            if r > 0 {
                out.push('\n');
            }
            for v in self.row(r).unwrap_or_default() {
                out.push(f(v));
            }
        }
        out
    }
}

impl<T> Index<Point> for Grid<T> {
    type Output = T;

    /// # Panics
    ///
    /// Panics if `p` is out of bounds. Use [`Grid::at`] or [`Grid::get`]
    /// for a checked lookup.
    fn index(&self, p: Point) -> &T {
        match self.rank(p) {
            Some(i) => &self.cells[i],
            None => panic!("{}", self.out_of_bounds(p)),
        }
    }
}

impl<T> IndexMut<Point> for Grid<T> {
    fn index_mut(&mut self, p: Point) -> &mut T {
        match self.rank(p) {
            Some(i) => &mut self.cells[i],
            None => panic!("{}", self.out_of_bounds(p)),
        }
    }
}

impl<T: fmt::Display> fmt::Display for Grid<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..self.rows {
            if r > 0 {
                writeln!(f)?;
            }
            for v in self.row(r).unwrap_or_default() {
                write!(f, "{v}")?;
            }
        }
        Ok(())
    }
}

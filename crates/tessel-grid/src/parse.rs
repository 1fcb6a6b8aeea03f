//! Parse construction: building a [`Grid`] from lines of text.
//!
//! Every line becomes one row and every character one cell, mapped
//! through a caller-supplied function. All rows must have the same number
//! of characters (Unicode scalar values, not bytes).

use crate::error::GridError;
use crate::grid::Grid;
use tessel_core::Point;

/// Options controlling how text lines are turned into grid rows.
///
/// The defaults accept exactly what [`Grid::from_lines`] accepts: every
/// line is a row, and empty input produces a `0 x 0` grid.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ParseOptions {
    /// Reject empty input instead of producing a `0 x 0` grid. Default: false.
    pub require_rows: bool,
    /// Drop lines that are empty once trailing `\r`/`\n` are ignored,
    /// whether or not [`trim_carriage_returns`](Self::trim_carriage_returns)
    /// is set. Default: false.
    pub skip_blank_lines: bool,
    /// Strip one trailing `\r` from each line. Default: false.
    pub trim_carriage_returns: bool,
}

impl ParseOptions {
    /// Options for raw puzzle input files: trailing blank lines and CRLF
    /// line endings are tolerated, and the input must not be empty.
    pub fn lenient_file() -> Self {
        Self {
            require_rows: true,
            skip_blank_lines: true,
            trim_carriage_returns: true,
        }
    }

    /// Set [`require_rows`](Self::require_rows).
    pub fn with_require_rows(mut self, yes: bool) -> Self {
        self.require_rows = yes;
        self
    }

    /// Set [`skip_blank_lines`](Self::skip_blank_lines).
    pub fn with_skip_blank_lines(mut self, yes: bool) -> Self {
        self.skip_blank_lines = yes;
        self
    }

    /// Set [`trim_carriage_returns`](Self::trim_carriage_returns).
    pub fn with_trim_carriage_returns(mut self, yes: bool) -> Self {
        self.trim_carriage_returns = yes;
        self
    }
}

impl<T> Grid<T> {
    /// Build a grid from equal-length text lines, one cell per character.
    ///
    /// Cell `(r, c)` is `mapping(lines[r][c])`. Empty input yields a
    /// `0 x 0` grid. Lines of differing length fail with
    /// [`GridError::MalformedInput`] naming the first offending line.
    ///
    /// # Examples
    ///
    /// ```
    /// use tessel_grid::Grid;
    ///
    /// let grid = Grid::from_lines(["#.", ".#"], |ch| ch == '#').unwrap();
    /// assert_eq!(grid.count(|&wall| wall), 2);
    ///
    /// assert!(Grid::from_lines(["##", "#"], |ch| ch).is_err());
    /// ```
    pub fn from_lines<I, S>(lines: I, mapping: impl FnMut(char) -> T) -> Result<Self, GridError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::from_lines_with(lines, &ParseOptions::default(), mapping)
    }

    /// [`from_lines`](Grid::from_lines) with explicit [`ParseOptions`].
    pub fn from_lines_with<I, S>(
        lines: I,
        options: &ParseOptions,
        mut mapping: impl FnMut(char) -> T,
    ) -> Result<Self, GridError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        build(lines, options, |_, ch| Ok(mapping(ch)))
    }

    /// Build a grid from a block of text split on line endings.
    ///
    /// Uses [`str::lines`], so a single trailing newline does not add a row.
    pub fn parse(text: &str, mapping: impl FnMut(char) -> T) -> Result<Self, GridError> {
        Self::from_lines(text.lines(), mapping)
    }

    /// Like [`from_lines`](Grid::from_lines), but `mapping` may reject a
    /// character by returning `None`, which fails with
    /// [`GridError::MalformedInput`] naming the line and column.
    pub fn try_from_lines<I, S>(
        lines: I,
        mut mapping: impl FnMut(char) -> Option<T>,
    ) -> Result<Self, GridError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        build(lines, &ParseOptions::default(), |at, ch| {
            mapping(ch).ok_or_else(|| format!("unexpected character {ch:?} at column {}", at.col()))
        })
    }
}

fn malformed(line: usize, reason: impl Into<String>) -> GridError {
    GridError::MalformedInput {
        line,
        reason: reason.into(),
    }
}

fn build<T, I, S>(
    lines: I,
    options: &ParseOptions,
    mut cell: impl FnMut(Point, char) -> Result<T, String>,
) -> Result<Grid<T>, GridError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut cells = Vec::new();
    let mut width: Option<i32> = None;
    let mut rows: i32 = 0;

    for (line_no, line) in lines.into_iter().enumerate() {
        let mut text = line.as_ref();
        if options.trim_carriage_returns {
            text = text.strip_suffix('\r').unwrap_or(text);
        }
        if options.skip_blank_lines && text.trim_end_matches(['\r', '\n']).is_empty() {
            continue;
        }

        let found = i32::try_from(text.chars().count())
            .map_err(|_| malformed(line_no, "line has more than i32::MAX characters"))?;
        match width {
            None => width = Some(found),
            Some(expected) if expected != found => {
                return Err(malformed(
                    line_no,
                    format!("expected {expected} characters, found {found}"),
                ));
            }
            Some(_) => {}
        }

        for (col, ch) in (0..found).zip(text.chars()) {
            let value = cell(Point::new(rows, col), ch).map_err(|reason| malformed(line_no, reason))?;
            cells.push(value);
        }
        rows = rows
            .checked_add(1)
            .ok_or_else(|| malformed(line_no, "input has more than i32::MAX lines"))?;
    }

    if rows == 0 && options.require_rows {
        return Err(malformed(0, "input contains no rows"));
    }
    Grid::from_vec(rows, width.unwrap_or(0), cells)
}

//! Grid invariant checks shared by the test modules.
//!
//! Each function asserts one structural property of a grid's addressing
//! or neighbour enumeration. `run_full_compliance` runs them all for
//! every adjacency policy.

use crate::edge::EdgeBehavior;
use crate::grid::Grid;
use indexmap::IndexSet;
use tessel_core::{AdjacentDirection, Point};

/// Assert that `points()` visits exactly `cell_count` unique coordinates,
/// each of which round-trips through `rank`/`point_at`.
pub fn assert_points_complete<T>(grid: &Grid<T>) {
    let points: IndexSet<Point> = grid.points().collect();
    assert_eq!(
        points.len(),
        grid.cell_count(),
        "points() yielded {} unique coordinates, expected {}",
        points.len(),
        grid.cell_count()
    );
    for (i, p) in points.iter().enumerate() {
        assert!(grid.contains(*p), "points() yielded out-of-bounds {p}");
        assert_eq!(grid.rank(*p), Some(i), "rank({p}) is not its row-major position");
        assert_eq!(grid.point_at(i), Some(*p));
    }
}

/// Assert that absorbed neighbours are in bounds, distinct, and members of
/// the policy.
pub fn assert_neighbours_in_bounds<T>(grid: &Grid<T>, dir: AdjacentDirection) {
    for p in grid.points() {
        let seen: IndexSet<Point> = grid.neighbours(p, dir).collect();
        assert_eq!(
            seen.len(),
            grid.neighbours(p, dir).count(),
            "duplicate {dir} neighbours of {p}"
        );
        for n in &seen {
            assert!(grid.contains(*n), "{dir} neighbour {n} of {p} out of bounds");
            assert!(dir.contains(*n - p), "{n} is not a {dir} offset from {p}");
        }
    }
}

/// Assert that absorbed neighbours follow the policy's offset order.
pub fn assert_neighbour_order<T>(grid: &Grid<T>, dir: AdjacentDirection) {
    for p in grid.points() {
        let expected: Vec<Point> = dir
            .offsets()
            .iter()
            .map(|&d| p + d)
            .filter(|&n| grid.contains(n))
            .collect();
        let actual: Vec<Point> = grid.neighbours(p, dir).collect();
        assert_eq!(actual, expected, "{dir} neighbours of {p} out of offset order");
    }
}

/// Assert that `All` neighbours are exactly the cardinal neighbours
/// followed by the diagonal neighbours.
pub fn assert_all_is_union<T>(grid: &Grid<T>) {
    for p in grid.points() {
        let all: Vec<Point> = grid.neighbours(p, AdjacentDirection::All).collect();
        let union: Vec<Point> = grid
            .neighbours(p, AdjacentDirection::Cardinal)
            .chain(grid.neighbours(p, AdjacentDirection::Diagonal))
            .collect();
        assert_eq!(all, union, "All neighbours of {p} differ from Cardinal + Diagonal");
    }
}

/// Assert that `b in neighbours(a)` implies `a in neighbours(b)`.
pub fn assert_neighbours_symmetric<T>(grid: &Grid<T>, dir: AdjacentDirection, edge: EdgeBehavior) {
    for p in grid.points() {
        for n in grid.neighbours_with_edge(p, dir, edge) {
            let back: IndexSet<Point> = grid.neighbours_with_edge(n, dir, edge).collect();
            assert!(
                back.contains(&p),
                "neighbour symmetry violated: {n} in N({p}) but {p} not in N({n})"
            );
        }
    }
}

/// Assert that a cloned neighbour iterator replays the same sequence.
pub fn assert_neighbours_restartable<T>(grid: &Grid<T>, dir: AdjacentDirection) {
    for p in grid.points() {
        let it = grid.neighbours(p, dir);
        let a: Vec<Point> = it.clone().collect();
        let b: Vec<Point> = it.collect();
        assert_eq!(a, b, "{dir} neighbours of {p} are not restartable");
    }
}

/// Run every compliance check on a grid.
pub fn run_full_compliance<T>(grid: &Grid<T>) {
    assert_points_complete(grid);
    assert_all_is_union(grid);
    for dir in AdjacentDirection::VARIANTS {
        assert_neighbours_in_bounds(grid, dir);
        assert_neighbour_order(grid, dir);
        assert_neighbours_symmetric(grid, dir, EdgeBehavior::Absorb);
        assert_neighbours_symmetric(grid, dir, EdgeBehavior::Wrap);
        assert_neighbours_restartable(grid, dir);
    }
}

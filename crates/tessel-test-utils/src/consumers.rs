//! Reference grid consumers.
//!
//! Small versions of the algorithms puzzle solutions run on top of a
//! grid: breadth-first search, connected regions, a life-like step, and
//! cycle detection over whole-grid states. They exercise the grid
//! contract from the outside and are not part of the library API.

use indexmap::{IndexMap, IndexSet};
use std::collections::VecDeque;
use tessel_core::{AdjacentDirection, Point};
use tessel_grid::{Grid, GridError};

/// Step counts from `start` to every reachable open cell.
///
/// `walls[p] == true` blocks a cell. Unreachable and wall cells are
/// `None`. Neighbours are visited in the policy's offset order, so the
/// discovery order is deterministic.
pub fn bfs_distances(
    walls: &Grid<bool>,
    start: Point,
    dir: AdjacentDirection,
) -> Result<Grid<Option<u32>>, GridError> {
    let mut dist = Grid::new(walls.rows(), walls.cols(), None)?;
    if *walls.at(start)? {
        return Ok(dist);
    }
    dist.set(start, Some(0))?;
    let mut queue = VecDeque::from([(start, 0u32)]);

    while let Some((p, d)) = queue.pop_front() {
        for n in walls.neighbours(p, dir) {
            if walls[n] || dist[n].is_some() {
                continue;
            }
            dist[n] = Some(d + 1);
            queue.push_back((n, d + 1));
        }
    }
    Ok(dist)
}

/// Shortest path length between two cells, or `None` if unreachable.
pub fn shortest_path(
    walls: &Grid<bool>,
    start: Point,
    end: Point,
    dir: AdjacentDirection,
) -> Result<Option<u32>, GridError> {
    let dist = bfs_distances(walls, start, dir)?;
    Ok(*dist.at(end)?)
}

/// Connected regions of `true` cells, each in discovery order.
pub fn regions(cells: &Grid<bool>, dir: AdjacentDirection) -> Vec<IndexSet<Point>> {
    let mut seen = cells.map(|_| false);
    let mut out = Vec::new();

    for origin in cells.positions(|&c| c) {
        if seen[origin] {
            continue;
        }
        seen[origin] = true;
        let mut region = IndexSet::from([origin]);
        let mut frontier = VecDeque::from([origin]);
        while let Some(p) = frontier.pop_front() {
            for n in cells.neighbours(p, dir) {
                if cells[n] && !seen[n] {
                    seen[n] = true;
                    region.insert(n);
                    frontier.push_back(n);
                }
            }
        }
        out.push(region);
    }
    out
}

/// Cells strictly lower than every cardinal neighbour.
pub fn low_points(heights: &Grid<u32>) -> Vec<Point> {
    heights
        .iter()
        .filter(|&(p, h)| {
            heights
                .neighbours(p, AdjacentDirection::Cardinal)
                .all(|n| heights[n] > *h)
        })
        .map(|(p, _)| p)
        .collect()
}

/// One generation of Conway's life over all eight neighbours, with cells
/// beyond the edge treated as dead.
pub fn life_step(cells: &Grid<bool>) -> Grid<bool> {
    let mut next = cells.clone();
    for (p, alive) in next.iter_mut() {
        let live = cells
            .neighbours(p, AdjacentDirection::All)
            .filter(|&n| cells[n])
            .count();
        *alive = matches!((cells[p], live), (true, 2) | (_, 3));
    }
    next
}

/// Repeatedly apply `step` until a state repeats.
///
/// Returns `(first, period)`: the generation at which the repeating state
/// first appeared and the cycle length. Gives up after `limit` steps.
pub fn find_cycle<T, F>(start: Grid<T>, limit: usize, mut step: F) -> Option<(usize, usize)>
where
    T: Clone + Eq + std::hash::Hash,
    F: FnMut(&Grid<T>) -> Grid<T>,
{
    let mut seen: IndexMap<Grid<T>, usize> = IndexMap::new();
    let mut state = start;
    for generation in 0..=limit {
        if let Some(&first) = seen.get(&state) {
            return Some((first, generation - first));
        }
        let next = step(&state);
        seen.insert(state, generation);
        state = next;
    }
    None
}

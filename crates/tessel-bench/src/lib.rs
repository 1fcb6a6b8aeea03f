//! Benchmark inputs for the Tessel grid toolkit.
//!
//! Deterministic generators for puzzle-shaped text so benchmark runs are
//! comparable across machines:
//!
//! - [`maze_lines`]: `#`/`.` field with a seeded wall density
//! - [`digit_lines`]: seeded digit heightmap
//! - [`maze_grid`]: [`maze_lines`] parsed into a wall grid

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use tessel_grid::Grid;

fn mix(seed: u64, i: u64) -> u64 {
    (seed ^ i)
        .wrapping_mul(6364136223846793007)
        .wrapping_add(1442695040888963407)
        >> 33
}

/// `rows` lines of `cols` characters, roughly one wall in `1 / density`.
///
/// The top-left and bottom-right cells are always open.
pub fn maze_lines(rows: usize, cols: usize, density: u64, seed: u64) -> Vec<String> {
    let density = density.max(1);
    (0..rows)
        .map(|r| {
            (0..cols)
                .map(|c| {
                    let corner = (r == 0 && c == 0) || (r + 1 == rows && c + 1 == cols);
                    let i = (r * cols + c) as u64;
                    if !corner && mix(seed, i) % density == 0 {
                        '#'
                    } else {
                        '.'
                    }
                })
                .collect()
        })
        .collect()
}

/// `rows` lines of `cols` seeded decimal digits.
pub fn digit_lines(rows: usize, cols: usize, seed: u64) -> Vec<String> {
    (0..rows)
        .map(|r| {
            (0..cols)
                .map(|c| {
                    let d = mix(seed, (r * cols + c) as u64) % 10;
                    char::from(b'0' + d as u8)
                })
                .collect()
        })
        .collect()
}

/// [`maze_lines`] parsed into a grid where `true` is a wall.
pub fn maze_grid(rows: usize, cols: usize, density: u64, seed: u64) -> Grid<bool> {
    Grid::from_lines(maze_lines(rows, cols, density, seed), |c| c == '#')
        .unwrap_or_else(|e| panic!("generated maze is rectangular: {e}"))
}

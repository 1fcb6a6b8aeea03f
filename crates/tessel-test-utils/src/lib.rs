//! Test fixtures and reference consumers for Tessel development.
//!
//! Provides sample puzzle inputs ([`samples`]), per-character mapping
//! functions, and small reference algorithms ([`consumers`]) that drive a
//! [`Grid`](tessel_grid::Grid) the way puzzle solutions do.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod consumers;
pub mod samples;

/// Map an ASCII digit to its value; any other character maps to 0.
pub fn digit(ch: char) -> u32 {
    ch.to_digit(10).unwrap_or(0)
}

/// `#` is a wall, everything else is open.
pub fn wall(ch: char) -> bool {
    ch == '#'
}

/// `#` is alive, everything else is dead.
pub fn alive(ch: char) -> bool {
    ch == '#'
}

/// Inverse of [`alive`] for rendering.
pub fn alive_char(cell: &bool) -> char {
    if *cell {
        '#'
    } else {
        '.'
    }
}

//! Sample puzzle inputs.

/// Two-by-two digit block.
pub const DIGITS_2X2: &str = "12\n23";

/// Heightmap with four low points (values 1, 0, 5, 5).
pub const HEIGHTMAP: &str = "\
2199943210
3987894921
9856789892
8767896789
9899965678";

/// Maze with a start `S` and an end `E`; shortest path is 17 steps.
pub const MAZE: &str = "\
S.#.......
.##.#####.
....#...#.
.####.#.#.
......#..E";

/// A glider in a 6x6 field.
pub const GLIDER: &str = "\
.#....
..#...
###...
......
......
......";

/// The glider after one generation.
pub const GLIDER_NEXT: &str = "\
......
#.#...
.##...
.#....
......
......";

/// Three connected regions of `#` under cardinal adjacency, one under
/// all-eight adjacency.
pub const DIAGONAL_ISLANDS: &str = "\
#....
.#...
..#..
.....";

/// Lines of unequal length.
pub const RAGGED: [&str; 3] = ["###", "##", "###"];

use std::collections::HashSet;
use tessel_grid::{Grid, GridError, ParseOptions, Point};

#[test]
fn digit_grid_matches_expected_cells() {
    let grid = Grid::from_lines(["12", "23"], |ch| ch.to_digit(10).unwrap()).unwrap();
    assert_eq!(grid.at_rc(0, 0), Ok(&1));
    assert_eq!(grid.at_rc(0, 1), Ok(&2));
    assert_eq!(grid.at_rc(1, 0), Ok(&2));
    assert_eq!(grid.at_rc(1, 1), Ok(&3));
    assert_eq!(grid.cell_count(), 4);
}

#[test]
fn identical_parse_input_gives_equal_grids() {
    let text = "#..#\n.##.\n#..#";
    let a = Grid::parse(text, |c| c == '#').unwrap();
    let b = Grid::parse(text, |c| c == '#').unwrap();
    assert_eq!(a, b);

    let mut seen = HashSet::new();
    assert!(seen.insert(a.clone()));
    assert!(!seen.insert(b));

    let mut c = a.clone();
    c.set(Point::new(1, 1), false).unwrap();
    assert_ne!(a, c);
    assert!(seen.insert(c));
}

#[test]
fn parsed_and_dimensioned_grids_compare_equal() {
    let parsed = Grid::parse("...\n...", |c| c == '#').unwrap();
    let built = Grid::new(2, 3, false).unwrap();
    assert_eq!(parsed, built);
}

#[test]
fn ragged_input_is_malformed() {
    let err = Grid::parse("###\n##\n###", |c| c).unwrap_err();
    assert!(matches!(err, GridError::MalformedInput { line: 1, .. }));
    assert_eq!(
        err.to_string(),
        "malformed grid input at line 1: expected 3 characters, found 2"
    );
}

#[test]
fn crlf_file_with_trailing_blank_lines() {
    let raw = "S.#\r\n..E\r\n\r\n";
    let err = Grid::from_lines(raw.split('\n'), |c| c).unwrap_err();
    assert!(matches!(err, GridError::MalformedInput { .. }));

    let grid = Grid::from_lines_with(raw.split('\n'), &ParseOptions::lenient_file(), |c| c).unwrap();
    assert_eq!((grid.rows(), grid.cols()), (2, 3));
    assert_eq!(grid.position(|&c| c == 'E'), Some(Point::new(1, 2)));
}

#[test]
fn render_round_trips_text() {
    let text = "#.#\n...\n.#.";
    let grid = Grid::parse(text, |c| c).unwrap();
    assert_eq!(grid.render(|&c| c), text);
    assert_eq!(grid.to_string(), text);
}

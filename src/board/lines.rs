//! Line geometry: the four orientations a run can lie along

use super::{Pos, BOARD_SIZE};

/// Direction vectors for line checking (4 directions)
pub const DIRECTIONS: [(i32, i32); 4] = [
    (0, 1),  // Horizontal
    (1, 0),  // Vertical
    (1, 1),  // Diagonal SE
    (1, -1), // Diagonal SW
];

/// Cells of a line from `start` stepping by `dir` until the board edge
#[derive(Debug, Clone)]
pub struct LineIter {
    row: i32,
    col: i32,
    dir: (i32, i32),
}

impl Iterator for LineIter {
    type Item = Pos;

    fn next(&mut self) -> Option<Pos> {
        let pos = Pos::try_new(self.row, self.col)?;
        self.row += self.dir.0;
        self.col += self.dir.1;
        Some(pos)
    }
}

/// Walk a line from `start` in direction `dir` to the edge of the board
pub fn walk(start: Pos, dir: (i32, i32)) -> LineIter {
    LineIter {
        row: i32::from(start.row),
        col: i32::from(start.col),
        dir,
    }
}

/// The full row, column or diagonal through `pos`, edge to edge.
pub fn line_through(pos: Pos, dir: (i32, i32)) -> LineIter {
    let (dr, dc) = dir;
    let mut row = i32::from(pos.row);
    let mut col = i32::from(pos.col);
    while Pos::is_valid(row - dr, col - dc) {
        row -= dr;
        col -= dc;
    }
    LineIter { row, col, dir }
}

/// Every row, column and diagonal of the board exactly once.
///
/// Yields `(start, dir)` pairs; combine with [`walk`] to visit the cells.
pub fn all_lines() -> impl Iterator<Item = (Pos, (i32, i32))> {
    let n = BOARD_SIZE as u8;
    let rows = (0..n).map(|r| (Pos::new(r, 0), (0, 1)));
    let cols = (0..n).map(|c| (Pos::new(0, c), (1, 0)));
    // SE diagonals start on the left column or the top row
    let se = (0..n)
        .map(|r| Pos::new(r, 0))
        .chain((1..n).map(|c| Pos::new(0, c)))
        .map(|p| (p, (1, 1)));
    // SW diagonals start on the top row or the right column
    let sw = (0..n)
        .map(|c| Pos::new(0, c))
        .chain((1..n).map(move |r| Pos::new(r, n - 1)))
        .map(|p| (p, (1, -1)));
    rows.chain(cols).chain(se).chain(sw)
}

//! Heuristic evaluation function for Gomoku board positions
//!
//! For each side, every contiguous window of length 2, 3 or 4 (horizontal, vertical and
//! both diagonals) made entirely of that side's stones is counted and weighted ×10, ×100
//! and ×1000. Overlapping windows count independently, so four in a row contributes to all
//! three lengths. There is no open/closed distinction and no threat detection.
//!
//! `pattern_score` gets the same total from one pass over maximal runs; `count_windows` is
//! the literal window count and is kept public for callers and tests.

use crate::board::{all_lines, walk, Board, Pos, Stone, BOARD_SIZE, DIRECTIONS};

use super::patterns::run_score;

/// Evaluate the board from the perspective of the given color.
///
/// Positive values favor `color`. Terminal (won/lost) positions are scored by the
/// search, never here.
#[must_use]
pub fn evaluate(board: &Board, color: Stone) -> i32 {
    pattern_score(board, color) - pattern_score(board, color.opponent())
}

/// Weighted window total for one color.
#[must_use]
pub fn pattern_score(board: &Board, color: Stone) -> i32 {
    if color == Stone::Empty {
        return 0;
    }

    let mut score = 0;
    for (start, dir) in all_lines() {
        let mut run = 0usize;
        for pos in walk(start, dir) {
            if board.get(pos) == color {
                run += 1;
            } else {
                score += run_score(run);
                run = 0;
            }
        }
        score += run_score(run);
    }
    score
}

/// Count windows of exactly `len` cells, in all four orientations, that hold only `color`.
#[must_use]
pub fn count_windows(board: &Board, color: Stone, len: usize) -> u32 {
    if len == 0 || len > BOARD_SIZE {
        return 0;
    }
    let span = len as i32 - 1;
    let mut count = 0;

    for &(dr, dc) in &DIRECTIONS {
        for row in 0..BOARD_SIZE as i32 {
            for col in 0..BOARD_SIZE as i32 {
                // window must end on the board
                if !Pos::is_valid(row + dr * span, col + dc * span) {
                    continue;
                }
                let full = (0..=span).all(|i| {
                    let pos = Pos::new((row + dr * i) as u8, (col + dc * i) as u8);
                    board.get(pos) == color
                });
                if full {
                    count += 1;
                }
            }
        }
    }
    count
}

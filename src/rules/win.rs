//! Win condition checking
//!
//! A placement wins when the row, column or either diagonal through it holds a run of
//! five or more stones of the placed color. Each of the four lines is scanned across its
//! full board extent rather than a window around the new stone, so a run anywhere on an
//! intersecting line counts. Under normal play every move is checked as it is made, which
//! makes the two formulations agree; the full scan is the defined behavior.

use crate::board::{line_through, Board, Pos, Stone, DIRECTIONS, WIN_LENGTH};

/// Check whether the stone at `pos` completes (or lies on a line holding) five in a row.
///
/// Returns `false` for an empty cell.
#[must_use]
pub fn is_winner_at(board: &Board, pos: Pos) -> bool {
    let color = board.get(pos);
    if color == Stone::Empty {
        return false;
    }
    DIRECTIONS
        .iter()
        .any(|&dir| longest_run(board, pos, dir, color) >= WIN_LENGTH)
}

/// Longest run of `color` along the full line through `pos`.
fn longest_run(board: &Board, pos: Pos, dir: (i32, i32), color: Stone) -> usize {
    let mut best = 0;
    let mut count = 0;
    for cell in line_through(pos, dir) {
        if board.get(cell) == color {
            count += 1;
            best = best.max(count);
        } else {
            count = 0;
        }
    }
    best
}

/// Find the winning run through `pos`, scanning the same lines as [`is_winner_at`].
///
/// Returns every stone of the first run of five or more found, in line order.
pub fn winning_line(board: &Board, pos: Pos) -> Option<Vec<Pos>> {
    let color = board.get(pos);
    if color == Stone::Empty {
        return None;
    }

    for &dir in &DIRECTIONS {
        let mut run: Vec<Pos> = Vec::with_capacity(WIN_LENGTH);
        for cell in line_through(pos, dir) {
            if board.get(cell) == color {
                run.push(cell);
            } else if run.len() >= WIN_LENGTH {
                return Some(run);
            } else {
                run.clear();
            }
        }
        if run.len() >= WIN_LENGTH {
            return Some(run);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn place_all(board: &mut Board, cells: &[(u8, u8)], stone: Stone) {
        for &(r, c) in cells {
            board.place_stone(Pos::new(r, c), stone);
        }
    }

    #[test]
    fn test_five_in_row_horizontal() {
        let mut board = Board::new();
        for i in 0..5 {
            board.place_stone(Pos::new(7, i), Stone::Black);
        }
        assert!(is_winner_at(&board, Pos::new(7, 4)));
        assert!(is_winner_at(&board, Pos::new(7, 2)));
    }

    #[test]
    fn test_five_in_row_vertical() {
        let mut board = Board::new();
        for i in 3..8 {
            board.place_stone(Pos::new(i, 9), Stone::White);
        }
        assert!(is_winner_at(&board, Pos::new(7, 9)));
    }

    #[test]
    fn test_five_in_row_diagonal() {
        // Stones on (0,0)..(3,3), then (4,4) completes the diagonal
        let mut board = Board::new();
        place_all(&mut board, &[(0, 0), (1, 1), (2, 2), (3, 3)], Stone::Black);
        assert!(!is_winner_at(&board, Pos::new(3, 3)));
        board.place_stone(Pos::new(4, 4), Stone::Black);
        assert!(is_winner_at(&board, Pos::new(4, 4)));
    }

    #[test]
    fn test_five_in_row_anti_diagonal() {
        let mut board = Board::new();
        for i in 0..5 {
            board.place_stone(Pos::new(4 + i, 8 - i), Stone::White);
        }
        assert!(is_winner_at(&board, Pos::new(8, 4)));
    }

    #[test]
    fn test_six_in_row_also_wins() {
        let mut board = Board::new();
        for i in 0..6 {
            board.place_stone(Pos::new(9, i), Stone::Black);
        }
        assert!(is_winner_at(&board, Pos::new(9, 5)));
        assert_eq!(winning_line(&board, Pos::new(9, 5)).map(|l| l.len()), Some(6));
    }

    #[test]
    fn test_four_in_row_not_win() {
        let mut board = Board::new();
        for i in 0..4 {
            board.place_stone(Pos::new(9, i), Stone::Black);
        }
        assert!(!is_winner_at(&board, Pos::new(9, 3)));
        assert!(winning_line(&board, Pos::new(9, 3)).is_none());
    }

    #[test]
    fn test_broken_line_not_win() {
        let mut board = Board::new();
        place_all(&mut board, &[(2, 0), (2, 1), (2, 3), (2, 4), (2, 5)], Stone::Black);
        board.place_stone(Pos::new(2, 2), Stone::White);
        assert!(!is_winner_at(&board, Pos::new(2, 5)));
    }

    #[test]
    fn test_empty_cell_never_wins() {
        let board = Board::new();
        assert!(!is_winner_at(&board, Pos::new(7, 7)));
        assert!(winning_line(&board, Pos::new(7, 7)).is_none());
    }

    #[test]
    fn test_other_color_run_does_not_count() {
        let mut board = Board::new();
        for i in 0..5 {
            board.place_stone(Pos::new(0, i), Stone::White);
        }
        board.place_stone(Pos::new(0, 10), Stone::Black);
        assert!(!is_winner_at(&board, Pos::new(0, 10)));
    }

    #[test]
    fn test_full_line_scan_sees_distant_run() {
        // A run elsewhere on the same row is reported through any stone of that color on it
        let mut board = Board::new();
        for i in 0..5 {
            board.place_stone(Pos::new(6, i), Stone::Black);
        }
        board.place_stone(Pos::new(6, 12), Stone::Black);
        assert!(is_winner_at(&board, Pos::new(6, 12)));
    }

    #[test]
    fn test_five_at_corner() {
        let mut board = Board::new();
        for i in 0..5 {
            board.place_stone(Pos::new(10 + i, 10 + i), Stone::White);
        }
        assert!(is_winner_at(&board, Pos::new(14, 14)));
        let line = winning_line(&board, Pos::new(14, 14)).unwrap();
        assert_eq!(line.first(), Some(&Pos::new(10, 10)));
        assert_eq!(line.last(), Some(&Pos::new(14, 14)));
    }
}

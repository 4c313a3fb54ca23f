//! Game rules for standard Gomoku
//!
//! - A move is legal on any empty cell of the 15x15 board
//! - Five or more stones in an unbroken line wins (overlines count)

pub mod win;

use crate::board::{Board, Pos};

pub use win::{is_winner_at, winning_line};

/// A move is legal on any empty cell. Bounds are enforced by [`Pos`].
#[inline]
pub fn is_valid_move(board: &Board, pos: Pos) -> bool {
    board.is_empty(pos)
}

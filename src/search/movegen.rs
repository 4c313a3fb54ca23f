//! Candidate move generation
//!
//! The AI only considers empty cells within a Chebyshev radius of some stone. This bounds
//! the branching factor; it is not a rule, and human moves anywhere on the board stay legal.

use crate::board::{Board, Pos, TOTAL_CELLS};

/// Default neighbor-filter radius
pub const NEIGHBOR_RADIUS: u8 = 2;

/// Empty cells within `radius` (king moves) of any stone, in row-major order.
///
/// Falls back to every empty cell when the filter leaves nothing, which covers the empty
/// board. A full board yields no candidates.
#[must_use]
pub fn candidate_moves(board: &Board, radius: u8) -> Vec<Pos> {
    let radius = i32::from(radius);
    let mut near = [false; TOTAL_CELLS];

    for pos in board.occupied().iter_ones() {
        for dr in -radius..=radius {
            for dc in -radius..=radius {
                if let Some(n) = Pos::try_new(i32::from(pos.row) + dr, i32::from(pos.col) + dc) {
                    near[n.to_index()] = true;
                }
            }
        }
    }

    let moves: Vec<Pos> = board.empty_cells().filter(|p| near[p.to_index()]).collect();
    if moves.is_empty() {
        board.empty_cells().collect()
    } else {
        moves
    }
}

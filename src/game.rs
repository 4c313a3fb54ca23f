//! Game state: the board plus whose turn it is and who has won
//!
//! `GameState` is the rules engine. It only changes through [`GameState::apply_move`]
//! (or its typed form [`GameState::try_apply_move`]) and [`GameState::reset`]. A move either
//! fully succeeds (stone placed, win checked, turn advanced unless it won) or is rejected
//! with no mutation.
//!
//! The search explores hypothetical continuations through [`GameState::probe`], a scoped
//! guard that places a stone and restores the cell and winner flag when dropped.
//!
//! # Example
//!
//! ```
//! use gomoku::{GameState, Stone};
//!
//! let mut game = GameState::new();
//! assert!(game.apply_move(7, 7));
//! assert_eq!(game.current_player(), Stone::White);
//! assert!(!game.apply_move(7, 7)); // occupied
//! assert!(!game.apply_move(15, 0)); // off the board
//! ```

use std::ops::{Deref, DerefMut};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::board::{Board, Pos, Stone, BOARD_SIZE};
use crate::error::{GomokuError, GomokuResult};
use crate::rules;

/// Lifecycle of a single game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// No winner yet, moves are accepted
    InProgress,
    /// Someone has five in a row; only `reset` leaves this state
    Decided(Stone),
}

/// What an accepted move did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// No win; `next` is now to move
    Continue { next: Stone },
    /// The mover completed five in a row and stays the current player
    Won { winner: Stone },
}

/// Read-only, serializable view of a game.
///
/// Cells use 0 = empty, 1 = black (player A), 2 = white (player B).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub board: [[u8; BOARD_SIZE]; BOARD_SIZE],
    pub current_player: u8,
    pub winner: Option<u8>,
}

impl Snapshot {
    pub fn to_json(&self) -> GomokuResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Board, side to move and winner
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    current_player: Stone,
    winner: Option<Stone>,
    last_move: Option<Pos>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Fresh game: empty board, black (player A) to move, no winner
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_player: Stone::Black,
            winner: None,
            last_move: None,
        }
    }

    /// Build a state from an arbitrary board, e.g. a test position.
    ///
    /// The winner is not recomputed; positions are expected to be undecided.
    pub fn from_board(board: Board, current_player: Stone) -> Self {
        debug_assert!(current_player != Stone::Empty);
        Self {
            board,
            current_player,
            winner: None,
            last_move: None,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new();
        info!("game reset");
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn current_player(&self) -> Stone {
        self.current_player
    }

    #[inline]
    pub fn winner(&self) -> Option<Stone> {
        self.winner
    }

    #[inline]
    pub fn last_move(&self) -> Option<Pos> {
        self.last_move
    }

    pub fn phase(&self) -> GamePhase {
        match self.winner {
            Some(winner) => GamePhase::Decided(winner),
            None => GamePhase::InProgress,
        }
    }

    /// True iff `pos` is an empty cell (positions are in bounds by construction)
    #[inline]
    pub fn is_valid(&self, pos: Pos) -> bool {
        rules::is_valid_move(&self.board, pos)
    }

    /// Bounds-checked form of [`GameState::is_valid`] for raw coordinates
    pub fn is_valid_at(&self, row: i32, col: i32) -> bool {
        Pos::try_new(row, col).is_some_and(|pos| self.is_valid(pos))
    }

    #[inline]
    pub fn is_winner_at(&self, pos: Pos) -> bool {
        rules::is_winner_at(&self.board, pos)
    }

    /// Apply a move for the current player, reporting why it was rejected.
    pub fn try_apply_move(&mut self, row: i32, col: i32) -> GomokuResult<MoveOutcome> {
        if let Some(winner) = self.winner {
            return Err(GomokuError::GameOver { winner });
        }
        let pos = Pos::try_new(row, col).ok_or(GomokuError::OutOfBounds { row, col })?;
        if !self.is_valid(pos) {
            return Err(GomokuError::Occupied { row, col });
        }

        let mover = self.current_player;
        self.board.place_stone(pos, mover);
        self.last_move = Some(pos);

        if self.is_winner_at(pos) {
            self.winner = Some(mover);
            info!(%mover, %pos, "five in a row");
            return Ok(MoveOutcome::Won { winner: mover });
        }

        self.current_player = mover.opponent();
        debug!(%mover, %pos, next = %self.current_player, "move applied");
        Ok(MoveOutcome::Continue {
            next: self.current_player,
        })
    }

    /// Apply a move for the current player.
    ///
    /// Returns `false`, leaving everything untouched, when the game is decided, the
    /// coordinates are off the board or the cell is occupied.
    pub fn apply_move(&mut self, row: i32, col: i32) -> bool {
        match self.try_apply_move(row, col) {
            Ok(_) => true,
            Err(err) => {
                debug!(row, col, %err, "move rejected");
                false
            }
        }
    }

    /// [`GameState::apply_move`] for an already-validated position
    pub fn play(&mut self, pos: Pos) -> bool {
        self.apply_move(i32::from(pos.row), i32::from(pos.col))
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            board: self.board.cells(),
            current_player: self.current_player.code(),
            winner: self.winner.map(Stone::code),
        }
    }

    /// Tentatively place `stone` at `pos` for exploration.
    ///
    /// If the placement makes five, the winner flag is set for as long as the guard lives.
    /// Dropping the guard empties the cell and restores the previous winner flag, leaving
    /// the state bit-identical to before. `current_player` is never touched.
    pub fn probe(&mut self, pos: Pos, stone: Stone) -> Probe<'_> {
        debug_assert!(self.board.is_empty(pos), "probe on occupied cell {pos}");
        let saved_winner = self.winner;
        self.board.place_stone(pos, stone);
        if rules::is_winner_at(&self.board, pos) {
            self.winner = Some(stone);
        }
        Probe {
            state: self,
            pos,
            saved_winner,
        }
    }
}

/// Scoped tentative placement, see [`GameState::probe`]
pub struct Probe<'a> {
    state: &'a mut GameState,
    pos: Pos,
    saved_winner: Option<Stone>,
}

impl Deref for Probe<'_> {
    type Target = GameState;

    fn deref(&self) -> &GameState {
        self.state
    }
}

impl DerefMut for Probe<'_> {
    fn deref_mut(&mut self) -> &mut GameState {
        self.state
    }
}

impl Drop for Probe<'_> {
    fn drop(&mut self) {
        self.state.board.remove_stone(self.pos);
        self.state.winner = self.saved_winner;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_snapshot() {
        let game = GameState::new();
        let snap = game.snapshot();
        assert!(snap.board.iter().flatten().all(|&c| c == 0));
        assert_eq!(snap.board.len(), 15);
        assert_eq!(snap.board[0].len(), 15);
        assert_eq!(snap.current_player, 1);
        assert_eq!(snap.winner, None);
        assert_eq!(game.phase(), GamePhase::InProgress);
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut game = GameState::new();
        assert!(game.apply_move(7, 7));
        assert!(game.apply_move(7, 8));
        game.reset();
        assert_eq!(game, GameState::new());
    }

    #[test]
    fn test_turns_alternate() {
        let mut game = GameState::new();
        assert_eq!(game.current_player(), Stone::Black);
        assert!(game.apply_move(0, 0));
        assert_eq!(game.current_player(), Stone::White);
        assert!(game.apply_move(0, 1));
        assert_eq!(game.current_player(), Stone::Black);
        assert_eq!(game.board().get(Pos::new(0, 0)), Stone::Black);
        assert_eq!(game.board().get(Pos::new(0, 1)), Stone::White);
        assert_eq!(game.last_move(), Some(Pos::new(0, 1)));
    }

    #[test]
    fn test_rejected_moves_do_not_mutate() {
        let mut game = GameState::new();
        assert!(game.apply_move(3, 3));
        let before = game.clone();

        assert!(!game.apply_move(3, 3));
        assert!(!game.apply_move(-1, 3));
        assert!(!game.apply_move(3, 15));
        assert!(!game.apply_move(15, 15));
        assert_eq!(game, before);
    }

    #[test]
    fn test_rejection_reasons() {
        let mut game = GameState::new();
        game.apply_move(3, 3);
        assert!(matches!(
            game.try_apply_move(3, 3),
            Err(GomokuError::Occupied { row: 3, col: 3 })
        ));
        assert!(matches!(
            game.try_apply_move(20, 0),
            Err(GomokuError::OutOfBounds { row: 20, col: 0 })
        ));
    }

    fn play_black_win(game: &mut GameState) {
        // Black on row 0, white on row 1
        for i in 0..4 {
            assert!(game.apply_move(0, i));
            assert!(game.apply_move(1, i));
        }
        assert!(game.apply_move(0, 4));
    }

    #[test]
    fn test_winning_move_keeps_current_player() {
        let mut game = GameState::new();
        play_black_win(&mut game);
        assert_eq!(game.winner(), Some(Stone::Black));
        assert_eq!(game.current_player(), Stone::Black);
        assert_eq!(game.phase(), GamePhase::Decided(Stone::Black));
        assert_eq!(game.snapshot().winner, Some(1));
    }

    #[test]
    fn test_no_moves_after_win() {
        let mut game = GameState::new();
        play_black_win(&mut game);
        let before = game.clone();
        assert!(!game.apply_move(10, 10));
        assert!(matches!(
            game.try_apply_move(10, 10),
            Err(GomokuError::GameOver { winner: Stone::Black })
        ));
        assert_eq!(game, before);

        game.reset();
        assert!(game.apply_move(10, 10));
    }

    #[test]
    fn test_white_can_win() {
        let mut game = GameState::new();
        assert!(game.apply_move(14, 14));
        for i in 0..4 {
            assert!(game.apply_move(i, 5));
            assert!(game.apply_move(i + 5, 0));
        }
        assert!(game.apply_move(4, 5));
        assert_eq!(game.winner(), Some(Stone::White));
        assert_eq!(game.current_player(), Stone::White);
    }

    #[test]
    fn test_try_apply_move_outcomes() {
        let mut game = GameState::new();
        assert_eq!(
            game.try_apply_move(5, 5).unwrap(),
            MoveOutcome::Continue { next: Stone::White }
        );
    }

    #[test]
    fn test_is_valid_at() {
        let mut game = GameState::new();
        assert!(game.is_valid_at(0, 0));
        assert!(!game.is_valid_at(-1, 0));
        game.apply_move(0, 0);
        assert!(!game.is_valid_at(0, 0));
    }

    #[test]
    fn test_probe_restores_state() {
        let mut game = GameState::new();
        game.apply_move(7, 7);
        let before = game.clone();
        {
            let probe = game.probe(Pos::new(7, 8), Stone::Black);
            assert_eq!(probe.board().get(Pos::new(7, 8)), Stone::Black);
            assert_eq!(probe.winner(), None);
        }
        assert_eq!(game, before);
    }

    #[test]
    fn test_probe_sets_transient_winner() {
        let mut board = Board::new();
        for i in 0..4 {
            board.place_stone(Pos::new(2, i), Stone::White);
        }
        let mut game = GameState::from_board(board, Stone::Black);
        let before = game.clone();
        {
            let mut probe = game.probe(Pos::new(2, 4), Stone::White);
            assert_eq!(probe.winner(), Some(Stone::White));
            // nested probes unwind in order
            let inner = probe.probe(Pos::new(9, 9), Stone::Black);
            assert_eq!(inner.winner(), Some(Stone::White));
        }
        assert_eq!(game, before);
        assert_eq!(game.winner(), None);
    }

    #[test]
    fn test_snapshot_json() {
        let mut game = GameState::new();
        game.apply_move(0, 2);
        let json = game.snapshot().to_json().unwrap();
        let back: Snapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, game.snapshot());
        assert!(json.contains("\"winner\":null"));
        assert!(json.contains("\"current_player\":2"));
    }
}

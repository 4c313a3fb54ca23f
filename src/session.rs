//! One human-vs-AI game with its engine attached
//!
//! `Session` is the process-wide game instance a front end drives: it owns the
//! [`GameState`], the [`AIEngine`], and which side the AI plays. Every method takes
//! `&mut self`, so a front end that shares one session between threads wraps it in a
//! `Mutex` and handles one request at a time.
//!
//! ```
//! use gomoku::{EngineConfig, Session, Stone};
//!
//! let mut session = Session::new(EngineConfig::default().with_depth(1)).unwrap();
//! assert_eq!(session.ai_side(), Stone::Black);
//!
//! // the AI opens, then the human answers and the AI replies at once
//! session.play_ai_turn();
//! let snapshot = session.play_human_turn(7, 7);
//! assert_eq!(snapshot.board.iter().flatten().filter(|&&c| c != 0).count(), 3);
//! ```

use tracing::{info, warn};

use crate::board::Stone;
use crate::config::EngineConfig;
use crate::engine::{AIEngine, MoveResult};
use crate::error::GomokuResult;
use crate::game::{GameState, Snapshot};

pub struct Session {
    state: GameState,
    engine: AIEngine,
    ai_side: Stone,
    last_ai_move: Option<MoveResult>,
}

impl Session {
    /// Fresh game with the AI on Black, which moves first.
    pub fn new(config: EngineConfig) -> GomokuResult<Self> {
        Ok(Self::with_engine(AIEngine::new(config)?, Stone::Black))
    }

    pub fn with_engine(engine: AIEngine, ai_side: Stone) -> Self {
        debug_assert!(ai_side != Stone::Empty);
        Self {
            state: GameState::new(),
            engine,
            ai_side,
            last_ai_move: None,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn ai_side(&self) -> Stone {
        self.ai_side
    }

    pub fn human_side(&self) -> Stone {
        self.ai_side.opponent()
    }

    /// Statistics of the most recent committed AI move
    pub fn last_ai_move(&self) -> Option<&MoveResult> {
        self.last_ai_move.as_ref()
    }

    pub fn is_human_turn(&self) -> bool {
        self.state.winner().is_none() && self.state.current_player() == self.human_side()
    }

    pub fn is_ai_turn(&self) -> bool {
        self.state.winner().is_none() && self.state.current_player() == self.ai_side
    }

    /// Apply a move for whoever is to move. See [`GameState::apply_move`].
    pub fn apply_move(&mut self, row: i32, col: i32) -> bool {
        self.state.apply_move(row, col)
    }

    /// Search for the AI side and commit the result for the side to move.
    ///
    /// No-op on a decided game or a full board.
    pub fn compute_ai_move(&mut self) {
        if let Some(result) = self.engine.compute_ai_move_for(&mut self.state, self.ai_side) {
            self.last_ai_move = Some(result);
        }
    }

    pub fn reset(&mut self) {
        self.state.reset();
        self.last_ai_move = None;
    }

    pub fn snapshot(&self) -> Snapshot {
        self.state.snapshot()
    }

    /// Let the AI move if it is its turn.
    pub fn play_ai_turn(&mut self) -> Option<&MoveResult> {
        if !self.is_ai_turn() {
            return None;
        }
        let result = self.engine.compute_ai_move_for(&mut self.state, self.ai_side)?;
        Some(&*self.last_ai_move.insert(result))
    }

    /// Handle a human move request.
    ///
    /// The move is only considered on the human's turn. If it is accepted and does not win,
    /// the AI replies straight away. The returned snapshot reflects both moves; a rejected
    /// request returns the unchanged game.
    pub fn play_human_turn(&mut self, row: i32, col: i32) -> Snapshot {
        if !self.is_human_turn() {
            warn!(row, col, to_move = %self.state.current_player(), "not the human's turn");
            return self.snapshot();
        }

        if let Err(err) = self.state.try_apply_move(row, col) {
            warn!(row, col, %err, "human move rejected");
            return self.snapshot();
        }

        match self.state.winner() {
            Some(winner) => info!(%winner, "human wins"),
            None => {
                self.compute_ai_move();
            }
        }
        self.snapshot()
    }
}

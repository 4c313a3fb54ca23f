//! Main AI engine
//!
//! Wraps the configured [`Agent`] and times each decision. The engine never owns the
//! game: it borrows a [`GameState`] exclusively for the length of one call, lets the agent
//! explore it, and (for [`AIEngine::compute_ai_move`]) commits the chosen move through the
//! normal `apply_move` path.
//!
//! # Example
//!
//! ```
//! use gomoku::{AIEngine, EngineConfig, GameState};
//!
//! let mut engine = AIEngine::new(EngineConfig::default().with_depth(2)).unwrap();
//! let mut game = GameState::new();
//! game.apply_move(7, 7);
//!
//! let result = engine.get_move_with_stats(&mut game);
//! println!("Best move: {:?}", result.best_move);
//! println!("Search type: {:?}", result.search_type);
//! println!("Time: {}ms", result.time_ms);
//! ```

use std::time::Instant;

use tracing::{debug, info, warn};

use crate::agent::{build_agent, Agent};
use crate::board::{Pos, Stone};
use crate::config::{AgentKind, EngineConfig};
use crate::error::{GomokuError, GomokuResult};
use crate::game::{GameState, MoveOutcome};

/// Which agent produced the result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchType {
    /// Minimax with alpha-beta pruning
    AlphaBeta,
    /// Uniform random pick
    Random,
}

impl From<AgentKind> for SearchType {
    fn from(kind: AgentKind) -> Self {
        match kind {
            AgentKind::Search => SearchType::AlphaBeta,
            AgentKind::Random => SearchType::Random,
        }
    }
}

/// Result of a move search with statistics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveResult {
    /// Best move found, if any
    pub best_move: Option<Pos>,
    /// Search value from the mover's perspective
    pub score: i32,
    pub search_type: SearchType,
    /// Time taken in milliseconds
    pub time_ms: u64,
    /// Number of nodes searched
    pub nodes: u64,
}

/// Main AI engine for Gomoku.
///
/// Plays for whichever side is to move in the state it is handed.
pub struct AIEngine {
    agent: Box<dyn Agent>,
    config: EngineConfig,
}

impl AIEngine {
    /// Create an engine after validating `config`.
    pub fn new(config: EngineConfig) -> GomokuResult<Self> {
        config.validate()?;
        Ok(Self {
            agent: build_agent(&config),
            config,
        })
    }

    /// Search engine with the given depth and default radius.
    ///
    /// ```
    /// use gomoku::AIEngine;
    ///
    /// assert!(AIEngine::with_depth(4).is_ok());
    /// assert!(AIEngine::with_depth(0).is_err());
    /// ```
    pub fn with_depth(depth: u8) -> GomokuResult<Self> {
        Self::new(EngineConfig::default().with_depth(depth))
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn agent_name(&self) -> &'static str {
        self.agent.name()
    }

    /// Get the best move without committing it.
    #[must_use]
    pub fn get_move(&mut self, state: &mut GameState) -> Option<Pos> {
        self.get_move_with_stats(state).best_move
    }

    /// Get the best move for the side to move, with search statistics.
    ///
    /// `state` is unchanged on return.
    #[must_use]
    pub fn get_move_with_stats(&mut self, state: &mut GameState) -> MoveResult {
        let mover = state.current_player();
        self.decide(state, mover)
    }

    fn decide(&mut self, state: &mut GameState, side: Stone) -> MoveResult {
        let start = Instant::now();
        let decision = self.agent.select_move_for(state, side);
        let result = MoveResult {
            best_move: decision.best_move,
            score: decision.score,
            search_type: self.agent.kind().into(),
            time_ms: start.elapsed().as_millis() as u64,
            nodes: decision.nodes,
        };
        debug!(
            agent = self.agent.name(),
            %side,
            best_move = ?result.best_move,
            score = result.score,
            nodes = result.nodes,
            time_ms = result.time_ms,
            "decision ready"
        );
        result
    }

    /// Pick a move for the side to move and commit it.
    ///
    /// Returns `None` without touching the state when the game is decided or nothing can
    /// be played (full board).
    pub fn compute_ai_move(&mut self, state: &mut GameState) -> Option<MoveResult> {
        let mover = state.current_player();
        self.compute_ai_move_for(state, mover)
    }

    /// Search for `side` and commit the chosen cell through the normal move path.
    ///
    /// The stone placed is the colour of the side to move, as with any committed move.
    pub fn compute_ai_move_for(
        &mut self,
        state: &mut GameState,
        side: Stone,
    ) -> Option<MoveResult> {
        if let Some(winner) = state.winner() {
            debug!(%winner, "game decided, AI passes");
            return None;
        }

        let result = self.decide(state, side);
        let Some(pos) = result.best_move else {
            debug!(reason = %GomokuError::NoCandidateMoves, "AI passes");
            return None;
        };

        let mover = state.current_player();
        match state.try_apply_move(i32::from(pos.row), i32::from(pos.col)) {
            Ok(outcome) => {
                info!(
                    %mover,
                    %pos,
                    score = result.score,
                    won = matches!(outcome, MoveOutcome::Won { .. }),
                    "AI move committed"
                );
                Some(result)
            }
            Err(err) => {
                warn!(%pos, %err, "AI chose a move the rules rejected");
                None
            }
        }
    }
}

impl Default for AIEngine {
    fn default() -> Self {
        let config = EngineConfig::default();
        Self {
            agent: build_agent(&config),
            config,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Board, Stone};
    use crate::search::terminal_score;

    fn engine(depth: u8) -> AIEngine {
        AIEngine::with_depth(depth).unwrap()
    }

    #[test]
    fn test_engine_default() {
        let engine = AIEngine::default();
        assert_eq!(engine.config().depth, 3);
        assert_eq!(engine.agent_name(), "minimax");
    }

    #[test]
    fn test_engine_rejects_bad_config() {
        let err = AIEngine::new(EngineConfig::default().with_radius(0)).err().unwrap();
        assert!(matches!(err, GomokuError::InvalidConfiguration { .. }));
    }

    #[test]
    fn test_engine_empty_board_depth_one() {
        let mut game = GameState::new();
        let before = game.clone();
        let result = engine(1).get_move_with_stats(&mut game);

        let best = result.best_move.unwrap();
        assert!(game.is_valid(best));
        assert_eq!(result.search_type, SearchType::AlphaBeta);
        assert_eq!(game, before);
    }

    #[test]
    fn test_engine_completes_open_four() {
        // Black (AI, to move) has an open four on row 7
        let mut board = Board::new();
        for c in 5..9 {
            board.place_stone(Pos::new(7, c), Stone::Black);
        }
        for c in 5..8 {
            board.place_stone(Pos::new(10, c), Stone::White);
        }
        board.place_stone(Pos::new(11, 11), Stone::White);
        let mut game = GameState::from_board(board, Stone::Black);

        for depth in 2..=3 {
            let mut probe = game.clone();
            let result = engine(depth).get_move_with_stats(&mut probe);
            let best = result.best_move.unwrap();
            assert!(best == Pos::new(7, 4) || best == Pos::new(7, 9));
            assert_eq!(result.score, terminal_score(true, depth - 1));
        }

        let result = engine(3).compute_ai_move(&mut game).unwrap();
        assert!(result.best_move.is_some());
        assert_eq!(game.winner(), Some(Stone::Black));
        assert_eq!(game.current_player(), Stone::Black);
    }

    #[test]
    fn test_engine_blocks_opponent_win() {
        let mut board = Board::new();
        for c in 0..4 {
            board.place_stone(Pos::new(9, c), Stone::White);
        }
        board.place_stone(Pos::new(10, 5), Stone::Black);
        board.place_stone(Pos::new(3, 3), Stone::Black);
        let mut game = GameState::from_board(board, Stone::Black);

        assert_eq!(engine(2).get_move(&mut game), Some(Pos::new(9, 4)));
    }

    #[test]
    fn test_compute_ai_move_commits_for_side_to_move() {
        let mut game = GameState::new();
        game.apply_move(7, 7);
        let result = engine(2).compute_ai_move(&mut game).unwrap();

        let pos = result.best_move.unwrap();
        assert_eq!(game.board().get(pos), Stone::White);
        assert_eq!(game.current_player(), Stone::Black);
        assert_eq!(game.board().stone_count(), 2);
    }

    #[test]
    fn test_compute_ai_move_for_searches_given_side() {
        // Black's four on row 7 is capped at (7,4); White is to move
        let mut board = Board::new();
        for c in 5..9 {
            board.place_stone(Pos::new(7, c), Stone::Black);
        }
        for pos in [Pos::new(7, 4), Pos::new(0, 0), Pos::new(14, 14)] {
            board.place_stone(pos, Stone::White);
        }
        let mut game = GameState::from_board(board, Stone::White);

        let result = engine(2).compute_ai_move_for(&mut game, Stone::Black).unwrap();
        assert_eq!(result.best_move, Some(Pos::new(7, 9)));
        assert_eq!(game.board().get(Pos::new(7, 9)), Stone::White);
        assert_eq!(game.current_player(), Stone::Black);
        assert_eq!(game.winner(), None);
    }

    #[test]
    fn test_compute_ai_move_full_board_is_noop() {
        let mut game = GameState::from_board(Board::full_without_five(), Stone::Black);
        let before = game.clone();
        assert!(engine(3).compute_ai_move(&mut game).is_none());
        assert_eq!(game, before);
    }

    #[test]
    fn test_compute_ai_move_after_win_is_noop() {
        let mut game = GameState::new();
        for (r, c) in [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2), (1, 2), (0, 3), (1, 3), (0, 4)] {
            assert!(game.apply_move(r, c));
        }
        assert_eq!(game.winner(), Some(Stone::Black));

        let before = game.clone();
        assert!(engine(2).compute_ai_move(&mut game).is_none());
        assert_eq!(game, before);
    }

    #[test]
    fn test_random_engine() {
        let config = EngineConfig::default()
            .with_agent(AgentKind::Random)
            .with_seed(5);
        let mut engine = AIEngine::new(config).unwrap();
        let mut game = GameState::new();

        let result = engine.compute_ai_move(&mut game).unwrap();
        assert_eq!(result.search_type, SearchType::Random);
        assert_eq!(result.nodes, 0);
        assert_eq!(game.board().stone_count(), 1);
    }

    #[test]
    fn test_engine_multiple_searches() {
        let mut engine = engine(2);
        let mut game = GameState::new();
        game.apply_move(7, 7);
        game.apply_move(8, 8);

        let first = engine.get_move(&mut game);
        let second = engine.get_move(&mut game);
        assert_eq!(first, second);
    }

    #[test]
    fn test_engine_alternating_colors() {
        let mut engine = engine(2);
        let mut game = GameState::new();
        game.apply_move(7, 7);

        for _ in 0..4 {
            let mover = game.current_player();
            let pos = engine.compute_ai_move(&mut game).unwrap().best_move.unwrap();
            assert_eq!(game.board().get(pos), mover);
        }
        assert_eq!(game.board().stone_count(), 5);
    }

    #[test]
    fn test_search_type_from_agent_kind() {
        assert_eq!(SearchType::from(AgentKind::Search), SearchType::AlphaBeta);
        assert_eq!(SearchType::from(AgentKind::Random), SearchType::Random);
    }
}

//! Minimax search with alpha-beta pruning
//!
//! This module implements the core search algorithm for the Gomoku AI: a plain
//! depth-bounded minimax over one shared, mutable [`GameState`], maximizing for the AI
//! side and minimizing for its opponent.
//!
//! # Features
//!
//! - Alpha-beta pruning
//! - Decided positions scored ±[`PatternScore::WIN`], dominating any heuristic value.
//!   The remaining depth is added to the magnitude so a win found nearer the root beats a
//!   slower forced win, and a loss is pushed as far down the tree as possible.
//! - Static evaluation at the depth bound
//! - Neighbor-filtered move generation
//!
//! Every tentative stone goes through [`GameState::probe`], so the state handed to
//! [`Searcher::search`] is bit-identical when the call returns.
//!
//! # Example
//!
//! ```
//! use gomoku::{GameState, Stone};
//! use gomoku::search::Searcher;
//!
//! let mut game = GameState::new();
//! game.apply_move(7, 7);
//!
//! let mut searcher = Searcher::new(2);
//! let result = searcher.search(&mut game, Stone::White);
//! if let Some(best_move) = result.best_move {
//!     println!("Best move: ({}, {})", best_move.row, best_move.col);
//! }
//! ```

use std::time::Instant;

use tracing::debug;

use crate::board::{Pos, Stone};
use crate::eval::{evaluate, PatternScore};
use crate::game::GameState;

use super::movegen::{candidate_moves, NEIGHBOR_RADIUS};

/// Unbounded alpha/beta window edge
pub const INF: i32 = i32::MAX;

/// Value of a decided position with `depth` plies of budget left.
#[inline]
pub fn terminal_score(ai_won: bool, depth: u8) -> i32 {
    let magnitude = PatternScore::WIN + i32::from(depth);
    if ai_won {
        magnitude
    } else {
        -magnitude
    }
}

/// Whether a search score means a forced result rather than a heuristic estimate
#[inline]
pub fn is_decisive(score: i32) -> bool {
    score.abs() >= PatternScore::WIN
}

/// Search statistics for diagnostics.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Sibling loops cut short by `beta <= alpha`
    pub beta_cutoffs: u64,
    /// Leaves scored by the static evaluator
    pub leaf_evals: u64,
    /// Nodes where the game was already decided
    pub terminal_hits: u64,
}

/// Search result containing the best move found and associated statistics.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// Best move found, `None` when there is nothing to play
    pub best_move: Option<Pos>,
    /// Minimax value from the AI side's perspective
    pub score: i32,
    /// Depth bound used
    pub depth: u8,
    /// Total nodes visited
    pub nodes: u64,
    /// Search diagnostics
    pub stats: SearchStats,
}

/// Depth-bounded minimax searcher.
pub struct Searcher {
    max_depth: u8,
    radius: u8,
    ai: Stone,
    nodes: u64,
    stats: SearchStats,
}

impl Searcher {
    /// Searcher with the given depth bound and the default neighbor radius
    pub fn new(max_depth: u8) -> Self {
        Self::with_radius(max_depth, NEIGHBOR_RADIUS)
    }

    pub fn with_radius(max_depth: u8, radius: u8) -> Self {
        Self {
            max_depth,
            radius,
            ai: Stone::Black,
            nodes: 0,
            stats: SearchStats::default(),
        }
    }

    #[inline]
    pub fn max_depth(&self) -> u8 {
        self.max_depth
    }

    /// Find the best move for `ai` with a full (-INF, +INF) window.
    ///
    /// The state is borrowed exclusively for the whole call and is restored exactly
    /// before returning. A decided game or a full board yields no move.
    pub fn search(&mut self, state: &mut GameState, ai: Stone) -> SearchResult {
        debug_assert!(ai != Stone::Empty);
        self.ai = ai;
        self.nodes = 0;
        self.stats = SearchStats::default();

        #[cfg(debug_assertions)]
        let before = state.clone();
        let start = Instant::now();

        let (score, best_move) = self.minimax(state, self.max_depth, -INF, INF, true);

        #[cfg(debug_assertions)]
        debug_assert_eq!(*state, before, "search leaked a tentative move");

        debug!(
            %ai,
            depth = self.max_depth,
            score,
            nodes = self.nodes,
            cutoffs = self.stats.beta_cutoffs,
            elapsed_ms = start.elapsed().as_millis() as u64,
            best = ?best_move,
            "search finished"
        );

        SearchResult {
            best_move,
            score,
            depth: self.max_depth,
            nodes: self.nodes,
            stats: self.stats.clone(),
        }
    }

    /// Recursive minimax step. Returns the value of the node and the move achieving it.
    ///
    /// `maximizing` is true when the AI side is to move at this node.
    pub fn minimax(
        &mut self,
        state: &mut GameState,
        depth: u8,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
    ) -> (i32, Option<Pos>) {
        self.nodes += 1;

        if let Some(winner) = state.winner() {
            self.stats.terminal_hits += 1;
            return (terminal_score(winner == self.ai, depth), None);
        }
        if depth == 0 {
            self.stats.leaf_evals += 1;
            return (evaluate(state.board(), self.ai), None);
        }

        let moves = candidate_moves(state.board(), self.radius);
        if moves.is_empty() {
            // Board filled up without five: nothing left but the static score
            self.stats.leaf_evals += 1;
            return (evaluate(state.board(), self.ai), None);
        }

        let mover = if maximizing { self.ai } else { self.ai.opponent() };
        let mut best_move = None;
        let mut best_score = if maximizing { -INF } else { INF };

        for mov in moves {
            let (score, _) = {
                let mut probe = state.probe(mov, mover);
                self.minimax(&mut probe, depth - 1, alpha, beta, !maximizing)
            };

            if maximizing {
                if score > best_score {
                    best_score = score;
                    best_move = Some(mov);
                }
                alpha = alpha.max(score);
            } else {
                if score < best_score {
                    best_score = score;
                    best_move = Some(mov);
                }
                beta = beta.min(score);
            }

            if beta <= alpha {
                self.stats.beta_cutoffs += 1;
                break;
            }
        }

        (best_score, best_move)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;

    fn state_with(black: &[(u8, u8)], white: &[(u8, u8)], to_move: Stone) -> GameState {
        let mut board = Board::new();
        for &(r, c) in black {
            board.place_stone(Pos::new(r, c), Stone::Black);
        }
        for &(r, c) in white {
            board.place_stone(Pos::new(r, c), Stone::White);
        }
        GameState::from_board(board, to_move)
    }

    /// Minimax without pruning, for comparing values
    fn plain_minimax(state: &mut GameState, ai: Stone, depth: u8, maximizing: bool) -> i32 {
        if let Some(winner) = state.winner() {
            return terminal_score(winner == ai, depth);
        }
        let moves = candidate_moves(state.board(), NEIGHBOR_RADIUS);
        if depth == 0 || moves.is_empty() {
            return evaluate(state.board(), ai);
        }
        let mover = if maximizing { ai } else { ai.opponent() };
        let scores = moves.into_iter().map(|m| {
            let mut probe = state.probe(m, mover);
            plain_minimax(&mut probe, ai, depth - 1, !maximizing)
        });
        let scores: Vec<i32> = scores.collect();
        if maximizing {
            scores.into_iter().max().unwrap()
        } else {
            scores.into_iter().min().unwrap()
        }
    }

    #[test]
    fn test_search_empty_board_depth_one() {
        let mut searcher = Searcher::new(1);
        let mut game = GameState::new();

        let result = searcher.search(&mut game, Stone::Black);
        let best = result.best_move.expect("empty board has moves");
        assert!(game.is_valid(best));
        assert_eq!(result.nodes, 1 + 225);
        assert_eq!(game, GameState::new());
    }

    #[test]
    fn test_search_finds_winning_move() {
        let mut searcher = Searcher::new(2);
        // Open four for black on row 7
        let mut game = state_with(
            &[(7, 5), (7, 6), (7, 7), (7, 8)],
            &[(8, 6), (8, 7), (6, 9)],
            Stone::Black,
        );

        let result = searcher.search(&mut game, Stone::Black);
        let best = result.best_move.unwrap();
        assert!(best == Pos::new(7, 4) || best == Pos::new(7, 9), "got {best}");
        assert_eq!(result.score, terminal_score(true, 1));
    }

    #[test]
    fn test_search_finds_win_at_depth_three() {
        let mut searcher = Searcher::new(3);
        let mut game = state_with(
            &[(3, 3), (4, 4), (5, 5), (6, 6)],
            &[(3, 4), (4, 5), (5, 6)],
            Stone::Black,
        );
        // Every move wins eventually against an open four; the immediate one must be chosen
        let result = searcher.search(&mut game, Stone::Black);
        assert_eq!(result.score, terminal_score(true, 2));
        let best = result.best_move.unwrap();
        assert!(best == Pos::new(2, 2) || best == Pos::new(7, 7), "got {best}");
    }

    #[test]
    fn test_search_blocks_opponent_win() {
        let mut searcher = Searcher::new(2);
        // White four against the left edge: only (9, 4) stops it
        let mut game = state_with(
            &[(10, 0), (11, 1)],
            &[(9, 0), (9, 1), (9, 2), (9, 3)],
            Stone::Black,
        );

        let result = searcher.search(&mut game, Stone::Black);
        assert_eq!(result.best_move, Some(Pos::new(9, 4)));
        assert!(!is_decisive(result.score));
    }

    #[test]
    fn test_search_losing_score() {
        let mut searcher = Searcher::new(2);
        // Open four for white cannot be stopped
        let mut game = state_with(
            &[(10, 10), (11, 11), (12, 12)],
            &[(5, 5), (5, 6), (5, 7), (5, 8)],
            Stone::Black,
        );
        let result = searcher.search(&mut game, Stone::Black);
        assert_eq!(result.score, terminal_score(false, 0));
        assert!(result.best_move.is_some());
    }

    #[test]
    fn test_search_for_white() {
        let mut searcher = Searcher::new(2);
        let mut game = state_with(
            &[(0, 0), (14, 14), (0, 14)],
            &[(6, 2), (6, 3), (6, 4), (6, 5)],
            Stone::White,
        );
        let result = searcher.search(&mut game, Stone::White);
        assert_eq!(result.score, terminal_score(true, 1));
        assert_eq!(result.best_move, Some(Pos::new(6, 1)));
    }

    #[test]
    fn test_search_restores_state() {
        let mut game = state_with(
            &[(7, 7), (7, 8), (8, 8)],
            &[(6, 6), (8, 7), (9, 9)],
            Stone::Black,
        );
        let before = game.clone();
        let mut searcher = Searcher::new(3);
        let _ = searcher.search(&mut game, Stone::Black);
        assert_eq!(game, before);
        assert_eq!(game.board(), before.board());
        assert_eq!(game.winner(), None);
        assert_eq!(game.current_player(), Stone::Black);
    }

    #[test]
    fn test_search_restores_state_when_wins_are_found() {
        let mut game = state_with(
            &[(7, 5), (7, 6), (7, 7), (7, 8)],
            &[(6, 5), (6, 6), (6, 7), (6, 8)],
            Stone::Black,
        );
        let before = game.clone();
        let mut searcher = Searcher::new(3);
        let result = searcher.search(&mut game, Stone::Black);
        assert!(is_decisive(result.score) && result.score > 0);
        assert_eq!(result.best_move, Some(Pos::new(7, 4)));
        assert!(result.stats.terminal_hits > 0);
        assert_eq!(game, before);
    }

    #[test]
    fn test_decided_game_yields_no_move() {
        let mut game = GameState::new();
        for i in 0..4 {
            game.apply_move(0, i);
            game.apply_move(1, i);
        }
        game.apply_move(0, 4);
        assert_eq!(game.winner(), Some(Stone::Black));

        let mut searcher = Searcher::new(3);
        let result = searcher.search(&mut game, Stone::Black);
        assert_eq!(result.best_move, None);
        assert_eq!(result.score, terminal_score(true, 3));
        assert_eq!(result.nodes, 1);
    }

    #[test]
    fn test_full_board_yields_no_move() {
        let mut game = GameState::from_board(Board::full_without_five(), Stone::Black);
        let before = game.clone();
        let mut searcher = Searcher::new(3);
        let result = searcher.search(&mut game, Stone::Black);
        assert_eq!(result.best_move, None);
        assert_eq!(game, before);
    }

    #[test]
    fn test_pruning_preserves_minimax_value() {
        let positions = [
            state_with(&[(7, 7)], &[(7, 8)], Stone::Black),
            state_with(&[(7, 7), (8, 8)], &[(7, 8), (6, 6)], Stone::Black),
            state_with(&[(3, 3), (3, 4), (3, 5)], &[(4, 4), (5, 5)], Stone::White),
        ];
        for mut game in positions {
            for ai in [Stone::Black, Stone::White] {
                let mut searcher = Searcher::new(2);
                let pruned = searcher.search(&mut game, ai).score;
                let full = plain_minimax(&mut game, ai, 2, true);
                assert_eq!(pruned, full);
            }
        }
    }

    #[test]
    fn test_pruning_cuts_nodes() {
        let mut game = state_with(&[(7, 7), (8, 8)], &[(7, 8), (6, 6)], Stone::Black);
        let mut searcher = Searcher::new(3);
        let result = searcher.search(&mut game, Stone::Black);
        assert!(result.stats.beta_cutoffs > 0);
        assert!(result.nodes > 0);
        assert!(result.stats.leaf_evals < result.nodes);
    }

    #[test]
    fn test_terminal_scores_dominate_heuristics() {
        let crowded = Board::full_without_five();
        let heuristic = evaluate(&crowded, Stone::Black).abs();
        assert!(terminal_score(true, 0) > heuristic);
        assert!(terminal_score(false, 0) < -heuristic);
        assert!(terminal_score(true, 2) > terminal_score(true, 1));
        assert!(terminal_score(false, 2) < terminal_score(false, 1));
        assert!(!is_decisive(heuristic));
    }

    #[test]
    fn test_leaf_score_is_static_evaluation() {
        let mut game = state_with(&[(7, 7), (7, 8)], &[(0, 0)], Stone::Black);
        let mut searcher = Searcher::new(0);
        let result = searcher.search(&mut game, Stone::Black);
        assert_eq!(result.best_move, None);
        assert_eq!(result.score, evaluate(game.board(), Stone::Black));
    }
}

//! Gomoku engine with a minimax AI
//!
//! Freestyle Gomoku on a fixed 15×15 board: players alternate placing stones and the
//! first to line up five or more (horizontally, vertically or diagonally) wins. Black is
//! player A, the AI side by convention, and moves first; White is player B, the human.
//!
//! # Architecture
//!
//! The engine is organized into several modules:
//! - [`board`]: Board representation with bitboards
//! - [`rules`]: Move legality and five-in-a-row detection
//! - [`game`]: Game state, the only place moves are committed
//! - [`eval`]: Window-count position evaluation
//! - [`search`]: Candidate generation and minimax with alpha-beta pruning
//! - [`agent`]: Search and random AI players
//! - [`engine`]: AI engine that times and commits agent decisions
//! - [`session`]: Human-vs-AI game instance for front ends
//! - [`arena`]: Agent-vs-agent games
//! - [`config`] and [`error`]: Configuration and error types
//!
//! # Quick Start
//!
//! ```
//! use gomoku::{AIEngine, EngineConfig, GameState, Stone};
//!
//! let mut game = GameState::new();
//! let mut engine = AIEngine::new(EngineConfig::default().with_depth(2)).unwrap();
//!
//! // Human (Black here) opens in the centre, AI answers as White
//! game.apply_move(7, 7);
//! if let Some(result) = engine.compute_ai_move(&mut game) {
//!     println!("AI plays at {:?}", result.best_move);
//! }
//! assert_eq!(game.current_player(), Stone::Black);
//! ```
//!
//! # Search
//!
//! The AI explores the one shared [`GameState`] in place: every tentative stone is a
//! scoped [`game::Probe`] that puts the cell and winner flag back when it goes out of
//! scope, so the state is bit-identical after each search. Only empty cells within two
//! steps of a stone are considered, and leaves are scored by counting aligned windows of
//! two, three and four stones.

pub mod agent;
pub mod arena;
pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod eval;
pub mod game;
pub mod rules;
pub mod search;
pub mod session;
pub mod ui;

// Re-export commonly used types for convenience
pub use agent::{build_agent, Agent, RandomAgent, SearchAgent};
pub use board::{Board, Pos, Stone, BOARD_SIZE};
pub use config::{AgentKind, EngineConfig};
pub use engine::{AIEngine, MoveResult, SearchType};
pub use error::{GomokuError, GomokuResult};
pub use game::{GamePhase, GameState, MoveOutcome, Snapshot};
pub use session::Session;

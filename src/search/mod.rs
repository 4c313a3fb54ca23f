//! Search module for Gomoku AI
//!
//! Contains:
//! - Candidate move generation with a neighbor filter
//! - Depth-bounded minimax with alpha-beta pruning

pub mod alphabeta;
pub mod movegen;

pub use alphabeta::{is_decisive, terminal_score, SearchResult, SearchStats, Searcher, INF};
pub use movegen::{candidate_moves, NEIGHBOR_RADIUS};

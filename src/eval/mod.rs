//! Evaluation module for Gomoku positions
//!
//! Static evaluation used at search leaves: weighted counts of aligned
//! twos, threes and fours for each side.

pub mod heuristic;
pub mod patterns;

pub use heuristic::{count_windows, evaluate, pattern_score};
pub use patterns::{PatternScore, WINDOW_WEIGHTS};

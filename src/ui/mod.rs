//! GUI module for the Gomoku game
//!
//! This module provides a native Rust GUI using egui/eframe.

mod app;
mod board_view;
mod play_state;
mod theme;

pub use app::GomokuApp;
pub use play_state::{GameMode, PlayState};

//! GUI module for sum-difference Gomoku
//!
//! This module provides a native Rust GUI using egui/eframe.

mod app;
mod board_view;
mod game_state;
mod stone_picker;
mod theme;

pub use app::SumDiffApp;
pub use game_state::{GameState, PendingPlacement};

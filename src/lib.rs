//! Sum-difference Gomoku
//!
//! A two-player Gomoku variant on a 15x15 board with numbered stones:
//! - Each player owns twenty stones, values 1 to 5, four copies each
//! - Black moves first and must open with a stone of value 1, 2 or 3
//! - A player wins when, after any move, their best contiguous line scores
//!   exactly 16 (own stone values minus opponent stone values in the line)
//!
//! # Architecture
//!
//! - [`board`]: Board cells, positions and stone inventories
//! - [`rules`]: Opening restriction and the full-board win scan
//! - [`game`]: The game session applying rule-checked placements
//! - [`config`]: Presentation settings loaded from TOML
//! - [`ui`]: egui/eframe front end
//!
//! # Quick Start
//!
//! ```
//! use sumdiff::{GameSession, PlaceOutcome, Player, Pos};
//!
//! let mut game = GameSession::new();
//! assert_eq!(game.legal_choices(Player::Black).unwrap(), vec![1, 2, 3]);
//!
//! let outcome = game.place_stone(Pos::new(7, 7), Player::Black, 3).unwrap();
//! assert_eq!(outcome, PlaceOutcome::Continue { next: Player::White });
//! assert_eq!(game.scores().black, 3);
//! ```

pub mod board;
pub mod config;
pub mod error;
pub mod game;
pub mod rules;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{
    Board, Cell, Inventory, Player, Pos, BOARD_SIZE, MAX_STONE_VALUE, MIN_STONE_VALUE,
    STONES_PER_PLAYER,
};
pub use error::{ConfigError, GameError};
pub use game::{GameSession, GameStatus, PlaceOutcome, WinInfo};
pub use rules::{BoardScores, WINNING_SCORE};

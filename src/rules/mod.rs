//! Game rules for sum-difference Gomoku
//!
//! This module implements the rule set:
//! - Which stone values a player may place (opening restriction)
//! - Win condition (a contiguous line whose signed sum is exactly 16)

pub mod opening;
pub mod win;

// Re-exports for convenient access
pub use opening::{legal_choices, OPENING_MAX_VALUE};
pub use win::{
    check_winner, directional_score, find_scoring_group, scan_board, stone_group, BoardScores,
    DIRECTIONS, WINNING_SCORE,
};

use std::path::PathBuf;

use crate::board::{Player, Pos};

/// Rejected game actions. None of these change the session state.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("position (row {row}, col {col}) is off the board")]
    OutOfBounds { row: u8, col: u8 },

    #[error("cell {0} is already occupied")]
    CellOccupied(Pos),

    #[error("no stone value selected")]
    NoSelection,

    #[error("{player} may not place a stone of value {value} now")]
    InvalidPlacement { player: Player, value: u8 },

    #[error("{0} has no stone it may place")]
    NoLegalMove(Player),

    #[error("it is {expected}'s turn, not {got}'s")]
    NotYourTurn { expected: Player, got: Player },

    #[error("game is over")]
    GameOver,
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_error_display() {
        let err = GameError::InvalidPlacement { player: Player::Black, value: 5 };
        assert_eq!(err.to_string(), "Black may not place a stone of value 5 now");

        let err = GameError::CellOccupied(Pos::new(7, 3));
        assert_eq!(err.to_string(), "cell (3, 7) is already occupied");

        let err = GameError::NotYourTurn { expected: Player::White, got: Player::Black };
        assert_eq!(err.to_string(), "it is White's turn, not Black's");
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Validation("win_pause_ms must be <= 60000".to_string());
        assert_eq!(
            err.to_string(),
            "config validation error: win_pause_ms must be <= 60000"
        );
    }
}

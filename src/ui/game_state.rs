//! Game state management for the GUI
//!
//! Wraps a [`GameSession`] with the interaction state the rules do not care
//! about: the open stone picker, status messages and the delayed game-over
//! dialog.

use std::time::{Duration, Instant};

use crate::{GameError, GameSession, PlaceOutcome, Player, Pos};

/// Stone picker opened for an empty cell
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingPlacement {
    pub pos: Pos,
    pub player: Player,
    pub choices: Vec<u8>,
}

/// Main GUI game state
pub struct GameState {
    pub session: GameSession,
    pub pending: Option<PendingPlacement>,
    pub message: Option<String>,
    won_at: Option<Instant>,
    win_pause: Duration,
}

impl GameState {
    pub fn new(win_pause: Duration) -> Self {
        Self {
            session: GameSession::new(),
            pending: None,
            message: None,
            won_at: None,
            win_pause,
        }
    }

    pub fn reset(&mut self) {
        self.session.reset();
        self.pending = None;
        self.message = None;
        self.won_at = None;
    }

    /// A cell was clicked: open the picker with the values the player on
    /// turn may place there.
    pub fn select_cell(&mut self, pos: Pos) -> Result<(), GameError> {
        if self.session.is_over() {
            return Err(GameError::GameOver);
        }
        if !pos.in_bounds() {
            return Err(GameError::OutOfBounds { row: pos.row, col: pos.col });
        }
        if !self.session.board().is_empty(pos) {
            return Err(GameError::CellOccupied(pos));
        }

        let player = self.session.current_turn();
        let choices = self.session.legal_choices(player)?;
        self.pending = Some(PendingPlacement { pos, player, choices });
        self.message = None;
        Ok(())
    }

    /// Close the picker. `None` means the player cancelled; the turn does not
    /// advance.
    pub fn choose_value(&mut self, value: Option<u8>) -> Result<PlaceOutcome, GameError> {
        let pending = self.pending.take().ok_or(GameError::NoSelection)?;
        let value = value.ok_or(GameError::NoSelection)?;

        let outcome = self.session.place_stone(pending.pos, pending.player, value)?;
        if matches!(outcome, PlaceOutcome::Win(_)) {
            self.won_at = Some(Instant::now());
        }
        self.message = None;
        Ok(outcome)
    }

    /// Time left before the game-over dialog shows, `None` while the game runs
    pub fn dialog_delay(&self, now: Instant) -> Option<Duration> {
        self.won_at
            .map(|t| self.win_pause.saturating_sub(now.saturating_duration_since(t)))
    }

    /// Whether the game-over dialog should be visible
    pub fn show_game_over(&self, now: Instant) -> bool {
        self.dialog_delay(now) == Some(Duration::ZERO)
    }

    pub fn report(&mut self, err: &GameError) {
        log::warn!("action rejected: {}", err);
        self.message = Some(match err {
            // Both inventories ran dry without a winner; only a new game helps
            GameError::NoLegalMove(_) => format!("{}. Start a New Game (N).", err),
            _ => err.to_string(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_opens_picker_with_opening_choices() {
        let mut state = GameState::new(Duration::ZERO);
        state.select_cell(Pos::new(7, 7)).unwrap();
        let pending = state.pending.clone().unwrap();
        assert_eq!(pending.player, Player::Black);
        assert_eq!(pending.choices, vec![1, 2, 3]);
    }

    #[test]
    fn test_cancel_does_not_advance_turn() {
        let mut state = GameState::new(Duration::ZERO);
        state.select_cell(Pos::new(7, 7)).unwrap();
        assert_eq!(state.choose_value(None), Err(GameError::NoSelection));
        assert!(state.pending.is_none());
        assert_eq!(state.session.current_turn(), Player::Black);
        assert!(state.session.board().is_board_empty());
    }

    #[test]
    fn test_choose_value_places_stone() {
        let mut state = GameState::new(Duration::ZERO);
        state.select_cell(Pos::new(7, 7)).unwrap();
        let outcome = state.choose_value(Some(2)).unwrap();
        assert_eq!(outcome, PlaceOutcome::Continue { next: Player::White });
        assert_eq!(state.session.board().get(Pos::new(7, 7)).value(), Some(2));

        assert_eq!(state.select_cell(Pos::new(7, 7)), Err(GameError::CellOccupied(Pos::new(7, 7))));
        assert_eq!(
            state.select_cell(Pos { row: 3, col: 20 }),
            Err(GameError::OutOfBounds { row: 3, col: 20 })
        );
    }

    #[test]
    fn test_choose_without_picker() {
        let mut state = GameState::new(Duration::ZERO);
        assert_eq!(state.choose_value(Some(1)), Err(GameError::NoSelection));
    }

    #[test]
    fn test_exhausted_inventories_suggest_new_game() {
        let mut state = GameState::new(Duration::ZERO);
        for i in 0..40u8 {
            state.select_cell(Pos::new(2 * (i / 8), 2 * (i % 8))).unwrap();
            let value = state.pending.as_ref().unwrap().choices[0];
            state.choose_value(Some(value)).unwrap();
        }
        assert!(!state.session.is_over());

        let err = state.select_cell(Pos::new(14, 14)).unwrap_err();
        assert_eq!(err, GameError::NoLegalMove(Player::Black));
        assert!(state.pending.is_none());

        state.report(&err);
        let message = state.message.clone().unwrap();
        assert!(message.starts_with("Black has no stone it may place"));
        assert!(message.contains("New Game"));

        state.report(&GameError::CellOccupied(Pos::new(0, 0)));
        assert!(!state.message.unwrap().contains("New Game"));
    }

    #[test]
    fn test_game_over_dialog_waits_for_pause() {
        let mut state = GameState::new(Duration::from_secs(2));
        let moves = [
            (Pos::new(7, 5), 3),
            (Pos::new(0, 0), 1),
            (Pos::new(7, 6), 3),
            (Pos::new(0, 2), 1),
            (Pos::new(7, 7), 3),
            (Pos::new(0, 4), 1),
            (Pos::new(7, 8), 3),
            (Pos::new(0, 6), 1),
            (Pos::new(7, 9), 4),
        ];
        let now = Instant::now();
        assert_eq!(state.dialog_delay(now), None);

        for (pos, value) in moves {
            state.select_cell(pos).unwrap();
            state.choose_value(Some(value)).unwrap();
        }
        assert!(state.session.is_over());
        assert_eq!(state.select_cell(Pos::new(10, 10)), Err(GameError::GameOver));

        let won_at = state.won_at.unwrap();
        assert!(!state.show_game_over(won_at));
        assert!(state.show_game_over(won_at + Duration::from_secs(3)));

        state.reset();
        assert!(!state.session.is_over());
        assert_eq!(state.dialog_delay(Instant::now()), None);
    }
}

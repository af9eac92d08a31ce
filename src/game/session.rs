use crate::board::{Board, Inventory, Player, Pos};
use crate::error::GameError;
use crate::rules::{self, BoardScores, WINNING_SCORE};

/// How a won game ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WinInfo {
    pub winner: Player,
    /// Stone whose placement completed the win
    pub last_move: Pos,
    /// A group of the winner scoring exactly the winning score
    pub line: Vec<Pos>,
    pub score: i32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Terminal(WinInfo),
}

/// Result of a committed placement
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaceOutcome {
    /// No winner yet, `next` is on turn
    Continue { next: Player },
    Win(WinInfo),
}

/// One game of sum-difference Gomoku.
///
/// Owns the board, both inventories and the turn state. Every mutation goes
/// through [`GameSession::place_stone`] or [`GameSession::reset`]; a rejected
/// placement leaves everything untouched.
#[derive(Debug, Clone)]
pub struct GameSession {
    board: Board,
    black_stones: Inventory,
    white_stones: Inventory,
    current_turn: Player,
    move_count: u32,
    last_move: Option<Pos>,
    scores: BoardScores,
    status: GameStatus,
}

impl GameSession {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            black_stones: Inventory::full(),
            white_stones: Inventory::full(),
            current_turn: Player::Black,
            move_count: 0,
            last_move: None,
            scores: BoardScores::default(),
            status: GameStatus::InProgress,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new();
        log::info!("game reset");
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn inventory(&self, player: Player) -> &Inventory {
        match player {
            Player::Black => &self.black_stones,
            Player::White => &self.white_stones,
        }
    }

    fn inventory_mut(&mut self, player: Player) -> &mut Inventory {
        match player {
            Player::Black => &mut self.black_stones,
            Player::White => &mut self.white_stones,
        }
    }

    #[inline]
    pub fn current_turn(&self) -> Player {
        self.current_turn
    }

    /// Completed placements since the last reset
    #[inline]
    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    #[inline]
    pub fn last_move(&self) -> Option<Pos> {
        self.last_move
    }

    /// Maxima from the scan after the latest placement
    #[inline]
    pub fn scores(&self) -> BoardScores {
        self.scores
    }

    #[inline]
    pub fn status(&self) -> &GameStatus {
        &self.status
    }

    pub fn winner(&self) -> Option<&WinInfo> {
        match &self.status {
            GameStatus::Terminal(info) => Some(info),
            GameStatus::InProgress => None,
        }
    }

    #[inline]
    pub fn is_over(&self) -> bool {
        matches!(self.status, GameStatus::Terminal(_))
    }

    /// Values `player` may place at the current move number
    pub fn legal_choices(&self, player: Player) -> Result<Vec<u8>, GameError> {
        rules::legal_choices(self.inventory(player), player, self.move_count)
    }

    /// Check every precondition of a placement without touching the state
    pub fn validate(&self, pos: Pos, player: Player, value: u8) -> Result<(), GameError> {
        if self.is_over() {
            return Err(GameError::GameOver);
        }
        if !pos.in_bounds() {
            return Err(GameError::OutOfBounds { row: pos.row, col: pos.col });
        }
        if !self.board.is_empty(pos) {
            return Err(GameError::CellOccupied(pos));
        }
        if player != self.current_turn {
            return Err(GameError::NotYourTurn { expected: self.current_turn, got: player });
        }
        if !self.legal_choices(player)?.contains(&value) {
            return Err(GameError::InvalidPlacement { player, value });
        }
        Ok(())
    }

    /// Place one of `player`'s stones and evaluate the board.
    ///
    /// On success one copy of `value` leaves the inventory, the cell becomes
    /// occupied and the whole board is rescanned. A winning scan ends the game;
    /// otherwise the turn passes and the move counter advances.
    pub fn place_stone(
        &mut self,
        pos: Pos,
        player: Player,
        value: u8,
    ) -> Result<PlaceOutcome, GameError> {
        self.validate(pos, player, value)?;

        if !self.inventory_mut(player).take(value) {
            return Err(GameError::InvalidPlacement { player, value });
        }
        self.board.set(pos, player, value);
        self.last_move = Some(pos);
        log::info!("{} places {} at {}", player, value, pos);

        self.scores = rules::scan_board(&self.board);
        if let Some(winner) = self.scores.winner() {
            let line = rules::find_scoring_group(&self.board, winner, WINNING_SCORE)
                .unwrap_or_else(|| vec![pos]);
            let info = WinInfo {
                winner,
                last_move: pos,
                line,
                score: WINNING_SCORE,
            };
            log::info!("{} wins with a score of {}", winner, WINNING_SCORE);
            self.status = GameStatus::Terminal(info.clone());
            return Ok(PlaceOutcome::Win(info));
        }

        self.current_turn = player.opponent();
        self.move_count += 1;
        Ok(PlaceOutcome::Continue { next: self.current_turn })
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

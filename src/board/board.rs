//! Board structure holding stone owners and values

use super::{Cell, Player, Pos, TOTAL_CELLS};

/// Game board: one [`Cell`] per intersection, row-major
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [Cell; TOTAL_CELLS],
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; TOTAL_CELLS],
        }
    }

    /// Get cell at position. Off-board positions read as empty.
    #[inline]
    pub fn get(&self, pos: Pos) -> Cell {
        if pos.in_bounds() {
            self.cells[pos.to_index()]
        } else {
            Cell::Empty
        }
    }

    /// Check if position is empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        self.get(pos).is_empty()
    }

    /// Put a stone on the board without any rule checks.
    /// Game moves go through `GameSession::place_stone`.
    #[inline]
    pub(crate) fn set(&mut self, pos: Pos, owner: Player, value: u8) {
        debug_assert!(pos.in_bounds());
        self.cells[pos.to_index()] = Cell::Occupied { owner, value };
    }

    /// Iterate over occupied positions in row-major order
    pub fn occupied(&self) -> impl Iterator<Item = (Pos, Player, u8)> + '_ {
        self.cells.iter().enumerate().filter_map(|(idx, cell)| match *cell {
            Cell::Occupied { owner, value } => Some((Pos::from_index(idx), owner, value)),
            Cell::Empty => None,
        })
    }

    /// Total stones on board
    #[inline]
    pub fn stone_count(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_empty()).count()
    }

    /// Stones on board owned by `player`
    pub fn stones_of(&self, player: Player) -> usize {
        self.cells.iter().filter(|c| c.owner() == Some(player)).count()
    }

    /// Check if board is empty
    #[inline]
    pub fn is_board_empty(&self) -> bool {
        self.cells.iter().all(|c| c.is_empty())
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

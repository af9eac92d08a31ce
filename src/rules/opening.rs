//! Stone values a player may place on a given turn
//!
//! Any value still in the player's inventory is allowed, except on the very
//! first move of the game: Black must then open with a value of at most 3.

use crate::board::{Inventory, Player};
use crate::error::GameError;

/// Highest value Black may open with
pub const OPENING_MAX_VALUE: u8 = 3;

/// Sorted, distinct values `player` may place at move number `move_count`.
///
/// Fails with [`GameError::NoLegalMove`] when nothing is left to offer.
pub fn legal_choices(
    inventory: &Inventory,
    player: Player,
    move_count: u32,
) -> Result<Vec<u8>, GameError> {
    let opening = move_count == 0 && player == Player::Black;

    let choices: Vec<u8> = inventory
        .distinct_values()
        .filter(|&v| !opening || v <= OPENING_MAX_VALUE)
        .collect();

    if choices.is_empty() {
        return Err(GameError::NoLegalMove(player));
    }
    Ok(choices)
}

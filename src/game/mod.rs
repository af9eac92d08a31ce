//! Game session: board, inventories and turn state with rule-checked
//! placements.

mod session;

pub use session::{GameSession, GameStatus, PlaceOutcome, WinInfo};

//! Move sources: where each player's moves come from.

mod human;
mod random;

pub use human::{
    HumanMoveSource, INVALID_MARK_PROMPT, MARK_PROMPT, MOVE_PROMPT, OCCUPIED_PROMPT,
    parse_coordinates, parse_mark,
};
pub use random::RandomMoveSource;

use crate::error::MoveSourceError;
use crate::position::Position;
use crate::types::Board;

/// Anything that can choose a move for the active player.
///
/// Implementations must only return positions that are free on the board
/// they were handed.
pub trait MoveSource {
    /// Produces the next move for the given board.
    fn request_move(&mut self, board: &Board) -> Result<Position, MoveSourceError>;

    /// Returns the source's display name.
    fn name(&self) -> &str;
}

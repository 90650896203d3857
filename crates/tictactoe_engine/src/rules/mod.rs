//! Game rules for tic-tac-toe.
//!
//! Pure functions over a board snapshot. Rules are kept apart from board
//! storage so the turn loop and tests can evaluate any position directly.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{LINES, check_winner, has_win};

use crate::types::{Board, Mark};
use tracing::instrument;

/// Result of evaluating the board after a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    /// Neither a win nor a full board.
    Continue,
    /// The mark that just moved completed a line.
    Win(Mark),
    /// The board is full and nobody completed a line.
    Draw,
}

/// Evaluates the board after `last` has moved.
///
/// A win on the last free square is reported as a win, never as a draw.
#[instrument]
pub fn evaluate(board: &Board, last: Mark) -> Verdict {
    if has_win(board, last) {
        Verdict::Win(last)
    } else if is_full(board) {
        Verdict::Draw
    } else {
        Verdict::Continue
    }
}

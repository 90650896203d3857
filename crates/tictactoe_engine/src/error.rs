//! Error types for the game engine.
//!
//! The taxonomy is deliberately narrow: occupied cells and bad input are
//! recoverable by asking again, everything else ends the game loop.

use crate::position::Position;

/// Error returned by [`Board::place`](crate::Board::place).
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum PlaceError {
    /// The square at the position is already occupied.
    #[display("{} is already occupied", _0)]
    CellOccupied(Position),
}

impl std::error::Error for PlaceError {}

/// Error produced while parsing console input.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum InputError {
    /// The symbol choice was not X or O.
    #[display("{:?} is not a valid symbol", _0)]
    InvalidMarkChoice(String),

    /// The line did not hold exactly two integers.
    #[display("Expected two numbers separated by a space, got {:?}", _0)]
    InvalidMoveFormat(String),

    /// Row or column outside 1-3.
    #[display("Row {} / column {} is off the board (use 1-3)", row, col)]
    OutOfRange {
        /// 1-based row as entered.
        row: i64,
        /// 1-based column as entered.
        col: i64,
    },
}

impl std::error::Error for InputError {}

/// Error raised by a move source that cannot produce a move.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveSourceError {
    /// The input stream ended before a valid entry was read.
    #[display("Input closed before a valid entry was read")]
    InputClosed,

    /// Reading input or writing a prompt failed.
    #[display("Console I/O failed: {}", _0)]
    Io(String),

    /// No free square is left to choose.
    #[display("No free square left on the board")]
    BoardFull,
}

impl std::error::Error for MoveSourceError {}

impl From<std::io::Error> for MoveSourceError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

/// Error that can occur when applying a turn.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum GameError {
    /// The square at the position is already occupied.
    #[display("{} is already occupied", _0)]
    CellOccupied(Position),

    /// The game has reached a terminal status.
    #[display("Game is already over")]
    GameOver,

    /// The active move source failed.
    #[display("Move source failed: {}", _0)]
    Source(MoveSourceError),
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GameError::Source(err) => Some(err),
            _ => None,
        }
    }
}

impl From<PlaceError> for GameError {
    fn from(err: PlaceError) -> Self {
        match err {
            PlaceError::CellOccupied(pos) => GameError::CellOccupied(pos),
        }
    }
}

impl From<MoveSourceError> for GameError {
    fn from(err: MoveSourceError) -> Self {
        GameError::Source(err)
    }
}

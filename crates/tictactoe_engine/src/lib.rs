//! Tic-tac-toe engine - board, rules, turn sequencing and move sources
//!
//! A human and a computer alternate placing marks on a 3x3 grid until one
//! of them completes a line or the grid fills.
//!
//! # Architecture
//!
//! - **Board**: 3x3 grid with guarded placement
//! - **Rules**: pure win/draw evaluation
//! - **GameState**: board, both players, active player, status
//! - **MoveSource**: human (console) or random computer moves
//! - **TurnController**: the turn loop
//!
//! # Example
//!
//! ```
//! use tictactoe_engine::{GameState, Mark, PlayerKind, Position, GameStatus};
//!
//! let mut game = GameState::new(Mark::X, PlayerKind::Human);
//! assert_eq!(game.apply_move(Position::Center), Ok(GameStatus::InProgress));
//! assert_eq!(game.active_player().kind(), PlayerKind::Computer);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod controller;
mod error;
mod game;
mod player;
mod position;
mod sources;
mod types;

pub mod rules;

// Crate-level exports - Board and cells
pub use position::{BOARD_SIZE, Position};
pub use types::{Board, Mark, Square};

// Crate-level exports - Errors
pub use error::{GameError, InputError, MoveSourceError, PlaceError};

// Crate-level exports - Game state
pub use game::{GameState, GameStatus};
pub use player::{Player, PlayerKind};
pub use rules::Verdict;

// Crate-level exports - Move sources
pub use sources::{
    HumanMoveSource, INVALID_MARK_PROMPT, MARK_PROMPT, MOVE_PROMPT, MoveSource, OCCUPIED_PROMPT,
    RandomMoveSource, parse_coordinates, parse_mark,
};

// Crate-level exports - Turn loop
pub use controller::{GameEvent, GameObserver, TurnController};

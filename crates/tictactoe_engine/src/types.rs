//! Core domain types for tic-tac-toe.

use crate::error::PlaceError;
use crate::position::{BOARD_SIZE, Position};
use serde::{Deserialize, Serialize};
use tracing::{instrument, trace};

/// One of the two symbols placed on the board.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumIter,
    strum::EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum Mark {
    /// Mark X.
    #[display("X")]
    #[serde(alias = "x")]
    X,
    /// Mark O.
    #[display("O")]
    #[serde(alias = "o")]
    O,
}

impl Mark {
    /// Returns the other mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square occupied by a mark.
    Occupied(Mark),
}

impl std::fmt::Display for Square {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Square::Empty => write!(f, "-"),
            Square::Occupied(mark) => write!(f, "{}", mark),
        }
    }
}

/// 3x3 tic-tac-toe board.
///
/// Squares only ever go from `Empty` to `Occupied`; there is no way to
/// clear a square once marked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Checks if a square is empty.
    pub fn is_free(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Places a mark on a free square.
    ///
    /// # Errors
    ///
    /// Returns [`PlaceError::CellOccupied`] and leaves the board untouched
    /// if the square already holds a mark.
    #[instrument(skip(self))]
    pub fn place(&mut self, pos: Position, mark: Mark) -> Result<(), PlaceError> {
        if !self.is_free(pos) {
            return Err(PlaceError::CellOccupied(pos));
        }
        self.squares[pos.to_index()] = Square::Occupied(mark);
        trace!(row = pos.row(), col = pos.col(), %mark, "Mark placed");
        Ok(())
    }

    /// Number of empty squares.
    pub fn count_free(&self) -> usize {
        self.squares.iter().filter(|s| **s == Square::Empty).count()
    }

    /// Number of marked squares.
    pub fn occupied_count(&self) -> usize {
        self.squares.len() - self.count_free()
    }

    /// Iterates over the rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Square]> {
        self.squares.chunks(BOARD_SIZE)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    /// One line per row, e.g. `['X', '-', 'O']`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (idx, row) in self.rows().enumerate() {
            if idx > 0 {
                writeln!(f)?;
            }
            let cells: Vec<String> = row.iter().map(|s| format!("'{}'", s)).collect();
            write!(f, "[{}]", cells.join(", "))?;
        }
        Ok(())
    }
}

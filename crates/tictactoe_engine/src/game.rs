//! Game state: board, both players, whose turn it is, and the outcome.

use crate::error::GameError;
use crate::player::{Player, PlayerKind};
use crate::position::Position;
use crate::rules::{self, Verdict};
use crate::types::{Board, Mark};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended in a win.
    Won(Player),
    /// Game ended in a draw.
    Draw,
}

impl GameStatus {
    /// True for `Won` and `Draw`.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

/// Complete game state.
///
/// Owns the board and both players exclusively. Marks are assigned once
/// at construction and never change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    board: Board,
    /// Index 0 is the human, index 1 the computer.
    players: [Player; 2],
    active: usize,
    status: GameStatus,
}

impl GameState {
    /// Creates a new game where `first` moves first.
    #[instrument]
    pub fn new(human_mark: Mark, first: PlayerKind) -> Self {
        let active = match first {
            PlayerKind::Human => 0,
            PlayerKind::Computer => 1,
        };
        Self {
            board: Board::new(),
            players: Player::pair(human_mark),
            active,
            status: GameStatus::InProgress,
        }
    }

    /// Creates a new game with the first mover chosen uniformly at random.
    #[instrument(skip(rng))]
    pub fn with_random_start<R: Rng>(human_mark: Mark, rng: &mut R) -> Self {
        let first = if rng.random_bool(0.5) {
            PlayerKind::Human
        } else {
            PlayerKind::Computer
        };
        info!(%first, "First mover drawn");
        Self::new(human_mark, first)
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player of the given kind.
    pub fn player(&self, kind: PlayerKind) -> Player {
        match kind {
            PlayerKind::Human => self.players[0],
            PlayerKind::Computer => self.players[1],
        }
    }

    /// Returns the player whose turn it is.
    pub fn active_player(&self) -> Player {
        self.players[self.active]
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Places the active player's mark, re-evaluates the status and hands
    /// the turn over if the game goes on.
    ///
    /// # Errors
    ///
    /// - [`GameError::GameOver`] once the status is terminal.
    /// - [`GameError::CellOccupied`] if the square is taken; nothing changes.
    #[instrument(skip(self), fields(player = %self.active_player()))]
    pub fn apply_move(&mut self, pos: Position) -> Result<GameStatus, GameError> {
        if self.status.is_terminal() {
            return Err(GameError::GameOver);
        }

        let player = self.active_player();
        self.board.place(pos, player.mark())?;

        self.status = match rules::evaluate(&self.board, player.mark()) {
            Verdict::Win(_) => GameStatus::Won(player),
            Verdict::Draw => GameStatus::Draw,
            Verdict::Continue => {
                self.active = 1 - self.active;
                GameStatus::InProgress
            }
        };

        info!(row = pos.row(), col = pos.col(), status = ?self.status, "Move applied");
        Ok(self.status)
    }
}

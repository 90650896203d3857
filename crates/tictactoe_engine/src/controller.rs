//! Turn sequencing between the two players.

use crate::error::GameError;
use crate::game::{GameState, GameStatus};
use crate::player::{Player, PlayerKind};
use crate::position::Position;
use crate::sources::MoveSource;
use crate::types::Board;
use tracing::{info, instrument, warn};

/// Events emitted while a game is played.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// A player is about to move.
    TurnStarted(Player),
    /// A move was placed.
    MovePlayed {
        /// Who moved.
        player: Player,
        /// Where.
        position: Position,
        /// Board after the move.
        board: Board,
    },
    /// The game reached a terminal status.
    GameOver(GameStatus),
}

/// Receiver for game events (rendering, logging, recording).
pub trait GameObserver {
    /// Called once per event, in order.
    fn notify(&mut self, event: &GameEvent);
}

impl GameObserver for Vec<GameEvent> {
    fn notify(&mut self, event: &GameEvent) {
        self.push(event.clone());
    }
}

/// Drives a game: asks the active player's source for a move, applies it,
/// and stops at a win or draw.
pub struct TurnController {
    state: GameState,
    human: Box<dyn MoveSource>,
    computer: Box<dyn MoveSource>,
}

impl TurnController {
    /// Creates a controller over a fresh or in-progress game.
    pub fn new(
        state: GameState,
        human: Box<dyn MoveSource>,
        computer: Box<dyn MoveSource>,
    ) -> Self {
        info!(
            human = human.name(),
            computer = computer.name(),
            first = %state.active_player(),
            "Creating turn controller"
        );
        Self {
            state,
            human,
            computer,
        }
    }

    /// Returns the game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Plays a single turn for the active player.
    ///
    /// A source that hands back a taken square is asked again; that never
    /// reaches the caller.
    ///
    /// # Errors
    ///
    /// [`GameError::GameOver`] if the game already ended, or
    /// [`GameError::Source`] if the move source fails.
    #[instrument(skip_all, fields(player = %self.state.active_player()))]
    pub fn play_turn(&mut self, observer: &mut dyn GameObserver) -> Result<GameStatus, GameError> {
        if self.state.status().is_terminal() {
            return Err(GameError::GameOver);
        }

        let player = self.state.active_player();
        observer.notify(&GameEvent::TurnStarted(player));

        let source = match player.kind() {
            PlayerKind::Human => &mut self.human,
            PlayerKind::Computer => &mut self.computer,
        };

        let (position, status) = loop {
            let position = source.request_move(self.state.board())?;
            match self.state.apply_move(position) {
                Ok(status) => break (position, status),
                Err(GameError::CellOccupied(pos)) => {
                    warn!(source = source.name(), %pos, "Source chose a taken square, asking again");
                }
                Err(e) => return Err(e),
            }
        };

        observer.notify(&GameEvent::MovePlayed {
            player,
            position,
            board: self.state.board().clone(),
        });

        if status.is_terminal() {
            info!(?status, "Game over");
            observer.notify(&GameEvent::GameOver(status));
        }

        Ok(status)
    }

    /// Plays turns until the game ends and returns the final status.
    #[instrument(skip_all)]
    pub fn run(&mut self, observer: &mut dyn GameObserver) -> Result<GameStatus, GameError> {
        loop {
            let status = self.play_turn(observer)?;
            if status.is_terminal() {
                return Ok(status);
            }
        }
    }
}

//! Console rendering of game events.

use std::io::Write;
use tictactoe_engine::{GameEvent, GameObserver, GameStatus};
use tracing::warn;

/// Greeting printed before the symbol prompt.
pub const WELCOME: &str = "Welcome to the game TIC-TAC-TOE.";

/// Announcement for a full board without a winner.
pub const DRAW_MESSAGE: &str = "All fields occupied, game ends in a DRAW.";

/// Writes turn announcements, the board after every move, and the outcome.
pub struct ConsoleRenderer<W> {
    out: W,
}

impl<W: Write> ConsoleRenderer<W> {
    /// Creates a renderer writing to `out`.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Prints the greeting.
    pub fn welcome(&mut self) {
        self.line(WELCOME);
    }

    /// Consumes the renderer and returns the writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn line(&mut self, text: &str) {
        if let Err(e) = writeln!(self.out, "{}", text).and_then(|_| self.out.flush()) {
            warn!(error = %e, "Failed to write to console");
        }
    }
}

impl<W: Write> GameObserver for ConsoleRenderer<W> {
    fn notify(&mut self, event: &GameEvent) {
        match event {
            GameEvent::TurnStarted(player) => {
                self.line(&format!("{} is on turn. ({})", player.kind(), player.mark()));
            }
            GameEvent::MovePlayed { board, .. } => self.line(&board.to_string()),
            GameEvent::GameOver(GameStatus::Won(player)) => {
                self.line(&format!("{} wins!", player.kind()));
            }
            GameEvent::GameOver(GameStatus::Draw) => self.line(DRAW_MESSAGE),
            GameEvent::GameOver(GameStatus::InProgress) => {}
        }
    }
}

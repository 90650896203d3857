//! Participants and their marks.

use crate::types::Mark;
use serde::{Deserialize, Serialize};

/// Who is behind a player.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum PlayerKind {
    /// The person at the console.
    #[display("PLAYER")]
    Human,
    /// The random opponent.
    #[display("COMPUTER")]
    Computer,
}

/// A participant together with the mark it plays for the whole game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct Player {
    kind: PlayerKind,
    mark: Mark,
}

impl Player {
    /// Builds the human/computer pair; the computer gets the other mark.
    pub fn pair(human_mark: Mark) -> [Player; 2] {
        [
            Player::new(PlayerKind::Human, human_mark),
            Player::new(PlayerKind::Computer, human_mark.opponent()),
        ]
    }

    /// Who this player is.
    pub fn kind(&self) -> PlayerKind {
        self.kind
    }

    /// The mark this player places.
    pub fn mark(&self) -> Mark {
        self.mark
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.kind, self.mark)
    }
}

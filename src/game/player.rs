use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerId {
    First,
    Second,
}

impl PlayerId {
    /// Get the other player
    pub fn other(self) -> PlayerId {
        match self {
            PlayerId::First => PlayerId::Second,
            PlayerId::Second => PlayerId::First,
        }
    }

    /// Get player name for display
    pub fn name(self) -> &'static str {
        match self {
            PlayerId::First => "Player 1",
            PlayerId::Second => "Player 2",
        }
    }

    /// Single-character token used by the text board
    pub fn symbol(self) -> char {
        match self {
            PlayerId::First => 'X',
            PlayerId::Second => 'O',
        }
    }
}

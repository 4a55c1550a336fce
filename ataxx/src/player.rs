use serde::{Deserialize, Serialize};

/// One of the two sides of a game.
///
/// Player one always moves first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Player {
    One,
    Two,
}

impl Player {
    pub fn opponent(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// `0` for player one, `1` for player two.
    pub(crate) fn index(self) -> usize {
        self as usize
    }

    /// The digit used for this player in the text form of a board.
    pub fn symbol(self) -> char {
        match self {
            Player::One => '1',
            Player::Two => '2',
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.symbol())
    }
}

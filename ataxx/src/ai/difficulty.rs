use serde::{Deserialize, Serialize};

/// The AI's skill level, from 1 (easiest) to 10 (hardest).
///
/// | Level | Random move chance | Strategy |
/// |-------|--------------------|----------|
/// | 1     | 60%                | greedy   |
/// | 2     | 30%                | greedy   |
/// | 3-6   | 0%                 | greedy   |
/// | 7-10  | 0%                 | minimax  |
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "u8", into = "u8")]
pub struct Difficulty(u8);

/// How the AI compares moves when it does not play randomly.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Strategy {
    /// Best piece margin right after the move.
    Greedy,
    /// Best piece margin after the opponent's best reply.
    Minimax,
}

impl Difficulty {
    pub const EASIEST: Difficulty = Difficulty(1);
    pub const HARDEST: Difficulty = Difficulty(10);

    /// Levels outside of `1..=10` are clamped.
    pub fn new(level: u8) -> Self {
        Self(level.clamp(Self::EASIEST.0, Self::HARDEST.0))
    }

    /// The chance of playing a uniformly random move instead of following the strategy.
    pub fn random_move_probability(self) -> f64 {
        ((3.0 - f64::from(self.0)) * 0.3).max(0.0)
    }

    pub fn strategy(self) -> Strategy {
        if self.0 <= 6 {
            Strategy::Greedy
        } else {
            Strategy::Minimax
        }
    }
}

impl Default for Difficulty {
    fn default() -> Self {
        Self(5)
    }
}

impl From<u8> for Difficulty {
    fn from(level: u8) -> Self {
        Self::new(level)
    }
}

impl From<Difficulty> for u8 {
    fn from(difficulty: Difficulty) -> Self {
        difficulty.0
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "level {}", self.0)
    }
}

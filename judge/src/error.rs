use ataxx::{IllegalMove, Move};

#[derive(Debug)]
/// Error type for one turn.
pub enum IllegalTurn {
    IllegalMove { mv: Move, err: IllegalMove },
    /// The bot passed although it had legal moves.
    UnjustifiedPass { num_legal_moves: usize },
}

impl std::error::Error for IllegalTurn {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            IllegalTurn::IllegalMove { err, .. } => Some(err),
            IllegalTurn::UnjustifiedPass { .. } => None,
        }
    }
}

impl std::fmt::Display for IllegalTurn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IllegalTurn::IllegalMove { mv, err: _ } => write!(f, "Tried to {}", mv),
            IllegalTurn::UnjustifiedPass { num_legal_moves } => write!(
                f,
                "Passed although there were {} legal moves",
                num_legal_moves
            ),
        }
    }
}

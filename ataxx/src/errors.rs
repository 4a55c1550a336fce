use crate::Position;

/// The error type for [`Board::calculate()`](crate::Board::calculate),
/// [`GameState::play()`](crate::GameState::play) and [`GameState::pass()`](crate::GameState::pass).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IllegalMove {
    NotOwnPiece { from: Position },
    DestinationNotEmpty { to: Position },
    GameAlreadyOver,
    /// Passing is only possible without legal moves.
    PassWithLegalMoves { num_legal_moves: usize },
}

impl std::error::Error for IllegalMove {}

impl std::fmt::Display for IllegalMove {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IllegalMove::NotOwnPiece { from } =>
                write!(f, "The move starts at {}, which does not hold a piece of the moving player", from),
            IllegalMove::DestinationNotEmpty { to } =>
                write!(f, "The move ends at {}, which is not empty", to),
            IllegalMove::GameAlreadyOver =>
                write!(f, "A move was made after the game had ended"),
            IllegalMove::PassWithLegalMoves { num_legal_moves } =>
                write!(f, "Cannot pass with {} legal moves available", num_legal_moves),
        }
    }
}

/// The error type for [`Move::new()`](crate::Move::new).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InvalidMoveDistance {
    pub from: Position,
    pub to: Position,
}

impl std::error::Error for InvalidMoveDistance {}

impl std::fmt::Display for InvalidMoveDistance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "A move from {} to {} covers a distance of {}, but only 1 or 2 is possible",
            self.from,
            self.to,
            self.from.distance(self.to)
        )
    }
}

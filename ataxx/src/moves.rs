use serde::{Deserialize, Serialize};

use crate::{Board, InvalidMoveDistance, Player, Position};

/// How a move treats the piece it starts from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoveKind {
    /// Distance 1: a new piece appears, the original stays.
    Clone,
    /// Distance 2: the piece leaves its original cell.
    Jump,
}

/// A move of a piece from one cell to another.
///
/// The [`MoveKind`] is not chosen but follows from the distance between the two cells,
/// so a `Move` can only exist for a distance of 1 or 2.
/// Serialized as `{"from": [row, col], "to": [row, col]}`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "MoveRepr", into = "MoveRepr")]
pub struct Move {
    from: Position,
    to: Position,
    kind: MoveKind,
}

#[derive(Serialize, Deserialize)]
struct MoveRepr {
    from: Position,
    to: Position,
}

impl Move {
    pub fn new(from: Position, to: Position) -> Result<Self, InvalidMoveDistance> {
        let kind = match from.distance(to) {
            1 => MoveKind::Clone,
            2 => MoveKind::Jump,
            _ => return Err(InvalidMoveDistance { from, to }),
        };
        Ok(Self { from, to, kind })
    }

    // Only for positions known to be one or two steps apart
    fn between(from: Position, to: Position) -> Self {
        let kind = if from.distance(to) == 1 {
            MoveKind::Clone
        } else {
            MoveKind::Jump
        };
        Self { from, to, kind }
    }

    pub fn from(self) -> Position {
        self.from
    }

    pub fn to(self) -> Position {
        self.to
    }

    pub fn kind(self) -> MoveKind {
        self.kind
    }
}

impl TryFrom<MoveRepr> for Move {
    type Error = InvalidMoveDistance;

    fn try_from(repr: MoveRepr) -> Result<Self, Self::Error> {
        Move::new(repr.from, repr.to)
    }
}

impl From<Move> for MoveRepr {
    fn from(mv: Move) -> Self {
        MoveRepr {
            from: mv.from,
            to: mv.to,
        }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let kind = match self.kind {
            MoveKind::Clone => "clone",
            MoveKind::Jump => "jump",
        };
        write!(f, "{} {} -> {}", kind, self.from, self.to)
    }
}

/// Every cell within two steps of `from`, excluding `from` itself.
///
/// Rows and columns are both scanned from -2 to +2, which fixes the order of the moves
/// generated for a single piece.
fn destinations(from: Position) -> impl Iterator<Item = Position> {
    (-2i8..=2)
        .flat_map(|d_row| (-2i8..=2).map(move |d_col| (d_row, d_col)))
        .filter(|&offset| offset != (0, 0))
        .filter_map(move |(d_row, d_col)| from.offset(d_row, d_col))
}

impl Board {
    /// All moves that `player` can make on this board.
    ///
    /// Pieces are visited in row-major order, and the destinations of each piece in
    /// row-major order relative to it. The list is empty if the player has to pass.
    pub fn legal_moves(&self, player: Player) -> Vec<Move> {
        let empty = self.empty_cells();
        let mut moves = Vec::new();
        for from in self.pieces(player) {
            moves.extend(
                destinations(from)
                    .filter(|&to| empty.contains(to))
                    .map(|to| Move::between(from, to)),
            );
        }
        moves
    }
}

mod bitboard;
mod error;
mod position;

use std::str::FromStr;

pub use bitboard::*;
pub use error::*;
pub use position::*;

use serde::{Deserialize, Serialize};

use crate::{IllegalMove, Move, MoveKind, Player};

/// The number of rows, and also the number of columns.
pub const BOARD_SIZE: u8 = 7;

/// The content of a single cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    /// Never empty, never flipped, never a destination.
    ///
    /// The standard setup has no walls.
    Wall,
    Occupied(Player),
}

impl Cell {
    /// The character used for this cell in the text form of a board.
    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Wall => '#',
            Cell::Occupied(player) => player.symbol(),
        }
    }
}

/// The playing field.
///
/// This is a small [`Copy`] value. Making a move produces a new board and
/// leaves the old one untouched, so snapshots can be kept and shared freely.
///
/// Serialized as a list of seven strings, one per row, see the [`FromStr`] instance.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct Board {
    /// The pieces of player one and player two.
    ///
    /// These and `walls` never overlap.
    pieces: [BitBoard; 2],
    walls: BitBoard,
}

struct Diff {
    player: Player,
    mv: Move,
    flipped: BitBoard,
}

/// The planned effects of a move, see [`Board::calculate()`].
pub struct MoveCalculation<'a> {
    /// This struct ties together the board and its diff, to prevent any possible mixups
    board: &'a Board,
    diff: Diff,
    /// The opponent's pieces that will change sides.
    pub flipped: BitBoard,
}

impl Board {
    /// A board without any pieces or walls.
    pub fn empty() -> Self {
        Self {
            pieces: [BitBoard::empty(); 2],
            walls: BitBoard::empty(),
        }
    }

    /// The starting position: player one in the top left and bottom right corners,
    /// player two in the other two.
    pub fn initial() -> Self {
        let last = BOARD_SIZE - 1;
        let corner = |row: u8, col: u8| Position::from_index(row * BOARD_SIZE + col);
        Self::empty()
            .with_cell(corner(0, 0), Cell::Occupied(Player::One))
            .with_cell(corner(last, last), Cell::Occupied(Player::One))
            .with_cell(corner(0, last), Cell::Occupied(Player::Two))
            .with_cell(corner(last, 0), Cell::Occupied(Player::Two))
    }

    pub fn get(&self, pos: Position) -> Cell {
        if self.pieces[0].contains(pos) {
            Cell::Occupied(Player::One)
        } else if self.pieces[1].contains(pos) {
            Cell::Occupied(Player::Two)
        } else if self.walls.contains(pos) {
            Cell::Wall
        } else {
            Cell::Empty
        }
    }

    /// A copy of this board with a single cell replaced.
    #[must_use]
    pub fn with_cell(&self, pos: Position, cell: Cell) -> Self {
        let mut board = Self {
            pieces: [self.pieces[0].remove(pos), self.pieces[1].remove(pos)],
            walls: self.walls.remove(pos),
        };
        match cell {
            Cell::Empty => {}
            Cell::Wall => board.walls = board.walls.insert(pos),
            Cell::Occupied(player) => {
                board.pieces[player.index()] = board.pieces[player.index()].insert(pos)
            }
        }
        board
    }

    pub fn pieces(&self, player: Player) -> BitBoard {
        self.pieces[player.index()]
    }

    pub fn walls(&self) -> BitBoard {
        self.walls
    }

    pub fn empty_cells(&self) -> BitBoard {
        !(self.pieces[0] | self.pieces[1] | self.walls)
    }

    /// Check a move and return the effects that it would have.
    ///
    /// The move must start at a piece of `player` and end on an empty cell. Any
    /// move returned by [`Self::legal_moves()`] for the same player passes these checks.
    ///
    /// The returned struct has a method to actually apply these changes to the board, and
    /// get a new board.
    pub fn calculate(
        &self,
        mv: Move,
        player: Player,
    ) -> Result<MoveCalculation<'_>, IllegalMove> {
        if self.get(mv.from()) != Cell::Occupied(player) {
            return Err(IllegalMove::NotOwnPiece { from: mv.from() });
        }
        if self.get(mv.to()) != Cell::Empty {
            return Err(IllegalMove::DestinationNotEmpty { to: mv.to() });
        }
        Ok(self.plan(mv, player))
    }

    /// Make a move without checking it, and return the resulting board.
    ///
    /// The move is expected to come from [`Self::legal_moves()`] for this board and
    /// player. Other moves still produce a consistent board: the destination is
    /// taken over whatever was there, a jump always empties its origin.
    pub fn apply(&self, mv: Move, player: Player) -> Board {
        self.plan(mv, player).execute()
    }

    /// One string per row, as accepted by the [`FromStr`] instance.
    pub fn rows(&self) -> Vec<String> {
        (0..BOARD_SIZE)
            .map(|row| {
                (0..BOARD_SIZE)
                    .map(|col| self.get(Position::from_index(row * BOARD_SIZE + col)).symbol())
                    .collect()
            })
            .collect()
    }

    fn plan(&self, mv: Move, player: Player) -> MoveCalculation<'_> {
        let flipped = BitBoard::neighbors(mv.to()) & self.pieces(player.opponent());
        MoveCalculation {
            board: self,
            diff: Diff {
                player,
                mv,
                flipped,
            },
            flipped,
        }
    }
}

impl<'a> MoveCalculation<'a> {
    /// Apply the computed changes from making the move.
    pub fn execute(self) -> Board {
        self.diff.apply(self.board)
    }
}

impl Diff {
    fn apply(self, board: &Board) -> Board {
        let own = self.player.index();
        let opponent = self.player.opponent().index();
        let mut result = *board;

        if self.mv.kind() == MoveKind::Jump {
            result = result.with_cell(self.mv.from(), Cell::Empty);
        }

        // The origin of a jump is never adjacent to its destination, so it is not in here
        let changed = self.flipped.insert(self.mv.to());
        result.pieces[own] |= changed;
        result.pieces[opponent] &= !changed;
        result.walls &= !changed;
        result
    }
}

impl FromStr for Board {
    type Err = BoardFromStrErr;

    /// Parses seven rows of seven cells, each one of `.` (empty), `#` (wall),
    /// `1` or `2`.
    ///
    /// Rows are separated by line breaks. Whitespace around rows and blank lines are ignored,
    /// so boards can be written as indented multi-line literals.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<&str> = s
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        if rows.len() != usize::from(BOARD_SIZE) {
            return Err(BoardFromStrErr::WrongNumberOfRows { found: rows.len() });
        }

        let mut board = Board::empty();
        for (row_idx, row) in rows.into_iter().enumerate() {
            let num_cells = row.chars().count();
            if num_cells != usize::from(BOARD_SIZE) {
                return Err(BoardFromStrErr::WrongRowLength {
                    row: row_idx,
                    found: num_cells,
                });
            }
            for (col_idx, c) in row.chars().enumerate() {
                let cell = match c {
                    '.' => Cell::Empty,
                    '#' => Cell::Wall,
                    '1' => Cell::Occupied(Player::One),
                    '2' => Cell::Occupied(Player::Two),
                    _ => {
                        return Err(BoardFromStrErr::InvalidCell {
                            row: row_idx,
                            col: col_idx,
                            found: c,
                        })
                    }
                };
                // Both indices are below BOARD_SIZE at this point
                let pos = Position::from_index(row_idx as u8 * BOARD_SIZE + col_idx as u8);
                board = board.with_cell(pos, cell);
            }
        }
        Ok(board)
    }
}

impl TryFrom<Vec<String>> for Board {
    type Error = BoardFromStrErr;

    fn try_from(rows: Vec<String>) -> Result<Self, Self::Error> {
        rows.join("\n").parse()
    }
}

impl From<Board> for Vec<String> {
    fn from(board: Board) -> Self {
        board.rows()
    }
}

impl std::fmt::Debug for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.rows()).finish()
    }
}

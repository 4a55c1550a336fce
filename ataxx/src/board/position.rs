use serde::{Deserialize, Serialize};

use crate::{OutOfBounds, BOARD_SIZE};

/// A coordinate pair on the board.
///
/// Both components always lie in `0..BOARD_SIZE`, every constructor checks this.
/// Serialized as a `[row, col]` pair.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "(u8, u8)", into = "(u8, u8)")]
pub struct Position {
    row: u8,
    col: u8,
}

impl Position {
    pub fn new(row: u8, col: u8) -> Result<Self, OutOfBounds> {
        if row < BOARD_SIZE && col < BOARD_SIZE {
            Ok(Self { row, col })
        } else {
            Err(OutOfBounds {
                row: i16::from(row),
                col: i16::from(col),
            })
        }
    }

    /// The position shifted by the given amount, if that is still on the board.
    pub fn offset(self, d_row: i8, d_col: i8) -> Option<Self> {
        let row = i16::from(self.row) + i16::from(d_row);
        let col = i16::from(self.col) + i16::from(d_col);
        let size = i16::from(BOARD_SIZE);
        if (0..size).contains(&row) && (0..size).contains(&col) {
            Some(Self {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    /// Chebyshev distance, i.e. the number of king steps between the two positions.
    pub fn distance(self, other: Position) -> u8 {
        self.row.abs_diff(other.row).max(self.col.abs_diff(other.col))
    }

    /// Row-major index in `0..BOARD_SIZE * BOARD_SIZE`.
    pub(crate) fn index(self) -> u8 {
        self.row * BOARD_SIZE + self.col
    }

    pub(crate) fn from_index(idx: u8) -> Self {
        debug_assert!(idx < BOARD_SIZE * BOARD_SIZE);
        Self {
            row: idx / BOARD_SIZE,
            col: idx % BOARD_SIZE,
        }
    }
}

impl TryFrom<(u8, u8)> for Position {
    type Error = OutOfBounds;

    fn try_from((row, col): (u8, u8)) -> Result<Self, Self::Error> {
        Self::new(row, col)
    }
}

impl From<Position> for (u8, u8) {
    fn from(pos: Position) -> Self {
        (pos.row, pos.col)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Shorthand for creating a [`Position`] from two literals.
///
/// Panics if the coordinates are off the board.
/// ```
/// # use ataxx::{pos, Position};
/// assert_eq!(pos!(2, 3), Position::new(2, 3).unwrap());
/// ```
#[macro_export]
macro_rules! pos {
    ($row:expr, $col:expr) => {
        $crate::Position::new($row, $col).expect("Invalid coordinates given to pos! macro")
    };
}
// The import is for using the macro in other modules, see https://stackoverflow.com/a/31749071/1726797
#[allow(unused_imports)]
pub(crate) use pos;

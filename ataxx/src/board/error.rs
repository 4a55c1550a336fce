/// Coordinates that do not lie on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OutOfBounds {
    pub row: i16,
    pub col: i16,
}

impl std::error::Error for OutOfBounds {}

impl std::fmt::Display for OutOfBounds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Position ({}, {}) is outside of the {}x{} board",
            self.row,
            self.col,
            crate::BOARD_SIZE,
            crate::BOARD_SIZE
        )
    }
}

/// The error type for the [`FromStr`](std::str::FromStr) instance of [`Board`](crate::Board).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BoardFromStrErr {
    WrongNumberOfRows { found: usize },
    WrongRowLength { row: usize, found: usize },
    InvalidCell { row: usize, col: usize, found: char },
}

impl std::error::Error for BoardFromStrErr {}

impl std::fmt::Display for BoardFromStrErr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BoardFromStrErr::WrongNumberOfRows { found } =>
                write!(f, "Expected {} rows, found {}", crate::BOARD_SIZE, found),
            BoardFromStrErr::WrongRowLength { row, found } =>
                write!(f, "Expected {} cells in row {}, found {}", crate::BOARD_SIZE, row, found),
            BoardFromStrErr::InvalidCell { row, col, found } =>
                write!(f, "Invalid cell '{}' at ({}, {}), expected one of '.', '#', '1', '2'", found, row, col),
        }
    }
}

use crate::{Board, Position, BOARD_SIZE};

/// Draws the board in a box, with row and column numbers.
///
/// ```text
///     0 1 2 3 4 5 6
///   ╭───────────────╮
/// 0 │ 1 . . . . . 2 │
/// ...
/// ```
pub fn visualize_board(board: &Board) -> String {
    let mut result = String::from("   ");
    for col in 0..BOARD_SIZE {
        result += &format!(" {}", col);
    }
    result += "\n  ╭";
    for _ in 0..BOARD_SIZE {
        result += "──";
    }
    result += "─╮\n";
    for row in 0..BOARD_SIZE {
        result += &format!("{} │", row);
        for col in 0..BOARD_SIZE {
            let cell = board.get(Position::from_index(row * BOARD_SIZE + col));
            result += &format!(" {}", cell.symbol());
        }
        result += " │\n";
    }
    result += "  ╰";
    for _ in 0..BOARD_SIZE {
        result += "──";
    }
    result += "─╯";
    result
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&visualize_board(self))
    }
}

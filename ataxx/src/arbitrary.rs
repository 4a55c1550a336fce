use crate::{BitBoard, Board, Cell, Player};

impl quickcheck::Arbitrary for Player {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        *g.choose(&[Player::One, Player::Two]).unwrap()
    }
}

impl quickcheck::Arbitrary for Board {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        // Walls are rare, so that most boards have plenty of moves
        let cells = [
            Cell::Empty,
            Cell::Empty,
            Cell::Empty,
            Cell::Occupied(Player::One),
            Cell::Occupied(Player::One),
            Cell::Occupied(Player::Two),
            Cell::Occupied(Player::Two),
            Cell::Wall,
        ];
        let mut board = Board::empty();
        for pos in BitBoard::full() {
            board = board.with_cell(pos, *g.choose(&cells).unwrap());
        }
        board
    }
}

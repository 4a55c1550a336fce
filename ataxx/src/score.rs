use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::{Board, Player};

/// Piece counts of a board.
///
/// `p1 + p2 + empty + walls` is always the number of cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub p1: u8,
    pub p2: u8,
    pub empty: u8,
    pub walls: u8,
}

/// The result of a finished game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Winner {
    Player(Player),
    Draw,
}

/// Why a game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameEndReason {
    /// One side has no pieces left.
    Elimination,
    BoardFull,
    /// Neither side can move although there are empty cells.
    NoMovesLeft,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameOver {
    pub winner: Winner,
    pub reason: GameEndReason,
}

impl Score {
    pub fn count(self, player: Player) -> u8 {
        match player {
            Player::One => self.p1,
            Player::Two => self.p2,
        }
    }

    /// The player's pieces minus the opponent's pieces.
    pub fn margin(self, player: Player) -> i32 {
        i32::from(self.count(player)) - i32::from(self.count(player.opponent()))
    }

    /// Whoever has strictly more pieces, or a draw.
    pub fn leader(self) -> Winner {
        match self.p1.cmp(&self.p2) {
            Ordering::Greater => Winner::Player(Player::One),
            Ordering::Less => Winner::Player(Player::Two),
            Ordering::Equal => Winner::Draw,
        }
    }
}

impl Board {
    pub fn score(&self) -> Score {
        let p1 = self.pieces(Player::One).num_entries();
        let p2 = self.pieces(Player::Two).num_entries();
        let walls = self.walls().num_entries();
        let empty = self.empty_cells().num_entries();
        // These casts are safe, as there are only 49 cells
        Score {
            p1: p1 as u8,
            p2: p2 as u8,
            empty: empty as u8,
            walls: walls as u8,
        }
    }

    /// Checks whether the game is over by elimination or because the board is full.
    ///
    /// This does not look at legal moves. A position where neither side can move
    /// but some cells are still empty is reported as ongoing here, see
    /// [`advance_turn()`](crate::advance_turn) for that case.
    pub fn check_game_over(&self) -> Option<GameOver> {
        let score = self.score();
        if score.p1 == 0 {
            Some(GameOver {
                winner: Winner::Player(Player::Two),
                reason: GameEndReason::Elimination,
            })
        } else if score.p2 == 0 {
            Some(GameOver {
                winner: Winner::Player(Player::One),
                reason: GameEndReason::Elimination,
            })
        } else if score.empty == 0 {
            Some(GameOver {
                winner: score.leader(),
                reason: GameEndReason::BoardFull,
            })
        } else {
            None
        }
    }
}

impl std::fmt::Display for Winner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Winner::Player(player) => write!(f, "{} wins", player),
            Winner::Draw => write!(f, "Draw"),
        }
    }
}

#[cfg(test)]
mod tests {
    use quickcheck::quickcheck;

    use super::*;
    use crate::{pos, Cell};

    quickcheck! {
        fn counts_add_up(board: Board) -> bool {
            let score = board.score();
            u32::from(score.p1) + u32::from(score.p2) + u32::from(score.empty) + u32::from(score.walls) == 49
                && board.score() == score
        }
    }

    #[test]
    fn initial_score() {
        let score = Board::initial().score();
        assert_eq!(
            score,
            Score {
                p1: 2,
                p2: 2,
                empty: 45,
                walls: 0
            }
        );
        assert_eq!(score.margin(Player::Two), 0);
        assert_eq!(Board::initial().check_game_over(), None);
    }

    #[test]
    fn elimination() {
        let board = Board::initial()
            .with_cell(pos!(0, 0), Cell::Empty)
            .with_cell(pos!(6, 6), Cell::Empty);
        assert_eq!(
            board.check_game_over(),
            Some(GameOver {
                winner: Winner::Player(Player::Two),
                reason: GameEndReason::Elimination
            })
        );
        let board = Board::initial()
            .with_cell(pos!(0, 6), Cell::Occupied(Player::One))
            .with_cell(pos!(6, 0), Cell::Wall);
        assert_eq!(
            board.check_game_over().map(|over| over.winner),
            Some(Winner::Player(Player::One))
        );
    }

    #[test]
    fn full_board() {
        let board: Board = "
            1111111
            1111111
            1111111
            111#222
            2222222
            2222222
            2222222
        "
        .parse()
        .unwrap();
        let score = board.score();
        assert_eq!((score.p1, score.p2, score.empty, score.walls), (24, 24, 0, 1));
        assert_eq!(
            board.check_game_over(),
            Some(GameOver {
                winner: Winner::Draw,
                reason: GameEndReason::BoardFull
            })
        );
        let board = board.with_cell(pos!(3, 3), Cell::Occupied(Player::Two));
        assert_eq!(
            board.check_game_over().map(|over| over.winner),
            Some(Winner::Player(Player::Two))
        );
    }

    #[test]
    fn stuck_but_not_full_is_not_over_here() {
        let board: Board = "
            1##....
            ###....
            ###....
            .......
            ....###
            ....###
            ....##2
        "
        .parse()
        .unwrap();
        assert!(board.legal_moves(Player::One).is_empty());
        assert!(board.legal_moves(Player::Two).is_empty());
        assert_eq!(board.check_game_over(), None);
    }
}

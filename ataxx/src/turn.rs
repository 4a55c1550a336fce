use crate::{Board, GameEndReason, GameOver, Move, Player};

/// Who moves after a move has been made.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TurnOutcome {
    /// The opponent of the player who just moved is next.
    Normal { next: Player, legal_moves: Vec<Move> },
    /// The opponent cannot move, so the player who just moved goes again.
    Skipped {
        skipped: Player,
        next: Player,
        legal_moves: Vec<Move>,
    },
    GameEnded(GameOver),
}

/// Decide how the game continues on `board`, right after `just_moved` made a move.
///
/// If the opponent has no legal move, the game is either over (see
/// [`Board::check_game_over()`]) or the turn goes back to `just_moved`. If that player
/// cannot move either, the game ends and the piece counts decide.
pub fn advance_turn(board: &Board, just_moved: Player) -> TurnOutcome {
    let next = just_moved.opponent();
    let legal_moves = board.legal_moves(next);
    if !legal_moves.is_empty() {
        return TurnOutcome::Normal { next, legal_moves };
    }

    if let Some(game_over) = board.check_game_over() {
        return TurnOutcome::GameEnded(game_over);
    }

    let legal_moves = board.legal_moves(just_moved);
    if legal_moves.is_empty() {
        // Neither side can move, but the board is not full
        TurnOutcome::GameEnded(GameOver {
            winner: board.score().leader(),
            reason: GameEndReason::NoMovesLeft,
        })
    } else {
        TurnOutcome::Skipped {
            skipped: next,
            next: just_moved,
            legal_moves,
        }
    }
}

#[cfg(test)]
mod tests {
    use quickcheck::quickcheck;

    use super::*;
    use crate::{pos, Winner};

    quickcheck! {
        fn next_player_can_always_move(board: Board, just_moved: Player) -> bool {
            match advance_turn(&board, just_moved) {
                TurnOutcome::Normal { next, legal_moves } => {
                    next == just_moved.opponent() && legal_moves == board.legal_moves(next)
                }
                TurnOutcome::Skipped { skipped, next, legal_moves } => {
                    skipped == just_moved.opponent()
                        && next == just_moved
                        && !legal_moves.is_empty()
                        && board.legal_moves(skipped).is_empty()
                }
                TurnOutcome::GameEnded(_) => {
                    board.legal_moves(just_moved.opponent()).is_empty()
                }
            }
        }
    }

    #[test]
    fn normal_alternation() {
        let board = Board::initial().apply(Move::new(pos!(0, 0), pos!(1, 1)).unwrap(), Player::One);
        match advance_turn(&board, Player::One) {
            TurnOutcome::Normal { next, legal_moves } => {
                assert_eq!(next, Player::Two);
                assert_eq!(legal_moves.len(), 16);
            }
            other => panic!("Unexpected outcome {:?}", other),
        }
    }

    #[test]
    fn opponent_without_moves_is_skipped() {
        // Player two's only piece is walled in
        let board: Board = "
            2##....
            ###....
            ###....
            ...1...
            .......
            .......
            .......
        "
        .parse()
        .unwrap();
        match advance_turn(&board, Player::One) {
            TurnOutcome::Skipped {
                skipped,
                next,
                legal_moves,
            } => {
                assert_eq!(skipped, Player::Two);
                assert_eq!(next, Player::One);
                assert_eq!(legal_moves, board.legal_moves(Player::One));
            }
            other => panic!("Unexpected outcome {:?}", other),
        }
    }

    #[test]
    fn elimination_ends_the_game() {
        let board: Board = "
            11.....
            .......
            .......
            .......
            .......
            .......
            .......
        "
        .parse()
        .unwrap();
        assert_eq!(
            advance_turn(&board, Player::One),
            TurnOutcome::GameEnded(GameOver {
                winner: Winner::Player(Player::One),
                reason: GameEndReason::Elimination,
            })
        );
    }

    #[test]
    fn full_board_ends_the_game() {
        let board: Board = "
            1111111
            1111111
            1111111
            1111222
            2222222
            2222222
            2222222
        "
        .parse()
        .unwrap();
        assert_eq!(
            advance_turn(&board, Player::Two),
            TurnOutcome::GameEnded(GameOver {
                winner: Winner::Player(Player::One),
                reason: GameEndReason::BoardFull,
            })
        );
    }

    #[test]
    fn both_stuck_ends_the_game() {
        let board: Board = "
            11##...
            ####...
            ####...
            .......
            ....###
            ....###
            ....##2
        "
        .parse()
        .unwrap();
        for just_moved in [Player::One, Player::Two] {
            assert_eq!(
                advance_turn(&board, just_moved),
                TurnOutcome::GameEnded(GameOver {
                    winner: Winner::Player(Player::One),
                    reason: GameEndReason::NoMovesLeft,
                })
            );
        }

        let board = board.with_cell(pos!(0, 1), crate::Cell::Wall);
        assert_eq!(
            advance_turn(&board, Player::Two),
            TurnOutcome::GameEnded(GameOver {
                winner: Winner::Draw,
                reason: GameEndReason::NoMovesLeft,
            })
        );
    }
}

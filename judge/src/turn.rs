use ataxx::{Board, Move, Player};

use crate::error::IllegalTurn;

/// Checks a bot's answer to a `PlayTurn` request and makes the move.
///
/// `None` is a pass, which is only allowed without legal moves.
pub fn execute_turn(
    board: &Board,
    player: Player,
    legal_moves: &[Move],
    response: Option<Move>,
) -> Result<Board, IllegalTurn> {
    match response {
        Some(mv) => board
            .calculate(mv, player)
            .map(|calculation| calculation.execute())
            .map_err(|err| IllegalTurn::IllegalMove { mv, err }),
        None if legal_moves.is_empty() => Ok(*board),
        None => Err(IllegalTurn::UnjustifiedPass {
            num_legal_moves: legal_moves.len(),
        }),
    }
}

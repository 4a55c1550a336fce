use tracing::trace;

use crate::{Board, Move, Player};

/// Picks the move that leaves `player` with the largest piece margin right after it.
///
/// On a tie the move that comes first in `moves` wins.
pub fn greedy_move(board: &Board, player: Player, moves: &[Move]) -> Option<Move> {
    let mut best: Option<(Move, i32)> = None;
    for &mv in moves {
        let margin = board.apply(mv, player).score().margin(player);
        trace!(%mv, margin, "Greedy candidate");
        if best.map_or(true, |(_, best_margin)| margin > best_margin) {
            best = Some((mv, margin));
        }
    }
    best.map(|(mv, _)| mv)
}

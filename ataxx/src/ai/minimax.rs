use tracing::trace;

use crate::{Board, Move, Player};

/// How many plies the minimax strategy looks ahead, counting its own move.
pub const SEARCH_DEPTH: u8 = 2;

/// Evaluation of a position where the opponent has no pieces left.
pub const WIN_SCORE: i32 = 10_000;

/// Static evaluation of `board` from the point of view of `player`.
///
/// Positive values are good for `player`.
pub fn evaluate(board: &Board, player: Player) -> i32 {
    let score = board.score();
    if score.count(player.opponent()) == 0 {
        WIN_SCORE
    } else if score.count(player) == 0 {
        -WIN_SCORE
    } else {
        score.margin(player)
    }
}

/// Alpha-beta search, returning the evaluation for `player`.
///
/// When `maximizing` is set, `player` is to move on `board`, otherwise the opponent is.
/// A side without legal moves is evaluated right away instead of passing.
pub fn minimax(
    board: &Board,
    depth: u8,
    mut alpha: i32,
    mut beta: i32,
    maximizing: bool,
    player: Player,
) -> i32 {
    if depth == 0 {
        return evaluate(board, player);
    }

    let to_move = if maximizing {
        player
    } else {
        player.opponent()
    };
    let moves = board.legal_moves(to_move);
    if moves.is_empty() {
        return evaluate(board, player);
    }

    if maximizing {
        let mut best = i32::MIN;
        for mv in moves {
            let value = minimax(&board.apply(mv, to_move), depth - 1, alpha, beta, false, player);
            best = best.max(value);
            alpha = alpha.max(value);
            if beta <= alpha {
                break;
            }
        }
        best
    } else {
        let mut best = i32::MAX;
        for mv in moves {
            let value = minimax(&board.apply(mv, to_move), depth - 1, alpha, beta, true, player);
            best = best.min(value);
            beta = beta.min(value);
            if beta <= alpha {
                break;
            }
        }
        best
    }
}

/// Picks the move with the best minimax evaluation for `player`, searching `depth` plies
/// including the move itself.
///
/// Each candidate is searched with a full window. On a tie the move that comes first in
/// `moves` wins.
pub fn minimax_move(board: &Board, player: Player, moves: &[Move], depth: u8) -> Option<Move> {
    let mut best: Option<(Move, i32)> = None;
    for &mv in moves {
        let value = minimax(
            &board.apply(mv, player),
            depth.saturating_sub(1),
            i32::MIN,
            i32::MAX,
            false,
            player,
        );
        trace!(%mv, value, "Minimax candidate");
        if best.map_or(true, |(_, best_value)| value > best_value) {
            best = Some((mv, value));
        }
    }
    best.map(|(mv, _)| mv)
}

#[cfg(test)]
mod tests {
    use quickcheck::{QuickCheck, TestResult};

    use super::*;
    use crate::pos;

    /// Two-ply search without pruning.
    fn reply_value(board: &Board, player: Player, mv: Move) -> i32 {
        let after = board.apply(mv, player);
        let replies = after.legal_moves(player.opponent());
        if replies.is_empty() {
            return evaluate(&after, player);
        }
        replies
            .into_iter()
            .map(|reply| evaluate(&after.apply(reply, player.opponent()), player))
            .min()
            .unwrap()
    }

    fn pruning_changes_nothing(board: Board, player: Player) -> TestResult {
        let moves = board.legal_moves(player);
        if moves.is_empty() {
            return TestResult::discard();
        }
        let chosen = minimax_move(&board, player, &moves, SEARCH_DEPTH).unwrap();
        let best = moves
            .iter()
            .map(|&mv| reply_value(&board, player, mv))
            .max()
            .unwrap();
        let first_best = moves
            .iter()
            .copied()
            .find(|&mv| reply_value(&board, player, mv) == best);
        TestResult::from_bool(first_best == Some(chosen))
    }

    #[test]
    fn matches_exhaustive_search() {
        QuickCheck::new()
            .tests(30)
            .quickcheck(pruning_changes_nothing as fn(Board, Player) -> TestResult);
    }

    #[test]
    fn evaluation() {
        let board = Board::initial();
        assert_eq!(evaluate(&board, Player::One), 0);
        let board: Board = "
            11.....
            .......
            .......
            .......
            .......
            .......
            ......2
        "
        .parse()
        .unwrap();
        assert_eq!(evaluate(&board, Player::One), 1);
        assert_eq!(evaluate(&board, Player::Two), -1);
        let board = board.with_cell(pos!(6, 6), crate::Cell::Empty);
        assert_eq!(evaluate(&board, Player::One), WIN_SCORE);
        assert_eq!(evaluate(&board, Player::Two), -WIN_SCORE);
    }

    #[test]
    fn finds_the_elimination() {
        let board: Board = "
            1......
            ..2....
            .......
            .......
            .......
            .......
            .......
        "
        .parse()
        .unwrap();
        let moves = board.legal_moves(Player::One);
        let chosen = minimax_move(&board, Player::One, &moves, SEARCH_DEPTH).unwrap();
        assert_eq!(chosen.to().distance(pos!(1, 2)), 1);
        assert_eq!(
            minimax(&board.apply(chosen, Player::One), 1, i32::MIN, i32::MAX, false, Player::One),
            WIN_SCORE
        );
    }

    #[test]
    fn rates_moves_by_the_best_reply() {
        let board: Board = "
            .......
            .......
            ..1....
            ...2...
            .......
            ...2...
            .......
        "
        .parse()
        .unwrap();
        let moves = board.legal_moves(Player::One);
        let chosen = minimax_move(&board, Player::One, &moves, SEARCH_DEPTH).unwrap();
        let chosen_value = reply_value(&board, Player::One, chosen);
        for mv in moves {
            assert!(reply_value(&board, Player::One, mv) <= chosen_value);
        }
    }
}

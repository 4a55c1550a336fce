//! The computer opponent.
//!
//! [`choose_move()`] is the entry point. Depending on the [`Difficulty`], it sometimes
//! plays a random move on purpose, and otherwise either looks one ply ahead
//! ([`greedy_move()`]) or two plies ([`minimax_move()`]).
mod difficulty;
mod greedy;
mod minimax;

pub use difficulty::*;
pub use greedy::*;
pub use minimax::*;

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

use crate::{Board, Move, Player};

/// Selects a move for `player`, or `None` if the player has to pass.
///
/// The candidate moves are shuffled before they are compared, so that equally good
/// moves are picked at random. Pass a seeded RNG for reproducible choices.
pub fn choose_move<R: Rng>(
    board: &Board,
    player: Player,
    difficulty: Difficulty,
    rng: &mut R,
) -> Option<Move> {
    let mut moves = board.legal_moves(player);
    if moves.is_empty() {
        debug!(%player, "No legal moves, passing");
        return None;
    }

    if rng.gen_bool(difficulty.random_move_probability()) {
        let mv = random_move(&moves, rng);
        debug!(%player, %difficulty, "Playing a random move");
        return mv;
    }

    moves.shuffle(rng);
    let strategy = difficulty.strategy();
    let mv = match strategy {
        Strategy::Greedy => greedy_move(board, player, &moves),
        Strategy::Minimax => minimax_move(board, player, &moves, SEARCH_DEPTH),
    };
    debug!(%player, %difficulty, ?strategy, num_moves = moves.len(), "Chose move");
    mv
}

/// A uniformly random move from the list.
pub fn random_move<R: Rng>(moves: &[Move], rng: &mut R) -> Option<Move> {
    moves.choose(rng).copied()
}

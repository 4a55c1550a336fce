use ataxx::{choose_move, Board, Difficulty, Move, Player};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::debug;

use crate::Bot;

/// A bot that plays with [`choose_move()`] at a fixed difficulty.
pub struct AiBot {
    difficulty: Difficulty,
    rng: StdRng,
}

impl AiBot {
    pub fn new(difficulty: Difficulty, seed: u64) -> Self {
        Self {
            difficulty,
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Bot for AiBot {
    fn new_game(&mut self, player: Player) {
        debug!(%player, difficulty = %self.difficulty, "New game");
    }

    fn play_turn(&mut self, board: Board, player: Player, legal_moves: Vec<Move>) -> Option<Move> {
        let mv = choose_move(&board, player, self.difficulty, &mut self.rng);
        // Only answer with moves from the given list
        mv.filter(|mv| legal_moves.contains(mv))
            .or_else(|| legal_moves.first().copied())
    }
}

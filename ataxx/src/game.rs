use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    advance_turn, choose_move, Board, Difficulty, GameOver, IllegalMove, Move, Player, Score,
    TurnOutcome,
};

/// Who controls player two.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameMode {
    /// Player two is the computer.
    #[default]
    Ai,
    /// Two humans take turns.
    Pvp,
}

/// Settings for one game session.
///
/// To change them, start a new session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub mode: GameMode,
    /// Only used in [`GameMode::Ai`].
    #[serde(default)]
    pub difficulty: Difficulty,
}

impl GameConfig {
    /// The side played by the computer, if any.
    pub fn ai_player(&self) -> Option<Player> {
        match self.mode {
            GameMode::Ai => Some(Player::Two),
            GameMode::Pvp => None,
        }
    }
}

/// Everything a front end needs to show and continue a game.
///
/// Like the [`Board`], this is a value: making a move returns the next state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameState {
    pub board: Board,
    /// The player to move, or the last player who moved if the game is over.
    pub current_player: Player,
    pub outcome: Option<GameOver>,
    pub score: Score,
    /// The moves available to `current_player`. Empty once the game is over.
    pub legal_moves: Vec<Move>,
    /// Set when the last turn ended with this player having to pass.
    pub skipped: Option<Player>,
}

impl GameState {
    /// A new game on the initial board. Player one begins.
    pub fn new() -> Self {
        let board = Board::initial();
        Self {
            board,
            current_player: Player::One,
            outcome: None,
            score: board.score(),
            legal_moves: board.legal_moves(Player::One),
            skipped: None,
        }
    }

    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    /// Make a move for the current player.
    ///
    /// The move must be one of [`Self::legal_moves`].
    pub fn play(&self, mv: Move) -> Result<GameState, IllegalMove> {
        if self.is_over() {
            return Err(IllegalMove::GameAlreadyOver);
        }
        let board = self.board.calculate(mv, self.current_player)?.execute();
        Ok(Self::resolve(board, self.current_player))
    }

    /// Hand the turn on without moving. Only allowed if the current player has no
    /// legal moves.
    ///
    /// The turn is resolved as if the current player had just moved, and the passing
    /// player is reported in [`Self::skipped`].
    pub fn pass(&self) -> Result<GameState, IllegalMove> {
        if self.is_over() {
            return Err(IllegalMove::GameAlreadyOver);
        }
        if !self.legal_moves.is_empty() {
            return Err(IllegalMove::PassWithLegalMoves {
                num_legal_moves: self.legal_moves.len(),
            });
        }
        let mut next = Self::resolve(self.board, self.current_player);
        if !next.is_over() && next.skipped.is_none() {
            next.skipped = Some(self.current_player);
        }
        Ok(next)
    }

    /// Let the computer take its turn, if it is its turn.
    ///
    /// Returns `Ok(None)` in player-versus-player mode, on a human's turn, or after the
    /// game has ended. An error means that the public fields of `self` do not belong
    /// together, e.g. `legal_moves` was not computed from `board`.
    pub fn ai_turn<R: Rng>(
        &self,
        config: &GameConfig,
        rng: &mut R,
    ) -> Result<Option<GameState>, IllegalMove> {
        let Some(ai_player) = config.ai_player() else {
            return Ok(None);
        };
        if self.is_over() || self.current_player != ai_player {
            return Ok(None);
        }
        let next = match choose_move(&self.board, ai_player, config.difficulty, rng) {
            Some(mv) => self.play(mv)?,
            None => self.pass()?,
        };
        Ok(Some(next))
    }

    fn resolve(board: Board, just_moved: Player) -> GameState {
        let score = board.score();
        match advance_turn(&board, just_moved) {
            TurnOutcome::Normal { next, legal_moves } => GameState {
                board,
                current_player: next,
                outcome: None,
                score,
                legal_moves,
                skipped: None,
            },
            TurnOutcome::Skipped {
                skipped,
                next,
                legal_moves,
            } => {
                debug!(%skipped, "No legal moves, turn skipped");
                GameState {
                    board,
                    current_player: next,
                    outcome: None,
                    score,
                    legal_moves,
                    skipped: Some(skipped),
                }
            }
            TurnOutcome::GameEnded(game_over) => {
                debug!(winner = %game_over.winner, reason = ?game_over.reason, "Game over");
                GameState {
                    board,
                    current_player: just_moved,
                    outcome: Some(game_over),
                    score,
                    legal_moves: Vec::new(),
                    skipped: None,
                }
            }
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

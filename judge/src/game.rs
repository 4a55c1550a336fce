use ataxx::{
    advance_turn, Board, GameEndReason, Okay, PlayTurnResponse, Player, Request, Score,
    TurnOutcome, Winner,
};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use tracing::debug;

use crate::error::IllegalTurn;
use crate::player::Contestant;
use crate::recording::Recorder;
use crate::turn::execute_turn;

/// How a game between two contestants ended.
///
/// `pieces` holds the final piece count of each contestant, in the order they were
/// passed to [`play_game()`].
#[derive(Debug)]
pub enum GameResult {
    WonByPlayer {
        player_idx: usize,
        reason: GameEndReason,
        pieces: [u8; 2],
    },
    Tie {
        reason: GameEndReason,
        pieces: [u8; 2],
    },
    IllegalMoveByPlayer { player_idx: usize, err: IllegalTurn },
    /// Nobody won within the turn limit. Counts as a tie.
    TurnLimitReached { pieces: [u8; 2] },
}

impl GameResult {
    /// The final piece counts, unless the game was forfeited.
    pub fn pieces(&self) -> Option<[u8; 2]> {
        match self {
            GameResult::WonByPlayer { pieces, .. }
            | GameResult::Tie { pieces, .. }
            | GameResult::TurnLimitReached { pieces } => Some(*pieces),
            GameResult::IllegalMoveByPlayer { .. } => None,
        }
    }
}

/// Returns an error only on communication failure, not when an
/// illegal move is played.
pub fn play_game(
    rng: &mut StdRng,
    player_1: &mut Contestant,
    player_2: &mut Contestant,
    recorder: &mut Option<Recorder>,
    max_turns: usize,
) -> anyhow::Result<GameResult> {
    // Assign the sides randomly
    let sides = {
        let mut arr = [Player::One, Player::Two];
        arr.shuffle(rng);
        arr
    };
    let mut contestants = [player_1, player_2];

    // Inform the players about the new game, so that they can reset their state
    for (contestant, &player) in contestants.iter_mut().zip(sides.iter()) {
        let _: Okay = contestant.perform_request(recorder, &Request::NewGame { player })?;
    }

    let result = run_game(&mut contestants, sides, recorder, max_turns)?;

    if let Some(rec) = recorder {
        let names = [contestants[0].name.as_str(), contestants[1].name.as_str()];
        rec.write_game_recording(describe_result(&result, names))?;
    }
    Ok(result)
}

fn run_game(
    contestants: &mut [&mut Contestant; 2],
    sides: [Player; 2],
    recorder: &mut Option<Recorder>,
    max_turns: usize,
) -> anyhow::Result<GameResult> {
    let contestant_idx = |player: Player| if sides[0] == player { 0 } else { 1 };
    let pieces = |score: Score| [score.count(sides[0]), score.count(sides[1])];

    let mut board = Board::initial();
    let mut current_player = Player::One;
    let mut legal_moves = board.legal_moves(current_player);

    for turn in 0..max_turns {
        let player_idx = contestant_idx(current_player);
        let req = Request::PlayTurn {
            board,
            player: current_player,
            legal_moves: legal_moves.clone(),
        };
        let PlayTurnResponse(response): PlayTurnResponse =
            contestants[player_idx].perform_request(recorder, &req)?;
        board = match execute_turn(&board, current_player, &legal_moves, response) {
            Ok(board) => board,
            Err(err) => return Ok(GameResult::IllegalMoveByPlayer { player_idx, err }),
        };

        match advance_turn(&board, current_player) {
            TurnOutcome::Normal {
                next,
                legal_moves: next_moves,
            } => {
                current_player = next;
                legal_moves = next_moves;
            }
            TurnOutcome::Skipped {
                skipped,
                next,
                legal_moves: next_moves,
            } => {
                debug!(turn, %skipped, "Turn skipped");
                current_player = next;
                legal_moves = next_moves;
            }
            TurnOutcome::GameEnded(game_over) => {
                debug!(turn, winner = %game_over.winner, reason = ?game_over.reason, "Game over");
                let pieces = pieces(board.score());
                return Ok(match game_over.winner {
                    Winner::Player(winner) => GameResult::WonByPlayer {
                        player_idx: contestant_idx(winner),
                        reason: game_over.reason,
                        pieces,
                    },
                    Winner::Draw => GameResult::Tie {
                        reason: game_over.reason,
                        pieces,
                    },
                });
            }
        }
    }

    debug!(max_turns, score = ?board.score(), "Turn limit reached");
    Ok(GameResult::TurnLimitReached {
        pieces: pieces(board.score()),
    })
}

fn describe_reason(reason: GameEndReason) -> &'static str {
    match reason {
        GameEndReason::Elimination => "elimination",
        GameEndReason::BoardFull => "full board",
        GameEndReason::NoMovesLeft => "no moves left",
    }
}

fn describe_result(result: &GameResult, names: [&str; 2]) -> String {
    match result {
        GameResult::WonByPlayer {
            player_idx,
            reason,
            pieces,
        } => format!(
            "{} won by {}, {} to {}",
            names[*player_idx],
            describe_reason(*reason),
            pieces[*player_idx],
            pieces[1 - player_idx]
        ),
        GameResult::Tie { reason, pieces } => {
            format!("Tie by {}, {} to {}", describe_reason(*reason), pieces[0], pieces[1])
        }
        GameResult::IllegalMoveByPlayer { player_idx, err } => {
            format!("{} lost by an illegal move: {}", names[*player_idx], err)
        }
        GameResult::TurnLimitReached { pieces } => {
            format!("Tie by turn limit, {} to {}", pieces[0], pieces[1])
        }
    }
}

#[cfg(test)]
mod tests {
    use ataxx::Difficulty;
    use rand::SeedableRng;

    use super::*;
    use crate::player::{ContestantSource, PlayerConfig};

    fn builtin(nick: &str, level: u8, rng: &mut StdRng) -> Contestant {
        let config = PlayerConfig {
            nick: String::from(nick),
            source: ContestantSource::Builtin {
                difficulty: Difficulty::new(level),
            },
        };
        Contestant::from_config(&config, rng).unwrap()
    }

    #[test]
    fn builtin_players_finish_games() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut easy = builtin("easy", 1, &mut rng);
        let mut hard = builtin("hard", 8, &mut rng);
        for _ in 0..3 {
            let result = play_game(&mut rng, &mut easy, &mut hard, &mut None, 500).unwrap();
            match result {
                GameResult::WonByPlayer {
                    player_idx, pieces, ..
                } => assert!(pieces[player_idx] > pieces[1 - player_idx]),
                GameResult::Tie { pieces, .. } => assert_eq!(pieces[0], pieces[1]),
                GameResult::TurnLimitReached { .. } => {}
                GameResult::IllegalMoveByPlayer { .. } => panic!("{:?}", result),
            }
        }
    }

    #[test]
    fn turn_limit() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut first = builtin("first", 3, &mut rng);
        let mut second = builtin("second", 3, &mut rng);
        let result = play_game(&mut rng, &mut first, &mut second, &mut None, 2).unwrap();
        match result {
            // Two turns of clones add one piece each
            GameResult::TurnLimitReached { pieces } => assert_eq!(pieces, [3, 3]),
            other => panic!("Unexpected result {:?}", other),
        }
    }

    #[test]
    fn descriptions() {
        let names = ["alice", "bob"];
        assert_eq!(
            describe_result(
                &GameResult::WonByPlayer {
                    player_idx: 1,
                    reason: GameEndReason::BoardFull,
                    pieces: [20, 29]
                },
                names
            ),
            "bob won by full board, 29 to 20"
        );
        assert_eq!(
            describe_result(
                &GameResult::Tie {
                    reason: GameEndReason::NoMovesLeft,
                    pieces: [4, 4]
                },
                names
            ),
            "Tie by no moves left, 4 to 4"
        );
        assert_eq!(
            describe_result(
                &GameResult::IllegalMoveByPlayer {
                    player_idx: 0,
                    err: IllegalTurn::UnjustifiedPass { num_legal_moves: 3 }
                },
                names
            ),
            "alice lost by an illegal move: Passed although there were 3 legal moves"
        );
    }
}

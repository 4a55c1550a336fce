use serde::{Deserialize, Serialize};

use crate::{Board, Move, Player};

/// Request for a bot to do something.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Request {
    /// Request to reset the bot's state for a new game.
    ///
    /// The response should be an [`Okay`].
    NewGame { player: Player },
    /// Request to play the next turn.
    ///
    /// The response should be a [`PlayTurnResponse`].
    PlayTurn {
        board: Board,
        /// The side the bot is playing.
        player: Player,
        /// All moves the bot may make, in the standard order. If this is empty,
        /// the bot has to pass.
        legal_moves: Vec<Move>,
    },
    /// The bot should shut down.
    Bye,
}

/// Dummy struct for use in bot communication.
///
/// Used to signal an acknowledgement without data.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Okay();

/// The move to make, or `None` to pass.
///
/// Passing is only allowed when there are no legal moves.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayTurnResponse(pub Option<Move>);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pos;

    #[test]
    fn wire_format() {
        let request: Request =
            serde_json::from_str(r#"{"type": "NewGame", "player": "two"}"#).unwrap();
        assert_eq!(request, Request::NewGame { player: Player::Two });

        let board = Board::initial();
        let request = Request::PlayTurn {
            board,
            player: Player::One,
            legal_moves: board.legal_moves(Player::One),
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["type"], "PlayTurn");
        assert_eq!(json["board"][6], "2.....1");
        assert_eq!(json["legal_moves"].as_array().unwrap().len(), 16);
        assert_eq!(serde_json::from_value::<Request>(json).unwrap(), request);

        let response: PlayTurnResponse =
            serde_json::from_str(r#"{"from": [0, 0], "to": [2, 2]}"#).unwrap();
        assert_eq!(
            response,
            PlayTurnResponse(Some(Move::new(pos!(0, 0), pos!(2, 2)).unwrap()))
        );
        let pass: PlayTurnResponse = serde_json::from_str("null").unwrap();
        assert_eq!(pass, PlayTurnResponse(None));
    }
}

mod ai_bot;
pub use ai_bot::*;

use std::io::{BufRead, Write};

use ataxx::{Board, Move, Okay, Player, PlayTurnResponse, Request};
use tracing_subscriber::filter::LevelFilter;

/// A trait to simplify writing bots.
pub trait Bot {
    fn new_game(&mut self, player: Player);

    /// Returns the move to make, or `None` to pass.
    ///
    /// `legal_moves` is only empty if the bot has to pass.
    fn play_turn(&mut self, board: Board, player: Player, legal_moves: Vec<Move>) -> Option<Move>;

    /// Answers a single request with the JSON response, or `None` when the bot
    /// should shut down.
    fn handle_request(&mut self, req: Request) -> anyhow::Result<Option<String>> {
        let response = match req {
            Request::NewGame { player } => {
                self.new_game(player);
                serde_json::to_string(&Okay())?
            }
            Request::PlayTurn {
                board,
                player,
                legal_moves,
            } => serde_json::to_string(&PlayTurnResponse(
                self.play_turn(board, player, legal_moves),
            ))?,
            Request::Bye => return Ok(None),
        };
        Ok(Some(response))
    }

    /// Answers requests from `input`, one JSON object per line, until `Bye` or EOF.
    fn serve<R: BufRead, W: Write>(&mut self, mut input: R, mut output: W) -> anyhow::Result<()>
    where
        Self: Sized,
    {
        let mut buf = String::new();
        loop {
            buf.clear(); // because read_line() appends to the buffer
            let num_bytes_read = input.read_line(&mut buf)?;
            if num_bytes_read == 0 {
                // 0 bytes read means EOF - the judge has exited.
                break Ok(());
            }

            let req = serde_json::from_str::<Request>(buf.trim_end())?;
            match self.handle_request(req)? {
                Some(response) => {
                    writeln!(output, "{}", response)?;
                    output.flush()?;
                }
                None => break Ok(()),
            }
        }
    }

    fn run(&mut self) -> anyhow::Result<()>
    where
        Self: Sized,
    {
        // Communication happens through stdin/stdout.
        // Stderr can be used for logging.
        self.serve(std::io::stdin().lock(), std::io::stdout().lock())
    }
}

/// Sets up logging to stderr, since stdout is reserved for the protocol.
pub fn initialize_logging(level: LevelFilter) {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .with_target(false)
        .compact()
        .init();
}

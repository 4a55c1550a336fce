use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;
use std::process::{Child, ChildStdin, ChildStdout, Command, Stdio};

use anyhow::Context;
use ataxx::{Difficulty, Request};
use ataxx_bot_utils::{AiBot, Bot};
use rand::rngs::StdRng;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::recording::Recorder;

/// The contents of a contestant's config file.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerConfig {
    pub nick: String,
    #[serde(flatten)]
    pub source: ContestantSource,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContestantSource {
    /// A bot program speaking the JSON protocol on stdin/stdout.
    Executable {
        /// The program followed by its arguments.
        cmd: Vec<String>,
    },
    /// The computer opponent from the `ataxx` crate, run inside the judge.
    Builtin { difficulty: Difficulty },
}

impl PlayerConfig {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("Could not open player config '{}'", path.display()))?;
        let config = serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("Invalid player config '{}'", path.display()))?;
        Ok(config)
    }
}

/// A participant in the tournament.
pub struct Contestant {
    pub name: String,
    backend: Backend,
    // A re-usable buffer for IO.
    // Should always be empty before and after perform_request().
    buf: String,
}

enum Backend {
    Process {
        child: Child,
        stdin: ChildStdin,
        stdout: BufReader<ChildStdout>,
    },
    Builtin(AiBot),
}

impl Contestant {
    /// Starts the bot process, or sets up the builtin AI with a seed drawn from `rng`.
    pub fn from_config(config: &PlayerConfig, rng: &mut StdRng) -> anyhow::Result<Self> {
        let backend = match &config.source {
            ContestantSource::Executable { cmd } => {
                let Some((program, args)) = cmd.split_first() else {
                    anyhow::bail!("Empty command for player '{}'", config.nick);
                };
                let mut child = Command::new(program)
                    .args(args)
                    .stdin(Stdio::piped())
                    .stdout(Stdio::piped())
                    .spawn()
                    .with_context(|| format!("Could not start '{}'", program))?;
                let stdin = child.stdin.take().context("Could not access stdin")?;
                let stdout = child.stdout.take().context("Could not access stdout")?;
                Backend::Process {
                    child,
                    stdin,
                    stdout: BufReader::new(stdout),
                }
            }
            ContestantSource::Builtin { difficulty } => {
                Backend::Builtin(AiBot::new(*difficulty, rng.gen()))
            }
        };

        Ok(Self {
            name: config.nick.clone(),
            backend,
            buf: String::new(),
        })
    }

    pub fn perform_request<T: serde::de::DeserializeOwned + std::fmt::Debug>(
        &mut self,
        recorder: &mut Option<Recorder>,
        req: &Request,
    ) -> anyhow::Result<T> {
        let req_json = serde_json::to_string(req)?;
        trace!(name: "Sending request", player = &self.name, request = %req_json);
        self.buf.clear();
        match &mut self.backend {
            Backend::Process { stdin, stdout, .. } => {
                writeln!(stdin, "{}", req_json)?;
                stdin.flush()?;
                if stdout.read_line(&mut self.buf)? == 0 {
                    anyhow::bail!("Player '{}' closed its output", self.name);
                }
            }
            Backend::Builtin(bot) => match bot.handle_request(req.clone())? {
                Some(response) => self.buf = response,
                None => anyhow::bail!("Builtin player did not answer {:?}", req),
            },
        }
        let serialized_response = self.buf.trim_end();
        let response = serde_json::from_str::<T>(serialized_response).with_context(|| {
            format!("Invalid response from '{}': {}", self.name, serialized_response)
        })?;
        trace!(name: "Received response", player = &self.name, response = %serialized_response);

        if let Some(recorder) = recorder {
            recorder.store_request(&self.name, req, serialized_response)?;
        }
        self.buf.clear();
        Ok(response)
    }

    /// Tells the bot to shut down and waits for it to exit.
    pub fn shut_down(self) -> anyhow::Result<()> {
        if let Backend::Process {
            mut child,
            mut stdin,
            ..
        } = self.backend
        {
            writeln!(stdin, "{}", serde_json::to_string(&Request::Bye)?)?;
            stdin.flush()?;
            drop(stdin);
            child.wait()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use ataxx::{Board, Okay, Player, PlayTurnResponse};
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn config_formats() {
        let config: PlayerConfig = serde_json::from_str(
            r#"{"nick": "random", "executable": {"cmd": ["./random_bot", "--seed", "3"]}}"#,
        )
        .unwrap();
        assert_eq!(
            config,
            PlayerConfig {
                nick: String::from("random"),
                source: ContestantSource::Executable {
                    cmd: vec![
                        String::from("./random_bot"),
                        String::from("--seed"),
                        String::from("3")
                    ]
                }
            }
        );

        let config: PlayerConfig =
            serde_json::from_str(r#"{"nick": "hard", "builtin": {"difficulty": 9}}"#).unwrap();
        assert_eq!(
            config.source,
            ContestantSource::Builtin {
                difficulty: Difficulty::new(9)
            }
        );
    }

    #[test]
    fn builtin_contestant_answers_requests() {
        let config = PlayerConfig {
            nick: String::from("builtin"),
            source: ContestantSource::Builtin {
                difficulty: Difficulty::HARDEST,
            },
        };
        let mut rng = StdRng::seed_from_u64(0);
        let mut contestant = Contestant::from_config(&config, &mut rng).unwrap();
        let _: Okay = contestant
            .perform_request(&mut None, &Request::NewGame { player: Player::Two })
            .unwrap();

        let board = Board::initial();
        let legal_moves = board.legal_moves(Player::Two);
        let PlayTurnResponse(mv): PlayTurnResponse = contestant
            .perform_request(
                &mut None,
                &Request::PlayTurn {
                    board,
                    player: Player::Two,
                    legal_moves: legal_moves.clone(),
                },
            )
            .unwrap();
        assert!(legal_moves.contains(&mv.unwrap()));

        assert!(contestant
            .perform_request::<Okay>(&mut None, &Request::Bye)
            .is_err());
        contestant.shut_down().unwrap();
    }

    #[test]
    fn empty_command_is_rejected() {
        let config = PlayerConfig {
            nick: String::from("nothing"),
            source: ContestantSource::Executable { cmd: vec![] },
        };
        let mut rng = StdRng::seed_from_u64(0);
        assert!(Contestant::from_config(&config, &mut rng).is_err());
    }
}

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use ataxx::Request;
use serde::{Deserialize, Serialize};

/// Writes every request and response of a game to a JSON file.
pub struct Recorder {
    num: usize,
    directory: PathBuf,
    requests: Vec<RequestToPlayer>,
}

impl Recorder {
    pub fn new(directory: PathBuf) -> anyhow::Result<Self> {
        if !directory.is_dir() {
            anyhow::bail!("Directory '{}' does not exist", directory.display());
        }
        Ok(Self {
            num: 1,
            directory,
            requests: Vec::new(),
        })
    }

    pub fn store_request(
        &mut self,
        player: &str,
        request: &Request,
        response: &str,
    ) -> anyhow::Result<()> {
        self.requests.push(RequestToPlayer {
            player: String::from(player),
            request: request.clone(),
            response: serde_json::from_str(response)?,
        });
        Ok(())
    }

    /// Writes the requests since the last call to `game_NNNNNN.json` and starts a new game.
    pub fn write_game_recording(&mut self, result: String) -> anyhow::Result<PathBuf> {
        let filepath = self.directory.join(format!("game_{:0>6}.json", self.num));
        let recording = GameRecording {
            requests: std::mem::take(&mut self.requests),
            result,
        };
        let mut writer = BufWriter::new(File::create(&filepath)?);
        serde_json::to_writer_pretty(&mut writer, &recording)?;
        writer.flush()?;
        self.num += 1;
        Ok(filepath)
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct GameRecording {
    pub requests: Vec<RequestToPlayer>,
    /// How the game ended, in words.
    pub result: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RequestToPlayer {
    pub player: String,
    pub request: Request,
    pub response: serde_json::Value,
}

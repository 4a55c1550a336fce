use ataxx::{random_move, Board, Move, Player};
use ataxx_bot_utils::{initialize_logging, Bot};
use clap::Parser;
use rand::{rngs::StdRng, SeedableRng};
use tracing::{debug, info};
use tracing_subscriber::filter::LevelFilter;

#[derive(Parser)]
struct Args {
    /// RNG seed
    #[arg(long)]
    seed: Option<u64>,

    /// A log level among "off", "error", "warn", "info", "debug", "trace"
    #[arg(short, long, default_value = "warn")]
    log_level: LevelFilter,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    initialize_logging(args.log_level);

    let seed = args.seed.unwrap_or_else(rand::random);
    info!(seed);
    let rng = StdRng::seed_from_u64(seed);

    RandomBot { rng }.run()
}

struct RandomBot {
    rng: StdRng,
}

impl Bot for RandomBot {
    fn new_game(&mut self, _player: Player) {}

    fn play_turn(&mut self, _board: Board, player: Player, legal_moves: Vec<Move>) -> Option<Move> {
        let mv = random_move(&legal_moves, &mut self.rng);
        debug!(%player, num_moves = legal_moves.len(), ?mv);
        mv
    }
}

use ataxx::Difficulty;
use ataxx_bot_utils::{initialize_logging, AiBot, Bot};
use clap::Parser;
use tracing::info;
use tracing_subscriber::filter::LevelFilter;

#[derive(Parser)]
struct Args {
    /// Skill level from 1 (easiest) to 10 (hardest)
    #[arg(short, long, default_value_t = 5)]
    difficulty: u8,

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
    let difficulty = Difficulty::new(args.difficulty);
    info!(seed, %difficulty);

    AiBot::new(difficulty, seed).run()
}

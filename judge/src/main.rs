use std::collections::HashMap;
use std::path::PathBuf;

use ataxx::GameEndReason;
use clap::Parser;
use itertools::Itertools;
use judge::{play_game, Contestant, GameResult, PlayerConfig, Recorder};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info};
use tracing_subscriber::filter::{LevelFilter, Targets};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Parser)]
struct Args {
    /// Path to the config JSON files of players
    #[clap(num_args(2..), value_delimiter = ' ')]
    player_configs: Vec<PathBuf>,

    /// How many games each pair of players plays
    #[arg(short, long, default_value_t = 100)]
    num_games: usize,

    /// RNG seed
    #[arg(long)]
    seed: Option<u64>,

    /// Stop a matchup as soon as one player makes an illegal move
    #[arg(short, long, default_value_t = false)]
    stop_on_illegal_move: bool,

    /// End a game as a tie after this many turns
    #[arg(short, long, default_value_t = 500)]
    max_turns: usize,

    /// Record the game's interactions as JSON files into this directory
    #[arg(short, long)]
    record_games_to_directory: Option<PathBuf>,

    /// A log level among "off", "error", "warn", "info", "debug", "trace"
    #[arg(short, long, default_value = "info")]
    log_level: LevelFilter,
}

/// The games between two contestants. Arrays are indexed like the contestants.
#[derive(Clone, Debug, Default, PartialEq)]
struct MatchScore {
    wins: [usize; 2],
    /// Wins that left the opponent without pieces.
    eliminations: [usize; 2],
    /// Wins because the opponent made an illegal move.
    forfeits: [usize; 2],
    ties: usize,
    turn_limits: usize,
    /// First contestant's pieces minus the second's, summed over games that were played out.
    margin_sum: i64,
    played_out: usize,
}

impl MatchScore {
    fn record(&mut self, result: &GameResult) {
        match result {
            GameResult::WonByPlayer {
                player_idx, reason, ..
            } => {
                self.wins[*player_idx] += 1;
                if *reason == GameEndReason::Elimination {
                    self.eliminations[*player_idx] += 1;
                }
            }
            GameResult::Tie { .. } => self.ties += 1,
            GameResult::TurnLimitReached { .. } => {
                self.ties += 1;
                self.turn_limits += 1;
            }
            GameResult::IllegalMoveByPlayer { player_idx, .. } => {
                self.wins[1 - player_idx] += 1;
                self.forfeits[1 - player_idx] += 1;
            }
        }
        if let Some(pieces) = result.pieces() {
            self.margin_sum += i64::from(pieces[0]) - i64::from(pieces[1]);
            self.played_out += 1;
        }
    }

    fn num_games(&self) -> usize {
        self.wins[0] + self.wins[1] + self.ties
    }

    /// How many more pieces the first contestant had at the end, on average.
    fn average_margin(&self) -> Option<f64> {
        (self.played_out > 0).then(|| self.margin_sum as f64 / self.played_out as f64)
    }

    /// The same games, seen from the second contestant.
    fn swapped(&self) -> MatchScore {
        let swap = |[a, b]: [usize; 2]| [b, a];
        MatchScore {
            wins: swap(self.wins),
            eliminations: swap(self.eliminations),
            forfeits: swap(self.forfeits),
            margin_sum: -self.margin_sum,
            ..self.clone()
        }
    }

    /// "wins-losses-ties margin" for the first contestant.
    fn to_cell(&self) -> String {
        let margin = match self.average_margin() {
            Some(margin) => format!("{:+.1}", margin),
            None => String::from("n/a"),
        };
        format!("{}-{}-{} {}", self.wins[0], self.wins[1], self.ties, margin)
    }
}

fn play_matchup(
    contestants: [&mut Contestant; 2],
    args: &Args,
    rng: &mut StdRng,
    recorder: &mut Option<Recorder>,
) -> anyhow::Result<MatchScore> {
    let [player_1, player_2] = contestants;
    let names = [player_1.name.clone(), player_2.name.clone()];
    let mut match_score = MatchScore::default();

    for game_idx in 0..args.num_games {
        let result = play_game(rng, player_1, player_2, recorder, args.max_turns)?;
        debug!(game_idx, pieces = ?result.pieces(), "Game finished");
        match_score.record(&result);

        if let GameResult::IllegalMoveByPlayer { player_idx, err } = result {
            info!(player = names[player_idx], game_idx, "Illegal move by player");
            let mut err_dyn = &err as &dyn std::error::Error;
            while let Some(src_err) = err_dyn.source() {
                info!("{}", err_dyn);
                err_dyn = src_err;
            }
            info!("{}", err_dyn);
            if args.stop_on_illegal_move {
                break;
            }
        }
    }

    print_match_summary(&names, &match_score);
    Ok(match_score)
}

fn print_match_summary(names: &[String; 2], score: &MatchScore) {
    eprintln!("End result after {} games:", score.num_games());
    for idx in 0..2 {
        eprintln!(
            "- {} wins by {} ({} by elimination, {} by forfeit)",
            score.wins[idx], names[idx], score.eliminations[idx], score.forfeits[idx]
        );
    }
    eprintln!("- {} ties ({} by turn limit)", score.ties, score.turn_limits);
    if let Some(margin) = score.average_margin() {
        eprintln!("- {} ends with {:+.1} pieces on average", names[0], margin);
    }
}

/// Prints every matchup from the point of view of the row's contestant.
fn print_tournament_results(
    player_configs: &[PlayerConfig],
    match_results: &HashMap<(usize, usize), MatchScore>,
) {
    let width = player_configs
        .iter()
        .map(|config| config.nick.chars().count())
        .chain([16])
        .max()
        .unwrap_or(16);

    println!("\nTournament results (row vs. column: wins-losses-ties, average margin):\n");
    print!("{:width$} |", "");
    for config in player_configs {
        print!(" {:width$} |", config.nick);
    }
    println!();
    println!("{}", "-".repeat((width + 3) * (player_configs.len() + 1)));

    for (i, config) in player_configs.iter().enumerate() {
        print!("{:width$} |", config.nick);
        for j in 0..player_configs.len() {
            let cell = if i == j {
                String::from("-")
            } else if let Some(score) = match_results.get(&(i, j)) {
                score.to_cell()
            } else if let Some(score) = match_results.get(&(j, i)) {
                score.swapped().to_cell()
            } else {
                String::from("N/A")
            };
            print!(" {:width$} |", cell);
        }
        println!();
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    initialize_logging(args.log_level);

    let seed = args.seed.unwrap_or_else(rand::random);
    info!(seed);
    let mut rng = StdRng::seed_from_u64(seed);

    let mut recorder = match &args.record_games_to_directory {
        Some(dir_path) => Some(Recorder::new(dir_path.clone())?),
        None => None,
    };

    let player_configs = args
        .player_configs
        .iter()
        .map(|path| PlayerConfig::load(path))
        .collect::<anyhow::Result<Vec<PlayerConfig>>>()?;

    let mut match_results: HashMap<(usize, usize), MatchScore> = HashMap::new();
    for (i1, i2) in (0..player_configs.len()).tuple_combinations() {
        let mut player_1 = Contestant::from_config(&player_configs[i1], &mut rng)?;
        let mut player_2 = Contestant::from_config(&player_configs[i2], &mut rng)?;
        info!(player_1 = player_1.name, player_2 = player_2.name, "Starting matchup");

        let match_score = play_matchup(
            [&mut player_1, &mut player_2],
            &args,
            &mut rng,
            &mut recorder,
        )?;
        player_1.shut_down()?;
        player_2.shut_down()?;

        match_results.insert((i1, i2), match_score);
    }

    if player_configs.len() > 2 {
        print_tournament_results(&player_configs, &match_results);
    }

    Ok(())
}

fn initialize_logging(level: LevelFilter) {
    let format = tracing_subscriber::fmt::format()
        .with_target(false)
        .compact();

    let filter = Targets::new().with_default(level);

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().event_format(format))
        .with(filter)
        .init();
}

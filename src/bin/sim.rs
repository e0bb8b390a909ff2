use std::io::Write;
use std::path::PathBuf;
use std::rc::Rc;
use std::str::FromStr;
use std::time::Instant;

use clap::Parser;
use itertools::Itertools;
use worldcup_rs::cli::{GameStats, default_roster, parse_roster};
use worldcup_rs::dice::{DEFAULT_FACES, Die, RandomDie};
use worldcup_rs::game::{Game, GameConfig, GameSummary, StopCondition};
use worldcup_rs::scoreboard::{NullScoreBoard, ScoreBoard, TextScoreBoard};
use worldcup_rs::types::BoardLayout;

#[derive(Debug, Parser, Clone)]
#[command(name = "worldcup-sim")]
#[command(about = "World Cup board game simulator - roll the dice and watch the money move")]
struct Args {
    /// Number of games to play
    #[arg(short = 'n', long, default_value_t = 1)]
    num: u32,

    /// Comma-separated player names, in turn order
    #[arg(long, default_value_t = default_roster())]
    players: String,

    /// Maximum number of rounds per game
    #[arg(short = 'r', long, default_value_t = 50)]
    rounds: u32,

    /// Random seed for reproducibility
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Faces on each of the two dice
    #[arg(long, default_value_t = DEFAULT_FACES)]
    faces: u32,

    /// Board layout: STANDARD or MINI (overrides the config file)
    #[arg(long)]
    layout: Option<String>,

    /// JSON file with game settings
    #[arg(long)]
    config: Option<PathBuf>,

    /// End a game early once a single solvent player remains
    #[arg(long)]
    until_last_standing: bool,

    /// Print the round-by-round scoreboard of every game
    #[arg(long)]
    scoreboard: bool,

    /// Silence console output
    #[arg(long)]
    quiet: bool,

    /// Number of worker threads for parallel execution
    #[arg(long, default_value_t = 1)]
    workers: usize,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let roster = parse_roster(&args.players).unwrap_or_else(|err| {
        eprintln!("Error: {err}");
        std::process::exit(1);
    });

    let mut config = match &args.config {
        Some(path) => GameConfig::from_json_file(path).unwrap_or_else(|err| {
            eprintln!("Error: {}: {err}", path.display());
            std::process::exit(1);
        }),
        None => GameConfig::default(),
    };
    if let Some(layout) = &args.layout {
        config.layout = BoardLayout::from_str(&layout.to_uppercase()).unwrap_or_else(|_| {
            eprintln!("Error: Invalid layout '{layout}'. Use STANDARD or MINI");
            std::process::exit(1);
        });
    }
    if args.faces == 0 {
        eprintln!("Error: dice need at least one face");
        std::process::exit(1);
    }

    let stats = if args.workers > 1 {
        run_parallel_simulations(&args, &config, &roster)
    } else {
        run_sequential_simulations(&args, &config, &roster, 0..args.num)
    };

    if !args.quiet {
        print_summary(&stats, &roster);
    }
}

fn play_one(args: &Args, config: &GameConfig, roster: &[String], game_idx: u32) -> GameSummary {
    let seed = args.seed.wrapping_add(u64::from(game_idx)).wrapping_mul(2);
    let scoreboard: Rc<dyn ScoreBoard> = if args.scoreboard && !args.quiet {
        Rc::new(TextScoreBoard::stdout())
    } else {
        Rc::new(NullScoreBoard)
    };

    let mut game = Game::new(config.clone());
    for offset in 0..2 {
        let die: Rc<dyn Die> = Rc::new(RandomDie::with_faces(args.faces, seed + offset));
        game.add_die(Some(die));
    }
    for name in roster {
        game.add_player(name.as_str());
    }
    game.set_scoreboard(scoreboard);
    if args.until_last_standing {
        game.set_stop_condition(StopCondition::LastPlayerStanding);
    }

    game.play(args.rounds).unwrap_or_else(|err| {
        eprintln!("Error: {err}");
        std::process::exit(1);
    })
}

fn run_sequential_simulations(
    args: &Args,
    config: &GameConfig,
    roster: &[String],
    games: std::ops::Range<u32>,
) -> GameStats {
    let mut stats = GameStats::new();
    for game_idx in games {
        let start = Instant::now();
        let summary = play_one(args, config, roster, game_idx);
        let duration = start.elapsed();
        stats.record_game(&summary, duration);

        if !args.quiet && args.workers <= 1 {
            let last_n = 10;
            if game_idx < last_n || game_idx >= args.num.saturating_sub(last_n) {
                let standings = summary
                    .standings
                    .iter()
                    .map(|s| format!("{}={}", s.name, s.money))
                    .join(",");
                println!(
                    "Game {:>4}: Standings=[{}], Survivors={}, Rounds={:>4}, Duration={:?}",
                    game_idx + 1,
                    standings,
                    summary.survivors().count(),
                    summary.rounds_played,
                    duration
                );
            } else if (game_idx + 1) % 100 == 0 {
                print!(".");
                let _ = std::io::stdout().flush();
            }
        }
    }
    stats
}

fn run_parallel_simulations(args: &Args, config: &GameConfig, roster: &[String]) -> GameStats {
    use std::thread;

    let games_per_worker = args.num / args.workers as u32;
    let remainder = args.num % args.workers as u32;

    let mut stats = GameStats::new();
    thread::scope(|scope| {
        let handles = (0..args.workers as u32)
            .map(|worker_id| {
                let num_games = games_per_worker + u32::from(worker_id < remainder);
                let start_idx = worker_id * games_per_worker + worker_id.min(remainder);
                scope.spawn(move || {
                    run_sequential_simulations(
                        args,
                        config,
                        roster,
                        start_idx..start_idx + num_games,
                    )
                })
            })
            .collect::<Vec<_>>();

        for handle in handles {
            match handle.join() {
                Ok(worker_stats) => stats.merge(worker_stats),
                Err(_) => log::error!("simulation worker panicked"),
            }
        }
    });
    stats
}

fn print_summary(stats: &GameStats, roster: &[String]) {
    println!("\n{}", "=".repeat(80));
    println!("SIMULATION SUMMARY");
    println!("{}", "=".repeat(80));

    println!("\nPlayer Summary:");
    println!(
        "{:<20} {:<12} {:<16} {:<12}",
        "Player", "Bankrupt", "Bankrupt Rate", "Avg Money"
    );
    println!("{}", "-".repeat(62));

    for name in roster {
        let bankrupt = stats.bankruptcies.get(name).copied().unwrap_or(0);
        println!(
            "{:<20} {:<12} {:<15.1}% {:<12.2}",
            name,
            bankrupt,
            stats.bankruptcy_rate(name) * 100.0,
            stats.avg_money(name)
        );
    }

    println!("\nGame Summary:");
    println!("  Total Games: {}", stats.games);
    println!("  Avg Rounds: {:.2}", stats.get_avg_rounds());
    println!("  Avg Survivors: {:.2}", stats.get_avg_survivors());
    println!("  Avg Duration: {:.2?}", stats.get_avg_duration());
}

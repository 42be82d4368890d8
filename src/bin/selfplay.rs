use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use log::info;
use rust_tictactoe::core::{GameRng, Player};
use rust_tictactoe::search::{Difficulty, SearchConfig};
use rust_tictactoe::selfplay::{MatchSummary, SelfPlayConfig, SelfPlayWorker};

#[derive(Parser, Debug)]
#[command(name = "ttt-selfplay", about = "Play the minimax engine against itself")]
struct Args {
    /// JSON self-play config; command line flags override it
    #[arg(long)]
    config: Option<PathBuf>,
    /// Board side length
    #[arg(long)]
    size: Option<usize>,
    /// Number of games to play
    #[arg(long, default_value_t = 1)]
    games: usize,
    /// Difficulty for X: easy, medium, hard (or 1-3)
    #[arg(long)]
    x: Option<Difficulty>,
    /// Difficulty for O: easy, medium, hard (or 1-3)
    #[arg(long)]
    o: Option<Difficulty>,
    /// Search depth for both sides, overriding difficulty
    #[arg(long)]
    depth: Option<u32>,
    /// Enable alpha-beta pruning for both sides
    #[arg(long)]
    pruning: bool,
    /// Search root moves in parallel for both sides
    #[arg(long)]
    parallel: bool,
    /// Number of random opening moves
    #[arg(long)]
    random_opening: Option<usize>,
    /// Base seed; drawn from entropy when neither this nor --config is given
    #[arg(long)]
    seed: Option<u64>,
    /// Print game records as JSON lines instead of boards
    #[arg(long)]
    json: bool,
}

fn side_config(base: &SearchConfig, difficulty: Option<Difficulty>, args: &Args) -> SearchConfig {
    let mut config = match difficulty {
        Some(d) => SearchConfig::for_difficulty(d),
        None => base.clone(),
    };
    if let Some(depth) = args.depth {
        config.max_depth = depth;
    }
    config.pruning |= args.pruning;
    config.parallel |= args.parallel;
    config
}

fn build_config(args: &Args) -> anyhow::Result<SelfPlayConfig> {
    let mut config = match &args.config {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            SelfPlayConfig::from_json(&text)?
        }
        None => SelfPlayConfig::default(),
    };

    if let Some(size) = args.size {
        config.board_size = size;
    }
    if let Some(plies) = args.random_opening {
        config.random_opening_plies = plies;
    }
    match args.seed {
        Some(seed) => config.seed = seed,
        None if args.config.is_none() => config.seed = GameRng::from_entropy().seed(),
        None => {}
    }

    let x = side_config(config.search_for(Player::X), args.x, args);
    let o = side_config(config.search_for(Player::O), args.o, args);
    Ok(config
        .with_player_search(Player::X, x)
        .with_player_search(Player::O, o))
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let worker = SelfPlayWorker::new(build_config(&args)?)?;
    info!("self-play config: {:?}", worker.config());

    let records = worker.play_games(args.games)?;

    for record in &records {
        if args.json {
            println!("{}", serde_json::to_string(record)?);
        } else {
            println!(
                "game {} ({} moves, {} started)",
                record.seed,
                record.len(),
                record.starting_player
            );
            println!("{}", record.final_board);
            println!("{}\n", record.result);
        }
    }

    let summary = MatchSummary::from_records(&records);
    if args.json {
        eprintln!("{summary}");
    } else {
        println!("{summary}");
    }
    Ok(())
}

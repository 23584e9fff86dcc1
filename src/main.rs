use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};

use memory_match::logging::setup_logging;
use memory_match::{
    run_simulations, GameConfig, GameEngine, GameEvent, ShuffleStrategy, StdTileRng, SystemClock,
    TokioScheduler,
};

#[derive(Parser, Debug)]
#[command(name = "memory_match", version, about = "Memory-matching game")]
struct Cli {
    /// JSON game configuration; flags below override it
    #[arg(short = 'c', long, global = true)]
    config: Option<PathBuf>,

    /// Number of tiles on the board (even)
    #[arg(short = 't', long, global = true)]
    tile_count: Option<usize>,

    /// How dealt tiles are shuffled
    #[arg(long, value_enum, global = true)]
    shuffle: Option<ShuffleStrategy>,

    /// Write rotating log files here instead of stderr
    #[arg(long, global = true)]
    log_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Play a game in the terminal
    Play {
        /// Seed for the board layout
        #[arg(short = 's', long)]
        seed: Option<u64>,
    },
    /// Benchmark the automated perfect-recall player
    Simulate {
        /// Number of games to simulate
        #[arg(short = 'g', long, default_value_t = 200)]
        games: usize,

        /// Seed of the first game; game n uses seed + n
        #[arg(short = 's', long, default_value_t = 42)]
        seed: u64,

        /// Virtual time spent before each click, in milliseconds
        #[arg(long, default_value_t = 600)]
        think_ms: u64,

        /// Print the report as JSON
        #[arg(long, default_value_t = false)]
        json: bool,
    },
}

fn load_config(cli: &Cli) -> memory_match::Result<GameConfig> {
    let mut config = match &cli.config {
        Some(path) => GameConfig::from_json_file(path)?,
        None => GameConfig::default(),
    };
    if let Some(tile_count) = cli.tile_count {
        config.tile_count = tile_count;
    }
    if let Some(shuffle) = cli.shuffle {
        config.shuffle = shuffle;
    }
    config.validate()?;
    Ok(config)
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Keep the terminal quiet while playing unless RUST_LOG asks otherwise.
    let default_spec = match cli.command {
        Command::Play { .. } => "warn",
        Command::Simulate { .. } => "info",
    };
    let _logger = setup_logging(default_spec, cli.log_dir.as_deref())?;
    let config = load_config(&cli)?;

    match cli.command {
        Command::Play { seed } => play(config, seed).await?,
        Command::Simulate {
            games,
            seed,
            think_ms,
            json,
        } => {
            log::info!(
                "Simulating {} games on {} tiles ({:?} shuffle)",
                games,
                config.tile_count,
                config.shuffle
            );
            let report = run_simulations(&config, games, seed, Duration::from_millis(think_ms))?;
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("{}", report);
            }
        }
    }
    Ok(())
}

// ============================================================================
// TERMINAL GAME
// ============================================================================

enum Input {
    Tile(usize),
    Replay,
    Quit,
    Unknown,
}

fn parse_input(line: &str) -> Input {
    match line.trim() {
        "q" | "quit" => Input::Quit,
        "r" | "replay" => Input::Replay,
        other => other.parse().map(Input::Tile).unwrap_or(Input::Unknown),
    }
}

async fn play(config: GameConfig, seed: Option<u64>) -> memory_match::Result<()> {
    let (scheduler, mut timers) = TokioScheduler::new();
    let rng = match seed {
        Some(seed) => StdTileRng::seeded(seed),
        None => StdTileRng::from_entropy(),
    };
    let mut engine = GameEngine::new(
        config,
        Box::new(rng),
        Box::new(SystemClock::new()),
        Box::new(scheduler),
    )?;
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    println!("Type a tile number to turn it over, 'r' to deal again, 'q' to quit.");
    render(&engine);

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                match parse_input(&line) {
                    Input::Quit => break,
                    Input::Replay => {
                        engine.replay()?;
                        render(&engine);
                    }
                    Input::Tile(index) => {
                        let events = engine.select_tile(index);
                        if events.is_empty() {
                            println!("Tile {} cannot be turned over.", index);
                        }
                        show(&engine, &events);
                    }
                    Input::Unknown => println!("Unknown input {:?}", line.trim()),
                }
            }
            Some(fired) = timers.recv() => {
                let events = engine.on_timer(fired.id);
                show(&engine, &events);
            }
        }
    }
    Ok(())
}

/// Redraws after visibility changes. Display ticks alone are not echoed.
fn show(engine: &GameEngine, events: &[GameEvent]) {
    let board_changed = events.iter().any(|event| {
        matches!(
            event,
            GameEvent::TileRevealed { .. } | GameEvent::TileHidden { .. }
        )
    });
    if board_changed {
        render(engine);
    }
    for event in events {
        if let GameEvent::Solved(summary) = event {
            println!(
                "Solved in {} with {} {}. Type 'r' to play again.",
                summary.score.formatted_elapsed(),
                summary.score.moves_label(),
                summary.score.star_string()
            );
        }
    }
}

fn render(engine: &GameEngine) {
    let tiles = engine.tiles();
    let columns = (1..=tiles.len())
        .find(|c| c * c >= tiles.len())
        .unwrap_or(1);
    let width = tiles
        .iter()
        .map(|tile| tile.label.as_str().len())
        .max()
        .unwrap_or(2)
        .max(2);

    println!();
    for (row_index, row_tiles) in tiles.chunks(columns).enumerate() {
        let cells: Vec<String> = row_tiles
            .iter()
            .enumerate()
            .map(|(col, tile)| {
                let index = row_index * columns + col;
                if tile.is_visible() {
                    format!("[{:^width$}]", tile.label.as_str(), width = width)
                } else {
                    format!("[{:^width$}]", index, width = width)
                }
            })
            .collect();
        println!("{}", cells.join(" "));
    }
    let score = engine.score();
    println!(
        "{} | {} | {}",
        score.moves_label(),
        score.formatted_elapsed(),
        score.star_string()
    );
}

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use lifeboard_app::{init_tracing, terminal};
use lifeboard_core::LifeConfig;
use lifeboard_storage::BoardStore;
use tracing::info;

/// Conway's Game of Life in the terminal.
///
/// Loads a board from the boards directory (falling back to a random one
/// when it is missing) and advances it one generation per input line.
#[derive(Parser, Debug)]
#[command(name = "lifeboard", version, about)]
struct Cli {
    /// Wrap the game board instead of stopping at edges.
    #[arg(short, long)]
    wrap: bool,

    /// Load the game in debug mode.
    #[arg(short, long)]
    debug: bool,

    /// Load the board of the given name from the boards directory.
    #[arg(short, long, value_name = "NAME", default_value = "sample_board")]
    board: String,

    /// Directory holding saved boards.
    #[arg(long, env = "LIFEBOARD_BOARDS_DIR", default_value = "boards")]
    boards_dir: PathBuf,

    /// RNG seed for reproducible random boards.
    #[arg(long, env = "LIFEBOARD_SEED")]
    seed: Option<u64>,

    /// Pause in milliseconds around load/save messages.
    #[arg(long, env = "LIFEBOARD_PAUSE_MILLIS", default_value_t = 2000)]
    pause_millis: u64,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let config = LifeConfig {
        wrap: cli.wrap,
        debug: cli.debug,
        board: cli.board,
        rng_seed: cli.seed,
        pause_millis: cli.pause_millis,
        ..LifeConfig::default()
    };
    let store = BoardStore::new(cli.boards_dir);

    info!(
        board = %config.board,
        wrap = config.wrap,
        debug = config.debug,
        "starting lifeboard"
    );
    terminal::run(&config, &store)
}

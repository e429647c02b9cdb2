//! Interactive board authoring tool.
//!
//! Prompts for a board name, dimensions, and padding, then reads one
//! grammar line per row, redrawing a mockup of the board as it grows.
//! The finished board is padded and saved into the boards directory.

use std::io::{self, BufRead};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::Parser;
use lifeboard_app::{clear_screen, init_tracing, read_line};
use lifeboard_author::{BoardBuilder, GrammarError};
use lifeboard_core::LifeConfig;
use lifeboard_storage::BoardStore;

/// Author a new board for the lifeboard simulator, row by row.
#[derive(Parser, Debug)]
#[command(name = "author", version, about)]
struct Cli {
    /// Directory the finished board is saved into.
    #[arg(long, env = "LIFEBOARD_BOARDS_DIR", default_value = "boards")]
    boards_dir: PathBuf,

    /// RNG seed for reproducible 'rand' rows.
    #[arg(long, env = "LIFEBOARD_SEED")]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let store = BoardStore::new(cli.boards_dir);
    let config = LifeConfig {
        rng_seed: cli.seed,
        ..LifeConfig::default()
    };
    let mut rng = config.seeded_rng();

    let stdin = io::stdin();
    let mut input = stdin.lock();

    clear_screen();
    let Some(name) = read_line("Name of board: ", &mut input)? else {
        bail!("input stream closed before a board name was given");
    };
    let filename = store.resolve(&name);

    let rows = prompt_number("Number of rows: ", 1, &mut input)?;
    let cols = prompt_number("Number of columns: ", 1, &mut input)?;
    let pad = prompt_number("Amount of padding: ", 0, &mut input)?;

    let mut builder = BoardBuilder::new(rows, cols, pad);
    let mut error: Option<GrammarError> = None;

    while !builder.is_complete() {
        print_screen(&filename, &builder, error.as_ref());
        let prompt = format!("row {}: ", builder.current_row());
        let Some(line) = read_line(&prompt, &mut input)? else {
            bail!("input stream closed mid-session");
        };
        error = builder.push_row(&line, &mut rng).err();
    }
    print_screen(&filename, &builder, None);

    let grid = builder.finish().context("failed to assemble the board")?;
    let path = store.save(&name, &grid).context("failed to save the board")?;
    println!("Saved '{}'.", path.display());
    Ok(())
}

/// Re-prompt until a number of at least `min` is given.
fn prompt_number(prompt: &str, min: usize, input: &mut impl BufRead) -> Result<usize> {
    loop {
        let Some(line) = read_line(prompt, input)? else {
            bail!("input stream closed while reading '{}'", prompt.trim());
        };
        match line.parse::<usize>() {
            Ok(value) if value >= min => return Ok(value),
            _ => continue,
        }
    }
}

fn print_screen(filename: &Path, builder: &BoardBuilder, error: Option<&GrammarError>) {
    clear_screen();
    println!("{}", filename.display());
    println!();
    println!("Enter each row on a new line, using space-separated 0's and 1's.");
    println!("(0 represents a dead cell, 1 represents a live cell)");
    println!();
    println!("Things to know:");
    println!("\tuse 'Nx0' or 'Nx1' to create N amounts of that number.");
    println!("\t'dup x' duplicates row x.");
    println!("\t'rand' randomly assigns 0 or 1 to each character in a row.");
    println!("\tAn empty row becomes all 0's.");
    println!("\tA row too small or too large will either be padded with 0's or cut off.");
    println!();
    print_mockup(builder);
    println!();
    println!("{}", "-".repeat(10));
    println!();
    if let Some(error) = error {
        println!("{error}");
        println!();
    }
}

/// Bordered mockup of the rows entered so far, with their indices.
fn print_mockup(builder: &BoardBuilder) {
    let edge = "+ ".repeat(builder.target_cols() + 2);
    println!("\t{edge}");
    for (index, row) in builder.rows().iter().enumerate() {
        let cells: String = row
            .iter()
            .map(|cell| if cell.is_alive() { "o " } else { "  " })
            .collect();
        println!("{index}\t+ {cells}+");
    }
    println!("\t{edge}");
}

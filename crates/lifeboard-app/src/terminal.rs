//! Interactive command loop for the simulator binary.
//!
//! One line of input is read per generation: `q`/`quit` stops after a final
//! frame, `save <name>` persists the board the run started from, anything
//! else (including an empty line) advances the simulation by one step.

use std::io;
use std::time::Duration;

use anyhow::{Context, Result};
use lifeboard_core::{Grid, LifeConfig, Simulation};
use lifeboard_render::{Glyphs, RenderMode, render_frame};
use lifeboard_storage::{BoardOrigin, BoardStore};
use tracing::{info, warn};

use crate::{clear_screen, pacing_pause, read_line};

const HELP: &[&str] = &[
    "Enter 'q' or 'quit' to exit the program.",
    "Enter 'save [name]' to save the initial state to a file.",
];

/// Load (or generate) the configured board, then run the command loop until
/// the user quits or the input stream closes.
pub fn run(config: &LifeConfig, store: &BoardStore) -> Result<()> {
    let pause = Duration::from_millis(config.pause_millis);
    let mut rng = config.seeded_rng();

    println!("Loading '{}'...", store.resolve(&config.board).display());
    pacing_pause(pause);
    let (initial, origin) = store
        .load_or_generate(
            &config.board,
            config.fallback_width,
            config.fallback_height,
            &mut rng,
        )
        .with_context(|| format!("failed to load board '{}'", config.board))?;

    if origin == BoardOrigin::Generated {
        println!(
            "File '{}' not found, randomly generating...",
            store.resolve(&config.board).display()
        );
        warn!(board = %config.board, "board not found, substituted a random one");
        pacing_pause(pause);
    }

    let mode = if config.debug {
        RenderMode::Debug
    } else {
        RenderMode::Normal
    };
    let glyphs = Glyphs::default();
    let mut sim = Simulation::new(initial.clone(), config.boundary_policy());

    let stdin = io::stdin();
    let mut input = stdin.lock();

    loop {
        refresh_screen(&sim, &glyphs, mode);

        let Some(line) = read_line("", &mut input)? else {
            break;
        };
        let line = line.to_lowercase();
        let words: Vec<&str> = line.split_whitespace().collect();

        match words.as_slice() {
            ["q" | "quit", ..] => break,
            ["save", name, ..] => save_initial(store, name, &initial, pause)?,
            _ => sim.advance(),
        }
    }

    refresh_screen(&sim, &glyphs, mode);
    info!(generation = sim.generation().0, "simulation stopped");
    Ok(())
}

/// Persist the board the run started from, not the advanced state.
fn save_initial(store: &BoardStore, name: &str, initial: &Grid, pause: Duration) -> Result<()> {
    println!("Saving '{}'...", store.resolve(name).display());
    pacing_pause(pause);
    let path = store
        .save(name, initial)
        .with_context(|| format!("failed to save board '{name}'"))?;
    info!(path = %path.display(), "saved initial board");
    Ok(())
}

fn refresh_screen(sim: &Simulation, glyphs: &Glyphs, mode: RenderMode) {
    // Debug frames keep the scrollback so successive counts can be compared.
    if mode == RenderMode::Normal {
        clear_screen();
        for line in HELP {
            println!("{line}");
        }
        println!();
    }

    for line in render_frame(sim, glyphs, mode) {
        println!("{line}");
    }
    println!();
}

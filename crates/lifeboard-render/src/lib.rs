//! Turns a simulation snapshot into a bordered text frame.
//!
//! Rendering is a pure transform: it never mutates the simulation and keeps
//! no state between frames, so it can be re-invoked every generation.

use lifeboard_core::Simulation;

/// Which face of the board a frame shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RenderMode {
    /// Alive/dead glyphs.
    #[default]
    Normal,
    /// Live-neighbor counts, bracketed for live cells.
    Debug,
}

/// Glyphs used for the bordered frame in normal mode.
///
/// Each glyph is emitted with a trailing space so cells occupy two columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyphs {
    pub border: char,
    pub alive: char,
    pub dead: char,
}

impl Default for Glyphs {
    fn default() -> Self {
        Self {
            border: '+',
            alive: 'o',
            dead: ' ',
        }
    }
}

/// Border unit for debug frames, widened to the three-column debug cells.
const DEBUG_BORDER: &str = " # ";

/// Render one frame: a top border line, one line per board row flanked by
/// border units, and a bottom border line. Border lines span `width + 2`
/// units.
///
/// Debug mode replaces each cell with its live-neighbor count under the
/// simulation's boundary policy, `[n]` when the cell is alive and ` n `
/// when dead.
#[must_use]
pub fn render_frame(sim: &Simulation, glyphs: &Glyphs, mode: RenderMode) -> Vec<String> {
    let grid = sim.grid();
    let border = match mode {
        RenderMode::Normal => format!("{} ", glyphs.border),
        RenderMode::Debug => DEBUG_BORDER.to_owned(),
    };

    let mut lines = Vec::with_capacity(grid.height() + 2);
    let edge = border.repeat(grid.width() + 2);
    lines.push(edge.clone());

    for row in 0..grid.height() {
        let mut line = border.clone();
        for col in 0..grid.width() {
            let cell = grid.get(row, col);
            match mode {
                RenderMode::Normal => {
                    line.push(if cell.is_alive() {
                        glyphs.alive
                    } else {
                        glyphs.dead
                    });
                    line.push(' ');
                }
                RenderMode::Debug => {
                    let neighbors = sim.live_neighbors(row, col);
                    if cell.is_alive() {
                        line.push_str(&format!("[{neighbors}]"));
                    } else {
                        line.push_str(&format!(" {neighbors} "));
                    }
                }
            }
        }
        line.push_str(&border);
        lines.push(line);
    }

    lines.push(edge);
    lines
}

//! Core simulation types shared across the lifeboard workspace.

use rand::{Rng, SeedableRng, rngs::SmallRng};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One discrete time step of the automaton.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
pub struct Generation(pub u64);

impl Generation {
    #[must_use]
    pub const fn zero() -> Self {
        Self(0)
    }
}

/// State of a single board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Dead,
    Alive,
}

impl Cell {
    #[must_use]
    pub const fn is_alive(self) -> bool {
        matches!(self, Self::Alive)
    }

    /// Bit form used by board files and the authoring grammar.
    #[must_use]
    pub const fn as_bit(self) -> u8 {
        match self {
            Self::Dead => 0,
            Self::Alive => 1,
        }
    }

    /// Parse the bit form; anything other than `0` or `1` is rejected.
    #[must_use]
    pub const fn from_bit(bit: u8) -> Option<Self> {
        match bit {
            0 => Some(Self::Dead),
            1 => Some(Self::Alive),
            _ => None,
        }
    }
}

/// Raised when an initial board matrix is not a proper rectangle.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DimensionError {
    #[error("board must contain at least one row and one column")]
    Empty,
    #[error("row {row} has {found} cells, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
}

/// Rectangular board of cells.
///
/// Dimensions are fixed at construction; contents are mutable. Cells are
/// stored row-major in a flat buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Construct an all-dead grid of the given dimensions.
    pub fn dead(width: usize, height: usize) -> Result<Self, DimensionError> {
        if width == 0 || height == 0 {
            return Err(DimensionError::Empty);
        }
        Ok(Self {
            width,
            height,
            cells: vec![Cell::Dead; width * height],
        })
    }

    /// Construct from a row-major matrix, rejecting empty or ragged input.
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Result<Self, DimensionError> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        if height == 0 || width == 0 {
            return Err(DimensionError::Empty);
        }
        let mut cells = Vec::with_capacity(width * height);
        for (row, data) in rows.iter().enumerate() {
            if data.len() != width {
                return Err(DimensionError::Ragged {
                    row,
                    expected: width,
                    found: data.len(),
                });
            }
            cells.extend_from_slice(data);
        }
        Ok(Self {
            width,
            height,
            cells,
        })
    }

    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub const fn height(&self) -> usize {
        self.height
    }

    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Flat index for `(row, col)` without bounds checks.
    #[inline]
    const fn offset(&self, row: usize, col: usize) -> usize {
        row * self.width + col
    }

    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[self.offset(row, col)]
    }

    pub fn set(&mut self, row: usize, col: usize, cell: Cell) {
        let idx = self.offset(row, col);
        self.cells[idx] = cell;
    }

    /// Iterate rows as slices, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks_exact(self.width)
    }

    #[must_use]
    pub fn live_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }
}

/// How neighbor lookups resolve at the board edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoundaryPolicy {
    /// Off-board neighbors are treated as dead.
    #[default]
    Clamped,
    /// Neighbor coordinates wrap modulo the board dimensions.
    Wrapped,
}

const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

fn live_neighbors_in(
    cells: &[Cell],
    width: usize,
    height: usize,
    policy: BoundaryPolicy,
    row: usize,
    col: usize,
) -> u8 {
    let mut count = 0;
    for (dy, dx) in NEIGHBOR_OFFSETS {
        let (nr, nc) = match policy {
            BoundaryPolicy::Clamped => {
                let nr = row as isize + dy;
                let nc = col as isize + dx;
                if nr < 0 || nr >= height as isize || nc < 0 || nc >= width as isize {
                    continue;
                }
                (nr as usize, nc as usize)
            }
            BoundaryPolicy::Wrapped => (
                (row as isize + dy).rem_euclid(height as isize) as usize,
                (col as isize + dx).rem_euclid(width as isize) as usize,
            ),
        };
        if cells[nr * width + nc].is_alive() {
            count += 1;
        }
    }
    count
}

/// The birth/survival rule applied to one cell.
///
/// Alive with 2 or 3 live neighbors survives, dead with exactly 3 is born,
/// everything else dies or stays dead. The only rule in the workspace.
#[must_use]
pub const fn next_cell(state: Cell, live_neighbors: u8) -> Cell {
    match (state, live_neighbors) {
        (Cell::Alive, 2 | 3) | (Cell::Dead, 3) => Cell::Alive,
        _ => Cell::Dead,
    }
}

/// Owns a board and advances it one generation at a time.
#[derive(Debug, Clone)]
pub struct Simulation {
    grid: Grid,
    policy: BoundaryPolicy,
    scratch: Vec<Cell>,
    generation: Generation,
}

impl Simulation {
    #[must_use]
    pub fn new(grid: Grid, policy: BoundaryPolicy) -> Self {
        let scratch = vec![Cell::Dead; grid.cells.len()];
        Self {
            grid,
            policy,
            scratch,
            generation: Generation::zero(),
        }
    }

    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[must_use]
    pub const fn policy(&self) -> BoundaryPolicy {
        self.policy
    }

    #[must_use]
    pub const fn generation(&self) -> Generation {
        self.generation
    }

    /// Count the live cells surrounding `(row, col)` under the active
    /// policy. Never includes the cell itself; at most 8.
    ///
    /// Coordinates must be in bounds.
    #[must_use]
    pub fn live_neighbors(&self, row: usize, col: usize) -> u8 {
        live_neighbors_in(
            &self.grid.cells,
            self.grid.width,
            self.grid.height,
            self.policy,
            row,
            col,
        )
    }

    /// The cell's state in the next generation.
    #[must_use]
    pub fn next_state(&self, row: usize, col: usize) -> Cell {
        next_cell(self.grid.get(row, col), self.live_neighbors(row, col))
    }

    /// Advance the whole board by one generation.
    ///
    /// New states are derived from the snapshot taken at entry, so no cell
    /// observes a neighbor already updated this generation.
    pub fn advance(&mut self) {
        self.scratch.copy_from_slice(&self.grid.cells);
        let (width, height) = (self.grid.width, self.grid.height);
        for row in 0..height {
            for col in 0..width {
                let idx = row * width + col;
                let neighbors =
                    live_neighbors_in(&self.scratch, width, height, self.policy, row, col);
                self.grid.cells[idx] = next_cell(self.scratch[idx], neighbors);
            }
        }
        self.generation.0 += 1;
    }

    /// Give up the board, e.g. to hand it to persistence.
    #[must_use]
    pub fn into_grid(self) -> Grid {
        self.grid
    }
}

/// Generate a board with every cell independently and uniformly random.
pub fn random_board(
    width: usize,
    height: usize,
    rng: &mut SmallRng,
) -> Result<Grid, DimensionError> {
    let mut grid = Grid::dead(width, height)?;
    for cell in &mut grid.cells {
        *cell = if rng.random_bool(0.5) {
            Cell::Alive
        } else {
            Cell::Dead
        };
    }
    Ok(grid)
}

/// Runtime configuration consumed by the simulator shell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LifeConfig {
    /// Wrap the board toroidally instead of clamping at the edges.
    pub wrap: bool,
    /// Render live-neighbor counts instead of cell glyphs.
    pub debug: bool,
    /// Identifier of the board to load at startup.
    pub board: String,
    /// Optional RNG seed for reproducible random boards.
    pub rng_seed: Option<u64>,
    /// Width of the substitute board when the requested one is missing.
    pub fallback_width: usize,
    /// Height of the substitute board when the requested one is missing.
    pub fallback_height: usize,
    /// Pause in milliseconds around load/save messages.
    pub pause_millis: u64,
}

impl Default for LifeConfig {
    fn default() -> Self {
        Self {
            wrap: false,
            debug: false,
            board: "sample_board".to_owned(),
            rng_seed: None,
            fallback_width: 20,
            fallback_height: 20,
            pause_millis: 2000,
        }
    }
}

impl LifeConfig {
    /// Boundary policy selected by `wrap`.
    #[must_use]
    pub const fn boundary_policy(&self) -> BoundaryPolicy {
        if self.wrap {
            BoundaryPolicy::Wrapped
        } else {
            BoundaryPolicy::Clamped
        }
    }

    /// RNG for the run, reproducible when a seed was configured.
    #[must_use]
    pub fn seeded_rng(&self) -> SmallRng {
        match self.rng_seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => {
                let seed: u64 = rand::random();
                SmallRng::seed_from_u64(seed)
            }
        }
    }
}

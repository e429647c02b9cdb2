//! JSON-backed board persistence.
//!
//! Boards are stored one file per name under a root directory, as a JSON
//! matrix of `0`/`1` bits. Save followed by load reproduces the exact cell
//! matrix.

use lifeboard_core::{Cell, DimensionError, Grid, random_board};
use rand::rngs::SmallRng;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Canonical extension for stored boards.
pub const BOARD_EXTENSION: &str = ".json";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("board file '{0}' not found")]
    NotFound(PathBuf),
    #[error("malformed board file: {0}")]
    Format(#[from] serde_json::Error),
    #[error("board file contains invalid cell value {value}")]
    InvalidCell { value: u8 },
    #[error(transparent)]
    Dimension(#[from] DimensionError),
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Where a loaded board came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardOrigin {
    /// Read back from the store.
    Loaded,
    /// Substituted because the requested board was missing.
    Generated,
}

/// A directory of saved boards addressed by name.
#[derive(Debug, Clone)]
pub struct BoardStore {
    root: PathBuf,
}

impl BoardStore {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolve a board name to its path, appending the canonical extension
    /// unless the name already carries it.
    #[must_use]
    pub fn resolve(&self, name: &str) -> PathBuf {
        if name.ends_with(BOARD_EXTENSION) {
            self.root.join(name)
        } else {
            self.root.join(format!("{name}{BOARD_EXTENSION}"))
        }
    }

    /// Persist a grid under `name`, creating the root directory on demand.
    pub fn save(&self, name: &str, grid: &Grid) -> Result<PathBuf, StorageError> {
        let path = self.resolve(name);
        fs::create_dir_all(&self.root)?;
        let bits: Vec<Vec<u8>> = grid
            .rows()
            .map(|row| row.iter().map(|cell| cell.as_bit()).collect())
            .collect();
        fs::write(&path, serde_json::to_string(&bits)?)?;
        Ok(path)
    }

    /// Load the board saved under `name`.
    ///
    /// A missing file maps to [`StorageError::NotFound`]; every other I/O
    /// failure passes through unchanged.
    pub fn load(&self, name: &str) -> Result<Grid, StorageError> {
        let path = self.resolve(name);
        let payload = match fs::read_to_string(&path) {
            Ok(payload) => payload,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                return Err(StorageError::NotFound(path));
            }
            Err(err) => return Err(err.into()),
        };

        let bits: Vec<Vec<u8>> = serde_json::from_str(&payload)?;
        let mut rows = Vec::with_capacity(bits.len());
        for bit_row in bits {
            let mut row = Vec::with_capacity(bit_row.len());
            for value in bit_row {
                row.push(Cell::from_bit(value).ok_or(StorageError::InvalidCell { value })?);
            }
            rows.push(row);
        }
        Ok(Grid::from_rows(rows)?)
    }

    /// Load `name`, or substitute a freshly randomized `width x height`
    /// board when the file is missing. Only [`StorageError::NotFound`]
    /// triggers the substitution.
    pub fn load_or_generate(
        &self,
        name: &str,
        width: usize,
        height: usize,
        rng: &mut SmallRng,
    ) -> Result<(Grid, BoardOrigin), StorageError> {
        match self.load(name) {
            Ok(grid) => Ok((grid, BoardOrigin::Loaded)),
            Err(StorageError::NotFound(_)) => {
                let grid = random_board(width, height, rng)?;
                Ok((grid, BoardOrigin::Generated))
            }
            Err(err) => Err(err),
        }
    }
}

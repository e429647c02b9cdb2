//! The board-authoring mini-language and the builder that drives it.
//!
//! One line of input describes one board row. A session accumulates
//! finalized rows until the target row count is reached, then pads the
//! result into a finished [`Grid`].

use lifeboard_core::{Cell, DimensionError, Grid};
use rand::{Rng, rngs::SmallRng};
use std::iter::repeat_n;
use thiserror::Error;

/// Rejected authoring input, carrying the offending token.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GrammarError {
    #[error("nothing after dup")]
    MissingDupTarget,
    #[error("invalid line number given: {0}")]
    BadDupTarget(String),
    #[error("invalid multiplier given: {0}")]
    BadMultiplier(String),
    #[error("invalid number given: {0}")]
    BadLiteral(String),
}

/// Parse one authoring line into a row of cells.
///
/// `finalized` holds the rows already accepted this session; `dup` may only
/// reference one of them, so forward and self references fail. Keywords
/// match case-insensitively. The parser neither pads nor truncates — length
/// reconciliation belongs to the [`BoardBuilder`].
pub fn parse_row(
    input: &str,
    finalized: &[Vec<Cell>],
    width: usize,
    rng: &mut SmallRng,
) -> Result<Vec<Cell>, GrammarError> {
    let tokens: Vec<&str> = input.split_whitespace().collect();
    let Some(&head) = tokens.first() else {
        return Ok(Vec::new());
    };

    if head.eq_ignore_ascii_case("dup") {
        let target = *tokens.get(1).ok_or(GrammarError::MissingDupTarget)?;
        let index: usize = target
            .parse()
            .map_err(|_| GrammarError::BadDupTarget(target.to_owned()))?;
        // An independent copy: editing the duplicate later must not touch
        // the source row.
        return finalized
            .get(index)
            .cloned()
            .ok_or_else(|| GrammarError::BadDupTarget(target.to_owned()));
    }

    if head.eq_ignore_ascii_case("rand") {
        return Ok((0..width)
            .map(|_| {
                if rng.random_bool(0.5) {
                    Cell::Alive
                } else {
                    Cell::Dead
                }
            })
            .collect());
    }

    let mut row = Vec::new();
    for token in tokens {
        if let Some((count, bit)) = token.split_once(['x', 'X']) {
            let count: usize = count
                .parse()
                .map_err(|_| GrammarError::BadMultiplier(token.to_owned()))?;
            let cell =
                parse_bit(bit).ok_or_else(|| GrammarError::BadMultiplier(token.to_owned()))?;
            row.extend(repeat_n(cell, count));
        } else {
            let cell = parse_bit(token).ok_or_else(|| GrammarError::BadLiteral(token.to_owned()))?;
            row.push(cell);
        }
    }
    Ok(row)
}

fn parse_bit(token: &str) -> Option<Cell> {
    token.parse::<u8>().ok().and_then(Cell::from_bit)
}

/// Assembles an authored board row by row, then applies symmetric padding.
#[derive(Debug, Clone)]
pub struct BoardBuilder {
    rows: usize,
    cols: usize,
    pad: usize,
    finalized: Vec<Vec<Cell>>,
}

impl BoardBuilder {
    /// Target `rows x cols` interior with a `pad`-wide dead border.
    #[must_use]
    pub fn new(rows: usize, cols: usize, pad: usize) -> Self {
        Self {
            rows,
            cols,
            pad,
            finalized: Vec::with_capacity(rows),
        }
    }

    #[must_use]
    pub const fn target_rows(&self) -> usize {
        self.rows
    }

    #[must_use]
    pub const fn target_cols(&self) -> usize {
        self.cols
    }

    /// Index of the row currently being authored.
    #[must_use]
    pub fn current_row(&self) -> usize {
        self.finalized.len()
    }

    /// Rows accepted so far, in order.
    #[must_use]
    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.finalized
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.finalized.len() >= self.rows
    }

    /// Parse one input line and finalize it as the next row.
    ///
    /// On a grammar error the builder is unchanged and the same row stays
    /// current. Accepted rows are silently reconciled to the target column
    /// count: short rows gain trailing dead cells, long rows lose their
    /// tail.
    pub fn push_row(&mut self, input: &str, rng: &mut SmallRng) -> Result<(), GrammarError> {
        let mut row = parse_row(input, &self.finalized, self.cols, rng)?;
        row.resize(self.cols, Cell::Dead);
        self.finalized.push(row);
        Ok(())
    }

    /// Surround the authored rows with the configured border of dead cells,
    /// producing the final `(rows + 2*pad) x (cols + 2*pad)` grid.
    pub fn finish(self) -> Result<Grid, DimensionError> {
        let full_width = self.cols + 2 * self.pad;
        let blank = vec![Cell::Dead; full_width];

        let mut rows = Vec::with_capacity(self.finalized.len() + 2 * self.pad);
        rows.extend(repeat_n(blank.clone(), self.pad));
        for row in self.finalized {
            let mut padded = Vec::with_capacity(full_width);
            padded.extend(repeat_n(Cell::Dead, self.pad));
            padded.extend(row);
            padded.extend(repeat_n(Cell::Dead, self.pad));
            rows.push(padded);
        }
        rows.extend(repeat_n(blank, self.pad));

        Grid::from_rows(rows)
    }
}

use std::path::Path;

use thiserror::Error;
use tracing::debug;

use crate::board::{Board, Cell, ShapeError};

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot read {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error(transparent)]
    Shape(#[from] ShapeError),
}

/// Parse a textual board.
///
/// `'1'` is an open cell, `'0'` a blocked one; every other character is
/// ignored without consuming a column, so boards may be written with spacing.
/// Lines containing no recognized symbol (e.g. a trailing newline) contribute
/// no row. Rows must end up with equal cell counts, and at least one row
/// with at least one cell must remain.
pub fn parse_board(text: &str) -> Result<Board, LoadError> {
    let mut rows = Vec::new();
    for line in text.lines() {
        let row: Vec<Cell> = line
            .chars()
            .filter_map(|sym| match sym {
                '1' => Some(Cell::Open),
                '0' => Some(Cell::Blocked),
                _ => None,
            })
            .collect();
        if !row.is_empty() {
            rows.push(row);
        }
    }
    Ok(Board::from_rows(rows)?)
}

/// Read and parse a board file.
pub fn load_board(path: impl AsRef<Path>) -> Result<Board, LoadError> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let board = parse_board(&text)?;
    debug!(
        rows = board.rows(),
        cols = board.cols(),
        usable = board.usable_count(),
        "loaded board"
    );
    Ok(board)
}

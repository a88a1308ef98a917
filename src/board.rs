use thiserror::Error;

/// State of a single board cell.
///
/// `RookOnly` / `BishopOnly` only appear during bivariate decomposition:
/// a cell whose geometry was taken by one piece kind may still be eligible
/// for the other kind.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Cell {
    /// Unusable by any piece.
    Blocked,
    /// May receive either a rook or a bishop (never both).
    Open,
    /// May receive a rook only.
    RookOnly,
    /// May receive a bishop only.
    BishopOnly,
}

impl Cell {
    #[inline]
    pub fn is_usable(self) -> bool {
        self != Cell::Blocked
    }

    #[inline]
    pub fn allows_rook(self) -> bool {
        matches!(self, Cell::Open | Cell::RookOnly)
    }

    #[inline]
    pub fn allows_bishop(self) -> bool {
        matches!(self, Cell::Open | Cell::BishopOnly)
    }
}

/// Traversal order used to pick the cell a decomposition step branches on.
///
/// The polynomial itself does not depend on the order (tests check this);
/// `RowMajor` is the documented default.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ScanOrder {
    RowMajor,
    ColumnMajor,
}

#[derive(Debug, Error)]
pub enum ShapeError {
    #[error("board has no rows")]
    Empty,
    #[error("board row {row} has {found} cells, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
}

/// A rectangular grid of cells.
///
/// Boards are value objects: every decomposition branch clones its parent
/// board and mutates the copy, so no board is ever shared mutably.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Board {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Build a board from row vectors, validating rectangularity and
    /// non-emptiness. The decomposition engines assume both.
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Result<Self, ShapeError> {
        let Some(first) = rows.first() else {
            return Err(ShapeError::Empty);
        };
        let cols = first.len();
        if cols == 0 {
            return Err(ShapeError::Empty);
        }
        for (i, row) in rows.iter().enumerate() {
            if row.len() != cols {
                return Err(ShapeError::Ragged {
                    row: i,
                    expected: cols,
                    found: row.len(),
                });
            }
        }
        let n_rows = rows.len();
        let cells = rows.into_iter().flatten().collect();
        Ok(Self {
            rows: n_rows,
            cols,
            cells,
        })
    }

    /// An `rows × cols` board with every cell in the given state.
    pub fn filled(rows: usize, cols: usize, state: Cell) -> Self {
        assert!(rows > 0 && cols > 0, "board dimensions must be positive");
        Self {
            rows,
            cols,
            cells: vec![state; rows * cols],
        }
    }

    /// A fully open `n × n` board.
    pub fn open(n: usize) -> Self {
        Self::filled(n, n, Cell::Open)
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    pub fn cell(&self, r: usize, c: usize) -> Cell {
        self.cells[r * self.cols + c]
    }

    #[inline]
    pub fn set(&mut self, r: usize, c: usize, state: Cell) {
        self.cells[r * self.cols + c] = state;
    }

    /// Number of non-`Blocked` cells.
    pub fn usable_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_usable()).count()
    }

    /// First non-`Blocked` cell in the given scan order, as `(row, col)`.
    pub fn first_usable(&self, order: ScanOrder) -> Option<(usize, usize)> {
        match order {
            ScanOrder::RowMajor => {
                for r in 0..self.rows {
                    for c in 0..self.cols {
                        if self.cell(r, c).is_usable() {
                            return Some((r, c));
                        }
                    }
                }
                None
            }
            ScanOrder::ColumnMajor => {
                for c in 0..self.cols {
                    for r in 0..self.rows {
                        if self.cell(r, c).is_usable() {
                            return Some((r, c));
                        }
                    }
                }
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scan_orders_pick_different_cells() {
        // . X
        // X .
        let board = Board::from_rows(vec![
            vec![Cell::Blocked, Cell::Open],
            vec![Cell::Open, Cell::Blocked],
        ])
        .unwrap();
        assert_eq!(board.first_usable(ScanOrder::RowMajor), Some((0, 1)));
        assert_eq!(board.first_usable(ScanOrder::ColumnMajor), Some((1, 0)));
        assert_eq!(board.usable_count(), 2);
    }

    #[test]
    fn ragged_rows_are_rejected() {
        let err = Board::from_rows(vec![vec![Cell::Open, Cell::Open], vec![Cell::Open]]);
        assert!(matches!(
            err,
            Err(ShapeError::Ragged {
                row: 1,
                expected: 2,
                found: 1
            })
        ));
        assert!(matches!(Board::from_rows(vec![]), Err(ShapeError::Empty)));
    }
}

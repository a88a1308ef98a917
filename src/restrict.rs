use crate::board::{Board, Cell};

/// Movement geometry of a piece kind, expressed as board-mutating
/// restriction operators.
///
/// The decomposition engines are generic over this trait; all piece-specific
/// knowledge lives here, not in the recursion.
pub trait Restriction {
    /// Block every cell the piece placed at `(r, c)` attacks, plus the cell
    /// itself. Used by the univariate engine, where only one piece kind
    /// exists and taken geometry is simply unusable.
    fn restrict(&self, board: &mut Board, r: usize, c: usize);

    /// Occupy `(r, c)` with this piece for the bivariate engine: the cell
    /// itself becomes `Blocked`, and over the rest of the footprint cells
    /// still eligible for the other piece kind are demoted rather than
    /// blocked outright.
    fn occupy(&self, board: &mut Board, r: usize, c: usize);
}

/// Rook geometry: the footprint is row `r` plus column `c`.
pub struct RookMoves;

/// Bishop geometry: the footprint is the four diagonal rays through `(r, c)`
/// plus the cell itself. Rays are unblocked; any shared diagonal attacks.
pub struct BishopMoves;

impl Restriction for RookMoves {
    fn restrict(&self, board: &mut Board, r: usize, c: usize) {
        sweep_rook(board, r, c, |_| Cell::Blocked);
    }

    fn occupy(&self, board: &mut Board, r: usize, c: usize) {
        // Open cells in the row/column keep their bishop eligibility.
        sweep_rook(board, r, c, |cell| match cell {
            Cell::Open => Cell::BishopOnly,
            Cell::RookOnly => Cell::Blocked,
            other => other,
        });
        board.set(r, c, Cell::Blocked);
    }
}

impl Restriction for BishopMoves {
    fn restrict(&self, board: &mut Board, r: usize, c: usize) {
        sweep_bishop(board, r, c, |_| Cell::Blocked);
    }

    fn occupy(&self, board: &mut Board, r: usize, c: usize) {
        sweep_bishop(board, r, c, |cell| match cell {
            Cell::Open => Cell::RookOnly,
            Cell::BishopOnly => Cell::Blocked,
            other => other,
        });
        board.set(r, c, Cell::Blocked);
    }
}

fn sweep_rook(board: &mut Board, r: usize, c: usize, f: impl Fn(Cell) -> Cell) {
    for col in 0..board.cols() {
        board.set(r, col, f(board.cell(r, col)));
    }
    for row in 0..board.rows() {
        // (r, c) itself was already visited by the row sweep.
        if row != r {
            board.set(row, c, f(board.cell(row, c)));
        }
    }
}

const DIAG_STEPS: [(isize, isize); 4] = [(1, 1), (1, -1), (-1, -1), (-1, 1)];

fn sweep_bishop(board: &mut Board, r: usize, c: usize, f: impl Fn(Cell) -> Cell) {
    for (dr, dc) in DIAG_STEPS {
        let mut row = r as isize + dr;
        let mut col = c as isize + dc;
        while row >= 0 && col >= 0 && (row as usize) < board.rows() && (col as usize) < board.cols()
        {
            let (ru, cu) = (row as usize, col as usize);
            board.set(ru, cu, f(board.cell(ru, cu)));
            row += dr;
            col += dc;
        }
    }
    board.set(r, c, f(board.cell(r, c)));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Cell::*;

    fn board_3x3(rows: [[Cell; 3]; 3]) -> Board {
        Board::from_rows(rows.into_iter().map(|r| r.to_vec()).collect()).unwrap()
    }

    #[test]
    fn rook_restrict_blocks_row_and_column() {
        let mut b = Board::open(3);
        RookMoves.restrict(&mut b, 1, 1);
        for i in 0..3 {
            assert_eq!(b.cell(1, i), Blocked);
            assert_eq!(b.cell(i, 1), Blocked);
        }
        assert_eq!(b.cell(0, 0), Open);
        assert_eq!(b.cell(2, 2), Open);
    }

    #[test]
    fn bishop_restrict_blocks_diagonals_and_cell() {
        let mut b = Board::open(3);
        BishopMoves.restrict(&mut b, 1, 1);
        for (r, c) in [(0, 0), (0, 2), (1, 1), (2, 0), (2, 2)] {
            assert_eq!(b.cell(r, c), Blocked);
        }
        for (r, c) in [(0, 1), (1, 0), (1, 2), (2, 1)] {
            assert_eq!(b.cell(r, c), Open);
        }
    }

    #[test]
    fn rook_occupy_demotes_but_keeps_bishop_eligibility() {
        let mut b = board_3x3([
            [Open, RookOnly, BishopOnly],
            [Open, Open, Open],
            [Open, RookOnly, Open],
        ]);
        RookMoves.occupy(&mut b, 0, 1);
        // The occupied cell is gone for good.
        assert_eq!(b.cell(0, 1), Blocked);
        // Row footprint: Open keeps bishop access, exclusive-other is untouched.
        assert_eq!(b.cell(0, 0), BishopOnly);
        assert_eq!(b.cell(0, 2), BishopOnly);
        // Column footprint: RookOnly had nothing left to preserve.
        assert_eq!(b.cell(1, 1), BishopOnly);
        assert_eq!(b.cell(2, 1), Blocked);
        // Off-footprint cells are untouched.
        assert_eq!(b.cell(1, 0), Open);
        assert_eq!(b.cell(2, 2), Open);
    }

    #[test]
    fn bishop_occupy_demotes_but_keeps_rook_eligibility() {
        let mut b = board_3x3([
            [Open, Open, BishopOnly],
            [Open, Open, Open],
            [RookOnly, Open, Open],
        ]);
        BishopMoves.occupy(&mut b, 1, 1);
        assert_eq!(b.cell(1, 1), Blocked);
        assert_eq!(b.cell(0, 0), RookOnly);
        assert_eq!(b.cell(2, 2), RookOnly);
        assert_eq!(b.cell(0, 2), Blocked);
        // RookOnly on the diagonal keeps its rook access.
        assert_eq!(b.cell(2, 0), RookOnly);
        // Orthogonal neighbours are not bishop footprint.
        assert_eq!(b.cell(0, 1), Open);
        assert_eq!(b.cell(1, 0), Open);
    }
}

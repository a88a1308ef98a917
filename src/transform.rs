use crate::board::{Board, Cell};

/// Remap a board into diagonal coordinates.
///
/// A usable cell `(r, c)` of an `R × C` board lands on
/// `(r + c, (R - 1 - r) + c)` of an `(R + C - 1) × (R + C - 1)` board; every
/// other cell is blocked. Two cells of the original share a diagonal exactly
/// when their images share a row or column, so the rook decomposition of the
/// image equals the bishop decomposition of the original. The mapping is
/// injective, so cell states carry over unchanged.
pub fn diagonalize(board: &Board) -> Board {
    let n = board.rows() + board.cols() - 1;
    let mut out = Board::filled(n, n, Cell::Blocked);
    for r in 0..board.rows() {
        for c in 0..board.cols() {
            let cell = board.cell(r, c);
            if cell.is_usable() {
                out.set(r + c, (board.rows() - 1 - r) + c, cell);
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diagonal_image_preserves_usable_count() {
        let board = Board::open(3);
        let image = diagonalize(&board);
        assert_eq!(image.rows(), 5);
        assert_eq!(image.cols(), 5);
        assert_eq!(image.usable_count(), board.usable_count());
    }

    #[test]
    fn same_diagonal_maps_to_same_row() {
        let board = Board::open(3);
        let image = diagonalize(&board);
        // (0,1) and (1,0) share the positive diagonal r + c = 1.
        assert_eq!(image.cell(1, 3), Cell::Open);
        assert_eq!(image.cell(1, 1), Cell::Open);
    }
}

//! The recursive cell-decomposition engines.
//!
//! Both engines pick the first usable cell in the scan order and sum the
//! sub-polynomials of "piece placed here" and "cell never used" boards.
//! Each branch clones the board it mutates, so branches never alias. Depth
//! is bounded by the usable-cell count (every branch strictly reduces it),
//! which also guarantees termination; the branching itself is exponential
//! and deliberately unmemoized.

use crate::board::{Board, Cell, ScanOrder};
use crate::multinomial::Multinomial;
use crate::poly::Polynomial;
use crate::restrict::{BishopMoves, Restriction, RookMoves};
use crate::transform::diagonalize;

/// Single-piece decomposition, generic over the piece's geometry.
pub fn decompose(board: &Board, moves: &impl Restriction, order: ScanOrder) -> Polynomial {
    let Some((r, c)) = board.first_usable(order) else {
        // No usable cell: only the empty placement.
        return Polynomial::one();
    };
    if board.usable_count() == 1 {
        // One usable cell: place or don't.
        return Polynomial::from_coeffs(vec![1, 1]);
    }

    let mut placed = board.clone();
    moves.restrict(&mut placed, r, c);
    let mut with_piece = decompose(&placed, moves, order);
    with_piece.shift_up();

    let mut skipped = board.clone();
    skipped.set(r, c, Cell::Blocked);
    let without_piece = decompose(&skipped, moves, order);

    with_piece + without_piece
}

/// Two-piece decomposition: rooks and bishops simultaneously, with per-cell
/// eligibility tracking.
///
/// Three branches per step: skip the cell, place a rook (unless the cell is
/// bishop-exclusive), place a bishop (unless rook-exclusive). Occupation
/// demotes footprint cells instead of blocking them, so geometry taken by
/// one piece kind leaves the other kind's eligibility intact wherever an
/// alternative existed.
pub fn decompose2(
    board: &Board,
    rook: &impl Restriction,
    bishop: &impl Restriction,
    order: ScanOrder,
) -> Multinomial {
    let Some((r, c)) = board.first_usable(order) else {
        return Multinomial::one();
    };
    if board.usable_count() == 1 {
        return match board.cell(r, c) {
            Cell::RookOnly => Multinomial::from_grid(vec![vec![1, 1]]),
            Cell::BishopOnly => Multinomial::from_grid(vec![vec![1, 0], vec![1, 0]]),
            // `first_usable` never yields a blocked cell, so this is `Open`:
            // either piece alone fits, both at once do not.
            _ => Multinomial::from_grid(vec![vec![1, 1], vec![1, 0]]),
        };
    }
    let state = board.cell(r, c);

    let mut skipped = board.clone();
    skipped.set(r, c, Cell::Blocked);
    let mut total = decompose2(&skipped, rook, bishop, order);

    if state.allows_rook() {
        let mut occupied = board.clone();
        rook.occupy(&mut occupied, r, c);
        let mut with_rook = decompose2(&occupied, rook, bishop, order);
        with_rook.shift_rook();
        total = total + with_rook;
    }
    if state.allows_bishop() {
        let mut occupied = board.clone();
        bishop.occupy(&mut occupied, r, c);
        let mut with_bishop = decompose2(&occupied, rook, bishop, order);
        with_bishop.shift_bishop();
        total = total + with_bishop;
    }
    total
}

/// The board's rook polynomial, row-major scan order.
pub fn rook_polynomial(board: &Board) -> Polynomial {
    decompose(board, &RookMoves, ScanOrder::RowMajor)
}

/// The board's bishop polynomial via the direct diagonal operator.
pub fn bishop_polynomial(board: &Board) -> Polynomial {
    decompose(board, &BishopMoves, ScanOrder::RowMajor)
}

/// The board's bishop polynomial via diagonalization: rook-decompose the
/// diagonal image. Agrees with [`bishop_polynomial`] on every board.
pub fn bishop_polynomial_via_diagonal(board: &Board) -> Polynomial {
    decompose(&diagonalize(board), &RookMoves, ScanOrder::RowMajor)
}

/// The joint rook/bishop multinomial, row-major scan order.
pub fn placement_multinomial(board: &Board) -> Multinomial {
    decompose2(board, &RookMoves, &BishopMoves, ScanOrder::RowMajor)
}

//! Text rendering for boards and their polynomials.

use std::fmt;

use crate::board::Board;
use crate::multinomial::Multinomial;
use crate::poly::Polynomial;

/// Board diagram: two characters per cell, `[]` for any usable cell, blanks
/// for a blocked one.
pub fn board_diagram(board: &Board) -> String {
    let mut out = String::new();
    for r in 0..board.rows() {
        for c in 0..board.cols() {
            out.push_str(if board.cell(r, c).is_usable() {
                "[]"
            } else {
                "  "
            });
        }
        out.push('\n');
    }
    out
}

impl fmt::Display for Polynomial {
    /// Ascending powers, zero terms suppressed. The zero polynomial renders
    /// as `0x^0` rather than as nothing.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (power, &coeff) in self.coeffs().iter().enumerate() {
            if coeff == 0 {
                continue;
            }
            if !first {
                write!(f, " + ")?;
            }
            write!(f, "{coeff}x^{power}")?;
            first = false;
        }
        if first {
            write!(f, "0x^0")?;
        }
        Ok(())
    }
}

impl fmt::Display for Multinomial {
    /// Bishop-power major, rook-power minor; zero terms suppressed.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for b in 0..self.bishop_powers() {
            for r in 0..self.rook_powers() {
                let coeff = self.coeff(b, r);
                if coeff == 0 {
                    continue;
                }
                if !first {
                    write!(f, " + ")?;
                }
                write!(f, "{coeff}(r^{r})(b^{b})")?;
                first = false;
            }
        }
        if first {
            write!(f, "0(r^0)(b^0)")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Cell;

    #[test]
    fn diagram_marks_usable_cells() {
        let board = Board::from_rows(vec![
            vec![Cell::Blocked, Cell::Open, Cell::Blocked],
            vec![Cell::Open, Cell::Open, Cell::Open],
            vec![Cell::Blocked, Cell::Open, Cell::Blocked],
        ])
        .unwrap();
        assert_eq!(board_diagram(&board), "  []  \n[][][]\n  []  \n");
    }

    #[test]
    fn polynomial_display_suppresses_zeros_uniformly() {
        let p = Polynomial::from_coeffs(vec![1, 0, 4]);
        assert_eq!(p.to_string(), "1x^0 + 4x^2");
        assert_eq!(Polynomial::from_coeffs(vec![0, 0]).to_string(), "0x^0");
    }

    #[test]
    fn multinomial_display_is_bishop_major() {
        let m = Multinomial::from_grid(vec![vec![1, 2], vec![3, 0]]);
        assert_eq!(m.to_string(), "1(r^0)(b^0) + 2(r^1)(b^0) + 3(r^0)(b^1)");
    }
}

use std::ops::Add;

use crate::poly::Polynomial;

/// A placement-count generating function in two variables.
///
/// `grid[b][r]` counts simultaneous placements of `b` mutually non-attacking
/// bishops and `r` mutually non-attacking rooks on disjoint cells. The grid
/// is kept rectangular; trailing all-zero rows or columns carry no meaning,
/// so equality is defined up to zero-extension.
#[derive(Clone, Debug)]
pub struct Multinomial {
    grid: Vec<Vec<u64>>,
}

impl Multinomial {
    /// The constant multinomial `1` (only the empty placement).
    #[inline]
    pub fn one() -> Self {
        Self {
            grid: vec![vec![1]],
        }
    }

    /// Build from a rectangular grid, bishop-power major.
    pub fn from_grid(grid: Vec<Vec<u64>>) -> Self {
        debug_assert!(!grid.is_empty() && !grid[0].is_empty());
        debug_assert!(grid.iter().all(|row| row.len() == grid[0].len()));
        Self { grid }
    }

    /// Number of bishop-power rows currently stored.
    #[inline]
    pub fn bishop_powers(&self) -> usize {
        self.grid.len()
    }

    /// Number of rook-power columns currently stored.
    #[inline]
    pub fn rook_powers(&self) -> usize {
        self.grid[0].len()
    }

    /// Coefficient at `(bishop_power, rook_power)`, zero beyond the grid.
    #[inline]
    pub fn coeff(&self, bishop_power: usize, rook_power: usize) -> u64 {
        self.grid
            .get(bishop_power)
            .and_then(|row| row.get(rook_power))
            .copied()
            .unwrap_or(0)
    }

    /// Multiply by the rook variable: prepend a zero column.
    pub fn shift_rook(&mut self) {
        for row in &mut self.grid {
            row.insert(0, 0);
        }
    }

    /// Multiply by the bishop variable: prepend a zero row.
    pub fn shift_bishop(&mut self) {
        self.grid.insert(0, vec![0; self.rook_powers()]);
    }

    /// Zero-extend to at least `bishop_powers × rook_powers`. The semantic
    /// value is unchanged.
    pub fn normalize_to(&mut self, bishop_powers: usize, rook_powers: usize) {
        let cols = self.rook_powers().max(rook_powers);
        for row in &mut self.grid {
            row.resize(cols, 0);
        }
        while self.grid.len() < bishop_powers {
            self.grid.push(vec![0; cols]);
        }
    }

    /// The rook-only polynomial: coefficients at bishop power zero.
    ///
    /// On a board with no `BishopOnly` cells this is exactly the board's rook
    /// polynomial; in general it is the rook polynomial of the board with
    /// `BishopOnly` cells treated as blocked.
    pub fn rook_slice(&self) -> Polynomial {
        Polynomial::from_coeffs(self.grid[0].clone())
    }

    /// The bishop-only polynomial: coefficients at rook power zero.
    pub fn bishop_slice(&self) -> Polynomial {
        Polynomial::from_coeffs(self.grid.iter().map(|row| row[0]).collect())
    }

    /// Total number of placements of any composition.
    pub fn coeff_sum(&self) -> u64 {
        self.grid.iter().flatten().sum()
    }
}

impl Add for Multinomial {
    type Output = Multinomial;

    /// Element-wise sum after zero-extending both operands to a common shape.
    fn add(mut self, mut rhs: Multinomial) -> Multinomial {
        let rows = self.bishop_powers().max(rhs.bishop_powers());
        let cols = self.rook_powers().max(rhs.rook_powers());
        self.normalize_to(rows, cols);
        rhs.normalize_to(rows, cols);
        for (a, b) in self.grid.iter_mut().zip(rhs.grid.iter()) {
            for (x, y) in a.iter_mut().zip(b.iter()) {
                *x += y;
            }
        }
        self
    }
}

impl PartialEq for Multinomial {
    /// Equality up to zero-extension.
    fn eq(&self, other: &Multinomial) -> bool {
        let rows = self.bishop_powers().max(other.bishop_powers());
        let cols = self.rook_powers().max(other.rook_powers());
        for b in 0..rows {
            for r in 0..cols {
                if self.coeff(b, r) != other.coeff(b, r) {
                    return false;
                }
            }
        }
        true
    }
}

impl Eq for Multinomial {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalization_is_semantically_neutral() {
        let m = Multinomial::from_grid(vec![vec![1, 2], vec![3, 0]]);
        let mut padded = m.clone();
        padded.normalize_to(4, 5);
        assert_eq!(m, padded);
        assert_eq!(padded.coeff_sum(), 6);
    }

    #[test]
    fn addition_is_commutative_and_associative() {
        let a = Multinomial::from_grid(vec![vec![1, 2]]);
        let b = Multinomial::from_grid(vec![vec![1], vec![4]]);
        let c = Multinomial::from_grid(vec![vec![0, 0, 5]]);
        assert_eq!(a.clone() + b.clone(), b.clone() + a.clone());
        assert_eq!(
            (a.clone() + b.clone()) + c.clone(),
            a.clone() + (b.clone() + c.clone())
        );
    }

    #[test]
    fn shifts_move_powers() {
        let mut m = Multinomial::from_grid(vec![vec![7]]);
        m.shift_rook();
        assert_eq!(m.coeff(0, 1), 7);
        m.shift_bishop();
        assert_eq!(m.coeff(1, 1), 7);
        assert_eq!(m.coeff(0, 0), 0);
    }
}

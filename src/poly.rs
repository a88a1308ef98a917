use std::ops::Add;

/// A placement-count generating function in one variable.
///
/// Coefficients are stored lowest power first; the coefficient at index `k`
/// counts placements of `k` mutually non-attacking pieces. Counts are never
/// negative, so coefficients are unsigned.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Polynomial {
    coeffs: Vec<u64>,
}

impl Polynomial {
    /// The constant polynomial `1` (only the empty placement).
    #[inline]
    pub fn one() -> Self {
        Self { coeffs: vec![1] }
    }

    pub fn from_coeffs(coeffs: Vec<u64>) -> Self {
        Self { coeffs }
    }

    #[inline]
    pub fn coeffs(&self) -> &[u64] {
        &self.coeffs
    }

    /// Coefficient at `power`, zero beyond the stored length.
    #[inline]
    pub fn coeff(&self, power: usize) -> u64 {
        self.coeffs.get(power).copied().unwrap_or(0)
    }

    /// Multiply by the formal variable: every placement gains one piece.
    pub fn shift_up(&mut self) {
        self.coeffs.insert(0, 0);
    }

    /// Total number of placements of any size, the value at 1.
    pub fn coeff_sum(&self) -> u64 {
        self.coeffs.iter().sum()
    }
}

impl Add for Polynomial {
    type Output = Polynomial;

    /// Coefficient-wise sum; the shorter operand is zero-extended.
    fn add(mut self, mut rhs: Polynomial) -> Polynomial {
        if self.coeffs.len() < rhs.coeffs.len() {
            std::mem::swap(&mut self, &mut rhs);
        }
        for (i, c) in rhs.coeffs.iter().enumerate() {
            self.coeffs[i] += c;
        }
        self
    }
}

//! Rook and bishop placement polynomials for partially-restricted boards.
//!
//! The coefficient at power `k` of a board's rook polynomial counts the ways
//! to place `k` mutually non-attacking rooks on its usable cells; the bishop
//! polynomial is the analogue over diagonals, and the joint multinomial
//! counts rook/bishop placements sharing a board. Everything is computed by
//! plain recursive cell decomposition, with no memoization.

pub mod board;
pub mod decompose;
pub mod loader;
pub mod multinomial;
pub mod poly;
pub mod render;
pub mod restrict;
pub mod transform;

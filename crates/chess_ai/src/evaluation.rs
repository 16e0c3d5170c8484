//! Static position evaluation
//!
//! Material only: no piece-square tables, mobility, king safety or pawn
//! structure.

mod material;

pub use material::evaluate_material;

use crate::board::SearchBoard;
use crate::types::Color;

/// Score of `board` from `perspective`'s point of view, in centipawns
#[inline]
pub fn evaluate<B: SearchBoard + ?Sized>(board: &B, perspective: Color) -> i32 {
    evaluate_material(board, perspective)
}

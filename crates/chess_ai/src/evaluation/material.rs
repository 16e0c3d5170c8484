//! Material evaluation
//!
//! Evaluates the material balance of a position by counting piece values.

use crate::board::SearchBoard;
use crate::types::{Color, Square};

/// Sum of own piece values minus opponent piece values
pub fn evaluate_material<B: SearchBoard + ?Sized>(board: &B, perspective: Color) -> i32 {
    Square::all()
        .filter_map(|square| board.get_piece(square))
        .map(|piece| {
            let value = piece.kind.value();
            if piece.color == perspective {
                value
            } else {
                -value
            }
        })
        .sum()
}

//! Pawn move generation
//!
//! ## Pawn Movement Rules
//!
//! - **Forward push**: one square toward the opponent, destination empty
//! - **Double push**: two squares if the pawn has not moved and both squares
//!   are empty
//! - **Captures**: one square diagonally forward onto an opponent piece
//! - **Promotion**: applied by the board when the pawn lands on the last row

use crate::board::{Board, SearchBoard};
use crate::types::{Piece, Square};

/// Pseudo-legal pawn destinations
pub(super) fn pawn_moves(board: &Board, pawn: &Piece) -> Vec<Square> {
    let mut moves = Vec::with_capacity(4);
    let dir = pawn.color.pawn_direction();
    let from = pawn.square;

    if let Some(one) = from.offset(dir, 0) {
        if board.is_empty_square(one) {
            moves.push(one);
            if !pawn.has_moved {
                if let Some(two) = one.offset(dir, 0) {
                    if board.is_empty_square(two) {
                        moves.push(two);
                    }
                }
            }
        }
    }

    for target in pawn_attacks(from, pawn) {
        if board
            .get_piece(target)
            .is_some_and(|victim| victim.color != pawn.color)
        {
            moves.push(target);
        }
    }

    moves
}

/// Squares a pawn on `from` attacks
pub(super) fn pawn_attacks(from: Square, pawn: &Piece) -> impl Iterator<Item = Square> {
    let dir = pawn.color.pawn_direction();
    [-1i8, 1]
        .into_iter()
        .filter_map(move |d_col| from.offset(dir, d_col))
}

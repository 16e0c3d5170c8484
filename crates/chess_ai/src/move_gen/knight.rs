//! Knight move generation
//!
//! Knights jump in an L shape and are never blocked; the only filter is that
//! the destination must not hold a friendly piece.

use crate::board::{Board, SearchBoard};
use crate::constants::KNIGHT_DELTAS;
use crate::types::{Piece, Square};

pub(super) fn knight_moves(board: &Board, knight: &Piece) -> Vec<Square> {
    KNIGHT_DELTAS
        .iter()
        .filter_map(|&(d_row, d_col)| knight.square.offset(d_row, d_col))
        .filter(|&to| !board.get_piece(to).is_some_and(|p| p.color == knight.color))
        .collect()
}

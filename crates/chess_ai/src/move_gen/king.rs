//! King move generation
//!
//! ## King Movement Rules
//!
//! - One square in any direction, not onto a friendly piece
//! - Castling: two files toward a rook when neither the king nor that rook
//!   has moved and every square between them is empty
//!
//! Whether the king starts in, passes through or lands in check is decided by
//! the legality oracle, not here.

use crate::board::{Board, SearchBoard};
use crate::constants::KING_DELTAS;
use crate::types::{Piece, PieceKind, Square};

pub(super) fn king_moves(board: &Board, king: &Piece) -> Vec<Square> {
    let mut moves: Vec<Square> = KING_DELTAS
        .iter()
        .filter_map(|&(d_row, d_col)| king.square.offset(d_row, d_col))
        .filter(|&to| !board.get_piece(to).is_some_and(|p| p.color == king.color))
        .collect();

    moves.extend(castling_moves(board, king));
    moves
}

fn castling_moves(board: &Board, king: &Piece) -> Vec<Square> {
    let home = king.color.home_row();
    if king.has_moved || king.square != Square::at(home, 4) {
        return Vec::new();
    }

    let mut moves = Vec::with_capacity(2);
    for (rook_col, king_to_col) in [(7u8, 6u8), (0u8, 2u8)] {
        let rook_ready = board.get_piece(Square::at(home, rook_col)).is_some_and(|rook| {
            rook.kind == PieceKind::Rook && rook.color == king.color && !rook.has_moved
        });
        let (low, high) = if rook_col > 4 { (5, rook_col) } else { (rook_col + 1, 4) };
        let path_clear = (low..high).all(|col| board.is_empty_square(Square::at(home, col)));

        if rook_ready && path_clear {
            moves.push(Square::at(home, king_to_col));
        }
    }
    moves
}

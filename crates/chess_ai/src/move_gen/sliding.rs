//! Sliding piece move generation (bishop, rook, queen)
//!
//! Each ray is walked square by square until it leaves the board or hits a
//! piece. An opponent piece ends the ray as a capture, a friendly piece ends
//! it without one.

use crate::board::{Board, SearchBoard};
use crate::constants::{BISHOP_DIRS, QUEEN_DIRS, ROOK_DIRS};
use crate::types::{Piece, Square};

pub(super) fn bishop_moves(board: &Board, piece: &Piece) -> Vec<Square> {
    slide(board, piece, &BISHOP_DIRS)
}

pub(super) fn rook_moves(board: &Board, piece: &Piece) -> Vec<Square> {
    slide(board, piece, &ROOK_DIRS)
}

pub(super) fn queen_moves(board: &Board, piece: &Piece) -> Vec<Square> {
    slide(board, piece, &QUEEN_DIRS)
}

fn slide(board: &Board, piece: &Piece, dirs: &[(i8, i8)]) -> Vec<Square> {
    let mut moves = Vec::new();
    for &(d_row, d_col) in dirs {
        let mut current = piece.square;
        while let Some(next) = current.offset(d_row, d_col) {
            match board.get_piece(next) {
                None => moves.push(next),
                Some(other) => {
                    if other.color != piece.color {
                        moves.push(next);
                    }
                    break;
                }
            }
            current = next;
        }
    }
    moves
}

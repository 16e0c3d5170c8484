//! Attack detection and check
//!
//! ## Algorithm
//!
//! Instead of generating every opponent move, look outward from the target
//! square: a knight of the attacking color a knight's jump away, a king one
//! step away, a pawn on one of the two squares it would capture from, or the
//! first piece along a rook or bishop ray being a matching slider.
//!
//! Castling never attacks anything, so this module does not call the king
//! move generator and cannot recurse into the legality check.

use super::pawn::pawn_attacks;
use crate::board::{Board, SearchBoard};
use crate::constants::{BISHOP_DIRS, KING_DELTAS, KNIGHT_DELTAS, ROOK_DIRS};
use crate::types::{Color, Piece, PieceKind, Square};

/// Whether any piece of `by` attacks `square`
pub fn is_square_attacked(board: &Board, square: Square, by: Color) -> bool {
    let holds = |target: Option<Square>, kinds: &[PieceKind]| {
        target
            .and_then(|t| board.get_piece(t))
            .is_some_and(|p| p.color == by && kinds.contains(&p.kind))
    };

    if KNIGHT_DELTAS
        .iter()
        .any(|&(r, c)| holds(square.offset(r, c), &[PieceKind::Knight]))
    {
        return true;
    }

    if KING_DELTAS
        .iter()
        .any(|&(r, c)| holds(square.offset(r, c), &[PieceKind::King]))
    {
        return true;
    }

    // A pawn of `by` attacks `square` from the squares an opposing pawn on
    // `square` would attack.
    let mirror = Piece::new(PieceKind::Pawn, by.opponent(), square);
    if pawn_attacks(square, &mirror).any(|from| holds(Some(from), &[PieceKind::Pawn])) {
        return true;
    }

    ray_attacked(board, square, by, &ROOK_DIRS, PieceKind::Rook)
        || ray_attacked(board, square, by, &BISHOP_DIRS, PieceKind::Bishop)
}

/// Whether `color`'s king is attacked; a board without that king is never in check
pub fn is_in_check(board: &Board, color: Color) -> bool {
    board
        .king_square(color)
        .is_some_and(|king| is_square_attacked(board, king, color.opponent()))
}

fn ray_attacked(board: &Board, square: Square, by: Color, dirs: &[(i8, i8)], slider: PieceKind) -> bool {
    for &(d_row, d_col) in dirs {
        let mut current = square;
        while let Some(next) = current.offset(d_row, d_col) {
            if let Some(piece) = board.get_piece(next) {
                if piece.color == by && (piece.kind == slider || piece.kind == PieceKind::Queen) {
                    return true;
                }
                break;
            }
            current = next;
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(name: &str) -> Square {
        name.parse().unwrap()
    }

    #[test]
    fn test_pawn_attacks_diagonally_forward_only() {
        let board = Board::from_placement("4k3/8/8/8/8/8/4P3/4K3").unwrap();
        assert!(is_square_attacked(&board, sq("d3"), Color::White));
        assert!(is_square_attacked(&board, sq("f3"), Color::White));
        assert!(!is_square_attacked(&board, sq("e3"), Color::White));
        assert!(!is_square_attacked(&board, sq("e4"), Color::White));
    }

    #[test]
    fn test_black_pawn_attacks_downward() {
        let board = Board::from_placement("4k3/3p4/8/8/8/8/8/4K3").unwrap();
        assert!(is_square_attacked(&board, sq("c6"), Color::Black));
        assert!(is_square_attacked(&board, sq("e6"), Color::Black));
        assert!(!is_square_attacked(&board, sq("c8"), Color::Black));
    }

    #[test]
    fn test_slider_attacks_blocked() {
        let board = Board::from_placement("4k3/8/8/8/q3P2K/8/8/8").unwrap();
        assert!(is_square_attacked(&board, sq("d4"), Color::Black));
        assert!(!is_square_attacked(&board, sq("f4"), Color::Black));
        assert!(!is_in_check(&board, Color::White));
    }

    #[test]
    fn test_knight_and_king_attacks() {
        let board = Board::from_placement("4k3/8/8/8/8/5n2/8/4K3").unwrap();
        assert!(is_in_check(&board, Color::White));
        assert!(is_square_attacked(&board, sq("d7"), Color::Black));
    }

    #[test]
    fn test_no_king_no_check() {
        let board = Board::from_placement("8/8/8/8/8/8/8/r7").unwrap();
        assert!(!is_in_check(&board, Color::White));
    }
}

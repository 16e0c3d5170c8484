//! Move generation and the legality oracle
//!
//! Per-piece generators produce pseudo-legal destinations: they follow the
//! piece's movement pattern, respect blockers and never land on a friendly
//! piece, but ignore whether the mover's own king ends up in check.
//! [`is_legal_move`] filters those down to legal moves by playing the move on
//! a scratch copy and asking the attack detector about the king.
//!
//! En passant is not generated.

mod attack;
mod king;
mod knight;
mod pawn;
mod sliding;

pub use attack::{is_in_check, is_square_attacked};

use crate::board::{is_castling, Board, SearchBoard};
use crate::types::{Color, Move, PieceKind, Square};

/// Pseudo-legal destinations of the piece on `square`
pub fn valid_moves(board: &Board, square: Square) -> Vec<Square> {
    let Some(piece) = board.get_piece(square) else {
        return Vec::new();
    };

    match piece.kind {
        PieceKind::Pawn => pawn::pawn_moves(board, &piece),
        PieceKind::Knight => knight::knight_moves(board, &piece),
        PieceKind::Bishop => sliding::bishop_moves(board, &piece),
        PieceKind::Rook => sliding::rook_moves(board, &piece),
        PieceKind::Queen => sliding::queen_moves(board, &piece),
        PieceKind::King => king::king_moves(board, &piece),
    }
}

/// Check if a move is legal for `color`
///
/// Validates that:
/// - the origin holds a piece of `color`
/// - the destination is one of its pseudo-legal moves
/// - castling does not start in or pass through check
/// - the move does not leave `color`'s king in check
pub fn is_legal_move(board: &Board, from: Square, to: Square, color: Color) -> bool {
    let Some(piece) = board.get_piece(from) else {
        return false;
    };
    if piece.color != color || !valid_moves(board, from).contains(&to) {
        return false;
    }

    if is_castling(&piece, from, to) {
        let passed = Square {
            row: from.row,
            col: (from.col + to.col) / 2,
        };
        if is_in_check(board, color) || is_square_attacked(board, passed, color.opponent()) {
            return false;
        }
    }

    let mut scratch = board.clone();
    scratch.move_piece(from, to);
    !is_in_check(&scratch, color)
}

/// Every legal move for `color`, in board scan order
///
/// Works against any [`SearchBoard`]: candidate destinations come from the
/// board's per-piece generator and are filtered through its legality oracle.
pub fn legal_moves<B: SearchBoard + ?Sized>(board: &B, color: Color) -> Vec<Move> {
    let mut moves = Vec::new();
    for from in Square::all() {
        let Some(piece) = board.get_piece(from) else {
            continue;
        };
        if piece.color != color {
            continue;
        }
        for to in board.valid_moves(from) {
            if board.is_legal_move(from, to, color) {
                moves.push(Move::new(from, to));
            }
        }
    }
    moves
}

/// Whether `color` has at least one legal move
pub fn has_any_legal_move<B: SearchBoard + ?Sized>(board: &B, color: Color) -> bool {
    Square::all().any(|from| {
        board.get_piece(from).is_some_and(|piece| {
            piece.color == color
                && board
                    .valid_moves(from)
                    .into_iter()
                    .any(|to| board.is_legal_move(from, to, color))
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(name: &str) -> Square {
        name.parse().unwrap()
    }

    #[test]
    fn test_starting_position_has_twenty_moves() {
        let board = Board::new();
        assert_eq!(legal_moves(&board, Color::White).len(), 20);
        assert_eq!(legal_moves(&board, Color::Black).len(), 20);
    }

    #[test]
    fn test_legal_moves_follow_scan_order() {
        let board = Board::new();
        let moves = legal_moves(&board, Color::Black);
        // Black's back rank is scanned first, knights before pawns
        assert_eq!(moves[0], Move::new(sq("b8"), sq("a6")));
        assert!(moves.windows(2).all(|w| w[0].from <= w[1].from));
    }

    #[test]
    fn test_pinned_piece_cannot_move() {
        // White bishop on e2 is pinned against the king by the rook on e8
        let board = Board::from_placement("4r2k/8/8/8/8/8/4B3/4K3").unwrap();
        assert!(!valid_moves(&board, sq("e2")).is_empty());
        assert!(!is_legal_move(&board, sq("e2"), sq("d3"), Color::White));
        assert!(legal_moves(&board, Color::White)
            .iter()
            .all(|mv| mv.from != sq("e2")));
    }

    #[test]
    fn test_king_cannot_step_into_attack() {
        let board = Board::from_placement("7k/8/8/8/8/8/r7/4K3").unwrap();
        assert!(!is_legal_move(&board, sq("e1"), sq("e2"), Color::White));
        assert!(is_legal_move(&board, sq("e1"), sq("f1"), Color::White));
    }

    #[test]
    fn test_wrong_color_is_illegal() {
        let board = Board::new();
        assert!(!is_legal_move(&board, sq("e2"), sq("e4"), Color::Black));
        assert!(is_legal_move(&board, sq("e2"), sq("e4"), Color::White));
        assert!(!is_legal_move(&board, sq("e3"), sq("e4"), Color::White));
    }

    #[test]
    fn test_castling_legality() {
        let board = Board::from_placement("4k3/8/8/8/8/8/8/R3K2R").unwrap();
        assert!(is_legal_move(&board, sq("e1"), sq("g1"), Color::White));
        assert!(is_legal_move(&board, sq("e1"), sq("c1"), Color::White));

        // f1 covered by a rook on f8: cannot castle through it
        let through = Board::from_placement("4kr2/8/8/8/8/8/8/R3K2R").unwrap();
        assert!(!is_legal_move(&through, sq("e1"), sq("g1"), Color::White));
        assert!(is_legal_move(&through, sq("e1"), sq("c1"), Color::White));

        // in check: no castling either way
        let checked = Board::from_placement("4r1k1/8/8/8/8/8/8/R3K2R").unwrap();
        assert!(!is_legal_move(&checked, sq("e1"), sq("g1"), Color::White));
        assert!(!is_legal_move(&checked, sq("e1"), sq("c1"), Color::White));
    }

    #[test]
    fn test_no_legal_moves_when_mated() {
        // Back-rank mate
        let board = Board::from_placement("6k1/5ppp/8/8/8/8/8/3R2K1").unwrap();
        let mut mated = board.clone();
        mated.move_piece(sq("d1"), sq("d8"));
        assert!(!has_any_legal_move(&mated, Color::Black));
        assert!(has_any_legal_move(&board, Color::Black));
    }
}

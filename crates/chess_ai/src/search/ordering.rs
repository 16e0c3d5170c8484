//! Move ordering for alpha-beta pruning
//!
//! Captures of valuable pieces are tried first. The sort is stable, so moves
//! of equal value keep the generator's order.

use std::cmp::Reverse;

use crate::board::SearchBoard;
use crate::types::Move;

/// Value of the piece standing on the move's destination, 0 if empty
#[inline]
pub(crate) fn capture_value<B: SearchBoard + ?Sized>(board: &B, mv: &Move) -> i32 {
    board.get_piece(mv.to).map_or(0, |victim| victim.kind.value())
}

/// Order moves for better alpha-beta pruning
pub fn order_moves<B: SearchBoard + ?Sized>(board: &B, moves: &mut [Move]) {
    moves.sort_by_key(|mv| Reverse(capture_value(board, mv)));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;
    use crate::move_gen::legal_moves;
    use crate::types::Color;

    fn mv(text: &str) -> Move {
        text.parse().unwrap()
    }

    #[test]
    fn test_order_moves_prioritizes_captures() {
        let board = Board::from_placement("4k3/8/8/3q4/4P3/8/8/4K3").unwrap();
        let mut moves = vec![mv("e4e5"), mv("e1d1"), mv("e4d5")];

        order_moves(&board, &mut moves);

        assert_eq!(moves[0], mv("e4d5"), "capture should be ordered first");
    }

    #[test]
    fn test_order_moves_most_valuable_victim_first() {
        let board = Board::from_placement("4k3/8/8/2q1p3/3P4/8/8/4K3").unwrap();
        let mut moves = vec![mv("d4e5"), mv("d4c5")];

        order_moves(&board, &mut moves);

        assert_eq!(moves, vec![mv("d4c5"), mv("d4e5")]);
    }

    #[test]
    fn test_order_moves_is_stable_for_quiet_moves() {
        let board = Board::new();
        let original = legal_moves(&board, Color::White);
        let mut moves = original.clone();

        order_moves(&board, &mut moves);

        assert_eq!(moves, original);
    }

    #[test]
    fn test_order_moves_keeps_move_set() {
        let board = Board::from_placement("r3k3/1p6/8/3n4/4P3/2N5/8/R3K3").unwrap();
        let original = legal_moves(&board, Color::White);
        let mut moves = original.clone();

        order_moves(&board, &mut moves);

        assert_eq!(moves.len(), original.len());
        assert!(original.iter().all(|m| moves.contains(m)));
        assert!(moves
            .windows(2)
            .all(|w| capture_value(&board, &w[0]) >= capture_value(&board, &w[1])));
    }
}

//! Alpha-beta search (recursive minimax form)
//!
//! The maximizing flag flips every ply. The engine's side maximizes and
//! scores always come from the evaluator in the engine's perspective, so a
//! value means the same thing at every depth.
//!
//! Fail-soft: a node returns the best value it saw even when that value lies
//! outside the window, and the transposition entry records which side of the
//! window it fell on.

use super::make_unmake::{make_move, unmake_move};
use super::ordering::order_moves;
use super::SearchStats;
use crate::board::SearchBoard;
use crate::constants::{NO_MOVE_SCORE, SCORE_INF};
use crate::evaluation::evaluate;
use crate::hash::search_key;
use crate::move_gen::legal_moves;
use crate::tt::{Bound, TranspositionTable};
use crate::types::Color;

/// State shared by every node of one search
pub(crate) struct SearchContext<'a> {
    pub tt: &'a mut TranspositionTable,
    pub engine_color: Color,
    pub stats: SearchStats,
}

impl<'a> SearchContext<'a> {
    pub fn new(tt: &'a mut TranspositionTable, engine_color: Color) -> Self {
        SearchContext {
            tt,
            engine_color,
            stats: SearchStats::default(),
        }
    }

    /// Side to move at a node with the given flag
    #[inline]
    fn side(&self, maximizing: bool) -> Color {
        if maximizing {
            self.engine_color
        } else {
            self.engine_color.opponent()
        }
    }
}

/// Bound type of a fail-soft result against the window it was searched with
#[inline]
fn classify(value: i32, alpha: i32, beta: i32) -> Bound {
    if value <= alpha {
        Bound::Upper
    } else if value >= beta {
        Bound::Lower
    } else {
        Bound::Exact
    }
}

/// Minimax value of `board` searched `depth` plies deep
///
/// The board is mutated while children are searched and is back in its
/// original state on every return path.
pub(crate) fn alphabeta<B: SearchBoard + ?Sized>(
    board: &mut B,
    ctx: &mut SearchContext<'_>,
    depth: u8,
    mut alpha: i32,
    mut beta: i32,
    maximizing: bool,
) -> i32 {
    ctx.stats.nodes += 1;

    if depth == 0 {
        return evaluate(board, ctx.engine_color);
    }

    let side = ctx.side(maximizing);
    let key = search_key(board.position_key(), side);

    if let Some(value) = ctx
        .tt
        .lookup(key, depth)
        .and_then(|entry| entry.usable(alpha, beta))
    {
        ctx.stats.tt_hits += 1;
        return value;
    }

    let mut moves = legal_moves(board, side);
    if moves.is_empty() {
        ctx.tt.store(key, depth, NO_MOVE_SCORE, Bound::Exact);
        ctx.stats.tt_stores += 1;
        return NO_MOVE_SCORE;
    }
    order_moves(board, &mut moves);

    let (alpha_orig, beta_orig) = (alpha, beta);
    let mut best = if maximizing { -SCORE_INF } else { SCORE_INF };

    for mv in moves {
        let Some(undo) = make_move(board, mv) else {
            continue;
        };
        let score = alphabeta(board, ctx, depth - 1, alpha, beta, !maximizing);
        unmake_move(board, mv, undo);

        if maximizing {
            best = best.max(score);
            alpha = alpha.max(best);
        } else {
            best = best.min(score);
            beta = beta.min(best);
        }

        if beta <= alpha {
            ctx.stats.cutoffs += 1;
            break;
        }
    }

    ctx.tt
        .store(key, depth, best, classify(best, alpha_orig, beta_orig));
    ctx.stats.tt_stores += 1;

    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;
    use crate::constants::{PAWN_VALUE, ROOK_VALUE};
    use crate::hash::full_key;

    fn search(board: &mut Board, engine: Color, depth: u8, maximizing: bool) -> (i32, SearchStats) {
        let mut tt = TranspositionTable::new(1 << 12);
        let mut ctx = SearchContext::new(&mut tt, engine);
        let score = alphabeta(board, &mut ctx, depth, -SCORE_INF, SCORE_INF, maximizing);
        (score, ctx.stats)
    }

    #[test]
    fn test_depth_zero_is_static_evaluation() {
        let mut board = Board::from_placement("7k/8/8/8/8/8/8/K6r").unwrap();
        let (score, stats) = search(&mut board, Color::Black, 0, true);
        assert_eq!(score, ROOK_VALUE);
        assert_eq!(stats.nodes, 1);
    }

    #[test]
    fn test_no_legal_moves_scores_zero() {
        // Black king h8 mated by queen g7 supported by king f6
        let mut board = Board::from_placement("7k/6Q1/5K2/8/8/8/8/8").unwrap();
        let (score, _) = search(&mut board, Color::Black, 2, true);
        assert_eq!(score, NO_MOVE_SCORE);

        // Stalemate scores the same
        let mut board = Board::from_placement("7k/5Q2/6K1/8/8/8/8/8").unwrap();
        let (score, _) = search(&mut board, Color::Black, 3, true);
        assert_eq!(score, NO_MOVE_SCORE);
    }

    #[test]
    fn test_minimizing_side_takes_material() {
        // White to move at a minimizing node from Black's point of view;
        // the pawn takes the hanging rook and leaves White a pawn up
        let mut board = Board::from_placement("7k/8/8/8/8/1r6/P7/K7").unwrap();
        let (score, _) = search(&mut board, Color::Black, 1, false);
        assert_eq!(score, -PAWN_VALUE);
    }

    #[test]
    fn test_search_restores_board_and_key() {
        let mut board = Board::from_placement("r3k2r/pppq1ppp/2n5/3pp3/3PP3/2N5/PPPQ1PPP/R3K2R").unwrap();
        let before = board.clone();
        let key = full_key(&board);

        search(&mut board, Color::White, 3, true);

        assert_eq!(board, before);
        assert_eq!(board.position_key(), key);
    }

    #[test]
    fn test_cutoffs_happen_with_ordering() {
        let mut board = Board::new();
        let (_, stats) = search(&mut board, Color::White, 3, true);
        assert!(stats.cutoffs > 0, "alpha-beta should prune the opening tree");
        assert!(stats.tt_stores > 0);
    }

    #[test]
    fn test_quiet_position_keeps_material() {
        let mut board = Board::from_placement("4k3/8/8/8/8/8/8/R3K3").unwrap();
        let (score, _) = search(&mut board, Color::White, 2, true);
        assert_eq!(score, ROOK_VALUE);
    }

    #[test]
    fn test_classify_bounds() {
        assert_eq!(classify(5, 10, 20), Bound::Upper);
        assert_eq!(classify(10, 10, 20), Bound::Upper);
        assert_eq!(classify(15, 10, 20), Bound::Exact);
        assert_eq!(classify(20, 10, 20), Bound::Lower);
    }
}

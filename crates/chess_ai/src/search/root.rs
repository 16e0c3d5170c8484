//! Root move selection
//!
//! Every root move is searched once. Alpha narrows as better moves are found,
//! which lets later siblings prune harder, and only a strictly better score
//! replaces the current choice, so among equal scores the first move in
//! search order wins.

use tracing::debug;

use super::alphabeta::{alphabeta, SearchContext};
use super::make_unmake::{make_move, unmake_move};
use super::ordering::order_moves;
use crate::board::SearchBoard;
use crate::constants::SCORE_INF;
use crate::move_gen::legal_moves;
use crate::types::Move;

/// Best move for the engine's side with its score, `None` without legal moves
pub(crate) fn search_root<B: SearchBoard + ?Sized>(
    board: &mut B,
    ctx: &mut SearchContext<'_>,
    depth: u8,
) -> Option<(Move, i32)> {
    ctx.stats.nodes += 1;

    let mut moves = legal_moves(board, ctx.engine_color);
    order_moves(board, &mut moves);
    ctx.stats.root_moves = moves.len();

    let child_depth = depth.max(1) - 1;
    let mut alpha = -SCORE_INF;
    let mut best: Option<(Move, i32)> = None;

    for mv in moves {
        let Some(undo) = make_move(board, mv) else {
            continue;
        };
        let score = alphabeta(board, ctx, child_depth, alpha, SCORE_INF, false);
        unmake_move(board, mv, undo);

        debug!(%mv, score, "root move searched");

        if best.map_or(true, |(_, best_score)| score > best_score) {
            best = Some((mv, score));
            alpha = alpha.max(score);
        }
    }

    best
}

//! Move making and unmaking for search
//!
//! [`make_move`] snapshots everything a move can disturb before applying it
//! through the board's own `move_piece`, and [`unmake_move`] writes the
//! snapshot back with raw slot writes. The same record is used at every depth,
//! so castling rook state is restored wherever castling was tried, not only
//! at the root.

use crate::board::{castling_rook_squares, is_castling, SearchBoard};
use crate::types::{Move, Piece, Square};

/// Rook side effect of a castling move
pub(crate) struct RookUndo {
    rook_from: Square,
    rook: Option<Piece>,
    rook_to: Square,
    displaced: Option<Piece>,
}

/// Information needed to undo a move
pub(crate) struct UndoInfo {
    /// Moving piece as it was, including its square and has-moved flag
    moving: Piece,
    /// Destination contents before the move
    captured: Option<Piece>,
    castle: Option<RookUndo>,
}

#[cfg(test)]
impl UndoInfo {
    fn captured(&self) -> Option<Piece> {
        self.captured
    }
}

/// Make a move on the board, `None` if the origin is empty
pub(crate) fn make_move<B: SearchBoard + ?Sized>(board: &mut B, mv: Move) -> Option<UndoInfo> {
    let moving = board.get_piece(mv.from)?;
    let captured = board.get_piece(mv.to);

    let castle = is_castling(&moving, mv.from, mv.to).then(|| {
        let (rook_from, rook_to) = castling_rook_squares(mv.from, mv.to);
        RookUndo {
            rook_from,
            rook: board.get_piece(rook_from),
            rook_to,
            displaced: board.get_piece(rook_to),
        }
    });

    board.move_piece(mv.from, mv.to);

    Some(UndoInfo {
        moving,
        captured,
        castle,
    })
}

/// Unmake a move on the board
pub(crate) fn unmake_move<B: SearchBoard + ?Sized>(board: &mut B, mv: Move, undo: UndoInfo) {
    if let Some(castle) = undo.castle {
        board.set_piece(castle.rook_to, castle.displaced);
        board.set_piece(castle.rook_from, castle.rook);
    }
    board.set_piece(mv.to, undo.captured);
    board.set_piece(mv.from, Some(undo.moving));
}

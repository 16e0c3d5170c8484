//! Game-level helpers for drivers
//!
//! Checked move application and end-of-game detection. The search itself
//! never calls these: it trusts the board's legality oracle and scores a
//! node without moves as 0 whatever the reason.

use std::fmt;

use crate::board::{Board, SearchBoard};
use crate::error::{ChessEngineError, ChessEngineResult};
use crate::move_gen::has_any_legal_move;
use crate::types::{Color, Move};

/// State of the game for the side about to move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Playing,
    /// Side to move is in check with no legal move
    Checkmate,
    /// Side to move is not in check but has no legal move
    Stalemate,
}

impl GameStatus {
    pub fn is_over(self) -> bool {
        self != GameStatus::Playing
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            GameStatus::Playing => "playing",
            GameStatus::Checkmate => "checkmate",
            GameStatus::Stalemate => "stalemate",
        })
    }
}

/// Status of `board` with `to_move` on turn
pub fn game_status(board: &Board, to_move: Color) -> GameStatus {
    if has_any_legal_move(board, to_move) {
        GameStatus::Playing
    } else if board.is_in_check(to_move) {
        GameStatus::Checkmate
    } else {
        GameStatus::Stalemate
    }
}

/// Play `mv` for `color` after checking it is legal
pub fn apply_move(board: &mut Board, mv: Move, color: Color) -> ChessEngineResult<()> {
    if board.get_piece(mv.from).is_none() {
        return Err(ChessEngineError::NoPieceAtSquare { square: mv.from });
    }
    if !board.is_legal_move(mv.from, mv.to, color) {
        return Err(ChessEngineError::IllegalMove {
            from: mv.from,
            to: mv.to,
        });
    }
    board.move_piece(mv.from, mv.to);
    Ok(())
}

//! Zobrist hashing
//!
//! Every (color, kind, has-moved, square) combination gets a fixed random
//! 64-bit key; a position's key is the XOR of the keys of all pieces on the
//! board. XOR is its own inverse, so a board can keep the key up to date one
//! slot write at a time, and undoing a move restores the exact same key.
//!
//! The has-moved flag is part of the key because it changes which moves are
//! available (pawn double steps, castling). Side to move is folded in
//! separately by [`search_key`], since the board itself does not know whose
//! turn it is.

use std::sync::OnceLock;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::board::SearchBoard;
use crate::constants::ZOBRIST_SEED;
use crate::types::{Color, Piece, Square};

/// Random key tables
pub struct ZobristKeys {
    /// Indexed by color, kind, has-moved, square
    pieces: [[[[u64; 64]; 2]; 6]; 2],
    black_to_move: u64,
}

impl ZobristKeys {
    fn new() -> Self {
        let mut rng = StdRng::seed_from_u64(ZOBRIST_SEED);
        let mut pieces = [[[[0u64; 64]; 2]; 6]; 2];

        for color in pieces.iter_mut() {
            for kind in color.iter_mut() {
                for moved in kind.iter_mut() {
                    for key in moved.iter_mut() {
                        *key = rng.random();
                    }
                }
            }
        }

        ZobristKeys {
            pieces,
            black_to_move: rng.random(),
        }
    }
}

static KEYS: OnceLock<ZobristKeys> = OnceLock::new();

/// Shared key tables, generated on first use
pub fn keys() -> &'static ZobristKeys {
    KEYS.get_or_init(ZobristKeys::new)
}

/// Key contribution of `piece` standing on `square`
#[inline]
pub fn piece_key(piece: &Piece, square: Square) -> u64 {
    keys().pieces[piece.color.index()][piece.kind.index()][piece.has_moved as usize]
        [square.index()]
}

/// Key contribution of the side to move
#[inline]
pub fn side_key(color: Color) -> u64 {
    match color {
        Color::White => 0,
        Color::Black => keys().black_to_move,
    }
}

/// Position key computed from scratch by scanning every square
pub fn full_key<B: SearchBoard + ?Sized>(board: &B) -> u64 {
    Square::all()
        .filter_map(|square| board.get_piece(square).map(|piece| piece_key(&piece, square)))
        .fold(0, |acc, key| acc ^ key)
}

/// Transposition table key: position plus side to move
#[inline]
pub fn search_key(position_key: u64, side_to_move: Color) -> u64 {
    position_key ^ side_key(side_to_move)
}

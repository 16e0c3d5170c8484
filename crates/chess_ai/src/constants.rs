//! # Engine Constants - Material Values & Search Parameters
//!
//! ## Centipawn Valuation
//!
//! Scores are integers in centipawns (1/100th of a pawn):
//!
//! - **Pawn**: 100
//! - **Knight**: 320
//! - **Bishop**: 330
//! - **Rook**: 500
//! - **Queen**: 900
//! - **King**: 20,000
//!
//! The king is worth more than every other piece combined, so a line that
//! loses the king always scores worse than any material deficit.
//!
//! ## Score Window
//!
//! [`SCORE_INF`] bounds the alpha-beta window. The largest reachable
//! material total is two full armies plus promotions, well under a tenth of
//! it, so `-SCORE_INF`/`SCORE_INF` never collide with a real evaluation.

use crate::types::PieceKind;

pub const PAWN_VALUE: i32 = 100;
pub const KNIGHT_VALUE: i32 = 320;
pub const BISHOP_VALUE: i32 = 330;
pub const ROOK_VALUE: i32 = 500;
pub const QUEEN_VALUE: i32 = 900;
pub const KING_VALUE: i32 = 20_000;

/// Outer bound of the alpha-beta window
pub const SCORE_INF: i32 = 1_000_000;

/// Score of a node whose side to move has no legal move
pub const NO_MOVE_SCORE: i32 = 0;

/// Default search depth in plies
pub const DEFAULT_DEPTH: u8 = 3;

/// Deepest search the configuration accepts
pub const MAX_DEPTH: u8 = 8;

/// Default transposition table capacity (entries, rounded up to a power of two)
pub const DEFAULT_TT_CAPACITY: usize = 1 << 16;

/// Seed for the Zobrist key generator, fixed so keys are stable between runs
pub const ZOBRIST_SEED: u64 = 0x5EED_C0DE_2024_0001;

/// Back rank layout from file a to file h
pub const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Starting position in board placement notation
pub const START_PLACEMENT: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

pub const KNIGHT_DELTAS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

pub const KING_DELTAS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

pub const ROOK_DIRS: [(i8, i8); 4] = [(-1, 0), (0, 1), (1, 0), (0, -1)];
pub const BISHOP_DIRS: [(i8, i8); 4] = [(-1, 1), (1, 1), (-1, -1), (1, -1)];
pub const QUEEN_DIRS: [(i8, i8); 8] = [
    (-1, 0),
    (0, 1),
    (1, 0),
    (0, -1),
    (-1, 1),
    (1, 1),
    (-1, -1),
    (1, -1),
];

//! # Core Types - Squares, Pieces and Moves
//!
//! ## Coordinates
//!
//! A [`Square`] is a `(row, col)` pair in `0..8`. Row 0 is Black's back rank
//! (rank 8) and row 7 is White's back rank (rank 1), so the board reads the
//! same way it is printed: top row first. Column 0 is file `a`.
//!
//! | Square | Algebraic |
//! |--------|-----------|
//! | (7, 0) | a1        |
//! | (7, 7) | h1        |
//! | (0, 0) | a8        |
//! | (0, 7) | h8        |
//!
//! White pawns therefore advance towards row 0 and Black pawns towards row 7.
//!
//! ## Pieces
//!
//! A [`Piece`] is a small `Copy` value that knows its kind, color, current
//! square and whether it has moved. Because it is `Copy`, taking a snapshot of
//! a piece before a move records everything needed to put it back, which is
//! what the search's undo records rely on.
//!
//! ## Moves
//!
//! A [`Move`] is only an origin and a destination. Castling and promotion are
//! side effects of applying the move to a board, not move metadata.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::{BISHOP_VALUE, KING_VALUE, KNIGHT_VALUE, PAWN_VALUE, QUEEN_VALUE, ROOK_VALUE};
use crate::error::{ChessEngineError, ChessEngineResult};

/// Side to move / piece owner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    White,
    Black,
}

impl Color {
    /// The other side
    #[inline]
    pub fn opponent(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Row delta a pawn of this color advances by
    #[inline]
    pub fn pawn_direction(self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    /// Back rank row for this color
    #[inline]
    pub fn home_row(self) -> u8 {
        match self {
            Color::White => 7,
            Color::Black => 0,
        }
    }

    #[inline]
    pub(crate) fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => f.write_str("white"),
            Color::Black => f.write_str("black"),
        }
    }
}

impl FromStr for Color {
    type Err = ChessEngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "white" | "w" => Ok(Color::White),
            "black" | "b" => Ok(Color::Black),
            _ => Err(ChessEngineError::InvalidConfig {
                message: format!("unknown color {s:?}"),
            }),
        }
    }
}

/// Piece identity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// Material value in centipawns
    #[inline]
    pub fn value(self) -> i32 {
        match self {
            PieceKind::Pawn => PAWN_VALUE,
            PieceKind::Knight => KNIGHT_VALUE,
            PieceKind::Bishop => BISHOP_VALUE,
            PieceKind::Rook => ROOK_VALUE,
            PieceKind::Queen => QUEEN_VALUE,
            PieceKind::King => KING_VALUE,
        }
    }

    /// Upper-case letter used in board placement text
    pub fn letter(self) -> char {
        match self {
            PieceKind::Pawn => 'P',
            PieceKind::Knight => 'N',
            PieceKind::Bishop => 'B',
            PieceKind::Rook => 'R',
            PieceKind::Queen => 'Q',
            PieceKind::King => 'K',
        }
    }

    pub fn from_letter(c: char) -> Option<PieceKind> {
        match c.to_ascii_uppercase() {
            'P' => Some(PieceKind::Pawn),
            'N' => Some(PieceKind::Knight),
            'B' => Some(PieceKind::Bishop),
            'R' => Some(PieceKind::Rook),
            'Q' => Some(PieceKind::Queen),
            'K' => Some(PieceKind::King),
            _ => None,
        }
    }

    #[inline]
    pub(crate) fn index(self) -> usize {
        match self {
            PieceKind::Pawn => 0,
            PieceKind::Knight => 1,
            PieceKind::Bishop => 2,
            PieceKind::Rook => 3,
            PieceKind::Queen => 4,
            PieceKind::King => 5,
        }
    }
}

/// Board coordinate, `row` 0 = rank 8, `col` 0 = file a
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    pub row: u8,
    pub col: u8,
}

impl Square {
    /// Build a square, rejecting coordinates outside the board
    pub fn new(row: u8, col: u8) -> ChessEngineResult<Self> {
        if row > 7 || col > 7 {
            return Err(ChessEngineError::InvalidSquare { row, col });
        }
        Ok(Square { row, col })
    }

    /// Build a square from coordinates known to be on the board
    #[inline]
    pub(crate) const fn at(row: u8, col: u8) -> Self {
        Square { row, col }
    }

    /// Offset by a (row, col) delta, `None` when leaving the board
    #[inline]
    pub fn offset(self, d_row: i8, d_col: i8) -> Option<Square> {
        let row = self.row as i8 + d_row;
        let col = self.col as i8 + d_col;
        if (0..8).contains(&row) && (0..8).contains(&col) {
            Some(Square::at(row as u8, col as u8))
        } else {
            None
        }
    }

    /// Linear index 0-63 in board scan order (row-major from a8)
    #[inline]
    pub fn index(self) -> usize {
        self.row as usize * 8 + self.col as usize
    }

    /// All 64 squares in board scan order
    pub fn all() -> impl Iterator<Item = Square> {
        (0..8u8).flat_map(|row| (0..8u8).map(move |col| Square::at(row, col)))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = (b'a' + self.col) as char;
        let rank = 8 - self.row;
        write!(f, "{file}{rank}")
    }
}

impl FromStr for Square {
    type Err = ChessEngineError;

    /// Parse algebraic notation such as `"e4"`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ChessEngineError::InvalidSquareName { name: s.to_string() };
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return Err(invalid());
        }
        let file = bytes[0].to_ascii_lowercase();
        let rank = bytes[1];
        if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
            return Err(invalid());
        }
        Ok(Square::at(8 - (rank - b'0'), file - b'a'))
    }
}

/// A piece standing on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
    pub square: Square,
    pub has_moved: bool,
}

impl Piece {
    /// Fresh, unmoved piece on `square`
    pub fn new(kind: PieceKind, color: Color, square: Square) -> Self {
        Piece {
            kind,
            color,
            square,
            has_moved: false,
        }
    }

    /// Placement letter, upper case for White
    pub fn letter(&self) -> char {
        match self.color {
            Color::White => self.kind.letter(),
            Color::Black => self.kind.letter().to_ascii_lowercase(),
        }
    }
}

/// Origin and destination of a move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Square,
    pub to: Square,
}

impl Move {
    pub fn new(from: Square, to: Square) -> Self {
        Move { from, to }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}

impl FromStr for Move {
    type Err = ChessEngineError;

    /// Parse coordinate notation such as `"e2e4"`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 4 || !s.is_ascii() {
            return Err(ChessEngineError::InvalidSquareName { name: s.to_string() });
        }
        Ok(Move::new(s[..2].parse()?, s[2..].parse()?))
    }
}

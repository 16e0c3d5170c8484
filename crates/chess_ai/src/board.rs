//! Board storage and the collaborator contract the search walks
//!
//! The search engine never looks inside a board. It only uses the
//! [`SearchBoard`] trait: read a slot, write a slot, apply a move, ask the
//! legality oracle, list a piece's pseudo-legal destinations. [`Board`] is the
//! implementation shipped with the crate: an 8×8 grid of optional pieces with
//! an incrementally maintained Zobrist key.

use std::fmt;

use crate::constants::BACK_RANK;
use crate::error::{ChessEngineError, ChessEngineResult};
use crate::hash;
use crate::move_gen;
use crate::types::{Color, Piece, PieceKind, Square};

/// Operations the search engine needs from a board
pub trait SearchBoard {
    /// Piece on `square`, if any
    fn get_piece(&self, square: Square) -> Option<Piece>;

    /// Raw slot write, no rules applied
    fn set_piece(&mut self, square: Square, piece: Option<Piece>);

    /// Relocate the piece on `from` to `to`, applying its special rules
    /// (has-moved flag, promotion, castling rook)
    fn move_piece(&mut self, from: Square, to: Square);

    /// Full legality, including not leaving the mover's king in check
    fn is_legal_move(&self, from: Square, to: Square, color: Color) -> bool;

    /// Pseudo-legal destinations of the piece on `square`
    fn valid_moves(&self, square: Square) -> Vec<Square>;

    /// Fingerprint of the piece layout (without side to move)
    fn position_key(&self) -> u64 {
        hash::full_key(self)
    }
}

/// Rook origin and destination for a king moving two files
pub fn castling_rook_squares(king_from: Square, king_to: Square) -> (Square, Square) {
    if king_to.col > king_from.col {
        (Square::at(king_from.row, 7), Square::at(king_from.row, king_to.col - 1))
    } else {
        (Square::at(king_from.row, 0), Square::at(king_from.row, king_to.col + 1))
    }
}

/// True when a move of `piece` to `to` is a castling king move
#[inline]
pub fn is_castling(piece: &Piece, from: Square, to: Square) -> bool {
    piece.kind == PieceKind::King && from.row == to.row && from.col.abs_diff(to.col) == 2
}

/// 8×8 board of optional pieces
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    squares: [Option<Piece>; 64],
    key: u64,
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

impl Board {
    /// Board with no pieces
    pub fn empty() -> Self {
        Board {
            squares: [None; 64],
            key: 0,
        }
    }

    /// Standard starting position
    pub fn new() -> Self {
        let mut board = Board::empty();
        for col in 0..8u8 {
            let kind = BACK_RANK[col as usize];
            for (color, pawn_row) in [(Color::White, 6u8), (Color::Black, 1u8)] {
                let home = Square::at(color.home_row(), col);
                let pawn = Square::at(pawn_row, col);
                board.put(home, Some(Piece::new(kind, color, home)));
                board.put(pawn, Some(Piece::new(PieceKind::Pawn, color, pawn)));
            }
        }
        board
    }

    /// Parse a FEN piece placement such as `"8/8/8/8/8/8/8/K6k"`
    ///
    /// A full FEN record is accepted too; only the placement and castling
    /// fields are read. Has-moved flags are inferred: pawns off their start
    /// row, kings off their home square and rooks off their corners count as
    /// moved, and missing castling rights mark the king or rook as moved.
    pub fn from_placement(text: &str) -> ChessEngineResult<Self> {
        let invalid = |reason: &str| ChessEngineError::InvalidPlacement {
            placement: text.to_string(),
            reason: reason.to_string(),
        };

        let mut fields = text.split_whitespace();
        let placement = fields.next().ok_or_else(|| invalid("empty text"))?;
        let castling = fields.nth(1);

        let ranks: Vec<&str> = placement.split('/').collect();
        if ranks.len() != 8 {
            return Err(invalid("expected 8 ranks"));
        }

        let mut board = Board::empty();
        for (row, rank) in ranks.iter().enumerate() {
            let mut col = 0u8;
            for c in rank.chars() {
                if let Some(skip) = c.to_digit(10) {
                    if !(1..=8).contains(&skip) {
                        return Err(invalid("bad empty-square count"));
                    }
                    if u32::from(col) + skip > 8 {
                        return Err(invalid("rank too long"));
                    }
                    col += skip as u8;
                } else {
                    let kind = PieceKind::from_letter(c).ok_or_else(|| invalid("unknown piece letter"))?;
                    if col > 7 {
                        return Err(invalid("rank too long"));
                    }
                    let color = if c.is_ascii_uppercase() { Color::White } else { Color::Black };
                    let square = Square::at(row as u8, col);
                    let mut piece = Piece::new(kind, color, square);
                    piece.has_moved = !starts_on(&piece, square);
                    board.put(square, Some(piece));
                    col += 1;
                }
            }
            if col != 8 {
                return Err(invalid("rank does not cover 8 files"));
            }
        }

        if let Some(rights) = castling {
            board.apply_castling_rights(rights);
        }
        Ok(board)
    }

    /// FEN piece placement of this board
    pub fn to_placement(&self) -> String {
        let mut out = String::with_capacity(72);
        for row in 0..8u8 {
            if row > 0 {
                out.push('/');
            }
            let mut empty = 0;
            for col in 0..8u8 {
                match self.squares[Square::at(row, col).index()] {
                    Some(piece) => {
                        if empty > 0 {
                            out.push_str(&empty.to_string());
                            empty = 0;
                        }
                        out.push(piece.letter());
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                out.push_str(&empty.to_string());
            }
        }
        out
    }

    /// All pieces in board scan order
    pub fn pieces(&self) -> impl Iterator<Item = &Piece> + '_ {
        self.squares.iter().flatten()
    }

    /// Square of `color`'s king
    pub fn king_square(&self, color: Color) -> Option<Square> {
        Square::all().find(|&sq| {
            matches!(self.squares[sq.index()], Some(p) if p.kind == PieceKind::King && p.color == color)
        })
    }

    pub fn is_empty_square(&self, square: Square) -> bool {
        self.squares[square.index()].is_none()
    }

    pub fn is_square_attacked(&self, square: Square, by: Color) -> bool {
        move_gen::is_square_attacked(self, square, by)
    }

    pub fn is_in_check(&self, color: Color) -> bool {
        move_gen::is_in_check(self, color)
    }

    /// Write a slot and keep the key in step
    fn put(&mut self, square: Square, piece: Option<Piece>) -> Option<Piece> {
        let slot = &mut self.squares[square.index()];
        let old = std::mem::replace(slot, piece);
        if let Some(old) = &old {
            self.key ^= hash::piece_key(old, square);
        }
        if let Some(new) = &piece {
            self.key ^= hash::piece_key(new, square);
        }
        old
    }

    fn apply_castling_rights(&mut self, rights: &str) {
        for color in [Color::White, Color::Black] {
            let (king_side, queen_side) = match color {
                Color::White => ('K', 'Q'),
                Color::Black => ('k', 'q'),
            };
            let row = color.home_row();
            for (flag, col) in [(king_side, 7u8), (queen_side, 0u8)] {
                if !rights.contains(flag) {
                    self.mark_moved(Square::at(row, col), PieceKind::Rook, color);
                }
            }
            if !rights.contains(king_side) && !rights.contains(queen_side) {
                self.mark_moved(Square::at(row, 4), PieceKind::King, color);
            }
        }
    }

    fn mark_moved(&mut self, square: Square, kind: PieceKind, color: Color) {
        if let Some(mut piece) = self.squares[square.index()] {
            if piece.kind == kind && piece.color == color && !piece.has_moved {
                piece.has_moved = true;
                self.put(square, Some(piece));
            }
        }
    }
}

/// Whether `square` is a square `piece` can stand on without having moved
fn starts_on(piece: &Piece, square: Square) -> bool {
    let home = piece.color.home_row();
    match piece.kind {
        PieceKind::Pawn => square.row == (home as i8 + piece.color.pawn_direction()) as u8,
        PieceKind::King => square == Square::at(home, 4),
        PieceKind::Rook => square == Square::at(home, 0) || square == Square::at(home, 7),
        _ => square.row == home && BACK_RANK[square.col as usize] == piece.kind,
    }
}

impl SearchBoard for Board {
    #[inline]
    fn get_piece(&self, square: Square) -> Option<Piece> {
        self.squares[square.index()]
    }

    #[inline]
    fn set_piece(&mut self, square: Square, piece: Option<Piece>) {
        self.put(square, piece);
    }

    fn move_piece(&mut self, from: Square, to: Square) {
        let Some(mut piece) = self.put(from, None) else {
            return;
        };

        if is_castling(&piece, from, to) {
            let (rook_from, rook_to) = castling_rook_squares(from, to);
            if let Some(mut rook) = self.put(rook_from, None) {
                rook.square = rook_to;
                rook.has_moved = true;
                self.put(rook_to, Some(rook));
            }
        }

        piece.square = to;
        piece.has_moved = true;
        if piece.kind == PieceKind::Pawn && to.row == piece.color.opponent().home_row() {
            piece.kind = PieceKind::Queen;
        }
        self.put(to, Some(piece));
    }

    fn is_legal_move(&self, from: Square, to: Square, color: Color) -> bool {
        move_gen::is_legal_move(self, from, to, color)
    }

    fn valid_moves(&self, square: Square) -> Vec<Square> {
        move_gen::valid_moves(self, square)
    }

    #[inline]
    fn position_key(&self) -> u64 {
        self.key
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Board")
            .field("placement", &self.to_placement())
            .field("key", &format_args!("{:#018x}", self.key))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(name: &str) -> Square {
        name.parse().unwrap()
    }

    #[test]
    fn test_starting_position_layout() {
        let board = Board::new();
        assert_eq!(board.pieces().count(), 32);
        assert_eq!(board.to_placement(), crate::constants::START_PLACEMENT);

        let king = board.get_piece(sq("e1")).unwrap();
        assert_eq!(king.kind, PieceKind::King);
        assert_eq!(king.color, Color::White);
        assert!(!king.has_moved);
        assert_eq!(board.get_piece(sq("d8")).unwrap().kind, PieceKind::Queen);
    }

    #[test]
    fn test_placement_round_trip() {
        let text = "r3k2r/8/8/3p4/4P3/8/8/R3K2R";
        let board = Board::from_placement(text).unwrap();
        assert_eq!(board.to_placement(), text);
        assert_eq!(Board::from_placement(crate::constants::START_PLACEMENT).unwrap(), Board::new());
    }

    #[test]
    fn test_placement_infers_has_moved() {
        let board = Board::from_placement("4k3/8/8/8/4P3/8/3P4/R3K1R1").unwrap();
        assert!(board.get_piece(sq("e4")).unwrap().has_moved);
        assert!(!board.get_piece(sq("d2")).unwrap().has_moved);
        assert!(!board.get_piece(sq("a1")).unwrap().has_moved);
        assert!(board.get_piece(sq("g1")).unwrap().has_moved);
        assert!(!board.get_piece(sq("e1")).unwrap().has_moved);
    }

    #[test]
    fn test_full_fen_castling_field() {
        let board = Board::from_placement("r3k2r/8/8/8/8/8/8/R3K2R w Kq - 0 1").unwrap();
        assert!(!board.get_piece(sq("h1")).unwrap().has_moved);
        assert!(board.get_piece(sq("a1")).unwrap().has_moved);
        assert!(!board.get_piece(sq("e1")).unwrap().has_moved);
        assert!(board.get_piece(sq("h8")).unwrap().has_moved);
        assert!(!board.get_piece(sq("a8")).unwrap().has_moved);
    }

    #[test]
    fn test_placement_rejects_malformed_text() {
        assert!(Board::from_placement("").is_err());
        assert!(Board::from_placement("8/8/8").is_err());
        assert!(Board::from_placement("9/8/8/8/8/8/8/8").is_err());
        assert!(Board::from_placement("7x/8/8/8/8/8/8/8").is_err());
        assert!(Board::from_placement("7/8/8/8/8/8/8/8").is_err());
        assert!(Board::from_placement("44P/8/8/8/8/8/8/8").is_err());

        let long_rank = format!("{}/8/8/8/8/8/8/8", "8".repeat(40));
        assert!(matches!(
            Board::from_placement(&long_rank),
            Err(ChessEngineError::InvalidPlacement { .. })
        ));
    }

    #[test]
    fn test_move_piece_marks_moved_and_captures() {
        let mut board = Board::from_placement("4k3/8/8/3p4/4P3/8/8/4K3").unwrap();
        board.move_piece(sq("e4"), sq("d5"));

        let pawn = board.get_piece(sq("d5")).unwrap();
        assert_eq!(pawn.color, Color::White);
        assert_eq!(pawn.square, sq("d5"));
        assert!(pawn.has_moved);
        assert!(board.get_piece(sq("e4")).is_none());
        assert_eq!(board.pieces().count(), 3);
    }

    #[test]
    fn test_move_piece_castles_rook() {
        let mut board = Board::from_placement("4k3/8/8/8/8/8/8/R3K2R").unwrap();
        board.move_piece(sq("e1"), sq("g1"));

        let rook = board.get_piece(sq("f1")).unwrap();
        assert_eq!(rook.kind, PieceKind::Rook);
        assert!(rook.has_moved);
        assert!(board.get_piece(sq("h1")).is_none());

        let mut long = Board::from_placement("4k3/8/8/8/8/8/8/R3K2R").unwrap();
        long.move_piece(sq("e1"), sq("c1"));
        assert_eq!(long.get_piece(sq("d1")).unwrap().kind, PieceKind::Rook);
        assert!(long.get_piece(sq("a1")).is_none());
    }

    #[test]
    fn test_move_piece_promotes_to_queen() {
        let mut board = Board::from_placement("7k/P7/8/8/8/8/8/K7").unwrap();
        board.move_piece(sq("a7"), sq("a8"));
        assert_eq!(board.get_piece(sq("a8")).unwrap().kind, PieceKind::Queen);
    }

    #[test]
    fn test_key_restored_by_raw_writes() {
        let mut board = Board::new();
        let before = board.clone();
        let pawn = board.get_piece(sq("e2"));
        let target = board.get_piece(sq("e4"));

        board.move_piece(sq("e2"), sq("e4"));
        assert_ne!(board.position_key(), before.position_key());

        board.set_piece(sq("e2"), pawn);
        board.set_piece(sq("e4"), target);
        assert_eq!(board, before);
        assert_eq!(board.position_key(), hash::full_key(&board));
    }

    #[test]
    fn test_castling_rook_squares() {
        assert_eq!(castling_rook_squares(sq("e1"), sq("g1")), (sq("h1"), sq("f1")));
        assert_eq!(castling_rook_squares(sq("e8"), sq("c8")), (sq("a8"), sq("d8")));
    }
}

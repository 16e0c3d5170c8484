//! Plain-text board rendering

use chess_ai::{Board, SearchBoard, Square};

/// Board as text, rank 8 at the top, `.` for empty squares
pub fn render_board(board: &Board) -> String {
    let mut out = String::new();
    for row in 0..8u8 {
        out.push(char::from(b'8' - row));
        out.push(' ');
        for col in 0..8u8 {
            let letter = Square::new(row, col)
                .ok()
                .and_then(|square| board.get_piece(square))
                .map_or('.', |piece| piece.letter());
            out.push(letter);
            if col < 7 {
                out.push(' ');
            }
        }
        out.push('\n');
    }
    out.push_str("  a b c d e f g h\n");
    out
}

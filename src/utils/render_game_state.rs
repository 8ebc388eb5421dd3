//! Terminal-oriented Unicode board renderer.
//!
//! Draws the board from white's side with rank 8 on top, for debugging, the
//! self-play binary and test diagnostics.

use crate::game_state::chess_types::*;

pub fn render_game_state(game_state: &GameState) -> String {
    let mut out = String::new();

    out.push_str("  a b c d e f g h\n");

    for row in 0..8u8 {
        let rank = char::from(b'8' - row);
        out.push(rank);
        out.push(' ');

        for col in 0..8u8 {
            match game_state.piece_at(Square::at(row, col)) {
                Some(piece) => out.push(piece_to_unicode(piece)),
                None => out.push('·'),
            }

            if col < 7 {
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(rank);
        out.push('\n');
    }

    out.push_str("  a b c d e f g h");

    out
}

pub fn piece_to_unicode(piece: Piece) -> char {
    match (piece.color, piece.kind) {
        (Color::White, PieceKind::Pawn) => '♙',
        (Color::White, PieceKind::Knight) => '♘',
        (Color::White, PieceKind::Bishop) => '♗',
        (Color::White, PieceKind::Rook) => '♖',
        (Color::White, PieceKind::Queen) => '♕',
        (Color::White, PieceKind::King) => '♔',
        (Color::Black, PieceKind::Pawn) => '♟',
        (Color::Black, PieceKind::Knight) => '♞',
        (Color::Black, PieceKind::Bishop) => '♝',
        (Color::Black, PieceKind::Rook) => '♜',
        (Color::Black, PieceKind::Queen) => '♛',
        (Color::Black, PieceKind::King) => '♚',
    }
}

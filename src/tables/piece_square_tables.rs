//! Positional bonuses per piece kind, written from white's side with row 0
//! being rank 8. Black reads the same tables with rows mirrored.

use crate::game_state::chess_types::{Color, Piece, PieceKind, Square};

pub type PieceSquareTable = [[i32; 8]; 8];

pub const PAWN_TABLE: PieceSquareTable = [
    [0, 0, 0, 0, 0, 0, 0, 0],
    [50, 50, 50, 50, 50, 50, 50, 50],
    [10, 10, 20, 30, 30, 20, 10, 10],
    [5, 5, 10, 25, 25, 10, 5, 5],
    [0, 0, 0, 20, 20, 0, 0, 0],
    [5, -5, -10, 0, 0, -10, -5, 5],
    [5, 10, 10, -20, -20, 10, 10, 5],
    [0, 0, 0, 0, 0, 0, 0, 0],
];

pub const KNIGHT_TABLE: PieceSquareTable = [
    [-50, -40, -30, -30, -30, -30, -40, -50],
    [-40, -20, 0, 0, 0, 0, -20, -40],
    [-30, 0, 10, 15, 15, 10, 0, -30],
    [-30, 5, 15, 20, 20, 15, 5, -30],
    [-30, 0, 15, 20, 20, 15, 0, -30],
    [-30, 5, 10, 15, 15, 10, 5, -30],
    [-40, -20, 0, 5, 5, 0, -20, -40],
    [-50, -40, -30, -30, -30, -30, -40, -50],
];

pub const BISHOP_TABLE: PieceSquareTable = [
    [-20, -10, -10, -10, -10, -10, -10, -20],
    [-10, 0, 0, 0, 0, 0, 0, -10],
    [-10, 0, 10, 10, 10, 10, 0, -10],
    [-10, 5, 5, 10, 10, 5, 5, -10],
    [-10, 0, 5, 10, 10, 5, 0, -10],
    [-10, 10, 5, 10, 10, 5, 10, -10],
    [-10, 5, 0, 0, 0, 0, 5, -10],
    [-20, -10, -10, -10, -10, -10, -10, -20],
];

pub const ROOK_TABLE: PieceSquareTable = [
    [0, 0, 0, 0, 0, 0, 0, 0],
    [5, 10, 10, 10, 10, 10, 10, 5],
    [-5, 0, 0, 0, 0, 0, 0, -5],
    [-5, 0, 0, 0, 0, 0, 0, -5],
    [-5, 0, 0, 0, 0, 0, 0, -5],
    [-5, 0, 0, 0, 0, 0, 0, -5],
    [-5, 0, 0, 0, 0, 0, 0, -5],
    [0, 0, 0, 5, 5, 0, 0, 0],
];

pub const QUEEN_TABLE: PieceSquareTable = [
    [-20, -10, -10, -5, -5, -10, -10, -20],
    [-10, 0, 0, 0, 0, 0, 0, -10],
    [-10, 0, 5, 5, 5, 5, 0, -10],
    [-5, 0, 5, 5, 5, 5, 0, -5],
    [0, 0, 5, 5, 5, 5, 0, -5],
    [-10, 5, 5, 5, 5, 5, 0, -10],
    [-10, 0, 5, 0, 0, 0, 0, -10],
    [-20, -10, -10, -5, -5, -10, -10, -20],
];

pub const KING_TABLE: PieceSquareTable = [
    [-30, -40, -40, -50, -50, -40, -40, -30],
    [-30, -40, -40, -50, -50, -40, -40, -30],
    [-30, -40, -40, -50, -50, -40, -40, -30],
    [-30, -40, -40, -50, -50, -40, -40, -30],
    [-20, -30, -30, -40, -40, -30, -30, -20],
    [-10, -20, -20, -20, -20, -20, -20, -10],
    [20, 20, 0, 0, 0, 0, 20, 20],
    [20, 30, 10, 0, 0, 10, 30, 20],
];

#[inline]
pub const fn table_for(kind: PieceKind) -> &'static PieceSquareTable {
    match kind {
        PieceKind::Pawn => &PAWN_TABLE,
        PieceKind::Knight => &KNIGHT_TABLE,
        PieceKind::Bishop => &BISHOP_TABLE,
        PieceKind::Rook => &ROOK_TABLE,
        PieceKind::Queen => &QUEEN_TABLE,
        PieceKind::King => &KING_TABLE,
    }
}

/// Bonus for `piece` standing on `square`, from that piece's own side.
#[inline]
pub fn positional_bonus(piece: Piece, square: Square) -> i32 {
    let row = match piece.color {
        Color::White => square.row(),
        Color::Black => 7 - square.row(),
    };
    table_for(piece.kind)[row as usize][square.col() as usize]
}

#[cfg(test)]
mod tests {
    use super::positional_bonus;
    use crate::game_state::chess_types::*;

    #[test]
    fn black_reads_tables_mirrored() {
        let white_knight = Piece::new(Color::White, PieceKind::Knight);
        let black_knight = Piece::new(Color::Black, PieceKind::Knight);
        // f3 for white mirrors f6 for black.
        assert_eq!(
            positional_bonus(white_knight, Square::at(5, 5)),
            positional_bonus(black_knight, Square::at(2, 5))
        );

        let white_pawn = Piece::new(Color::White, PieceKind::Pawn);
        let black_pawn = Piece::new(Color::Black, PieceKind::Pawn);
        assert_eq!(positional_bonus(white_pawn, Square::at(1, 0)), 50);
        assert_eq!(positional_bonus(black_pawn, Square::at(6, 0)), 50);
    }
}

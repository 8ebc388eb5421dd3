//! The 8x8 grid of optional pieces.
//!
//! `Board` is `Copy` so legality checks can probe a scratch copy without
//! touching the live game state.

use crate::game_state::chess_rules::BACK_RANK_ORDER;
use crate::game_state::chess_types::{Color, Piece, PieceKind, Square};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Board {
    squares: [[Option<Piece>; 8]; 8],
}

impl Board {
    #[inline]
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn starting() -> Self {
        let mut board = Self::empty();
        for (col, kind) in BACK_RANK_ORDER.iter().copied().enumerate() {
            let col = col as u8;
            board.set(Square::at(0, col), Some(Piece::new(Color::Black, kind)));
            board.set(
                Square::at(1, col),
                Some(Piece::new(Color::Black, PieceKind::Pawn)),
            );
            board.set(
                Square::at(6, col),
                Some(Piece::new(Color::White, PieceKind::Pawn)),
            );
            board.set(Square::at(7, col), Some(Piece::new(Color::White, kind)));
        }
        board
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.squares[square.row() as usize][square.col() as usize]
    }

    #[inline]
    pub fn is_empty(&self, square: Square) -> bool {
        self.piece_at(square).is_none()
    }

    #[inline]
    pub fn set(&mut self, square: Square, piece: Option<Piece>) {
        self.squares[square.row() as usize][square.col() as usize] = piece;
    }

    #[inline]
    pub fn take(&mut self, square: Square) -> Option<Piece> {
        self.squares[square.row() as usize][square.col() as usize].take()
    }

    /// Occupied squares in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| self.piece_at(sq).map(|piece| (sq, piece)))
    }

    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.pieces()
            .find(|(_, piece)| piece.color == color && piece.kind == PieceKind::King)
            .map(|(sq, _)| sq)
    }
}

//! Full legal move generation pipeline.
//!
//! Dispatches per-piece pseudo-legal generation, then filters out moves that
//! leave the mover's own king attacked by playing them on a scratch copy of
//! the board.

use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply::place_on_board;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_moves_king::generate_king_moves;
use crate::move_generation::legal_moves_knight::generate_knight_moves;
use crate::move_generation::legal_moves_pawn::generate_pawn_moves;
use crate::move_generation::legal_moves_sliders::{
    generate_bishop_moves, generate_queen_moves, generate_rook_moves,
};
use crate::moves::move_descriptions::Move;

impl GameState {
    /// Geometrically valid moves for the piece on `square`, ignoring whether
    /// they expose its own king. Empty for an empty square.
    pub fn pseudo_legal_moves(&self, square: Square) -> Vec<Move> {
        let mut out = Vec::with_capacity(32);
        self.push_pseudo_legal_moves(square, &mut out);
        out
    }

    fn push_pseudo_legal_moves(&self, square: Square, out: &mut Vec<Move>) {
        let Some(piece) = self.board.piece_at(square) else {
            return;
        };
        let color = piece.color;
        match piece.kind {
            PieceKind::Pawn => generate_pawn_moves(self, square, color, out),
            PieceKind::Knight => generate_knight_moves(&self.board, square, color, out),
            PieceKind::Bishop => generate_bishop_moves(&self.board, square, color, out),
            PieceKind::Rook => generate_rook_moves(&self.board, square, color, out),
            PieceKind::Queen => generate_queen_moves(&self.board, square, color, out),
            PieceKind::King => generate_king_moves(self, square, color, out),
        }
    }

    /// Pseudo-legal moves for the piece on `square` that do not leave its
    /// own king attacked. Empty unless the piece belongs to the side to move.
    pub fn legal_moves(&self, square: Square) -> Vec<Move> {
        let mut out = Vec::with_capacity(32);
        self.push_legal_moves(square, &mut out);
        out
    }

    fn push_legal_moves(&self, square: Square, out: &mut Vec<Move>) {
        let Some(piece) = self.board.piece_at(square) else {
            return;
        };
        if piece.color != self.side_to_move {
            return;
        }
        let start = out.len();
        self.push_pseudo_legal_moves(square, out);

        let mut kept = start;
        for idx in start..out.len() {
            let mv = out[idx];
            if self.keeps_king_safe(mv, piece.color) {
                out[kept] = mv;
                kept += 1;
            }
        }
        out.truncate(kept);
    }

    /// Union of [`GameState::legal_moves`] over every piece of `color`; empty
    /// when `color` is not to move.
    pub fn all_legal_moves(&self, color: Color) -> Vec<Move> {
        let mut out = Vec::with_capacity(64);
        for (square, piece) in self.board.pieces() {
            if piece.color == color {
                self.push_legal_moves(square, &mut out);
            }
        }
        out
    }

    /// Cheaper than `!all_legal_moves(color).is_empty()`: stops at the first hit.
    pub fn has_legal_moves(&self, color: Color) -> bool {
        let mut scratch = Vec::with_capacity(32);
        self.board.pieces().any(|(square, piece)| {
            if piece.color != color {
                return false;
            }
            scratch.clear();
            self.push_legal_moves(square, &mut scratch);
            !scratch.is_empty()
        })
    }

    fn keeps_king_safe(&self, mv: Move, color: Color) -> bool {
        let mut probe = self.board;
        if place_on_board(&mut probe, mv, PieceKind::Queen).is_none() {
            return false;
        }
        !is_king_in_check(&probe, color)
    }
}

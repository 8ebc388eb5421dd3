//! Static position evaluation.
//!
//! Scores are centipawns from white's side: positive favors white, negative
//! favors black. Search code talks to the [`BoardScorer`] trait so a different
//! heuristic can be dropped in without touching minimax.

use crate::game_state::chess_types::*;
use crate::tables::piece_square_tables::positional_bonus;

/// Magnitude of a checkmate score before the depth bias is applied.
pub const MATE_SCORE: i32 = 99_999;

pub trait BoardScorer {
    /// Score from white's side.
    fn score(&self, board: &Board) -> i32;
}

/// Material plus piece-square bonuses.
#[derive(Debug, Clone, Copy, Default)]
pub struct MaterialPstScorer;

impl BoardScorer for MaterialPstScorer {
    #[inline]
    fn score(&self, board: &Board) -> i32 {
        evaluate(board)
    }
}

#[inline]
pub const fn piece_value(kind: PieceKind) -> i32 {
    match kind {
        PieceKind::Pawn => 100,
        PieceKind::Knight => 320,
        PieceKind::Bishop => 330,
        PieceKind::Rook => 500,
        PieceKind::Queen => 900,
        PieceKind::King => 20_000,
    }
}

/// Sum over pieces of value plus positional bonus, white minus black.
pub fn evaluate(board: &Board) -> i32 {
    board
        .pieces()
        .map(|(square, piece)| {
            let value = piece_value(piece.kind) + positional_bonus(piece, square);
            match piece.color {
                Color::White => value,
                Color::Black => -value,
            }
        })
        .sum()
}

impl GameState {
    /// [`evaluate`] applied to the current board.
    pub fn evaluate(&self) -> i32 {
        evaluate(&self.board)
    }
}

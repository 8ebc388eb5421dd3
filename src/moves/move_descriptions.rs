use crate::game_state::chess_types::{PieceKind, Square};
use crate::utils::algebraic::square_to_algebraic;

/// Special semantics of a move. At most one applies to any move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MoveKind {
    #[default]
    Normal,
    DoublePawnPush,
    EnPassant,
    Promotion,
    CastleKingSide,
    CastleQueenSide,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub kind: MoveKind,
}

impl Move {
    #[inline]
    pub const fn new(from: Square, to: Square) -> Self {
        Self {
            from,
            to,
            kind: MoveKind::Normal,
        }
    }

    #[inline]
    pub const fn with_kind(from: Square, to: Square, kind: MoveKind) -> Self {
        Self { from, to, kind }
    }

    #[inline]
    pub fn is_promotion(self) -> bool {
        self.kind == MoveKind::Promotion
    }

    /// Square of the pawn removed by an en-passant capture: same row as the
    /// capturing pawn's origin, same column as its destination.
    #[inline]
    pub fn en_passant_victim_square(self) -> Square {
        Square::at(self.from.row(), self.to.col())
    }

    /// Four-character coordinate encoding (`e2e4`) used as opening-book token.
    pub fn book_token(self) -> String {
        let mut out = square_to_algebraic(self.from);
        out.push_str(&square_to_algebraic(self.to));
        out
    }

    /// Long algebraic notation; promotions carry the chosen piece letter.
    pub fn to_lan(self, promotion: Option<PieceKind>) -> String {
        let mut out = self.book_token();
        if self.is_promotion() {
            out.push(promotion.unwrap_or(PieceKind::Queen).letter());
        }
        out
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_lan(None))
    }
}

use crate::game_state::chess_types::*;
use crate::moves::move_descriptions::Move;

/// What a committed move took off the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capture {
    /// The piece standing on the destination square.
    OnTarget(Piece),
    /// A pawn taken en passant; `square` is where it stood, not the destination.
    EnPassant { square: Square, piece: Piece },
}

impl Capture {
    #[inline]
    pub fn piece(self) -> Piece {
        match self {
            Capture::OnTarget(piece) => piece,
            Capture::EnPassant { piece, .. } => piece,
        }
    }
}

/// Single journal entry written by `commit` and consumed by `undo`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveRecord {
    pub mv: Move,
    pub moved_piece: Piece,
    pub promoted_to: Option<PieceKind>,
    pub captured: Option<Capture>,

    pub prev_castling_rights: CastlingRights,
    pub prev_en_passant_square: Option<Square>,
    pub prev_halfmove_clock: u16,
    pub prev_fullmove_number: u16,
}

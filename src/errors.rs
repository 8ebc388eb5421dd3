//! Crate-wide error type.
//!
//! Parsing helpers (squares, long algebraic moves, FEN) and
//! `GameState::try_commit` return `Result<_, ChessError>`. The plain game
//! API (`commit`, `undo`, book lookup, search) never fails: it reports a
//! rejected or empty outcome through its return value instead.

use crate::game_state::chess_types::{PieceKind, Square};
use crate::moves::move_descriptions::Move;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChessError {
    #[error("invalid square notation: {0:?}")]
    InvalidSquare(String),

    #[error("invalid move notation: {0:?}")]
    InvalidMoveNotation(String),

    #[error("invalid FEN: {0}")]
    InvalidFen(String),

    #[error("illegal move request: {0}")]
    IllegalMove(IllegalMoveReason),
}

/// Why a move request was declined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum IllegalMoveReason {
    #[error("no piece on {0}")]
    EmptySquare(Square),

    #[error("piece does not belong to the side to move")]
    WrongSideToMove,

    #[error("cannot promote to {0:?}")]
    InvalidPromotion(PieceKind),

    #[error("{0} is not a legal move")]
    NotLegal(Move),
}

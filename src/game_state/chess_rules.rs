//! Canonical chess-rule constants.
//!
//! Starting layout, home columns for kings and rooks, and the castling
//! geometry shared by move generation and move application.

use crate::game_state::chess_types::PieceKind;

/// Standard chess starting position in Forsyth-Edwards Notation (FEN).
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Back-rank piece order from the a-file to the h-file.
pub const BACK_RANK_ORDER: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

pub const KING_HOME_COL: u8 = 4;
pub const KING_SIDE_ROOK_COL: u8 = 7;
pub const QUEEN_SIDE_ROOK_COL: u8 = 0;

/// King and rook destination columns after castling.
pub const KING_SIDE_KING_TO_COL: u8 = 6;
pub const KING_SIDE_ROOK_TO_COL: u8 = 5;
pub const QUEEN_SIDE_KING_TO_COL: u8 = 2;
pub const QUEEN_SIDE_ROOK_TO_COL: u8 = 3;

/// Columns that must be empty for each castle.
pub const KING_SIDE_EMPTY_COLS: [u8; 2] = [5, 6];
pub const QUEEN_SIDE_EMPTY_COLS: [u8; 3] = [1, 2, 3];

/// Columns the king crosses or lands on; none may be attacked.
pub const KING_SIDE_TRANSIT_COLS: [u8; 2] = [5, 6];
pub const QUEEN_SIDE_TRANSIT_COLS: [u8; 2] = [3, 2];

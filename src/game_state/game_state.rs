//! Canonical game state owned by the rules engine.
//!
//! `GameState` stores the board, turn and rights flags, clocks, terminal
//! status, captured pieces and the undo journal. Move generation lives in
//! `move_generation::legal_move_generator`, mutation in
//! `move_generation::legal_move_apply`; the search borrows this value
//! mutably and must hand it back unchanged.

use crate::errors::ChessError;
use crate::game_state::chess_types::*;
use crate::utils::fen_generator::generate_fen;
use crate::utils::fen_parser::parse_fen;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub(crate) board: Board,

    // --- Side and state flags ---
    pub(crate) side_to_move: Color,
    pub(crate) castling_rights: CastlingRights,
    pub(crate) en_passant_square: Option<Square>,

    // --- Clocks / move counters ---
    pub(crate) halfmove_clock: u16,
    pub(crate) fullmove_number: u16,

    // --- Terminal status, recomputed on every commit ---
    pub(crate) in_check: bool,
    pub(crate) game_result: GameResult,

    // Indexed by the color of the captured piece.
    pub(crate) captured_pieces: [Vec<PieceKind>; 2],

    // --- Undo journal ---
    pub(crate) undo_stack: Vec<MoveRecord>,

    // False for positions loaded from an arbitrary FEN; gates the opening book.
    pub(crate) from_initial_position: bool,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            board: Board::empty(),

            side_to_move: Color::White,
            castling_rights: CastlingRights::NONE,
            en_passant_square: None,

            halfmove_clock: 0,
            fullmove_number: 1,

            in_check: false,
            game_result: GameResult::Ongoing,

            captured_pieces: [Vec::new(), Vec::new()],
            undo_stack: Vec::new(),
            from_initial_position: false,
        }
    }
}

impl GameState {
    #[inline]
    pub fn new_empty() -> Self {
        Self::default()
    }

    pub fn new_game() -> Self {
        Self {
            board: Board::starting(),
            castling_rights: CastlingRights::ALL,
            from_initial_position: true,
            ..Self::default()
        }
    }

    /// Throw away the current game and return to the initial position.
    pub fn reset(&mut self) {
        *self = Self::new_game();
    }

    #[inline]
    pub fn from_fen(fen: &str) -> Result<Self, ChessError> {
        parse_fen(fen)
    }

    #[inline]
    pub fn to_fen(&self) -> String {
        generate_fen(self)
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.board.piece_at(square)
    }

    #[inline]
    pub fn turn(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling_rights
    }

    #[inline]
    pub fn en_passant_square(&self) -> Option<Square> {
        self.en_passant_square
    }

    #[inline]
    pub fn halfmove_clock(&self) -> u16 {
        self.halfmove_clock
    }

    #[inline]
    pub fn fullmove_number(&self) -> u16 {
        self.fullmove_number
    }

    /// Whether the side to move is in check, as of the last commit or undo.
    #[inline]
    pub fn in_check(&self) -> bool {
        self.in_check
    }

    #[inline]
    pub fn game_over(&self) -> bool {
        self.game_result.is_terminal()
    }

    #[inline]
    pub fn game_result(&self) -> GameResult {
        self.game_result
    }

    /// Pieces of `color` that have been taken off the board, in capture order.
    #[inline]
    pub fn captured_pieces(&self, color: Color) -> &[PieceKind] {
        &self.captured_pieces[color.index()]
    }

    #[inline]
    pub fn move_history(&self) -> &[MoveRecord] {
        &self.undo_stack
    }

    /// Number of committed plies.
    #[inline]
    pub fn move_count(&self) -> usize {
        self.undo_stack.len()
    }

    #[inline]
    pub fn from_initial_position(&self) -> bool {
        self.from_initial_position
    }
}

//! Value types shared by the rules engine and the search.
//!
//! Squares are addressed as `(row, col)` with row 0 being black's back rank
//! (rank 8) and row 7 white's back rank (rank 1).

pub use crate::game_state::board::Board;
pub use crate::game_state::game_state::GameState;
pub use crate::game_state::undo_state::{Capture, MoveRecord};

/// Side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Row holding this side's king and rooks at the start of the game.
    #[inline]
    pub const fn home_row(self) -> u8 {
        match self {
            Color::White => 7,
            Color::Black => 0,
        }
    }

    /// Row delta of a single pawn step.
    #[inline]
    pub const fn pawn_direction(self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    #[inline]
    pub const fn pawn_start_row(self) -> u8 {
        match self {
            Color::White => 6,
            Color::Black => 1,
        }
    }

    #[inline]
    pub const fn promotion_row(self) -> u8 {
        match self {
            Color::White => 0,
            Color::Black => 7,
        }
    }

    /// Row an en-passant capture by this side lands on.
    #[inline]
    pub const fn en_passant_capture_row(self) -> u8 {
        match self {
            Color::White => 2,
            Color::Black => 5,
        }
    }
}

/// Piece kind (color is carried separately by [`Piece`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            PieceKind::Pawn => 0,
            PieceKind::Knight => 1,
            PieceKind::Bishop => 2,
            PieceKind::Rook => 3,
            PieceKind::Queen => 4,
            PieceKind::King => 5,
        }
    }

    /// Lower-case letter used by FEN and long algebraic promotion suffixes.
    #[inline]
    pub const fn letter(self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        }
    }

    pub fn from_letter(letter: char) -> Option<Self> {
        match letter.to_ascii_lowercase() {
            'p' => Some(PieceKind::Pawn),
            'n' => Some(PieceKind::Knight),
            'b' => Some(PieceKind::Bishop),
            'r' => Some(PieceKind::Rook),
            'q' => Some(PieceKind::Queen),
            'k' => Some(PieceKind::King),
            _ => None,
        }
    }

    /// Kinds a pawn may turn into.
    #[inline]
    pub const fn is_promotion_target(self) -> bool {
        matches!(
            self,
            PieceKind::Knight | PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen
        )
    }
}

/// A colored piece. Promotion replaces the value, it never edits `kind`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
}

impl Piece {
    #[inline]
    pub const fn new(color: Color, kind: PieceKind) -> Self {
        Self { color, kind }
    }
}

/// A board coordinate, always inside the 8x8 grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    row: u8,
    col: u8,
}

impl Square {
    #[inline]
    pub const fn new(row: u8, col: u8) -> Option<Self> {
        if row < 8 && col < 8 {
            Some(Self { row, col })
        } else {
            None
        }
    }

    /// Crate-internal constructor for coordinates known to be on the board.
    #[inline]
    pub(crate) const fn at(row: u8, col: u8) -> Self {
        debug_assert!(row < 8 && col < 8);
        Self { row, col }
    }

    #[inline]
    pub const fn row(self) -> u8 {
        self.row
    }

    #[inline]
    pub const fn col(self) -> u8 {
        self.col
    }

    #[inline]
    pub fn offset(self, d_row: i8, d_col: i8) -> Option<Self> {
        let row = self.row as i8 + d_row;
        let col = self.col as i8 + d_col;
        if (0..8).contains(&row) && (0..8).contains(&col) {
            Some(Self {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    /// Every square, row-major from a8 to h1.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..8u8).flat_map(|row| (0..8u8).map(move |col| Square { row, col }))
    }
}

/// Four independent castling flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CastlingRights {
    pub white_king_side: bool,
    pub white_queen_side: bool,
    pub black_king_side: bool,
    pub black_queen_side: bool,
}

impl CastlingRights {
    pub const ALL: CastlingRights = CastlingRights {
        white_king_side: true,
        white_queen_side: true,
        black_king_side: true,
        black_queen_side: true,
    };

    pub const NONE: CastlingRights = CastlingRights {
        white_king_side: false,
        white_queen_side: false,
        black_king_side: false,
        black_queen_side: false,
    };

    #[inline]
    pub const fn king_side(self, color: Color) -> bool {
        match color {
            Color::White => self.white_king_side,
            Color::Black => self.black_king_side,
        }
    }

    #[inline]
    pub const fn queen_side(self, color: Color) -> bool {
        match color {
            Color::White => self.white_queen_side,
            Color::Black => self.black_queen_side,
        }
    }

    pub fn clear_color(&mut self, color: Color) {
        match color {
            Color::White => {
                self.white_king_side = false;
                self.white_queen_side = false;
            }
            Color::Black => {
                self.black_king_side = false;
                self.black_queen_side = false;
            }
        }
    }

    /// Clear whichever right belongs to a rook starting on `square`.
    pub fn clear_rook_home(&mut self, square: Square) {
        match (square.row(), square.col()) {
            (7, 0) => self.white_queen_side = false,
            (7, 7) => self.white_king_side = false,
            (0, 0) => self.black_queen_side = false,
            (0, 7) => self.black_king_side = false,
            _ => {}
        }
    }
}

/// Terminal status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameResult {
    #[default]
    Ongoing,
    WhiteWinsByCheckmate,
    BlackWinsByCheckmate,
    DrawByStalemate,
}

impl GameResult {
    #[inline]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, GameResult::Ongoing)
    }

    /// The human-readable result string handed to the presentation and
    /// persistence layers. Empty while the game is running.
    pub const fn as_str(self) -> &'static str {
        match self {
            GameResult::Ongoing => "",
            GameResult::WhiteWinsByCheckmate => "White wins by checkmate",
            GameResult::BlackWinsByCheckmate => "Black wins by checkmate",
            GameResult::DrawByStalemate => "Draw by stalemate",
        }
    }

    pub const fn winner(self) -> Option<Color> {
        match self {
            GameResult::WhiteWinsByCheckmate => Some(Color::White),
            GameResult::BlackWinsByCheckmate => Some(Color::Black),
            GameResult::Ongoing | GameResult::DrawByStalemate => None,
        }
    }
}

impl std::fmt::Display for GameResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

//! Conversions between `(row, col)` squares and coordinates such as `e4`.
//!
//! Row 0 is rank 8, so `a8` is `(0, 0)` and `h1` is `(7, 7)`.

use crate::errors::ChessError;
use crate::game_state::chess_types::Square;

const FILES: &[u8; 8] = b"abcdefgh";
const RANKS: &[u8; 8] = b"87654321";

/// Convert a coordinate (for example: "e4") to a square.
pub fn algebraic_to_square(square: &str) -> Result<Square, ChessError> {
    let invalid = || ChessError::InvalidSquare(square.to_owned());
    let &[file, rank] = square.as_bytes() else {
        return Err(invalid());
    };

    let col = FILES.iter().position(|&f| f == file).ok_or_else(invalid)?;
    let row = RANKS.iter().position(|&r| r == rank).ok_or_else(invalid)?;
    Square::new(row as u8, col as u8).ok_or_else(invalid)
}

/// Convert a square to its coordinate (for example: "e4").
pub fn square_to_algebraic(square: Square) -> String {
    let mut out = String::with_capacity(2);
    out.push(char::from(FILES[square.col() as usize]));
    out.push(char::from(RANKS[square.row() as usize]));
    out
}

impl std::fmt::Display for Square {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&square_to_algebraic(*self))
    }
}

use crate::game_state::chess_types::*;
use crate::moves::piece_offsets::{ALL_DIRECTIONS, KING_OFFSETS, KNIGHT_OFFSETS};

/// True if `attacker_color` could capture on `square` next move, whoever is
/// to move. Castling and en passant never attack, so they are not considered.
pub fn is_square_attacked(board: &Board, square: Square, attacker_color: Color) -> bool {
    let holds = |sq: Option<Square>, kind: PieceKind| {
        sq.and_then(|sq| board.piece_at(sq)) == Some(Piece::new(attacker_color, kind))
    };

    // An attacking pawn sits one step behind the target, from its own point of view.
    let pawn_row = -attacker_color.pawn_direction();
    if holds(square.offset(pawn_row, -1), PieceKind::Pawn)
        || holds(square.offset(pawn_row, 1), PieceKind::Pawn)
    {
        return true;
    }

    if KNIGHT_OFFSETS
        .iter()
        .any(|&(dr, dc)| holds(square.offset(dr, dc), PieceKind::Knight))
    {
        return true;
    }

    if KING_OFFSETS
        .iter()
        .any(|&(dr, dc)| holds(square.offset(dr, dc), PieceKind::King))
    {
        return true;
    }

    for (dr, dc) in ALL_DIRECTIONS {
        let orthogonal = dr == 0 || dc == 0;
        let mut cursor = square.offset(dr, dc);
        while let Some(sq) = cursor {
            if let Some(piece) = board.piece_at(sq) {
                if piece.color == attacker_color {
                    let slides_here = match piece.kind {
                        PieceKind::Queen => true,
                        PieceKind::Rook => orthogonal,
                        PieceKind::Bishop => !orthogonal,
                        PieceKind::Pawn | PieceKind::Knight | PieceKind::King => false,
                    };
                    if slides_here {
                        return true;
                    }
                }
                break;
            }
            cursor = sq.offset(dr, dc);
        }
    }

    false
}

/// A side without a king on the board is never in check.
#[inline]
pub fn is_king_in_check(board: &Board, color: Color) -> bool {
    let Some(king_sq) = board.king_square(color) else {
        return false;
    };
    is_square_attacked(board, king_sq, color.opposite())
}

impl GameState {
    #[inline]
    pub fn is_attacked_by(&self, square: Square, color: Color) -> bool {
        is_square_attacked(&self.board, square, color)
    }

    #[inline]
    pub fn is_in_check(&self, color: Color) -> bool {
        is_king_in_check(&self.board, color)
    }
}

#[cfg(test)]
mod tests {
    use super::{is_king_in_check, is_square_attacked};
    use crate::game_state::chess_types::*;
    use crate::utils::algebraic::algebraic_to_square;

    fn sq(name: &str) -> Square {
        algebraic_to_square(name).expect("valid square")
    }

    #[test]
    fn pawn_attacks_point_forward_only() {
        let game = GameState::from_fen("4k3/8/8/8/8/8/4P3/K7 w - - 0 1").expect("fen");
        assert!(is_square_attacked(game.board(), sq("d3"), Color::White));
        assert!(is_square_attacked(game.board(), sq("f3"), Color::White));
        assert!(!is_square_attacked(game.board(), sq("e3"), Color::White));
        assert!(!is_square_attacked(game.board(), sq("d1"), Color::White));
    }

    #[test]
    fn rays_stop_at_the_first_occupant() {
        let game = GameState::from_fen("4k3/8/8/8/r2P3K/8/8/8 w - - 0 1").expect("fen");
        assert!(is_square_attacked(game.board(), sq("c4"), Color::Black));
        assert!(is_square_attacked(game.board(), sq("d4"), Color::Black));
        assert!(!is_square_attacked(game.board(), sq("e4"), Color::Black));
        assert!(!is_king_in_check(game.board(), Color::White));
    }

    #[test]
    fn bishop_does_not_attack_orthogonally() {
        let game = GameState::from_fen("4k3/8/8/8/b6K/8/8/8 w - - 0 1").expect("fen");
        assert!(!is_square_attacked(game.board(), sq("h4"), Color::Black));
        assert!(is_square_attacked(game.board(), sq("e8"), Color::Black));
    }

    #[test]
    fn knight_gives_check() {
        let game = GameState::from_fen("4k3/8/3N4/8/8/8/8/4K3 b - - 0 1").expect("fen");
        assert!(game.is_in_check(Color::Black));
        assert!(!game.is_in_check(Color::White));
    }

    #[test]
    fn missing_king_is_not_in_check() {
        let game = GameState::from_fen("8/8/8/8/8/8/8/4K2r w - - 0 1").expect("fen");
        assert!(!game.is_in_check(Color::Black));
    }
}

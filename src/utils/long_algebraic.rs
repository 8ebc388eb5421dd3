//! Long algebraic notation (`e2e4`, `e7e8q`) and its resolution against the
//! legal moves of a position.

use crate::errors::{ChessError, IllegalMoveReason};
use crate::game_state::chess_types::*;
use crate::moves::move_descriptions::Move;
use crate::utils::algebraic::algebraic_to_square;

/// Split a long algebraic move into origin, destination and optional
/// promotion piece. Does not look at any position.
pub fn parse_long_algebraic(
    long_algebraic: &str,
) -> Result<(Square, Square, Option<PieceKind>), ChessError> {
    let invalid = || ChessError::InvalidMoveNotation(long_algebraic.to_owned());
    if !long_algebraic.is_ascii() || !(4..=5).contains(&long_algebraic.len()) {
        return Err(invalid());
    }

    let from = algebraic_to_square(&long_algebraic[0..2]).map_err(|_| invalid())?;
    let to = algebraic_to_square(&long_algebraic[2..4]).map_err(|_| invalid())?;
    let promotion = match long_algebraic[4..].chars().next() {
        None => None,
        Some(letter) => {
            let kind = PieceKind::from_letter(letter)
                .filter(|kind| kind.is_promotion_target())
                .ok_or_else(invalid)?;
            Some(kind)
        }
    };
    Ok((from, to, promotion))
}

impl GameState {
    /// Resolve a long algebraic move to a legal move for the side to move.
    /// A missing promotion suffix on a promotion means a queen.
    pub fn move_from_lan(
        &self,
        long_algebraic: &str,
    ) -> Result<(Move, Option<PieceKind>), ChessError> {
        let (from, to, promotion) = parse_long_algebraic(long_algebraic)?;

        let piece = self
            .board
            .piece_at(from)
            .ok_or(ChessError::IllegalMove(IllegalMoveReason::EmptySquare(from)))?;
        if piece.color != self.side_to_move {
            return Err(ChessError::IllegalMove(IllegalMoveReason::WrongSideToMove));
        }

        let mv = self
            .legal_moves(from)
            .into_iter()
            .find(|mv| mv.to == to)
            .ok_or(ChessError::IllegalMove(IllegalMoveReason::NotLegal(Move::new(
                from, to,
            ))))?;

        if promotion.is_some() && !mv.is_promotion() {
            return Err(ChessError::InvalidMoveNotation(long_algebraic.to_owned()));
        }
        Ok((mv, promotion))
    }
}

#[cfg(test)]
mod tests {
    use super::parse_long_algebraic;
    use crate::game_state::chess_types::*;
    use crate::moves::move_descriptions::MoveKind;

    #[test]
    fn parses_plain_and_promotion_moves() {
        let (from, to, promo) = parse_long_algebraic("e2e4").expect("parse");
        assert_eq!((from, to, promo), (Square::at(6, 4), Square::at(4, 4), None));

        let (_, _, promo) = parse_long_algebraic("a7a8n").expect("parse");
        assert_eq!(promo, Some(PieceKind::Knight));

        assert!(parse_long_algebraic("a7a8k").is_err());
        assert!(parse_long_algebraic("e2").is_err());
        assert!(parse_long_algebraic("e2e4qq").is_err());
    }

    #[test]
    fn resolves_special_move_kinds_from_the_position() {
        let game = GameState::new_game();
        let (mv, _) = game.move_from_lan("e2e4").expect("legal");
        assert_eq!(mv.kind, MoveKind::DoublePawnPush);

        let castle = GameState::from_fen("4k3/8/8/8/8/8/8/4K2R w K - 0 1").expect("fen");
        let (mv, _) = castle.move_from_lan("e1g1").expect("legal");
        assert_eq!(mv.kind, MoveKind::CastleKingSide);
    }

    #[test]
    fn rejects_moves_that_are_not_legal() {
        let game = GameState::new_game();
        assert!(game.move_from_lan("e2e5").is_err());
        assert!(game.move_from_lan("e7e5").is_err());
        assert!(game.move_from_lan("e2e4q").is_err());
    }
}

//! Move application: the journaled `commit`/`undo` pair used for real game
//! moves, and the lighter transient make/unmake pair used by search and
//! perft, which touches only the board, castling rights, en-passant target
//! and side to move.

use tracing::debug;

use crate::errors::{ChessError, IllegalMoveReason};
use crate::game_state::chess_rules::*;
use crate::game_state::chess_types::*;
use crate::moves::move_descriptions::{Move, MoveKind};

/// Snapshot restored by [`GameState::unmake_transient`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransientUndo {
    moved_piece: Piece,
    captured: Option<Capture>,
    prev_castling_rights: CastlingRights,
    prev_en_passant_square: Option<Square>,
    prev_side_to_move: Color,
}

/// Board-only effects of `mv`, in order: capture removal (the en-passant
/// victim square differs from the destination), relocation, promotion
/// substitution, castling rook relocation.
///
/// Returns the moved piece and the capture, or `None` (board untouched) when
/// the origin square is empty.
pub(crate) fn place_on_board(
    board: &mut Board,
    mv: Move,
    promotion: PieceKind,
) -> Option<(Piece, Option<Capture>)> {
    let moved = board.piece_at(mv.from)?;

    let captured = if mv.kind == MoveKind::EnPassant {
        let square = mv.en_passant_victim_square();
        board
            .take(square)
            .map(|piece| Capture::EnPassant { square, piece })
    } else {
        board.take(mv.to).map(Capture::OnTarget)
    };

    board.set(mv.from, None);
    let landed = if mv.is_promotion() {
        Piece::new(moved.color, promotion)
    } else {
        moved
    };
    board.set(mv.to, Some(landed));

    if let Some((rook_from, rook_to)) = castle_rook_squares(mv, moved.color) {
        let rook = board.take(rook_from);
        board.set(rook_to, rook);
    }

    Some((moved, captured))
}

/// Exact reverse of [`place_on_board`].
pub(crate) fn lift_from_board(board: &mut Board, mv: Move, moved: Piece, captured: Option<Capture>) {
    if let Some((rook_from, rook_to)) = castle_rook_squares(mv, moved.color) {
        let rook = board.take(rook_to);
        board.set(rook_from, rook);
    }

    board.set(mv.from, Some(moved));
    match captured {
        Some(Capture::OnTarget(piece)) => board.set(mv.to, Some(piece)),
        Some(Capture::EnPassant { square, piece }) => {
            board.set(mv.to, None);
            board.set(square, Some(piece));
        }
        None => board.set(mv.to, None),
    }
}

fn castle_rook_squares(mv: Move, color: Color) -> Option<(Square, Square)> {
    let row = color.home_row();
    match mv.kind {
        MoveKind::CastleKingSide => Some((
            Square::at(row, KING_SIDE_ROOK_COL),
            Square::at(row, KING_SIDE_ROOK_TO_COL),
        )),
        MoveKind::CastleQueenSide => Some((
            Square::at(row, QUEEN_SIDE_ROOK_COL),
            Square::at(row, QUEEN_SIDE_ROOK_TO_COL),
        )),
        _ => None,
    }
}

fn update_castling_rights(rights: &mut CastlingRights, moved: Piece, mv: Move) {
    match moved.kind {
        PieceKind::King => rights.clear_color(moved.color),
        PieceKind::Rook => rights.clear_rook_home(mv.from),
        _ => {}
    }
    // Landing on a rook home square removes that rook (or it already left).
    rights.clear_rook_home(mv.to);
}

fn en_passant_target_after(mv: Move) -> Option<Square> {
    if mv.kind == MoveKind::DoublePawnPush {
        Some(Square::at((mv.from.row() + mv.to.row()) / 2, mv.from.col()))
    } else {
        None
    }
}

impl GameState {
    /// Apply a move requested by a player. Returns `false` and leaves the
    /// state untouched when the request is not a legal move for the side to
    /// move. `promotion_choice` defaults to a queen.
    pub fn commit(&mut self, mv: Move, promotion_choice: Option<PieceKind>) -> bool {
        match self.try_commit(mv, promotion_choice) {
            Ok(()) => true,
            Err(err) => {
                debug!(%mv, %err, "move rejected");
                false
            }
        }
    }

    /// Like [`GameState::commit`] but reports why a move was rejected.
    pub fn try_commit(
        &mut self,
        mv: Move,
        promotion_choice: Option<PieceKind>,
    ) -> Result<(), ChessError> {
        let piece = self
            .board
            .piece_at(mv.from)
            .ok_or(ChessError::IllegalMove(IllegalMoveReason::EmptySquare(mv.from)))?;
        if piece.color != self.side_to_move {
            return Err(ChessError::IllegalMove(IllegalMoveReason::WrongSideToMove));
        }
        let promotion = promotion_choice.unwrap_or(PieceKind::Queen);
        if mv.is_promotion() && !promotion.is_promotion_target() {
            return Err(ChessError::IllegalMove(
                IllegalMoveReason::InvalidPromotion(promotion),
            ));
        }
        if !self.legal_moves(mv.from).contains(&mv) {
            return Err(ChessError::IllegalMove(IllegalMoveReason::NotLegal(mv)));
        }

        let (moved, captured) = place_on_board(&mut self.board, mv, promotion)
            .ok_or(ChessError::IllegalMove(IllegalMoveReason::EmptySquare(mv.from)))?;
        if let Some(capture) = captured {
            let taken = capture.piece();
            self.captured_pieces[taken.color.index()].push(taken.kind);
        }

        let record = MoveRecord {
            mv,
            moved_piece: moved,
            promoted_to: mv.is_promotion().then_some(promotion),
            captured,
            prev_castling_rights: self.castling_rights,
            prev_en_passant_square: self.en_passant_square,
            prev_halfmove_clock: self.halfmove_clock,
            prev_fullmove_number: self.fullmove_number,
        };

        update_castling_rights(&mut self.castling_rights, moved, mv);
        self.en_passant_square = en_passant_target_after(mv);

        if moved.kind == PieceKind::Pawn || captured.is_some() {
            self.halfmove_clock = 0;
        } else {
            self.halfmove_clock = self.halfmove_clock.saturating_add(1);
        }
        if moved.color == Color::Black {
            self.fullmove_number = self.fullmove_number.saturating_add(1);
        }

        self.side_to_move = moved.color.opposite();
        self.undo_stack.push(record);
        self.refresh_status();
        Ok(())
    }

    /// Take back the last committed move. `None` when there is nothing to undo.
    pub fn undo(&mut self) -> Option<MoveRecord> {
        let record = self.undo_stack.pop()?;

        lift_from_board(
            &mut self.board,
            record.mv,
            record.moved_piece,
            record.captured,
        );
        if let Some(capture) = record.captured {
            let taken = capture.piece();
            let list = &mut self.captured_pieces[taken.color.index()];
            if let Some(pos) = list.iter().rposition(|kind| *kind == taken.kind) {
                list.remove(pos);
            }
        }

        self.castling_rights = record.prev_castling_rights;
        self.en_passant_square = record.prev_en_passant_square;
        self.halfmove_clock = record.prev_halfmove_clock;
        self.fullmove_number = record.prev_fullmove_number;
        self.side_to_move = record.moved_piece.color;

        self.game_result = GameResult::Ongoing;
        self.in_check = self.is_in_check(self.side_to_move);
        Some(record)
    }

    /// Recompute `in_check` and the terminal result for the side to move.
    pub(crate) fn refresh_status(&mut self) {
        let side = self.side_to_move;
        self.in_check = self.is_in_check(side);
        self.game_result = if self.has_legal_moves(side) {
            GameResult::Ongoing
        } else if self.in_check {
            match side {
                Color::White => GameResult::BlackWinsByCheckmate,
                Color::Black => GameResult::WhiteWinsByCheckmate,
            }
        } else {
            GameResult::DrawByStalemate
        };
    }

    /// Play `mv` without journaling, promoting to a queen. Clocks, captured
    /// lists and terminal flags are left alone. Returns `None` (state
    /// untouched) when the origin square is empty.
    pub(crate) fn make_transient(&mut self, mv: Move) -> Option<TransientUndo> {
        let prev_castling_rights = self.castling_rights;
        let prev_en_passant_square = self.en_passant_square;
        let prev_side_to_move = self.side_to_move;

        let (moved, captured) = place_on_board(&mut self.board, mv, PieceKind::Queen)?;
        update_castling_rights(&mut self.castling_rights, moved, mv);
        self.en_passant_square = en_passant_target_after(mv);
        self.side_to_move = moved.color.opposite();

        Some(TransientUndo {
            moved_piece: moved,
            captured,
            prev_castling_rights,
            prev_en_passant_square,
            prev_side_to_move,
        })
    }

    pub(crate) fn unmake_transient(&mut self, mv: Move, undo: TransientUndo) {
        lift_from_board(&mut self.board, mv, undo.moved_piece, undo.captured);
        self.castling_rights = undo.prev_castling_rights;
        self.en_passant_square = undo.prev_en_passant_square;
        self.side_to_move = undo.prev_side_to_move;
    }
}

#[cfg(test)]
mod tests {
    use crate::errors::{ChessError, IllegalMoveReason};
    use crate::game_state::chess_types::*;
    use crate::moves::move_descriptions::{Move, MoveKind};
    use crate::utils::algebraic::algebraic_to_square;

    fn sq(name: &str) -> Square {
        algebraic_to_square(name).expect("valid square")
    }

    fn play(game: &mut GameState, lan: &str) {
        let (mv, promotion) = game.move_from_lan(lan).expect("legal move");
        assert!(game.commit(mv, promotion), "commit {lan}");
    }

    #[test]
    fn commit_then_undo_restores_everything() {
        let mut game = GameState::new_game();
        for lan in ["e2e4", "d7d5", "e4d5", "g8f6", "f1b5", "c7c6"] {
            let before = game.clone();
            play(&mut game, lan);
            assert_ne!(game, before);
            let mut probe = game.clone();
            assert!(probe.undo().is_some());
            assert_eq!(probe, before, "undo of {lan}");
        }
    }

    #[test]
    fn undo_on_empty_history_reports_nothing() {
        let mut game = GameState::new_game();
        assert!(game.undo().is_none());
        assert_eq!(game, GameState::new_game());
    }

    #[test]
    fn double_push_sets_and_next_move_clears_en_passant_target() {
        let mut game = GameState::new_game();
        play(&mut game, "e2e4");
        assert_eq!(game.en_passant_square(), Some(sq("e3")));
        play(&mut game, "g8f6");
        assert_eq!(game.en_passant_square(), None);
    }

    #[test]
    fn en_passant_removes_the_pawn_beside_not_behind() {
        let mut game = GameState::new_game();
        for lan in ["e2e4", "a7a6", "e4e5", "d7d5"] {
            play(&mut game, lan);
        }
        assert_eq!(game.en_passant_square(), Some(sq("d6")));

        let exd6 = Move::with_kind(sq("e5"), sq("d6"), MoveKind::EnPassant);
        assert!(game.commit(exd6, None));
        assert_eq!(game.piece_at(sq("d5")), None);
        assert_eq!(
            game.piece_at(sq("d6")),
            Some(Piece::new(Color::White, PieceKind::Pawn))
        );
        assert_eq!(game.captured_pieces(Color::Black), &[PieceKind::Pawn]);

        let record = game.undo().expect("undo");
        assert!(matches!(record.captured, Some(Capture::EnPassant { .. })));
        assert_eq!(
            game.piece_at(sq("d5")),
            Some(Piece::new(Color::Black, PieceKind::Pawn))
        );
        assert_eq!(game.piece_at(sq("d6")), None);
        assert!(game.captured_pieces(Color::Black).is_empty());
    }

    #[test]
    fn castling_moves_the_rook_and_clears_rights() {
        let mut game = GameState::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").expect("fen");
        let before = game.clone();
        play(&mut game, "e1g1");
        assert_eq!(
            game.piece_at(sq("f1")),
            Some(Piece::new(Color::White, PieceKind::Rook))
        );
        assert_eq!(game.piece_at(sq("h1")), None);
        assert!(!game.castling_rights().white_king_side);
        assert!(!game.castling_rights().white_queen_side);
        assert!(game.castling_rights().black_king_side);

        game.undo();
        assert_eq!(game, before);
    }

    #[test]
    fn capturing_on_rook_home_clears_the_opponent_right() {
        let mut game = GameState::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").expect("fen");
        play(&mut game, "a1a8");
        let rights = game.castling_rights();
        assert!(!rights.white_queen_side);
        assert!(!rights.black_queen_side);
        assert!(rights.black_king_side);
        assert!(rights.white_king_side);
    }

    #[test]
    fn promotion_substitutes_the_chosen_piece_and_undo_restores_the_pawn() {
        let mut game = GameState::from_fen("4k3/1P6/8/8/8/8/8/4K3 w - - 0 1").expect("fen");
        let mv = Move::with_kind(sq("b7"), sq("b8"), MoveKind::Promotion);
        assert!(game.commit(mv, Some(PieceKind::Knight)));
        assert_eq!(
            game.piece_at(sq("b8")),
            Some(Piece::new(Color::White, PieceKind::Knight))
        );
        let record = game.undo().expect("undo");
        assert_eq!(record.promoted_to, Some(PieceKind::Knight));
        assert_eq!(
            game.piece_at(sq("b7")),
            Some(Piece::new(Color::White, PieceKind::Pawn))
        );
    }

    #[test]
    fn invalid_requests_are_rejected_without_mutation() {
        let mut game = GameState::new_game();
        let before = game.clone();

        assert_eq!(
            game.try_commit(Move::new(sq("e4"), sq("e5")), None),
            Err(ChessError::IllegalMove(IllegalMoveReason::EmptySquare(sq("e4"))))
        );
        assert_eq!(
            game.try_commit(Move::new(sq("e7"), sq("e6")), None),
            Err(ChessError::IllegalMove(IllegalMoveReason::WrongSideToMove))
        );
        assert!(!game.commit(Move::new(sq("e2"), sq("e5")), None));
        assert_eq!(game, before);
    }

    #[test]
    fn pawn_cannot_promote_to_a_king() {
        let mut game = GameState::from_fen("4k3/1P6/8/8/8/8/8/4K3 w - - 0 1").expect("fen");
        let before = game.clone();
        let mv = Move::with_kind(sq("b7"), sq("b8"), MoveKind::Promotion);
        assert!(!game.commit(mv, Some(PieceKind::King)));
        assert_eq!(game, before);
    }

    #[test]
    fn clocks_follow_pawn_moves_and_captures() {
        let mut game = GameState::new_game();
        play(&mut game, "g1f3");
        assert_eq!(game.halfmove_clock(), 1);
        assert_eq!(game.fullmove_number(), 1);
        play(&mut game, "b8c6");
        assert_eq!(game.halfmove_clock(), 2);
        assert_eq!(game.fullmove_number(), 2);
        play(&mut game, "e2e4");
        assert_eq!(game.halfmove_clock(), 0);
    }

    #[test]
    fn fools_mate_is_checkmate_for_black() {
        let mut game = GameState::new_game();
        for lan in ["f2f3", "e7e5", "g2g4", "d8h4"] {
            play(&mut game, lan);
        }
        assert!(game.in_check());
        assert!(game.game_over());
        assert_eq!(game.game_result(), GameResult::BlackWinsByCheckmate);
        assert_eq!(game.game_result().as_str(), "Black wins by checkmate");

        game.undo();
        assert!(!game.game_over());
        assert!(!game.in_check());
        assert_eq!(game.turn(), Color::Black);
    }

    #[test]
    fn transient_make_unmake_is_exact() {
        let mut game = GameState::from_fen("r3k2r/8/8/3pP3/8/8/8/R3K2R w KQkq d6 0 1").expect("fen");
        let before = game.clone();
        for mv in game.all_legal_moves(Color::White) {
            let undo = game.make_transient(mv).expect("piece on origin");
            assert_eq!(game.turn(), Color::Black);
            game.unmake_transient(mv, undo);
            assert_eq!(game, before, "after {mv}");
        }
    }
}

use crate::game_state::chess_types::*;
use crate::moves::move_descriptions::{Move, MoveKind};

pub fn generate_pawn_moves(game_state: &GameState, from: Square, color: Color, out: &mut Vec<Move>) {
    let board = &game_state.board;
    let dir = color.pawn_direction();
    let promotion_row = color.promotion_row();

    let step_kind = |to: Square| {
        if to.row() == promotion_row {
            MoveKind::Promotion
        } else {
            MoveKind::Normal
        }
    };

    if let Some(one_step) = from.offset(dir, 0) {
        if board.is_empty(one_step) {
            out.push(Move::with_kind(from, one_step, step_kind(one_step)));

            if from.row() == color.pawn_start_row() {
                if let Some(two_step) = one_step.offset(dir, 0) {
                    if board.is_empty(two_step) {
                        out.push(Move::with_kind(from, two_step, MoveKind::DoublePawnPush));
                    }
                }
            }
        }
    }

    // captures and en-passant
    for d_col in [-1i8, 1i8] {
        let Some(to) = from.offset(dir, d_col) else {
            continue;
        };

        match board.piece_at(to) {
            Some(target) if target.color != color => {
                out.push(Move::with_kind(from, to, step_kind(to)));
            }
            Some(_) => {}
            None => {
                if game_state.en_passant_square == Some(to)
                    && to.row() == color.en_passant_capture_row()
                {
                    out.push(Move::with_kind(from, to, MoveKind::EnPassant));
                }
            }
        }
    }
}

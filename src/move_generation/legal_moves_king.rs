use crate::game_state::chess_rules::*;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_checks::is_square_attacked;
use crate::move_generation::legal_moves_knight::generate_jump_moves;
use crate::moves::move_descriptions::{Move, MoveKind};
use crate::moves::piece_offsets::KING_OFFSETS;

pub fn generate_king_moves(game_state: &GameState, from: Square, color: Color, out: &mut Vec<Move>) {
    let board = &game_state.board;
    generate_jump_moves(board, from, color, &KING_OFFSETS, out);

    let home_row = color.home_row();
    if from != Square::at(home_row, KING_HOME_COL) {
        return;
    }
    let enemy = color.opposite();
    if is_square_attacked(board, from, enemy) {
        return;
    }

    let rights = game_state.castling_rights;
    if rights.king_side(color)
        && castle_path_clear(
            board,
            color,
            KING_SIDE_ROOK_COL,
            &KING_SIDE_EMPTY_COLS,
            &KING_SIDE_TRANSIT_COLS,
        )
    {
        out.push(Move::with_kind(
            from,
            Square::at(home_row, KING_SIDE_KING_TO_COL),
            MoveKind::CastleKingSide,
        ));
    }
    if rights.queen_side(color)
        && castle_path_clear(
            board,
            color,
            QUEEN_SIDE_ROOK_COL,
            &QUEEN_SIDE_EMPTY_COLS,
            &QUEEN_SIDE_TRANSIT_COLS,
        )
    {
        out.push(Move::with_kind(
            from,
            Square::at(home_row, QUEEN_SIDE_KING_TO_COL),
            MoveKind::CastleQueenSide,
        ));
    }
}

fn castle_path_clear(
    board: &Board,
    color: Color,
    rook_col: u8,
    empty_cols: &[u8],
    transit_cols: &[u8],
) -> bool {
    let row = color.home_row();
    let rook_home = Square::at(row, rook_col);
    if board.piece_at(rook_home) != Some(Piece::new(color, PieceKind::Rook)) {
        return false;
    }
    if !empty_cols.iter().all(|&col| board.is_empty(Square::at(row, col))) {
        return false;
    }
    let enemy = color.opposite();
    !transit_cols
        .iter()
        .any(|&col| is_square_attacked(board, Square::at(row, col), enemy))
}

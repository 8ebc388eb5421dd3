use crate::game_state::chess_types::*;
use crate::moves::move_descriptions::Move;
use crate::moves::piece_offsets::KNIGHT_OFFSETS;

pub fn generate_knight_moves(board: &Board, from: Square, color: Color, out: &mut Vec<Move>) {
    generate_jump_moves(board, from, color, &KNIGHT_OFFSETS, out);
}

/// Fixed-offset moves shared by knights and the king's ordinary steps.
pub(crate) fn generate_jump_moves(
    board: &Board,
    from: Square,
    color: Color,
    offsets: &[(i8, i8)],
    out: &mut Vec<Move>,
) {
    for &(dr, dc) in offsets {
        let Some(to) = from.offset(dr, dc) else {
            continue;
        };
        match board.piece_at(to) {
            Some(piece) if piece.color == color => {}
            _ => out.push(Move::new(from, to)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::generate_knight_moves;
    use crate::game_state::chess_types::*;

    #[test]
    fn corner_knight_has_two_targets() {
        let board = Board::empty();
        let mut out = Vec::new();
        generate_knight_moves(&board, Square::at(0, 0), Color::White, &mut out);
        assert_eq!(out.len(), 2);
    }

    #[test]
    fn friendly_pieces_block_targets() {
        let board = Board::starting();
        let mut out = Vec::new();
        generate_knight_moves(&board, Square::at(7, 1), Color::White, &mut out);
        let targets: Vec<_> = out.iter().map(|m| m.to).collect();
        assert_eq!(targets, vec![Square::at(5, 0), Square::at(5, 2)]);
    }
}

use crate::game_state::chess_types::*;
use crate::moves::move_descriptions::Move;
use crate::moves::piece_offsets::{ALL_DIRECTIONS, DIAGONAL_DIRECTIONS, ORTHOGONAL_DIRECTIONS};

#[inline]
pub fn generate_bishop_moves(board: &Board, from: Square, color: Color, out: &mut Vec<Move>) {
    generate_ray_moves(board, from, color, &DIAGONAL_DIRECTIONS, out);
}

#[inline]
pub fn generate_rook_moves(board: &Board, from: Square, color: Color, out: &mut Vec<Move>) {
    generate_ray_moves(board, from, color, &ORTHOGONAL_DIRECTIONS, out);
}

#[inline]
pub fn generate_queen_moves(board: &Board, from: Square, color: Color, out: &mut Vec<Move>) {
    generate_ray_moves(board, from, color, &ALL_DIRECTIONS, out);
}

/// Walk each ray to the edge; an own piece stops the ray before it, an enemy
/// piece is included and then stops it.
fn generate_ray_moves(
    board: &Board,
    from: Square,
    color: Color,
    directions: &[(i8, i8)],
    out: &mut Vec<Move>,
) {
    for &(dr, dc) in directions {
        let mut cursor = from.offset(dr, dc);
        while let Some(to) = cursor {
            match board.piece_at(to) {
                None => out.push(Move::new(from, to)),
                Some(piece) => {
                    if piece.color != color {
                        out.push(Move::new(from, to));
                    }
                    break;
                }
            }
            cursor = to.offset(dr, dc);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn queen_in_open_center_sees_27_squares() {
        let board = Board::empty();
        let mut out = Vec::new();
        generate_queen_moves(&board, Square::at(4, 3), Color::White, &mut out);
        assert_eq!(out.len(), 27);
    }

    #[test]
    fn rook_captures_enemy_and_stops() {
        let mut board = Board::empty();
        board.set(Square::at(4, 0), Some(Piece::new(Color::White, PieceKind::Rook)));
        board.set(Square::at(4, 2), Some(Piece::new(Color::Black, PieceKind::Knight)));
        board.set(Square::at(2, 0), Some(Piece::new(Color::White, PieceKind::Pawn)));

        let mut out = Vec::new();
        generate_rook_moves(&board, Square::at(4, 0), Color::White, &mut out);
        let mut targets: Vec<_> = out.iter().map(|m| m.to).collect();
        targets.sort();
        assert_eq!(
            targets,
            vec![
                Square::at(3, 0),
                Square::at(4, 1),
                Square::at(4, 2),
                Square::at(5, 0),
                Square::at(6, 0),
                Square::at(7, 0),
            ]
        );
    }

    #[test]
    fn bishops_are_blocked_at_the_start() {
        let board = Board::starting();
        let mut out = Vec::new();
        generate_bishop_moves(&board, Square::at(7, 2), Color::White, &mut out);
        assert!(out.is_empty());
    }
}

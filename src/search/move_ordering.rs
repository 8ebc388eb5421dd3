//! Capture-first move ordering for alpha-beta.
//!
//! Captures are ranked most-valuable-victim, least-valuable-attacker; quiet
//! moves keep their generation order behind them.

use std::cmp::Reverse;

use crate::game_state::chess_types::*;
use crate::moves::move_descriptions::{Move, MoveKind};
use crate::search::board_scoring::piece_value;

/// Sort key: larger is searched earlier.
pub fn ordering_score(board: &Board, mv: Move) -> i32 {
    let victim = match mv.kind {
        MoveKind::EnPassant => Some(PieceKind::Pawn),
        _ => board.piece_at(mv.to).map(|p| p.kind),
    };
    let Some(victim) = victim else {
        return i32::MIN;
    };
    let attacker = board.piece_at(mv.from).map_or(0, |p| piece_value(p.kind));
    piece_value(victim) * 100 - attacker
}

/// Stable: equal keys keep their relative order.
pub fn order_moves(board: &Board, moves: &mut [Move]) {
    moves.sort_by_cached_key(|&mv| Reverse(ordering_score(board, mv)));
}

//! Leaf-node counting over the transient make/unmake path, used to check the
//! move generator against published node counts.
//!
//! Promotions are a single move here (the piece is chosen at commit time), so
//! counts only match the published tables for positions and depths without
//! promotions.

use crate::game_state::chess_types::GameState;
use crate::move_generation::scoped_move::ScopedMove;
use crate::moves::move_descriptions::Move;

pub fn perft(game_state: &mut GameState, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = game_state.all_legal_moves(game_state.turn());
    if depth == 1 {
        return moves.len() as u64;
    }

    let mut nodes = 0;
    for mv in moves {
        if let Some(mut child) = ScopedMove::make(game_state, mv) {
            nodes += perft(&mut child, depth - 1);
        }
    }
    nodes
}

/// Node count below each root move.
pub fn perft_divide(game_state: &mut GameState, depth: u8) -> Vec<(Move, u64)> {
    let moves = game_state.all_legal_moves(game_state.turn());
    let mut out = Vec::with_capacity(moves.len());
    for mv in moves {
        if let Some(mut child) = ScopedMove::make(game_state, mv) {
            out.push((mv, perft(&mut child, depth.saturating_sub(1))));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::{perft, perft_divide};
    use crate::game_state::chess_types::GameState;

    #[test]
    fn start_position_counts() {
        let mut game = GameState::new_game();
        let before = game.clone();
        assert_eq!(perft(&mut game, 1), 20);
        assert_eq!(perft(&mut game, 2), 400);
        assert_eq!(perft(&mut game, 3), 8902);
        assert_eq!(game, before);
    }

    #[test]
    fn kiwipete_counts() {
        let mut game = GameState::from_fen(
            "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
        )
        .expect("fen");
        assert_eq!(perft(&mut game, 1), 48);
        assert_eq!(perft(&mut game, 2), 2039);
    }

    #[test]
    fn rook_endgame_counts() {
        let mut game = GameState::from_fen("8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1").expect("fen");
        assert_eq!(perft(&mut game, 1), 14);
        assert_eq!(perft(&mut game, 2), 191);
        assert_eq!(perft(&mut game, 3), 2812);
    }

    #[test]
    fn divide_sums_to_perft() {
        let mut game = GameState::new_game();
        let divided = perft_divide(&mut game, 2);
        assert_eq!(divided.len(), 20);
        assert_eq!(divided.iter().map(|(_, n)| n).sum::<u64>(), 400);
    }
}

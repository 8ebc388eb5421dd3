//! End-to-end checks of the rules engine and AI through the public API.

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;

use chessbuds_core::engines::chess_ai::ChessAi;
use chessbuds_core::engines::engine_trait::SearchConfig;
use chessbuds_core::game_state::chess_types::*;
use chessbuds_core::search::minimax::{MinimaxSearch, SCORE_INFINITY};
use chessbuds_core::utils::algebraic::algebraic_to_square;

fn sq(name: &str) -> Square {
    algebraic_to_square(name).expect("valid square")
}

fn play(game: &mut GameState, moves: &[&str]) {
    for lan in moves {
        let (mv, promo) = game.move_from_lan(lan).expect("legal");
        assert!(game.commit(mv, promo), "{lan}");
    }
}

#[test]
fn commit_then_undo_restores_every_reachable_state_on_random_walks() {
    let mut rng = StdRng::seed_from_u64(2024);
    for _ in 0..4 {
        let mut game = GameState::new_game();
        for _ in 0..60 {
            if game.game_over() {
                break;
            }
            let mover = game.turn();
            let moves = game.all_legal_moves(mover);
            for &mv in &moves {
                let before = game.clone();
                assert!(game.commit(mv, None), "{mv}");
                assert!(!game.is_in_check(mover), "{mv} left the king in check");
                let record = game.undo().expect("journal entry");
                assert_eq!(record.mv, mv);
                assert_eq!(game, before, "undo of {mv} did not restore the state");
            }
            let &mv = moves.choose(&mut rng).expect("non-terminal position has moves");
            assert!(game.commit(mv, None));
        }
    }
}

#[test]
fn twenty_moves_for_white_from_the_start() {
    let game = GameState::new_game();
    assert_eq!(game.all_legal_moves(Color::White).len(), 20);
}

#[test]
fn castling_rights_survive_an_open_game_start() {
    let mut game = GameState::new_game();
    play(&mut game, &["e2e4", "e7e5", "g1f3"]);
    assert!(!game.is_attacked_by(sq("e1"), Color::Black));
    let rights = game.castling_rights();
    assert!(rights.king_side(Color::White));
    assert!(rights.queen_side(Color::White));
}

#[test]
fn en_passant_removes_the_passed_pawn() {
    let mut game = GameState::new_game();
    play(&mut game, &["e2e4", "a7a6", "e4e5", "d7d5"]);
    assert_eq!(game.en_passant_square(), Some(sq("d6")));

    play(&mut game, &["e5d6"]);
    assert_eq!(game.piece_at(sq("d5")), None);
    assert_eq!(game.piece_at(sq("d6")), Some(Piece::new(Color::White, PieceKind::Pawn)));
    assert_eq!(game.captured_pieces(Color::Black), &[PieceKind::Pawn]);
}

#[test]
fn stalemate_is_reported_after_the_final_commit() {
    let mut game = GameState::from_fen("k7/8/1K6/8/8/8/8/2Q5 w - - 0 1").expect("fen");
    assert_eq!(game.game_result(), GameResult::Ongoing);
    play(&mut game, &["c1c7"]);
    assert!(game.game_over());
    assert!(!game.in_check());
    assert_eq!(game.game_result().as_str(), "Draw by stalemate");
}

#[test]
fn minimax_is_repeatable_on_an_unmodified_state() {
    let mut game = GameState::new_game();
    play(&mut game, &["d2d4", "g8f6", "c2c4", "e7e6"]);
    let before = game.clone();
    let mut search = MinimaxSearch::new();
    let first = search.minimax(&mut game, 3, -SCORE_INFINITY, SCORE_INFINITY, true);
    let second = search.minimax(&mut game, 3, -SCORE_INFINITY, SCORE_INFINITY, true);
    assert_eq!(first, second);
    assert_eq!(game, before);
}

#[test]
fn ai_moves_are_always_legal_in_self_play() {
    let mut white = ChessAi::with_rng(StdRng::seed_from_u64(1));
    let mut black = ChessAi::with_rng(StdRng::seed_from_u64(2)).with_config(SearchConfig {
        depth: 1,
        ..SearchConfig::default()
    });
    let mut game = GameState::new_game();
    for _ in 0..30 {
        if game.game_over() {
            break;
        }
        let color = game.turn();
        let legal = game.all_legal_moves(color);
        let ai = match color {
            Color::White => &mut white,
            Color::Black => &mut black,
        };
        let depth = ai.config().depth;
        let before = game.clone();
        let mv = ai.get_best_move(&mut game, depth, color).expect("move");
        assert_eq!(game, before);
        assert!(legal.contains(&mv), "{mv} is not legal here");
        assert!(game.commit(mv, None));
    }
}

//! Crate root module declarations for the Chessbuds rules engine and AI.
//!
//! Exposes the game state, move generation, evaluation and search, the
//! engines built on top of them, and notation/rendering helpers so binaries,
//! tests, and front ends can import stable module paths.

pub mod errors;

pub mod game_state {
    pub mod board;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_state;
    pub mod undo_state;
}

pub mod moves {
    pub mod move_descriptions;
    pub mod piece_offsets;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod legal_moves_king;
    pub mod legal_moves_knight;
    pub mod legal_moves_pawn;
    pub mod legal_moves_sliders;
    pub mod perft;
    pub mod scoped_move;
}

pub mod search {
    pub mod board_scoring;
    pub mod minimax;
    pub mod move_ordering;
}

pub mod tables {
    pub mod opening_book;
    pub mod piece_square_tables;
}

pub mod engines {
    pub mod chess_ai;
    pub mod engine_random;
    pub mod engine_trait;
}

pub mod utils {
    pub mod algebraic;
    pub mod fen_generator;
    pub mod fen_parser;
    pub mod game_summary;
    pub mod long_algebraic;
    pub mod render_game_state;
}

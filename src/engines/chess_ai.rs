//! The computer opponent: opening book first, then a fixed-depth minimax
//! search with a small random pick among near-equal root moves.

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

use crate::engines::engine_trait::{clamp_depth, Engine, EngineOutput, SearchConfig};
use crate::game_state::chess_types::*;
use crate::moves::move_descriptions::Move;
use crate::search::minimax::{MinimaxSearch, ScoredMove, MAX_SEARCH_DEPTH};
use crate::tables::opening_book::OpeningBook;

pub struct ChessAi<R = StdRng> {
    config: SearchConfig,
    search: MinimaxSearch,
    book: &'static OpeningBook,
    rng: R,
}

impl ChessAi<StdRng> {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }
}

impl Default for ChessAi<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> ChessAi<R> {
    pub fn with_rng(rng: R) -> Self {
        Self {
            config: SearchConfig::default(),
            search: MinimaxSearch::new(),
            book: OpeningBook::standard(),
            rng,
        }
    }

    pub fn with_config(mut self, config: SearchConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_book(mut self, book: &'static OpeningBook) -> Self {
        self.book = book;
        self
    }

    pub fn config(&self) -> SearchConfig {
        self.config
    }

    /// Nodes visited by the most recent search.
    pub fn nodes_searched(&self) -> u64 {
        self.search.nodes_searched()
    }

    /// White-side static score of the current board.
    pub fn evaluate(&self, game_state: &GameState) -> i32 {
        game_state.evaluate()
    }

    /// See [`MinimaxSearch::minimax`]. `game_state` is restored before return.
    pub fn minimax(
        &mut self,
        game_state: &mut GameState,
        depth: u32,
        alpha: i32,
        beta: i32,
        maximizing: bool,
    ) -> i32 {
        let depth = depth.min(MAX_SEARCH_DEPTH);
        self.search.minimax(game_state, depth, alpha, beta, maximizing)
    }

    /// A book reply for the played move sequence, if the game began from the
    /// standard position and the book lists one that is legal here.
    pub fn get_book_move(&mut self, game_state: &GameState, color: Color) -> Option<Move> {
        if !self.config.use_book || !game_state.from_initial_position() || color != game_state.turn() {
            return None;
        }

        let key = OpeningBook::history_key(game_state.move_history());
        let token = self.book.choose_candidate(&key, &mut self.rng)?;
        let found = game_state
            .all_legal_moves(color)
            .into_iter()
            .find(|mv| mv.book_token() == token);

        match found {
            Some(_) => debug!(%key, %token, "book move"),
            None => debug!(%key, %token, "book entry not legal here, falling back to search"),
        }
        found
    }

    /// Book move if available, otherwise the search's choice for `color`.
    /// `None` only when `color` has no legal moves.
    pub fn get_best_move(&mut self, game_state: &mut GameState, depth: u32, color: Color) -> Option<Move> {
        self.decide(game_state, depth, color).best_move
    }

    fn decide(&mut self, game_state: &mut GameState, depth: u32, color: Color) -> EngineOutput {
        self.search.reset_nodes();
        if let Some(mv) = self.get_book_move(game_state, color) {
            return EngineOutput {
                best_move: Some(mv),
                from_book: true,
                ..EngineOutput::default()
            };
        }

        let depth = clamp_depth(depth);
        let mut scored = self.search.score_root_moves(game_state, depth, color);
        let maximizing = color == Color::White;
        // Stable, so ties keep capture-first order.
        scored.sort_by(|a, b| {
            if maximizing {
                b.score.cmp(&a.score)
            } else {
                a.score.cmp(&b.score)
            }
        });

        let Some(best) = scored.first().map(|s| s.score) else {
            debug!(?color, "no legal moves");
            return EngineOutput::default();
        };
        let tolerance = self.config.tolerance_cp;
        let window: Vec<ScoredMove> = scored
            .iter()
            .copied()
            .take_while(|s| (s.score - best).abs() <= tolerance)
            .collect();
        let chosen = window.choose(&mut self.rng).copied();

        let nodes = self.search.nodes_searched();
        info!(
            ?color,
            depth,
            nodes,
            best,
            candidates = window.len(),
            chosen = ?chosen.map(|s| s.mv.to_lan(None)),
            "search finished"
        );
        EngineOutput {
            best_move: chosen.map(|s| s.mv),
            score: chosen.map(|s| s.score),
            from_book: false,
            nodes_searched: nodes,
        }
    }
}

impl<R: Rng> Engine for ChessAi<R> {
    fn name(&self) -> &str {
        "Minimax"
    }

    fn choose_move(&mut self, game_state: &mut GameState, color: Color) -> EngineOutput {
        let depth = self.config.depth;
        self.decide(game_state, depth, color)
    }
}
